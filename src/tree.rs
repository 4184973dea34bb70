//! An owned BST. Every `Node` exclusively owns its children through a `Box`, so there are no
//! parent pointers and no `unsafe`. Nothing is rebalanced: the shape of the tree is entirely
//! determined by the order of inserts and removals.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Taking an element hands it back.
//! assert_eq!(tree.take(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::num::NonZeroUsize;

use log::{trace, warn};

use crate::compare::{Comparator, NaturalOrder};
use crate::error::TreeError;

/// An owning pointer to a subtree. `None` is the empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The element size a tree reports when none was configured: the size of `T`, or 1 for
/// zero-sized types.
pub(crate) fn default_element_size<T>() -> NonZeroUsize {
    NonZeroUsize::new(mem::size_of::<T>()).unwrap_or(NonZeroUsize::MIN)
}

/// A Binary Search Tree ordered by the comparator `C`. This can be used for inserting,
/// searching, and removing elements. Elements are unique with respect to `C`: inserting an
/// element that compares equal to a stored one is rejected.
///
/// `Tree` has no internal synchronization. Mutation takes `&mut self`, so there is a single
/// writer at a time; sharing a tree between threads needs an external lock.
///
/// Allocation failure while inserting follows the global allocator's policy, which aborts the
/// process. An insert is therefore either complete or never observed.
pub struct Tree<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    element_size: NonZeroUsize,
    comparator: C,
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.release();
    }
}

// TODO stack based Clone
impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            element_size: self.element_size,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("element_size", &self.element_size)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `comparator`. The element size is the size of
    /// `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{Reversed, NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::with_comparator(Reversed(NaturalOrder));
    /// tree.extend([1, 2, 3]);
    ///
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            element_size: default_element_size::<T>(),
            comparator,
        }
    }

    /// Generates a new, empty `Tree` with an explicit element size. Fails if `element_size` is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{NaturalOrder, Tree, TreeError};
    ///
    /// let tree = Tree::<u32, _>::create(4, NaturalOrder).unwrap();
    /// assert_eq!(tree.element_size(), 4);
    ///
    /// let err = Tree::<u32, _>::create(0, NaturalOrder).unwrap_err();
    /// assert_eq!(err, TreeError::ZeroElementSize);
    /// ```
    pub fn create(element_size: usize, comparator: C) -> Result<Self, TreeError> {
        let Some(element_size) = NonZeroUsize::new(element_size) else {
            warn!("refusing to create a tree with a zero element size");
            return Err(TreeError::ZeroElementSize);
        };
        Ok(Self {
            root: None,
            len: 0,
            element_size,
            comparator,
        })
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The size in bytes of one element, as configured at creation. Informational only.
    pub fn element_size(&self) -> usize {
        self.element_size.get()
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.release();
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Builds a tree around an already linked root without checking the ordering. Used to hand
    /// the validators deliberately broken trees.
    #[cfg(test)]
    pub(crate) fn from_root(root: Link<T>, comparator: C) -> Self {
        let mut tree = Self::with_comparator(comparator);
        fn count<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
        }
        tree.len = count(root.as_deref());
        tree.root = root;
        tree
    }

    /// Releases every node. Children are detached from a node before that node is dropped, and
    /// the walk uses an explicit stack so a degenerate (list shaped) tree can't overflow the call
    /// stack.
    fn release(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `value` into the tree. Returns `false`, dropping `value`, if an equal element is
    /// already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).is_ok()
    }

    /// Inserts `value` into the tree. If an equal element is already stored the tree is left
    /// untouched and `value` is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let by_first = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
    /// let mut tree = Tree::with_comparator(by_first);
    ///
    /// assert_eq!(tree.try_insert((1, 'a')), Ok(()));
    /// assert_eq!(tree.try_insert((1, 'b')), Err((1, 'b')));
    /// assert_eq!(tree.get(&(1, '?')), Some(&(1, 'a')));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), T> {
        let mut link = &mut self.root;
        loop {
            match link {
                Some(node) => {
                    link = match self.comparator.compare(&value, &node.value) {
                        Ordering::Less => &mut node.left,
                        Ordering::Greater => &mut node.right,
                        Ordering::Equal => {
                            trace!("rejected duplicate element");
                            return Err(value);
                        }
                    };
                }
                None => {
                    *link = Some(Node::new_boxed(value));
                    self.len += 1;
                    trace!("inserted element, len = {}", self.len);
                    return Ok(());
                }
            }
        }
    }

    /// Whether an element equal to `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Potentially finds the stored element equal to `key`. If no element compares equal, `None`
    /// is returned.
    pub fn get(&self, key: &T) -> Option<&T> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match self.comparator.compare(key, &node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Removes the element equal to `key`. Returns `false` and leaves the tree untouched if there
    /// is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes the element equal to `key` from the tree and returns it. If the tree does not
    /// contain such an element, nothing happens.
    ///
    /// A node with two children is replaced by its in-order successor: the successor's element
    /// moves into the node and the successor's own node is unlinked from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&5), Some(5));
    /// assert_eq!(tree.take(&5), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 7, 8, 9]);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        let removed = Node::take(&mut self.root, key, &self.comparator);
        if removed.is_some() {
            self.len -= 1;
            trace!("removed element, len = {}", self.len);
        }
        removed
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A `Node` owns one element and up to two children.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Removes the element equal to `key` from the subtree behind `link`, rewiring `link` when
    /// the node it points at is the one going away.
    fn take<C>(link: &mut Link<T>, key: &T, comparator: &C) -> Option<T>
    where
        C: Comparator<T>,
    {
        let node = link.as_mut()?;
        match comparator.compare(key, &node.value) {
            Ordering::Less => Self::take(&mut node.left, key, comparator),
            Ordering::Greater => Self::take(&mut node.right, key, comparator),
            Ordering::Equal => {
                // Two children: pull the successor up. Its node has no left child so unlinking
                // it only ever splices in its right subtree.
                if node.left.is_some() {
                    if let Some(successor) = Self::take_min(&mut node.right) {
                        return Some(mem::replace(&mut node.value, successor));
                    }
                }

                // At most one child, which takes this node's place.
                let mut removed = link.take()?;
                *link = removed.left.take().or_else(|| removed.right.take());
                Some(removed.value)
            }
        }
    }

    /// Removes the smallest element of the subtree behind `link`.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }

        let mut removed = link.take()?;
        *link = removed.right.take();
        Some(removed.value)
    }
}

/// Builds a linked subtree for tests that need a specific (possibly invalid) shape.
#[cfg(test)]
pub(crate) fn link<T>(value: T, left: Link<T>, right: Link<T>) -> Link<T> {
    Some(Box::new(Node { value, left, right }))
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of elements in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
                }
                Op::Remove(x) => {
                    assert_eq!(bst.take(x), set.take(x));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            (i8::MIN..=i8::MAX).all(|x| tree.search(&x) == set.contains(&x))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.search(x))
        }
    }

    quickcheck::quickcheck! {
        fn len_counts_distinct(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let distinct: BTreeSet<_> = xs.into_iter().collect();

            tree.len() == distinct.len()
        }
    }
}
