//! Read-only queries over the shape and order of a [`Tree`]: extremes, depths and order
//! statistics. None of these need the comparator since the order is already encoded in where the
//! nodes sit.

use crate::tree::{Node, Tree};

/// Depth reported by [`Tree::max_depth`] and [`Tree::min_depth`] for an empty tree. A tree with
/// only a root has depth 1, so this can't be mistaken for a real depth.
pub const EMPTY_DEPTH: isize = -1;

impl<T, C> Tree<T, C> {
    /// The smallest element, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&3));
    /// assert_eq!(Tree::<i32>::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// The number of nodes on the longest path from the root to a leaf, or [`EMPTY_DEPTH`] for an
    /// empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{Tree, EMPTY_DEPTH};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max_depth(), EMPTY_DEPTH);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.max_depth(), 1);
    ///
    /// tree.extend([1, 3, 4]);
    /// assert_eq!(tree.max_depth(), 3);
    /// ```
    pub fn max_depth(&self) -> isize {
        match self.root() {
            Some(root) => max_depth(Some(root)) as isize,
            None => EMPTY_DEPTH,
        }
    }

    /// The number of nodes on the shortest path from the root to a leaf, or [`EMPTY_DEPTH`] for
    /// an empty tree. A node with a single child is not a leaf, so the path always continues
    /// through that child.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// // 1 -> 2 -> 3 is a single path, the missing children don't count.
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.min_depth(), 3);
    /// ```
    pub fn min_depth(&self) -> isize {
        match self.root() {
            Some(root) => min_depth(Some(root)) as isize,
            None => EMPTY_DEPTH,
        }
    }

    /// The `k`th smallest element, counting from 1. Returns `None` when `k` is 0 or larger than
    /// the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_smallest(1), Some(&1));
    /// assert_eq!(tree.kth_smallest(3), Some(&4));
    /// assert_eq!(tree.kth_smallest(0), None);
    /// assert_eq!(tree.kth_smallest(8), None);
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Option<&T> {
        if k == 0 || k > self.len() {
            return None;
        }
        let mut remaining = k;
        kth(self.root(), &mut remaining)
    }
}

/// Depth of the subtree; an empty subtree has depth 0.
fn max_depth<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| 1 + max_depth(n.left()).max(max_depth(n.right())))
}

fn min_depth<T>(node: Option<&Node<T>>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let left = min_depth(node.left()) + 1;
    let right = min_depth(node.right()) + 1;

    // A side of depth 1 here is a missing child, not a leaf.
    if left.min(right) == 1 {
        left.max(right)
    } else {
        left.min(right)
    }
}

/// In-order walk that counts `remaining` down and stops at the node that brings it to zero.
fn kth<'a, T>(node: Option<&'a Node<T>>, remaining: &mut usize) -> Option<&'a T> {
    let node = node?;
    if let Some(found) = kth(node.left(), remaining) {
        return Some(found);
    }

    *remaining -= 1;
    if *remaining == 0 {
        return Some(&node.value);
    }
    kth(node.right(), remaining)
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;

    quickcheck::quickcheck! {
        fn kth_smallest_matches_sorted(xs: Vec<i8>, removes: Vec<i8>) -> bool {
            let mut tree: Tree<_> = xs.iter().copied().collect();
            let mut set: BTreeSet<_> = xs.into_iter().collect();
            for x in &removes {
                tree.remove(x);
                set.remove(x);
            }

            set.iter().enumerate().all(|(i, x)| tree.kth_smallest(i + 1) == Some(x))
                && tree.kth_smallest(0).is_none()
                && tree.kth_smallest(set.len() + 1).is_none()
        }
    }

    quickcheck::quickcheck! {
        fn extremes_match_sorted(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let set: BTreeSet<_> = xs.into_iter().collect();

            tree.min() == set.iter().next() && tree.max() == set.iter().next_back()
        }
    }

    quickcheck::quickcheck! {
        fn min_depth_never_exceeds_max_depth(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();

            tree.min_depth() <= tree.max_depth()
                && (tree.is_empty() == (tree.max_depth() == EMPTY_DEPTH))
        }
    }
}
