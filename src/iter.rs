//! Sorted iteration over a [`Tree`].

use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// A lazy, in-order iterator over the elements of a [`Tree`], smallest first.
///
/// Created by [`Tree::iter`]. It holds the path from the current element back up to the nearest
/// ancestor still to be visited, so it needs `O(height)` extra space.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

// Manual impl so `T` doesn't need to be `Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and its chain of left children, leaving the smallest on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T, C> Tree<T, C> {
    /// Iterates over the elements in ascending order (as defined by the tree's comparator).
    /// Calling this again starts a fresh pass from the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.iter().eq(&[1, 3, 4, 5, 7, 8, 9]));
    /// assert_eq!(tree.iter().len(), 7);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len())
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
