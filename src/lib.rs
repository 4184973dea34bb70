//! This crate exposes an owned, unbalanced Binary Search Tree (BST) whose order is supplied by
//! the caller.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is defined as the longest path from the root
//! `Node` to a leaf `Node`). This tree does no rebalancing so its height depends entirely on the
//! order of inserts: sorted input gives a tree as tall as it has elements.
//!
//! ## Ordering
//!
//! "Less" and "greater" are decided by a [`Comparator`]. [`Tree::new`] uses the element's
//! [`Ord`] implementation; [`Tree::with_comparator`] and [`Builder`] take any comparator,
//! including plain closures. Elements the comparator considers equal are duplicates, and only
//! the first one inserted is kept.
//!
//! ## Example
//!
//! ```
//! use cmp_bst::{Order, Tree};
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert!(tree.iter().eq(&[1, 3, 4, 5, 7, 8, 9]));
//! assert_eq!(tree.kth_smallest(3), Some(&4));
//! assert_eq!(tree.max_depth(), 3);
//!
//! // 5 has two children, so its successor (7) takes its place.
//! assert!(tree.remove(&5));
//! assert!(!tree.search(&5));
//! assert!(tree.validate(Order::InOrder));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod builder;
pub mod compare;
mod error;
mod iter;
mod query;
mod tree;
mod validate;

pub use builder::Builder;
pub use compare::{Comparator, NaturalOrder, Reversed};
pub use error::TreeError;
pub use iter::Iter;
pub use query::EMPTY_DEPTH;
pub use tree::Tree;
pub use validate::Order;
