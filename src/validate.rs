//! Checks that a tree actually satisfies the BST invariant.
//!
//! A tree built through [`Tree::insert`] and [`Tree::remove`] with a well behaved comparator is
//! always valid. A comparator that changes its mind (or isn't a total order) can leave nodes on
//! the wrong side of an ancestor, which is what these checks look for. Each [`Order`] checks the
//! same property with a different walk:
//!
//! * [`Order::PreOrder`] pushes an open `(low, high)` interval down from the root and checks
//!   that every node lies inside the interval its ancestors allow.
//! * [`Order::InOrder`] walks the tree in sorted order and checks each element is strictly
//!   greater than the one before it.
//! * [`Order::PostOrder`] summarizes every subtree by its smallest and largest element and checks
//!   each node sits strictly between its left subtree's largest and its right subtree's
//!   smallest element.
//!
//! All three compare a node against all of its ancestors, not only its parent.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::compare::Comparator;
use crate::error::TreeError;
use crate::tree::{Node, Tree};

/// The order a validation walk visits nodes in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl Order {
    /// Every order, in selector order.
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InOrder => "in-order",
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
        })
    }
}

/// Numeric selectors: 0 is in-order, 1 is pre-order and 2 is post-order.
impl TryFrom<u8> for Order {
    type Error = TreeError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Self::InOrder),
            1 => Ok(Self::PreOrder),
            2 => Ok(Self::PostOrder),
            other => Err(TreeError::InvalidOrder(other.to_string())),
        }
    }
}

impl FromStr for Order {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in-order" | "inorder" | "in_order" => Ok(Self::InOrder),
            "pre-order" | "preorder" | "pre_order" => Ok(Self::PreOrder),
            "post-order" | "postorder" | "post_order" => Ok(Self::PostOrder),
            _ => Err(TreeError::InvalidOrder(s.to_owned())),
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Whether every node is ordered correctly with respect to all of its ancestors, checked by
    /// walking the tree in `order`. An empty tree is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(Order::ALL.iter().all(|order| tree.validate(*order)));
    /// ```
    pub fn validate(&self, order: Order) -> bool {
        let root = self.root();
        let valid = match order {
            Order::PreOrder => within_bounds(root, None, None, self.comparator()),
            Order::InOrder => strictly_increasing(root, &mut None, self.comparator()),
            Order::PostOrder => !matches!(summarize(root, self.comparator()), Summary::Invalid),
        };

        if valid {
            debug!("{order} check: the tree is a valid binary search tree");
        } else {
            warn!("{order} check: the tree is not a valid binary search tree");
        }
        valid
    }

    /// Like [`validate`][Self::validate] but takes a numeric selector (see
    /// [`Order`]'s `TryFrom<u8>`). An unknown selector fails the check.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.validate_selector(0));
    /// assert!(!tree.validate_selector(3));
    /// ```
    pub fn validate_selector(&self, selector: u8) -> bool {
        match Order::try_from(selector) {
            Ok(order) => self.validate(order),
            Err(err) => {
                warn!("not validating: {err}");
                false
            }
        }
    }
}

/// Pre-order walk: `node` must lie strictly inside `(low, high)`, where `None` is unbounded.
fn within_bounds<T, C>(
    node: Option<&Node<T>>,
    low: Option<&T>,
    high: Option<&T>,
    cmp: &C,
) -> bool
where
    C: Comparator<T>,
{
    let Some(node) = node else {
        return true;
    };
    let value = &node.value;

    low.map_or(true, |low| cmp.compare(low, value) == Ordering::Less)
        && high.map_or(true, |high| cmp.compare(value, high) == Ordering::Less)
        && within_bounds(node.left(), low, Some(value), cmp)
        && within_bounds(node.right(), Some(value), high, cmp)
}

/// In-order walk: every element must be strictly greater than `previous`, the last element
/// visited.
fn strictly_increasing<'a, T, C>(
    node: Option<&'a Node<T>>,
    previous: &mut Option<&'a T>,
    cmp: &C,
) -> bool
where
    C: Comparator<T>,
{
    let Some(node) = node else {
        return true;
    };
    if !strictly_increasing(node.left(), previous, cmp) {
        return false;
    }

    if let Some(previous) = *previous {
        if cmp.compare(previous, &node.value) != Ordering::Less {
            return false;
        }
    }
    *previous = Some(&node.value);

    strictly_increasing(node.right(), previous, cmp)
}

/// What a post-order walk knows about a subtree once it's been visited.
enum Summary<'a, T> {
    /// No nodes at all.
    Empty,
    /// A valid subtree spanning `min..=max`.
    Range { min: &'a T, max: &'a T },
    /// Somewhere in the subtree a node is on the wrong side of an ancestor.
    Invalid,
}

/// Post-order walk: summarize both children, then check this node sits between them.
fn summarize<'a, T, C>(node: Option<&'a Node<T>>, cmp: &C) -> Summary<'a, T>
where
    C: Comparator<T>,
{
    let Some(node) = node else {
        return Summary::Empty;
    };
    let left = summarize(node.left(), cmp);
    let right = summarize(node.right(), cmp);
    let value = &node.value;

    let min = match left {
        Summary::Empty => value,
        Summary::Range { min, max } if cmp.compare(max, value) == Ordering::Less => min,
        Summary::Range { .. } | Summary::Invalid => return Summary::Invalid,
    };
    let max = match right {
        Summary::Empty => value,
        Summary::Range { min, max } if cmp.compare(value, min) == Ordering::Less => max,
        Summary::Range { .. } | Summary::Invalid => return Summary::Invalid,
    };

    Summary::Range { min, max }
}
