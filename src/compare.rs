//! Orderings a [`Tree`][crate::Tree] can be built with.
//!
//! The tree never looks at its elements directly. Every decision (go left, go right, stop) is
//! delegated to a [`Comparator`], which makes it possible to order elements that don't implement
//! [`Ord`] or to order the same element type in several ways.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::compare::{Comparator, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> Ordering` is a comparator too.
//! let by_magnitude = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//! assert_eq!(by_magnitude.compare(&-3, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent (the same pair always compares the same way), transitive
/// and antisymmetric. The tree relies on this but never checks it; an inconsistent comparator
/// produces a tree that [`validate`][crate::Tree::validate] will reject.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the ordering of the wrapped comparator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(
    /// The comparator being flipped.
    pub C,
);

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
