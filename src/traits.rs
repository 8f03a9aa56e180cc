//! Common vocabulary for the heap
//!
//! This module provides:
//!
//! - [`Compare`]: the ordering strategy a heap is parameterized over
//! - [`Less`] and [`Greater`]: stock strategies for `Ord` types
//! - [`HeapError`]: the failures a heap operation can report
//!
//! A strategy answers a single question: does `a` have priority over `b`?
//! The element that has priority over every other element is the one
//! returned by [`MaryHeap::top`](crate::mary::MaryHeap::top). Plain closures
//! and functions of shape `Fn(&T, &T) -> bool` are strategies too.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested arity is below 2 (or not representable as an arity)
    InvalidArgument,
    /// `top` or `pop` was called on an empty heap
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument => {
                write!(f, "heap arity must be at least 2")
            }
            HeapError::Underflow => {
                write!(f, "heap is empty")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A strict "has priority over" predicate
///
/// `has_priority(a, b)` returns true when `a` must sit above `b` in the heap.
/// Implementations must behave like a strict weak ordering: irreflexive and
/// transitive. Two elements where neither has priority over the other are
/// treated as equals and may come out in any order.
///
/// # Example
///
/// ```rust
/// use mary_heap::{Compare, Greater, Less};
///
/// assert!(Less.has_priority(&1, &2));
/// assert!(Greater.has_priority(&2, &1));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.has_priority(&"ab", &"abc"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has priority over `b`
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smaller values have priority: a min-heap
///
/// This is the default strategy of [`MaryHeap`](crate::mary::MaryHeap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Larger values have priority: a max-heap
///
/// Behaves like `std::collections::BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_abs(a: &i32, b: &i32) -> bool {
        a.abs() < b.abs()
    }

    #[test]
    fn test_stock_strategies_are_strict() {
        assert!(Less.has_priority(&1, &2));
        assert!(!Less.has_priority(&2, &1));
        assert!(!Less.has_priority(&2, &2));

        assert!(Greater.has_priority(&2, &1));
        assert!(!Greater.has_priority(&1, &2));
        assert!(!Greater.has_priority(&2, &2));
    }

    #[test]
    fn test_unsized_values() {
        assert!(Less.has_priority("apple", "banana"));
        assert!(Greater.has_priority("banana", "apple"));
    }

    #[test]
    fn test_functions_and_closures() {
        assert!(by_abs.has_priority(&-1, &3));
        assert!(!by_abs.has_priority(&-3, &1));

        let threshold = 10;
        let near = move |a: &i32, b: &i32| (a - threshold).abs() < (b - threshold).abs();
        assert!(near.has_priority(&9, &1));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeapError::InvalidArgument.to_string(),
            "heap arity must be at least 2"
        );
        assert_eq!(HeapError::Underflow.to_string(), "heap is empty");
    }
}
