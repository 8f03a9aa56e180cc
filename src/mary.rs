//! m-ary heap implementation
//!
//! An array-backed heap whose implicit tree has a branching factor chosen at
//! construction time. The element order is decided by an injected
//! [`Compare`] strategy instead of `Ord`, so the same structure serves as a
//! min-heap, a max-heap or a scheduler keyed on any field.
//!
//! The tree is stored in level order: the root sits at index 0, the children
//! of node `i` at `i*m + 1 ..= i*m + m` and the parent of node `i > 0` at
//! `(i - 1) / m`.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity       |
//! |------------|------------------|
//! | `push`     | O(log_m n)       |
//! | `pop`      | O(m · log_m n)   |
//! | `top`      | O(1)             |
//! | `from_vec` | O(n)             |
//!
//! A larger arity gives a shallower tree, which makes `push` cheaper, but every
//! level of a `pop` has to scan up to `m` children.
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{Less, MaryHeap};
//!
//! let mut heap = MaryHeap::new(3, Less).unwrap();
//! for value in [5, 1, 9, 3, 7] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.top(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.len(), 3);
//! ```

use std::fmt;
use std::slice;

use log::{debug, trace};

use crate::traits::{Compare, HeapError, Less};

/// An m-ary heap ordered by a [`Compare`] strategy
///
/// The element for which the strategy reports priority over every other
/// element is always at the top. With the default [`Less`] strategy this is
/// a min-heap.
///
/// Cloning the heap deep-copies its elements.
#[derive(Clone)]
pub struct MaryHeap<T, C = Less> {
    /// Level-order storage of the implicit tree
    elements: Vec<T>,
    arity: usize,
    compare: C,
}

fn checked_arity<A: TryInto<usize>>(arity: A) -> Result<usize, HeapError> {
    match arity.try_into() {
        Ok(arity) if arity >= 2 => Ok(arity),
        _ => {
            debug!("rejected heap arity below 2");
            Err(HeapError::InvalidArgument)
        }
    }
}

impl<T, C: Compare<T>> MaryHeap<T, C> {
    /// Creates an empty heap with the given arity and strategy
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` if `arity` is below 2 or does not
    /// fit in a `usize` (negative values included).
    pub fn new<A: TryInto<usize>>(arity: A, compare: C) -> Result<Self, HeapError> {
        Self::with_capacity(arity, 0, compare)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Errors
    /// Same as [`MaryHeap::new`].
    pub fn with_capacity<A: TryInto<usize>>(
        arity: A,
        capacity: usize,
        compare: C,
    ) -> Result<Self, HeapError> {
        let arity = checked_arity(arity)?;
        debug!("created {}-ary heap with capacity {}", arity, capacity);
        Ok(Self {
            elements: Vec::with_capacity(capacity),
            arity,
            compare,
        })
    }

    /// Builds a heap out of an arbitrary vector in O(n)
    ///
    /// # Errors
    /// Same as [`MaryHeap::new`].
    pub fn from_vec<A: TryInto<usize>>(
        arity: A,
        elements: Vec<T>,
        compare: C,
    ) -> Result<Self, HeapError> {
        let arity = checked_arity(arity)?;
        let mut heap = Self {
            elements,
            arity,
            compare,
        };
        heap.rebuild();
        debug!("heapified {} elements into {}-ary heap", heap.len(), arity);
        Ok(heap)
    }

    /// Returns the branching factor of the tree
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_m n)
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
        self.sift_up(self.elements.len() - 1);
    }

    /// Returns the element with the highest priority without removing it
    ///
    /// # Errors
    /// Returns `HeapError::Underflow` if the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or_else(|| {
            trace!("top called on an empty heap");
            HeapError::Underflow
        })
    }

    /// Returns the element with the highest priority, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Removes and returns the element with the highest priority
    ///
    /// The heap is left untouched when this fails.
    ///
    /// # Errors
    /// Returns `HeapError::Underflow` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(m · log_m n)
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.remove_top().ok_or_else(|| {
            trace!("pop called on an empty heap");
            HeapError::Underflow
        })
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Returns the backing storage in level order
    ///
    /// Only index 0 has a defined meaning: it is the top element.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the elements in level order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the heap, returning the storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Consumes the heap, returning the elements in the order `pop` yields them
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.remove_top() {
            sorted.push(item);
        }
        sorted
    }

    fn remove_top(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot
        let item = self.elements.swap_remove(0);

        if self.elements.len() > 1 {
            self.sift_down(0);
        }

        Some(item)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.arity;
            if self
                .compare
                .has_priority(&self.elements[index], &self.elements[parent])
            {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.best_child(index) {
            if self
                .compare
                .has_priority(&self.elements[child], &self.elements[index])
            {
                self.elements.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Index of the child with the highest priority, leftmost on ties
    ///
    /// Returns `None` for a leaf.
    fn best_child(&self, index: usize) -> Option<usize> {
        let len = self.elements.len();
        let first = index.saturating_mul(self.arity).saturating_add(1);
        if first >= len {
            return None;
        }
        let end = first.saturating_add(self.arity).min(len);

        let mut best = first;
        for child in first + 1..end {
            if self
                .compare
                .has_priority(&self.elements[child], &self.elements[best])
            {
                best = child;
            }
        }
        Some(best)
    }

    /// Restore the heap property over the whole storage
    fn rebuild(&mut self) {
        let len = self.elements.len();
        if len < 2 {
            return;
        }
        // parent of the last element
        let last_internal = (len - 2) / self.arity;
        for index in (0..=last_internal).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C: Compare<T> + Default> Default for MaryHeap<T, C> {
    /// A binary heap using the strategy's default value
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            arity: 2,
            compare: C::default(),
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for MaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaryHeap")
            .field("arity", &self.arity)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
