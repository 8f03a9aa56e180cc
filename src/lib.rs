//! m-ary Heaps for Rust
//!
//! This crate provides an array-backed heap with a configurable branching
//! factor and a pluggable ordering strategy, together with the event record
//! a discrete-event simulator schedules through it.
//!
//! # Features
//!
//! - **[`MaryHeap`]**: complete m-ary tree stored in a `Vec`; O(log_m n) push,
//!   O(m · log_m n) pop, O(1) top
//! - **[`Compare`]**: static ordering strategy; [`Less`] for a min-heap,
//!   [`Greater`] for a max-heap, or any `Fn(&T, &T) -> bool`
//! - **[`event`]**: timestamped signal changes with an earliest-first
//!   comparator
//!
//! Operations that cannot proceed report a [`HeapError`] and leave the heap
//! as it was.
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{Greater, HeapError, MaryHeap};
//!
//! let mut heap = MaryHeap::new(4, Greater).unwrap();
//! heap.extend([3, 9, 1, 7]);
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 7, 3, 1]);
//!
//! assert_eq!(MaryHeap::<i32>::new(1, mary_heap::Less).unwrap_err(), HeapError::InvalidArgument);
//! ```
//!
//! # Cargo features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the event types

pub mod event;
pub mod mary;
pub mod traits;

pub use mary::MaryHeap;
pub use traits::{Compare, Greater, HeapError, Less};
