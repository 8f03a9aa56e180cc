//! Scheduling events for a discrete-event logic simulator
//!
//! An [`Event`] says "at `time`, drive `wire` to `state`". The simulator that
//! consumes events and the wires they refer to live outside this crate; a
//! wire is named only through an opaque [`WireId`] handle, so a queue of
//! events never owns or keeps alive the thing it will eventually touch.
//!
//! [`EventLess`] orders events earliest-first, which turns a
//! [`MaryHeap`](crate::mary::MaryHeap) into a ready-event queue: the top is
//! always the soonest event. Events sharing a timestamp come out in no
//! particular order.
//!
//! # Example
//!
//! ```rust
//! use mary_heap::event::{Event, EventQueue, Signal, WireId};
//!
//! let mut queue = EventQueue::with_arity(2).unwrap();
//! queue.push(Event::new(50, WireId(0), Signal::High));
//! queue.push(Event::new(10, WireId(1), Signal::Low));
//! queue.push(Event::new(30, WireId(2), Signal::Unknown));
//!
//! assert_eq!(queue.next_time(), Some(10));
//! assert_eq!(queue.pop().unwrap().wire, WireId(1));
//! ```

use std::fmt;

use crate::mary::MaryHeap;
use crate::traits::{Compare, HeapError};

/// Handle to a wire owned by the simulator
///
/// This is an index into a table the caller owns; the event layer never
/// dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireId(pub usize);

/// Logic level carried by an event
///
/// Each level is stored as the byte of its conventional character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Signal {
    /// `'0'`
    Low = b'0',
    /// `'1'`
    High = b'1',
    /// `'X'`: undriven or conflicting
    Unknown = b'X',
}

impl Signal {
    /// Returns the character form of the level
    pub fn as_char(self) -> char {
        char::from(self as u8)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Signal> for char {
    fn from(signal: Signal) -> char {
        signal.as_char()
    }
}

impl TryFrom<char> for Signal {
    type Error = ParseSignalError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Signal::Low),
            '1' => Ok(Signal::High),
            'X' | 'x' => Ok(Signal::Unknown),
            other => Err(ParseSignalError(other)),
        }
    }
}

/// Error returned when a character names no signal level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSignalError(pub char);

impl fmt::Display for ParseSignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid signal state {:?}", self.0)
    }
}

impl std::error::Error for ParseSignalError {}

/// A signal change scheduled for a point in logical time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Logical timestamp at which the change takes effect
    pub time: u64,
    /// Wire the change applies to
    pub wire: WireId,
    /// Level the wire is driven to
    pub state: Signal,
}

impl Event {
    /// Creates an event
    pub fn new(time: u64, wire: WireId, state: Signal) -> Self {
        Self { time, wire, state }
    }
}

/// Earlier events have priority
///
/// Works on owned events and on `&Event` handles alike. No secondary key is
/// used, so events with equal times are unordered among themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventLess;

impl Compare<Event> for EventLess {
    fn has_priority(&self, a: &Event, b: &Event) -> bool {
        a.time < b.time
    }
}

impl<'a> Compare<&'a Event> for EventLess {
    fn has_priority(&self, a: &&'a Event, b: &&'a Event) -> bool {
        a.time < b.time
    }
}

/// A min-by-time queue of owned events
pub type EventQueue = MaryHeap<Event, EventLess>;

impl MaryHeap<Event, EventLess> {
    /// Creates an empty event queue with the given arity
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` if `arity` is below 2.
    pub fn with_arity<A: TryInto<usize>>(arity: A) -> Result<Self, HeapError> {
        Self::new(arity, EventLess)
    }

    /// Timestamp of the soonest event, if any
    pub fn next_time(&self) -> Option<u64> {
        self.peek().map(|event| event.time)
    }

    /// Removes the soonest event if it is due at or before `now`
    pub fn pop_due(&mut self, now: u64) -> Option<Event> {
        match self.next_time() {
            Some(time) if time <= now => self.pop().ok(),
            _ => None,
        }
    }
}
