// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Count bookkeeping for a bounded resource channel
//!
//! Pure, synchronous state with no waking logic. [`BoundedChannel`] wraps it
//! behind a mutex; keeping it separate lets the counting rules be tested
//! without a runtime.
//!
//! [`BoundedChannel`]: super::channel::BoundedChannel

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by channel bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// A release would push `available` past `capacity`
    #[error("release on channel '{name}' would exceed its capacity of {capacity}")]
    CapacityExceeded { name: String, capacity: u32 },
    /// The initial count is larger than the capacity
    #[error("channel '{name}' created with {initial} units but capacity {capacity}")]
    InitialExceedsCapacity {
        name: String,
        initial: u32,
        capacity: u32,
    },
}

/// Result of an acquire attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acquire {
    /// One unit was taken
    Acquired,
    /// Nothing available right now, channel still open
    Empty,
    /// Nothing available and the channel is closed
    Closed,
}

impl Acquire {
    pub fn is_acquired(&self) -> bool {
        matches!(self, Acquire::Acquired)
    }
}

/// Snapshot-able counter state of a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelState {
    capacity: u32,
    available: u32,
    closed: bool,
}

impl ChannelState {
    pub fn new(capacity: u32, initial: u32) -> Option<Self> {
        (initial <= capacity).then_some(Self {
            capacity,
            available: initial,
            closed: false,
        })
    }

    pub fn empty(capacity: u32) -> Self {
        Self {
            capacity,
            available: 0,
            closed: false,
        }
    }

    pub fn full(capacity: u32) -> Self {
        Self {
            capacity,
            available: capacity,
            closed: false,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Compare-and-decrement.
    ///
    /// Units left on a closed channel can still be taken; `Closed` is only
    /// reported once the channel is both closed and empty.
    pub fn try_take(&mut self) -> Acquire {
        if self.available > 0 {
            self.available -= 1;
            Acquire::Acquired
        } else if self.closed {
            Acquire::Closed
        } else {
            Acquire::Empty
        }
    }

    /// Increment, refusing to go past capacity. Returns false on overflow
    /// and leaves the state untouched.
    pub fn give(&mut self) -> bool {
        if self.available >= self.capacity {
            return false;
        }
        self.available += 1;
        true
    }

    /// Mark closed. Returns true if this call did the transition.
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
