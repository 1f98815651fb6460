// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded resource channel
//!
//! A counting semaphore with a hard upper bound and a shutdown-aware drain.
//! Every count change goes through the mutex-guarded [`ChannelState`]; the
//! [`Notify`] only carries wakeups.

use super::state::{Acquire, ChannelError, ChannelState};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Notify;

/// Counting channel capped at a fixed capacity
#[derive(Debug)]
pub struct BoundedChannel {
    name: String,
    state: Mutex<ChannelState>,
    notify: Notify,
}

impl BoundedChannel {
    /// Create a channel holding `initial` of `capacity` units
    pub fn new(name: impl Into<String>, capacity: u32, initial: u32) -> Result<Self, ChannelError> {
        let name = name.into();
        let state =
            ChannelState::new(capacity, initial).ok_or_else(|| ChannelError::InitialExceedsCapacity {
                name: name.clone(),
                initial,
                capacity,
            })?;

        Ok(Self::with_state(name, state))
    }

    /// Channel that starts with nothing available ("produced so far")
    pub fn empty(name: impl Into<String>, capacity: u32) -> Self {
        Self::with_state(name.into(), ChannelState::empty(capacity))
    }

    /// Channel that starts with every unit available ("free slots")
    pub fn full(name: impl Into<String>, capacity: u32) -> Self {
        Self::with_state(name.into(), ChannelState::full(capacity))
    }

    fn with_state(name: String, state: ChannelState) -> Self {
        Self {
            name,
            state: Mutex::new(state),
            notify: Notify::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.lock().capacity()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_closed()
    }

    /// Advisory count of available units.
    ///
    /// The value can be stale by the time the caller looks at it. Use it for
    /// logging and event payloads only.
    pub fn peek(&self) -> u32 {
        self.lock().available()
    }

    /// Copy of the current counter state
    pub fn snapshot(&self) -> ChannelState {
        self.lock().clone()
    }

    /// Wait for a unit.
    ///
    /// Returns [`Acquire::Acquired`] once a unit was taken, or
    /// [`Acquire::Closed`] if the channel was closed with nothing left.
    /// Never returns [`Acquire::Empty`].
    pub async fn acquire(&self) -> Acquire {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register as a waiter before looking at the count, otherwise a
            // release or close landing between the check and the await is lost.
            notified.as_mut().enable();

            let outcome = self.lock().try_take();
            if outcome != Acquire::Empty {
                return outcome;
            }

            notified.await;
        }
    }

    /// Take a unit if one is available right now
    pub fn try_acquire(&self) -> Acquire {
        self.lock().try_take()
    }

    /// Return a unit and wake one waiter.
    ///
    /// A release past capacity is refused, logged, and reported; the count is
    /// left unchanged.
    pub fn release(&self) -> Result<(), ChannelError> {
        let (accepted, capacity) = {
            let mut state = self.lock();
            (state.give(), state.capacity())
        };

        if !accepted {
            tracing::error!(channel = %self.name, capacity, "release would exceed capacity");
            return Err(ChannelError::CapacityExceeded {
                name: self.name.clone(),
                capacity,
            });
        }

        self.notify.notify_one();
        Ok(())
    }

    /// Close the channel and wake every blocked acquirer
    pub fn close(&self) {
        if self.lock().close() {
            tracing::debug!(channel = %self.name, "closed");
        }
        self.notify.notify_waiters();
    }

    fn lock(&self) -> MutexGuard<'_, ChannelState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
