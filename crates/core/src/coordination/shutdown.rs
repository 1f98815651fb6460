// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot shutdown flag
//!
//! The orchestrator owns the only [`ShutdownTrigger`]; participants get
//! read-only [`ShutdownWatch`] clones. Triggering consumes the trigger, so the
//! flag is written at most once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Create a linked trigger/watch pair
pub fn shutdown_pair() -> (ShutdownTrigger, ShutdownWatch) {
    let flag = Arc::new(AtomicBool::new(false));
    (
        ShutdownTrigger {
            flag: Arc::clone(&flag),
        },
        ShutdownWatch { flag },
    )
}

/// Write side of the flag
#[derive(Debug)]
pub struct ShutdownTrigger {
    flag: Arc<AtomicBool>,
}

impl ShutdownTrigger {
    /// Another watch on the same flag
    pub fn watch(&self) -> ShutdownWatch {
        ShutdownWatch {
            flag: Arc::clone(&self.flag),
        }
    }

    /// Set the flag. Release ordering pairs with the watch's acquire load so
    /// anything written before shutdown is visible to tasks that see it.
    pub fn trigger(self) {
        self.flag.store(true, Ordering::Release);
    }
}

/// Read side of the flag
#[derive(Debug, Clone)]
pub struct ShutdownWatch {
    flag: Arc<AtomicBool>,
}

impl ShutdownWatch {
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_sees_trigger() {
        let (trigger, watch) = shutdown_pair();
        let late = trigger.watch();

        assert!(!watch.is_set());
        trigger.trigger();

        assert!(watch.is_set());
        assert!(late.is_set());
    }

    #[test]
    fn clones_share_the_flag() {
        let (trigger, watch) = shutdown_pair();
        let copies: Vec<_> = (0..4).map(|_| watch.clone()).collect();

        trigger.trigger();

        assert!(copies.iter().all(ShutdownWatch::is_set));
    }

    #[tokio::test]
    async fn flag_is_visible_across_tasks() {
        let (trigger, watch) = shutdown_pair();

        let reader = tokio::spawn(async move {
            while !watch.is_set() {
                tokio::task::yield_now().await;
            }
        });

        trigger.trigger();
        reader.await.unwrap();
    }
}
