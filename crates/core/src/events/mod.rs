// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event delivery for coordinator observers
//!
//! This module provides:
//! - `EventBus` - Fan events out to subscribers, optionally filtered by pattern
//! - `EventLog` - Ordered in-memory record of a run, exportable as JSON lines
//! - `EventPattern` - "role:action" matching with `*` wildcards

mod bus;
mod log;
mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use log::{EventLog, EventRecord};
pub use subscription::{EventPattern, SubscriberId, Subscription};
