// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tandem-core: bounded-resource coordination patterns
//!
//! This crate provides:
//! - A capacity-capped counting channel with close/drain semantics
//! - A production-consumption coordinator with backpressure
//! - A rendezvous coordinator with admission control and a completion handoff
//! - Structured events for observing either run

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod coordination;
pub mod error;
pub mod event;
pub mod events;

// Coordinators (depend on everything above)
pub mod production;
pub mod rendezvous;

// Re-exports
pub use config::{ConfigError, ConfigFile, Pace, ProductionConfig, RendezvousConfig};
pub use coordination::{Acquire, BoundedChannel, ChannelError};
pub use error::CoordinatorError;
pub use event::{Event, EventKind, Role};
pub use events::{EventBus, EventLog, EventPattern, EventReceiver, Subscription};
pub use production::{ProductionCoordinator, ProductionReport};
pub use rendezvous::{RendezvousCoordinator, RendezvousReport};
