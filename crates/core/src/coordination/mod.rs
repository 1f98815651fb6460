// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives shared by both coordinators
//!
//! This module provides:
//! - **BoundedChannel** - Capacity-capped counting channel with close/drain
//! - **ChannelState** - Pure counter bookkeeping behind the channel
//! - **Shutdown** - Single-writer shutdown flag
//! - **Cohort / TwoPhaseJoin** - Join barrier for participant tasks

pub mod barrier;
pub mod channel;
pub mod shutdown;
pub mod state;

pub use barrier::{Cohort, TwoPhaseJoin};
pub use channel::BoundedChannel;
pub use shutdown::{shutdown_pair, ShutdownTrigger, ShutdownWatch};
pub use state::{Acquire, ChannelError, ChannelState};
