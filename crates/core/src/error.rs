// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for coordinator runs

use crate::config::ConfigError;
use crate::coordination::ChannelError;
use crate::event::Role;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors that end a coordinator run.
///
/// Everything except `Config` is a broken protocol, not a condition to
/// recover from.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invariant violated: {0}")]
    Invariant(#[from] ChannelError),
    #[error("{role} {id} found channel '{channel}' closed while still waiting for a unit")]
    Starved {
        role: Role,
        id: u32,
        channel: String,
    },
    #[error("server {server} was summoned but no encounter was queued")]
    NoEncounter { server: u32 },
    #[error("encounter of client {client} ended without a completion handoff")]
    EncounterAbandoned { client: u32 },
    #[error("{role} task failed: {source}")]
    ParticipantFailed {
        role: Role,
        #[source]
        source: JoinError,
    },
}
