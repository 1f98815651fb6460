// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for coordinator runs
//!
//! Participant counts and capacities come from the caller (CLI flags or a
//! TOML file). Every config is validated before a single task is spawned.

mod pace;
mod production;
mod rendezvous;

pub use pace::Pace;
pub use production::ProductionConfig;
pub use rendezvous::RendezvousConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration problems, all detected before any task starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no producers configured")]
    NoProducers,
    #[error("no consumers configured")]
    NoConsumers,
    #[error("buffer capacity must be at least 1")]
    ZeroBufferCapacity,
    #[error("maximum demand must be at least 1")]
    ZeroMaxDemand,
    #[error("consumer {consumer} has a demand of 0")]
    ZeroDemand { consumer: u32 },
    #[error("{actual} demands given for {expected} consumers")]
    DemandCountMismatch { expected: u32, actual: usize },
    #[error("no servers configured")]
    NoServers,
    #[error("no clients configured")]
    NoClients,
    #[error("waiting area must have at least 1 slot")]
    NoWaitingSlots,
    #[error("time scale must be a finite, non-negative number that keeps every delay in range, got {0}")]
    InvalidScale(f64),
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a config file: one optional table per coordinator
///
/// ```toml
/// [production]
/// producers = 2
/// consumers = 3
/// buffer_capacity = 5
///
/// [production.pace]
/// max_cooking = "2s"
///
/// [rendezvous]
/// servers = 2
/// clients = 10
/// waiting_slots = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub production: ProductionConfig,
    pub rendezvous: RendezvousConfig,
}

impl ConfigFile {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
