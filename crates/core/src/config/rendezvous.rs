// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendezvous run configuration

use super::{ConfigError, Pace};
use serde::{Deserialize, Serialize};

/// Settings for a rendezvous run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendezvousConfig {
    /// Servers, and also the number of service stations
    pub servers: u32,
    pub clients: u32,
    /// Capacity of the waiting area
    pub waiting_slots: u32,
    pub pace: Pace,
}

impl Default for RendezvousConfig {
    fn default() -> Self {
        Self {
            servers: 1,
            clients: 1,
            waiting_slots: 1,
            pace: Pace::default(),
        }
    }
}

impl RendezvousConfig {
    pub fn new(servers: u32, clients: u32, waiting_slots: u32) -> Self {
        Self {
            servers,
            clients,
            waiting_slots,
            pace: Pace::default(),
        }
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Check counts and capacities. Supply side is checked first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servers == 0 {
            return Err(ConfigError::NoServers);
        }
        if self.waiting_slots == 0 {
            return Err(ConfigError::NoWaitingSlots);
        }
        if self.clients == 0 {
            return Err(ConfigError::NoClients);
        }
        Ok(())
    }
}
