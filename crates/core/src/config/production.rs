// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Production-consumption run configuration

use super::{ConfigError, Pace};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Settings for a production-consumption run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductionConfig {
    pub producers: u32,
    pub consumers: u32,
    /// Items that may be buffered or in production at once
    pub buffer_capacity: u32,
    /// Upper bound for randomly drawn demands
    pub max_demand: u32,
    /// Explicit per-consumer demands; drawn at random when empty
    pub demands: Vec<u32>,
    pub pace: Pace,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            producers: 1,
            consumers: 1,
            buffer_capacity: 5,
            max_demand: 3,
            demands: Vec::new(),
            pace: Pace::default(),
        }
    }
}

impl ProductionConfig {
    pub fn new(producers: u32, consumers: u32) -> Self {
        Self {
            producers,
            consumers,
            ..Self::default()
        }
    }

    pub fn with_buffer_capacity(mut self, capacity: u32) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_max_demand(mut self, max_demand: u32) -> Self {
        self.max_demand = max_demand;
        self
    }

    pub fn with_demands(mut self, demands: Vec<u32>) -> Self {
        self.demands = demands;
        self
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Check counts and capacities. Supply side is checked first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.producers == 0 {
            return Err(ConfigError::NoProducers);
        }
        if self.consumers == 0 {
            return Err(ConfigError::NoConsumers);
        }
        if self.buffer_capacity == 0 {
            return Err(ConfigError::ZeroBufferCapacity);
        }

        if self.demands.is_empty() {
            if self.max_demand == 0 {
                return Err(ConfigError::ZeroMaxDemand);
            }
        } else {
            if self.demands.len() != self.consumers as usize {
                return Err(ConfigError::DemandCountMismatch {
                    expected: self.consumers,
                    actual: self.demands.len(),
                });
            }
            if let Some(index) = self.demands.iter().position(|&d| d == 0) {
                return Err(ConfigError::ZeroDemand {
                    consumer: index as u32 + 1,
                });
            }
        }

        Ok(())
    }

    /// Demand of every consumer, in id order
    pub fn resolve_demands(&self) -> Vec<u32> {
        if !self.demands.is_empty() {
            return self.demands.clone();
        }
        let mut rng = rand::thread_rng();
        (0..self.consumers)
            .map(|_| rng.gen_range(1..=self.max_demand.max(1)))
            .collect()
    }
}
