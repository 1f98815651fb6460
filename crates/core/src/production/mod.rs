// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Production-consumption coordinator
//!
//! Producers fill a shelf of items that consumers empty. Two channels share
//! the capacity K:
//! - `items` (starts empty) holds finished items
//! - `permits` (starts full) caps items on the shelf plus items being made
//!
//! A producer takes a permit before making an item and a consumer returns
//! one after taking an item, so `items + in production + permits == K` while
//! consumers are running.

mod participants;

use crate::config::{ConfigError, ProductionConfig};
use crate::coordination::{shutdown_pair, BoundedChannel, Cohort, TwoPhaseJoin};
use crate::error::CoordinatorError;
use crate::event::{Event, EventKind, Role};
use crate::events::EventBus;
use participants::{Consumer, Producer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Channels shared by every participant of a run
#[derive(Debug)]
pub(crate) struct Shelf {
    pub items: BoundedChannel,
    pub permits: BoundedChannel,
}

/// What one producer did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerTally {
    pub id: u32,
    /// Items put on the shelf
    pub delivered: u32,
    /// Leftover items claimed at shutdown (0 or 1)
    pub discarded: u32,
}

/// What one consumer did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerTally {
    pub id: u32,
    pub demand: u32,
    pub consumed: u32,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionReport {
    pub buffer_capacity: u32,
    pub producers: Vec<ProducerTally>,
    pub consumers: Vec<ConsumerTally>,
    /// Items still on the shelf after every producer went home
    pub leftover: u32,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
}

impl ProductionReport {
    pub fn total_demand(&self) -> u64 {
        self.consumers.iter().map(|c| u64::from(c.demand)).sum()
    }

    pub fn consumed(&self) -> u64 {
        self.consumers.iter().map(|c| u64::from(c.consumed)).sum()
    }

    pub fn delivered(&self) -> u64 {
        self.producers.iter().map(|p| u64::from(p.delivered)).sum()
    }

    pub fn discarded(&self) -> u64 {
        self.producers.iter().map(|p| u64::from(p.discarded)).sum()
    }

    /// Every delivered item was consumed, discarded, or is still on the shelf
    pub fn is_balanced(&self) -> bool {
        self.delivered() == self.consumed() + self.discarded() + u64::from(self.leftover)
    }
}

/// Runs one production-consumption session
pub struct ProductionCoordinator {
    config: ProductionConfig,
    bus: EventBus,
}

impl ProductionCoordinator {
    /// Validate the config up front; nothing is spawned on error
    pub fn new(config: ProductionConfig, bus: EventBus) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, bus })
    }

    pub fn config(&self) -> &ProductionConfig {
        &self.config
    }

    /// Run until every consumer is satisfied and every producer went home
    pub async fn run(self) -> Result<ProductionReport, CoordinatorError> {
        let started = Instant::now();
        let capacity = self.config.buffer_capacity;
        let demands = self.config.resolve_demands();

        let shelf = Arc::new(Shelf {
            items: BoundedChannel::empty("items", capacity),
            permits: BoundedChannel::full("permits", capacity),
        });
        let (trigger, watch) = shutdown_pair();

        tracing::info!(
            producers = self.config.producers,
            consumers = demands.len(),
            capacity,
            total_demand = demands.iter().map(|&d| u64::from(d)).sum::<u64>(),
            "starting production run"
        );

        let mut producers = Cohort::new(Role::Producer);
        for id in 1..=self.config.producers {
            let producer = Producer {
                id,
                shelf: Arc::clone(&shelf),
                shutdown: watch.clone(),
                bus: self.bus.clone(),
                pace: self.config.pace.clone(),
            };
            producers.spawn(producer.run().instrument(tracing::info_span!("producer", id)));
        }

        let mut consumers = Cohort::new(Role::Consumer);
        for (id, demand) in (1..).zip(demands) {
            let consumer = Consumer {
                id,
                demand,
                shelf: Arc::clone(&shelf),
                bus: self.bus.clone(),
                pace: self.config.pace.clone(),
            };
            consumers.spawn(consumer.run().instrument(tracing::info_span!("consumer", id)));
        }

        let supply = producers.len() as u32;
        let (mut consumers, mut producers) = TwoPhaseJoin::new(consumers, producers)
            .join(|| {
                self.bus
                    .publish(Event::new(Role::Producer, 0, EventKind::Closed).with_value(supply));
                trigger.trigger();
                // Producers blocked on a permit wake up and see the flag.
                shelf.permits.close();
            })
            .await?;

        consumers.sort_by_key(|c| c.id);
        producers.sort_by_key(|p| p.id);

        let report = ProductionReport {
            buffer_capacity: capacity,
            producers,
            consumers,
            leftover: shelf.items.peek(),
            elapsed: started.elapsed(),
        };

        tracing::info!(
            consumed = report.consumed(),
            delivered = report.delivered(),
            discarded = report.discarded(),
            leftover = report.leftover,
            "production run finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "production_tests.rs"]
mod tests;
