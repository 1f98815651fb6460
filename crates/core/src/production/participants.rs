// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Producer and consumer task bodies

use super::{ConsumerTally, ProducerTally, Shelf};
use crate::config::Pace;
use crate::coordination::{Acquire, ShutdownWatch};
use crate::error::CoordinatorError;
use crate::event::{Event, EventKind, Role};
use crate::events::EventBus;
use std::sync::Arc;

/// Refills the shelf until shutdown
pub(super) struct Producer {
    pub id: u32,
    pub shelf: Arc<Shelf>,
    pub shutdown: ShutdownWatch,
    pub bus: EventBus,
    pub pace: Pace,
}

impl Producer {
    pub async fn run(self) -> Result<ProducerTally, CoordinatorError> {
        let mut tally = ProducerTally {
            id: self.id,
            delivered: 0,
            discarded: 0,
        };

        while !self.shutdown.is_set() {
            // Backpressure: no permit, no cooking.
            if self.shelf.permits.acquire().await == Acquire::Closed {
                break;
            }
            if self.shutdown.is_set() {
                break;
            }

            self.emit(EventKind::ProducerCooking, None);
            tokio::time::sleep(self.pace.cooking()).await;

            self.shelf.items.release()?;
            tally.delivered += 1;
            self.emit(EventKind::ProducerDelivered, Some(self.shelf.items.peek()));
        }

        // Dispose of one unsold item, if any is left.
        if self.shelf.items.try_acquire().is_acquired() {
            tally.discarded += 1;
            self.emit(EventKind::ProducerDiscarded, None);
        }

        tracing::debug!(
            producer = self.id,
            delivered = tally.delivered,
            discarded = tally.discarded,
            "going home"
        );
        self.emit(EventKind::ProducerWentHome, None);
        Ok(tally)
    }

    fn emit(&self, kind: EventKind, value: Option<u32>) {
        let mut event = Event::new(Role::Producer, self.id, kind);
        event.value = value;
        self.bus.publish(event);
    }
}

/// Takes `demand` items off the shelf, then leaves
pub(super) struct Consumer {
    pub id: u32,
    pub demand: u32,
    pub shelf: Arc<Shelf>,
    pub bus: EventBus,
    pub pace: Pace,
}

impl Consumer {
    pub async fn run(self) -> Result<ConsumerTally, CoordinatorError> {
        self.emit(EventKind::Arrived, Some(self.demand));

        let mut remaining = self.demand;
        while remaining > 0 {
            if self.shelf.items.acquire().await != Acquire::Acquired {
                return Err(CoordinatorError::Starved {
                    role: Role::Consumer,
                    id: self.id,
                    channel: self.shelf.items.name().to_string(),
                });
            }
            remaining -= 1;
            self.emit(EventKind::UnitAcquired, Some(self.demand - remaining));

            // One item left the shelf, so one more may be made.
            self.shelf.permits.release()?;
        }

        self.emit(EventKind::Consuming, Some(self.demand));
        tokio::time::sleep(self.pace.eating(self.demand)).await;
        self.emit(EventKind::Satisfied, None);

        Ok(ConsumerTally {
            id: self.id,
            demand: self.demand,
            consumed: self.demand - remaining,
        })
    }

    fn emit(&self, kind: EventKind, value: Option<u32>) {
        let mut event = Event::new(Role::Consumer, self.id, kind);
        event.value = value;
        self.bus.publish(event);
    }
}
