// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server and client task bodies

use super::{ClientTally, Encounter, ServerTally, Shop};
use crate::config::Pace;
use crate::coordination::{Acquire, BoundedChannel, ShutdownWatch};
use crate::error::CoordinatorError;
use crate::event::{Event, EventKind, Role};
use crate::events::EventBus;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;

/// Sleeps on the summon signal and serves whoever woke it
pub(super) struct Server {
    pub id: u32,
    pub shop: Arc<Shop>,
    pub shutdown: ShutdownWatch,
    pub bus: EventBus,
    pub pace: Pace,
}

impl Server {
    pub async fn run(self) -> Result<ServerTally, CoordinatorError> {
        let mut served = 0;

        while !self.shutdown.is_set() {
            self.emit(EventKind::ServerSleeping, None);
            if self.shop.summon.acquire().await == Acquire::Closed {
                break;
            }
            // Woken by the shutdown round, not by a client.
            if self.shutdown.is_set() {
                break;
            }

            let encounter = self
                .shop
                .next_encounter()
                .ok_or(CoordinatorError::NoEncounter { server: self.id })?;

            self.emit(EventKind::ServerServing, Some(encounter.client));
            tokio::time::sleep(self.pace.service()).await;

            // Announce before handing back the station so the next client
            // can never appear in service alongside this one.
            self.emit(EventKind::ServiceFinished, Some(encounter.client));
            if encounter.done.send(self.id).is_err() {
                return Err(CoordinatorError::EncounterAbandoned {
                    client: encounter.client,
                });
            }
            self.shop.stations.release()?;
            served += 1;
        }

        tracing::debug!(server = self.id, served, "going home");
        self.emit(EventKind::ServerWentHome, Some(served));
        Ok(ServerTally {
            id: self.id,
            served,
        })
    }

    fn emit(&self, kind: EventKind, value: Option<u32>) {
        let mut event = Event::new(Role::Server, self.id, kind);
        event.value = value;
        self.bus.publish(event);
    }
}

/// Travels, queues, gets served once, leaves
pub(super) struct Client {
    pub id: u32,
    pub shop: Arc<Shop>,
    pub bus: EventBus,
    pub pace: Pace,
}

impl Client {
    pub async fn run(self) -> Result<ClientTally, CoordinatorError> {
        tokio::time::sleep(self.pace.travel()).await;
        self.emit(EventKind::Arrived, None);
        let arrived = Instant::now();

        // Admission control: blocks while the waiting area is full.
        self.take(&self.shop.waiting_room).await?;
        self.emit(EventKind::WaitingRoomEntered, Some(self.shop.waiting_room.peek()));

        // Waiting room first, station second; the reverse order can deadlock.
        self.take(&self.shop.stations).await?;
        let waited = arrived.elapsed();
        self.emit(EventKind::ServiceStarted, None);
        self.shop.waiting_room.release()?;

        let (done, finished) = oneshot::channel();
        self.shop.call_server(Encounter {
            client: self.id,
            done,
        })?;
        let server = finished
            .await
            .map_err(|_| CoordinatorError::EncounterAbandoned { client: self.id })?;

        self.emit(EventKind::Departed, Some(server));
        Ok(ClientTally {
            id: self.id,
            waited,
        })
    }

    async fn take(&self, channel: &BoundedChannel) -> Result<(), CoordinatorError> {
        match channel.acquire().await {
            Acquire::Acquired => Ok(()),
            Acquire::Empty | Acquire::Closed => Err(CoordinatorError::Starved {
                role: Role::Client,
                id: self.id,
                channel: channel.name().to_string(),
            }),
        }
    }

    fn emit(&self, kind: EventKind, value: Option<u32>) {
        let mut event = Event::new(Role::Client, self.id, kind);
        event.value = value;
        self.bus.publish(event);
    }
}
