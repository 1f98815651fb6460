// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendezvous coordinator
//!
//! Servers pair up with clients through a bounded waiting area. Three channels
//! make up the shop:
//! - `waiting_room` (W slots, starts full): admission control
//! - `stations` (S, starts full): a client holds one from service start until
//!   its server finishes
//! - `summon` (S, starts empty): a client wakes a sleeping server
//!
//! Each summon unit is paired with an [`Encounter`] queued just before it.
//! The server that takes the unit takes one encounter and completes that
//! client's own oneshot, so a finished encounter can only release the client
//! it belongs to.
//!
//! Clients acquire waiting room then station, and give the waiting slot back
//! as soon as they hold a station. The server returns the station only after
//! completing the encounter.

mod participants;

use crate::config::{ConfigError, RendezvousConfig};
use crate::coordination::{shutdown_pair, BoundedChannel, Cohort, TwoPhaseJoin};
use crate::error::CoordinatorError;
use crate::event::{Event, EventKind, Role};
use crate::events::EventBus;
use participants::{Client, Server};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::Instrument;

/// A client at a station, waiting for its server to finish
#[derive(Debug)]
pub(crate) struct Encounter {
    pub client: u32,
    /// Completed with the id of the server that served the client
    pub done: oneshot::Sender<u32>,
}

#[derive(Debug)]
pub(crate) struct Shop {
    pub waiting_room: BoundedChannel,
    pub stations: BoundedChannel,
    pub summon: BoundedChannel,
    pending: Mutex<VecDeque<Encounter>>,
}

impl Shop {
    fn new(servers: u32, waiting_slots: u32) -> Self {
        Self {
            waiting_room: BoundedChannel::full("waiting_room", waiting_slots),
            stations: BoundedChannel::full("stations", servers),
            summon: BoundedChannel::empty("summon", servers),
            pending: Mutex::new(VecDeque::with_capacity(servers as usize)),
        }
    }

    /// Queue an encounter, then wake a server for it
    pub fn call_server(&self, encounter: Encounter) -> Result<(), CoordinatorError> {
        self.pending().push_back(encounter);
        self.summon.release()?;
        Ok(())
    }

    /// Encounter paired with a summon unit the caller just took
    pub fn next_encounter(&self) -> Option<Encounter> {
        self.pending().pop_front()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<Encounter>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// What one server did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTally {
    pub id: u32,
    /// Encounters completed
    pub served: u32,
}

/// What one client went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTally {
    pub id: u32,
    /// Time from arrival to service start
    #[serde(with = "humantime_serde")]
    pub waited: Duration,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendezvousReport {
    pub waiting_slots: u32,
    pub servers: Vec<ServerTally>,
    pub clients: Vec<ClientTally>,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
}

impl RendezvousReport {
    pub fn served(&self) -> u64 {
        self.servers.iter().map(|s| u64::from(s.served)).sum()
    }

    pub fn departed(&self) -> usize {
        self.clients.len()
    }

    pub fn longest_wait(&self) -> Duration {
        self.clients
            .iter()
            .map(|c| c.waited)
            .max()
            .unwrap_or_default()
    }
}

/// Runs one rendezvous session
pub struct RendezvousCoordinator {
    config: RendezvousConfig,
    bus: EventBus,
}

impl RendezvousCoordinator {
    /// Validate the config up front; nothing is spawned on error
    pub fn new(config: RendezvousConfig, bus: EventBus) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, bus })
    }

    pub fn config(&self) -> &RendezvousConfig {
        &self.config
    }

    /// Run until every client departed and every server went home
    pub async fn run(self) -> Result<RendezvousReport, CoordinatorError> {
        let started = Instant::now();
        let shop = Arc::new(Shop::new(self.config.servers, self.config.waiting_slots));
        let (trigger, watch) = shutdown_pair();

        tracing::info!(
            servers = self.config.servers,
            clients = self.config.clients,
            waiting_slots = self.config.waiting_slots,
            "starting rendezvous run"
        );

        let mut servers = Cohort::new(Role::Server);
        for id in 1..=self.config.servers {
            let server = Server {
                id,
                shop: Arc::clone(&shop),
                shutdown: watch.clone(),
                bus: self.bus.clone(),
                pace: self.config.pace.clone(),
            };
            servers.spawn(server.run().instrument(tracing::info_span!("server", id)));
        }

        let mut clients = Cohort::new(Role::Client);
        for id in 1..=self.config.clients {
            let client = Client {
                id,
                shop: Arc::clone(&shop),
                bus: self.bus.clone(),
                pace: self.config.pace.clone(),
            };
            clients.spawn(client.run().instrument(tracing::info_span!("client", id)));
        }

        let supply = servers.len() as u32;
        let (mut clients, mut servers) = TwoPhaseJoin::new(clients, servers)
            .join(|| {
                self.bus
                    .publish(Event::new(Role::Server, 0, EventKind::Closed).with_value(supply));
                trigger.trigger();
                // Every encounter is complete, so nothing is left on summon
                // and each sleeping server wakes to Closed.
                shop.summon.close();
            })
            .await?;

        clients.sort_by_key(|c| c.id);
        servers.sort_by_key(|s| s.id);

        let report = RendezvousReport {
            waiting_slots: self.config.waiting_slots,
            servers,
            clients,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            served = report.served(),
            departed = report.departed(),
            longest_wait_ms = report.longest_wait().as_millis() as u64,
            "rendezvous run finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "rendezvous_tests.rs"]
mod tests;
