// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured events emitted by the coordinators
//!
//! The core never formats or prints; it publishes [`Event`]s and leaves
//! rendering to whoever subscribes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a participant plays in a coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Producer,
    Consumer,
    Server,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Producer => "producer",
            Role::Consumer => "consumer",
            Role::Server => "server",
            Role::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Producer => "Producer",
            Role::Consumer => "Consumer",
            Role::Server => "Server",
            Role::Client => "Client",
        };
        f.write_str(name)
    }
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Consumer or client showed up (consumer value: demand)
    Arrived,
    /// Consumer took one item (value: units held so far)
    UnitAcquired,
    /// Consumer has all its units (value: units held)
    Consuming,
    /// Consumer finished and left
    Satisfied,
    ProducerCooking,
    /// Item released to the shelf (value: advisory item count)
    ProducerDelivered,
    /// Producer claimed a leftover item at shutdown
    ProducerDiscarded,
    ProducerWentHome,
    /// Client holds a waiting slot (value: advisory free slots)
    WaitingRoomEntered,
    /// Client holds a station and left the waiting room
    ServiceStarted,
    /// Server finished an encounter (value: client served)
    ServiceFinished,
    /// Client received its completion and left (value: server that served it)
    Departed,
    ServerSleeping,
    /// Server took an encounter (value: client being served)
    ServerServing,
    ServerWentHome,
    /// Orchestrator declared shutdown (value: supply-side tasks woken)
    Closed,
}

impl EventKind {
    /// Action part of the event name
    pub fn action(&self) -> &'static str {
        match self {
            EventKind::Arrived => "arrived",
            EventKind::UnitAcquired => "unit_acquired",
            EventKind::Consuming => "consuming",
            EventKind::Satisfied => "satisfied",
            EventKind::ProducerCooking => "cooking",
            EventKind::ProducerDelivered => "delivered",
            EventKind::ProducerDiscarded => "discarded",
            EventKind::ProducerWentHome => "went_home",
            EventKind::WaitingRoomEntered => "waiting_room_entered",
            EventKind::ServiceStarted => "service_started",
            EventKind::ServiceFinished => "service_finished",
            EventKind::Departed => "departed",
            EventKind::ServerSleeping => "sleeping",
            EventKind::ServerServing => "serving",
            EventKind::ServerWentHome => "went_home",
            EventKind::Closed => "closed",
        }
    }
}

/// A single observable step of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub role: Role,
    /// 1-based within the role; 0 for the orchestrator
    pub id: u32,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

impl Event {
    pub fn new(role: Role, id: u32, kind: EventKind) -> Self {
        Self {
            role,
            id,
            kind,
            value: None,
        }
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// Name for pattern matching, "role:action"
    pub fn name(&self) -> String {
        format!("{}:{}", self.role.as_str(), self.kind.action())
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
