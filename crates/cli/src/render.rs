// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable text for events and reports

use std::fmt::Write;
use tandem_core::{Event, EventKind, ProductionReport, RendezvousReport, Role};

/// One line describing what a participant just did
pub fn describe(event: &Event) -> String {
    let who = format!("{} {}", event.role, event.id);
    let value = event.value.unwrap_or_default();

    match (event.role, event.kind) {
        (Role::Consumer, EventKind::Arrived) => format!("{who} arrives wanting {}", units(value)),
        (_, EventKind::Arrived) => format!("{who} arrives"),
        (_, EventKind::UnitAcquired) => format!("{who} takes an item ({value} in hand)"),
        (_, EventKind::Consuming) => format!("{who} is consuming {}", units(value)),
        (_, EventKind::Satisfied) => format!("{who} is satisfied and leaves"),
        (_, EventKind::ProducerCooking) => format!("{who} is making an item"),
        (_, EventKind::ProducerDelivered) => {
            format!("{who} delivers an item ({value} on the shelf)")
        }
        (_, EventKind::ProducerDiscarded) => format!("{who} discards a leftover item"),
        (_, EventKind::ProducerWentHome) | (_, EventKind::ServerWentHome) => {
            format!("{who} goes home")
        }
        (_, EventKind::WaitingRoomEntered) => {
            format!("{who} takes a seat ({value} seats free)")
        }
        (_, EventKind::ServiceStarted) => format!("{who} sits down at a station"),
        (_, EventKind::ServiceFinished) => format!("{who} finishes with Client {value}"),
        (_, EventKind::Departed) => format!("{who} departs, served by Server {value}"),
        (_, EventKind::ServerSleeping) => format!("{who} sleeps until summoned"),
        (_, EventKind::ServerServing) => format!("{who} is serving Client {value}"),
        (role, EventKind::Closed) => {
            format!("All demand met, sending {value} {}s home", role.as_str())
        }
    }
}

fn units(n: u32) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{n} items")
    }
}

/// End-of-run summary for a production run
pub fn production_summary(report: &ProductionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Production finished in {:.2?}", report.elapsed);
    let _ = writeln!(
        out,
        "  consumed {} of {} demanded",
        report.consumed(),
        report.total_demand()
    );
    let _ = writeln!(
        out,
        "  delivered {}, discarded {}, left on shelf {} (capacity {})",
        report.delivered(),
        report.discarded(),
        report.leftover,
        report.buffer_capacity
    );
    for producer in &report.producers {
        let _ = writeln!(
            out,
            "  Producer {}: delivered {}, discarded {}",
            producer.id, producer.delivered, producer.discarded
        );
    }
    out
}

/// End-of-run summary for a rendezvous run
pub fn rendezvous_summary(report: &RendezvousReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rendezvous finished in {:.2?}", report.elapsed);
    let _ = writeln!(
        out,
        "  served {} clients ({} waiting slots)",
        report.served(),
        report.waiting_slots
    );
    let _ = writeln!(out, "  longest wait {:.2?}", report.longest_wait());
    for server in &report.servers {
        let _ = writeln!(out, "  Server {}: served {}", server.id, server.served);
    }
    out
}
