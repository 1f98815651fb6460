// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendezvous command

use super::RunOptions;
use crate::error::CliError;
use crate::output;
use crate::render;
use anyhow::Result;
use tandem_core::{EventBus, RendezvousConfig, RendezvousCoordinator};

#[derive(clap::Args)]
pub struct RendezvousArgs {
    /// Number of servers (and service stations)
    servers: Option<u32>,

    /// Number of clients
    clients: Option<u32>,

    /// Capacity of the waiting area
    waiting_slots: Option<u32>,
}

impl RendezvousArgs {
    fn apply(self, mut config: RendezvousConfig) -> RendezvousConfig {
        if let Some(servers) = self.servers {
            config.servers = servers;
        }
        if let Some(clients) = self.clients {
            config.clients = clients;
        }
        if let Some(waiting_slots) = self.waiting_slots {
            config.waiting_slots = waiting_slots;
        }
        config
    }
}

pub async fn handle(
    args: RendezvousArgs,
    file: RendezvousConfig,
    options: &RunOptions,
) -> Result<()> {
    let mut config = args.apply(file);
    config.pace = options.pace(config.pace).map_err(CliError::from)?;

    let bus = EventBus::new();
    let rx = options.subscribe(&bus);
    let coordinator = RendezvousCoordinator::new(config, bus).map_err(CliError::from)?;

    let report = super::observe(coordinator.run(), rx, options).await?;
    output::print_report(&report, &render::rendezvous_summary(&report), options.format);
    Ok(())
}
