// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Production-consumption command

use super::RunOptions;
use crate::error::CliError;
use crate::output;
use crate::render;
use anyhow::Result;
use tandem_core::{EventBus, ProductionConfig, ProductionCoordinator};

#[derive(clap::Args)]
pub struct ProductionArgs {
    /// Number of producers
    producers: Option<u32>,

    /// Number of consumers
    consumers: Option<u32>,

    /// Items that may be buffered or in production at once
    #[arg(long, value_name = "K")]
    buffer: Option<u32>,

    /// Upper bound for randomly drawn demands
    #[arg(long)]
    max_demand: Option<u32>,

    /// Demand of the next consumer; repeat once per consumer
    #[arg(long = "demand", value_name = "UNITS")]
    demands: Vec<u32>,
}

impl ProductionArgs {
    /// Command-line values win over the config file
    fn apply(self, mut config: ProductionConfig) -> ProductionConfig {
        if let Some(producers) = self.producers {
            config.producers = producers;
        }
        if let Some(consumers) = self.consumers {
            config.consumers = consumers;
        }
        if let Some(buffer) = self.buffer {
            config.buffer_capacity = buffer;
        }
        if let Some(max_demand) = self.max_demand {
            config.max_demand = max_demand;
        }
        if !self.demands.is_empty() {
            config.demands = self.demands;
        }
        config
    }
}

pub async fn handle(args: ProductionArgs, file: ProductionConfig, options: &RunOptions) -> Result<()> {
    let mut config = args.apply(file);
    config.pace = options.pace(config.pace).map_err(CliError::from)?;

    let bus = EventBus::new();
    let rx = options.subscribe(&bus);
    let coordinator = ProductionCoordinator::new(config, bus).map_err(CliError::from)?;

    let report = super::observe(coordinator.run(), rx, options).await?;
    output::print_report(&report, &render::production_summary(&report), options.format);
    Ok(())
}
