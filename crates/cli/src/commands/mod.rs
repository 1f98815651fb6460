// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand handlers

pub mod production;
pub mod rendezvous;

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use crate::render;
use std::future::Future;
use std::path::PathBuf;
use tandem_core::{
    ConfigError, CoordinatorError, EventBus, EventLog, EventPattern, EventReceiver, Pace,
    Subscription,
};

/// Flags shared by every run
pub struct RunOptions {
    pub scale: Option<f64>,
    pub format: OutputFormat,
    pub only: Vec<String>,
    pub events: Option<PathBuf>,
}

impl RunOptions {
    /// Apply `--scale` to a pace taken from the config file
    pub fn pace(&self, pace: Pace) -> Result<Pace, ConfigError> {
        match self.scale {
            Some(factor) => pace.scaled(factor),
            None => Ok(pace),
        }
    }

    /// Subscribe to the events the user asked to see
    pub fn subscribe(&self, bus: &EventBus) -> EventReceiver {
        let subscription = if self.only.is_empty() {
            Subscription::all("cli")
        } else {
            let patterns = self.only.iter().map(|p| EventPattern::new(p)).collect();
            Subscription::new("cli", patterns)
        };
        bus.subscribe(subscription)
    }
}

/// Run a coordinator while printing its events as they arrive.
///
/// The receiver ends once the coordinator and every participant dropped
/// their handle on the bus, so the caller must not keep a bus clone alive.
pub async fn observe<T, F>(run: F, mut rx: EventReceiver, options: &RunOptions) -> anyhow::Result<T>
where
    F: Future<Output = Result<T, CoordinatorError>> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(run);
    let mut log = EventLog::new();

    while let Some(event) = rx.recv().await {
        let record = log.append(event);
        output::print_event(record, &render::describe(&record.event), options.format);
    }

    let outcome = handle.await?;

    if let Some(path) = &options.events {
        log.write_jsonl(path)
            .map_err(|e| CliError::event_log_write(path, e))?;
    }

    outcome.map_err(|e| CliError::from(e).into())
}
