// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how to
//! fix it.

use std::fmt;
use std::path::Path;
use tandem_core::{ConfigError, CoordinatorError};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let base = CliError::new(err.to_string());
        let with_help = match &err {
            ConfigError::NoProducers => base
                .with_context("A run needs someone to make items")
                .with_suggestion("tandem production <PRODUCERS> <CONSUMERS> with PRODUCERS >= 1"),
            ConfigError::NoConsumers => base
                .with_context("A run needs someone to take items")
                .with_suggestion("tandem production <PRODUCERS> <CONSUMERS> with CONSUMERS >= 1"),
            ConfigError::ZeroBufferCapacity => {
                base.with_suggestion("Pass --buffer 1 or larger")
            }
            ConfigError::ZeroMaxDemand => base.with_suggestion("Pass --max-demand 1 or larger"),
            ConfigError::ZeroDemand { .. } => {
                base.with_suggestion("Every --demand value must be at least 1")
            }
            ConfigError::DemandCountMismatch { .. } => base
                .with_context("--demand is given once per consumer, in consumer order")
                .with_suggestion("Drop --demand to draw demands at random"),
            ConfigError::NoServers => base
                .with_context("Clients would wait forever without a server")
                .with_suggestion(
                    "tandem rendezvous <SERVERS> <CLIENTS> <WAITING_SLOTS> with SERVERS >= 1",
                ),
            ConfigError::NoClients => base.with_suggestion(
                "tandem rendezvous <SERVERS> <CLIENTS> <WAITING_SLOTS> with CLIENTS >= 1",
            ),
            ConfigError::NoWaitingSlots => base
                .with_context("Clients are admitted only through the waiting area")
                .with_suggestion(
                    "tandem rendezvous <SERVERS> <CLIENTS> <WAITING_SLOTS> with WAITING_SLOTS >= 1",
                ),
            ConfigError::InvalidScale(_) => {
                base.with_suggestion("Use --scale 0 for an instant run or --scale 0.01 to speed up")
            }
            ConfigError::Read { path, .. } => base
                .with_context(format!("Looked for {}", path.display()))
                .with_suggestion("Check the --config path"),
            ConfigError::Parse { .. } => base.with_suggestion(
                "Config files hold [production] and [rendezvous] tables; unknown keys are rejected",
            ),
        };
        with_help.with_source(err)
    }
}

impl From<CoordinatorError> for CliError {
    fn from(err: CoordinatorError) -> Self {
        match err {
            CoordinatorError::Config(config) => config.into(),
            other => CliError::new(other.to_string())
                .with_context("The run was aborted and the remaining participants stopped")
                .with_suggestion("Re-run with --verbose to see coordinator logs")
                .with_source(other),
        }
    }
}

impl CliError {
    pub fn event_log_write(path: &Path, err: std::io::Error) -> Self {
        CliError::new(format!("failed to write event log {}", path.display()))
            .with_context(err.to_string())
            .with_suggestion("Check that the directory exists and is writable")
            .with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn config_errors_keep_their_message() {
        let output = CliError::from(ConfigError::NoWaitingSlots).to_string();
        assert!(output.starts_with("error: waiting area must have at least 1 slot\n"));
        assert!(output.contains("WAITING_SLOTS >= 1"));
    }

    #[test]
    fn coordinator_config_error_is_unwrapped() {
        let output = CliError::from(CoordinatorError::Config(ConfigError::NoProducers)).to_string();
        assert!(output.starts_with("error: no producers configured\n"));
    }

    #[test]
    fn config_error_is_kept_as_source() {
        use std::error::Error;
        let err = CliError::from(ConfigError::NoClients);
        assert!(err.source().is_some());
    }
}
