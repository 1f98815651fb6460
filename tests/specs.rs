//! Behavioral specifications for the tandem CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes. Runs use `--scale 0` so every simulated
//! delay is skipped.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// config/
#[path = "specs/config/file.rs"]
mod config_file;

// production/
#[path = "specs/production/run.rs"]
mod production_run;

// rendezvous/
#[path = "specs/rendezvous/run.rs"]
mod rendezvous_run;
