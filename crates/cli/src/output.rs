// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands
//!
//! JSON output is one object per line: every event record, then a final
//! `{"report": ...}` line.

use clap::ValueEnum;
use serde::Serialize;
use tandem_core::events::EventRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one event as it happens
pub fn print_event(record: &EventRecord, text: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => print_json_line(record),
    }
}

/// Print the end-of-run report
pub fn print_report<T: Serialize>(report: &T, summary: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", summary);
        }
        OutputFormat::Json => print_json_line(&ReportLine { report }),
    }
}

#[derive(Serialize)]
struct ReportLine<'a, T> {
    report: &'a T,
}

fn print_json_line<T: Serialize + ?Sized>(value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        println!("{}", json);
    }
}
