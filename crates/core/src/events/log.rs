// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered record of a coordinator run

use super::bus::EventReceiver;
use super::subscription::EventPattern;
use crate::event::{Event, EventKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// A logged event with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    /// The event name
    pub name: String,
    pub event: Event,
}

/// In-memory event log
#[derive(Debug)]
pub struct EventLog {
    records: Vec<EventRecord>,
    start_time: Instant,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Append an event to the log
    pub fn append(&mut self, event: Event) -> &EventRecord {
        let record = EventRecord {
            sequence: self.records.len() as u64 + 1,
            timestamp_ms: self.start_time.elapsed().as_millis() as u64,
            name: event.name(),
            event,
        };
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Move every event already queued on `rx` into the log.
    ///
    /// Returns how many were appended.
    pub fn drain(&mut self, rx: &mut EventReceiver) -> usize {
        let mut count = 0;
        while let Ok(event) = rx.try_recv() {
            self.append(event);
            count += 1;
        }
        count
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose name matches the pattern
    pub fn query(&self, pattern: &EventPattern) -> Vec<&EventRecord> {
        self.records
            .iter()
            .filter(|r| pattern.matches(&r.name))
            .collect()
    }

    /// Number of events of the given kind
    pub fn count(&self, kind: EventKind) -> usize {
        self.records.iter().filter(|r| r.event.kind == kind).count()
    }

    /// Highest value of a running gauge over the log.
    ///
    /// `enter` events raise the gauge by one and `leave` events lower it.
    /// Used to check occupancy bounds, e.g. clients between
    /// `WaitingRoomEntered` and `ServiceStarted`.
    pub fn peak_occupancy(&self, enter: EventKind, leave: EventKind) -> i64 {
        let mut current: i64 = 0;
        let mut peak: i64 = 0;
        for record in &self.records {
            if record.event.kind == enter {
                current += 1;
                peak = peak.max(current);
            } else if record.event.kind == leave {
                current -= 1;
            }
        }
        peak
    }

    /// Write the log as JSON lines
    pub fn write_jsonl(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for record in &self.records {
            let json = serde_json::to_string(record)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()
    }

    /// Read records previously written with [`EventLog::write_jsonl`]
    pub fn read_jsonl(path: &Path) -> std::io::Result<Vec<EventRecord>> {
        let reader = BufReader::new(File::open(path)?);
        let mut records = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let record: EventRecord = serde_json::from_str(&line)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
