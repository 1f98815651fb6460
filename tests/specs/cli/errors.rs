//! Configuration error specs
//!
//! Every invalid configuration is rejected before a single participant
//! runs, so stdout stays empty.

use crate::prelude::*;

#[test]
fn zero_producers_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "production", "0", "3"])
        .fails()
        .stderr_has("error: no producers configured")
        .stdout_eq("");
}

#[test]
fn zero_consumers_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "production", "2", "0"])
        .fails()
        .stderr_has("error: no consumers configured")
        .stdout_eq("");
}

#[test]
fn zero_buffer_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "production", "1", "1", "--buffer", "0"])
        .fails()
        .stderr_has("error: buffer capacity must be at least 1");
}

#[test]
fn demand_count_must_match_consumers() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "production", "1", "3", "--demand", "1", "--demand", "2"])
        .fails()
        .stderr_has("2 demands given for 3 consumers");
}

#[test]
fn zero_waiting_slots_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "rendezvous", "2", "5", "0"])
        .fails()
        .stderr_has("error: waiting area must have at least 1 slot")
        .stderr_has("suggestions:")
        .stdout_eq("");
}

#[test]
fn zero_servers_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "rendezvous", "0", "5", "2"])
        .fails()
        .stderr_has("error: no servers configured");
}

#[test]
fn zero_clients_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "rendezvous", "1", "0", "2"])
        .fails()
        .stderr_has("error: no clients configured");
}

#[test]
fn negative_scale_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "-1", "rendezvous", "1", "1", "1"])
        .fails()
        .stderr_has("time scale must be a finite, non-negative number");
}

#[test]
fn overflowing_scale_is_rejected() {
    Project::empty()
        .tandem()
        .args(&["--scale", "1e20", "production", "1", "1"])
        .fails()
        .stderr_has("error: time scale must be a finite, non-negative number")
        .stderr_has("got 100000000000000000000")
        .stdout_eq("");
}
