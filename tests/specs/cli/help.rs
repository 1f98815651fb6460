//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_both_coordinators() {
    Project::empty()
        .tandem()
        .args(&["--help"])
        .passes()
        .stdout_has("production")
        .stdout_has("rendezvous")
        .stdout_has("--scale");
}

#[test]
fn production_help_names_positionals() {
    Project::empty()
        .tandem()
        .args(&["production", "--help"])
        .passes()
        .stdout_has("[PRODUCERS]")
        .stdout_has("[CONSUMERS]")
        .stdout_has("--buffer");
}

#[test]
fn rendezvous_help_names_positionals() {
    Project::empty()
        .tandem()
        .args(&["rendezvous", "--help"])
        .passes()
        .stdout_has("[SERVERS]")
        .stdout_has("[WAITING_SLOTS]");
}
