//! Rendezvous run specs

use crate::prelude::*;

#[test]
fn every_client_departs() {
    Project::empty()
        .tandem()
        .args(&["--scale", "0", "rendezvous", "2", "5", "1"])
        .passes()
        .stdout_has("Client 5 departs")
        .stdout_has("All demand met, sending 2 servers home")
        .stdout_has("Server 2 goes home")
        .stdout_has("served 5 clients (1 waiting slots)");
}

#[test]
fn json_report_counts_encounters() {
    let out = Project::empty()
        .tandem()
        .args(&["--scale", "0", "--format", "json", "rendezvous", "3", "7", "2"])
        .passes();

    let lines = out.json_lines();
    let names = event_names(&lines);
    assert_eq!(names.iter().filter(|n| *n == "client:departed").count(), 7);
    assert_eq!(names.iter().filter(|n| *n == "server:service_finished").count(), 7);
    assert_eq!(names.iter().filter(|n| *n == "server:went_home").count(), 3);

    let report = report(&lines);
    let served: u64 = report["servers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["served"].as_u64().unwrap())
        .sum();
    assert_eq!(served, 7);
    assert_eq!(report["clients"].as_array().unwrap().len(), 7);
}
