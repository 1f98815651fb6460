//! Production run specs

use crate::prelude::*;

#[test]
fn small_run_satisfies_every_consumer() {
    Project::empty()
        .tandem()
        .args(&[
            "--scale", "0", "production", "2", "3", "--buffer", "2", "--demand", "2", "--demand",
            "2", "--demand", "2",
        ])
        .passes()
        .stdout_has("Consumer 1 arrives wanting 2 items")
        .stdout_has("Consumer 3 is satisfied and leaves")
        .stdout_has("All demand met, sending 2 producers home")
        .stdout_has("Producer 1 goes home")
        .stdout_has("consumed 6 of 6 demanded");
}

#[test]
fn json_output_is_one_object_per_line() {
    let out = Project::empty()
        .tandem()
        .args(&[
            "--scale", "0", "--format", "json", "production", "1", "2", "--demand", "1",
            "--demand", "3",
        ])
        .passes();

    let lines = out.json_lines();
    let names = event_names(&lines);
    assert_eq!(names.iter().filter(|n| *n == "consumer:satisfied").count(), 2);
    assert_eq!(names.iter().filter(|n| *n == "producer:went_home").count(), 1);

    let closed = names.iter().position(|n| n == "producer:closed").unwrap();
    let last_satisfied = names.iter().rposition(|n| n == "consumer:satisfied").unwrap();
    assert!(last_satisfied < closed);

    let report = report(&lines);
    assert_eq!(report["buffer_capacity"], 5);
    assert_eq!(report["consumers"][1]["consumed"], 3);
}

#[test]
fn only_filters_printed_events() {
    let out = Project::empty()
        .tandem()
        .args(&[
            "--scale", "0", "--format", "json", "--only", "consumer:*", "production", "2", "2",
        ])
        .passes();

    let names = event_names(&out.json_lines());
    assert!(!names.is_empty());
    assert!(names.iter().all(|n| n.starts_with("consumer:")));
}

#[test]
fn events_flag_writes_json_lines() {
    let project = Project::empty();

    project
        .tandem()
        .args(&[
            "--scale", "0", "--events", "run.jsonl", "production", "1", "1", "--demand", "2",
        ])
        .passes();

    let log = project.read("run.jsonl");
    let first: serde_json::Value = serde_json::from_str(log.lines().next().unwrap()).unwrap();
    assert_eq!(first["sequence"], 1);
    assert!(log.contains("\"consumer:satisfied\""));
}
