//! Config file specs

use crate::prelude::*;

const PRODUCTION_ONLY: &str = r#"
[production]
producers = 2
consumers = 3
buffer_capacity = 2
demands = [2, 2, 2]

[production.pace]
max_cooking = "0s"
max_eating_per_unit = "0s"
"#;

#[test]
fn counts_come_from_the_file() {
    let project = Project::empty();
    let config = project.file("tandem.toml", PRODUCTION_ONLY);

    project
        .tandem()
        .args(&["--config", config.to_str().unwrap(), "production"])
        .passes()
        .stdout_has("consumed 6 of 6 demanded")
        .stdout_has("Producer 2:");
}

#[test]
fn positionals_override_the_file() {
    let project = Project::empty();
    let config = project.file("tandem.toml", PRODUCTION_ONLY);

    project
        .tandem()
        .args(&[
            "--config",
            config.to_str().unwrap(),
            "production",
            "1",
            "1",
            "--demand",
            "4",
        ])
        .passes()
        .stdout_has("consumed 4 of 4 demanded")
        .stdout_lacks("Producer 2:");
}

#[test]
fn unknown_keys_are_rejected() {
    let project = Project::empty();
    let config = project.file("tandem.toml", "[production]\nchefs = 3\n");

    project
        .tandem()
        .args(&["--config", config.to_str().unwrap(), "production"])
        .fails()
        .stderr_has("failed to parse config");
}

#[test]
fn missing_file_is_reported() {
    let project = Project::empty();

    project
        .tandem()
        .args(&["--config", "nope.toml", "rendezvous"])
        .fails()
        .stderr_has("failed to read config nope.toml");
}
