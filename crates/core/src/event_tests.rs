use super::*;

#[test]
fn event_serializes_without_empty_value() {
    let event = Event::new(Role::Server, 2, EventKind::ServerSleeping);
    let json = serde_json::to_string(&event).unwrap();

    assert_eq!(json, r#"{"role":"server","id":2,"kind":"server_sleeping"}"#);
}

#[test]
fn event_value_round_trips() {
    let event = Event::new(Role::Consumer, 1, EventKind::UnitAcquired).with_value(2);
    let json = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&json).unwrap();

    assert_eq!(back, event);
    assert_eq!(back.name(), "consumer:unit_acquired");
    assert_eq!(
        Event::new(Role::Server, 0, EventKind::Closed).name(),
        "server:closed"
    );
}

#[test]
fn role_display_is_capitalized() {
    assert_eq!(Role::Client.to_string(), "Client");
}
