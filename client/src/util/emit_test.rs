use super::*;

#[test]
fn get_data_event_wraps_the_scope_string() {
    let event = get_data_event("home");
    assert_eq!(event.name, "getData");
    assert_eq!(event.data, serde_json::json!("home"));

    let event = get_data_event("3");
    assert_eq!(event.data, serde_json::json!("3"));
}

#[test]
fn toggle_closed_event_closes_an_open_lot() {
    let event = toggle_closed_event("3", false);
    assert_eq!(event.name, "close");
    assert_eq!(event.data, serde_json::json!("3"));
}

#[test]
fn toggle_closed_event_reopens_a_closed_lot() {
    let event = toggle_closed_event("3", true);
    assert_eq!(event.name, "open");
    assert_eq!(event.data, serde_json::json!("3"));
}
