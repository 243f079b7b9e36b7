use super::*;
use crate::state::lot::LotState;
use crate::state::lots::LotsState;
use events::Event;

fn info_broadcast() -> Event {
    Event::new(
        "info",
        serde_json::json!({
            "info": {
                "1": {
                    "id": "1", "name": "Lot A", "address": "Via Roma 1",
                    "position": "45.0, 9.0", "closed": false, "offline": false
                }
            }
        }),
    )
}

fn routed_lot(lot_id: &str) -> LotState {
    let mut lot = LotState::default();
    lot.reset_for_route_change(Some(lot_id.to_owned()));
    lot
}

#[test]
fn info_broadcast_replaces_lot_list_and_clears_loading() {
    let mut lots = LotsState { items: Vec::new(), loading: true };

    assert!(apply_lot_collection(&info_broadcast(), &mut lots));

    assert_eq!(lots.items.len(), 1);
    let lot = &lots.items[0];
    assert_eq!(lot.name, "Lot A");
    assert!(!lot.offline);
    assert_eq!(lot.lat, 45.0);
    assert_eq!(lot.lng, 9.0);
    assert!(!lots.loading);
}

#[test]
fn info_broadcast_wins_over_previous_state() {
    let mut lots = LotsState::default();
    apply_lot_collection(&info_broadcast(), &mut lots);

    let empty = Event::new("info", serde_json::json!({ "info": {} }));
    apply_lot_collection(&empty, &mut lots);

    assert!(lots.items.is_empty());
}

#[test]
fn scoped_events_are_not_consumed_as_lot_collection() {
    let mut lots = LotsState::default();
    let event = Event::new("1_info", serde_json::json!({ "info": {} }));
    assert!(!apply_lot_collection(&event, &mut lots));
}

#[test]
fn scoped_info_updates_the_routed_lot() {
    let mut lot = routed_lot("1");
    let event = Event::new(
        "1_info",
        serde_json::json!({
            "info": {"id": "1", "name": "Lot A", "address": "Via Roma 1", "closed": false}
        }),
    );

    assert!(apply_scoped_event(&event, &mut lot));

    let info = lot.info.expect("lot info");
    assert_eq!(info.name, "Lot A");
    assert!(!info.closed);
}

#[test]
fn scoped_info_for_another_lot_is_dropped() {
    let mut lot = routed_lot("2");
    let event = Event::new("1_info", serde_json::json!({ "info": {"id": "1", "name": "Lot A"} }));

    // Consumed by the filter, but never applied.
    assert!(apply_scoped_event(&event, &mut lot));
    assert!(lot.info.is_none());
}

#[test]
fn scoped_events_after_teardown_are_dropped() {
    let mut lot = routed_lot("1");
    lot.reset_for_route_change(None);

    let event = Event::new("1_info", serde_json::json!({ "info": {"id": "1", "name": "Lot A"} }));
    assert!(apply_scoped_event(&event, &mut lot));
    assert!(lot.info.is_none());
}

#[test]
fn scoped_spaces_replace_the_grid_wholesale() {
    let mut lot = routed_lot("1");

    let first = Event::new(
        "1_parking",
        serde_json::json!({
            "network": {
                "0": {"online": "true", "booked": "false", "status": "free"},
                "1": {"online": "true", "booked": "false", "status": "occupied"}
            }
        }),
    );
    assert!(apply_scoped_event(&first, &mut lot));
    assert_eq!(lot.spaces.len(), 2);

    let second = Event::new(
        "1_parking",
        serde_json::json!({
            "network": {"0": {"online": "false", "booked": "false", "status": ""}}
        }),
    );
    assert!(apply_scoped_event(&second, &mut lot));
    assert_eq!(lot.spaces.len(), 1);
    assert!(!lot.spaces[0].online);
}

#[test]
fn unknown_event_names_are_left_for_the_caller() {
    let mut lot = routed_lot("1");
    let event = Event::new("my response", serde_json::json!({"data": "Connected"}));
    assert!(!apply_scoped_event(&event, &mut lot));
}
