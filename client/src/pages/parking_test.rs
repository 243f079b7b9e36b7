use crate::net::apply::apply_scoped_event;
use crate::state::lot::LotState;
use crate::util::emit::toggle_closed_event;
use events::Event;

fn lot_info_echo(lot_id: &str, closed: bool) -> Event {
    Event::new(
        format!("{lot_id}_info"),
        serde_json::json!({
            "info": {
                "id": lot_id, "name": "Lot A", "address": "Via Roma 1",
                "position": "45.0, 9.0", "closed": closed, "offline": false
            }
        }),
    )
}

#[test]
fn close_command_followed_by_echo_flips_the_view_to_closed() {
    let mut lot = LotState::default();
    lot.reset_for_route_change(Some("1".to_owned()));

    // What the control emits for an open lot.
    let command = toggle_closed_event("1", false);
    assert_eq!(command.name, "close");
    assert_eq!(command.data, serde_json::json!("1"));

    // The backend echoes the new metadata; the grid hides and the control
    // flips to reopen purely off this state.
    assert!(apply_scoped_event(&lot_info_echo("1", true), &mut lot));
    let info = lot.info.expect("lot info");
    assert!(info.closed);
}

#[test]
fn reopen_command_matches_the_closed_state() {
    let command = toggle_closed_event("1", true);
    assert_eq!(command.name, "open");
}

#[test]
fn route_change_between_lots_drops_previous_lot_data() {
    let mut lot = LotState::default();
    lot.reset_for_route_change(Some("1".to_owned()));
    apply_scoped_event(&lot_info_echo("1", false), &mut lot);
    assert!(lot.info.is_some());

    lot.reset_for_route_change(Some("2".to_owned()));
    assert!(lot.info.is_none());
    assert!(lot.spaces.is_empty());

    // A late broadcast from the previous lot no longer applies.
    apply_scoped_event(&lot_info_echo("1", true), &mut lot);
    assert!(lot.info.is_none());
}
