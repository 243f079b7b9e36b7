use super::*;

fn sample_event() -> Event {
    Event::new(
        "info",
        serde_json::json!({
            "info": {
                "1": {"id": "1", "name": "Lot A", "position": "45.0, 9.0"}
            }
        }),
    )
}

#[test]
fn encode_decode_round_trip_preserves_event() {
    let event = sample_event();
    let text = encode_event(&event);
    let decoded = decode_event(&text).expect("decode should succeed");
    assert_eq!(decoded, event);
}

#[test]
fn encode_event_produces_single_json_object() {
    let text = encode_event(&sample_event());
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value.get("name"), Some(&serde_json::json!("info")));
    assert!(value.get("data").is_some());
}

#[test]
fn decode_event_rejects_malformed_text() {
    let err = decode_event("not json").expect_err("text should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_event_accepts_scalar_payloads() {
    let event = decode_event(r#"{"name":"getData","data":"home"}"#).expect("decode");
    assert_eq!(event.name, GET_DATA);
    assert_eq!(event.data, serde_json::json!(HOME_SCOPE));
}

#[test]
fn lot_scoped_names_follow_suffix_convention() {
    assert_eq!(lot_info_event("3"), "3_info");
    assert_eq!(lot_spaces_event("3"), "3_parking");
}

#[test]
fn scoped_lot_id_splits_info_and_parking_names() {
    assert_eq!(scoped_lot_id("3_info"), Some(("3", ScopedEvent::Info)));
    assert_eq!(scoped_lot_id("3_parking"), Some(("3", ScopedEvent::Spaces)));
}

#[test]
fn scoped_lot_id_keeps_underscored_lot_ids_intact() {
    assert_eq!(scoped_lot_id("lot_42_parking"), Some(("lot_42", ScopedEvent::Spaces)));
}

#[test]
fn scoped_lot_id_ignores_fixed_names() {
    assert_eq!(scoped_lot_id("info"), None);
    assert_eq!(scoped_lot_id("getData"), None);
    assert_eq!(scoped_lot_id("_info"), None);
    assert_eq!(scoped_lot_id("_parking"), None);
}
