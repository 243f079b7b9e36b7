use super::*;

use events::model::ParkingLot;

fn lot(name: &str, lat: f64, lng: f64) -> ParkingLot {
    ParkingLot {
        id: "1".to_owned(),
        name: name.to_owned(),
        address: String::new(),
        closed: false,
        offline: false,
        lat,
        lng,
    }
}

#[test]
fn markers_carry_coordinates_and_an_initial_label() {
    let lots = LotsState {
        items: vec![lot("Lot A", 45.0, 9.0)],
        loading: false,
    };
    assert_eq!(
        markers_for(&lots),
        vec![MapMarker { lat: 45.0, lng: 9.0, label: "L".to_owned() }]
    );
}

#[test]
fn lots_with_unparseable_positions_get_no_marker() {
    let lots = LotsState {
        items: vec![lot("Lot A", f64::NAN, f64::NAN), lot("Lot B", 45.1, 9.1)],
        loading: false,
    };
    let markers = markers_for(&lots);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].lat, 45.1);
}
