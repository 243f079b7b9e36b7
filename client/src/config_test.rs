use super::*;

#[test]
fn ws_url_for_maps_http_schemes_to_ws() {
    assert_eq!(ws_url_for("http://localhost:5000"), "ws://localhost:5000/socket");
    assert_eq!(ws_url_for("https://parking.example.com"), "wss://parking.example.com/socket");
}

#[test]
fn ws_url_for_defaults_bare_hosts_to_ws() {
    assert_eq!(ws_url_for("localhost:5000"), "ws://localhost:5000/socket");
}

#[test]
fn ws_url_for_strips_trailing_slashes() {
    assert_eq!(ws_url_for("http://localhost:5000/"), "ws://localhost:5000/socket");
}
