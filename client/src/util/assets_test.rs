use super::*;

#[test]
fn lot_image_url_follows_id_convention() {
    assert_eq!(lot_image_url("3"), "/img/3.jpg");
}
