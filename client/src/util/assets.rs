//! Static asset addressing conventions.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Image URL for a lot, by the `<lotId>.jpg` convention.
#[must_use]
pub fn lot_image_url(lot_id: &str) -> String {
    format!("/img/{lot_id}.jpg")
}
