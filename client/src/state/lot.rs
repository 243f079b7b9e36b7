use events::model::{ParkingLot, ParkingSpace};

/// Detail-view state scoped to the routed lot.
///
/// `lot_id` doubles as the subscription filter: lot-scoped broadcasts are
/// applied only while their id matches, and clearing it on teardown releases
/// the subscription deterministically.
#[derive(Clone, Debug, Default)]
pub struct LotState {
    pub lot_id: Option<String>,
    pub info: Option<ParkingLot>,
    pub spaces: Vec<ParkingSpace>,
}

impl LotState {
    /// Reset for a route change to `next_lot_id`, dropping the previous
    /// lot's data so it can never bleed into the next one.
    pub fn reset_for_route_change(&mut self, next_lot_id: Option<String>) {
        self.lot_id = next_lot_id;
        self.info = None;
        self.spaces.clear();
    }
}
