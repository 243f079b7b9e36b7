use events::model::ParkingLot;

/// List-view state backed by the `info` broadcast.
#[derive(Clone, Debug, Default)]
pub struct LotsState {
    /// All lots, ordered by id; replaced wholesale on each broadcast.
    pub items: Vec<ParkingLot>,
    /// True between the `getData` request and the first broadcast.
    pub loading: bool,
}
