//! Wire records and domain model for lots and spaces.
//!
//! DESIGN
//! ======
//! The backend encodes booleans loosely: spaces carry `"true"`/`"false"`
//! strings, the lot `closed` flag arrives as a 0/1 tinyint from the database
//! but as a real bool on command echoes. Wire records mirror that encoding;
//! the domain types carry proper booleans, translated once at the network
//! boundary.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A parking lot as represented on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotRecord {
    /// Lot identifier; some backend paths serialize it as a bare number.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Position as a `"lat, lng"` string; parsed with [`parse_position`].
    #[serde(default)]
    pub position: String,
    /// Whether the lot was closed by an operator.
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub closed: bool,
    /// Whether the lot's sensor network is unreachable.
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub offline: bool,
}

/// A parking space as represented on the wire.
///
/// `booked` holds the booking user's identifier, or the literal `"false"`
/// when unbooked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceRecord {
    /// `"true"` when the space's sensor is reachable.
    #[serde(default)]
    pub online: String,
    /// Booking user id, or `"false"`.
    #[serde(default = "false_string")]
    pub booked: String,
    /// Sensor status, e.g. `"free"` or `"occupied"`.
    #[serde(default)]
    pub status: String,
}

fn false_string() -> String {
    "false".to_owned()
}

/// A parking lot with booleans and coordinates resolved for the views.
#[derive(Clone, Debug, PartialEq)]
pub struct ParkingLot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub closed: bool,
    pub offline: bool,
    /// Latitude; NaN when the position string was missing or malformed.
    pub lat: f64,
    /// Longitude; NaN when the position string was missing or malformed.
    pub lng: f64,
}

impl From<LotRecord> for ParkingLot {
    fn from(record: LotRecord) -> Self {
        let (lat, lng) = parse_position(&record.position);
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            closed: record.closed,
            offline: record.offline,
            lat,
            lng,
        }
    }
}

impl ParkingLot {
    /// Availability dot for the list view; offline lots show none.
    #[must_use]
    pub fn indicator(&self) -> Option<Indicator> {
        if self.offline {
            None
        } else if self.closed {
            Some(Indicator::Red)
        } else {
            Some(Indicator::Green)
        }
    }
}

/// A parking space with its string flags resolved to booleans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkingSpace {
    pub online: bool,
    pub booked: bool,
    pub status: String,
}

impl From<SpaceRecord> for ParkingSpace {
    fn from(record: SpaceRecord) -> Self {
        Self {
            online: record.online == "true",
            // Anything other than the literal "false" is a booking user id.
            booked: record.booked != "false",
            status: record.status,
        }
    }
}

impl ParkingSpace {
    /// Derived availability, priority: offline, booked, occupied, available.
    #[must_use]
    pub fn availability(&self) -> SpaceAvailability {
        if !self.online {
            SpaceAvailability::Offline
        } else if self.booked {
            SpaceAvailability::Booked
        } else if self.status == "occupied" {
            SpaceAvailability::Occupied
        } else {
            SpaceAvailability::Available
        }
    }
}

/// View-level availability of one space. Never stored; derived per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceAvailability {
    Offline,
    Booked,
    Occupied,
    Available,
}

impl SpaceAvailability {
    /// Display label for the detail grid.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Booked => "Booked",
            Self::Occupied => "Occupied",
            Self::Available => "Available",
        }
    }

    /// Indicator dot; offline spaces have none.
    #[must_use]
    pub fn indicator(self) -> Option<Indicator> {
        match self {
            Self::Offline => None,
            Self::Available => Some(Indicator::Green),
            Self::Booked | Self::Occupied => Some(Indicator::Red),
        }
    }
}

/// Colored availability indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Green,
    Red,
}

/// Parse a `"lat, lng"` position string into numeric components.
///
/// Missing or malformed components come back as NaN so a bad record degrades
/// to an off-map marker instead of an error.
#[must_use]
pub fn parse_position(position: &str) -> (f64, f64) {
    let mut parts = position.splitn(2, ',');
    let lat = parse_component(parts.next());
    let lng = parse_component(parts.next());
    (lat, lng)
}

fn parse_component(part: Option<&str>) -> f64 {
    part.map_or(f64::NAN, |p| p.trim().parse().unwrap_or(f64::NAN))
}

/// Parse the `info` broadcast payload (`{"info": {<lotId>: LotRecord}}`)
/// into an ordered lot list.
///
/// Object key order is not part of the contract, so lots are sorted by id
/// for stable rendering. Rows that fail to deserialize are dropped.
#[must_use]
pub fn lot_collection_from_payload(data: &Value) -> Vec<ParkingLot> {
    let Some(rows) = data.get("info").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut lots: Vec<ParkingLot> = rows
        .values()
        .filter_map(|row| serde_json::from_value::<LotRecord>(row.clone()).ok())
        .map(ParkingLot::from)
        .collect();
    lots.sort_by(|a, b| a.id.cmp(&b.id));
    lots
}

/// Parse a `<lotId>_info` payload (`{"info": LotRecord}`).
#[must_use]
pub fn lot_from_payload(data: &Value) -> Option<ParkingLot> {
    let record = serde_json::from_value::<LotRecord>(data.get("info")?.clone()).ok()?;
    Some(record.into())
}

/// Parse a `<lotId>_parking` payload (`{"network": {<key>: SpaceRecord}}`)
/// into a space list ordered by key, numerically when keys are indexes.
#[must_use]
pub fn spaces_from_payload(data: &Value) -> Vec<ParkingSpace> {
    let Some(rows) = data.get("network").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut keyed: Vec<(&String, &Value)> = rows.iter().collect();
    keyed.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    });

    keyed
        .into_iter()
        .filter_map(|(_, row)| serde_json::from_value::<SpaceRecord>(row.clone()).ok())
        .map(ParkingSpace::from)
        .collect()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Accept the backend's loose boolean encodings: real bools, 0/1 tinyints,
/// and `"true"`/`"false"` strings.
fn deserialize_loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Bool(v) => Ok(v),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => Ok(!matches!(s.as_str(), "" | "false" | "0")),
        Value::Null => Ok(false),
        _ => Err(D::Error::custom("expected boolean-like value")),
    }
}
