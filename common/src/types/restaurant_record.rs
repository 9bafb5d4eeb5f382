use serde::{Deserialize, Serialize};

/// A candidate point of interest as supplied by the data source.
///
/// Coordinates are in degrees. Range validity is the data source's concern;
/// the filter only rejects non-finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantRecord {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are usable by the distance computation.
    pub fn has_finite_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
