use crate::constants::DISTANCE_DECIMALS;
use crate::types::restaurant_record::RestaurantRecord;
use crate::utils::round_to_decimals;
use serde::{Deserialize, Serialize};

/// A record that matched a query, annotated with its distance to the
/// reference point in meters, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}

impl SearchResult {
    /// Builds a result from a record and its raw (unrounded) distance.
    pub fn from_record(record: &RestaurantRecord, raw_distance: f64) -> Self {
        Self {
            name: record.name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            distance: round_to_decimals(raw_distance, DISTANCE_DECIMALS),
        }
    }
}
