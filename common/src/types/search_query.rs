use crate::errors::FilterError;
use crate::types::reference_point::ReferencePoint;
use serde::{Deserialize, Serialize};

/// Parameters of a single proximity query: where to search and how far.
///
/// The query is `Copy` so it can be broadcast to every partition worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub reference: ReferencePoint,
    /// Inclusive search radius in meters.
    pub radius: f64,
}

impl SearchQuery {
    pub fn new(reference: ReferencePoint, radius: f64) -> Self {
        Self { reference, radius }
    }

    /// Rejects queries that must not reach the distance computation.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.radius.is_nan() || self.radius < 0.0 {
            return Err(FilterError::InvalidRadius(self.radius));
        }
        if !self.reference.is_finite() {
            return Err(FilterError::InvalidReferencePoint {
                latitude: self.reference.latitude,
                longitude: self.reference.longitude,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> ReferencePoint {
        ReferencePoint::new(48.8566, 2.3522)
    }

    #[test]
    fn test_zero_and_positive_radius_are_valid() {
        assert!(SearchQuery::new(paris(), 0.0).validate().is_ok());
        assert!(SearchQuery::new(paris(), 1500.0).validate().is_ok());
        assert!(SearchQuery::new(paris(), f64::INFINITY).validate().is_ok());
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let err = SearchQuery::new(paris(), -1.0).validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidRadius(r) if r == -1.0));
    }

    #[test]
    fn test_nan_radius_is_rejected() {
        let err = SearchQuery::new(paris(), f64::NAN).validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidRadius(_)));
    }

    #[test]
    fn test_non_finite_reference_is_rejected() {
        let query = SearchQuery::new(ReferencePoint::new(f64::NAN, 2.0), 100.0);
        assert!(matches!(
            query.validate(),
            Err(FilterError::InvalidReferencePoint { .. })
        ));
    }
}
