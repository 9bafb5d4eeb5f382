use thiserror::Error;

/// Failure of a proximity query. A failed query never carries partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid radius {0}: must be a non-negative number of meters")]
    InvalidRadius(f64),

    #[error("invalid reference point ({latitude}, {longitude})")]
    InvalidReferencePoint { latitude: f64, longitude: f64 },

    #[error("malformed record '{name}': coordinates ({latitude}, {longitude}) are not finite")]
    MalformedRecord {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("partition {partition} failed: {source}")]
    PartitionFailure {
        partition: usize,
        #[source]
        source: Box<FilterError>,
    },

    #[error("partition worker unavailable: {0}")]
    WorkerUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_partition_failure_keeps_its_cause() {
        let err = FilterError::PartitionFailure {
            partition: 3,
            source: Box::new(FilterError::MalformedRecord {
                name: "Le Zinc".to_string(),
                latitude: f64::NAN,
                longitude: 2.3,
            }),
        };
        assert!(err.to_string().starts_with("partition 3 failed: malformed record 'Le Zinc'"));
        assert!(err.source().is_some());
    }
}
