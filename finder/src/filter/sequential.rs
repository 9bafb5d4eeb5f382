use common::errors::FilterError;
use common::types::restaurant_record::RestaurantRecord;
use common::types::search_query::SearchQuery;
use common::types::search_result::SearchResult;
use common::utils::haversine_distance;

/// In-memory, single-threaded proximity filter.
///
/// Walks the records once, in order, and keeps those whose distance to the
/// reference point is at most the radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialFilter;

impl SequentialFilter {
    pub fn new() -> Self {
        SequentialFilter
    }

    /// Validates `query` and filters `records` against it.
    ///
    /// Surviving records keep their relative input order.
    pub fn filter(
        &self,
        records: &[RestaurantRecord],
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, FilterError> {
        query.validate()?;
        filter_records(records, query)
    }
}

/// Filters and annotates `records` without validating the query first.
///
/// The radius comparison uses the unrounded distance; rounding only affects
/// the annotation. Any record with a non-finite coordinate fails the whole call.
pub(crate) fn filter_records(
    records: &[RestaurantRecord],
    query: &SearchQuery,
) -> Result<Vec<SearchResult>, FilterError> {
    let reference = query.reference;
    let mut nearby = Vec::new();

    for record in records {
        if !record.has_finite_position() {
            return Err(FilterError::MalformedRecord {
                name: record.name.clone(),
                latitude: record.latitude,
                longitude: record.longitude,
            });
        }
        let distance = haversine_distance(
            reference.latitude,
            reference.longitude,
            record.latitude,
            record.longitude,
        );
        if distance <= query.radius {
            nearby.push(SearchResult::from_record(record, distance));
        }
    }

    Ok(nearby)
}
