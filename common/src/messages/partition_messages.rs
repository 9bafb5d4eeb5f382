use crate::errors::FilterError;
use crate::types::restaurant_record::RestaurantRecord;
use crate::types::search_query::SearchQuery;
use crate::types::search_result::SearchResult;
use actix::Message;
use std::ops::Range;
use std::sync::Arc;

/// Message asking a partition worker to filter one slice of the dataset.
///
/// ## Purpose
/// Sent once per partition when a partitioned query is materialized. The
/// worker computes the distance of every record in `range` to the query's
/// reference point and replies with the records inside the radius.
///
/// ## Contents
/// - `partition`: Index of the partition, reported back on failure.
/// - `records`: The whole dataset, shared read-only between workers.
/// - `range`: The slice of `records` owned by this partition.
/// - `query`: The broadcast reference point and radius.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<Vec<SearchResult>, FilterError>")]
pub struct FilterPartition {
    pub partition: usize,
    pub records: Arc<Vec<RestaurantRecord>>,
    pub range: Range<usize>,
    pub query: SearchQuery,
}

impl FilterPartition {
    /// The records this partition is responsible for.
    pub fn slice(&self) -> &[RestaurantRecord] {
        &self.records[self.range.clone()]
    }
}
