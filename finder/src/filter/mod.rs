//! Proximity filtering: keep the records within a radius of a reference
//! point and annotate them with their distance.
//!
//! Two interchangeable backends implement the same contract:
//!
//! * [`SequentialFilter`] walks the records on the calling thread.
//! * [`PartitionedFilter`] splits them across a pool of worker threads and
//!   joins the partial results once every partition is done.
//!
//! Both return the same set of `{name, distance}` results for the same input.
//! The sequential backend preserves input order, the partitioned one returns
//! results in partition order. Neither sorts by distance.

pub mod partitioned;
pub mod sequential;

pub use partitioned::{PartitionScheme, PartitionedFilter, PartitionedQuery};
pub use sequential::SequentialFilter;

use common::errors::FilterError;
use common::types::restaurant_record::RestaurantRecord;
use common::types::search_query::SearchQuery;
use common::types::search_result::SearchResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which backend runs the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Partitioned {
        workers: usize,
        scheme: PartitionScheme,
    },
}

/// Results of one query plus what the caller needs to monitor it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub results: Vec<SearchResult>,
    pub input_count: usize,
    pub output_count: usize,
    /// Wall time of the filter pass alone.
    pub elapsed: Duration,
}

/// The filter-and-annotate capability, backed by one of the two modes.
pub enum FilterBackend {
    Sequential(SequentialFilter),
    Partitioned(PartitionedFilter),
}

impl FilterBackend {
    /// Builds the backend selected by `mode`.
    ///
    /// The partitioned backend starts its workers, so it must be built from
    /// inside a running actix `System`.
    pub fn from_mode(mode: &ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Sequential => FilterBackend::Sequential(SequentialFilter::new()),
            ExecutionMode::Partitioned { workers, scheme } => {
                FilterBackend::Partitioned(PartitionedFilter::start(*workers, scheme.clone()))
            }
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            FilterBackend::Sequential(_) => "sequential",
            FilterBackend::Partitioned(_) => "partitioned",
        }
    }

    /// Human readable description of the backend, for logs.
    pub fn summary(&self) -> String {
        match self {
            FilterBackend::Sequential(_) => self.mode_name().to_string(),
            FilterBackend::Partitioned(filter) => format!(
                "{} ({} workers, {:?})",
                self.mode_name(),
                filter.worker_count(),
                filter.scheme()
            ),
        }
    }

    pub async fn filter(
        &self,
        records: Arc<Vec<RestaurantRecord>>,
        query: SearchQuery,
    ) -> Result<Vec<SearchResult>, FilterError> {
        match self {
            FilterBackend::Sequential(filter) => filter.filter(&records, &query),
            FilterBackend::Partitioned(filter) => filter.filter(records, query).await,
        }
    }

    /// Runs the filter and measures it.
    pub async fn search(
        &self,
        records: Arc<Vec<RestaurantRecord>>,
        query: SearchQuery,
    ) -> Result<SearchReport, FilterError> {
        let input_count = records.len();
        let started = Instant::now();
        let results = self.filter(records, query).await?;
        let elapsed = started.elapsed();

        Ok(SearchReport {
            output_count: results.len(),
            results,
            input_count,
            elapsed,
        })
    }
}
