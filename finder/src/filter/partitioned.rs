use crate::filter::sequential::filter_records;
use actix::prelude::*;
use common::errors::FilterError;
use common::messages::FilterPartition;
use common::types::restaurant_record::RestaurantRecord;
use common::types::search_query::SearchQuery;
use common::types::search_result::SearchResult;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// How a dataset is split into partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionScheme {
    /// `n` contiguous partitions whose sizes differ by at most one record.
    Even(usize),
    /// Contiguous partitions of `k` records, the last one possibly shorter.
    FixedSize(usize),
    /// Explicit split points. Out-of-range and repeated points are ignored.
    Boundaries(Vec<usize>),
}

impl PartitionScheme {
    /// Splits `0..len` into non-empty, disjoint, ordered ranges covering it.
    pub fn ranges(&self, len: usize) -> Vec<Range<usize>> {
        match self {
            PartitionScheme::Even(count) => {
                let count = (*count).max(1);
                let base = len / count;
                let remainder = len % count;
                let mut ranges = Vec::with_capacity(count);
                let mut start = 0;
                for i in 0..count {
                    let size = base + usize::from(i < remainder);
                    if size > 0 {
                        ranges.push(start..start + size);
                    }
                    start += size;
                }
                ranges
            }
            PartitionScheme::FixedSize(size) => {
                let size = (*size).max(1);
                (0..len)
                    .step_by(size)
                    .map(|start| start..(start + size).min(len))
                    .collect()
            }
            PartitionScheme::Boundaries(points) => {
                let mut cuts: Vec<usize> = points
                    .iter()
                    .copied()
                    .filter(|&p| p > 0 && p < len)
                    .collect();
                cuts.sort_unstable();
                cuts.dedup();

                let mut ranges = Vec::with_capacity(cuts.len() + 1);
                let mut start = 0;
                for cut in cuts.into_iter().chain(std::iter::once(len)) {
                    if cut > start {
                        ranges.push(start..cut);
                    }
                    start = cut;
                }
                ranges
            }
        }
    }
}

/// Worker filtering one partition at a time on its own thread.
///
/// Workers hold no state: everything they need travels in the
/// [`FilterPartition`] message.
pub struct PartitionWorker;

impl Actor for PartitionWorker {
    type Context = SyncContext<Self>;
}

impl Handler<FilterPartition> for PartitionWorker {
    type Result = Result<Vec<SearchResult>, FilterError>;

    fn handle(&mut self, msg: FilterPartition, _ctx: &mut Self::Context) -> Self::Result {
        filter_records(msg.slice(), &msg.query)
    }
}

/// Proximity filter that spreads a dataset over a pool of worker threads.
///
/// Must be started from inside a running actix `System`. Dropping the filter
/// (and every query described by it) stops the workers.
pub struct PartitionedFilter {
    workers: Addr<PartitionWorker>,
    worker_count: usize,
    scheme: PartitionScheme,
}

impl PartitionedFilter {
    /// Starts `workers` threads (at least one) and uses `scheme` to split datasets.
    pub fn start(workers: usize, scheme: PartitionScheme) -> Self {
        let worker_count = workers.max(1);
        let workers = SyncArbiter::start(worker_count, || PartitionWorker);
        PartitionedFilter {
            workers,
            worker_count,
            scheme,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn scheme(&self) -> &PartitionScheme {
        &self.scheme
    }

    /// Describes the query without computing anything.
    ///
    /// The query is validated here so an invalid radius is rejected before a
    /// single distance is computed. Work starts on [`PartitionedQuery::collect`].
    pub fn describe(
        &self,
        records: Arc<Vec<RestaurantRecord>>,
        query: SearchQuery,
    ) -> Result<PartitionedQuery, FilterError> {
        query.validate()?;
        let partitions = self.scheme.ranges(records.len());
        Ok(PartitionedQuery {
            workers: self.workers.clone(),
            records,
            query,
            partitions,
        })
    }

    /// Describes and immediately materializes the query.
    pub async fn filter(
        &self,
        records: Arc<Vec<RestaurantRecord>>,
        query: SearchQuery,
    ) -> Result<Vec<SearchResult>, FilterError> {
        self.describe(records, query)?.collect().await
    }
}

/// A lazily described partitioned query.
pub struct PartitionedQuery {
    workers: Addr<PartitionWorker>,
    records: Arc<Vec<RestaurantRecord>>,
    query: SearchQuery,
    partitions: Vec<Range<usize>>,
}

impl fmt::Debug for PartitionedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionedQuery")
            .field("records", &self.records.len())
            .field("query", &self.query)
            .field("partitions", &self.partitions)
            .finish_non_exhaustive()
    }
}

impl PartitionedQuery {
    pub fn partitions(&self) -> &[Range<usize>] {
        &self.partitions
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Runs every partition and joins the partial results in partition order.
    ///
    /// All partitions are awaited before returning. If any of them failed the
    /// first failure (by partition index) is returned and every partial
    /// result is discarded.
    pub async fn collect(self) -> Result<Vec<SearchResult>, FilterError> {
        let requests: Vec<_> = self
            .partitions
            .iter()
            .enumerate()
            .map(|(partition, range)| {
                self.workers.send(FilterPartition {
                    partition,
                    records: Arc::clone(&self.records),
                    range: range.clone(),
                    query: self.query,
                })
            })
            .collect();

        let mut nearby = Vec::new();
        let mut failure = None;
        for (partition, request) in requests.into_iter().enumerate() {
            match request.await {
                Ok(Ok(mut partial)) => nearby.append(&mut partial),
                Ok(Err(source)) => {
                    failure.get_or_insert(FilterError::PartitionFailure {
                        partition,
                        source: Box::new(source),
                    });
                }
                Err(mailbox) => {
                    failure.get_or_insert(FilterError::WorkerUnavailable(mailbox.to_string()));
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(nearby),
        }
    }
}
