use crate::engine::query::{query_performance, QueryRequest};
use crate::error::{PerfError, Result};
use crate::store::TaskStore;
use crate::types::points::PerformancePointTotalWithTime;
use chrono::{DateTime, Utc};
use rayon::prelude::*;

/// Runs one query per identifier on a pool of `workers` threads.
///
/// Results are concatenated in the order of `identifiers`. The first store
/// failure fails the whole batch.
pub fn query_batch<S>(
    store: &S,
    identifiers: &[String],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    is_team: bool,
    is_weekly: bool,
    workers: usize,
) -> Result<Vec<PerformancePointTotalWithTime>>
where
    S: TaskStore + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|index| format!("perfpoint-query-{index}"))
        .build()
        .map_err(|err| PerfError::WorkerPool(err.to_string()))?;

    let per_identifier = pool.install(|| {
        identifiers
            .par_iter()
            .map(|identifier| {
                let request = QueryRequest::new(identifier.as_str(), start, end, is_team, is_weekly);
                query_performance(store, &request)
            })
            .collect::<std::result::Result<Vec<_>, _>>()
    })?;

    Ok(per_identifier.into_iter().flatten().collect())
}
