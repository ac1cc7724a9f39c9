use crate::engine::aggregate::aggregate;
use crate::engine::calendar::split_by_monday;
use crate::engine::score::score_task;
use crate::error::StoreError;
use crate::store::TaskStore;
use crate::types::points::{PerformancePointTotalWithTime, TaskBreakdown};
use crate::types::task::{CompletedTask, DateRange, TaskFilter};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// One performance query for a single identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub identifier: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub filter: TaskFilter,
    pub weekly: bool,
}

impl QueryRequest {
    pub fn new(
        identifier: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_team: bool,
        is_weekly: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            start,
            end,
            filter: TaskFilter::from_is_team(is_team),
            weekly: is_weekly,
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Time-stamped totals for `request.identifier`.
///
/// Level and tool tables are read once per call, and so are the tasks: a
/// weekly query fetches the span covered by its buckets in one store call and
/// assigns each task to the bucket holding its `done_date`. Weekly buckets with
/// no tasks are left out; otherwise a single bucket spans the whole range, or
/// nothing is returned when no task matched. Any store failure aborts the
/// call without partial results.
pub fn query_performance<S>(
    store: &S,
    request: &QueryRequest,
) -> Result<Vec<PerformancePointTotalWithTime>, StoreError>
where
    S: TaskStore + ?Sized,
{
    let levels = store.load_all_levels()?;
    let tools = store.load_all_tools()?;

    let windows = if request.weekly {
        split_by_monday(request.start, request.end)
    } else {
        vec![request.range()]
    };
    let (Some(first), Some(last)) = (windows.first(), windows.last()) else {
        return Ok(Vec::new());
    };
    let span = DateRange::new(first.start, last.end);
    let tasks = store.find_tasks(request.filter, &request.identifier, &span)?;

    let mut results = Vec::new();
    for window in &windows {
        let in_window: Vec<CompletedTask> = tasks
            .iter()
            .filter(|task| window.contains(task.done_date))
            .cloned()
            .collect();
        if in_window.is_empty() {
            debug!(
                identifier = %request.identifier,
                start = %window.start,
                end = %window.end,
                "bucket has no tasks"
            );
            continue;
        }

        let total = aggregate(&request.identifier, &in_window, &levels, &tools);
        debug!(
            identifier = %request.identifier,
            start = %window.start,
            tasks = in_window.len(),
            total = total.total_performance_point,
            "bucket aggregated"
        );
        results.push(PerformancePointTotalWithTime {
            start_date: window.start,
            end_date: window.end,
            performance_point: total,
        });
    }

    info!(
        identifier = %request.identifier,
        filter = request.filter.as_str(),
        weekly = request.weekly,
        windows = windows.len(),
        tasks = tasks.len(),
        buckets = results.len(),
        "performance query finished"
    );
    Ok(results)
}

/// Per-task score breakdown over the request's full range, in store order.
pub fn breakdown<S>(store: &S, request: &QueryRequest) -> Result<Vec<TaskBreakdown>, StoreError>
where
    S: TaskStore + ?Sized,
{
    let levels = store.load_all_levels()?;
    let tools = store.load_all_tools()?;
    let tasks = store.find_tasks(request.filter, &request.identifier, &request.range())?;

    Ok(tasks
        .iter()
        .map(|task| TaskBreakdown::new(task, score_task(task, &levels, &tools)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::table::{LevelEntry, ToolEntry, ToolKind};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn task(id: &str, assignee: &str, done: DateTime<Utc>, tools: Vec<u32>) -> CompletedTask {
        CompletedTask {
            task_id: id.to_string(),
            task_name: id.to_string(),
            assignee_id: assignee.to_string(),
            team: "Art".to_string(),
            tools,
            level: 2,
            done_date: done,
            task_type: Some("illustration".to_string()),
            project: Some("launch".to_string()),
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new(
            vec![
                // week ending Mon 2025-01-06
                task("a", "u-1", at(2025, 1, 2, 10), vec![1]),
                task("b", "u-2", at(2025, 1, 6, 23), vec![]),
                // week ending Mon 2025-01-20 (2025-01-07..13 is empty)
                task("c", "u-1", at(2025, 1, 15, 9), vec![1]),
            ],
            vec![LevelEntry {
                team: "Art".to_string(),
                level_point: vec![10.0, 20.0, 30.0],
            }],
            vec![ToolEntry {
                team: "Art".to_string(),
                tool_name: "ref-board".to_string(),
                index: 1,
                kind: ToolKind::Multiplicative,
                point: vec![0.5, 0.5],
            }],
        )
    }

    #[test]
    fn weekly_query_skips_empty_buckets() {
        let request = QueryRequest::new("Art", at(2025, 1, 1, 0), at(2025, 1, 20, 0), true, true);
        let results = query_performance(&store(), &request).expect("query should succeed");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].start_date, at(2025, 1, 1, 0));
        assert_eq!(
            results[0].end_date,
            Utc.with_ymd_and_hms(2025, 1, 6, 23, 59, 59).unwrap()
        );
        assert_eq!(results[0].performance_point.total_base_point, 10.0);
        assert_eq!(results[0].performance_point.total_creative_task_point, 30.0);
        assert_eq!(results[1].start_date, at(2025, 1, 14, 0));
        assert_eq!(results[1].performance_point.total_performance_point, 20.0);
    }

    #[test]
    fn range_query_returns_single_bucket_for_assignee() {
        let request = QueryRequest::new("u-1", at(2025, 1, 1, 0), at(2025, 1, 31, 0), false, false);
        let results = query_performance(&store(), &request).expect("query should succeed");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start_date, request.start);
        assert_eq!(results[0].end_date, request.end);
        assert_eq!(results[0].performance_point.identifier, "u-1");
        assert_eq!(results[0].performance_point.total_base_point, 20.0);
        assert_eq!(results[0].performance_point.total_performance_point, 40.0);
    }

    #[test]
    fn no_matching_tasks_is_empty_not_error() {
        let request = QueryRequest::new("Video", at(2025, 1, 1, 0), at(2025, 1, 31, 0), true, false);
        let results = query_performance(&store(), &request).expect("query should succeed");
        assert!(results.is_empty());

        let weekly = QueryRequest { weekly: true, ..request };
        assert!(query_performance(&store(), &weekly)
            .expect("query should succeed")
            .is_empty());
    }

    struct FailingStore;

    impl TaskStore for FailingStore {
        fn find_tasks(
            &self,
            _filter: TaskFilter,
            _identifier: &str,
            _range: &DateRange,
        ) -> Result<Vec<CompletedTask>, StoreError> {
            Err(StoreError::Timeout {
                elapsed_ms: 16_000,
                limit_ms: 15_000,
            })
        }

        fn load_all_levels(&self) -> Result<Vec<LevelEntry>, StoreError> {
            Ok(vec![])
        }

        fn load_all_tools(&self) -> Result<Vec<ToolEntry>, StoreError> {
            Ok(vec![])
        }
    }

    #[test]
    fn store_failure_aborts_query() {
        let request = QueryRequest::new("Art", at(2025, 1, 1, 0), at(2025, 1, 31, 0), true, true);
        let err = query_performance(&FailingStore, &request).expect_err("query should fail");
        assert!(matches!(err, StoreError::Timeout { .. }));
    }

    #[test]
    fn breakdown_scores_each_task() {
        let request = QueryRequest::new("u-1", at(2025, 1, 1, 0), at(2025, 1, 31, 0), false, false);
        let rows = breakdown(&store(), &request).expect("breakdown should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task_id, "a");
        assert_eq!(rows[0].project.as_deref(), Some("launch"));
        assert_eq!(rows[0].task_type.as_deref(), Some("illustration"));
        assert_eq!(rows[0].score.base_point, 10.0);
        assert_eq!(rows[1].score.creative_task_point, 10.0);
    }

    #[test]
    fn weekly_query_keeps_tasks_done_on_the_last_day() {
        let end = Utc.with_ymd_and_hms(2025, 1, 15, 23, 59, 59).unwrap();
        let request = QueryRequest::new("Art", at(2025, 1, 1, 0), end, true, true);
        let results = query_performance(&store(), &request).expect("query should succeed");

        let last = results.last().expect("last week should have a bucket");
        assert_eq!(last.start_date, at(2025, 1, 14, 0));
        assert_eq!(last.end_date, end);
        assert_eq!(last.performance_point.total_performance_point, 20.0);
    }

    struct CountingStore {
        inner: MemoryStore,
        lookups: AtomicUsize,
    }

    impl TaskStore for CountingStore {
        fn find_tasks(
            &self,
            filter: TaskFilter,
            identifier: &str,
            range: &DateRange,
        ) -> Result<Vec<CompletedTask>, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_tasks(filter, identifier, range)
        }

        fn load_all_levels(&self) -> Result<Vec<LevelEntry>, StoreError> {
            self.inner.load_all_levels()
        }

        fn load_all_tools(&self) -> Result<Vec<ToolEntry>, StoreError> {
            self.inner.load_all_tools()
        }
    }

    #[test]
    fn weekly_query_reads_tasks_once() {
        let counting = CountingStore {
            inner: store(),
            lookups: AtomicUsize::new(0),
        };
        let request = QueryRequest::new("Art", at(2024, 1, 1, 0), at(2025, 1, 31, 0), true, true);
        let results = query_performance(&counting, &request).expect("query should succeed");

        assert_eq!(results.len(), 2);
        assert_eq!(counting.lookups.load(Ordering::SeqCst), 1);
    }

    fn total_of(results: &[PerformancePointTotalWithTime]) -> f64 {
        results
            .iter()
            .map(|bucket| bucket.performance_point.total_performance_point)
            .sum()
    }

    proptest! {
        #[test]
        fn weekly_totals_sum_to_range_total(
            start_offset in 0i64..86_400 * 400,
            span_secs in 0i64..86_400 * 120,
            picks in prop::collection::vec((0.0f64..=1.0, 1u32..5, prop::bool::ANY), 0..12),
        ) {
            let start = at(2024, 1, 1, 0) + Duration::seconds(start_offset);
            let end = start + Duration::seconds(span_secs);
            let tasks = picks
                .iter()
                .enumerate()
                .map(|(i, (fraction, level, uses_tool))| {
                    // truncating keeps every done_date inside [start, end]
                    let offset = (span_secs as f64 * fraction) as i64;
                    let done_date = start + Duration::seconds(offset);
                    let mut done = task(&format!("t{i}"), "u-1", done_date, vec![]);
                    done.level = *level;
                    if *uses_tool {
                        done.tools = vec![1];
                    }
                    done
                })
                .collect::<Vec<_>>();
            let memory = MemoryStore { tasks, ..store() };

            let range = QueryRequest::new("Art", start, end, true, false);
            let weekly = QueryRequest { weekly: true, ..range.clone() };
            let range_results = query_performance(&memory, &range).expect("range query should succeed");
            let weekly_results = query_performance(&memory, &weekly).expect("weekly query should succeed");

            prop_assert_eq!(range_results.is_empty(), weekly_results.is_empty());
            prop_assert!((total_of(&range_results) - total_of(&weekly_results)).abs() < 1e-9);
        }
    }
}
