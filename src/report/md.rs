use crate::types::points::{PerformancePointTotalWithTime, TaskBreakdown};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn buckets_to_markdown(buckets: &[PerformancePointTotalWithTime]) -> String {
    let mut output = String::new();
    output.push_str("# Performance Points\n\n");
    if buckets.is_empty() {
        output.push_str("- no completed tasks in range\n");
        return output;
    }

    output.push_str(
        "| identifier | start | end | base | creative task | creative process | total |\n",
    );
    output.push_str("|---|---|---|---:|---:|---:|---:|\n");
    for bucket in buckets {
        let total = &bucket.performance_point;
        output.push_str(&format!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            total.identifier,
            bucket.start_date.format(DATE_FORMAT),
            bucket.end_date.format(DATE_FORMAT),
            total.total_base_point,
            total.total_creative_task_point,
            total.total_creative_process_point,
            total.total_performance_point
        ));
    }

    output
}

pub fn breakdown_to_markdown(rows: &[TaskBreakdown]) -> String {
    let mut output = String::new();
    output.push_str("# Task Breakdown\n\n");
    if rows.is_empty() {
        output.push_str("- no completed tasks in range\n");
        return output;
    }

    output.push_str(
        "| task | assignee | team | type | project | level | done | base | creative | total |\n",
    );
    output.push_str("|---|---|---|---|---|---:|---|---:|---:|---:|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} ({}) | {} | {} | {} | {} | {} | {} | {:.2} | {:.2} | {:.2} |\n",
            row.task_name,
            row.task_id,
            row.assignee_id,
            row.team,
            row.task_type.as_deref().unwrap_or("-"),
            row.project.as_deref().unwrap_or("-"),
            row.level,
            row.done_date.format(DATE_FORMAT),
            row.score.base_point,
            row.score.creative_point(),
            row.score.total_performance
        ));
    }

    output
}
