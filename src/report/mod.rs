pub mod json;
pub mod md;

use crate::error::PerfError;
use crate::types::points::{PerformancePointTotalWithTime, TaskBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_buckets(
    buckets: &[PerformancePointTotalWithTime],
    format: OutputFormat,
) -> Result<String, PerfError> {
    match format {
        OutputFormat::Json => json::to_json(buckets).map_err(PerfError::Json),
        OutputFormat::Md => Ok(md::buckets_to_markdown(buckets)),
    }
}

pub fn render_breakdown(rows: &[TaskBreakdown], format: OutputFormat) -> Result<String, PerfError> {
    match format {
        OutputFormat::Json => json::to_json(rows).map_err(PerfError::Json),
        OutputFormat::Md => Ok(md::breakdown_to_markdown(rows)),
    }
}
