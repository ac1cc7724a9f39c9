use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use perfpoint::error::PerfError;
use perfpoint::report::OutputFormat;
use perfpoint::types::config::ReportFormatSetting;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "perfpoint",
    version,
    about = "Performance point reporting for creative-production teams"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate performance points per identifier
    Query(QueryCommand),
    /// Show the score of every task behind a total
    Breakdown(BreakdownCommand),
    /// Check level and tool tables for data the engine falls back on
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct RangeArgs {
    /// Range start (RFC 3339, or YYYY-MM-DD for midnight UTC)
    #[arg(long)]
    pub start: String,
    /// Range end (RFC 3339, or YYYY-MM-DD for 23:59:59 UTC)
    #[arg(long)]
    pub end: String,
    /// Match identifiers against teams instead of assignees
    #[arg(long)]
    pub team: bool,
}

#[derive(Args)]
pub struct QueryCommand {
    #[arg(required = true)]
    pub identifiers: Vec<String>,
    #[command(flatten)]
    pub range: RangeArgs,
    /// Split the range into Monday-closed weekly buckets
    #[arg(long)]
    pub weekly: bool,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct BreakdownCommand {
    pub identifier: String,
    #[command(flatten)]
    pub range: RangeArgs,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl ReportFormat {
    /// Flag value first, then the configured default, then JSON.
    pub fn resolve(flag: Option<Self>, configured: Option<ReportFormatSetting>) -> OutputFormat {
        match (flag, configured) {
            (Some(Self::Json), _) => OutputFormat::Json,
            (Some(Self::Md), _) => OutputFormat::Md,
            (None, Some(ReportFormatSetting::Md)) => OutputFormat::Md,
            (None, _) => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

pub fn parse_bound(raw: &str, bound: Bound) -> Result<DateTime<Utc>, PerfError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| PerfError::InvalidDate(raw.to_string()))?;
    let time = match bound {
        Bound::Start => NaiveTime::MIN,
        Bound::End => NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| PerfError::InvalidDate(raw.to_string()))?,
    };
    Ok(Utc.from_utc_datetime(&day.and_time(time)))
}

impl RangeArgs {
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), PerfError> {
        let start = parse_bound(&self.start, Bound::Start)?;
        let end = parse_bound(&self.end, Bound::End)?;
        if start > end {
            return Err(PerfError::InvalidRange {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok((start, end))
    }
}
