use crate::types::task::DateRange;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};

/// Splits `[start, end]` into consecutive buckets that close on Mondays.
///
/// The first bucket opens at midnight of `start`'s day. Each full bucket ends
/// at 23:59:59 of a Monday strictly after the bucket's start, and the next one
/// begins one second later. The tail bucket ends at `end` itself, or at
/// 23:59:59 of `end` when that day is a Monday, so the union always covers
/// `[start, end]`. Returns no buckets when `start` falls on a later day than
/// `end`.
pub fn split_by_monday(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateRange> {
    let first_day = start_of_day(start.date_naive());
    let last_day = start_of_day(end.date_naive());

    let mut buckets = Vec::new();
    let mut prev = first_day;
    let mut current = next_monday_after(first_day.date_naive());

    while start_of_day(current) < last_day {
        let close = end_of_day(current);
        buckets.push(DateRange::new(prev, close));
        prev = close + Duration::seconds(1);
        current += Duration::days(7);
    }

    if prev <= last_day {
        let close = if last_day.weekday() == Weekday::Mon {
            end_of_day(last_day.date_naive())
        } else {
            end
        };
        buckets.push(DateRange::new(prev, close));
    }

    buckets
}

fn next_monday_after(day: NaiveDate) -> NaiveDate {
    let ahead = 7 - i64::from(day.weekday().num_days_from_monday());
    day + Duration::days(ahead)
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(chrono::NaiveTime::MIN))
}

fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    start_of_day(day) + Duration::seconds(86_399)
}
