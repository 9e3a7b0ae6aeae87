//! Inclusive date-range expansion by local calendar-day stepping.
//!
//! All arithmetic is on `chrono::NaiveDate` — year/month/day components, no
//! timestamps. Epoch-based stepping is safe for counting days but unsafe for
//! deriving the displayed day-of-month when the runtime's local offset
//! differs from UTC; parsing and re-serializing through the same calendar
//! basis avoids that boundary shift entirely.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO calendar-day string (`YYYY-MM-DD`).
///
/// # Errors
/// Returns [`ChartError::InvalidDay`] when the string is not a valid
/// calendar day.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DAY_FORMAT).map_err(|_| ChartError::InvalidDay(s.to_string()))
}

/// Serialize a calendar day back to `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Expand an inclusive `[start_date, end_date]` range into its day sequence.
///
/// A single-day range (`start_date == end_date`) yields exactly one element.
/// An inverted or unparseable range yields an empty sequence: malformed
/// bookings contribute nothing rather than aborting the render.
pub fn expand_days(start_date: &str, end_date: &str) -> Vec<String> {
    let (Ok(start), Ok(end)) = (parse_day(start_date), parse_day(end_date)) else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }

    let mut days = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut current = start;
    while current <= end {
        days.push(format_day(current));
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    days
}
