//! Parsing and validation of submitted timestamps.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::entry::SleepEntry;

/// The accepted input format: 24-hour clock, minute precision, no timezone.
const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Why a submission was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A field did not match the `YYYY-MM-DD HH:MM` format.
    #[error("{field} is not a valid timestamp (expected YYYY-MM-DD HH:MM): {value:?}")]
    Format { field: &'static str, value: String },
    /// Start was not strictly before end.
    #[error("start time must be before end time")]
    Order,
}

/// Parses a submitted start/end pair into a [`SleepEntry`].
///
/// There are deliberately no further semantic checks: no bound on interval
/// length, no overlap check against existing entries, no future-date check.
pub fn parse_entry(start_str: &str, end_str: &str) -> Result<SleepEntry, ValidationError> {
    let start_time = parse_field("start time", start_str)?;
    let end_time = parse_field("end time", end_str)?;

    if start_time >= end_time {
        return Err(ValidationError::Order);
    }

    Ok(SleepEntry {
        start_time,
        end_time,
    })
}

fn parse_field(field: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT).map_err(|_| ValidationError::Format {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn accepts_valid_pair() {
        let entry = parse_entry("2024-03-01 22:30", "2024-03-01 23:00").unwrap();

        let expected_start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(22, 30, 0).unwrap());
        assert_eq!(entry.start_time, expected_start);
        assert_eq!(entry.end_time - entry.start_time, chrono::Duration::minutes(30));
    }

    #[test]
    fn rejects_unparsable_start() {
        let err = parse_entry("not-a-date", "2024-03-01 22:00").unwrap_err();
        assert!(matches!(err, ValidationError::Format { field: "start time", .. }));
    }

    #[test]
    fn rejects_unparsable_end() {
        let err = parse_entry("2024-03-01 22:00", "22:00").unwrap_err();
        assert!(matches!(err, ValidationError::Format { field: "end time", .. }));
    }

    #[test]
    fn rejects_seconds_in_input() {
        // The format is fixed to minute precision.
        let err = parse_entry("2024-03-01 22:00:00", "2024-03-01 23:00").unwrap_err();
        assert!(matches!(err, ValidationError::Format { .. }));
    }

    #[test]
    fn rejects_start_after_end() {
        let err = parse_entry("2024-03-01 23:00", "2024-03-01 22:00").unwrap_err();
        assert_eq!(err, ValidationError::Order);
    }

    #[test]
    fn rejects_start_equal_to_end() {
        let err = parse_entry("2024-03-01 22:00", "2024-03-01 22:00").unwrap_err();
        assert_eq!(err, ValidationError::Order);
    }

    #[test]
    fn accepts_cross_midnight_pair() {
        // Nothing enforces same-day start/end; the chart layer decides how
        // such an interval renders.
        let entry = parse_entry("2024-03-01 23:00", "2024-03-02 01:00").unwrap();
        assert!(entry.start_time < entry.end_time);
    }
}
