//! Sleep interval records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded sleep interval.
///
/// Timestamps are naive (no timezone) because the input format carries none.
/// Serializes as ISO 8601 strings (e.g. `2024-03-01T22:30:00`), which is the
/// on-disk form used by the entry store.
///
/// Entries are immutable once created; [`crate::parse_entry`] is the only
/// constructor path that enforces `start_time < end_time`, and the invariant
/// is not re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEntry {
    /// When the sleep started.
    pub start_time: NaiveDateTime,
    /// When the sleep ended.
    pub end_time: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_entry;

    #[test]
    fn entry_serialization_roundtrip() {
        let entry = parse_entry("2024-03-01 22:30", "2024-03-01 23:00").unwrap();

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: SleepEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn entry_serializes_as_iso8601() {
        let entry = parse_entry("2024-03-01 22:30", "2024-03-01 23:00").unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["start_time"], "2024-03-01T22:30:00");
        assert_eq!(json["end_time"], "2024-03-01T23:00:00");
    }
}
