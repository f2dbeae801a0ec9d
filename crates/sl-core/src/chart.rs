//! Chart construction: turns the entry collection into a declarative
//! bar-chart description for the rendering layer.
//!
//! The layout is fixed: one bar per entry, x positioned by the start date,
//! the bar spanning from the start hour-of-day up to the end hour-of-day on
//! a [0, 24] axis. The full history is rebuilt on every call; there is no
//! incremental update path.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::entry::SleepEntry;

/// Declarative chart structure consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub title: String,
    pub bars: Vec<Bar>,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
}

/// One bar: a vertical segment at `date` from `base` to `base + height`,
/// both in fractional hours of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub base: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XAxis {
    pub title: String,
    pub tick_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub title: String,
    pub range: [f64; 2],
    pub tick_labels: Vec<String>,
}

/// Builds the chart description for the full entry collection.
///
/// An interval that crosses midnight yields `end_hour < start_hour` and
/// therefore a negative height, because the date and base are always taken
/// from the start timestamp. This is the recorded behavior of the chart
/// contract, kept rather than silently redefined; see `DESIGN.md`.
pub fn build(entries: &[SleepEntry]) -> ChartDescription {
    let bars = entries
        .iter()
        .map(|entry| {
            let base = hour_of_day(entry.start_time);
            Bar {
                date: entry.start_time.date(),
                base,
                height: hour_of_day(entry.end_time) - base,
            }
        })
        .collect();

    ChartDescription {
        title: "Sleep Duration per Day".to_string(),
        bars,
        x_axis: XAxis {
            title: "Date".to_string(),
            tick_format: "%Y-%m-%d".to_string(),
        },
        y_axis: YAxis {
            title: "Hour of the Day".to_string(),
            range: [0.0, 24.0],
            tick_labels: (0..=24).map(|hour| format!("{hour:02}:00")).collect(),
        },
    }
}

/// Fractional hour of day in [0, 24), e.g. 22:30 → 22.5.
fn hour_of_day(t: NaiveDateTime) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0
}
