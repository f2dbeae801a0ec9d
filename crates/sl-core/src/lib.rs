//! Core domain logic for the sleep logger.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: the recorded sleep interval and its serialized form
//! - Validation: parsing submitted timestamp strings
//! - Chart: building the per-day bar-chart description

pub mod chart;
mod entry;
pub mod validate;

pub use chart::{Bar, ChartDescription};
pub use entry::SleepEntry;
pub use validate::{ValidationError, parse_entry};
