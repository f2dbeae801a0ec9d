//! The submit cycle: load, validate, append, save, rebuild.
//!
//! Every interaction rereads the collection from the store rather than
//! keeping process-wide state, so the chart always reflects the latest
//! durable data. With one user and one in-flight request the load/save pair
//! cannot race.

use sl_core::{ChartDescription, chart, parse_entry};
use sl_store::Store;

/// Outcome of one interaction, rendered back to the page.
#[derive(Debug)]
pub struct Interaction {
    /// The freshly built chart, returned regardless of whether an append
    /// occurred.
    pub chart: ChartDescription,
    /// User-visible error text, if the submission was rejected or storage
    /// failed. Rejections leave the persisted collection unchanged.
    pub error: Option<String>,
    /// Whether an entry was appended and persisted.
    pub appended: bool,
}

/// Handles the initial page load: no validation, no append.
pub fn current(store: &Store) -> Interaction {
    match store.load() {
        Ok(entries) => Interaction {
            chart: chart::build(&entries),
            error: None,
            appended: false,
        },
        Err(e) => {
            tracing::error!(error = %e, "failed to load entries");
            Interaction {
                chart: chart::build(&[]),
                error: Some(e.to_string()),
                appended: false,
            }
        }
    }
}

/// Handles one submit action: a self-contained
/// read-validate-append-write-render cycle.
///
/// Blank fields make the submission a no-op; the chart is still rebuilt
/// from the persisted entries. A rejected submission surfaces its error
/// inline instead of only logging it. A failed save keeps the appended
/// entry on the rendered chart and reports the failure as a non-fatal
/// error.
pub fn submit(store: &Store, start_str: &str, end_str: &str) -> Interaction {
    let mut entries = match store.load() {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "failed to load entries");
            return Interaction {
                chart: chart::build(&[]),
                error: Some(e.to_string()),
                appended: false,
            };
        }
    };

    let mut error = None;
    let mut appended = false;

    if !start_str.trim().is_empty() && !end_str.trim().is_empty() {
        match parse_entry(start_str, end_str) {
            Ok(entry) => {
                entries.push(entry);
                match store.save(&entries) {
                    Ok(()) => {
                        tracing::debug!(count = entries.len(), "entry appended");
                        appended = true;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to save entries");
                        error = Some(format!("could not save entries: {e}"));
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected submission");
                error = Some(e.to_string());
            }
        }
    }

    Interaction {
        chart: chart::build(&entries),
        error,
        appended,
    }
}
