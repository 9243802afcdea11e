pub mod config;
pub mod error;
pub mod gitlog;
pub mod normalize;
pub mod scorer;
// cmd and reports are binary modules (in main.rs or distinct files).

use once_cell::sync::Lazy;

pub use error::{PgResult, ProseGateError};

/// The process-wide standard metric table. Immutable configuration:
/// every scoring call sees the same weights and calibration bounds.
static STANDARD_TABLE: Lazy<scorer::MetricTable> = Lazy::new(scorer::MetricTable::standard);

/// Normalize a raw Markdown document and score it with the standard table.
pub fn score_document(markdown: &str) -> f64 {
    STANDARD_TABLE.score(&normalize::normalize(markdown))
}

/// Like [`score_document`], but returns the full per-metric breakdown.
pub fn score_document_debug(markdown: &str) -> scorer::ScoreDetails {
    STANDARD_TABLE.score_debug(&normalize::normalize(markdown))
}
