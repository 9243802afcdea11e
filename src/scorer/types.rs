use serde::Serialize;

use super::stats::TextStats;

/// One metric's contribution to the composite.
#[derive(Debug, Clone, Serialize)]
pub struct MetricScore {
    pub name: &'static str,
    /// Raw formula output.
    pub raw: f64,
    /// (raw - min) / (max - min), unclamped.
    pub normalized: f64,
    /// weight * normalized.
    pub weighted: f64,
}

/// Full scoring breakdown for the report layer.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetails {
    /// 100 * sum of weighted contributions. Nominally 0-100, unclamped.
    pub composite: f64,
    pub metrics: Vec<MetricScore>,
    pub stats: TextStats,
}
