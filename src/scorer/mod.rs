//! Composite readability scoring.
//!
//! Five standard readability formulas run over a shared single-pass
//! [`TextStats`]. Each raw value is mapped linearly onto [0,1] using
//! per-metric calibration bounds, weighted, and summed into a nominal
//! 0-100 composite. No clamping: out-of-range raw values propagate as
//! a more extreme composite rather than being clipped.

pub mod metrics;
pub mod stats;
pub mod syllables;
pub mod types;
pub mod vocabulary;

use strum::IntoEnumIterator;

use crate::error::{PgResult, ProseGateError};
pub use metrics::{MetricKind, ReadabilityMetric};
pub use stats::TextStats;
pub use types::{MetricScore, ScoreDetails};

/// One metric plus its calibration range and weight.
pub struct MetricSpec {
    pub metric: Box<dyn ReadabilityMetric>,
    pub weight: f64,
    /// Raw value mapped to 0.0. May exceed `max` (inverted scale).
    pub min: f64,
    /// Raw value mapped to 1.0.
    pub max: f64,
}

pub struct MetricTable {
    specs: Vec<MetricSpec>,
}

impl MetricTable {
    /// The fixed table: five metrics, weights summing to ~1.0. The
    /// constants are trusted; no runtime validation happens here.
    pub fn standard() -> Self {
        let specs = MetricKind::iter()
            .map(|kind| {
                let (weight, min, max) = kind.calibration();
                MetricSpec {
                    metric: Box::new(kind),
                    weight,
                    min,
                    max,
                }
            })
            .collect();
        Self { specs }
    }

    /// Build a pluggable table. Rejects any spec whose calibration range
    /// is empty (min == max would divide by zero at scoring time).
    pub fn new(specs: Vec<MetricSpec>) -> PgResult<Self> {
        for spec in &specs {
            if (spec.max - spec.min).abs() < f64::EPSILON {
                return Err(ProseGateError::Validation(format!(
                    "metric '{}' has an empty calibration range (min == max == {})",
                    spec.metric.name(),
                    spec.min
                )));
            }
        }
        let total: f64 = specs.iter().map(|s| s.weight).sum();
        if (total - 1.0).abs() > 0.01 {
            tracing::warn!(total, "metric weights do not sum to 1.0");
        }
        Ok(Self { specs })
    }

    /// Composite score for already-normalized text.
    pub fn score(&self, text: &str) -> f64 {
        let stats = TextStats::analyze(text);
        self.specs
            .iter()
            .map(|s| s.weight * normalize_raw(s.metric.compute(&stats), s.min, s.max))
            .sum::<f64>()
            * 100.0
    }

    /// Composite score plus the per-metric breakdown.
    pub fn score_debug(&self, text: &str) -> ScoreDetails {
        let stats = TextStats::analyze(text);
        let metrics: Vec<MetricScore> = self
            .specs
            .iter()
            .map(|s| {
                let raw = s.metric.compute(&stats);
                let normalized = normalize_raw(raw, s.min, s.max);
                MetricScore {
                    name: s.metric.name(),
                    raw,
                    normalized,
                    weighted: s.weight * normalized,
                }
            })
            .collect();
        let composite = metrics.iter().map(|m| m.weighted).sum::<f64>() * 100.0;
        ScoreDetails {
            composite,
            metrics,
            stats,
        }
    }
}

fn normalize_raw(raw: f64, min: f64, max: f64) -> f64 {
    (raw - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeMetric {
        value: f64,
    }

    impl ReadabilityMetric for FakeMetric {
        fn name(&self) -> &'static str {
            "fake"
        }
        fn compute(&self, _stats: &TextStats) -> f64 {
            self.value
        }
    }

    fn single(value: f64, min: f64, max: f64) -> MetricTable {
        MetricTable::new(vec![MetricSpec {
            metric: Box::new(FakeMetric { value }),
            weight: 1.0,
            min,
            max,
        }])
        .unwrap()
    }

    #[test]
    fn upright_scale_increases_with_raw() {
        let low = single(3.0, 0.0, 10.0).score("x");
        let high = single(7.0, 0.0, 10.0).score("x");
        assert!(high > low);
    }

    #[test]
    fn inverted_scale_decreases_with_raw() {
        let low = single(3.0, 10.0, 0.0).score("x");
        let high = single(7.0, 10.0, 0.0).score("x");
        assert!(high < low);
    }

    #[test]
    fn no_clamping_above_calibration_range() {
        let score = single(20.0, 0.0, 10.0).score("x");
        assert!((score - 200.0).abs() < 1e-9);
    }

    #[test]
    fn empty_calibration_range_is_rejected() {
        let result = MetricTable::new(vec![MetricSpec {
            metric: Box::new(FakeMetric { value: 1.0 }),
            weight: 1.0,
            min: 5.0,
            max: 5.0,
        }]);
        assert!(matches!(result, Err(ProseGateError::Validation(_))));
    }

    #[test]
    fn standard_weights_sum_to_one() {
        let total: f64 = MetricTable::standard().specs.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
