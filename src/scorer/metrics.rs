//! The five readability formulas, behind a single capability trait so
//! the table can be swapped for fakes in tests.

use strum_macros::{Display, EnumIter, IntoStaticStr};

use super::stats::TextStats;

pub trait ReadabilityMetric: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw formula value. Degenerate input (zero words or sentences)
    /// returns 0.0 rather than dividing by zero.
    fn compute(&self, stats: &TextStats) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum MetricKind {
    #[strum(serialize = "flesch_reading_ease")]
    FleschReadingEase,
    #[strum(serialize = "gunning_fog")]
    GunningFog,
    #[strum(serialize = "coleman_liau_index")]
    ColemanLiau,
    #[strum(serialize = "automated_readability_index")]
    AutomatedReadability,
    #[strum(serialize = "dale_chall_readability_score")]
    DaleChall,
}

impl MetricKind {
    /// (weight, min, max) for the standard table. min > max marks an
    /// inverted scale: a higher raw value means harder reading.
    pub fn calibration(self) -> (f64, f64, f64) {
        match self {
            MetricKind::FleschReadingEase => (0.1653977378, 0.0, 100.0),
            MetricKind::GunningFog => (0.2228367277, 19.0, 6.0),
            MetricKind::ColemanLiau => (0.1831723411, 19.0, 6.0),
            MetricKind::AutomatedReadability => (0.2325290236, 22.0, 6.0),
            MetricKind::DaleChall => (0.1960641698, 11.0, 4.9),
        }
    }
}

impl ReadabilityMetric for MetricKind {
    fn name(&self) -> &'static str {
        (*self).into()
    }

    fn compute(&self, stats: &TextStats) -> f64 {
        if stats.words == 0 || stats.sentences == 0 {
            return 0.0;
        }
        let words = stats.words as f64;
        let sentences = stats.sentences as f64;
        let wps = words / sentences;

        match self {
            MetricKind::FleschReadingEase => {
                206.835 - 1.015 * wps - 84.6 * (stats.syllables as f64 / words)
            }
            MetricKind::GunningFog => {
                0.4 * (wps + 100.0 * stats.polysyllables as f64 / words)
            }
            MetricKind::ColemanLiau => {
                let letters_per_100 = stats.letters as f64 / words * 100.0;
                let sentences_per_100 = sentences / words * 100.0;
                0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
            }
            MetricKind::AutomatedReadability => {
                4.71 * (stats.chars as f64 / words) + 0.5 * wps - 21.43
            }
            MetricKind::DaleChall => {
                let pct_difficult = stats.difficult_words as f64 / words * 100.0;
                let mut score = 0.1579 * pct_difficult + 0.0496 * wps;
                if pct_difficult > 5.0 {
                    score += 3.6365;
                }
                score
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(words: usize, sentences: usize) -> TextStats {
        TextStats {
            words,
            sentences,
            ..Default::default()
        }
    }

    #[test]
    fn flesch_matches_published_formula() {
        let s = TextStats {
            words: 100,
            sentences: 10,
            syllables: 150,
            ..Default::default()
        };
        let raw = MetricKind::FleschReadingEase.compute(&s);
        assert!((raw - (206.835 - 1.015 * 10.0 - 84.6 * 1.5)).abs() < 1e-9);
    }

    #[test]
    fn fog_counts_polysyllables() {
        let s = TextStats {
            words: 100,
            sentences: 5,
            polysyllables: 10,
            ..Default::default()
        };
        assert!((MetricKind::GunningFog.compute(&s) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn coleman_liau_matches_published_formula() {
        let s = TextStats {
            words: 100,
            sentences: 5,
            letters: 450,
            ..Default::default()
        };
        let expected = 0.0588 * 450.0 - 0.296 * 5.0 - 15.8;
        assert!((MetricKind::ColemanLiau.compute(&s) - expected).abs() < 1e-9);
    }

    #[test]
    fn ari_matches_published_formula() {
        let s = TextStats {
            words: 100,
            sentences: 5,
            chars: 450,
            ..Default::default()
        };
        let expected = 4.71 * 4.5 + 0.5 * 20.0 - 21.43;
        assert!((MetricKind::AutomatedReadability.compute(&s) - expected).abs() < 1e-9);
    }

    #[test]
    fn dale_chall_adds_adjustment_above_five_percent() {
        let easy = TextStats {
            words: 100,
            sentences: 10,
            difficult_words: 4,
            ..Default::default()
        };
        let hard = TextStats {
            words: 100,
            sentences: 10,
            difficult_words: 10,
            ..Default::default()
        };
        let easy_raw = MetricKind::DaleChall.compute(&easy);
        let hard_raw = MetricKind::DaleChall.compute(&hard);
        assert!((easy_raw - (0.1579 * 4.0 + 0.0496 * 10.0)).abs() < 1e-9);
        assert!((hard_raw - (0.1579 * 10.0 + 0.0496 * 10.0 + 3.6365)).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_returns_zero_for_every_metric() {
        use strum::IntoEnumIterator;
        for kind in MetricKind::iter() {
            assert_eq!(kind.compute(&stats(0, 0)), 0.0);
            assert_eq!(kind.compute(&stats(5, 0)), 0.0);
        }
    }
}
