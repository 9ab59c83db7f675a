//! Stress Scoring.
//!
//! Combines the signed sentiment score with weighted stress keyword hits into
//! an integer stress level between 0 and 100.

use std::sync::Arc;

use super::tables::KeywordTables;
use super::thresholds::AnalysisThresholds;

/// Upper bound of the stress scale
pub const MAX_STRESS: u8 = 100;

/// Stress scorer over the shared keyword weight table
#[derive(Debug, Clone)]
pub struct StressScorer {
    tables: Arc<KeywordTables>,
    thresholds: AnalysisThresholds,
}

impl StressScorer {
    pub fn new(tables: Arc<KeywordTables>, thresholds: AnalysisThresholds) -> Self {
        Self { tables, thresholds }
    }

    /// Sum of the weights of every stress keyword present in the text.
    /// Repeated occurrences of a keyword count once.
    pub fn keyword_hits(&self, text: &str) -> u32 {
        let text_lower = text.to_lowercase();
        self.tables
            .stress_matches(&text_lower)
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Compute the stress level for `text` given its sentiment score.
    pub fn score(&self, text: &str, sentiment_score: f64) -> u8 {
        let t = &self.thresholds;

        let base = t.base_stress - sentiment_score * t.sentiment_stress_weight;
        let contribution = f64::from(self.keyword_hits(text).min(t.keyword_contribution_cap));

        // Keywords amplify a negative reading, partially offset a positive one,
        // and count half when the polarity is near neutral.
        let stress = if sentiment_score < -t.stress_polarity_band {
            base + contribution
        } else if sentiment_score > t.stress_polarity_band {
            base - contribution / 2.0
        } else {
            base + contribution / 2.0
        };

        // `as` truncates toward zero and saturates on overflow / NaN -> 0
        (stress as i64).clamp(0, i64::from(MAX_STRESS)) as u8
    }
}
