//! Analysis output structures.

use serde::Serialize;

use super::emotion::Emotion;
use super::stress::MAX_STRESS;

/// Keywords reported for the crisis override
pub const CRISIS_KEYWORDS: &[&str] = &["crisis", "immediate support required"];

/// Result of a full journal analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Signed sentiment score in `[-1, 1]`
    pub sentiment_score: f64,

    /// Stress level in `[0, 100]`
    pub stress_level: u8,

    pub emotion: Emotion,

    /// At most five distinct display keywords
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// Fixed result returned whenever a crisis phrase is detected
    pub fn crisis() -> Self {
        Self {
            sentiment_score: -1.0,
            stress_level: MAX_STRESS,
            emotion: Emotion::Critical,
            keywords: CRISIS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn is_crisis(&self) -> bool {
        self.emotion == Emotion::Critical
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {:.2}, Stress: {}, Emotion: {}, Keywords: {}",
            self.sentiment_score,
            self.stress_level,
            self.emotion,
            self.keywords.len()
        )
    }
}

/// Recommended coping tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecommendation {
    /// At most three distinct tasks
    pub tasks: Vec<String>,
}
