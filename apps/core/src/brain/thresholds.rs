//! Tunable constants for stress scoring, emotion labelling and capping.

/// Stress reported when the sentiment score is exactly zero.
pub const BASE_STRESS: f64 = 50.0;
/// How far a full-confidence sentiment moves the base stress.
pub const SENTIMENT_STRESS_WEIGHT: f64 = 35.0;
/// Upper bound on the summed stress keyword weights.
pub const KEYWORD_CONTRIBUTION_CAP: u32 = 30;
/// Sentiment band treated as neutral when combining keyword hits.
pub const STRESS_POLARITY_BAND: f64 = 0.1;
/// Score beyond which the classifier alone decides happy / sad.
pub const EMOTION_SCORE_THRESHOLD: f64 = 0.65;
/// Score beyond which fallback tasks come from the positive / negative bucket.
pub const TASK_BUCKET_THRESHOLD: f64 = 0.4;
pub const MAX_KEYWORDS: usize = 5;
pub const MAX_KEYWORD_TASKS: usize = 2;
pub const MAX_TASKS: usize = 3;
/// Longest input, in characters, forwarded to the sentiment classifier.
pub const CLASSIFIER_MAX_CHARS: usize = 512;

/// Domain constants grouped so they can be tuned without touching the logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisThresholds {
    pub base_stress: f64,
    pub sentiment_stress_weight: f64,
    pub keyword_contribution_cap: u32,
    /// Scores inside `[-band, band]` count as neutral for stress.
    pub stress_polarity_band: f64,
    pub emotion_score_threshold: f64,
    pub task_bucket_threshold: f64,
    pub max_keywords: usize,
    pub max_keyword_tasks: usize,
    pub max_tasks: usize,
    pub classifier_max_chars: usize,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            base_stress: BASE_STRESS,
            sentiment_stress_weight: SENTIMENT_STRESS_WEIGHT,
            keyword_contribution_cap: KEYWORD_CONTRIBUTION_CAP,
            stress_polarity_band: STRESS_POLARITY_BAND,
            emotion_score_threshold: EMOTION_SCORE_THRESHOLD,
            task_bucket_threshold: TASK_BUCKET_THRESHOLD,
            max_keywords: MAX_KEYWORDS,
            max_keyword_tasks: MAX_KEYWORD_TASKS,
            max_tasks: MAX_TASKS,
            classifier_max_chars: CLASSIFIER_MAX_CHARS,
        }
    }
}
