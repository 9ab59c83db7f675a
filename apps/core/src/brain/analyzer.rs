//! Journal Analyzer - Main orchestrator for the Brain module.
//!
//! Coordinates crisis detection, sentiment normalization, stress scoring,
//! emotion classification, keyword extraction and task recommendation.
//!
//! Two flows:
//! 1. `analyze`: crisis check first, then classifier + scoring
//! 2. `generate_tasks`: classifier + task recommendation, no crisis check

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::crisis::CrisisDetector;
use super::emotion::EmotionClassifier;
use super::keywords::{KeywordExtractor, MIN_WORD_LENGTH};
use super::result::{AnalysisResult, TaskRecommendation};
use super::stress::StressScorer;
use super::tables::KeywordTables;
use super::tasks::TaskRecommender;
use super::thresholds::AnalysisThresholds;
use crate::classifier::SentimentClassifier;
use crate::error::ClassifierError;

/// Returns the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Main analyzer that orchestrates all analysis components
pub struct JournalAnalyzer {
    classifier: Arc<dyn SentimentClassifier>,
    crisis_detector: CrisisDetector,
    stress_scorer: StressScorer,
    emotion_classifier: EmotionClassifier,
    keyword_extractor: KeywordExtractor,
    task_recommender: TaskRecommender,
    classifier_max_chars: usize,
}

impl JournalAnalyzer {
    /// Create an analyzer with the standard tables and thresholds
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self::with_tables(
            classifier,
            Arc::new(KeywordTables::new()),
            AnalysisThresholds::default(),
        )
    }

    /// Create an analyzer over custom tables and thresholds
    pub fn with_tables(
        classifier: Arc<dyn SentimentClassifier>,
        tables: Arc<KeywordTables>,
        thresholds: AnalysisThresholds,
    ) -> Self {
        Self {
            classifier,
            crisis_detector: CrisisDetector::new(),
            stress_scorer: StressScorer::new(tables.clone(), thresholds),
            emotion_classifier: EmotionClassifier::new(&thresholds),
            keyword_extractor: KeywordExtractor::with_config(
                tables.clone(),
                MIN_WORD_LENGTH,
                thresholds.max_keywords,
            ),
            task_recommender: TaskRecommender::new(tables, &thresholds),
            classifier_max_chars: thresholds.classifier_max_chars,
        }
    }

    /// Sends the truncated text to the classifier and returns the signed score.
    async fn sentiment_score(&self, text: &str) -> Result<f64, ClassifierError> {
        let input = truncate_chars(text, self.classifier_max_chars);

        let signal = self.classifier.classify(input).await.map_err(|e| {
            warn!("Sentiment classification failed: {}", e);
            e
        })?;

        Ok(signal.normalized())
    }

    /// Full analysis of a journal entry.
    ///
    /// Crisis phrases bypass the classifier and every scoring component.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, ClassifierError> {
        let start = Instant::now();

        if self.crisis_detector.is_crisis(text) {
            warn!("Crisis phrase detected, returning fixed support response");
            return Ok(AnalysisResult::crisis());
        }

        // Classifier sees the original casing; scoring uses the full text
        let sentiment_score = self.sentiment_score(text).await?;

        let result = AnalysisResult {
            sentiment_score,
            stress_level: self.stress_scorer.score(text, sentiment_score),
            emotion: self.emotion_classifier.classify(text, sentiment_score),
            keywords: self.keyword_extractor.extract(text),
        };

        info!("Analysis complete: {}", result.summary());
        debug!("Analysis took {} ms", start.elapsed().as_millis());

        Ok(result)
    }

    /// Task-only flow. Always attempts task generation; no crisis check.
    pub async fn generate_tasks(&self, text: &str) -> Result<TaskRecommendation, ClassifierError> {
        let text_lower = text.to_lowercase();

        let sentiment_score = self.sentiment_score(&text_lower).await?;
        let tasks = self.task_recommender.recommend(&text_lower, sentiment_score);

        info!("Generated {} tasks (sentiment {:.2})", tasks.len(), sentiment_score);

        Ok(TaskRecommendation { tasks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let text = "été très calme";

        assert_eq!(truncate_chars(text, 3), "été");
        assert_eq!(truncate_chars(text, 6), "été tr");
    }
}
