//! Coping task recommendation.
//!
//! Up to two tasks come from keywords found in the entry; the rest are filled
//! from the fallback list of the entry's emotion bucket.

use std::sync::Arc;
use tracing::debug;

use super::tables::{EmotionBucket, KeywordTables};
use super::thresholds::AnalysisThresholds;

/// Keyword-first task recommender
#[derive(Debug, Clone)]
pub struct TaskRecommender {
    tables: Arc<KeywordTables>,
    bucket_threshold: f64,
    max_keyword_tasks: usize,
    max_tasks: usize,
}

impl TaskRecommender {
    pub fn new(tables: Arc<KeywordTables>, thresholds: &AnalysisThresholds) -> Self {
        Self {
            tables,
            bucket_threshold: thresholds.task_bucket_threshold,
            max_keyword_tasks: thresholds.max_keyword_tasks,
            max_tasks: thresholds.max_tasks,
        }
    }

    /// Coarse bucket for the sentiment score; both thresholds are strict.
    pub fn bucket(&self, sentiment_score: f64) -> EmotionBucket {
        if sentiment_score > self.bucket_threshold {
            EmotionBucket::Positive
        } else if sentiment_score < -self.bucket_threshold {
            EmotionBucket::Negative
        } else {
            EmotionBucket::Neutral
        }
    }

    /// Recommend up to `max_tasks` distinct tasks for the entry.
    pub fn recommend(&self, text: &str, sentiment_score: f64) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut tasks: Vec<String> = Vec::with_capacity(self.max_tasks);

        // Several keywords share a task ("stress" / "stressed"), keep one copy
        for task in self.tables.task_matches(&text_lower) {
            if tasks.len() >= self.max_keyword_tasks.min(self.max_tasks) {
                break;
            }
            if !tasks.iter().any(|t| t == task) {
                tasks.push(task.to_string());
            }
        }
        let keyword_tasks = tasks.len();

        let bucket = self.bucket(sentiment_score);
        for task in self.tables.emotion_tasks().tasks_for(bucket) {
            if tasks.len() >= self.max_tasks {
                break;
            }
            if !tasks.contains(task) {
                tasks.push(task.clone());
            }
        }

        debug!(
            "Recommended {} tasks ({} from keywords, bucket {})",
            tasks.len(),
            keyword_tasks,
            bucket
        );

        tasks
    }
}
