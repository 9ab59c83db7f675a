//! # Brain Module
//!
//! Deterministic scoring engine for journal entries.
//! Everything here is a pure function of the entry, the classifier's answer
//! and the shared read-only keyword tables.
//!
//! ## Components
//! - `tables`: stress weights, task keywords and fallback task bank
//! - `crisis`: crisis phrase override
//! - `sentiment`: classifier signal and its signed normalization
//! - `stress`: stress level scoring
//! - `emotion`: phrase-first emotion classification
//! - `keywords`: display keyword extraction
//! - `tasks`: coping task recommendation
//! - `result`: output data structures
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod crisis;
pub mod emotion;
pub mod keywords;
pub mod result;
pub mod sentiment;
pub mod stress;
pub mod tables;
pub mod tasks;
pub mod thresholds;

pub use analyzer::JournalAnalyzer;
pub use crisis::CrisisDetector;
pub use emotion::{Emotion, EmotionClassifier};
pub use keywords::KeywordExtractor;
pub use result::{AnalysisResult, TaskRecommendation};
pub use sentiment::{SentimentLabel, SentimentSignal};
pub use stress::StressScorer;
pub use tables::{EmotionBucket, EmotionTaskBank, KeywordTables};
pub use tasks::TaskRecommender;
pub use thresholds::AnalysisThresholds;
