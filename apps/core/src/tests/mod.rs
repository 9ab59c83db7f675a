//! Test Module
//!
//! Cross-module test suite for the MindCheck backend.
//!
//! ## Test Categories
//! - `brain_tests`: pipeline flows, worked examples and range properties
//! - `classifier_tests`: HTTP sentiment classifier against a mock server
//! - `integration_tests`: HTTP routes end to end with a stub classifier


use crate::brain::SentimentSignal;
use crate::classifier::SentimentClassifier;
use crate::error::ClassifierError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Stub Classifier for Testing
// ============================================================================

/// Classifier that returns a fixed answer and records what it was asked
pub struct StubClassifier {
    answer: Result<SentimentSignal, ClassifierError>,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl StubClassifier {
    pub fn answering(signal: SentimentSignal) -> Self {
        Self {
            answer: Ok(signal),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn failing(error: ClassifierError) -> Self {
        Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClassifier for StubClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentSignal, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(text.to_string());
        self.answer.clone()
    }
}
