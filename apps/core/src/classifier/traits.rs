use crate::brain::sentiment::SentimentSignal;
use crate::error::ClassifierError;
use async_trait::async_trait;

/// Defines the public interface for a sentiment classifier.
///
/// This trait abstracts the model behind the analysis pipeline, allowing a
/// remote inference service or a deterministic stub to be used interchangeably.
#[async_trait]
pub trait SentimentClassifier: Send + Sync + 'static {
    /// Returns the single best-scoring polarity for `text`.
    ///
    /// Callers pass at most 512 characters.
    async fn classify(&self, text: &str) -> Result<SentimentSignal, ClassifierError>;
}
