//! Sentiment signal from the external classifier and its normalization.
//!
//! This is the only place that knows the classifier's output shape. Everything
//! downstream works on the signed score in `[-1, 1]`.

use std::fmt;
use std::str::FromStr;

/// Binary polarity reported by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    /// Accepts `POSITIVE`/`NEGATIVE` in any case, plus the raw SST-2 head
    /// names `LABEL_1`/`LABEL_0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" | "LABEL_1" => Ok(SentimentLabel::Positive),
            "NEGATIVE" | "LABEL_0" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment label '{}'", other)),
        }
    }
}

/// Best-scoring class returned by the sentiment classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentSignal {
    pub label: SentimentLabel,
    /// Always within `[0, 1]`
    pub confidence: f64,
}

impl SentimentSignal {
    /// Create a signal; confidence is clamped into `[0, 1]` (NaN becomes 0).
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self { label, confidence }
    }

    pub fn positive(confidence: f64) -> Self {
        Self::new(SentimentLabel::Positive, confidence)
    }

    pub fn negative(confidence: f64) -> Self {
        Self::new(SentimentLabel::Negative, confidence)
    }

    /// Signed score: `+confidence` for positive, `-confidence` for negative.
    pub fn normalized(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.confidence,
            SentimentLabel::Negative => -self.confidence,
        }
    }
}
