//! # Classifier Module
//!
//! Boundary to the external sentiment model.
//!
//! ## Components
//! - `traits`: the `SentimentClassifier` capability used by the analysis pipeline
//! - `http`: reqwest-backed client for a Hugging Face style inference endpoint

pub mod http;
pub mod traits;

pub use http::HttpSentimentClassifier;
pub use traits::SentimentClassifier;
