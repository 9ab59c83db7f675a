use crate::brain::sentiment::{SentimentLabel, SentimentSignal};
use crate::classifier::traits::SentimentClassifier;
use crate::config::ClassifierConfig;
use crate::error::{AppError, ClassifierError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};
use url::Url;

/// One `{label, score}` entry of an inference response.
#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Text-classification responses come either batched (`[[...]]`), flat
/// (`[...]`), or as a single object depending on the server.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Single(LabelScore),
}

impl InferenceResponse {
    fn into_candidates(self) -> Vec<LabelScore> {
        match self {
            InferenceResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(entries) => entries,
            InferenceResponse::Single(entry) => vec![entry],
        }
    }
}

/// Picks the best-scoring class and turns it into a `SentimentSignal`.
fn best_signal(candidates: Vec<LabelScore>) -> Result<SentimentSignal, ClassifierError> {
    let best = candidates
        .into_iter()
        .filter(|c| !c.score.is_nan())
        .max_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or_else(|| ClassifierError::MalformedResponse("no classification returned".to_string()))?;

    let label = best
        .label
        .parse::<SentimentLabel>()
        .map_err(ClassifierError::MalformedResponse)?;

    Ok(SentimentSignal::new(label, best.score))
}

/// Sentiment classifier backed by a remote inference endpoint.
///
/// Sends `POST {endpoint}` with `{"inputs": text}`, the request shape used by
/// Hugging Face text-classification servers.
#[derive(Clone)]
pub struct HttpSentimentClassifier {
    client: Client,
    endpoint: Url,
    auth_token: Option<String>,
    timeout: Duration,
}

impl HttpSentimentClassifier {
    /// Creates a classifier client from the service configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        info!("Sentiment classifier endpoint: {}", config.endpoint);

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
            timeout: config.timeout(),
        })
    }

    fn build_request(&self, text: &str) -> Result<reqwest::RequestBuilder, ClassifierError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.auth_token {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                ClassifierError::Unavailable(format!("Invalid auth token header: {}", e))
            })?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .json(&serde_json::json!({ "inputs": text })))
    }

    /// Reads the response body under the same deadline as the request.
    async fn read_body(&self, res: reqwest::Response) -> Result<String, ClassifierError> {
        timeout(self.timeout, res.text())
            .await
            .map_err(|_| ClassifierError::Timeout(self.timeout))?
            .map_err(ClassifierError::from)
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentSignal, ClassifierError> {
        debug!("Classifying {} characters", text.chars().count());

        let request_future = self.build_request(text)?.send();
        let res = timeout(self.timeout, request_future)
            .await
            .map_err(|_| ClassifierError::Timeout(self.timeout))??;

        let status = res.status();
        let body = self.read_body(res).await?;
        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

        let signal = best_signal(parsed.into_candidates())?;
        debug!(
            "Classifier answered {} ({:.3})",
            signal.label, signal.confidence
        );
        Ok(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, score: f64) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_best_signal_picks_highest_score() {
        let signal = best_signal(vec![entry("NEGATIVE", 0.2), entry("POSITIVE", 0.8)]).unwrap();

        assert_eq!(signal, SentimentSignal::positive(0.8));
    }

    #[test]
    fn test_best_signal_rejects_empty_and_unknown() {
        assert!(matches!(
            best_signal(vec![]),
            Err(ClassifierError::MalformedResponse(_))
        ));
        assert!(matches!(
            best_signal(vec![entry("NEUTRAL", 0.9)]),
            Err(ClassifierError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_shapes() {
        let batched: InferenceResponse =
            serde_json::from_str(r#"[[{"label":"NEGATIVE","score":0.9},{"label":"POSITIVE","score":0.1}]]"#)
                .unwrap();
        let flat: InferenceResponse =
            serde_json::from_str(r#"[{"label":"POSITIVE","score":0.7}]"#).unwrap();
        let single: InferenceResponse =
            serde_json::from_str(r#"{"label":"LABEL_0","score":0.6}"#).unwrap();

        assert_eq!(
            best_signal(batched.into_candidates()).unwrap(),
            SentimentSignal::negative(0.9)
        );
        assert_eq!(
            best_signal(flat.into_candidates()).unwrap(),
            SentimentSignal::positive(0.7)
        );
        assert_eq!(
            best_signal(single.into_candidates()).unwrap(),
            SentimentSignal::negative(0.6)
        );
    }
}
