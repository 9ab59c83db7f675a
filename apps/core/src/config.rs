//! Service configuration loaded from environment variables.
//!
//! `main` loads `.env` first, so every variable can also come from that file.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const BIND_ADDR_VAR: &str = "MINDCHECK_BIND_ADDR";
pub const SENTIMENT_URL_VAR: &str = "SENTIMENT_API_URL";
pub const SENTIMENT_TOKEN_VAR: &str = "SENTIMENT_API_TOKEN";
pub const SENTIMENT_TIMEOUT_VAR: &str = "SENTIMENT_TIMEOUT_SECS";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// Bunyan JSON records
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var(LOG_FORMAT_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Connection settings for the external sentiment classifier.
#[derive(Debug, Clone, Validate)]
pub struct ClassifierConfig {
    /// Inference endpoint receiving `{"inputs": text}`.
    pub endpoint: Url,
    /// Optional bearer token sent with every request.
    pub auth_token: Option<String>,
    /// Per-request timeout, between 1 and 120 seconds.
    #[validate(range(min = 1, max = 120))]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub classifier: ClassifierConfig,
}

impl ServiceConfig {
    /// Reads and validates the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = env::var(BIND_ADDR_VAR)
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", BIND_ADDR_VAR, e)))?;

        let endpoint = env::var(SENTIMENT_URL_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", SENTIMENT_URL_VAR)))?;
        let endpoint = Url::parse(&endpoint)?;

        let auth_token = env::var(SENTIMENT_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty());

        let timeout_secs = match env::var(SENTIMENT_TIMEOUT_VAR) {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                AppError::Config(format!("Invalid {}: {}", SENTIMENT_TIMEOUT_VAR, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let classifier = ClassifierConfig {
            endpoint,
            auth_token,
            timeout_secs,
        };
        classifier
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid classifier settings: {}", e)))?;

        Ok(Self {
            bind_addr,
            classifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                (SENTIMENT_URL_VAR, Some("http://127.0.0.1:9000/classify")),
                (BIND_ADDR_VAR, None),
                (SENTIMENT_TOKEN_VAR, None),
                (SENTIMENT_TIMEOUT_VAR, None),
            ],
            || {
                let config = ServiceConfig::from_env().unwrap();
                assert_eq!(config.bind_addr, "0.0.0.0:5000".parse().unwrap());
                assert_eq!(
                    config.classifier.endpoint.as_str(),
                    "http://127.0.0.1:9000/classify"
                );
                assert_eq!(config.classifier.auth_token, None);
                assert_eq!(config.classifier.timeout(), Duration::from_secs(8));
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                (SENTIMENT_URL_VAR, Some("https://inference.example/models/sst2")),
                (BIND_ADDR_VAR, Some("127.0.0.1:8088")),
                (SENTIMENT_TOKEN_VAR, Some("secret")),
                (SENTIMENT_TIMEOUT_VAR, Some("30")),
            ],
            || {
                let config = ServiceConfig::from_env().unwrap();
                assert_eq!(config.bind_addr.port(), 8088);
                assert_eq!(config.classifier.auth_token.as_deref(), Some("secret"));
                assert_eq!(config.classifier.timeout_secs, 30);
            },
        );
    }

    #[test]
    fn test_missing_url() {
        temp_env::with_var_unset(SENTIMENT_URL_VAR, || {
            let err = ServiceConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }

    #[test]
    fn test_invalid_values() {
        temp_env::with_vars(
            [
                (SENTIMENT_URL_VAR, Some("not a url")),
                (SENTIMENT_TIMEOUT_VAR, None),
            ],
            || assert!(matches!(ServiceConfig::from_env(), Err(AppError::Config(_)))),
        );

        temp_env::with_vars(
            [
                (SENTIMENT_URL_VAR, Some("http://localhost:9000")),
                (SENTIMENT_TIMEOUT_VAR, Some("0")),
            ],
            || assert!(matches!(ServiceConfig::from_env(), Err(AppError::Config(_)))),
        );
    }

    #[test]
    fn test_log_format() {
        temp_env::with_var(LOG_FORMAT_VAR, Some("JSON"), || {
            assert_eq!(LogFormat::from_env(), LogFormat::Json);
        });
        temp_env::with_var_unset(LOG_FORMAT_VAR, || {
            assert_eq!(LogFormat::from_env(), LogFormat::Pretty);
        });
    }
}
