//! Settings structures for a registration run.
//!
//! All settings have built-in defaults matching the Trading Arena event, so
//! a run needs no settings file at all. A YAML file loaded through
//! `config_loader` can override any section.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level settings for a registration run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Event identity: where registrations go and how they are attributed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Base URL of the registration service
    pub base_url: String,
    /// Event landing page path, used to build the Referer header
    pub event_path: String,
    /// Event type field of the registration payload
    pub event_type: String,
    /// Source tag field of the registration payload
    pub source: String,
    /// Referral code attached to every registration
    pub referral_code: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (e.g., "30s")
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

/// Inter-request pacing window; a delay is sampled uniformly from
/// [min_delay, max_delay) after every account except the last
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    #[serde(with = "humantime_serde")]
    pub min_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

/// Settings validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid event configuration: {0}")]
    InvalidEvent(String),
    #[error("Invalid HTTP configuration: {0}")]
    InvalidHttp(String),
    #[error("Invalid pacing configuration: {0}")]
    InvalidPacing(String),
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            base_url: "https://web3.okx.com".to_string(),
            event_path: "/id/trading-arena/aspecta".to_string(),
            event_type: "aspecta".to_string(),
            source: "cryptoverse_tradingarena".to_string(),
            referral_code: "KVOLFF".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Validate the settings for internal consistency
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.event.base_url.starts_with("http") {
            return Err(ValidationError::InvalidEvent(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.event.base_url
            )));
        }
        if self.event.referral_code.trim().is_empty() {
            return Err(ValidationError::InvalidEvent(
                "referral_code must not be empty".to_string(),
            ));
        }
        if self.event.event_type.trim().is_empty() {
            return Err(ValidationError::InvalidEvent(
                "event_type must not be empty".to_string(),
            ));
        }
        if self.event.source.trim().is_empty() {
            return Err(ValidationError::InvalidEvent(
                "source must not be empty".to_string(),
            ));
        }

        if self.http.timeout.is_zero() {
            return Err(ValidationError::InvalidHttp(
                "timeout must be greater than zero".to_string(),
            ));
        }

        if self.pacing.max_delay < self.pacing.min_delay {
            return Err(ValidationError::InvalidPacing(format!(
                "max_delay ({:?}) must not be less than min_delay ({:?})",
                self.pacing.max_delay, self.pacing.min_delay
            )));
        }

        Ok(())
    }

    /// Referer header value: event page plus the source tag query parameter
    pub fn referer(&self) -> String {
        format!(
            "{}{}?source={}",
            self.event.base_url, self.event.event_path, self.event.source
        )
    }

    /// Full URL of the registration endpoint
    pub fn register_url(&self) -> String {
        format!("{}/api/v1/trading-arena/register", self.event.base_url)
    }
}
