//! Registration submission and the sequential batch loop.
//!
//! The `Registrar` owns the HTTP client and the fixed header set for the
//! whole run. Accounts are processed strictly one at a time: derive the
//! wallet address, POST the registration payload, classify the response,
//! then pause for a randomly sampled delay before the next account. Each
//! account is attempted exactly once; no failure aborts the batch.

use crate::accounts::{self, Credential};
use crate::config::Config;
use crate::report::{self, RunSummary};
use crate::wallet;
use color_eyre::Result;
use log::{error, info, warn};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Registration payload sent to the Trading Arena endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest<'a> {
    pub wallet_address: &'a str,
    pub referral_code: &'a str,
    pub event_type: &'a str,
    pub source: &'a str,
}

/// Response body of the registration endpoint.
///
/// A missing `success` field counts as a declined registration; a body
/// that is not a JSON object at all is a parse failure.
#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Classified result of one registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Server accepted the registration
    Success,
    /// Server responded but declined (non-200 status or success=false)
    Rejected,
    /// Derivation, transport, or response parsing failure
    Error,
}

/// Drives one batch registration run.
///
/// The HTTP client, its timeout, and the fixed header set are built once at
/// construction, so tests can point a Registrar at a mock server through
/// the configured base URL.
pub struct Registrar {
    client: Client,
    config: Config,
}

impl Registrar {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .default_headers(Self::default_headers(&config)?)
            .timeout(config.http.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fixed header set sent with every registration request
    fn default_headers(config: &Config) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.http.user_agent)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(ORIGIN, HeaderValue::from_str(&config.event.base_url)?);
        headers.insert(REFERER, HeaderValue::from_str(&config.referer())?);
        Ok(headers)
    }

    /// Run the full batch against the given account file.
    ///
    /// Produces exactly one outcome per loaded credential, in file order.
    /// An empty or missing account file ends the run before any network
    /// call is made.
    pub fn run(&self, accounts_path: &Path) -> RunSummary {
        let credentials = accounts::load_accounts(accounts_path);
        let mut summary = RunSummary::default();

        if credentials.is_empty() {
            error!("No private keys found!");
            return summary;
        }

        let total = credentials.len();
        for (i, credential) in credentials.iter().enumerate() {
            info!("Processing account {}/{}", i + 1, total);

            summary.record(self.register_account(credential));

            // Pace requests; the last account is not followed by a delay
            if i + 1 < total {
                let delay = self.sample_delay();
                info!(
                    "Waiting {:.1} seconds before next registration...",
                    delay.as_secs_f64()
                );
                thread::sleep(delay);
            }
        }

        report::log_summary(&summary);
        summary
    }

    /// Derive the wallet address for one credential and submit it
    fn register_account(&self, credential: &Credential) -> Outcome {
        let wallet_address = match wallet::derive_address(credential) {
            Ok(address) => address,
            Err(e) => {
                error!("Error getting address from private key: {}", e);
                return Outcome::Error;
            }
        };

        info!("Registering wallet: {}", wallet_address);
        self.submit_registration(&wallet_address)
    }

    /// Submit one registration request and classify the result
    pub fn submit_registration(&self, wallet_address: &str) -> Outcome {
        let payload = RegistrationRequest {
            wallet_address,
            referral_code: &self.config.event.referral_code,
            event_type: &self.config.event.event_type,
            source: &self.config.event.source,
        };

        let response = match self
            .client
            .post(self.config.register_url())
            .json(&payload)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error registering wallet {}: {}", wallet_address, e);
                return Outcome::Error;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            error!("HTTP Error {} for {}", status.as_u16(), wallet_address);
            return Outcome::Rejected;
        }

        match response.json::<RegistrationResponse>() {
            Ok(body) if body.success => {
                info!("Successfully registered: {}", wallet_address);
                Outcome::Success
            }
            Ok(body) => {
                warn!(
                    "Registration failed for {}: {}",
                    wallet_address,
                    body.message.as_deref().unwrap_or("Unknown error")
                );
                Outcome::Rejected
            }
            Err(e) => {
                error!("Error parsing response for {}: {}", wallet_address, e);
                Outcome::Error
            }
        }
    }

    /// Sample the inter-request delay uniformly from the pacing window.
    ///
    /// A degenerate window (min == max) yields the fixed value.
    fn sample_delay(&self) -> Duration {
        let min = self.config.pacing.min_delay.as_secs_f64();
        let max = self.config.pacing.max_delay.as_secs_f64();
        if max > min {
            Duration::from_secs_f64(rand::thread_rng().gen_range(min..max))
        } else {
            self.config.pacing.min_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_wire_names() {
        let payload = RegistrationRequest {
            wallet_address: "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf",
            referral_code: "KVOLFF",
            event_type: "aspecta",
            source: "cryptoverse_tradingarena",
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["walletAddress"],
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
        assert_eq!(value["referralCode"], "KVOLFF");
        assert_eq!(value["eventType"], "aspecta");
        assert_eq!(value["source"], "cryptoverse_tradingarena");
    }

    #[test]
    fn test_response_success_flag_defaults_to_false() {
        let body: RegistrationResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
        assert!(body.message.is_none());

        let body: RegistrationResponse =
            serde_json::from_str(r#"{"success": true, "message": "ok"}"#).unwrap();
        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_sample_delay_within_window() {
        let registrar = Registrar::new(Config::default()).unwrap();

        for _ in 0..100 {
            let delay = registrar.sample_delay();
            assert!(delay >= Duration::from_secs(2));
            assert!(delay < Duration::from_secs(5));
        }
    }

    #[test]
    fn test_sample_delay_degenerate_window() {
        let mut config = Config::default();
        config.pacing.min_delay = Duration::from_secs(3);
        config.pacing.max_delay = Duration::from_secs(3);

        let registrar = Registrar::new(config).unwrap();
        assert_eq!(registrar.sample_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut config = Config::default();
        config.event.referral_code = String::new();

        assert!(Registrar::new(config).is_err());
    }
}
