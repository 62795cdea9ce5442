//! # Arena Registrar - Batch wallet registration for the OKX Trading Arena event
//!
//! This library implements a one-shot batch-registration workflow: private
//! keys are read from a local account file, each key is turned into its
//! Ethereum wallet address, and one registration request per wallet is
//! submitted to the Trading Arena endpoint with a randomized delay between
//! submissions.
//!
//! ## Overview
//!
//! The run is strictly sequential: load credentials, then for each account
//! derive the address, POST the registration payload, classify the response,
//! and move on. Every failure mode (bad key material, transport errors,
//! non-200 responses, application-level rejections) is logged with the
//! account's position in the batch and counted as a failure; nothing aborts
//! the run except an empty or missing account file. A summary block with
//! total/successful/failed counts closes every run.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: Type-safe settings structures with defaults and validation
//! - `config_loader`: Optional YAML settings file loading
//! - `accounts`: Account file parsing and the credential type
//! - `wallet`: Private-key-to-address derivation
//! - `registrar`: Request payloads, outcome classification, and the batch loop
//! - `report`: Per-run aggregate counters and the final summary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use arena_registrar::config::Config;
//! use arena_registrar::registrar::Registrar;
//!
//! # fn main() -> color_eyre::Result<()> {
//! let registrar = Registrar::new(Config::default())?;
//! let summary = registrar.run(std::path::Path::new("account.txt"));
//! println!("{} of {} registered", summary.successful(), summary.total());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The binary boundary uses `color_eyre` for error reporting with context.
//! Domain failures (settings validation, key derivation) are expressed as
//! `thiserror` enums so callers handle every case explicitly; per-account
//! failures never propagate out of the batch loop.

pub mod accounts;
pub mod config;
pub mod config_loader;
pub mod registrar;
pub mod report;
pub mod wallet;
