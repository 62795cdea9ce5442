//! Account file loading.
//!
//! The account file is plain text with one private key per line. Blank
//! lines are skipped and surrounding whitespace is trimmed; the remaining
//! lines are kept in file order.

use log::{error, info};
use std::fmt;
use std::fs;
use std::path::Path;

/// A single private key as read from the account file.
///
/// The raw secret is held only for the duration of the run and is never
/// written to the logs; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw secret material, for derivation only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Load private keys from the account file.
///
/// Returns the non-blank, trimmed lines in file order. A missing or
/// unreadable file is logged as an error and yields an empty vector so the
/// caller can detect "no work to do" and stop without attempting any
/// network calls.
pub fn load_accounts(path: &Path) -> Vec<Credential> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Account file {:?} could not be read: {}", path, e);
            return Vec::new();
        }
    };

    let credentials: Vec<Credential> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Credential::new)
        .collect();

    info!("Loaded {} accounts from {:?}", credentials.len(), path);
    credentials
}
