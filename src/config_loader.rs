//! Settings file loading.
//!
//! A settings file is optional: the built-in defaults describe the Trading
//! Arena event completely, and a YAML file only needs the sections it wants
//! to override.

use crate::config::Config;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse settings from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading settings from: {:?}", config_path);

    let file = File::open(config_path)?;
    let config: Config = serde_yaml::from_reader(file)?;

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_partial_settings() {
        let yaml = r#"
event:
  base_url: "https://web3.okx.com"
  event_path: "/id/trading-arena/aspecta"
  event_type: "aspecta"
  source: "cryptoverse_tradingarena"
  referral_code: "TESTCODE"
pacing:
  min_delay: "1s"
  max_delay: "3s"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.event.referral_code, "TESTCODE");
        assert_eq!(config.pacing.min_delay, Duration::from_secs(1));
        assert_eq!(config.pacing.max_delay, Duration::from_secs(3));
        // Untouched sections keep their defaults
        assert_eq!(config.http.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let yaml = r#"
event:
  base_url: "https://web3.okx.com"
  event_path: "/id/trading-arena/aspecta"
  event_type: "aspecta"
  source: "cryptoverse_tradingarena"
  referral_code: ""
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_config(Path::new("/nonexistent/settings.yaml")).is_err());
    }
}
