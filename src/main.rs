use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use arena_registrar::config::Config;
use arena_registrar::config_loader;
use arena_registrar::registrar::Registrar;

/// Batch wallet registration utility for the OKX Trading Arena event
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the account file with one private key per line
    #[arg(short, long, default_value = "account.txt")]
    accounts: PathBuf,

    /// Optional YAML settings file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting Trading Arena batch registration");
    info!("Account file: {:?}", args.accounts);

    let config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => Config::default(),
    };

    let registrar = Registrar::new(config)?;
    registrar.run(&args.accounts);

    // The run always completes; failures are visible in the summary only
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let args = Args::parse_from(&["arena-registrar"]);

        assert_eq!(args.accounts, PathBuf::from("account.txt"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_cli_parsing_overrides() {
        let args = Args::parse_from(&[
            "arena-registrar",
            "--accounts", "wallets.txt",
            "--config", "settings.yaml",
        ]);

        assert_eq!(args.accounts, PathBuf::from("wallets.txt"));
        assert_eq!(args.config, Some(PathBuf::from("settings.yaml")));
    }
}
