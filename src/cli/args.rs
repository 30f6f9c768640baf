//! CLI argument parsing for argus-utils
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{Config, FORMAT_BLOCK_SIZE};
use crate::types::GrowthStrategy;
use clap::{Args, Parser};
use log::LevelFilter;

/// String, base64 and SMB path helpers for the Argus TV PVR client
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (defaults to $ARGUSUTILS_LOG, then info)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,

    /// Initial formatter buffer size in bytes
    #[arg(long, global = true, default_value_t = FORMAT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Formatter buffer growth strategy: exact or doubling
    #[arg(long, global = true, value_parser = parse_growth_strategy, default_value = "exact")]
    pub growth: GrowthStrategy,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments and an optional SMB account
    pub fn build_config(&self, account: Option<&InsertUser>) -> Config {
        let mut config = Config::new()
            .with_format_block_size(self.block_size)
            .with_growth_strategy(self.growth);

        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        if let Some(account) = account {
            config = config
                .with_smb_user(account.user.as_str())
                .with_smb_pass(account.pass.as_str());
        }

        config
    }
}

fn parse_growth_strategy(value: &str) -> Result<GrowthStrategy, String> {
    GrowthStrategy::all()
        .into_iter()
        .find(|strategy| strategy.name() == value)
        .ok_or_else(|| format!("unknown growth strategy '{value}' (expected exact or doubling)"))
}

/// Format command arguments
#[derive(Args)]
pub struct Format {
    /// printf-style template
    pub template: String,

    /// Arguments consumed by the template's conversions
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Split command arguments
#[derive(Args)]
pub struct Split {
    /// Text to split
    pub input: String,

    /// Delimiter to split on
    pub delimiter: String,

    /// Maximum number of pieces (0 = unlimited)
    #[arg(short, long, default_value_t = 0)]
    pub max: usize,

    /// When capped at one piece, print only the text before the first delimiter
    #[arg(long)]
    pub leading_segment: bool,
}

/// Base64 command arguments
#[derive(Args)]
pub struct Base64 {
    /// Text to encode
    pub text: String,

    /// Percent-escape '+', '/' and '=' for use in URLs
    #[arg(short, long)]
    pub url: bool,
}

/// UNC to SMB URI command arguments
#[derive(Args)]
pub struct ToCifs {
    /// UNC path, e.g. \\host\share\file.ts
    pub path: String,
}

/// SMB URI to UNC command arguments
#[derive(Args)]
pub struct ToUnc {
    /// SMB URI, e.g. smb://host/share/file.ts
    pub path: String,
}

/// Credential injection command arguments
#[derive(Args)]
pub struct InsertUser {
    /// SMB URI to rewrite
    pub path: String,

    /// SMB user name
    #[arg(short, long)]
    pub user: String,

    /// SMB password
    #[arg(short, long, default_value = "")]
    pub pass: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_growth_strategy() {
        assert_eq!(parse_growth_strategy("doubling"), Ok(GrowthStrategy::Doubling));
        assert_eq!(parse_growth_strategy("exact"), Ok(GrowthStrategy::ExactSize));
        assert!(parse_growth_strategy("triple").is_err());
    }

    #[test]
    fn test_build_config() {
        let cli = Cli::try_parse_from([
            "argus-utils",
            "--block-size",
            "64",
            "--growth",
            "doubling",
            "insert-user",
            "smb://host/share",
            "--user",
            "bob",
        ])
        .unwrap();
        let super::super::Commands::InsertUser(account) = &cli.command else {
            panic!("expected insert-user");
        };
        let config = cli.build_config(Some(account));
        assert_eq!(config.format_block_size, 64);
        assert_eq!(config.growth_strategy, GrowthStrategy::Doubling);
        assert_eq!(config.smb_user, "bob");
        assert!(config.smb_pass.is_empty());
    }
}
