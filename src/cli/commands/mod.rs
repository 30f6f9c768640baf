//! CLI command implementations for argus-utils
//!
//! This module contains the implementation of CLI commands for the text
//! and path helpers.

mod path;
mod text;

pub use path::{InsertUserCommand, ToCifsCommand, ToUncCommand};
pub use text::{Base64Command, FormatCommand, SplitCommand};

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render a printf-style template
    Format(super::args::Format),

    /// Split text on a delimiter, one piece per line
    Split(super::args::Split),

    /// Base64 encode text
    Base64(super::args::Base64),

    /// Convert a UNC path into an SMB URI
    ToCifs(super::args::ToCifs),

    /// Convert an SMB URI into a UNC path
    ToUnc(super::args::ToUnc),

    /// Inject an SMB account into an SMB URI
    InsertUser(super::args::InsertUser),
}

impl Commands {
    /// Execute the command
    pub fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = match self {
            Self::InsertUser(account) => cli.build_config(Some(account)),
            _ => cli.build_config(None),
        };
        self.setup_log(cli, &config);
        match self {
            Self::Format(args) => FormatCommand::new(args).run(&config),
            Self::Split(args) => SplitCommand::new(args).run(&config),
            Self::Base64(args) => Base64Command::new(args).run(&config),
            Self::ToCifs(args) => ToCifsCommand::new(args).run(&config),
            Self::ToUnc(args) => ToUncCommand::new(args).run(&config),
            Self::InsertUser(args) => InsertUserCommand::new(args).run(&config),
        }
    }

    /// Setup logging configuration
    fn setup_log(&self, cli: &super::Cli, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if cli.log_level.is_some() {
            config.log_level
        } else if let Ok(argus_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match argus_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Info,
            }
        } else {
            LevelFilter::Info
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
