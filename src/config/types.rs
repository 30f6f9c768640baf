//! Configuration types for argus-utils
//!
//! This module contains configuration structures and related types
//! used throughout the crate.

use std::fmt;

use log::LevelFilter;

use super::constants::*;
use crate::types::GrowthStrategy;
use crate::utils::paths::Credentials;

/// Configuration for the helpers
#[derive(Clone)]
pub struct Config {
    /// User name injected into SMB URIs
    pub smb_user: String,
    /// Password injected into SMB URIs
    pub smb_pass: String,
    /// Initial formatter buffer capacity
    pub format_block_size: usize,
    /// How the formatter grows its buffer on overflow
    pub growth_strategy: GrowthStrategy,
    /// Log level
    pub log_level: LevelFilter,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pass = if self.smb_pass.is_empty() { "" } else { "***" };
        f.debug_struct("Config")
            .field("smb_user", &self.smb_user)
            .field("smb_pass", &pass)
            .field("format_block_size", &self.format_block_size)
            .field("growth_strategy", &self.growth_strategy)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smb_user: String::new(),
            smb_pass: String::new(),
            format_block_size: FORMAT_BLOCK_SIZE,
            growth_strategy: GrowthStrategy::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SMB user name
    pub fn with_smb_user(mut self, user: impl Into<String>) -> Self {
        self.smb_user = user.into();
        self
    }

    /// Sets the SMB password
    pub fn with_smb_pass(mut self, pass: impl Into<String>) -> Self {
        self.smb_pass = pass.into();
        self
    }

    /// Sets the initial formatter buffer capacity
    pub fn with_format_block_size(mut self, size: usize) -> Self {
        self.format_block_size = size;
        self
    }

    /// Sets the formatter growth strategy
    pub fn with_growth_strategy(mut self, strategy: GrowthStrategy) -> Self {
        self.growth_strategy = strategy;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

impl Credentials for Config {
    fn user(&self) -> &str {
        &self.smb_user
    }

    fn pass(&self) -> &str {
        &self.smb_pass
    }
}
