//! Path command implementations for argus-utils
//!
//! UNC and SMB URI conversion and SMB account injection.

use crate::{
    cli::args::{InsertUser, ToCifs, ToUnc},
    config::Config,
    error::Result,
    utils::{insert_user, to_cifs, to_unc},
};
use log::warn;

/// UNC to SMB URI command implementation
pub struct ToCifsCommand<'a> {
    args: &'a ToCifs,
}

impl<'a> ToCifsCommand<'a> {
    /// Create a new to-cifs command
    pub fn new(args: &'a ToCifs) -> Self {
        Self { args }
    }

    /// Execute the to-cifs command
    pub fn run(&self, _config: &Config) -> Result<()> {
        println!("{}", to_cifs(&self.args.path)?);
        Ok(())
    }
}

/// SMB URI to UNC command implementation
pub struct ToUncCommand<'a> {
    args: &'a ToUnc,
}

impl<'a> ToUncCommand<'a> {
    /// Create a new to-unc command
    pub fn new(args: &'a ToUnc) -> Self {
        Self { args }
    }

    /// Execute the to-unc command
    pub fn run(&self, _config: &Config) -> Result<()> {
        println!("{}", to_unc(&self.args.path)?);
        Ok(())
    }
}

/// Credential injection command implementation
pub struct InsertUserCommand<'a> {
    args: &'a InsertUser,
}

impl<'a> InsertUserCommand<'a> {
    /// Create a new insert-user command
    pub fn new(args: &'a InsertUser) -> Self {
        Self { args }
    }

    /// Execute the insert-user command
    pub fn run(&self, config: &Config) -> Result<()> {
        let mut path = self.args.path.clone();
        if !insert_user(config, &mut path) {
            warn!("No account injected into '{path}'");
        }
        println!("{path}");
        Ok(())
    }
}
