//! Text command implementations for argus-utils
//!
//! Formatting, splitting and base64 encoding from the command line.

use crate::{
    cli::args::{Base64, Format, Split},
    config::Config,
    error::Result,
    types::{FormatArg, SplitFirstPiece},
    utils::{Formatter, Splitter, base64},
};
use log::debug;

/// Format command implementation
pub struct FormatCommand<'a> {
    args: &'a Format,
}

impl<'a> FormatCommand<'a> {
    /// Create a new format command
    pub fn new(args: &'a Format) -> Self {
        Self { args }
    }

    /// Execute the format command
    pub fn run(&self, config: &Config) -> Result<()> {
        let formatter = Formatter::from_config(config);
        debug!("Formatting with {} growth", formatter.strategy());

        let args: Vec<FormatArg<'_>> = self.args.args.iter().map(FormatArg::from).collect();
        println!("{}", formatter.try_format(Some(self.args.template.as_str()), &args)?);
        Ok(())
    }
}

/// Split command implementation
pub struct SplitCommand<'a> {
    args: &'a Split,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    pub fn new(args: &'a Split) -> Self {
        Self { args }
    }

    /// Execute the split command
    pub fn run(&self, _config: &Config) -> Result<()> {
        let first_piece = if self.args.leading_segment {
            SplitFirstPiece::LeadingSegment
        } else {
            SplitFirstPiece::WholeInput
        };
        let pieces = Splitter::new(&self.args.delimiter)
            .with_max_strings(self.args.max)
            .with_first_piece(first_piece)
            .split(&self.args.input)?;

        debug!("Split into {} pieces", pieces.len());
        for piece in pieces {
            println!("{piece}");
        }
        Ok(())
    }
}

/// Base64 command implementation
pub struct Base64Command<'a> {
    args: &'a Base64,
}

impl<'a> Base64Command<'a> {
    /// Create a new base64 command
    pub fn new(args: &'a Base64) -> Self {
        Self { args }
    }

    /// Execute the base64 command
    pub fn run(&self, _config: &Config) -> Result<()> {
        println!("{}", base64::encode_str(&self.args.text, self.args.url));
        Ok(())
    }
}
