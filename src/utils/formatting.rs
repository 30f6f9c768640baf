//! Formatting utilities for argus-utils
//!
//! This module provides the printf-style string builder used to compose
//! request strings for the recording service. Output is never truncated:
//! the buffer grows until the whole rendering fits.

use log::warn;

use super::printf::{self, RenderOutcome};
use crate::{
    config::{Config, FORMAT_BLOCK_SIZE, LOG_MSG_FORMAT_FAILED},
    error::{Error, Result},
    types::{FormatArg, GrowthStrategy},
};

/// Builds printf-style strings into a growable buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    block_size: usize,
    strategy: GrowthStrategy,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            block_size: FORMAT_BLOCK_SIZE,
            strategy: GrowthStrategy::default(),
        }
    }
}

impl Formatter {
    /// Creates a formatter with the default block size and strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter from the block size and strategy in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_block_size(config.format_block_size)
            .with_strategy(config.growth_strategy)
    }

    /// Sets the initial buffer capacity; zero is raised to one
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    /// Sets the growth strategy
    pub fn with_strategy(mut self, strategy: GrowthStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the growth strategy in use
    pub fn strategy(&self) -> GrowthStrategy {
        self.strategy
    }

    /// Renders `template` with `args`
    ///
    /// A `None` template yields `Ok("")`.
    ///
    /// # Errors
    /// Returns an error when the buffer cannot grow, an argument is missing or
    /// unusable, or the template holds an unknown conversion.
    pub fn try_format(&self, template: Option<&str>, args: &[FormatArg<'_>]) -> Result<String> {
        let Some(template) = template else {
            return Ok(String::new());
        };

        let mut capacity = self.block_size;
        let mut buffer = String::new();
        loop {
            buffer.clear();
            buffer
                .try_reserve_exact(capacity)
                .map_err(|_| Error::FormatAllocationFailed {
                    requested: capacity,
                })?;

            let outcome = printf::render(&mut buffer, capacity, template, args, self.strategy)?;
            capacity = match outcome {
                RenderOutcome::Fits => return Ok(buffer),
                // One extra slot for the terminator guarantees the next pass fits
                RenderOutcome::Needs(required) => required.checked_add(1).ok_or_else(overflowed)?,
                RenderOutcome::Overflow => capacity.checked_mul(2).ok_or_else(overflowed)?,
            };
        }
    }

    /// Renders `template` with `args`, returning an empty string on failure
    ///
    /// An empty result is ambiguous: it may be a genuine empty rendering or a
    /// failure. Use [`Formatter::try_format`] to tell them apart.
    pub fn format(&self, template: Option<&str>, args: &[FormatArg<'_>]) -> String {
        self.try_format(template, args).unwrap_or_else(|err| {
            warn!("{LOG_MSG_FORMAT_FAILED}: {err}");
            String::new()
        })
    }
}

fn overflowed() -> Error {
    Error::FormatAllocationFailed {
        requested: usize::MAX,
    }
}

/// Renders `template` with `args` using the default [`Formatter`]
pub fn format(template: &str, args: &[FormatArg<'_>]) -> String {
    Formatter::new().format(Some(template), args)
}

/// Renders `template` with `args` using the default [`Formatter`]
///
/// # Errors
/// See [`Formatter::try_format`].
pub fn try_format(template: &str, args: &[FormatArg<'_>]) -> Result<String> {
    Formatter::new().try_format(Some(template), args)
}

/// Renders a printf-style template, converting each argument into a
/// [`FormatArg`](crate::FormatArg)
///
/// ```
/// let path = argus_utils::argus_format!("%s/%d.ts", "recordings", 42);
/// assert_eq!(path, "recordings/42.ts");
/// ```
#[macro_export]
macro_rules! argus_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::utils::format($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_template() {
        assert_eq!(format("GetRecordingGroups", &[]), "GetRecordingGroups");
        assert_eq!(format("", &[]), "");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format("%d", &[FormatArg::Int(1234)]), "1234");
        assert_eq!(format("%d", &[FormatArg::Int(-9)]), "-9");
    }

    #[test]
    fn test_format_none_template() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format(None, &[FormatArg::Int(1)]), "");
        assert_eq!(formatter.try_format(None, &[]).unwrap(), "");
    }

    #[test]
    fn test_format_macro() {
        let channel = String::from("NPO 1");
        assert_eq!(
            crate::argus_format!("ArgusTV/Guide/Programs/%s/%d", &channel, 7u32),
            "ArgusTV/Guide/Programs/NPO 1/7"
        );
        assert_eq!(crate::argus_format!("plain"), "plain");
    }

    #[test]
    fn test_format_grows_past_block_size() {
        let long = "x".repeat(5000);
        for strategy in GrowthStrategy::all() {
            let formatter = Formatter::new().with_block_size(16).with_strategy(strategy);
            let rendered = formatter.format(Some("[%s]"), &[FormatArg::Str(&long)]);
            assert_eq!(rendered.len(), 5002);
            assert!(rendered.starts_with("[x") && rendered.ends_with("x]"));
        }
    }

    #[test]
    fn test_format_exact_boundary() {
        // 15 bytes fit a 16-byte block, 16 bytes need a second pass
        for strategy in GrowthStrategy::all() {
            let formatter = Formatter::new().with_block_size(16).with_strategy(strategy);
            let fits = "a".repeat(15);
            let grows = "b".repeat(16);
            assert_eq!(formatter.format(Some(fits.as_str()), &[]), fits);
            assert_eq!(formatter.format(Some(grows.as_str()), &[]), grows);
        }
    }

    #[test]
    fn test_strategies_agree() {
        let args = [
            FormatArg::Str("Journaal"),
            FormatArg::Float(20.5),
            FormatArg::UInt(3),
        ];
        let exact = Formatter::new()
            .with_block_size(4)
            .with_strategy(GrowthStrategy::ExactSize)
            .format(Some("%-12s|%8.2f|%03u"), &args);
        let doubling = Formatter::new()
            .with_block_size(4)
            .with_strategy(GrowthStrategy::Doubling)
            .format(Some("%-12s|%8.2f|%03u"), &args);
        assert_eq!(exact, "Journaal    |   20.50|003");
        assert_eq!(exact, doubling);
    }

    #[test]
    fn test_format_failure_is_empty() {
        assert_eq!(format("%d", &[]), "");
        assert!(matches!(
            try_format("%d", &[]),
            Err(Error::FormatArgumentMissing {
                index: 0,
                conversion: 'd'
            })
        ));
    }

    #[test]
    fn test_format_oversized_fields_are_empty() {
        let huge_star = [FormatArg::Int(i64::MAX), FormatArg::Int(1)];
        assert_eq!(format("%*d", &huge_star), "");
        assert!(matches!(
            try_format("%*d", &huge_star),
            Err(Error::FormatFieldTooLarge { field: "width", .. })
        ));

        assert_eq!(format("%99999999999999999999d", &[FormatArg::Int(1)]), "");
        assert_eq!(format("%.70000f", &[FormatArg::Float(1.0)]), "");
        assert!(matches!(
            try_format("%.70000f", &[FormatArg::Float(1.0)]),
            Err(Error::FormatFieldTooLarge {
                field: "precision",
                ..
            })
        ));
    }

    #[test]
    fn test_format_unfinished_conversion() {
        assert_eq!(format("%5%", &[]), "%");
        assert_eq!(format("%-", &[]), "");
        assert!(matches!(
            try_format("%-", &[]),
            Err(Error::IncompleteConversion { .. })
        ));
    }

    #[test]
    fn test_formatter_from_config() {
        let config = Config::new()
            .with_format_block_size(0)
            .with_growth_strategy(GrowthStrategy::Doubling);
        let formatter = Formatter::from_config(&config);
        assert_eq!(formatter.strategy(), GrowthStrategy::Doubling);
        assert_eq!(formatter.format(Some("%s"), &[FormatArg::Str("ok")]), "ok");
    }
}
