//! Types used in argus-utils

use std::fmt;

/// How the formatter grows its buffer when a render does not fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthStrategy {
    /// The render primitive reports the exact length it needs; grow once to fit
    #[default]
    ExactSize,
    /// The render primitive only reports overflow; double until it fits
    Doubling,
}

impl GrowthStrategy {
    /// Returns the name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            GrowthStrategy::ExactSize => "exact",
            GrowthStrategy::Doubling => "doubling",
        }
    }

    /// Returns all strategies
    pub fn all() -> Vec<GrowthStrategy> {
        vec![GrowthStrategy::ExactSize, GrowthStrategy::Doubling]
    }
}

impl fmt::Display for GrowthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the first piece holds when `max_strings` caps a split at one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitFirstPiece {
    /// The single piece is the whole input, delimiters included
    #[default]
    WholeInput,
    /// The single piece is the text before the first delimiter
    LeadingSegment,
}

/// One argument of a printf-style template
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Single character
    Char(char),
    /// Text
    Str(&'a str),
}

impl fmt::Display for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatArg::Int(v) => write!(f, "{v}"),
            FormatArg::UInt(v) => write!(f, "{v}"),
            FormatArg::Float(v) => write!(f, "{v}"),
            FormatArg::Char(c) => write!(f, "{c}"),
            FormatArg::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg<'_> {
                fn from(value: $source) -> Self {
                    FormatArg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_from_arg!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_arg!(Float as f64: f32, f64);

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        FormatArg::Char(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_strategy_default() {
        assert_eq!(GrowthStrategy::default(), GrowthStrategy::ExactSize);
        assert_eq!(GrowthStrategy::all().len(), 2);
    }

    #[test]
    fn test_growth_strategy_display() {
        assert_eq!(GrowthStrategy::ExactSize.to_string(), "exact");
        assert_eq!(GrowthStrategy::Doubling.to_string(), "doubling");
    }

    #[test]
    fn test_split_first_piece_default() {
        assert_eq!(SplitFirstPiece::default(), SplitFirstPiece::WholeInput);
    }

    #[test]
    fn test_format_arg_from() {
        assert_eq!(FormatArg::from(-3i32), FormatArg::Int(-3));
        assert_eq!(FormatArg::from(7usize), FormatArg::UInt(7));
        assert_eq!(FormatArg::from(1.5f32), FormatArg::Float(1.5));
        assert_eq!(FormatArg::from('x'), FormatArg::Char('x'));
        let owned = String::from("abc");
        assert_eq!(FormatArg::from(&owned), FormatArg::Str("abc"));
    }

    #[test]
    fn test_format_arg_display() {
        assert_eq!(FormatArg::Int(-42).to_string(), "-42");
        assert_eq!(FormatArg::Str("rec").to_string(), "rec");
        assert_eq!(FormatArg::Char('%').to_string(), "%");
    }
}
