//! String splitting utilities for argus-utils
//!
//! This module splits delimited responses from the recording service, such as
//! comma-separated edit decision lists, into their pieces.

use crate::{
    error::{Error, Result},
    types::SplitFirstPiece,
};

/// Splits strings on a fixed delimiter
///
/// Occurrences are found left to right without overlap. With a non-zero
/// `max_strings`, at most `max_strings - 1` delimiters are consumed and the
/// last piece keeps the rest of the input verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Splitter<'d> {
    delimiter: &'d str,
    max_strings: usize,
    first_piece: SplitFirstPiece,
}

impl<'d> Splitter<'d> {
    /// Creates an unlimited splitter on `delimiter`
    pub fn new(delimiter: &'d str) -> Self {
        Self {
            delimiter,
            max_strings: 0,
            first_piece: SplitFirstPiece::default(),
        }
    }

    /// Caps the number of pieces; zero means unlimited
    pub fn with_max_strings(mut self, max_strings: usize) -> Self {
        self.max_strings = max_strings;
        self
    }

    /// Chooses what a split capped at one piece returns
    pub fn with_first_piece(mut self, first_piece: SplitFirstPiece) -> Self {
        self.first_piece = first_piece;
        self
    }

    /// Splits `input` into borrowed pieces
    ///
    /// # Errors
    /// Returns [`Error::InvalidDelimiter`] when the delimiter is empty.
    pub fn split<'a>(&self, input: &'a str) -> Result<Vec<&'a str>> {
        if self.delimiter.is_empty() {
            return Err(Error::InvalidDelimiter {
                input: input.to_string(),
            });
        }
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let positions: Vec<usize> = input
            .match_indices(self.delimiter)
            .map(|(pos, _)| pos)
            .collect();
        let Some(&first) = positions.first() else {
            return Ok(vec![input]);
        };

        // Number of delimiters consumed, one less than the number of pieces
        let mut consumed = positions.len();
        if self.max_strings > 0 && consumed >= self.max_strings {
            consumed = self.max_strings - 1;
        }

        if consumed == 0 {
            return Ok(vec![match self.first_piece {
                SplitFirstPiece::WholeInput => input,
                SplitFirstPiece::LeadingSegment => &input[..first],
            }]);
        }

        let mut pieces = Vec::with_capacity(consumed + 1);
        let mut start = 0;
        for &pos in &positions[..consumed] {
            pieces.push(&input[start..pos]);
            start = pos + self.delimiter.len();
        }
        pieces.push(&input[start..]);
        Ok(pieces)
    }
}

/// Splits `input` on `delimiter` into at most `max_strings` pieces
///
/// `max_strings == 0` means unlimited.
///
/// # Errors
/// Returns [`Error::InvalidDelimiter`] when the delimiter is empty.
pub fn split<'a>(input: &'a str, delimiter: &str, max_strings: usize) -> Result<Vec<&'a str>> {
    Splitter::new(delimiter)
        .with_max_strings(max_strings)
        .split(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unlimited() {
        assert_eq!(split("a,b,c", ",", 0).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_capped() {
        assert_eq!(split("a,b,c", ",", 2).unwrap(), vec!["a", "b,c"]);
        assert_eq!(split("a,b,c", ",", 3).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(split("a,b,c", ",", 10).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split("", ",", 0).unwrap().is_empty());
    }

    #[test]
    fn test_split_without_delimiter() {
        assert_eq!(split("abc", ",", 0).unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_split_empty_pieces() {
        assert_eq!(split(",a,,b,", ",", 0).unwrap(), vec!["", "a", "", "b", ""]);
    }

    #[test]
    fn test_split_multi_char_delimiter() {
        assert_eq!(
            split("10.5 -- 20.0 -- 3", " -- ", 0).unwrap(),
            vec!["10.5", "20.0", "3"]
        );
        // Search resumes after the previous match, so "aaa" holds one "aa"
        assert_eq!(split("aaa", "aa", 0).unwrap(), vec!["", "a"]);
    }

    #[test]
    fn test_split_single_piece_keeps_whole_input() {
        assert_eq!(split("a,b,c", ",", 1).unwrap(), vec!["a,b,c"]);
    }

    #[test]
    fn test_split_single_piece_leading_segment() {
        let splitter = Splitter::new(",")
            .with_max_strings(1)
            .with_first_piece(SplitFirstPiece::LeadingSegment);
        assert_eq!(splitter.split("a,b,c").unwrap(), vec!["a"]);
        // The flag only matters when the cap leaves a single piece
        assert_eq!(
            splitter.with_max_strings(2).split("a,b,c").unwrap(),
            vec!["a", "b,c"]
        );
    }

    #[test]
    fn test_split_empty_delimiter() {
        assert!(matches!(
            split("a,b", "", 0),
            Err(Error::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn test_split_rejoins_to_input() {
        let input = "2012-05-15_20-30;SBS 6;NCIS;";
        assert_eq!(split(input, ";", 0).unwrap().join(";"), input);
    }
}
