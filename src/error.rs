use std::fmt;

/// Errors that can happen inside argus-utils
#[derive(Debug)]
pub enum Error {
    // Splitting errors
    /// The delimiter passed to the splitter was empty
    InvalidDelimiter {
        /// The input that was about to be split
        input: String,
    },

    // Path conversion errors
    /// The path is too short to carry the prefix being stripped
    PathTooShort {
        /// The offending path
        path: String,
        /// Number of leading characters the conversion removes
        expected_prefix_len: usize,
    },

    // Formatting errors
    /// The formatter could not grow its buffer
    FormatAllocationFailed {
        /// Capacity in bytes that was requested
        requested: usize,
    },
    /// A conversion referenced an argument that was not supplied
    FormatArgumentMissing {
        /// Zero-based index of the missing argument
        index: usize,
        /// The conversion character that consumed it
        conversion: char,
    },
    /// An argument cannot be rendered by the conversion that consumed it
    FormatArgumentMismatch {
        /// Zero-based index of the argument
        index: usize,
        /// The conversion character that consumed it
        conversion: char,
        /// Text of the argument as supplied
        found: String,
    },
    /// A width or precision is larger than the formatter accepts
    FormatFieldTooLarge {
        /// The conversion character the field belongs to
        conversion: char,
        /// Which field overflowed: "width" or "precision"
        field: &'static str,
        /// The requested value
        value: usize,
    },
    /// The template ends in the middle of a conversion
    IncompleteConversion {
        /// Text of the unfinished conversion, starting at '%'
        spec: String,
    },
    /// The template holds a conversion the formatter does not know
    UnsupportedConversion {
        /// The unknown conversion character
        conversion: char,
    },

    // File errors
    /// Failed to read a file
    FileReadFailed {
        /// Path of the file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// Failed to write a file
    FileWriteFailed {
        /// Path of the file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDelimiter { input } => {
                write!(f, "Cannot split '{input}': delimiter is empty")
            }
            Error::PathTooShort {
                path,
                expected_prefix_len,
            } => write!(
                f,
                "Path '{path}' is shorter than its {expected_prefix_len}-character prefix"
            ),
            Error::FormatAllocationFailed { requested } => {
                write!(f, "Failed to grow format buffer to {requested} bytes")
            }
            Error::FormatArgumentMissing { index, conversion } => {
                write!(f, "Missing argument #{index} for conversion '%{conversion}'")
            }
            Error::FormatArgumentMismatch {
                index,
                conversion,
                found,
            } => write!(
                f,
                "Argument #{index} ('{found}') cannot be rendered by conversion '%{conversion}'"
            ),
            Error::FormatFieldTooLarge {
                conversion,
                field,
                value,
            } => write!(f, "The {field} {value} of conversion '%{conversion}' is too large"),
            Error::IncompleteConversion { spec } => {
                write!(f, "Template ends inside conversion '{spec}'")
            }
            Error::UnsupportedConversion { conversion } => {
                write!(f, "Unsupported conversion '%{conversion}'")
            }
            Error::FileReadFailed { path, source } => {
                write!(f, "Failed to read '{path}': {source}")
            }
            Error::FileWriteFailed { path, source } => {
                write!(f, "Failed to write '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadFailed { source, .. } => Some(source),
            Error::FileWriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display() {
        let error = Error::PathTooShort {
            path: "smb:".to_string(),
            expected_prefix_len: 6,
        };
        assert!(error.to_string().contains("smb:"));
        assert!(error.to_string().contains("6-character prefix"));
    }

    #[test]
    fn test_format_error_display() {
        let error = Error::FormatArgumentMismatch {
            index: 1,
            conversion: 'd',
            found: "abc".to_string(),
        };
        assert!(error.to_string().contains("Argument #1"));
        assert!(error.to_string().contains("'%d'"));
    }

    #[test]
    fn test_format_field_display() {
        let error = Error::FormatFieldTooLarge {
            conversion: 'f',
            field: "precision",
            value: 70000,
        };
        assert!(error.to_string().contains("precision 70000"));

        let error = Error::IncompleteConversion {
            spec: "%-".to_string(),
        };
        assert!(error.to_string().contains("'%-'"));
    }

    #[test]
    fn test_invalid_delimiter_display() {
        let error = Error::InvalidDelimiter {
            input: "a,b".to_string(),
        };
        assert!(error.to_string().contains("delimiter is empty"));
    }

    #[test]
    fn test_error_source() {
        let error = Error::FileReadFailed {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(StdError::source(&error).is_some());

        let error = Error::UnsupportedConversion { conversion: 'q' };
        assert!(StdError::source(&error).is_none());
    }
}
