//! File helpers for argus-utils
//!
//! Whole-file read and write wrappers used to cache service responses on
//! local storage.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, error};

use crate::error::{Error, Result};

/// Reads a text file, concatenating its lines without their terminators
///
/// # Errors
/// Returns [`Error::FileReadFailed`] if the file cannot be opened or read.
pub fn read_file_contents(path: &Path) -> Result<String> {
    let read_failed = |source| Error::FileReadFailed {
        path: path.display().to_string(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_failed)?);
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line.map_err(read_failed)?);
    }
    Ok(content)
}

/// Writes `content` to `path`, replacing any existing file
///
/// # Errors
/// Returns [`Error::FileWriteFailed`] if the file cannot be written.
pub fn write_file_contents(path: &Path, content: &str) -> Result<()> {
    match fs::write(path, content) {
        Ok(()) => {
            debug!("wrote file {}", path.display());
            Ok(())
        }
        Err(source) => {
            error!("can not write to {}", path.display());
            Err(Error::FileWriteFailed {
                path: path.display().to_string(),
                source,
            })
        }
    }
}
