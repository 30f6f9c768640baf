//! Utility functions and helpers for argus-utils
//!
//! This module provides the helper routines organized by functionality:
//! - printf-style formatting with a growable buffer
//! - Delimiter-based splitting
//! - Base64 encoding
//! - UNC and SMB path conversion
//! - Small string and file helpers

pub mod base64;
pub mod files;
pub mod formatting;
pub mod paths;
mod printf;
pub mod split;
pub mod strings;

pub use files::{read_file_contents, write_file_contents};
pub use formatting::{Formatter, format, try_format};
pub use paths::{Credentials, SmbCredentials, insert_user, to_cifs, to_unc};
pub use split::{Splitter, split};
pub use strings::{directory_path, ends_with, starts_with, str_to_bool};
