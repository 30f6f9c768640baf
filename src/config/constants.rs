//! Configuration constants for argus-utils
//!
//! This module contains all hardcoded constants used throughout the crate,
//! organized by functionality.

// =============================================================================
// Formatting Constants
// =============================================================================

/// Initial capacity of the formatter buffer in bytes
pub const FORMAT_BLOCK_SIZE: usize = 2048;

/// Precision used by `%f`, `%e` and `%g` when the template gives none
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Largest width or precision accepted, matching the `int` fields of snprintf
pub const MAX_FORMAT_FIELD: usize = i32::MAX as usize;

/// Largest precision accepted by the float conversions
///
/// `%g` may print three more decimals than its precision, and the std
/// formatter stops at `u16::MAX`.
pub const MAX_FLOAT_PRECISION: usize = u16::MAX as usize - 3;

// =============================================================================
// Path Constants
// =============================================================================

/// Scheme prefix of an SMB URI
pub const SMB_PREFIX: &str = "smb://";

/// Leading double backslash of a UNC path
pub const UNC_PREFIX: &str = "\\\\";

// =============================================================================
// Base64 Constants
// =============================================================================

/// Percent-escaped forms used in URL mode
pub const URL_ESCAPED_PLUS: &str = "%2B";
pub const URL_ESCAPED_SLASH: &str = "%2F";
pub const URL_ESCAPED_PAD: &str = "%3D";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "ARGUSUTILS_LOG";

// =============================================================================
// Logging Messages
// =============================================================================

/// Log message after credentials were injected into an SMB URI
pub const LOG_MSG_ACCOUNT_INFO_ADDED: &str = "Account Info added to SMB url";

/// Log message when the formatter gives up and returns an empty string
pub const LOG_MSG_FORMAT_FAILED: &str = "Formatting failed, returning empty string";
