//! Small string helpers for argus-utils
//!
//! Setting values and service responses use these for flag parsing and
//! simple path handling.

/// Parses a setting flag; only the exact text `"True"` is true
pub fn str_to_bool(value: &str) -> bool {
    value == "True"
}

/// Returns true if `full` starts with `prefix`
pub fn starts_with(full: &str, prefix: &str) -> bool {
    full.starts_with(prefix)
}

/// Returns true if `full` ends with `suffix`
pub fn ends_with(full: &str, suffix: &str) -> bool {
    full.ends_with(suffix)
}

/// Returns the directory part of `path`
///
/// Both `/` and `\` count as separators. A path without a separator is
/// returned unchanged.
pub fn directory_path(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(at) => &path[..at],
        None => path,
    }
}
