//! Network path utilities for argus-utils
//!
//! The recording service reports file locations as UNC paths
//! (`\\host\share\file.ts`), while the media player opens them through its
//! SMB layer (`smb://host/share/file.ts`). These helpers rewrite one syntax
//! into the other and inject the configured SMB account.
//!
//! Both rewrites assume `\` and `/` never appear inside a path segment.

use log::debug;

use crate::{
    config::{LOG_MSG_ACCOUNT_INFO_ADDED, SMB_PREFIX, UNC_PREFIX},
    error::{Error, Result},
};

/// Account used to reach SMB shares
pub trait Credentials {
    /// User name; empty when no account is configured
    fn user(&self) -> &str;
    /// Password; may be empty
    fn pass(&self) -> &str;
}

/// A plain user/password pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmbCredentials {
    /// User name
    pub user: String,
    /// Password
    pub pass: String,
}

impl SmbCredentials {
    /// Creates a credential pair
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

impl Credentials for SmbCredentials {
    fn user(&self) -> &str {
        &self.user
    }

    fn pass(&self) -> &str {
        &self.pass
    }
}

/// Drops the first `count` characters of `path`
fn strip_leading(path: &str, count: usize) -> Result<&str> {
    match path.char_indices().nth(count) {
        Some((at, _)) => Ok(&path[at..]),
        None if path.chars().count() == count => Ok(""),
        None => Err(Error::PathTooShort {
            path: path.to_string(),
            expected_prefix_len: count,
        }),
    }
}

/// Converts a UNC path into an SMB URI
///
/// `\\nascat\qrecordings\NCIS.ts` becomes `smb://nascat/qrecordings/NCIS.ts`.
/// Every `\` turns into `/` and the first two characters are dropped; they are
/// not checked to be backslashes.
///
/// # Errors
/// Returns [`Error::PathTooShort`] for input shorter than two characters.
pub fn to_cifs(unc_name: &str) -> Result<String> {
    let rest = strip_leading(unc_name, UNC_PREFIX.len())?;
    Ok(format!("{SMB_PREFIX}{}", rest.replace('\\', "/")))
}

/// Converts an SMB URI into a UNC path
///
/// `smb://nascat/qrecordings/NCIS.ts` becomes `\\nascat\qrecordings\NCIS.ts`.
/// The first six characters are dropped without checking they are `smb://`.
/// Credentials in the URI are not removed.
///
/// # Errors
/// Returns [`Error::PathTooShort`] for input shorter than six characters.
pub fn to_unc(cifs_name: &str) -> Result<String> {
    let rest = strip_leading(cifs_name, SMB_PREFIX.len())?;
    Ok(format!("{UNC_PREFIX}{}", rest.replace('/', "\\")))
}

/// Injects the account from `credentials` into an SMB URI
///
/// Rewrites the `smb://` prefix to `smb://user@` or `smb://user:pass@` and
/// returns `true`. Returns `false` and leaves `cifs_name` untouched when the
/// user is empty or the path is not an SMB URI.
///
/// Call it at most once per path: a second call prepends the account again.
pub fn insert_user<C: Credentials + ?Sized>(credentials: &C, cifs_name: &mut String) -> bool {
    let user = credentials.user();
    if user.is_empty() || !cifs_name.starts_with(SMB_PREFIX) {
        return false;
    }

    let pass = credentials.pass();
    let prefix = if pass.is_empty() {
        format!("{SMB_PREFIX}{user}@")
    } else {
        format!("{SMB_PREFIX}{user}:{pass}@")
    };
    cifs_name.replace_range(..SMB_PREFIX.len(), &prefix);

    debug!("{LOG_MSG_ACCOUNT_INFO_ADDED}");
    true
}
