//! # argus-utils
//!
//! String, binary and path-syntax helpers used by the Argus TV PVR client:
//!
//! - [`Formatter`]: printf-style formatting into a growable buffer
//! - [`split`]: delimiter-based splitting with an optional piece limit
//! - [`base64::encode`]: base64 with an optional percent-escaped URL mode
//! - [`to_cifs`], [`to_unc`], [`insert_user`]: UNC and SMB URI conversion
//!
//! Every helper is stateless and safe to call from any thread.

pub mod cli;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{FormatArg, GrowthStrategy, SplitFirstPiece};
pub use utils::{
    Credentials, Formatter, SmbCredentials, Splitter, base64, directory_path, ends_with, format,
    insert_user, read_file_contents, split, starts_with, str_to_bool, to_cifs, to_unc, try_format,
    write_file_contents,
};
