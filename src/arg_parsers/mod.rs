//! Parsers and validated carriers for individual command-line values.

mod kernel_size;
pub use kernel_size::*;

use std::ffi::OsStr;
use std::str::FromStr;

use crate::{error::WandError, fw_err};

/// Trims and parses a numeric option value. The error echoes the raw value
/// the user passed, together with the option it belonged to.
pub fn parse_number<T: FromStr>(value: &OsStr, option: &str) -> Result<T, WandError> {
    value
        .to_str()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| {
            fw_err!(
                InvalidParameter,
                "invalid argument for option `{option}': {}",
                value.to_string_lossy()
            )
        })
}
