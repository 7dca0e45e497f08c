use std::fmt::Display;

/// All the ways a single invocation can fail. Every variant is terminal:
/// either the whole output image is written or none of it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WandError {
    /// The input path could not be read or decoded as an image.
    Decode(String),
    /// An out-of-domain parameter, rejected before any pixel work.
    InvalidParameter(String),
    /// The output directory or file could not be created or written.
    Write(String),
}

impl WandError {
    fn message(&self) -> &str {
        match self {
            WandError::Decode(msg) | WandError::InvalidParameter(msg) | WandError::Write(msg) => {
                msg
            }
        }
    }
}

impl Display for WandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for WandError {}

#[macro_export]
macro_rules! fw_err {
    ($variant:ident, $($arg:tt)*) => {
        $crate::error::WandError::$variant(format!(
            "filterwand: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! fw_try {
    ($variant:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::fw_err!($variant, "{err}"));
            }
        }
    };
}
