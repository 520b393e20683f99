//! Crate-level error types.

use std::fmt;

/// Errors produced by the trackball viewer crate.
#[derive(Debug)]
pub enum ViewerError {
    /// The render surface has a zero dimension, so no arcball radius can be
    /// derived from it.
    InvalidViewport {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Browser environment setup failure (missing window, canvas, etc.).
    Web(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
