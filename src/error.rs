//! Error types for wavepix

use thiserror::Error;

/// Result type alias for wavepix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavepix
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster file could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Structural mismatch in a container or an encoded image
    #[error("Format error: {0}")]
    Format(String),

    /// Well-formed input that this codec does not handle
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Read past the end of a buffer
    #[error("Out of bounds: need {need} bytes, have {have}")]
    OutOfBounds { need: usize, have: usize },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// True for errors caused by malformed data
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// True for errors caused by valid but unhandled parameters
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}
