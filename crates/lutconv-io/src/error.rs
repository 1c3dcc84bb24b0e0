//! Error types for LUT file I/O.

use std::io;

use lutconv_core::LutError;
use thiserror::Error;

/// LUT file I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File extension not recognized as a LUT container.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// PNG decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// PNG encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// PNG pixel layout this reader does not handle.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Image size matches no known LUT layout and none was given.
    #[error(
        "cannot infer LUT size from a {image_width}x{image_height} image \
         (expected 64x64 or 512x512); pass explicit grid dimensions"
    )]
    UnknownLayout {
        /// Canvas width in pixels.
        image_width: usize,
        /// Canvas height in pixels.
        image_height: usize,
    },

    /// Error from the LUT core (parsing, layout or size validation).
    #[error("lut error: {0}")]
    Lut(#[from] LutError),
}

/// Result type for LUT file I/O.
pub type IoResult<T> = Result<T, IoError>;
