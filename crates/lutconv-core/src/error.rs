//! Error types for LUT grid operations.

use thiserror::Error;

/// Errors that can occur while building, sampling or transcoding LUT grids.
#[derive(Error, Debug)]
pub enum LutError {
    /// A buffer length disagrees with the dimensions it is paired with.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// The cube text has no usable `LUT_3D_SIZE` header.
    #[error("malformed cube header: {0}")]
    MalformedHeader(String),

    /// The cube data block ended before all rows were read.
    #[error("insufficient cube data: expected {expected} rows, found {found}")]
    InsufficientData {
        /// Rows required by the size header (N cubed).
        expected: usize,
        /// Valid data rows actually present.
        found: usize,
    },

    /// A strip layout cannot tile the image it describes.
    #[error("invalid image dimensions: {0}")]
    InvalidImageDimensions(String),

    /// A filter mode name other than `nearest` or `linear`.
    #[error("invalid filter mode: {0:?}")]
    InvalidFilterMode(String),
}

/// Result type for LUT grid operations.
pub type LutResult<T> = Result<T, LutError>;
