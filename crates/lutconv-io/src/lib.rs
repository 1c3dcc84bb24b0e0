//! # lutconv-io
//!
//! File transport for LUT grids.
//!
//! This crate moves [`LutGrid`]s between memory and the two container
//! formats the converter speaks:
//!
//! - **cube** - `.cube` text files
//! - **strip** - PNG images holding a tiled LUT strip
//!
//! The core codecs live in `lutconv-core` and stay byte-oriented; this
//! crate adds paths, files and the PNG pixel transport.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lutconv_io::{cube, read, strip};
//!
//! // Read either container (detected by extension).
//! let lut = read("grade.cube", None)?;
//!
//! // Write it out as a strip image on the auto-picked canvas.
//! strip::write("grade.png", &lut, None)?;
//! ```
//!
//! # Supported Containers
//!
//! | Container | Read | Write | Notes |
//! |-----------|------|-------|-------|
//! | `.cube` | Yes | Yes | 3D only (`LUT_3D_SIZE`) |
//! | `.png` | Yes | Yes | RGBA8; 64x64 and 512x512 sizes auto-recognized |
//!
//! # Dependencies
//!
//! - [`lutconv-core`] - Grid type and codecs
//! - [`png`] - PNG transport
//!
//! # Used By
//!
//! - `lutconv-cli`: command-line converter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

pub mod cube;
pub mod strip;

pub use detect::LutFormat;
pub use error::{IoError, IoResult};

use std::path::Path;

use lutconv_core::LutGrid;

/// Reads a LUT from a file, detecting the container by extension.
///
/// `dims` applies to strip images whose canvas is not a recognized
/// preset; cube files ignore it (their size is in the header).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The extension is not a supported container
/// - A strip canvas is neither a preset nor covered by `dims`
pub fn read<P: AsRef<Path>>(path: P, dims: Option<(usize, usize, usize)>) -> IoResult<LutGrid> {
    let path = path.as_ref();

    match LutFormat::from_extension(path) {
        LutFormat::Cube => cube::read(path),
        LutFormat::Image => strip::read(path, dims),
        LutFormat::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}
