//! # lutconv-core
//!
//! 3D color LUT grid with sampling and the two interchange codecs:
//! `.cube` text and tiled strip images.
//!
//! ## Components
//!
//! - [`LutGrid`]: dense RGB sample grid with nearest/trilinear lookup
//!   and resampling
//! - [`FilterMode`]: lookup filter selection
//! - [`cube`]: `.cube` text parse/serialize
//! - [`strip`]: tiled RGBA8 pixel pack/unpack driven by [`StripLayout`]
//!
//! The crate performs no I/O and holds no shared state; `lutconv-io`
//! layers files and PNG on top.
//!
//! ## Example
//!
//! ```rust
//! use lutconv_core::{FilterMode, cube};
//!
//! let text = "LUT_3D_SIZE 2\n\
//!             0 0 0\n1 0 0\n0 1 0\n1 1 0\n\
//!             0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
//! let lut = cube::parse(text).unwrap();
//! let bigger = lut.resize(4, 4, 4, FilterMode::Linear);
//! assert_eq!(bigger.dimensions(), (4, 4, 4));
//! ```
//!
//! # Dependencies
//!
//! - `thiserror`: error derives
//!
//! # Used By
//!
//! - `lutconv-io`: file and PNG transport
//! - `lutconv-cli`: command-line converter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod filter;
mod grid;

pub mod cube;
pub mod strip;

pub use error::{LutError, LutResult};
pub use filter::FilterMode;
pub use grid::LutGrid;
pub use strip::StripLayout;

// The four codec entry points, re-exported at the root.
pub use cube::{parse as parse_cube, serialize as serialize_cube};
pub use strip::{decode as decode_strip, encode as encode_strip};
