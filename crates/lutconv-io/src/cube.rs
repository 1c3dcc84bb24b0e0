//! `.cube` file transport.
//!
//! Thin file layer over the core text codec: read a UTF-8 file and
//! parse it, or serialize a grid and write it out.

use std::fs;
use std::path::Path;

use lutconv_core::{LutGrid, parse_cube, serialize_cube};
use tracing::debug;

use crate::error::IoResult;

/// Reads and parses a `.cube` file.
///
/// # Example
///
/// ```rust,no_run
/// use lutconv_io::cube;
///
/// let lut = cube::read("input.cube").unwrap();
/// println!("{}x{}x{}", lut.width(), lut.height(), lut.depth());
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<LutGrid> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse_cube(&text)?;
    debug!(
        path = %path.as_ref().display(),
        size = grid.width(),
        "read cube LUT"
    );
    Ok(grid)
}

/// Serializes a grid and writes it as a `.cube` file.
///
/// `header` goes above the size line, trimmed; pass a `TITLE "..."`
/// line or an empty string.
pub fn write<P: AsRef<Path>>(path: P, grid: &LutGrid, header: &str) -> IoResult<()> {
    let text = serialize_cube(grid, header);
    fs::write(path.as_ref(), text)?;
    debug!(
        path = %path.as_ref().display(),
        size = grid.width(),
        "wrote cube LUT"
    );
    Ok(())
}
