//! `.cube` text format codec.
//!
//! The Adobe/Resolve `.cube` format stores one RGB triple per line in
//! plain text, preceded by a small keyword header. Only the 3D variant
//! (`LUT_3D_SIZE`) is handled here.
//!
//! ## Format Example
//!
//! ```text
//! TITLE "Created by lutconv"
//! LUT_3D_SIZE 2
//!
//! 0.000000 0.000000 0.000000
//! 1.000000 0.000000 0.000000
//! 0.000000 1.000000 0.000000
//! ...
//! ```
//!
//! Rows run red-fastest (x), then green (y), then blue (z) — the same
//! order as [`LutGrid`]'s buffer, so row `i` is flat cell `i`.

use crate::error::{LutError, LutResult};
use crate::grid::LutGrid;

/// Parses `.cube` text into a [`LutGrid`].
///
/// The first line of the form `LUT_3D_SIZE <N>` fixes the grid at
/// `N`x`N`x`N`; it may appear anywhere in the file. Everything above the
/// first data row (titles, comments, domain keywords, blank lines) is
/// skipped; from that row on, exactly `N` cubed consecutive data rows are
/// required. Content after the data block is ignored.
///
/// A data row is a line of exactly three whitespace-separated floats
/// (decimal or scientific notation).
///
/// # Errors
///
/// - [`LutError::MalformedHeader`] when the size header is missing, zero
///   or too large to address.
/// - [`LutError::InsufficientData`] when the data block is interrupted or
///   the text ends before `N` cubed rows.
///
/// # Example
///
/// ```rust
/// use lutconv_core::cube;
///
/// let text = "LUT_3D_SIZE 2\n\
///             0 0 0\n1 0 0\n0 1 0\n1 1 0\n\
///             0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
/// let lut = cube::parse(text).unwrap();
/// assert_eq!(lut.dimensions(), (2, 2, 2));
/// assert_eq!(*lut.get(1, 1, 1), [1.0, 1.0, 1.0]);
/// ```
pub fn parse(text: &str) -> LutResult<LutGrid> {
    let size = find_size(text)?;
    let expected = size
        .checked_mul(size)
        .and_then(|n| n.checked_mul(size))
        .ok_or_else(|| LutError::MalformedHeader(format!("LUT_3D_SIZE {size} is too large")))?;

    let mut data: Vec<[f32; 3]> = Vec::new();
    let mut in_rows = false;
    for line in text.lines() {
        if data.len() == expected {
            break;
        }
        match parse_row(line) {
            Some(rgb) => {
                in_rows = true;
                data.push(rgb);
            }
            // Preamble lines before the first data row.
            None if !in_rows => continue,
            // The data block stops at the first non-row line.
            None => break,
        }
    }

    if data.len() < expected {
        return Err(LutError::InsufficientData {
            expected,
            found: data.len(),
        });
    }

    LutGrid::from_data(size, size, size, data)
}

/// Serializes a [`LutGrid`] to `.cube` text.
///
/// `header` is emitted first (trimmed), then the `LUT_3D_SIZE` line, a
/// blank separator and one 6-decimal row per cell in buffer order. Pass
/// a `TITLE "..."` line (or several keyword lines) as the header, or an
/// empty string for none.
///
/// Only `width` is written; the format is cubic by definition and the
/// function does not check the other two dimensions. Surfaces that can
/// hold a non-cubic grid (the CLI) refuse before calling.
///
/// # Example
///
/// ```rust
/// use lutconv_core::{cube, LutGrid};
///
/// let text = cube::serialize(&LutGrid::identity(2, 2, 2), "TITLE \"demo\"");
/// assert!(text.starts_with("TITLE \"demo\"\nLUT_3D_SIZE 2\n\n0.000000"));
/// ```
pub fn serialize(grid: &LutGrid, header: &str) -> String {
    let mut out = String::with_capacity(header.len() + 24 + grid.entry_count() * 30);
    out.push_str(header.trim());
    out.push('\n');
    out.push_str(&format!("LUT_3D_SIZE {}\n\n", grid.width()));
    // Buffer order is already the cube row order (x fastest).
    for rgb in grid.data() {
        out.push_str(&format!("{:.6} {:.6} {:.6}\n", rgb[0], rgb[1], rgb[2]));
    }
    out
}

/// Scans for the first line that is exactly `LUT_3D_SIZE <digits>`.
fn find_size(text: &str) -> LutResult<usize> {
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("LUT_3D_SIZE ") {
            if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let size: usize = rest.parse().map_err(|_| {
                LutError::MalformedHeader(format!("LUT_3D_SIZE {rest} is too large"))
            })?;
            if size == 0 {
                return Err(LutError::MalformedHeader(
                    "LUT_3D_SIZE must be at least 1".to_string(),
                ));
            }
            return Ok(size);
        }
    }
    Err(LutError::MalformedHeader(
        "no LUT_3D_SIZE line found".to_string(),
    ))
}

/// Parses a line as a data row: exactly three float tokens.
fn parse_row(line: &str) -> Option<[f32; 3]> {
    let mut tokens = line.split_whitespace();
    let r = tokens.next()?.parse().ok()?;
    let g = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_2: &str = "\
LUT_3D_SIZE 2

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
";

    #[test]
    fn test_parse_identity_ramp() {
        let lut = parse(CUBE_2).unwrap();
        assert_eq!(lut.dimensions(), (2, 2, 2));
        assert_eq!(*lut.get(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(*lut.get(1, 1, 1), [1.0, 1.0, 1.0]);
        // x fastest: row 1 is cell (1, 0, 0), row 4 is cell (0, 0, 1).
        assert_eq!(*lut.get(1, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(*lut.get(0, 0, 1), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_skips_preamble() {
        let rows = "0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
        let text = format!(
            "TITLE \"whatever\"\n# a comment\nDOMAIN_MIN 0.0 0.0 0.0\n\
             DOMAIN_MAX 1.0 1.0 1.0\nLUT_3D_SIZE 2\n\n{rows}"
        );
        let lut = parse(&text).unwrap();
        assert_eq!(lut.dimensions(), (2, 2, 2));
        assert_eq!(*lut.get(1, 0, 0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_size_line_after_data() {
        // The header scan covers the whole text, not just the preamble.
        let text = "0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\nLUT_3D_SIZE 2\n";
        let lut = parse(text).unwrap();
        assert_eq!(lut.dimensions(), (2, 2, 2));
    }

    #[test]
    fn test_parse_missing_header() {
        assert!(matches!(
            parse("0 0 0\n1 1 1\n"),
            Err(LutError::MalformedHeader(_))
        ));
        // An almost-header does not count.
        assert!(matches!(
            parse("LUT_3D_SIZE two\n"),
            Err(LutError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_parse_zero_size() {
        assert!(matches!(
            parse("LUT_3D_SIZE 0\n"),
            Err(LutError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_parse_oversized_header() {
        // Does not fit usize at all.
        assert!(matches!(
            parse("LUT_3D_SIZE 99999999999999999999\n"),
            Err(LutError::MalformedHeader(_))
        ));
        // Fits, but the cube overflows.
        assert!(matches!(
            parse("LUT_3D_SIZE 7000000000\n"),
            Err(LutError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_parse_insufficient_rows() {
        let err = parse("LUT_3D_SIZE 2\n0 0 0\n1 0 0\n").unwrap_err();
        match err {
            LutError::InsufficientData { expected, found } => {
                assert_eq!(expected, 8);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_interrupted_block() {
        // A stray line inside the data block ends it early.
        let text =
            "LUT_3D_SIZE 2\n0 0 0\n1 0 0\noops\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
        assert!(matches!(
            parse(text),
            Err(LutError::InsufficientData { found: 2, .. })
        ));
    }

    #[test]
    fn test_parse_no_data_rows() {
        assert!(matches!(
            parse("LUT_3D_SIZE 2\nTITLE \"empty\"\n"),
            Err(LutError::InsufficientData { found: 0, .. })
        ));
    }

    #[test]
    fn test_parse_ignores_trailing_content() {
        let text = format!("{CUBE_2}junk after the block\n0.5 0.5 0.5\n");
        let lut = parse(&text).unwrap();
        assert_eq!(lut.dimensions(), (2, 2, 2));
        assert_eq!(*lut.get(1, 1, 1), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let mut text = String::from("LUT_3D_SIZE 2\n");
        for _ in 0..8 {
            text.push_str("1.0e-1 2.5E-2 1e0\n");
        }
        let lut = parse(&text).unwrap();
        let v = lut.get(0, 0, 0);
        assert!((v[0] - 0.1).abs() < 1e-7);
        assert!((v[1] - 0.025).abs() < 1e-7);
        assert_eq!(v[2], 1.0);
    }

    #[test]
    fn test_parse_crlf() {
        let text = CUBE_2.replace('\n', "\r\n");
        let lut = parse(&text).unwrap();
        assert_eq!(lut.dimensions(), (2, 2, 2));
        assert_eq!(*lut.get(1, 1, 1), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_serialize_layout() {
        let lut = LutGrid::identity(2, 2, 2);
        let text = serialize(&lut, "TITLE \"unit\"");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TITLE \"unit\"");
        assert_eq!(lines[1], "LUT_3D_SIZE 2");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "0.000000 0.000000 0.000000");
        assert_eq!(lines[4], "1.000000 0.000000 0.000000");
        assert_eq!(lines.len(), 3 + 8);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_serialize_trims_header() {
        let text = serialize(&LutGrid::identity(2, 2, 2), "  TITLE \"x\"\n\n");
        assert!(text.starts_with("TITLE \"x\"\nLUT_3D_SIZE 2"));
    }

    #[test]
    fn test_serialize_empty_header() {
        let text = serialize(&LutGrid::identity(2, 2, 2), "");
        assert!(text.starts_with("\nLUT_3D_SIZE 2\n"));
        // Still parses: the leading blank line is preamble.
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn test_round_trip_within_format_precision() {
        let mut lut = LutGrid::identity(3, 3, 3);
        lut.set(1, 2, 0, [1.0 / 3.0, 2.0 / 7.0, 0.123456789]);
        // Out-of-range values are written as-is, no clamping in this codec.
        lut.set(0, 0, 0, [-0.25, 1.5, 0.0]);
        let back = parse(&serialize(&lut, "TITLE \"rt\"")).unwrap();
        for (a, b) in back.data().iter().zip(lut.data().iter()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() <= 5e-7);
            }
        }
    }
}
