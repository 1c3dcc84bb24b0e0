//! CLI command implementations

pub mod convert;
pub mod identity;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result, bail};
use lutconv_core::LutGrid;
use lutconv_io::LutFormat;

/// Loads a LUT from either container, with path context on failure.
///
/// `dims` covers strip images whose canvas is not a recognized preset.
pub fn load_lut(path: &Path, dims: Option<(usize, usize, usize)>) -> Result<LutGrid> {
    lutconv_io::read(path, dims).with_context(|| format!("failed to load {}", path.display()))
}

/// Writes a LUT to the container named by the output extension.
///
/// Cube files are cubic by definition, so a non-cubic grid is refused
/// here rather than written with a lying size header. `image_size`
/// forces a strip canvas; `None` lets the layout pick one.
pub fn save_lut(
    path: &Path,
    grid: &LutGrid,
    title: &str,
    image_size: Option<(usize, usize)>,
) -> Result<()> {
    match LutFormat::from_extension(path) {
        LutFormat::Cube => {
            let (w, h, d) = grid.dimensions();
            if w != h || h != d {
                bail!(
                    "cube output needs a cubic grid, not {w}x{h}x{d}; \
                     pick a .png output or a cubic --size"
                );
            }
            let header = format!("TITLE \"{title}\"");
            lutconv_io::cube::write(path, grid, &header)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        LutFormat::Image => lutconv_io::strip::write(path, grid, image_size)
            .with_context(|| format!("failed to write {}", path.display())),
        LutFormat::Unknown => {
            bail!("unsupported output format: {} (use .cube or .png)", path.display())
        }
    }
}

/// Unpacks a three-value size argument into a dimension triple.
pub fn dims3(v: &[usize]) -> (usize, usize, usize) {
    (v[0], v[1], v[2])
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
