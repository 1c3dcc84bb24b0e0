//! Container detection from file extensions.

use std::path::Path;

/// Supported LUT container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutFormat {
    /// `.cube` text file.
    Cube,
    /// PNG strip image.
    Image,
    /// Unknown/unsupported container.
    Unknown,
}

impl LutFormat {
    /// Detects the container from a file extension (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("cube") => LutFormat::Cube,
            Some("png") => LutFormat::Image,
            _ => LutFormat::Unknown,
        }
    }

    /// Returns the typical file extension for this container.
    pub fn extension(&self) -> &'static str {
        match self {
            LutFormat::Cube => "cube",
            LutFormat::Image => "png",
            LutFormat::Unknown => "",
        }
    }
}
