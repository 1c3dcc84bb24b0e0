//! Filter modes for LUT sampling.

use std::fmt;
use std::str::FromStr;

use crate::error::LutError;

/// Filter mode for continuous LUT lookups.
///
/// `Linear` is the default: it is what grading tools expect when applying
/// a LUT, and what the resize path uses unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Nearest neighbor (snap to the closest grid cell).
    Nearest,
    /// Trilinear interpolation across the eight surrounding cells.
    #[default]
    Linear,
}

impl FilterMode {
    /// Canonical lowercase name, matching what [`FromStr`] accepts.
    pub fn name(&self) -> &'static str {
        match self {
            FilterMode::Nearest => "nearest",
            FilterMode::Linear => "linear",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterMode {
    type Err = LutError;

    /// Parses `"nearest"` or `"linear"`; anything else is
    /// [`LutError::InvalidFilterMode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(FilterMode::Nearest),
            "linear" => Ok(FilterMode::Linear),
            _ => Err(LutError::InvalidFilterMode(s.to_string())),
        }
    }
}
