//! 3D LUT grid storage and sampling.

use crate::error::{LutError, LutResult};
use crate::filter::FilterMode;

/// A dense 3D lookup table of RGB triples.
///
/// Samples live in a flat buffer with x varying fastest, then y, then z:
/// cell `(x, y, z)` sits at index `(z * height + y) * width + x`. This is
/// the row order of the `.cube` text format, so the codecs map rows
/// straight onto the buffer without reordering.
///
/// Values are plain `f32` and are not constrained to `[0, 1]`; the strip
/// image codec clamps on encode, everything else passes values through.
///
/// # Example
///
/// ```rust
/// use lutconv_core::{FilterMode, LutGrid};
///
/// let lut = LutGrid::identity(16, 16, 16);
/// let out = lut.lookup(0.5, 0.25, 0.75, FilterMode::Linear);
/// assert!((out[0] - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutGrid {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<[f32; 3]>,
}

impl LutGrid {
    /// Creates a zero-filled grid.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        assert!(
            width > 0 && height > 0 && depth > 0,
            "LUT grid dimensions must be nonzero (got {width}x{height}x{depth})"
        );
        Self {
            width,
            height,
            depth,
            data: vec![[0.0; 3]; width * height * depth],
        }
    }

    /// Creates a grid from an existing sample buffer.
    ///
    /// `data` holds one RGB triple per cell in x-fastest order; its length
    /// must equal `width * height * depth`.
    ///
    /// # Errors
    ///
    /// [`LutError::SizeMismatch`] if the buffer length disagrees with the
    /// dimensions.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn from_data(
        width: usize,
        height: usize,
        depth: usize,
        data: Vec<[f32; 3]>,
    ) -> LutResult<Self> {
        assert!(
            width > 0 && height > 0 && depth > 0,
            "LUT grid dimensions must be nonzero (got {width}x{height}x{depth})"
        );
        let expected = width * height * depth;
        if data.len() != expected {
            return Err(LutError::SizeMismatch(format!(
                "buffer holds {} triples, a {width}x{height}x{depth} grid needs {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            depth,
            data,
        })
    }

    /// Creates the identity LUT: each cell maps to its own normalized
    /// position, `i / (n - 1)` per axis (0.0 on an axis with a single
    /// node).
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn identity(width: usize, height: usize, depth: usize) -> Self {
        let mut grid = Self::new(width, height, depth);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    grid.set(x, y, z, [node(x, width), node(y, height), node(z, depth)]);
                }
            }
        }
        grid
    }

    /// Grid width (x axis, addressed by red).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (y axis, addressed by green).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid depth (z axis, addressed by blue).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Grid dimensions as `(width, height, depth)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Number of cells (`width * height * depth`).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    /// Read-only view of the sample buffer, one triple per cell in
    /// x-fastest order.
    #[inline]
    pub fn data(&self) -> &[[f32; 3]] {
        &self.data
    }

    /// Flat buffer index of cell `(x, y, z)`.
    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }

    /// Returns the RGB triple at cell `(x, y, z)`.
    ///
    /// Bounds are the caller's contract: every sampling path clamps its
    /// coordinates before reading. An out-of-range cell is a programming
    /// error and panics.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> &[f32; 3] {
        &self.data[self.index(x, y, z)]
    }

    /// Overwrites the RGB triple at cell `(x, y, z)`.
    ///
    /// Same bounds contract as [`get`](Self::get). This is the only
    /// mutation path.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: [f32; 3]) {
        let i = self.index(x, y, z);
        self.data[i] = value;
    }

    /// Samples the LUT at normalized coordinates with the given mode.
    ///
    /// `(r, g, b)` address the x/y/z axes and are nominally in `[0, 1]`;
    /// coordinates outside that range clamp to the boundary cells.
    pub fn lookup(&self, r: f32, g: f32, b: f32, mode: FilterMode) -> [f32; 3] {
        match mode {
            FilterMode::Nearest => self.lookup_nearest(r, g, b),
            FilterMode::Linear => self.lookup_linear(r, g, b),
        }
    }

    /// Samples the nearest grid cell.
    ///
    /// Coordinates map to cell space as `r * width - 0.5` (cell centers,
    /// not node positions), round to the nearest cell and clamp each axis
    /// to its own range.
    pub fn lookup_nearest(&self, r: f32, g: f32, b: f32) -> [f32; 3] {
        let fx = r * self.width as f32 - 0.5;
        let fy = g * self.height as f32 - 0.5;
        let fz = b * self.depth as f32 - 0.5;

        let x = clamp_cell(fx.round(), self.width);
        let y = clamp_cell(fy.round(), self.height);
        let z = clamp_cell(fz.round(), self.depth);

        *self.get(x, y, z)
    }

    /// Samples with trilinear interpolation.
    ///
    /// Blends the eight cells surrounding the sample point per channel.
    /// The fractional weights are not clamped to `[0, 1]`: at the extreme
    /// low boundary `dx` (and `dy`, `dz`) dips below zero, so the result
    /// extrapolates slightly past the corner cell instead of flattening.
    pub fn lookup_linear(&self, r: f32, g: f32, b: f32) -> [f32; 3] {
        let fx = r * self.width as f32 - 0.5;
        let fy = g * self.height as f32 - 0.5;
        let fz = b * self.depth as f32 - 0.5;

        let x0 = clamp_cell(fx.floor(), self.width);
        let y0 = clamp_cell(fy.floor(), self.height);
        let z0 = clamp_cell(fz.floor(), self.depth);
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let z1 = (z0 + 1).min(self.depth - 1);

        let dx = fx - x0 as f32;
        let dy = fy - y0 as f32;
        let dz = fz - z0 as f32;

        let v000 = self.get(x0, y0, z0);
        let v100 = self.get(x1, y0, z0);
        let v010 = self.get(x0, y1, z0);
        let v110 = self.get(x1, y1, z0);
        let v001 = self.get(x0, y0, z1);
        let v101 = self.get(x1, y0, z1);
        let v011 = self.get(x0, y1, z1);
        let v111 = self.get(x1, y1, z1);

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let near = lerp(lerp(v000[c], v100[c], dx), lerp(v010[c], v110[c], dx), dy);
            let far = lerp(lerp(v001[c], v101[c], dx), lerp(v011[c], v111[c], dx), dy);
            out[c] = lerp(near, far, dz);
        }
        out
    }

    /// Resamples into a new grid of the given dimensions.
    ///
    /// Every target cell samples the source at its own cell center,
    /// `(x + 0.5) / width` per axis, so resizing a grid to its own
    /// dimensions reproduces it. The source grid is untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutconv_core::{FilterMode, LutGrid};
    ///
    /// let small = LutGrid::identity(16, 16, 16);
    /// let big = small.resize(64, 64, 64, FilterMode::Linear);
    /// assert_eq!(big.dimensions(), (64, 64, 64));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if any target dimension is zero.
    pub fn resize(&self, width: usize, height: usize, depth: usize, mode: FilterMode) -> LutGrid {
        let mut out = LutGrid::new(width, height, depth);
        for z in 0..depth {
            let b = (z as f32 + 0.5) / depth as f32;
            for y in 0..height {
                let g = (y as f32 + 0.5) / height as f32;
                for x in 0..width {
                    let r = (x as f32 + 0.5) / width as f32;
                    out.set(x, y, z, self.lookup(r, g, b, mode));
                }
            }
        }
        out
    }
}

/// Identity node value for index `i` on an axis with `n` nodes.
#[inline]
fn node(i: usize, n: usize) -> f32 {
    if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 }
}

/// Linear interpolation `a + t * (b - a)`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Clamps a fractional cell coordinate to a valid index on an axis with
/// `n` cells.
#[inline]
fn clamp_cell(v: f32, n: usize) -> usize {
    v.clamp(0.0, (n - 1) as f32) as usize
}
