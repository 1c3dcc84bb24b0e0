//! Tiled strip-image codec.
//!
//! A 3D LUT packs into a 2D RGBA8 image by slicing it along the blue
//! axis: each depth slice is a `width` x `height` tile, and tiles lay
//! out left-to-right, top-to-bottom on the canvas. The conventional
//! presets are a 16^3 LUT in a 64x64 image (4x4 tiles) and a 64^3 LUT
//! in a 512x512 image (8x8 tiles).
//!
//! Channel values map linearly between `f32` and 8 bits: `v / 255.0` on
//! decode, `round(clamp(v * 255))` on encode. Alpha is written opaque
//! and ignored on decode.

use crate::error::{LutError, LutResult};
use crate::grid::LutGrid;

/// Tiling descriptor binding a pixel canvas to grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    /// Canvas width in pixels.
    pub image_width: usize,
    /// Canvas height in pixels.
    pub image_height: usize,
    /// Grid width (tile width in pixels).
    pub width: usize,
    /// Grid height (tile height in pixels).
    pub height: usize,
    /// Grid depth (number of tiles).
    pub depth: usize,
}

impl StripLayout {
    /// Creates a layout. The codecs [`validate`](Self::validate) it
    /// before use.
    pub fn new(
        image_width: usize,
        image_height: usize,
        width: usize,
        height: usize,
        depth: usize,
    ) -> Self {
        Self {
            image_width,
            image_height,
            width,
            height,
            depth,
        }
    }

    /// Recognizes the two conventional square canvases: 64x64 holds a
    /// 16^3 LUT, 512x512 holds a 64^3 LUT. Anything else is `None` and
    /// needs explicit grid dimensions.
    pub fn infer(image_width: usize, image_height: usize) -> Option<Self> {
        match (image_width, image_height) {
            (64, 64) => Some(Self::new(64, 64, 16, 16, 16)),
            (512, 512) => Some(Self::new(512, 512, 64, 64, 64)),
            _ => None,
        }
    }

    /// Derives a canvas for a grid: `ceil(sqrt(depth))` tiles per row
    /// and just enough rows below. Reproduces the conventional canvases
    /// for 16^3 and 64^3 grids.
    pub fn for_grid(grid: &LutGrid) -> Self {
        let (width, height, depth) = grid.dimensions();
        let mut per_row = depth.isqrt();
        if per_row * per_row < depth {
            per_row += 1;
        }
        let rows = depth.div_ceil(per_row);
        Self::new(per_row * width, rows * height, width, height, depth)
    }

    /// Tiles per canvas row.
    #[inline]
    pub fn tiles_per_row(&self) -> usize {
        self.image_width / self.width
    }

    /// Pixel origin of the tile holding depth slice `z`.
    #[inline]
    pub fn tile_origin(&self, z: usize) -> (usize, usize) {
        let per_row = self.tiles_per_row();
        ((z % per_row) * self.width, (z / per_row) * self.height)
    }

    /// Checks that the canvas tiles evenly and can hold all `depth`
    /// slices.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidImageDimensions`] on a zero dimension, uneven
    /// tiling, or a canvas with fewer than `depth` tile slots.
    pub fn validate(&self) -> LutResult<()> {
        if self.width == 0
            || self.height == 0
            || self.depth == 0
            || self.image_width == 0
            || self.image_height == 0
        {
            return Err(LutError::InvalidImageDimensions(format!(
                "layout has a zero dimension: {}x{} canvas, {}x{}x{} grid",
                self.image_width, self.image_height, self.width, self.height, self.depth
            )));
        }
        if self.image_width % self.width != 0 || self.image_height % self.height != 0 {
            return Err(LutError::InvalidImageDimensions(format!(
                "{}x{} canvas does not tile evenly into {}x{} slices",
                self.image_width, self.image_height, self.width, self.height
            )));
        }
        let slots = self.tiles_per_row() * (self.image_height / self.height);
        if slots < self.depth {
            return Err(LutError::InvalidImageDimensions(format!(
                "{}x{} canvas holds {slots} tiles, depth {} needs more",
                self.image_width, self.image_height, self.depth
            )));
        }
        Ok(())
    }
}

/// Unpacks a tiled RGBA8 pixel buffer into a [`LutGrid`].
///
/// `pixels` is tightly packed row-major RGBA8 of length
/// `image_width * image_height * 4`. Channel bytes divide by 255; alpha
/// is ignored.
///
/// # Errors
///
/// - [`LutError::InvalidImageDimensions`] if the layout does not
///   validate.
/// - [`LutError::SizeMismatch`] if the pixel buffer length is wrong.
pub fn decode(pixels: &[u8], layout: &StripLayout) -> LutResult<LutGrid> {
    layout.validate()?;
    let expected = layout.image_width * layout.image_height * 4;
    if pixels.len() != expected {
        return Err(LutError::SizeMismatch(format!(
            "pixel buffer holds {} bytes, a {}x{} RGBA canvas needs {expected}",
            pixels.len(),
            layout.image_width,
            layout.image_height
        )));
    }

    let mut grid = LutGrid::new(layout.width, layout.height, layout.depth);
    for z in 0..layout.depth {
        let (ox, oy) = layout.tile_origin(z);
        for y in 0..layout.height {
            for x in 0..layout.width {
                let i = ((oy + y) * layout.image_width + ox + x) * 4;
                grid.set(
                    x,
                    y,
                    z,
                    [
                        pixels[i] as f32 / 255.0,
                        pixels[i + 1] as f32 / 255.0,
                        pixels[i + 2] as f32 / 255.0,
                    ],
                );
            }
        }
    }
    Ok(grid)
}

/// Packs a [`LutGrid`] into a tiled RGBA8 pixel buffer.
///
/// Channels clamp to `[0, 1]`, scale by 255 and round; alpha is 255.
/// Canvas pixels not covered by any tile stay zero (transparent black).
///
/// # Errors
///
/// - [`LutError::InvalidImageDimensions`] if the layout does not
///   validate.
/// - [`LutError::SizeMismatch`] if the grid's dimensions differ from
///   the layout's. This codec never resizes; resampling first is the
///   caller's move.
pub fn encode(grid: &LutGrid, layout: &StripLayout) -> LutResult<Vec<u8>> {
    layout.validate()?;
    if grid.dimensions() != (layout.width, layout.height, layout.depth) {
        let (w, h, d) = grid.dimensions();
        return Err(LutError::SizeMismatch(format!(
            "grid is {w}x{h}x{d}, layout packs {}x{}x{}",
            layout.width, layout.height, layout.depth
        )));
    }

    let mut pixels = vec![0u8; layout.image_width * layout.image_height * 4];
    for z in 0..layout.depth {
        let (ox, oy) = layout.tile_origin(z);
        for y in 0..layout.height {
            for x in 0..layout.width {
                let v = grid.get(x, y, z);
                let i = ((oy + y) * layout.image_width + ox + x) * 4;
                pixels[i] = quantize(v[0]);
                pixels[i + 1] = quantize(v[1]);
                pixels[i + 2] = quantize(v[2]);
                pixels[i + 3] = 255;
            }
        }
    }
    Ok(pixels)
}

/// Maps a channel value to 8 bits: scale, round, clamp.
#[inline]
fn quantize(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_presets() {
        let small = StripLayout::infer(64, 64).unwrap();
        assert_eq!((small.width, small.height, small.depth), (16, 16, 16));
        let big = StripLayout::infer(512, 512).unwrap();
        assert_eq!((big.width, big.height, big.depth), (64, 64, 64));
        assert!(StripLayout::infer(64, 512).is_none());
        assert!(StripLayout::infer(100, 100).is_none());
    }

    #[test]
    fn test_for_grid_reproduces_presets() {
        let lut = LutGrid::new(16, 16, 16);
        assert_eq!(
            StripLayout::for_grid(&lut),
            StripLayout::infer(64, 64).unwrap()
        );
        let lut = LutGrid::new(64, 64, 64);
        assert_eq!(
            StripLayout::for_grid(&lut),
            StripLayout::infer(512, 512).unwrap()
        );
    }

    #[test]
    fn test_for_grid_partial_last_row() {
        // Depth 5 needs a 3x2 tile grid; the last slot stays empty.
        let lut = LutGrid::new(4, 4, 5);
        let layout = StripLayout::for_grid(&lut);
        assert_eq!((layout.image_width, layout.image_height), (12, 8));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_uneven_tiling() {
        let layout = StripLayout::new(65, 64, 16, 16, 16);
        assert!(matches!(
            layout.validate(),
            Err(LutError::InvalidImageDimensions(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_tiles() {
        // A 64x64 canvas of 16x16 tiles holds 16 slices, not 17.
        let layout = StripLayout::new(64, 64, 16, 16, 17);
        assert!(matches!(
            layout.validate(),
            Err(LutError::InvalidImageDimensions(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let layout = StripLayout::new(64, 64, 0, 16, 16);
        assert!(matches!(
            layout.validate(),
            Err(LutError::InvalidImageDimensions(_))
        ));
    }

    #[test]
    fn test_tile_origin_walks_rows() {
        let layout = StripLayout::new(64, 64, 16, 16, 16);
        assert_eq!(layout.tiles_per_row(), 4);
        assert_eq!(layout.tile_origin(0), (0, 0));
        assert_eq!(layout.tile_origin(3), (48, 0));
        assert_eq!(layout.tile_origin(4), (0, 16));
        assert_eq!(layout.tile_origin(15), (48, 48));
    }

    #[test]
    fn test_decode_reads_tiles() {
        // 2x1 tiles of 2x2 pixels in a 4x2 canvas; mark one pixel per
        // tile.
        let layout = StripLayout::new(4, 2, 2, 2, 2);
        let mut pixels = vec![0u8; 4 * 2 * 4];
        // Cell (1, 0, 0) reads pixel (1, 0).
        pixels[4] = 255;
        // Cell (0, 1, 1): tile origin (2, 0), pixel (2, 1), green byte.
        pixels[(4 + 2) * 4 + 1] = 51;
        let lut = decode(&pixels, &layout).unwrap();
        assert_eq!(*lut.get(1, 0, 0), [1.0, 0.0, 0.0]);
        let v = lut.get(0, 1, 1);
        assert!((v[1] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_decode_rejects_short_buffer() {
        let layout = StripLayout::new(4, 2, 2, 2, 2);
        assert!(matches!(
            decode(&[0u8; 10], &layout),
            Err(LutError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_encode_marks_alpha_opaque() {
        let lut = LutGrid::identity(2, 2, 2);
        let layout = StripLayout::for_grid(&lut);
        let pixels = encode(&lut, &layout).unwrap();
        assert_eq!(pixels.len(), layout.image_width * layout.image_height * 4);
        for px in pixels.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_encode_leaves_uncovered_pixels_zero() {
        let lut = LutGrid::identity(2, 2, 3);
        let layout = StripLayout::for_grid(&lut);
        assert_eq!((layout.image_width, layout.image_height), (4, 4));
        let pixels = encode(&lut, &layout).unwrap();
        // Tile slot 3 (origin (2, 2)) has no slice: stays transparent.
        let i = (2 * 4 + 2) * 4;
        assert_eq!(&pixels[i..i + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_clamps_out_of_range() {
        let mut lut = LutGrid::new(2, 2, 2);
        lut.set(0, 0, 0, [-0.5, 1.5, 0.5]);
        let layout = StripLayout::for_grid(&lut);
        let pixels = encode(&lut, &layout).unwrap();
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[1], 255);
        assert_eq!(pixels[2], 128);
    }

    #[test]
    fn test_encode_rejects_mismatched_grid() {
        let lut = LutGrid::new(8, 8, 8);
        let layout = StripLayout::new(64, 64, 16, 16, 16);
        assert!(matches!(
            encode(&lut, &layout),
            Err(LutError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_round_trip_exact_on_8bit_lattice() {
        // Channel values on the 1/255 lattice survive exactly.
        let mut lut = LutGrid::new(2, 2, 2);
        let mut k = 0u32;
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    lut.set(
                        x,
                        y,
                        z,
                        [
                            (k % 256) as f32 / 255.0,
                            ((k * 37) % 256) as f32 / 255.0,
                            ((k * 91) % 256) as f32 / 255.0,
                        ],
                    );
                    k += 29;
                }
            }
        }
        let layout = StripLayout::for_grid(&lut);
        let back = decode(&encode(&lut, &layout).unwrap(), &layout).unwrap();
        assert_eq!(back, lut);
    }

    #[test]
    fn test_round_trip_arbitrary_within_half_step() {
        let lut = LutGrid::identity(16, 16, 16);
        let layout = StripLayout::for_grid(&lut);
        let back = decode(&encode(&lut, &layout).unwrap(), &layout).unwrap();
        for (a, b) in back.data().iter().zip(lut.data().iter()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() <= 1.0 / 255.0);
            }
        }
    }
}
