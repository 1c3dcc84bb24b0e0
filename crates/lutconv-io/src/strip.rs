//! PNG strip-image transport.
//!
//! Decodes PNG files into the RGBA8 canvas the strip codec consumes and
//! encodes grids back out as RGBA8 PNGs. 8-bit grayscale,
//! grayscale+alpha, RGB and RGBA inputs are expanded to RGBA (palette
//! files arrive pre-expanded by the decoder); 16-bit files are
//! rejected.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use lutconv_core::{LutGrid, StripLayout, decode_strip, encode_strip};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Reads a PNG strip image and unpacks it into a [`LutGrid`].
///
/// With `dims` the canvas is interpreted as a `(width, height, depth)`
/// grid; without, the canvas must be one of the conventional sizes
/// recognized by [`StripLayout::infer`] (64x64 or 512x512).
///
/// # Example
///
/// ```rust,no_run
/// use lutconv_io::strip;
///
/// // A 512x512 strip is recognized as a 64^3 LUT.
/// let lut = strip::read("grade.png", None).unwrap();
/// assert_eq!(lut.dimensions(), (64, 64, 64));
/// ```
pub fn read<P: AsRef<Path>>(path: P, dims: Option<(usize, usize, usize)>) -> IoResult<LutGrid> {
    let (pixels, image_width, image_height) = read_rgba8(path.as_ref())?;

    let layout = match dims {
        Some((width, height, depth)) => {
            StripLayout::new(image_width, image_height, width, height, depth)
        }
        None => StripLayout::infer(image_width, image_height).ok_or(IoError::UnknownLayout {
            image_width,
            image_height,
        })?,
    };

    let grid = decode_strip(&pixels, &layout)?;
    debug!(
        path = %path.as_ref().display(),
        image_width,
        image_height,
        "read strip LUT"
    );
    Ok(grid)
}

/// Packs a [`LutGrid`] and writes it as an RGBA8 PNG.
///
/// With `image_size` the canvas is forced to `(width, height)` pixels;
/// without, [`StripLayout::for_grid`] picks it (64x64 for a 16^3 grid,
/// 512x512 for 64^3, square-ish tiling otherwise).
pub fn write<P: AsRef<Path>>(
    path: P,
    grid: &LutGrid,
    image_size: Option<(usize, usize)>,
) -> IoResult<()> {
    let layout = match image_size {
        Some((image_width, image_height)) => {
            let (width, height, depth) = grid.dimensions();
            StripLayout::new(image_width, image_height, width, height, depth)
        }
        None => StripLayout::for_grid(grid),
    };

    let pixels = encode_strip(grid, &layout)?;
    write_rgba8(
        path.as_ref(),
        &pixels,
        layout.image_width,
        layout.image_height,
    )?;
    debug!(
        path = %path.as_ref().display(),
        image_width = layout.image_width,
        image_height = layout.image_height,
        "wrote strip LUT"
    );
    Ok(())
}

/// Decodes a PNG file to a tightly packed RGBA8 buffer.
fn read_rgba8(path: &Path) -> IoResult<(Vec<u8>, usize, usize)> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let raw = &buf[..info.buffer_size()];
    let pixels = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => raw.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => raw
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            raw.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => raw
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{color_type:?} {bit_depth:?}"
            )));
        }
    };

    Ok((pixels, info.width as usize, info.height as usize))
}

/// Encodes a tightly packed RGBA8 buffer as a PNG file.
fn write_rgba8(path: &Path, pixels: &[u8], width: usize, height: usize) -> IoResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(pixels)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
