//! LUT info command.
//!
//! Displays the container format, grid dimensions, entry count and file
//! size; `--stats` adds value statistics over the whole buffer.

use std::fs;

use anyhow::Result;
use lutconv_core::StripLayout;
use lutconv_io::LutFormat;
use tracing::trace;

use crate::InfoArgs;

/// Runs the info command, displaying LUT metadata.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "info::run");

    let file_size = fs::metadata(&args.input)?.len();
    let format = LutFormat::from_extension(&args.input);
    let dims = args.input_size.as_deref().map(super::dims3);
    let lut = super::load_lut(&args.input, dims)?;

    let (w, h, d) = lut.dimensions();
    println!("{}", args.input.display());
    println!("  Format:     {:?}", format);
    println!("  Size:       {}x{}x{}", w, h, d);
    println!("  Entries:    {}", lut.entry_count());
    println!("  File size:  {}", super::format_size(file_size));

    if args.stats {
        let (min, max, mean) = compute_stats(lut.data());
        println!("  Min value:  {:.6}", min);
        println!("  Max value:  {:.6}", max);
        println!("  Mean value: {:.6}", mean);
    }

    if verbose {
        // The canvas a strip write would pick for this grid.
        let layout = StripLayout::for_grid(&lut);
        println!(
            "  Strip:      {}x{} canvas, {} tiles of {}x{}",
            layout.image_width, layout.image_height, layout.depth, layout.width, layout.height
        );
    }

    Ok(())
}

/// Min, max and mean over every channel value in the buffer.
fn compute_stats(data: &[[f32; 3]]) -> (f32, f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;

    for rgb in data {
        for &v in rgb {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
            sum += v as f64;
        }
    }

    (min, max, (sum / (data.len() * 3) as f64) as f32)
}
