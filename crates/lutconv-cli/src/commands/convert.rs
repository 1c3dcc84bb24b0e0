//! LUT conversion command.
//!
//! Reads either container, resamples when the target dimensions differ
//! from the source and writes the container named by the output
//! extension.

use anyhow::{Result, bail};
use lutconv_core::FilterMode;
use tracing::{debug, info, trace};

use crate::ConvertArgs;

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "convert::run");

    let mode: FilterMode = args.mode.to_lowercase().parse()?;
    let input_dims = args.input_size.as_deref().map(super::dims3);
    let lut = super::load_lut(&args.input, input_dims)?;

    let source = lut.dimensions();
    let target = args.size.as_deref().map(super::dims3).unwrap_or(source);
    let (tw, th, td) = target;
    if tw == 0 || th == 0 || td == 0 {
        bail!("target dimensions must be nonzero, got {tw}x{th}x{td}");
    }

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        ?source,
        ?target,
        %mode,
        "converting LUT"
    );
    if verbose {
        let (w, h, d) = source;
        println!(
            "Converting {} ({}x{}x{}) -> {}",
            args.input.display(),
            w,
            h,
            d,
            args.output.display()
        );
    }

    // Resample only when the size actually changes.
    let lut = if target != source {
        debug!(?source, ?target, %mode, "resampling");
        if verbose {
            println!("  Resampling to {}x{}x{} ({})", tw, th, td, mode);
        }
        lut.resize(tw, th, td, mode)
    } else {
        lut
    };

    let image_size = args.image_size.as_deref().map(|v| (v[0], v[1]));
    super::save_lut(&args.output, &lut, &args.title, image_size)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
