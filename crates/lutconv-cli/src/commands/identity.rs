//! Identity LUT generation command.
//!
//! Writes the neutral LUT every grade starts from: cell `(x, y, z)`
//! holds its own normalized position.

use anyhow::{Result, bail};
use lutconv_core::LutGrid;
use tracing::{info, trace};

use crate::IdentityArgs;

/// Runs the identity command.
pub fn run(args: IdentityArgs, verbose: bool) -> Result<()> {
    trace!(size = args.size, output = %args.output.display(), "identity::run");

    if args.size == 0 {
        bail!("identity size must be at least 1");
    }

    info!(size = args.size, output = %args.output.display(), "generating identity LUT");
    if verbose {
        println!(
            "Generating {0}x{0}x{0} identity -> {1}",
            args.size,
            args.output.display()
        );
    }

    let lut = LutGrid::identity(args.size, args.size, args.size);
    super::save_lut(&args.output, &lut, &args.title, None)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
