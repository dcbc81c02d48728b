//! PNG slice export command.

use crate::SliceArgs;
use anyhow::{Context, Result};
use blammo_core::Channel;

pub fn run(args: SliceArgs, verbose: u8) -> Result<()> {
    let volume = super::load_volume(&args.input)?;

    let written = match args.channel.map(Channel::from) {
        Some(channel) => blammo_io::png::write_channel(&args.output, &volume, args.layer, channel),
        None => blammo_io::png::write_layer(&args.output, &volume, args.layer),
    };
    written.with_context(|| format!("Failed to write: {}", args.output.display()))?;

    if verbose > 0 {
        println!("Layer {} of {} -> {}", args.layer, args.input.display(), args.output.display());
    }
    Ok(())
}
