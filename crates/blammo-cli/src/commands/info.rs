//! Raw volume info command.
//!
//! Prints the edge length, file size and min/max/mean of every channel.

use crate::InfoArgs;
use anyhow::Result;
use blammo_core::{Channel, NoiseVolume};

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let volume = super::load_volume(&args.input)?;

    println!("{}", args.input.display());
    println!("  Size:       {}^3", volume.size());
    println!("  Texels:     {}", volume.texel_count());
    println!("  File size:  {}", super::format_size(volume.len() as u64));
    for line in channel_lines(&volume) {
        println!("  {}", line);
    }

    if verbose > 0 {
        println!("  Origin:     {:?}", volume.texel(0, 0, 0)?);
    }
    Ok(())
}

fn channel_lines(volume: &NoiseVolume) -> Vec<String> {
    Channel::ALL
        .iter()
        .map(|&ch| {
            let s = volume.channel_stats(ch);
            format!("{}: min {:3}  max {:3}  mean {:7.3}", ch, s.min, s.max, s.mean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_lines() {
        let mut v = NoiseVolume::new(2).unwrap();
        v.set_channel(1, 1, 1, Channel::B, 80).unwrap();
        let lines = channel_lines(&v);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("max  80"));
        assert!(lines[2].contains("mean  10.000"));
    }
}
