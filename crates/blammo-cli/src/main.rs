//! blammo - bake, sample and inspect Perlin noise volumes

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use blammo_core::Channel;

mod commands;

#[derive(Parser)]
#[command(name = "blammo")]
#[command(author, version, about = "Perlin noise volume baker")]
#[command(long_about = "
Bakes tileable four-octave Perlin noise into raw RGBA volume textures,
samples single noise values and inspects baked volumes.

Examples:
  blammo volume -o noise.raw                  # 64^3 volume, random seed
  blammo volume -o noise.raw -s 128 --seed 7  # reproducible 128^3 volume
  blammo volume -o noise.raw -c noise.yaml    # settings from YAML
  blammo sample 0.5 1.25 2.0 --seed 1         # one 3D sample
  blammo fractal 0.5 1.25 --octaves 6         # 2D fractal sum
  blammo info noise.raw                       # per-channel statistics
  blammo slice noise.raw -o layer.png -l 10 --channel r
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake a noise volume to a raw RGBA file
    #[command(visible_alias = "v")]
    Volume(VolumeArgs),

    /// Sample 2D or 3D noise at a point
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Fractal sum of 2D or 3D noise at a point
    #[command(visible_alias = "f")]
    Fractal(FractalArgs),

    /// Show size and channel statistics of a raw volume
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Export one layer of a raw volume as PNG
    Slice(SliceArgs),
}

#[derive(Args)]
struct VolumeArgs {
    /// Output raw file
    #[arg(short, long)]
    output: PathBuf,

    /// Edge length in texels (overrides config)
    #[arg(short, long)]
    size: Option<usize>,

    /// RNG seed (overrides config; random if unset)
    #[arg(long)]
    seed: Option<u64>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the classic biased permutation shuffle
    #[arg(long)]
    classic: bool,

    /// Also write this layer as PNG next to the output
    #[arg(long)]
    png_layer: Option<usize>,
}

#[derive(Args)]
struct SampleArgs {
    /// X coordinate
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Y coordinate
    #[arg(allow_negative_numbers = true)]
    y: f64,

    /// Z coordinate (3D noise when given)
    #[arg(allow_negative_numbers = true)]
    z: Option<f64>,

    /// RNG seed (random if unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Table size, 1..=65536; the noise repeats every `frequency` units
    #[arg(short, long, default_value = "256")]
    frequency: u32,
}

#[derive(Args)]
struct FractalArgs {
    /// X coordinate
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Y coordinate
    #[arg(allow_negative_numbers = true)]
    y: f64,

    /// Z coordinate (3D noise when given)
    #[arg(allow_negative_numbers = true)]
    z: Option<f64>,

    /// RNG seed (random if unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Weight divisor per octave
    #[arg(short, long, default_value = "2.0")]
    alpha: f64,

    /// Coordinate multiplier per octave
    #[arg(short, long, default_value = "2.0")]
    beta: f64,

    /// Number of octaves
    #[arg(short = 'n', long, default_value = "4")]
    octaves: u32,
}

#[derive(Args)]
struct InfoArgs {
    /// Raw volume file
    input: PathBuf,
}

#[derive(Args)]
struct SliceArgs {
    /// Raw volume file
    input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Layer index along the first axis
    #[arg(short, long, default_value = "0")]
    layer: usize,

    /// Single channel as greyscale (RGBA if omitted)
    #[arg(long, value_enum)]
    channel: Option<ChannelArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChannelArg {
    R,
    G,
    B,
    A,
}

impl From<ChannelArg> for Channel {
    fn from(c: ChannelArg) -> Self {
        match c {
            ChannelArg::R => Channel::R,
            ChannelArg::G => Channel::G,
            ChannelArg::B => Channel::B,
            ChannelArg::A => Channel::A,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Volume(args) => commands::volume::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Fractal(args) => commands::fractal::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Slice(args) => commands::slice::run(args, cli.verbose),
    }
}
