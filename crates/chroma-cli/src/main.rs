//! chromascope - RGB/HSV color space visualizer core, on the command line
//!
//! Converts colors, dumps the static reference point clouds, and
//! replays edit sequences the way the UI collaborators drive the core.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chromascope")]
#[command(author, version, about = "RGB/HSV color visualizer core CLI")]
#[command(long_about = "
The conversion and projection core of the chromascope visualizer,
exposed for inspection and for driving external renderers.

Examples:
  chromascope convert --rgb 0.2,0.4,0.8        # Show both representations
  chromascope convert --hsv 120,50,75 --json
  chromascope sample cube --steps 11           # Dump the cube cloud as JSON
  chromascope sample cone --count              # Just the point count
  chromascope sample cone --sparse             # Boundary rings only
  chromascope edit rgb:1,0,0 hsv:240,100,100   # Replay edits in order
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level tracing on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between RGB and HSV
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Emit a reference point cloud
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Replay a sequence of edits through the sync controller
    #[command(visible_alias = "e")]
    Edit(EditArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// RGB channels in [0,1], comma separated
    #[arg(long, value_name = "R,G,B", conflicts_with = "hsv", required_unless_present = "hsv")]
    rgb: Option<String>,

    /// Hue (degrees), saturation and value (percent), comma separated
    #[arg(long, value_name = "H,S,V")]
    hsv: Option<String>,

    /// Print as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SampleArgs {
    #[command(subcommand)]
    solid: SampleSolid,
}

#[derive(Subcommand)]
enum SampleSolid {
    /// Uniform grid over the RGB unit cube
    Cube(CubeArgs),

    /// Ring/interior cloud over the HSV cone
    Cone(ConeArgs),
}

#[derive(Args)]
struct CubeArgs {
    /// Grid nodes per axis (endpoints inclusive)
    #[arg(long, default_value = "11")]
    steps: u32,

    /// Print only the point count
    #[arg(long)]
    count: bool,
}

#[derive(Args)]
struct ConeArgs {
    /// Number of rings between apex and rim
    #[arg(long, default_value = "10")]
    rings: u32,

    /// Angular segments per ring
    #[arg(long, default_value = "32")]
    segments: u32,

    /// Interior fill grid density per ring
    #[arg(long, default_value = "8")]
    grid_size: u32,

    /// Cone radius at the top rim
    #[arg(long, default_value = "0.5")]
    radius: f32,

    /// Cone height
    #[arg(long, default_value = "1.0")]
    height: f32,

    /// Skip the interior fill (boundary rings only)
    #[arg(long)]
    sparse: bool,

    /// Print only the point count
    #[arg(long)]
    count: bool,
}

#[derive(Args)]
struct EditArgs {
    /// Edits applied in order, each `rgb:R,G,B` or `hsv:H,S,V`
    #[arg(required = true, value_name = "EDIT")]
    edits: Vec<String>,

    /// Cone radius at the top rim
    #[arg(long, default_value = "0.5")]
    cone_radius: f32,

    /// Cone height
    #[arg(long, default_value = "1.0")]
    cone_height: f32,

    /// Disc center, comma separated canvas coordinates
    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    disc_center: String,

    /// Disc radius in canvas pixels
    #[arg(long, default_value = "100.0")]
    disc_radius: f32,

    /// Hue bar width in canvas pixels
    #[arg(long, default_value = "360.0")]
    bar_width: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Sample(args) => match args.solid {
            SampleSolid::Cube(args) => commands::sample::run_cube(args),
            SampleSolid::Cone(args) => commands::sample::run_cone(args),
        },
        Commands::Edit(args) => commands::edit::run(args),
    }
}
