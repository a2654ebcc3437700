//! Point cloud dump commands

use anyhow::{Context, Result};
use chroma_geom::{ConeDims, ConeSampler, CubeSampler, SamplePoint};
use tracing::debug;

use crate::{ConeArgs, CubeArgs};

pub fn run_cube(args: CubeArgs) -> Result<()> {
    let sampler = CubeSampler::new(args.steps).context("invalid cube sampler parameters")?;
    emit(&sampler.points(), args.count)
}

pub fn run_cone(args: ConeArgs) -> Result<()> {
    let dims = ConeDims { radius: args.radius, height: args.height };
    let sampler = ConeSampler::new(dims, args.rings, args.segments, args.grid_size)
        .context("invalid cone sampler parameters")?
        .with_interior(!args.sparse);
    emit(&sampler.points(), args.count)
}

/// Print either the bare count or the full cloud as JSON.
fn emit(points: &[SamplePoint], count_only: bool) -> Result<()> {
    debug!(count = points.len(), "emitting sample cloud");
    if count_only {
        println!("{}", points.len());
        return Ok(());
    }
    serde_json::to_writer(std::io::stdout().lock(), points)
        .context("failed to serialize sample cloud")?;
    println!();
    Ok(())
}
