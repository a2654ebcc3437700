//! Edit replay command
//!
//! Drives a `SyncController` exactly like the UI collaborators do: one
//! synchronous edit at a time, in the order given, printing the full
//! projected output of each as a JSON line.

use anyhow::{bail, Context, Result};
use chroma_core::EditSource;
use chroma_geom::{ConeDims, DiscLayout};
use chroma_sync::SyncController;
use tracing::debug;

use crate::EditArgs;

pub fn run(args: EditArgs) -> Result<()> {
    let cone = ConeDims { radius: args.cone_radius, height: args.cone_height };
    let disc = DiscLayout {
        center: super::parse_pair(&args.disc_center).context("invalid --disc-center")?,
        radius: args.disc_radius,
    };
    let mut sync = SyncController::new(cone, disc, args.bar_width);

    for edit in &args.edits {
        let (source, values) = parse_edit(edit)?;
        debug!(%source, ?values, "replaying edit");
        let out = sync
            .apply_edit(source, values)
            .with_context(|| format!("edit {edit:?} rejected"))?;
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// Parse one `rgb:R,G,B` / `hsv:H,S,V` edit argument.
fn parse_edit(s: &str) -> Result<(EditSource, [f32; 3])> {
    let Some((kind, triple)) = s.split_once(':') else {
        bail!("edit {s:?} must look like rgb:R,G,B or hsv:H,S,V");
    };
    let source = match kind {
        "rgb" => EditSource::Rgb,
        "hsv" => EditSource::Hsv,
        other => bail!("unknown edit source {other:?}, expected rgb or hsv"),
    };
    Ok((source, super::parse_triple(triple)?))
}
