//! CLI command implementations

pub mod convert;
pub mod edit;
pub mod sample;

use anyhow::{bail, Context, Result};

/// Parse a comma-separated float triple like `0.2,0.4,0.8`.
pub fn parse_triple(s: &str) -> Result<[f32; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected three comma-separated values, got {:?}", s);
    }
    let mut out = [0.0_f32; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("invalid number {part:?} in {s:?}"))?;
    }
    Ok(out)
}

/// Parse a comma-separated 2D point like `150,150`.
pub fn parse_pair(s: &str) -> Result<glam::Vec2> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        bail!("expected two comma-separated values, got {:?}", s);
    }
    let x = parts[0]
        .parse()
        .with_context(|| format!("invalid number {:?} in {s:?}", parts[0]))?;
    let y = parts[1]
        .parse()
        .with_context(|| format!("invalid number {:?} in {s:?}", parts[1]))?;
    Ok(glam::Vec2::new(x, y))
}
