//! Color conversion command

use anyhow::{bail, Result};
use chroma_color::{hsv_to_rgb, rgb_to_hsv};
use chroma_core::{Hsv, Rgb};
use serde_json::json;
use tracing::debug;

use crate::ConvertArgs;

pub fn run(args: ConvertArgs) -> Result<()> {
    let (rgb, hsv) = match (&args.rgb, &args.hsv) {
        (Some(s), None) => {
            let rgb = Rgb::from_array(super::parse_triple(s)?);
            if !rgb.is_finite() {
                bail!("RGB input must be finite: {s:?}");
            }
            let rgb = rgb.clamp();
            (rgb, rgb_to_hsv(rgb))
        }
        (None, Some(s)) => {
            let hsv = Hsv::from_array(super::parse_triple(s)?);
            if !hsv.is_finite() {
                bail!("HSV input must be finite: {s:?}");
            }
            let hsv = hsv.normalize();
            (hsv_to_rgb(hsv), hsv)
        }
        // clap enforces exactly one of the two.
        _ => unreachable!("--rgb and --hsv are mutually exclusive and one is required"),
    };

    debug!(?rgb, ?hsv, "converted");

    if args.json {
        println!("{}", json!({ "rgb": rgb, "hsv": hsv }));
    } else {
        println!("RGB: {:.4}, {:.4}, {:.4}", rgb.r, rgb.g, rgb.b);
        println!("HSV: {:.1} deg, {:.1}%, {:.1}%", hsv.h, hsv.s, hsv.v);
    }
    Ok(())
}
