// src/color/samples.rs
// Turn scraped material into colour samples: inline kit swatches from
// markup and pixels from logo images.

use log::debug;

use super::{ColorSample, Rgb};
use crate::config::consts::BACKGROUND_COLOR;
use crate::core::html::declaration_values;
use crate::error::Result;

/// Every `background-color: #rrggbb` in the fragment, as kit samples.
/// Named or short-form values are skipped.
pub fn samples_from_styles(fragment: &str) -> Vec<ColorSample> {
    declaration_values(fragment, BACKGROUND_COLOR)
        .into_iter()
        .filter(|v| v.len() == 7 && v.starts_with('#'))
        .filter_map(|v| match Rgb::from_hex(&v) {
            Ok(rgb) => Some(ColorSample::kit(rgb)),
            Err(e) => {
                debug!("samples_from_styles: skipping {v}: {e}");
                None
            }
        })
        .collect()
}

/// One logo sample per pixel of an encoded image (PNG or JPEG). Fully
/// transparent pixels carry no colour and are dropped.
pub fn samples_from_image(bytes: &[u8]) -> Result<Vec<ColorSample>> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (w, h) = img.dimensions();
    debug!("samples_from_image: {w}x{h}");

    Ok(img
        .pixels()
        .filter(|p| p.0[3] != 0)
        .map(|p| ColorSample::logo(Rgb::new(p.0[0], p.0[1], p.0[2])))
        .collect())
}
