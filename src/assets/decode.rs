use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{CardflowError, CardflowResult};

/// Largest edge, in pixels, an SVG card is rasterized at.
pub const MAX_SVG_SIDE: u32 = 4096;

/// Decode encoded image bytes (PNG, JPEG, ...) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> CardflowResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(CardflowError::asset("decoded image is empty"));
    }
    Ok(rgba)
}

/// Parse SVG bytes and rasterize them so that the longer edge is `max_side` pixels.
pub fn rasterize_svg(bytes: &[u8], max_side: u32) -> CardflowResult<RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    let (sw, sh) = (size.width(), size.height());
    if !(sw.is_finite() && sh.is_finite()) || sw <= 0.0 || sh <= 0.0 {
        return Err(CardflowError::asset("svg has invalid width/height"));
    }
    let max_side = max_side.clamp(1, MAX_SVG_SIDE) as f32;
    let scale = max_side / sw.max(sh);
    let width = ((sw * scale).round() as u32).max(1);
    let height = ((sh * scale).round() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CardflowError::asset("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        width as f32 / sw,
        height as f32 / sh,
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    // tiny-skia keeps premultiplied pixels; cards work on straight alpha.
    let straight: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| CardflowError::asset("svg raster has unexpected size"))
}

/// Read a card image from disk; `.svg` files are rasterized at `svg_side` pixels.
pub fn load_image_file(path: &Path, svg_side: u32) -> CardflowResult<RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        rasterize_svg(&bytes, svg_side)
    } else {
        decode_image(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
