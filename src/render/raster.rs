use crate::foundation::error::{HexlogoError, HexlogoResult};

// Upper bound on either raster dimension.
const MAX_DIM: u32 = 8_192;

/// Parse SVG markup with `usvg`. Animations are ignored, so the tree is the resting frame.
pub fn parse_svg(text: &str) -> HexlogoResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(text, &opts)
        .map_err(|e| HexlogoError::render(format!("svg parse failed: {e}")))
}

/// Rasterize `tree` at `scale` into straight-alpha RGBA8.
pub fn rasterize(tree: &usvg::Tree, scale: f32) -> HexlogoResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(HexlogoError::validation(format!(
            "raster scale must be finite and > 0 (got {scale})"
        )));
    }

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(HexlogoError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| HexlogoError::render("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| HexlogoError::render("pixmap size does not match image buffer"))
}

/// Parse and rasterize in one step.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn rasterize_svg(text: &str, scale: f32) -> HexlogoResult<image::RgbaImage> {
    let tree = parse_svg(text)?;
    let img = rasterize(&tree, scale)?;
    tracing::debug!(width = img.width(), height = img.height(), "rasterized");
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
