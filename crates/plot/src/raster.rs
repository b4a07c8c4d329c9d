//! Raster back end: rasterizes the SVG drawing and encodes it as PNG or JPEG.

use std::io::Cursor;

use image::{DynamicImage, RgbImage, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};

use crate::document;
use crate::error::{RenderError, Result};

/// Rasterizes an SVG document at its own pixel size.
///
/// Documents are drawn over an opaque background, so the alpha channel is
/// dropped.
pub fn rasterize(svg: &str) -> Result<RgbImage> {
    let tree = document::parse(svg)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::CanvasTooSmall { width, height })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(RenderError::Raster("pixel buffer does not match the canvas"))?;
    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}

pub fn encode(image: &RgbImage, format: image::ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format)?;
    Ok(bytes.into_inner())
}
