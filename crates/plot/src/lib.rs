//! Colour-mapped grid plots.
//!
//! A [`Figure`] holds a value grid, its axes and a banded [`ColorScale`]; a
//! [`Renderer`] turns it into SVG, PDF, PNG or JPEG bytes. Every format is
//! produced from the same SVG drawing.

pub mod color;
mod document;
pub mod error;
pub mod figure;
pub mod layout;
pub mod pdf;
pub mod raster;
pub mod svg;

#[cfg(test)]
mod figure_test;
#[cfg(test)]
mod layout_test;

pub use color::{Color, ColorScale, RDBU, rdbu};
pub use error::{RenderError, Result};
pub use figure::{Axis, ColorBar, Figure, ImageFormat};
pub use layout::Layout;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 760;

pub trait Renderer: Send + Sync {
    fn render(&self, figure: &Figure, format: ImageFormat) -> Result<Vec<u8>>;
}

/// Renders figures onto a fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl MapRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn render_svg(&self, figure: &Figure) -> Result<String> {
        figure.validate()?;
        let layout = Layout::new(self.width, self.height)?;
        Ok(svg::render(figure, &layout))
    }
}

impl Renderer for MapRenderer {
    fn render(&self, figure: &Figure, format: ImageFormat) -> Result<Vec<u8>> {
        let svg = self.render_svg(figure)?;
        match format {
            ImageFormat::Svg => Ok(svg.into_bytes()),
            ImageFormat::Pdf => pdf::convert(&svg),
            ImageFormat::Png => raster::encode(&raster::rasterize(&svg)?, image::ImageFormat::Png),
            ImageFormat::Jpeg => raster::encode(&raster::rasterize(&svg)?, image::ImageFormat::Jpeg),
        }
    }
}
