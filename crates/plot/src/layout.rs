//! Pixel layout of the drawing.

use crate::error::{RenderError, Result};
use crate::figure::{Figure, cell_edges};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 230.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 70.0;
const COLORBAR_GAP: f64 = 25.0;
const COLORBAR_WIDTH: f64 = 25.0;

pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Intersection with `other`, `None` when they do not overlap.
    pub fn clip(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > x && bottom > y).then(|| Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub plot: Rect,
    pub colorbar: Rect,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(RenderError::CanvasTooSmall { width, height });
        }

        let plot = Rect {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            height: height as f64 - MARGIN_TOP - MARGIN_BOTTOM,
        };
        let colorbar = Rect {
            x: plot.right() + COLORBAR_GAP,
            y: plot.y,
            width: COLORBAR_WIDTH,
            height: plot.height,
        };

        Ok(Self {
            width,
            height,
            plot,
            colorbar,
        })
    }

    pub fn x_pixel(&self, figure: &Figure, value: f64) -> f64 {
        self.plot.x + figure.x_axis.fraction(value) * self.plot.width
    }

    pub fn y_pixel(&self, figure: &Figure, value: f64) -> f64 {
        self.plot.bottom() - figure.y_axis.fraction(value) * self.plot.height
    }

    /// Pixel position of a colour-bar value, measured from the bar's bottom.
    pub fn colorbar_pixel(&self, figure: &Figure, value: f64) -> f64 {
        self.colorbar.bottom() - figure.scale.fraction(value) * self.colorbar.height
    }

    /// Every visible grid cell with its value, clipped to the plot area.
    pub fn cells(&self, figure: &Figure) -> Vec<(Rect, f64)> {
        let x_edges = cell_edges(&figure.x);
        let y_edges = cell_edges(&figure.y);
        let mut cells = Vec::with_capacity(figure.x.len() * figure.y.len());

        for (row, values) in figure.z.iter().enumerate() {
            let top = self.y_pixel(figure, y_edges[row + 1]);
            let bottom = self.y_pixel(figure, y_edges[row]);
            for (column, value) in values.iter().enumerate() {
                let left = self.x_pixel(figure, x_edges[column]);
                let right = self.x_pixel(figure, x_edges[column + 1]);
                let rect = Rect {
                    x: left,
                    y: top,
                    width: right - left,
                    height: bottom - top,
                };
                if let Some(clipped) = rect.clip(&self.plot) {
                    cells.push((clipped, *value));
                }
            }
        }
        cells
    }

    /// Colour-bar bands from bottom to top.
    pub fn colorbar_bands(&self, figure: &Figure) -> Vec<(Rect, usize)> {
        let edges = figure.scale.boundaries();
        (0..figure.scale.band_count())
            .map(|band| {
                let top = self.colorbar_pixel(figure, edges[band + 1]);
                let bottom = self.colorbar_pixel(figure, edges[band]);
                let rect = Rect {
                    x: self.colorbar.x,
                    y: top,
                    width: self.colorbar.width,
                    height: bottom - top,
                };
                (rect, band)
            })
            .collect()
    }
}
