use serde::{Deserialize, Serialize};

use crate::color::ColorScale;
use crate::error::{RenderError, Result};

/// Output encoding of a rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Svg,
    Pdf,
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Pdf => "application/pdf",
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: Vec::new(),
        }
    }

    /// Ticks every `step` from the first multiple of `step` inside the range.
    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.ticks.clear();
        if step > 0.0 && self.min <= self.max {
            let mut tick = (self.min / step).ceil() * step;
            while tick <= self.max + 1e-9 * step {
                self.ticks.push(tick);
                tick += step;
            }
        }
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Maps `value` to [0, 1] across the axis range.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(RenderError::InvalidRange {
                axis: name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Colour bar legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub label: String,
    /// Tick positions in data units with their labels
    pub ticks: Vec<(f64, String)>,
}

impl ColorBar {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ticks: Vec::new(),
        }
    }

    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = ticks;
        self
    }
}

/// A colour-mapped grid: `z[row][column]` is the value at `(x[column], y[row])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub scale: ColorScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub colorbar: ColorBar,
}

impl Figure {
    pub fn validate(&self) -> Result<()> {
        if self.x.is_empty() {
            return Err(RenderError::EmptyAxis("x"));
        }
        if self.y.is_empty() {
            return Err(RenderError::EmptyAxis("y"));
        }
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")?;

        if self.z.len() != self.y.len() {
            return Err(RenderError::RowCount {
                expected: self.y.len(),
                found: self.z.len(),
            });
        }
        for (row, values) in self.z.iter().enumerate() {
            if values.len() != self.x.len() {
                return Err(RenderError::ColumnCount {
                    row,
                    expected: self.x.len(),
                    found: values.len(),
                });
            }
        }
        Ok(())
    }
}

/// Cell edges around grid coordinates: midpoints between neighbours, extended
/// by half a spacing at both ends.
pub fn cell_edges(centers: &[f64]) -> Vec<f64> {
    match centers {
        [] => Vec::new(),
        [only] => vec![only - 0.5, only + 0.5],
        _ => {
            let n = centers.len();
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(centers[0] - 0.5 * (centers[1] - centers[0]));
            edges.extend(centers.windows(2).map(|w| 0.5 * (w[0] + w[1])));
            edges.push(centers[n - 1] + 0.5 * (centers[n - 1] - centers[n - 2]));
            edges
        }
    }
}
