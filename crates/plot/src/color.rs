use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#67001F")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colours, `t` in [0, 1].
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// ColorBrewer RdBu, 11 classes, red to blue.
pub const RDBU: [Color; 11] = [
    Color::new(0x67, 0x00, 0x1f),
    Color::new(0xb2, 0x18, 0x2b),
    Color::new(0xd6, 0x60, 0x4d),
    Color::new(0xf4, 0xa5, 0x82),
    Color::new(0xfd, 0xdb, 0xc7),
    Color::new(0xf7, 0xf7, 0xf7),
    Color::new(0xd1, 0xe5, 0xf0),
    Color::new(0x92, 0xc5, 0xde),
    Color::new(0x43, 0x93, 0xc3),
    Color::new(0x21, 0x66, 0xac),
    Color::new(0x05, 0x30, 0x61),
];

/// Samples the RdBu palette at `t` in [0, 1].
pub fn rdbu(t: f64) -> Color {
    if t.is_nan() {
        return RDBU[0];
    }
    let position = t.clamp(0.0, 1.0) * (RDBU.len() - 1) as f64;
    let lower = (position.floor() as usize).min(RDBU.len() - 2);
    RDBU[lower].lerp(&RDBU[lower + 1], position - lower as f64)
}

/// Piecewise-constant colour scale over contiguous bands.
///
/// `boundaries` holds the band edges in increasing order. A value in
/// `[boundaries[i], boundaries[i + 1])` takes the palette colour at the band's
/// midpoint. Values at or above the last edge take the top band, values below
/// the first edge (and NaN) are drawn in `under`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    boundaries: Vec<f64>,
    pub under: Color,
}

impl ColorScale {
    pub fn new(boundaries: Vec<f64>) -> Result<Self> {
        let ordered = boundaries.windows(2).all(|w| w[0] < w[1]);
        if boundaries.len() < 2 || !ordered || boundaries.iter().any(|b| !b.is_finite()) {
            return Err(RenderError::EmptyScale);
        }
        Ok(Self {
            boundaries,
            under: Color::BLACK,
        })
    }

    /// `count` unit-wide bands centred on `first`, `first + 1`, ...
    ///
    /// ```
    /// use plot::ColorScale;
    ///
    /// let regimes = ColorScale::discrete(1.0, 5).unwrap();
    /// assert_eq!(regimes.boundaries(), &[0.5, 1.5, 2.5, 3.5, 4.5, 5.5]);
    /// ```
    pub fn discrete(first: f64, count: usize) -> Result<Self> {
        Self::new((0..=count).map(|i| first - 0.5 + i as f64).collect())
    }

    /// Bands of width `step` centred on multiples of `step`, from `-limit` to
    /// `limit`.
    pub fn banded(step: f64, limit: f64) -> Result<Self> {
        if !(step > 0.0) || !(limit > 0.0) {
            return Err(RenderError::EmptyScale);
        }
        let count = (2.0 * limit / step).round() as usize + 1;
        let first = -limit - 0.5 * step;
        Self::new((0..=count).map(|i| first + i as f64 * step).collect())
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn band_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn min(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn max(&self) -> f64 {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Band index of `value`, `None` below the scale.
    pub fn band(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.min() {
            return None;
        }
        let index = self.boundaries.partition_point(|b| *b <= value);
        Some((index - 1).min(self.band_count() - 1))
    }

    pub fn band_color(&self, band: usize) -> Color {
        let mid = 0.5 * (self.boundaries[band] + self.boundaries[band + 1]);
        rdbu((mid - self.min()) / (self.max() - self.min()))
    }

    pub fn color_for(&self, value: f64) -> Color {
        match self.band(value) {
            Some(band) => self.band_color(band),
            None => self.under,
        }
    }

    /// Position of `value` along the scale, 0 at the first edge and 1 at the last.
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min()) / (self.max() - self.min())).clamp(0.0, 1.0)
    }
}
