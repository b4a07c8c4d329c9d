//! Response encoding: JSON data, JSON-wrapped SVG or raw images.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use plot::{Axis, ColorBar, ColorScale, Figure, ImageFormat, Renderer};
use serde_json::Value;

use crate::error::Result;
use crate::grid::{ANGLE_MAX, ANGLE_MIN, GridMap, GridQuantity, RATIO_MAX, RATIO_MIN};
use crate::params::Echo;
use collision::Regime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Validate and echo only
    #[default]
    Check,
    JsonData,
    JsonSvg,
    Svg,
    Pdf,
    Png,
    Jpeg,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 7] = [
        "jsoncheck", "jsondata", "jsonsvg", "svg", "pdf", "png", "jpg",
    ];

    /// Missing or unknown names select the check mode.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("jsondata") => OutputFormat::JsonData,
            Some("jsonsvg") => OutputFormat::JsonSvg,
            Some("svg") => OutputFormat::Svg,
            Some("pdf") => OutputFormat::Pdf,
            Some("png") => OutputFormat::Png,
            Some("jpg") => OutputFormat::Jpeg,
            _ => OutputFormat::Check,
        }
    }

    pub fn is_check(&self) -> bool {
        *self == OutputFormat::Check
    }
}

/// A successful response body with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(echo: &Echo) -> Result<Self> {
        Ok(Self {
            content_type: "application/json",
            body: serde_json::to_vec(echo)?,
        })
    }

    pub fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self { content_type, body }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (StatusCode::OK, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

fn regime_colorbar() -> ColorBar {
    ColorBar::new(GridQuantity::Regime.label()).with_ticks(
        Regime::ALL
            .iter()
            .map(|regime| (regime.code() as f64, regime.label().to_string()))
            .collect(),
    )
}

fn efficiency_colorbar(quantity: GridQuantity) -> ColorBar {
    ColorBar::new(quantity.label()).with_ticks(
        [-1.0, -0.5, 0.0, 0.5, 1.0]
            .into_iter()
            .map(|tick| (tick, plot::svg::tick_label(tick)))
            .collect(),
    )
}

/// Plot description of a sweep.
pub fn figure(map: &GridMap) -> Result<Figure> {
    let (scale, colorbar) = match map.quantity {
        GridQuantity::Regime => (ColorScale::discrete(1.0, Regime::ALL.len())?, regime_colorbar()),
        quantity => (ColorScale::banded(0.1, 1.0)?, efficiency_colorbar(quantity)),
    };

    Ok(Figure {
        x: map.angles.clone(),
        y: map.ratios.clone(),
        z: map.values.clone(),
        scale,
        x_axis: Axis::new("Impact angle [deg]", ANGLE_MIN, ANGLE_MAX).with_tick_step(15.0),
        y_axis: Axis::new("v_coll / v_esc", RATIO_MIN, RATIO_MAX).with_tick_step(0.5),
        colorbar,
    })
}

pub struct ResponseFormatter<'a> {
    renderer: &'a dyn Renderer,
}

impl<'a> ResponseFormatter<'a> {
    pub fn new(renderer: &'a dyn Renderer) -> Self {
        Self { renderer }
    }

    /// Echo of a validated request that asked for no data.
    pub fn check(mut echo: Echo) -> Result<Reply> {
        echo.insert("check".to_string(), Value::Bool(true));
        Reply::json(&echo)
    }

    /// Encodes a completed sweep in `format`.
    pub fn respond(&self, format: OutputFormat, mut echo: Echo, map: &GridMap) -> Result<Reply> {
        match format {
            OutputFormat::Check => Self::check(echo),
            OutputFormat::JsonData => {
                echo.insert("vels".to_string(), Value::from(map.ratios.clone()));
                echo.insert("angs".to_string(), Value::from(map.angles.clone()));
                echo.insert("vals".to_string(), serde_json::to_value(&map.values)?);
                Reply::json(&echo)
            }
            OutputFormat::JsonSvg => {
                let svg = self.renderer.render(&figure(map)?, ImageFormat::Svg)?;
                echo.insert(
                    "image".to_string(),
                    Value::String(String::from_utf8_lossy(&svg).into_owned()),
                );
                Reply::json(&echo)
            }
            OutputFormat::Svg => self.image(map, ImageFormat::Svg),
            OutputFormat::Pdf => self.image(map, ImageFormat::Pdf),
            OutputFormat::Png => self.image(map, ImageFormat::Png),
            OutputFormat::Jpeg => self.image(map, ImageFormat::Jpeg),
        }
    }

    fn image(&self, map: &GridMap, format: ImageFormat) -> Result<Reply> {
        let bytes = self.renderer.render(&figure(map)?, format)?;
        Ok(Reply::bytes(format.content_type(), bytes))
    }
}
