use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("grid has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("grid row {row} has {found} values, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("axis {0} has no values")]
    EmptyAxis(&'static str),

    #[error("axis {axis} has an invalid range [{min}, {max}]")]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("colour scale needs at least one band")]
    EmptyScale,

    #[error("image too small: {width}x{height}")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("invalid SVG document: {0}")]
    Svg(#[from] usvg::Error),

    #[error("rasterization failed: {0}")]
    Raster(&'static str),

    #[error("PDF conversion failed: {0}")]
    Pdf(String),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
