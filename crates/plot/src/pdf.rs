//! PDF back end.

use svg2pdf::{ConversionOptions, PageOptions};

use crate::document;
use crate::error::{RenderError, Result};

/// Converts an SVG document into a single-page PDF of the same size.
pub fn convert(svg: &str) -> Result<Vec<u8>> {
    let tree = document::parse(svg)?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|err| RenderError::Pdf(err.to_string()))
}
