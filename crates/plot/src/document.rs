//! Parses rendered SVG documents for the raster and PDF back ends.

use std::sync::{Arc, OnceLock};

use usvg::{Options, Tree, fontdb};

use crate::error::Result;

/// System fonts, loaded on first use.
fn fonts() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut database = fontdb::Database::new();
            database.load_system_fonts();
            Arc::new(database)
        })
        .clone()
}

pub fn parse(svg: &str) -> Result<Tree> {
    let options = Options {
        fontdb: fonts(),
        ..Options::default()
    };
    Ok(Tree::from_str(svg, &options)?)
}
