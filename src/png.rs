//! PNG export of a rendered seating chart.

use crate::error::{Result, SeatingError};
use chrono::NaiveDate;
use resvg::{tiny_skia, usvg};
use std::path::Path;

/// `seating_chart_<date>.png`
pub fn file_name(date: NaiveDate) -> String {
    format!("seating_chart_{}.png", date.format("%Y-%m-%d"))
}

/// Rasterizes an SVG document into PNG bytes, using the system fonts for text.
pub fn rasterize(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| SeatingError::Render(e.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| SeatingError::Render(format!("cannot allocate {:?} canvas", size)))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|e| SeatingError::Render(e.to_string()))
}

pub fn write(path: &Path, svg: &str) -> Result<()> {
    let png = rasterize(svg)?;
    std::fs::write(path, png).map_err(|e| SeatingError::io(path, e))?;
    tracing::info!(path = %path.display(), "wrote seating chart image");
    Ok(())
}
