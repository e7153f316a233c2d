//! PDF export — renders the exercise to SVG and converts it to a
//! single-page PDF document. The sheet title is part of the rendered
//! header, so the PDF carries it without extra text drawing.

use std::path::Path;

use svg2pdf::usvg;

use crate::error::SheetError;
use crate::model::Exercise;
use crate::renderer::render_exercise_to_svg;

/// Convert an SVG string to PDF bytes.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, SheetError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| SheetError::PdfExport(format!("SVG parse: {e}")))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| SheetError::PdfExport(format!("conversion: {e}")))
}

/// Render an exercise and return it as PDF bytes.
///
/// `page_width` sets the sheet width in user units; pass `None` for the
/// default. A failed export leaves the exercise untouched.
pub fn exercise_to_pdf(exercise: &Exercise, page_width: Option<f64>) -> Result<Vec<u8>, SheetError> {
    let svg = render_exercise_to_svg(exercise, page_width);
    svg_to_pdf(&svg)
}

/// Render an exercise and write the PDF to a file.
pub fn export_pdf_file<P: AsRef<Path>>(
    exercise: &Exercise,
    path: P,
    page_width: Option<f64>,
) -> Result<(), SheetError> {
    let pdf = exercise_to_pdf(exercise, page_width)?;
    std::fs::write(path, pdf)?;
    Ok(())
}
