//! Error taxonomy for generation and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    /// The pitch pool handed to the generator was empty.
    #[error("pitch pool is empty")]
    EmptyPitchPool,

    /// No duration option fits into an empty measure of the given budget.
    #[error("no duration option fits a {budget}-beat measure")]
    NoFittingDuration { budget: u32 },

    /// SVG → PDF conversion failed.
    #[error("PDF export failed: {0}")]
    PdfExport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
