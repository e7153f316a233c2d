//! sheetlib — random grand-staff practice sheet generation and rendering
//! for Pentagrama Maestro.
//!
//! Produces four-measure treble + bass reading exercises from fixed pitch
//! pools and a fixed duration vocabulary, renders them as SVG notation, and
//! exports the result as a PDF.
//!
//! # Example
//! ```no_run
//! use sheetlib::{generate_exercise, render_exercise_to_svg};
//!
//! let exercise = generate_exercise().unwrap();
//! println!("Measures per staff: {}", exercise.measure_count());
//! let svg = render_exercise_to_svg(&exercise, None);
//! std::fs::write("sheet.svg", svg).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod model;
pub mod renderer;

pub use config::GeneratorConfig;
pub use error::SheetError;
pub use export::{exercise_to_pdf, export_pdf_file, svg_to_pdf};
pub use generator::{
    generate_exercise, generate_exercise_with, generate_measure, Picker, RngPicker,
};
pub use model::*;
pub use renderer::render_exercise_to_svg;

/// Convert a generated exercise to a pretty-printed JSON string.
pub fn exercise_to_json(exercise: &Exercise) -> Result<String, SheetError> {
    Ok(serde_json::to_string_pretty(exercise)?)
}
