//! pentagrama — command-line front end for sheetlib.
//!
//! Generates a fresh grand-staff reading exercise and writes it as SVG,
//! PDF, and/or JSON. With no output flags the SVG is printed to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use sheetlib::{
    exercise_to_json, export_pdf_file, generate_exercise_with, render_exercise_to_svg,
    GeneratorConfig, RngPicker,
};

/// Pentagrama Maestro — grand-staff practice sheet generator
#[derive(Parser)]
#[command(name = "pentagrama")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible sheets (omit for a fresh random sheet)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the rendered sheet as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the rendered sheet as PDF to this path
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Print the generated exercise as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Page width in SVG user units
    #[arg(long)]
    page_width: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), sheetlib::SheetError> {
    let config = GeneratorConfig::default();
    let mut picker = match cli.seed {
        Some(seed) => RngPicker::seeded(seed),
        None => RngPicker::from_entropy(),
    };

    let exercise = generate_exercise_with(&config, &mut picker)?;
    info!(
        "generated exercise: {} measures per staff",
        exercise.measure_count()
    );

    if cli.json {
        println!("{}", exercise_to_json(&exercise)?);
    }

    let svg = render_exercise_to_svg(&exercise, cli.page_width);

    if let Some(ref path) = cli.svg {
        std::fs::write(path, &svg)?;
        info!("wrote {}", path.display());
    }

    if let Some(ref path) = cli.pdf {
        export_pdf_file(&exercise, path, cli.page_width)?;
        info!("wrote {}", path.display());
    }

    if cli.svg.is_none() && cli.pdf.is_none() && !cli.json {
        print!("{svg}");
    }

    Ok(())
}
