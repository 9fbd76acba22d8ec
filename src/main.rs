//! Command line entry point for the press solver

use anyhow::{Context, Result};
use clap::Parser;
use press_minimizer::{
    config::{CliOverrides, OutputFormat, Settings, SolveMode},
    BatchRunner,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "press_minimizer")]
#[command(about = "Minimal button press solver for counter machines")]
#[command(version)]
struct Cli {
    /// Puzzle file, one machine per line
    input: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Solve mode (overrides config)
    #[arg(short, long, value_enum)]
    mode: Option<SolveMode>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Per-line progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.merge_with_cli(&CliOverrides {
        mode: cli.mode,
        format: cli.format,
    });

    let format = settings.output.format;
    let runner = BatchRunner::new(settings, cli.verbose);
    let report = runner.run_file(&cli.input)?;

    if cli.verbose {
        eprintln!("{report}");
    }

    // Stdout carries only the answer, so the output stays pipeable.
    match format {
        OutputFormat::Text => println!("{}", report.total),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
