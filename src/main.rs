//! Tuition Table CLI
//!
//! Writes a tiered tuition cost table for credit counts 1..=N
//!
//! Usage: tuition_table <resident|non-resident> <max_credits> [--output FILE]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tuition_table::error::EXIT_WRITE_FAILED;
use tuition_table::rates::RATES_FILE_ENV;
use tuition_table::{generate, OutputFormat, ResidencyClass, RunConfig, TuitionError};

#[derive(Parser, Debug)]
#[command(
    name = "tuition_table",
    version,
    about = "Create an Excel tuition table for lower/upper division by residency."
)]
struct Cli {
    /// Residency status
    #[arg(value_enum)]
    residency: ResidencyClass,

    /// Maximum number of credits to include (must be >= 1)
    #[arg(allow_negative_numbers = true)]
    max_credits: i64,

    /// Output filename. Default: tuition_<residency>_1_to_<N>.xlsx
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format; inferred from the --output extension when omitted
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// CSV rate schedule overriding the published rates
    #[arg(long, env = RATES_FILE_ENV)]
    rates: Option<PathBuf>,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::resolve(
        cli.residency,
        cli.max_credits,
        cli.output,
        cli.format,
        cli.rates,
    )?;

    let summary = generate(&config)
        .with_context(|| format!("could not create {}", config.output.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Created {}", summary.output.display());
        println!("{}", summary.rates_line());
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<TuitionError>()
        .map(TuitionError::exit_code)
        .unwrap_or(EXIT_WRITE_FAILED);
    code as u8
}
