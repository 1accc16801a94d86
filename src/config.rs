//! Resolved settings for one table-generation run

use crate::error::TuitionError;
use crate::output::OutputFormat;
use crate::pricing::validate_max_credits;
use crate::rates::{load_rate_table, RateTable, ResidencyClass};
use std::path::PathBuf;

/// Settings for a single run, after validation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub residency: ResidencyClass,
    pub max_credits: u32,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Optional CSV overriding the published rates
    pub rates_file: Option<PathBuf>,
}

impl RunConfig {
    /// Validate raw inputs and fill in defaults
    ///
    /// `max_credits` is checked first so that nothing else is touched when it
    /// is out of range. The format falls back to the output extension, then xlsx.
    pub fn resolve(
        residency: ResidencyClass,
        max_credits: i64,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        rates_file: Option<PathBuf>,
    ) -> Result<Self, TuitionError> {
        let max_credits = validate_max_credits(max_credits)?;
        let format = format
            .or_else(|| output.as_deref().and_then(OutputFormat::from_path))
            .unwrap_or(OutputFormat::Xlsx);
        let output = output
            .unwrap_or_else(|| PathBuf::from(default_output_filename(residency, max_credits, format)));

        Ok(Self {
            residency,
            max_credits,
            output,
            format,
            rates_file,
        })
    }

    /// Published rates, or the configured rate schedule file
    pub fn rate_table(&self) -> Result<RateTable, TuitionError> {
        match &self.rates_file {
            Some(path) => load_rate_table(path),
            None => Ok(RateTable::published()),
        }
    }
}

/// `tuition_<residency>_1_to_<max_credits>.<ext>`
pub fn default_output_filename(
    residency: ResidencyClass,
    max_credits: u32,
    format: OutputFormat,
) -> String {
    format!(
        "tuition_{}_1_to_{}.{}",
        residency,
        max_credits,
        format.extension()
    )
}
