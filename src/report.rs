//! One-shot table generation: rates -> rows -> file

use crate::config::RunConfig;
use crate::error::TuitionError;
use crate::output::{format_currency, OutputFormat};
use crate::pricing::TuitionTable;
use crate::rates::{RateSet, ResidencyClass};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub residency: ResidencyClass,
    pub max_credits: u32,
    pub format: OutputFormat,
    pub rates: RateSet,
}

impl RunSummary {
    /// `Rates used: lower 1-10=$..., lower 11+=$..., upper 1-10=$..., upper 11+=$...`
    pub fn rates_line(&self) -> String {
        format!(
            "Rates used: lower 1-10={}, lower 11+={}, upper 1-10={}, upper 11+={}",
            format_currency(self.rates.lower.first_10),
            format_currency(self.rates.lower.after_10),
            format_currency(self.rates.upper.first_10),
            format_currency(self.rates.upper.after_10),
        )
    }
}

/// Build the table described by `config` and write it out
pub fn generate(config: &RunConfig) -> Result<RunSummary, TuitionError> {
    let rate_table = config.rate_table()?;
    let table = TuitionTable::build(config.residency, config.max_credits as i64, &rate_table)?;

    config.format.writer().write(&table, &config.output)?;
    info!(
        "{} table for {} credits written to {}",
        config.residency,
        config.max_credits,
        config.output.display()
    );

    Ok(RunSummary {
        output: config.output.clone(),
        residency: config.residency,
        max_credits: config.max_credits,
        format: config.format,
        rates: table.rates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RESIDENT_RATES;

    #[test]
    fn test_rates_line() {
        let summary = RunSummary {
            output: PathBuf::from("tuition_resident_1_to_3.xlsx"),
            residency: ResidencyClass::Resident,
            max_credits: 3,
            format: OutputFormat::Xlsx,
            rates: RESIDENT_RATES,
        };
        assert_eq!(
            summary.rates_line(),
            "Rates used: lower 1-10=$123.94, lower 11+=$57.78, upper 1-10=$133.54, upper 11+=$67.38"
        );
    }

    #[test]
    fn test_generate_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("table.csv");
        let config = RunConfig::resolve(
            ResidencyClass::NonResident,
            11,
            Some(output.clone()),
            None,
            None,
        )
        .unwrap();

        let summary = generate(&config).unwrap();
        assert_eq!(summary.output, output);
        assert_eq!(summary.format, OutputFormat::Csv);
        assert_eq!(summary.rates.lower.first_10, 274.84);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 12);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = RunSummary {
            output: PathBuf::from("t.csv"),
            residency: ResidencyClass::NonResident,
            max_credits: 2,
            format: OutputFormat::Csv,
            rates: RESIDENT_RATES,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["residency"], "non-resident");
        assert_eq!(json["format"], "csv");
        assert_eq!(json["rates"]["upper"]["after_10"], 67.38);
    }
}
