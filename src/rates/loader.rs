//! Load rate schedules from CSV
//!
//! Expected columns: residency,lower_first_10,lower_after_10,upper_first_10,upper_after_10

use super::{RateSet, RateTable, ResidencyClass};
use crate::error::TuitionError;
use csv::Reader;
use log::{debug, warn};
use std::path::Path;

/// Environment variable naming a rate schedule file
pub const RATES_FILE_ENV: &str = "TUITION_RATES_FILE";

/// Raw CSV row matching the rate schedule columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    residency: String,
    lower_first_10: f64,
    lower_after_10: f64,
    upper_first_10: f64,
    upper_after_10: f64,
}

impl CsvRow {
    /// Resolve the residency key against `table` and validate the new rates
    ///
    /// Returns the class, the rates it replaces and the loaded rates.
    fn into_rates(self, table: &RateTable) -> Result<(ResidencyClass, RateSet, RateSet), String> {
        let (class, previous) = table
            .lookup(&self.residency)
            .map_err(|e| e.to_string())?;
        let previous = *previous;
        let rates = RateSet::new(
            self.lower_first_10,
            self.lower_after_10,
            self.upper_first_10,
            self.upper_after_10,
        );
        rates
            .validate()
            .map_err(|message| format!("{}: {}", class, message))?;
        Ok((class, previous, rates))
    }
}

/// Load a rate table from a CSV file
///
/// Classes missing from the file keep their published rates.
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> Result<RateTable, TuitionError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path).map_err(|e| schedule_error(path, e.to_string()))?;
    read_rate_table(reader, path)
}

/// Load a rate table from any reader (e.g., string buffer)
pub fn load_rate_table_from_reader<R: std::io::Read>(reader: R) -> Result<RateTable, TuitionError> {
    read_rate_table(Reader::from_reader(reader), Path::new("<reader>"))
}

fn read_rate_table<R: std::io::Read>(
    mut reader: Reader<R>,
    path: &Path,
) -> Result<RateTable, TuitionError> {
    let mut table = RateTable::published();
    let mut seen = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result.map_err(|e| schedule_error(path, e.to_string()))?;
        let (class, previous, rates) = row
            .into_rates(&table)
            .map_err(|m| schedule_error(path, m))?;

        if seen.contains(&class) {
            return Err(schedule_error(path, format!("duplicate row for {}", class)));
        }
        seen.push(class);

        if rates.has_inverted_tier() {
            warn!(
                "{}: after-10 rate exceeds first-10 rate in {}",
                class,
                path.display()
            );
        }
        debug!(
            "{} rates {:?} replaced by {:?}",
            class,
            previous.values(),
            rates.values()
        );
        table = table.with_rates(class, rates);
    }

    Ok(table)
}

fn schedule_error(path: &Path, message: String) -> TuitionError {
    TuitionError::RateSchedule {
        path: path.to_path_buf(),
        message,
    }
}
