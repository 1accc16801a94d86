//! Plain CSV output

use super::TableWriter;
use crate::error::TuitionError;
use crate::pricing::TuitionTable;
use csv::Writer;
use std::path::Path;

/// Writes the header and unrounded totals as comma-separated values
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl TableWriter for CsvWriter {
    fn write(&self, table: &TuitionTable, path: &Path) -> Result<(), TuitionError> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(table.header())?;
        for row in &table.rows {
            writer.write_record(&[
                row.credits.to_string(),
                row.lower_total.to_string(),
                row.upper_total.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{RateTable, ResidencyClass};

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resident.csv");
        let table = TuitionTable::build(ResidencyClass::Resident, 12, &RateTable::published())
            .unwrap();

        CsvWriter.write(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), table.header().to_vec());

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 12);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][1], "123.94");
        let twelfth: f64 = records[11][1].parse().unwrap();
        assert!((twelfth - 1354.96).abs() < 1e-9);
    }
}
