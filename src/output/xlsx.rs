//! Excel workbook output
//!
//! Backed by `rust_xlsxwriter` when the `xlsx` feature is enabled. Builds
//! without the feature still expose `XlsxWriter`, but writing fails with
//! `TuitionError::MissingDependency` before any file is created.

use super::TableWriter;
use crate::error::TuitionError;
use crate::pricing::TuitionTable;
use std::path::Path;

/// Worksheet name used for the table
pub const SHEET_NAME: &str = "Tuition";

/// Number format applied to the cost columns
pub const CURRENCY_FORMAT: &str = "$#,##0.00";

/// Writes a single-sheet `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

#[cfg(feature = "xlsx")]
impl TableWriter for XlsxWriter {
    fn write(&self, table: &TuitionTable, path: &Path) -> Result<(), TuitionError> {
        use rust_xlsxwriter::{Format, Workbook, XlsxError};

        fn spreadsheet(e: XlsxError) -> TuitionError {
            TuitionError::Spreadsheet(e.to_string())
        }

        let bold = Format::new().set_bold();
        let money = Format::new().set_num_format(CURRENCY_FORMAT);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(spreadsheet)?;

        for (col, label) in table.header().iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *label, &bold)
                .map_err(spreadsheet)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet
                .write_number(r, 0, row.credits)
                .map_err(spreadsheet)?;
            // Stored unrounded; only the display format rounds
            worksheet
                .write_number_with_format(r, 1, row.lower_total, &money)
                .map_err(spreadsheet)?;
            worksheet
                .write_number_with_format(r, 2, row.upper_total, &money)
                .map_err(spreadsheet)?;
        }

        worksheet.set_column_width(0, 14).map_err(spreadsheet)?;
        worksheet.set_column_width(1, 32).map_err(spreadsheet)?;
        worksheet.set_column_width(2, 32).map_err(spreadsheet)?;

        workbook.save(path).map_err(spreadsheet)?;
        log::info!("wrote {} rows to {}", table.rows.len(), path.display());
        Ok(())
    }
}

#[cfg(not(feature = "xlsx"))]
impl TableWriter for XlsxWriter {
    fn write(&self, _table: &TuitionTable, _path: &Path) -> Result<(), TuitionError> {
        Err(TuitionError::MissingDependency {
            format: "xlsx",
            hint: "Rebuild with: cargo install tuition_table --features xlsx",
        })
    }
}


#[cfg(all(test, not(feature = "xlsx")))]
mod tests {
    use super::*;
    use crate::rates::{RateTable, ResidencyClass};

    #[test]
    fn test_missing_feature_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resident.xlsx");
        let table = TuitionTable::build(ResidencyClass::Resident, 3, &RateTable::published())
            .unwrap();

        let err = XlsxWriter.write(&table, &path).unwrap_err();
        assert!(matches!(err, TuitionError::MissingDependency { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!path.exists());
    }
}
