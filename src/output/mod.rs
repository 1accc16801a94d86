//! Output adapters that serialize a tuition table to disk

mod csv_file;
mod xlsx;

pub use self::csv_file::CsvWriter;
pub use self::xlsx::{XlsxWriter, CURRENCY_FORMAT, SHEET_NAME};

use crate::error::TuitionError;
use crate::pricing::TuitionTable;
use serde::Serialize;
use std::path::Path;

/// Something that can persist a tuition table
pub trait TableWriter {
    /// Write header and rows to `path`, creating or truncating it
    fn write(&self, table: &TuitionTable, path: &Path) -> Result<(), TuitionError>;
}

/// Supported output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }

    /// Infer a format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Some(OutputFormat::Xlsx),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }

    pub fn writer(&self) -> Box<dyn TableWriter> {
        match self {
            OutputFormat::Xlsx => Box::new(XlsxWriter),
            OutputFormat::Csv => Box::new(CsvWriter),
        }
    }
}

/// Render an amount as `$#,##0.00`
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(123.94), "$123.94");
        assert_eq!(format_currency(1354.96), "$1,354.96");
        assert_eq!(format_currency(12345.6), "$12,345.60");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-57.78), "-$57.78");
    }

    #[test]
    fn test_format_currency_rounds_display_only() {
        // 5 * 123.94 is not exactly representable
        assert_eq!(format_currency(5.0 * 123.94), "$619.70");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.xlsx")), Some(OutputFormat::Xlsx));
        assert_eq!(OutputFormat::from_path(Path::new("out/A.CSV")), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_path(Path::new("table.ods")), None);
        assert_eq!(OutputFormat::from_path(Path::new("table")), None);
    }
}
