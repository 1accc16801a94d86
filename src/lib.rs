//! Tuition Table - tiered tuition cost tables by residency class
//!
//! This library provides:
//! - Published per-credit rate sets for resident and non-resident students
//! - Tiered cost calculation with a breakpoint at 10 credits
//! - Row generation for credit counts 1..=N
//! - Spreadsheet (xlsx) and CSV output adapters

pub mod config;
pub mod error;
pub mod output;
pub mod pricing;
pub mod rates;
pub mod report;

// Re-export commonly used types
pub use config::{default_output_filename, RunConfig};
pub use error::TuitionError;
pub use output::{OutputFormat, TableWriter};
pub use pricing::{build_rows, total_cost, TuitionRow, TuitionTable};
pub use rates::{RateSet, RateTable, ResidencyClass};
pub use report::{generate, RunSummary};
