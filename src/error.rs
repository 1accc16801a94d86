//! Error types for tuition table generation

use std::path::PathBuf;
use thiserror::Error;

/// Exit code when the table could not be written
pub const EXIT_WRITE_FAILED: i32 = 1;
/// Exit code for an invalid credit count
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Errors that can occur while building or writing a tuition table
#[derive(Error, Debug)]
pub enum TuitionError {
    /// Requested maximum credit count is below 1
    #[error("max_credits must be at least 1.")]
    InvalidMaxCredits(i64),

    /// Requested maximum credit count does not fit a credit counter
    #[error("max_credits must be at most {}.", u32::MAX)]
    MaxCreditsTooLarge(i64),

    /// Residency key outside the recognized classes
    #[error("unknown residency class '{0}' (expected 'resident' or 'non-resident')")]
    UnknownResidency(String),

    /// Output format was compiled out of this build
    #[error("{format} support is required to create {format} files. {hint}")]
    MissingDependency {
        format: &'static str,
        hint: &'static str,
    },

    /// Spreadsheet library reported a failure
    #[error("failed to write spreadsheet: {0}")]
    Spreadsheet(String),

    /// Rate schedule file was malformed
    #[error("invalid rate schedule '{path}': {message}")]
    RateSchedule { path: PathBuf, message: String },

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TuitionError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            TuitionError::InvalidMaxCredits(_) | TuitionError::MaxCreditsTooLarge(_) => {
                EXIT_INVALID_INPUT
            }
            _ => EXIT_WRITE_FAILED,
        }
    }
}
