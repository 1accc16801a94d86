//! Row generation for tuition tables

use super::calculator::division_cost;
use crate::error::TuitionError;
use crate::rates::{RateSet, RateTable, ResidencyClass};
use log::debug;
use serde::{Deserialize, Serialize};

/// Column labels, in row order
pub const HEADER: [&str; 3] = [
    "# of Credits",
    "Tuition Cost for Lower-Division",
    "Tuition Cost for Upper-Division",
];

/// Totals for one credit count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuitionRow {
    pub credits: u32,
    pub lower_total: f64,
    pub upper_total: f64,
}

/// One row per credit count from 1 to `max_credits`, ascending with no gaps
pub fn build_rows(max_credits: u32, rates: &RateSet) -> Vec<TuitionRow> {
    (1..=max_credits)
        .map(|credits| TuitionRow {
            credits,
            lower_total: division_cost(credits, &rates.lower),
            upper_total: division_cost(credits, &rates.upper),
        })
        .collect()
}

/// Header plus rows for a single residency class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuitionTable {
    pub residency: ResidencyClass,
    pub rates: RateSet,
    pub rows: Vec<TuitionRow>,
}

impl TuitionTable {
    /// Build the table for a residency class, rejecting `max_credits < 1`
    pub fn build(
        residency: ResidencyClass,
        max_credits: i64,
        rate_table: &RateTable,
    ) -> Result<Self, TuitionError> {
        let max_credits = validate_max_credits(max_credits)?;
        let rates = *rate_table.get(residency);
        let rows = build_rows(max_credits, &rates);
        debug!("built {} rows for {}", rows.len(), residency);

        Ok(Self {
            residency,
            rates,
            rows,
        })
    }

    pub fn header(&self) -> [&'static str; 3] {
        HEADER
    }

    pub fn max_credits(&self) -> u32 {
        self.rows.last().map(|r| r.credits).unwrap_or(0)
    }
}

/// Check the requested credit range and narrow it to `u32`
pub fn validate_max_credits(max_credits: i64) -> Result<u32, TuitionError> {
    if max_credits < 1 {
        return Err(TuitionError::InvalidMaxCredits(max_credits));
    }
    u32::try_from(max_credits).map_err(|_| TuitionError::MaxCreditsTooLarge(max_credits))
}
