//! Tiered tuition pricing and table construction

mod calculator;
mod table;

pub use calculator::{division_cost, total_cost, TIER_BREAKPOINT};
pub use table::{build_rows, validate_max_credits, TuitionRow, TuitionTable, HEADER};
