//! Tiered per-credit cost calculation

use crate::rates::DivisionRates;

/// Credits billed at the first-tier rate; the boundary is inclusive
pub const TIER_BREAKPOINT: u32 = 10;

/// Total cost for a credit count under tiered linear pricing
///
/// Credits up to and including the breakpoint are billed at `first_tier_rate`,
/// each credit after that at `after_tier_rate`. No rounding is applied.
pub fn total_cost(credits: u32, first_tier_rate: f64, after_tier_rate: f64) -> f64 {
    if credits <= TIER_BREAKPOINT {
        return credits as f64 * first_tier_rate;
    }
    (TIER_BREAKPOINT as f64 * first_tier_rate)
        + ((credits - TIER_BREAKPOINT) as f64 * after_tier_rate)
}

/// Total cost for one division's rate pair
pub fn division_cost(credits: u32, rates: &DivisionRates) -> f64 {
    total_cost(credits, rates.first_10, rates.after_10)
}
