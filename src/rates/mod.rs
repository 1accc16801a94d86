//! Rate table: per-credit tuition rates by residency class

mod schedule;
pub mod loader;

pub use schedule::{
    DivisionRates, RateSet, RateTable, ResidencyClass, NON_RESIDENT_RATES, RESIDENT_RATES,
};
pub use loader::{load_rate_table, load_rate_table_from_reader, RATES_FILE_ENV};
