//! Per-credit rate schedules by residency class

use crate::error::TuitionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing category that selects a rate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResidencyClass {
    Resident,
    NonResident,
}

impl ResidencyClass {
    pub const ALL: [ResidencyClass; 2] = [ResidencyClass::Resident, ResidencyClass::NonResident];

    /// Key used on the command line, in file names and in rate CSVs
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidencyClass::Resident => "resident",
            ResidencyClass::NonResident => "non-resident",
        }
    }
}

impl fmt::Display for ResidencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResidencyClass {
    type Err = TuitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resident" => Ok(ResidencyClass::Resident),
            "non-resident" => Ok(ResidencyClass::NonResident),
            other => Err(TuitionError::UnknownResidency(other.to_string())),
        }
    }
}

/// First-10 and after-10 per-credit rates for one division
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionRates {
    /// Rate applied to each of the first 10 credits
    pub first_10: f64,
    /// Rate applied to each credit beyond the 10th
    pub after_10: f64,
}

impl DivisionRates {
    pub const fn new(first_10: f64, after_10: f64) -> Self {
        Self { first_10, after_10 }
    }
}

/// Lower- and upper-division rates for one residency class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    pub lower: DivisionRates,
    pub upper: DivisionRates,
}

impl RateSet {
    pub const fn new(
        lower_first_10: f64,
        lower_after_10: f64,
        upper_first_10: f64,
        upper_after_10: f64,
    ) -> Self {
        Self {
            lower: DivisionRates::new(lower_first_10, lower_after_10),
            upper: DivisionRates::new(upper_first_10, upper_after_10),
        }
    }

    /// The four rates in column order: lower first/after, upper first/after
    pub fn values(&self) -> [f64; 4] {
        [
            self.lower.first_10,
            self.lower.after_10,
            self.upper.first_10,
            self.upper.after_10,
        ]
    }

    /// Check that every rate is finite and positive
    pub fn validate(&self) -> Result<(), String> {
        const NAMES: [&str; 4] = [
            "lower_first_10",
            "lower_after_10",
            "upper_first_10",
            "upper_after_10",
        ];
        for (name, value) in NAMES.iter().zip(self.values()) {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        Ok(())
    }

    /// True when an after-10 rate exceeds its first-10 rate
    pub fn has_inverted_tier(&self) -> bool {
        self.lower.after_10 > self.lower.first_10 || self.upper.after_10 > self.upper.first_10
    }
}

/// Published per-credit rates, captured once from the college fee schedule
pub const RESIDENT_RATES: RateSet = RateSet::new(123.94, 57.78, 133.54, 67.38);
pub const NON_RESIDENT_RATES: RateSet = RateSet::new(274.84, 208.68, 284.44, 218.28);

/// Immutable mapping from residency class to rate set
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    resident: RateSet,
    non_resident: RateSet,
}

impl RateTable {
    /// The built-in published fee schedule
    pub const fn published() -> Self {
        Self {
            resident: RESIDENT_RATES,
            non_resident: NON_RESIDENT_RATES,
        }
    }

    /// Replace the rates for one class
    pub fn with_rates(mut self, class: ResidencyClass, rates: RateSet) -> Self {
        match class {
            ResidencyClass::Resident => self.resident = rates,
            ResidencyClass::NonResident => self.non_resident = rates,
        }
        self
    }

    pub fn get(&self, class: ResidencyClass) -> &RateSet {
        match class {
            ResidencyClass::Resident => &self.resident,
            ResidencyClass::NonResident => &self.non_resident,
        }
    }

    /// Look up rates by residency key, returning the parsed class with them
    pub fn lookup(&self, key: &str) -> Result<(ResidencyClass, &RateSet), TuitionError> {
        let class: ResidencyClass = key.parse()?;
        Ok((class, self.get(class)))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_literals() {
        let table = RateTable::published();
        assert_eq!(
            table.get(ResidencyClass::Resident).values(),
            [123.94, 57.78, 133.54, 67.38]
        );
        assert_eq!(
            table.get(ResidencyClass::NonResident).values(),
            [274.84, 208.68, 284.44, 218.28]
        );
    }

    #[test]
    fn test_published_rates_are_valid() {
        for class in ResidencyClass::ALL {
            let rates = *RateTable::published().get(class);
            assert!(rates.validate().is_ok());
            assert!(!rates.has_inverted_tier());
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let table = RateTable::default();
        let (class, rates) = table.lookup("non-resident").unwrap();
        assert_eq!(class, ResidencyClass::NonResident);
        assert_eq!(rates.lower.first_10, 274.84);

        let err = table.lookup("international").unwrap_err();
        assert!(matches!(err, TuitionError::UnknownResidency(ref k) if k == "international"));
    }

    #[test]
    fn test_residency_round_trips_through_key() {
        for class in ResidencyClass::ALL {
            assert_eq!(class.as_str().parse::<ResidencyClass>().unwrap(), class);
        }
        assert_eq!(ResidencyClass::NonResident.to_string(), "non-resident");
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let rates = RateSet::new(100.0, 0.0, 110.0, 50.0);
        let message = rates.validate().unwrap_err();
        assert!(message.contains("lower_after_10"));

        let rates = RateSet::new(100.0, 50.0, f64::NAN, 50.0);
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_with_rates_overrides_one_class() {
        let custom = RateSet::new(1.0, 2.0, 3.0, 4.0);
        let table = RateTable::published().with_rates(ResidencyClass::Resident, custom);
        assert_eq!(table.get(ResidencyClass::Resident), &custom);
        assert_eq!(table.get(ResidencyClass::NonResident), &NON_RESIDENT_RATES);
        assert!(custom.has_inverted_tier());
    }
}
