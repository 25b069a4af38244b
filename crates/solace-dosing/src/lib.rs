//! solace-dosing
//!
//! Weight-based dosing from human-authored dose strings: parsing
//! ("0.05-0.1 mg/kg/dose", "75 mg/kg/day (max 4g/day)"), scaling by weight,
//! clinically practical rounding and ceiling checks. Also carries the
//! medication formulary the dose strings come from.

pub mod calculate;
pub mod error;
pub mod formulary;
pub mod parse;
pub mod rounding;
pub mod table;
pub mod units;
pub mod weight;

pub use calculate::{CalculatedDose, calculate};
pub use parse::{MaxDoseBasis, ParsedDoseRange, ParsedMaxDose, parse_dose_range, parse_max_dose_limit};
pub use rounding::practical_round;
pub use table::{DoseRow, DoseTable, dose_table};
pub use units::DoseUnit;
