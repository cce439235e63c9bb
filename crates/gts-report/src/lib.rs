//! Export stage: long-to-wide pivot and serialization.
//!
//! [`build_wide_table`] turns the per-variable results of a selection into
//! one row-per-year table in canonical column order; [`write_wide_csv`] and
//! [`write_wide_dta`] serialize that table with identical contents.

pub mod csv;
pub mod dta;
pub mod names;
pub mod wide;

pub use csv::write_wide_csv;
pub use dta::write_wide_dta;
pub use names::{stata_variable_name, unique_stata_names};
pub use wide::build_wide_table;
