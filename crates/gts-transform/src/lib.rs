//! Extraction, transformation, and the per-selection pipeline.
//!
//! The stages compose as
//! `filter_years` → `extract` → `apply` → (`moving_average`) → result,
//! all pure, synchronous functions over in-memory data. [`run_selection`]
//! drives the whole chain for a batch of variables and collects deduplicated
//! warnings instead of failing fast.

pub mod extract;
pub mod filter;
pub mod pipeline;
pub mod smooth;
pub mod stats;
pub mod transform;

pub use extract::extract;
pub use filter::filter_years;
pub use pipeline::run_selection;
pub use smooth::moving_average;
pub use stats::{SummaryStats, summarize};
pub use transform::apply;
