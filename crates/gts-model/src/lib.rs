pub mod error;
pub mod order;
pub mod processing;
pub mod series;
pub mod warnings;
pub mod wide;

pub use error::{Result, SeriesError};
pub use order::VariableOrder;
pub use processing::{SelectionRequest, SelectionResult};
pub use series::{RawSeries, SeriesPoint, Transformation, TransformedSeries};
pub use warnings::Warnings;
pub use wide::{WideRow, WideTable};

/// Name of the dataset column holding the country identifier.
pub const COUNTRY_COLUMN: &str = "Country";

/// Name of the dataset column holding the variable name.
pub const VARIABLE_COLUMN: &str = "Variable name";
