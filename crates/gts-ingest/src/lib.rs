pub mod csv;
pub mod dataset;
pub mod value;

pub use csv::load_csv;
pub use dataset::Dataset;
pub use value::{any_to_f64, any_to_string, format_numeric, parse_f64};
