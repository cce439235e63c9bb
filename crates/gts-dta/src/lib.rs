//! Stata `.dta` (format 114) writer and reader.
//!
//! Covers the subset this workspace exports: long, double, and fixed-width
//! string variables with variable labels, system missing values, and no
//! value labels. Written files are little-endian; the reader accepts both
//! byte orders.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gts_dta::{DtaColumn, DtaDataset, DtaValue, read_dta, write_dta};
//!
//! let mut ds = DtaDataset::with_columns(
//!     "growth accounting export",
//!     vec![
//!         DtaColumn::long("year"),
//!         DtaColumn::double("rgdp").with_label("Real GDP"),
//!     ],
//! );
//! ds.add_row(vec![DtaValue::Int(Some(1950)), DtaValue::numeric(100.0)]);
//! write_dta(Path::new("out.dta"), &ds).unwrap();
//!
//! let back = read_dta(Path::new("out.dta")).unwrap();
//! assert_eq!(back.num_rows(), 1);
//! ```

mod error;
mod reader;
mod types;
mod writer;

pub use error::{DtaError, Result};
pub use reader::{DtaReader, read_dta};
pub use types::{
    DtaColumn, DtaDataset, DtaType, DtaValue, DtaWriterOptions, is_valid_variable_name,
};
pub use writer::{DtaWriter, write_dta, write_dta_with_options};
