use thiserror::Error;

/// Error taxonomy for series extraction, transformation, and export.
///
/// `NotFound` and `EmptyResult` are recoverable: the batch pipeline turns
/// them into warnings and keeps processing the remaining variables.
/// `InconsistentSeries` is fatal to the export step only, and
/// `DatasetMalformed` is fatal at load time.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no row for variable {variable:?} in country {country:?}")]
    NotFound { country: String, variable: String },

    #[error("no usable values for {variable:?} in the selected year range")]
    EmptyResult { variable: String },

    #[error("duplicate year {year} in series for {variable:?}")]
    InconsistentSeries { variable: String, year: i32 },

    #[error("malformed dataset: {0}")]
    DatasetMalformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeriesError>;
