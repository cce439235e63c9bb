//! Error types for the gts-dta crate.

use thiserror::Error;

/// Errors raised while writing or reading a `.dta` file.
#[derive(Debug, Error)]
pub enum DtaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset has no columns")]
    NoColumns,

    #[error("too many variables: {0} (format limit is 32767)")]
    TooManyVariables(usize),

    #[error("too many observations: {0}")]
    TooManyRows(usize),

    #[error("invalid variable name {0:?}")]
    InvalidName(String),

    #[error("duplicate variable name {0:?}")]
    DuplicateName(String),

    #[error("invalid string width {width} for column {column:?} (must be 1-244)")]
    InvalidStringWidth { column: String, width: u8 },

    #[error("row {row} has {actual} values, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("value in row {row}, column {column:?} does not match the column type")]
    TypeMismatch { row: usize, column: String },

    #[error("string in row {row}, column {column:?} is {actual} bytes, width is {width}")]
    StringTooLong {
        row: usize,
        column: String,
        width: u8,
        actual: usize,
    },

    #[error("not a supported .dta file: release byte {0}")]
    UnsupportedRelease(u8),

    #[error("invalid byte-order marker {0:#04x}")]
    InvalidByteOrder(u8),

    #[error("unsupported variable type code {0}")]
    UnsupportedType(u8),

    #[error("file truncated while reading {0}")]
    Truncated(&'static str),
}

pub type Result<T> = std::result::Result<T, DtaError>;
