//! Dataset, column, and value types for `.dta` files.

use chrono::NaiveDateTime;

/// Storage type of one `.dta` column.
///
/// The subset used by this crate: 4-byte integers, 8-byte doubles, and
/// fixed-width strings of 1 to 244 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtaType {
    Long,
    Double,
    Str(u8),
}

impl DtaType {
    /// Type code as stored in the file's typlist.
    pub(crate) fn code(self) -> u8 {
        match self {
            DtaType::Str(width) => width,
            DtaType::Long => 253,
            DtaType::Double => 255,
        }
    }

    /// Width of one value of this type in the data section, in bytes.
    pub(crate) fn width(self) -> usize {
        match self {
            DtaType::Str(width) => width as usize,
            DtaType::Long => 4,
            DtaType::Double => 8,
        }
    }

    /// Stata display format for this type.
    pub(crate) fn display_format(self) -> String {
        match self {
            DtaType::Str(width) => format!("%{width}s"),
            DtaType::Long => "%12.0g".to_string(),
            DtaType::Double => "%10.0g".to_string(),
        }
    }

    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=244 => Some(DtaType::Str(code)),
            253 => Some(DtaType::Long),
            255 => Some(DtaType::Double),
            _ => None,
        }
    }
}

/// One cell value. `None` inside `Int`/`Num` is Stata system missing (`.`).
#[derive(Debug, Clone, PartialEq)]
pub enum DtaValue {
    Int(Option<i32>),
    Num(Option<f64>),
    Str(String),
}

impl DtaValue {
    pub fn numeric(value: f64) -> Self {
        DtaValue::Num(Some(value))
    }

    pub fn numeric_missing() -> Self {
        DtaValue::Num(None)
    }

    pub fn string(value: impl Into<String>) -> Self {
        DtaValue::Str(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DtaValue::Int(None) | DtaValue::Num(None))
    }
}

/// One column: name, label, and storage type.
#[derive(Debug, Clone, PartialEq)]
pub struct DtaColumn {
    pub name: String,
    pub label: String,
    pub data_type: DtaType,
}

impl DtaColumn {
    pub fn long(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            data_type: DtaType::Long,
        }
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            data_type: DtaType::Double,
        }
    }

    pub fn string(name: impl Into<String>, width: u8) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            data_type: DtaType::Str(width),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// An in-memory `.dta` dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DtaDataset {
    /// Dataset label, truncated to 80 bytes on write.
    pub data_label: String,
    pub columns: Vec<DtaColumn>,
    pub rows: Vec<Vec<DtaValue>>,
}

impl DtaDataset {
    pub fn with_columns(data_label: impl Into<String>, columns: Vec<DtaColumn>) -> Self {
        Self {
            data_label: data_label.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<DtaValue>) {
        self.rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Writer options.
#[derive(Debug, Clone, Default)]
pub struct DtaWriterOptions {
    /// Header timestamp; the current local time when unset. Fixing it makes
    /// output byte-for-byte reproducible.
    pub timestamp: Option<NaiveDateTime>,
}

/// Whether a variable name is acceptable to Stata: ASCII letters, digits,
/// and underscores, not starting with a digit, at most 32 bytes.
pub fn is_valid_variable_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 32 {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
