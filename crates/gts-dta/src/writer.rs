//! `.dta` file writer.
//!
//! Emits format 114 (Stata 10/11), little-endian. Every release of Stata
//! since then, and the usual statistical readers, open this format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DtaError, Result};
use crate::types::{
    DtaColumn, DtaDataset, DtaType, DtaValue, DtaWriterOptions, is_valid_variable_name,
};

/// Format release byte for dta version 114.
pub(crate) const RELEASE_114: u8 = 114;
/// Byte-order markers: high-to-low and low-to-high.
pub(crate) const BYTEORDER_MSF: u8 = 0x01;
pub(crate) const BYTEORDER_LSF: u8 = 0x02;

pub(crate) const DATA_LABEL_LEN: usize = 81;
pub(crate) const TIMESTAMP_LEN: usize = 18;
pub(crate) const NAME_LEN: usize = 33;
pub(crate) const FORMAT_LEN: usize = 49;
pub(crate) const VARIABLE_LABEL_LEN: usize = 81;

/// System missing (`.`) for 4-byte integers.
pub(crate) const LONG_MISSING: i32 = 0x7fff_ffe5;
/// Bit pattern of system missing (`.`) for doubles.
pub(crate) const DOUBLE_MISSING_BITS: u64 = 0x7fe0_0000_0000_0000;

/// `.dta` writer over any `Write` sink.
pub struct DtaWriter<W: Write> {
    writer: BufWriter<W>,
    options: DtaWriterOptions,
}

impl<W: Write> DtaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, DtaWriterOptions::default())
    }

    pub fn with_options(writer: W, options: DtaWriterOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
        }
    }

    /// Validate and write a dataset.
    pub fn write_dataset(mut self, dataset: &DtaDataset) -> Result<()> {
        validate_dataset(dataset)?;

        self.write_header(dataset)?;
        self.write_descriptors(dataset)?;
        self.write_variable_labels(dataset)?;
        // Empty expansion-field block: a zero type byte and zero length.
        self.writer.write_all(&[0u8; 5])?;
        self.write_observations(dataset)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self, dataset: &DtaDataset) -> Result<()> {
        self.writer.write_all(&[
            RELEASE_114,
            BYTEORDER_LSF,
            0x01, // filetype
            0x00, // unused
        ])?;
        self.writer
            .write_all(&(dataset.columns.len() as u16).to_le_bytes())?;
        self.writer
            .write_all(&(dataset.rows.len() as u32).to_le_bytes())?;
        self.writer
            .write_all(&zero_padded(&dataset.data_label, DATA_LABEL_LEN))?;

        let timestamp = self
            .options
            .timestamp
            .unwrap_or_else(|| chrono::Local::now().naive_local());
        let stamp = timestamp.format("%d %b %Y %H:%M").to_string();
        self.writer.write_all(&zero_padded(&stamp, TIMESTAMP_LEN))?;
        Ok(())
    }

    fn write_descriptors(&mut self, dataset: &DtaDataset) -> Result<()> {
        for column in &dataset.columns {
            self.writer.write_all(&[column.data_type.code()])?;
        }
        for column in &dataset.columns {
            self.writer
                .write_all(&zero_padded(&column.name, NAME_LEN))?;
        }
        // srtlist: no sort order recorded.
        self.writer
            .write_all(&vec![0u8; 2 * (dataset.columns.len() + 1)])?;
        for column in &dataset.columns {
            self.writer
                .write_all(&zero_padded(&column.data_type.display_format(), FORMAT_LEN))?;
        }
        // lbllist: no value labels attached.
        self.writer
            .write_all(&vec![0u8; NAME_LEN * dataset.columns.len()])?;
        Ok(())
    }

    fn write_variable_labels(&mut self, dataset: &DtaDataset) -> Result<()> {
        for column in &dataset.columns {
            self.writer
                .write_all(&zero_padded(&column.label, VARIABLE_LABEL_LEN))?;
        }
        Ok(())
    }

    fn write_observations(&mut self, dataset: &DtaDataset) -> Result<()> {
        for (row_idx, row) in dataset.rows.iter().enumerate() {
            for (value, column) in row.iter().zip(dataset.columns.iter()) {
                self.write_value(value, column, row_idx)?;
            }
        }
        Ok(())
    }

    fn write_value(&mut self, value: &DtaValue, column: &DtaColumn, row: usize) -> Result<()> {
        match (column.data_type, value) {
            (DtaType::Long, DtaValue::Int(v)) => {
                self.writer
                    .write_all(&v.unwrap_or(LONG_MISSING).to_le_bytes())?;
            }
            (DtaType::Double, DtaValue::Num(v)) => {
                let encoded = match v {
                    // Non-finite numbers are written as system missing.
                    Some(v) if v.is_finite() => *v,
                    _ => f64::from_bits(DOUBLE_MISSING_BITS),
                };
                self.writer.write_all(&encoded.to_le_bytes())?;
            }
            (DtaType::Str(width), DtaValue::Str(s)) => {
                self.writer.write_all(&zero_padded(s, width as usize))?;
            }
            _ => {
                return Err(DtaError::TypeMismatch {
                    row,
                    column: column.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Truncate to `len` bytes (leaving room for a terminator where the field is
/// text) and zero-fill the remainder.
fn zero_padded(text: &str, len: usize) -> Vec<u8> {
    let mut field = vec![0u8; len];
    let bytes = text.as_bytes();
    let take = bytes.len().min(len.saturating_sub(1));
    field[..take].copy_from_slice(&bytes[..take]);
    field
}

fn validate_dataset(dataset: &DtaDataset) -> Result<()> {
    if dataset.columns.is_empty() {
        return Err(DtaError::NoColumns);
    }
    if dataset.columns.len() > i16::MAX as usize {
        return Err(DtaError::TooManyVariables(dataset.columns.len()));
    }
    if dataset.rows.len() > i32::MAX as usize {
        return Err(DtaError::TooManyRows(dataset.rows.len()));
    }

    let mut seen = std::collections::BTreeSet::new();
    for column in &dataset.columns {
        if !is_valid_variable_name(&column.name) {
            return Err(DtaError::InvalidName(column.name.clone()));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(DtaError::DuplicateName(column.name.clone()));
        }
        if let DtaType::Str(width) = column.data_type
            && (width == 0 || width > 244)
        {
            return Err(DtaError::InvalidStringWidth {
                column: column.name.clone(),
                width,
            });
        }
    }

    for (row_idx, row) in dataset.rows.iter().enumerate() {
        if row.len() != dataset.columns.len() {
            return Err(DtaError::RowLengthMismatch {
                row: row_idx,
                expected: dataset.columns.len(),
                actual: row.len(),
            });
        }
        for (value, column) in row.iter().zip(dataset.columns.iter()) {
            match (column.data_type, value) {
                (DtaType::Long, DtaValue::Int(_))
                | (DtaType::Double, DtaValue::Num(_)) => {}
                (DtaType::Str(width), DtaValue::Str(s)) => {
                    // The last byte of the field is the terminator.
                    if s.len() > width as usize - 1 {
                        return Err(DtaError::StringTooLong {
                            row: row_idx,
                            column: column.name.clone(),
                            width,
                            actual: s.len(),
                        });
                    }
                }
                _ => {
                    return Err(DtaError::TypeMismatch {
                        row: row_idx,
                        column: column.name.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Write a dataset to a file with default options.
pub fn write_dta(path: &Path, dataset: &DtaDataset) -> Result<()> {
    write_dta_with_options(path, dataset, &DtaWriterOptions::default())
}

/// Write a dataset to a file.
pub fn write_dta_with_options(
    path: &Path,
    dataset: &DtaDataset,
    options: &DtaWriterOptions,
) -> Result<()> {
    let file = File::create(path)?;
    DtaWriter::with_options(file, options.clone()).write_dataset(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_dataset() -> DtaDataset {
        let mut ds = DtaDataset::with_columns(
            "growth accounting",
            vec![
                DtaColumn::long("year"),
                DtaColumn::double("rgdp").with_label("Real GDP"),
            ],
        );
        ds.add_row(vec![DtaValue::Int(Some(1950)), DtaValue::numeric(100.0)]);
        ds
    }

    #[test]
    fn rejects_invalid_names() {
        let mut ds = two_column_dataset();
        ds.columns[0].name = "real gdp".to_string();
        let err = DtaWriter::new(Vec::new()).write_dataset(&ds).unwrap_err();
        assert!(matches!(err, DtaError::InvalidName(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut ds = two_column_dataset();
        ds.columns[1].name = "year".to_string();
        let err = DtaWriter::new(Vec::new()).write_dataset(&ds).unwrap_err();
        assert!(matches!(err, DtaError::DuplicateName(_)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut ds = two_column_dataset();
        ds.add_row(vec![DtaValue::Int(Some(1951))]);
        let err = DtaWriter::new(Vec::new()).write_dataset(&ds).unwrap_err();
        assert!(matches!(err, DtaError::RowLengthMismatch { row: 1, .. }));
    }

    #[test]
    fn rejects_type_mismatch() {
        let mut ds = two_column_dataset();
        ds.add_row(vec![DtaValue::numeric(1951.0), DtaValue::numeric(1.0)]);
        let err = DtaWriter::new(Vec::new()).write_dataset(&ds).unwrap_err();
        assert!(matches!(err, DtaError::TypeMismatch { row: 1, .. }));
    }

    #[test]
    fn header_layout_is_stable() {
        let mut buf = Vec::new();
        let options = DtaWriterOptions {
            timestamp: chrono::NaiveDate::from_ymd_opt(2026, 8, 4)
                .unwrap()
                .and_hms_opt(12, 0, 0),
        };
        DtaWriter::with_options(&mut buf, options)
            .write_dataset(&two_column_dataset())
            .unwrap();

        assert_eq!(buf[0], RELEASE_114);
        assert_eq!(buf[1], BYTEORDER_LSF);
        assert_eq!(buf[2], 0x01);
        assert_eq!(u16::from_le_bytes([buf[4], buf[5]]), 2);
        assert_eq!(u32::from_le_bytes([buf[6], buf[7], buf[8], buf[9]]), 1);
        // typlist follows the 109-byte header.
        assert_eq!(buf[109], 253);
        assert_eq!(buf[110], 255);
    }
}
