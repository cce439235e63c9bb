//! `.dta` file reader.
//!
//! Parses the format-114 subset this crate writes (long, double, and
//! fixed-width string variables, no value labels), in either byte order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{DtaError, Result};
use crate::types::{DtaColumn, DtaDataset, DtaType, DtaValue};
use crate::writer::{
    BYTEORDER_LSF, BYTEORDER_MSF, DATA_LABEL_LEN, DOUBLE_MISSING_BITS, FORMAT_LEN, LONG_MISSING,
    NAME_LEN, RELEASE_114, TIMESTAMP_LEN, VARIABLE_LABEL_LEN,
};

/// `.dta` reader over any `Read` source.
pub struct DtaReader<R: Read> {
    reader: BufReader<R>,
    little_endian: bool,
}

impl<R: Read> DtaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            little_endian: true,
        }
    }

    /// Read the whole dataset.
    pub fn read_dataset(mut self) -> Result<DtaDataset> {
        let (nvar, nobs, data_label) = self.read_header()?;
        let mut columns = self.read_descriptors(nvar)?;
        self.read_variable_labels(&mut columns)?;
        self.skip_expansion_fields()?;
        let rows = self.read_observations(&columns, nobs)?;
        Ok(DtaDataset {
            data_label,
            columns,
            rows,
        })
    }

    fn read_header(&mut self) -> Result<(usize, usize, String)> {
        let mut prefix = [0u8; 4];
        self.read_exact(&mut prefix, "header")?;
        if prefix[0] != RELEASE_114 {
            return Err(DtaError::UnsupportedRelease(prefix[0]));
        }
        self.little_endian = match prefix[1] {
            BYTEORDER_LSF => true,
            BYTEORDER_MSF => false,
            other => return Err(DtaError::InvalidByteOrder(other)),
        };

        let nvar = self.read_u16()? as usize;
        let nobs = self.read_u32()? as usize;

        let mut label = [0u8; DATA_LABEL_LEN];
        self.read_exact(&mut label, "data label")?;
        let data_label = field_string(&label);

        let mut stamp = [0u8; TIMESTAMP_LEN];
        self.read_exact(&mut stamp, "timestamp")?;

        Ok((nvar, nobs, data_label))
    }

    fn read_descriptors(&mut self, nvar: usize) -> Result<Vec<DtaColumn>> {
        let mut type_codes = vec![0u8; nvar];
        self.read_exact(&mut type_codes, "typlist")?;
        let mut columns = Vec::with_capacity(nvar);
        for code in type_codes {
            let data_type =
                DtaType::from_code(code).ok_or(DtaError::UnsupportedType(code))?;
            columns.push(DtaColumn {
                name: String::new(),
                label: String::new(),
                data_type,
            });
        }

        for column in &mut columns {
            let mut name = [0u8; NAME_LEN];
            self.read_exact(&mut name, "varlist")?;
            column.name = field_string(&name);
        }

        self.skip(2 * (nvar + 1), "srtlist")?;
        self.skip(FORMAT_LEN * nvar, "fmtlist")?;
        self.skip(NAME_LEN * nvar, "lbllist")?;
        Ok(columns)
    }

    fn read_variable_labels(&mut self, columns: &mut [DtaColumn]) -> Result<()> {
        for column in columns {
            let mut label = [0u8; VARIABLE_LABEL_LEN];
            self.read_exact(&mut label, "variable labels")?;
            column.label = field_string(&label);
        }
        Ok(())
    }

    fn skip_expansion_fields(&mut self) -> Result<()> {
        loop {
            let mut ty = [0u8; 1];
            self.read_exact(&mut ty, "expansion field")?;
            let len = self.read_u32()? as usize;
            if ty[0] == 0 && len == 0 {
                return Ok(());
            }
            self.skip(len, "expansion field")?;
        }
    }

    fn read_observations(
        &mut self,
        columns: &[DtaColumn],
        nobs: usize,
    ) -> Result<Vec<Vec<DtaValue>>> {
        let mut rows = Vec::with_capacity(nobs);
        for _ in 0..nobs {
            let mut row = Vec::with_capacity(columns.len());
            for column in columns {
                row.push(self.read_value(column.data_type)?);
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn read_value(&mut self, data_type: DtaType) -> Result<DtaValue> {
        match data_type {
            DtaType::Long => {
                let raw = self.read_u32()? as i32;
                // Values from `.` upward are the missing range.
                let value = if raw >= LONG_MISSING { None } else { Some(raw) };
                Ok(DtaValue::Int(value))
            }
            DtaType::Double => {
                let mut buf = [0u8; 8];
                self.read_exact(&mut buf, "observation")?;
                let bits = if self.little_endian {
                    u64::from_le_bytes(buf)
                } else {
                    u64::from_be_bytes(buf)
                };
                let value = if bits >= DOUBLE_MISSING_BITS && bits < 1u64 << 63 {
                    None
                } else {
                    Some(f64::from_bits(bits))
                };
                Ok(DtaValue::Num(value))
            }
            DtaType::Str(width) => {
                let mut buf = vec![0u8; width as usize];
                self.read_exact(&mut buf, "observation")?;
                Ok(DtaValue::Str(field_string(&buf)))
            }
        }
    }

    fn read_exact(&mut self, buf: &mut [u8], what: &'static str) -> Result<()> {
        self.reader
            .read_exact(buf)
            .map_err(|_| DtaError::Truncated(what))
    }

    fn skip(&mut self, len: usize, what: &'static str) -> Result<()> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf, what)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf, "header")?;
        Ok(if self.little_endian {
            u16::from_le_bytes(buf)
        } else {
            u16::from_be_bytes(buf)
        })
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf, "header")?;
        Ok(if self.little_endian {
            u32::from_le_bytes(buf)
        } else {
            u32::from_be_bytes(buf)
        })
    }
}

/// Decode a zero-terminated fixed-width text field.
fn field_string(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Read a dataset from a file.
pub fn read_dta(path: &Path) -> Result<DtaDataset> {
    let file = File::open(path)?;
    DtaReader::new(file).read_dataset()
}
