//! In-memory dataset wrapper around a Polars DataFrame.
//!
//! A dataset is a table with a `Country` column, a `Variable name` column,
//! and one column per four-digit year. The year columns are discovered from
//! the header at construction time and form the universe of valid years for
//! every downstream request.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use gts_model::{COUNTRY_COLUMN, Result, SeriesError, VARIABLE_COLUMN};

use crate::value::{any_to_f64, any_to_string};

/// A year column discovered from the dataset header.
#[derive(Debug, Clone)]
struct YearColumn {
    year: i32,
    /// Header as it appears in the frame (may carry whitespace or a BOM).
    column: String,
}

/// A validated growth-accounting dataset.
///
/// Read-only for its lifetime; reloading a source file replaces the whole
/// value rather than mutating it.
#[derive(Debug, Clone)]
pub struct Dataset {
    data: DataFrame,
    country_column: String,
    variable_column: String,
    year_columns: Vec<YearColumn>,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn parse_year_header(raw: &str) -> Option<i32> {
    let trimmed = normalize_header(raw);
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.parse::<i32>().ok()
    } else {
        None
    }
}

impl Dataset {
    /// Validate a frame and discover its year columns.
    ///
    /// Fails with [`SeriesError::DatasetMalformed`] when the `Country` or
    /// `Variable name` column is absent, or when no header parses as a
    /// four-digit year. Load-time failure blocks all downstream computation.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let mut country_column = None;
        let mut variable_column = None;
        let mut year_columns = Vec::new();

        for name in data.get_column_names_owned() {
            let raw = name.to_string();
            match normalize_header(&raw) {
                COUNTRY_COLUMN => country_column = Some(raw),
                VARIABLE_COLUMN => variable_column = Some(raw),
                _ => {
                    if let Some(year) = parse_year_header(&raw) {
                        year_columns.push(YearColumn { year, column: raw });
                    }
                }
            }
        }

        let country_column = country_column.ok_or_else(|| {
            SeriesError::DatasetMalformed(format!("missing required column {COUNTRY_COLUMN:?}"))
        })?;
        let variable_column = variable_column.ok_or_else(|| {
            SeriesError::DatasetMalformed(format!("missing required column {VARIABLE_COLUMN:?}"))
        })?;
        if year_columns.is_empty() {
            return Err(SeriesError::DatasetMalformed(
                "no four-digit year columns found in header".to_string(),
            ));
        }
        year_columns.sort_by_key(|col| col.year);

        debug!(
            rows = data.height(),
            years = year_columns.len(),
            "dataset validated"
        );

        Ok(Self {
            data,
            country_column,
            variable_column,
            year_columns,
        })
    }

    /// Number of rows in the backing table.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// All discovered years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.year_columns.iter().map(|col| col.year).collect()
    }

    fn column_cell(&self, column: &str, row: usize) -> AnyValue<'_> {
        match self.data.column(column) {
            Ok(series) => series.get(row).unwrap_or(AnyValue::Null),
            Err(_) => AnyValue::Null,
        }
    }

    /// Unique countries in first-appearance order.
    pub fn countries(&self) -> Vec<String> {
        self.unique_column_values(&self.country_column, None)
    }

    /// Unique variable names for one country, in first-appearance order.
    pub fn variables(&self, country: &str) -> Vec<String> {
        self.unique_column_values(&self.variable_column, Some(country))
    }

    fn unique_column_values(&self, column: &str, country: Option<&str>) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut values = Vec::new();
        for row in 0..self.height() {
            if let Some(filter) = country {
                let cell = any_to_string(self.column_cell(&self.country_column, row));
                if cell.trim() != filter {
                    continue;
                }
            }
            let value = any_to_string(self.column_cell(column, row));
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if seen.insert(value.to_string()) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Index of the first row matching (country, variable) exactly.
    ///
    /// Matching is case-sensitive on whitespace-trimmed cell values. When the
    /// dataset holds duplicate rows for the same pair, the first one wins;
    /// the extractor documents this as an explicit policy rather than
    /// deduplicating.
    pub fn find_row(&self, country: &str, variable: &str) -> Option<usize> {
        for row in 0..self.height() {
            let row_country = any_to_string(self.column_cell(&self.country_column, row));
            if row_country.trim() != country {
                continue;
            }
            let row_variable = any_to_string(self.column_cell(&self.variable_column, row));
            if row_variable.trim() == variable {
                return Some(row);
            }
        }
        None
    }

    /// The numeric value of one (row, year) cell.
    ///
    /// Returns `None` when the year is outside the discovered set, the cell
    /// is blank, or numeric coercion fails. Never errors.
    pub fn year_value(&self, row: usize, year: i32) -> Option<f64> {
        let column = self
            .year_columns
            .iter()
            .find(|col| col.year == year)
            .map(|col| col.column.as_str())?;
        any_to_f64(self.column_cell(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Country".into(), vec!["Bolivia", "Bolivia", "Chile"]).into(),
            Series::new("Variable name".into(), vec!["Real GDP", "Employment", "Real GDP"]).into(),
            Series::new("1950".into(), vec!["100", "", "50"]).into(),
            Series::new("1951".into(), vec!["110", "2.5", "not a number"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn discovers_year_columns_sorted() {
        let dataset = Dataset::from_dataframe(sample_frame()).unwrap();
        assert_eq!(dataset.years(), vec![1950, 1951]);
    }

    #[test]
    fn rejects_frame_without_year_columns() {
        let df = DataFrame::new(vec![
            Series::new("Country".into(), vec!["Bolivia"]).into(),
            Series::new("Variable name".into(), vec!["Real GDP"]).into(),
        ])
        .unwrap();
        let err = Dataset::from_dataframe(df).unwrap_err();
        assert!(matches!(err, SeriesError::DatasetMalformed(_)));
    }

    #[test]
    fn rejects_frame_without_country_column() {
        let df = DataFrame::new(vec![
            Series::new("Variable name".into(), vec!["Real GDP"]).into(),
            Series::new("1950".into(), vec!["100"]).into(),
        ])
        .unwrap();
        let err = Dataset::from_dataframe(df).unwrap_err();
        assert!(matches!(err, SeriesError::DatasetMalformed(_)));
    }

    #[test]
    fn first_match_wins_for_duplicate_rows() {
        let df = DataFrame::new(vec![
            Series::new("Country".into(), vec!["Bolivia", "Bolivia"]).into(),
            Series::new("Variable name".into(), vec!["Real GDP", "Real GDP"]).into(),
            Series::new("1950".into(), vec!["100", "999"]).into(),
        ])
        .unwrap();
        let dataset = Dataset::from_dataframe(df).unwrap();
        let row = dataset.find_row("Bolivia", "Real GDP").unwrap();
        assert_eq!(row, 0);
        assert_eq!(dataset.year_value(row, 1950), Some(100.0));
    }

    #[test]
    fn cell_coercion_failures_are_missing() {
        let dataset = Dataset::from_dataframe(sample_frame()).unwrap();
        let chile = dataset.find_row("Chile", "Real GDP").unwrap();
        assert_eq!(dataset.year_value(chile, 1950), Some(50.0));
        assert_eq!(dataset.year_value(chile, 1951), None);

        let employment = dataset.find_row("Bolivia", "Employment").unwrap();
        assert_eq!(dataset.year_value(employment, 1950), None);
        assert_eq!(dataset.year_value(employment, 1951), Some(2.5));
    }

    #[test]
    fn unknown_year_is_missing() {
        let dataset = Dataset::from_dataframe(sample_frame()).unwrap();
        assert_eq!(dataset.year_value(0, 1999), None);
    }

    #[test]
    fn countries_and_variables_listings() {
        let dataset = Dataset::from_dataframe(sample_frame()).unwrap();
        assert_eq!(dataset.countries(), vec!["Bolivia", "Chile"]);
        assert_eq!(dataset.variables("Bolivia"), vec!["Real GDP", "Employment"]);
        assert_eq!(dataset.variables("Chile"), vec!["Real GDP"]);
    }
}
