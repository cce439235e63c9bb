//! Series extraction from a validated dataset.

use gts_ingest::Dataset;
use gts_model::{RawSeries, Result, SeriesError};

/// Extract the raw year/value series for one (country, variable) pair.
///
/// Takes the first matching row when duplicates exist. Each requested year
/// is read and coerced to a number; a blank or unparseable cell is recorded
/// as missing, never an error. Returns [`SeriesError::NotFound`] when no row
/// matches at all; a found-but-all-missing series is returned as-is so the
/// caller can report it separately from a missing row.
pub fn extract(
    dataset: &Dataset,
    country: &str,
    variable: &str,
    years: &[i32],
) -> Result<RawSeries> {
    let Some(row) = dataset.find_row(country, variable) else {
        return Err(SeriesError::NotFound {
            country: country.to_string(),
            variable: variable.to_string(),
        });
    };

    let mut series = RawSeries::new(country, variable);
    series.points = years
        .iter()
        .map(|&year| (year, dataset.year_value(row, year)))
        .collect();
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, NamedFrom, Series};

    fn dataset() -> Dataset {
        let df = DataFrame::new(vec![
            Series::new("Country".into(), vec!["Bolivia", "Bolivia"]).into(),
            Series::new("Variable name".into(), vec!["Real GDP", "Empty"]).into(),
            Series::new("1950".into(), vec!["100", ""]).into(),
            Series::new("1951".into(), vec!["110", ""]).into(),
        ])
        .unwrap();
        Dataset::from_dataframe(df).unwrap()
    }

    #[test]
    fn extracts_requested_years_in_order() {
        let series = extract(&dataset(), "Bolivia", "Real GDP", &[1950, 1951]).unwrap();
        assert_eq!(series.points, vec![(1950, Some(100.0)), (1951, Some(110.0))]);
    }

    #[test]
    fn absent_pair_is_not_found() {
        let err = extract(&dataset(), "Bolivia", "TFP", &[1950]).unwrap_err();
        assert!(matches!(err, SeriesError::NotFound { .. }));

        let err = extract(&dataset(), "Chile", "Real GDP", &[1950]).unwrap_err();
        assert!(matches!(err, SeriesError::NotFound { .. }));
    }

    #[test]
    fn all_blank_row_extracts_as_all_missing() {
        let series = extract(&dataset(), "Bolivia", "Empty", &[1950, 1951]).unwrap();
        assert!(series.is_all_missing());
        assert_eq!(series.points.len(), 2);
    }
}
