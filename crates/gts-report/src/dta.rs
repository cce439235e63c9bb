//! Stata serialization of the wide table.

use std::path::Path;

use anyhow::{Context, Result};

use gts_dta::{DtaColumn, DtaDataset, DtaValue, write_dta};
use gts_model::WideTable;

use crate::names::unique_stata_names;

/// Maximum bytes of the country value stored in the `country` column;
/// one byte of the 244-byte field stays reserved for the terminator.
const COUNTRY_WIDTH_LIMIT: usize = 243;

/// Write a wide table as a Stata `.dta` file.
///
/// `year` is a long, `country` a fixed-width string, and each variable a
/// double whose Stata name is sanitized and whose original name travels as
/// the variable label. Missing cells become Stata system missing. Contents
/// match the CSV export exactly; only the encoding differs.
pub fn write_wide_dta(path: &Path, table: &WideTable) -> Result<()> {
    let dataset = build_dta_dataset(table);
    write_dta(path, &dataset).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn build_dta_dataset(table: &WideTable) -> DtaDataset {
    let mut country = table.country.clone();
    let mut end = COUNTRY_WIDTH_LIMIT.min(country.len());
    while !country.is_char_boundary(end) {
        end -= 1;
    }
    country.truncate(end);
    let country_width = (country.len() + 1).max(2) as u8;

    let mut columns = vec![
        DtaColumn::long("year").with_label("Year"),
        DtaColumn::string("country", country_width).with_label("Country"),
    ];
    let names = unique_stata_names(table.variables.iter().map(String::as_str));
    for (name, variable) in names.into_iter().zip(table.variables.iter()) {
        columns.push(DtaColumn::double(name).with_label(variable.clone()));
    }

    let mut dataset = DtaDataset::with_columns("growth accounting export", columns);
    for row in &table.rows {
        let mut values = vec![
            DtaValue::Int(Some(row.year)),
            DtaValue::string(country.clone()),
        ];
        values.extend(row.cells.iter().map(|cell| DtaValue::Num(*cell)));
        dataset.add_row(values);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use gts_model::WideRow;

    #[test]
    fn dataset_shape_matches_table() {
        let table = WideTable {
            country: "Bolivia (Plurinational State of)".to_string(),
            variables: vec!["Real GDP".to_string(), "Employment".to_string()],
            rows: vec![
                WideRow {
                    year: 1950,
                    cells: vec![Some(100.0), None],
                },
                WideRow {
                    year: 1951,
                    cells: vec![Some(110.0), Some(2.0)],
                },
            ],
        };
        let dataset = build_dta_dataset(&table);
        assert_eq!(dataset.num_columns(), 4);
        assert_eq!(dataset.columns[2].name, "real_gdp");
        assert_eq!(dataset.columns[2].label, "Real GDP");
        assert_eq!(dataset.num_rows(), 2);
        assert!(dataset.rows[0][3].is_missing());
    }
}
