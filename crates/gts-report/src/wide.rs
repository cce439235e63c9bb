//! Long-to-wide pivot for export.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use gts_model::{Result, SeriesError, TransformedSeries, VariableOrder, WideRow, WideTable};

/// Pivot a set of per-variable series into one row-per-year table.
///
/// Column order is the canonical-order projection of the variables present;
/// series whose variable is not in the canonical list are excluded from the
/// export (an explicit policy, logged at debug level only). The row index is
/// the union of years across the exported series, ascending and unique; a
/// duplicate year inside one series is a contract violation and fails with
/// [`SeriesError::InconsistentSeries`]. Cells with no observation stay
/// missing; export never zero-fills.
pub fn build_wide_table(
    series: &[TransformedSeries],
    country: &str,
    order: &VariableOrder,
) -> Result<WideTable> {
    let mut by_variable: BTreeMap<&str, BTreeMap<i32, f64>> = BTreeMap::new();
    for one in series {
        let cells = by_variable.entry(one.variable.as_str()).or_default();
        for point in &one.points {
            if cells.insert(point.year, point.value).is_some() {
                return Err(SeriesError::InconsistentSeries {
                    variable: one.variable.clone(),
                    year: point.year,
                });
            }
        }
    }

    let present: Vec<&str> = series.iter().map(|s| s.variable.as_str()).collect();
    let variables = order.ordered_subset(present.iter().copied());
    for name in &present {
        if !variables.iter().any(|v| v.as_str() == *name) {
            debug!(variable = %name, "variable not in canonical order; excluded from export");
        }
    }

    let mut years = BTreeSet::new();
    for variable in &variables {
        if let Some(cells) = by_variable.get(variable.as_str()) {
            years.extend(cells.keys().copied());
        }
    }

    let rows = years
        .into_iter()
        .map(|year| WideRow {
            year,
            cells: variables
                .iter()
                .map(|variable| {
                    by_variable
                        .get(variable.as_str())
                        .and_then(|cells| cells.get(&year))
                        .copied()
                })
                .collect(),
        })
        .collect();

    Ok(WideTable {
        country: country.to_string(),
        variables,
        rows,
    })
}
