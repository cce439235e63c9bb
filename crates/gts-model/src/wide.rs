use serde::{Deserialize, Serialize};

/// One exported row: a year plus one optional cell per wide-table variable.
///
/// `cells[i]` pairs with `WideTable::variables[i]`. A `None` cell means the
/// variable had no value for this year; export keeps it missing rather than
/// zero-filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    pub year: i32,
    pub cells: Vec<Option<f64>>,
}

/// Year-by-variable table for export: one row per year, one column per
/// variable, rows unique and ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    pub country: String,
    pub variables: Vec<String>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Number of data rows (years).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Column index of a variable, if present.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == name)
    }

    /// The (year, value) pairs of one variable column, skipping missing cells.
    pub fn column_points(&self, name: &str) -> Option<Vec<(i32, f64)>> {
        let idx = self.variable_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.cells[idx].map(|value| (row.year, value)))
                .collect(),
        )
    }
}
