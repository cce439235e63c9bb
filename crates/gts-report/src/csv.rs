//! CSV serialization of the wide table.

use std::path::Path;

use anyhow::{Context, Result};

use gts_ingest::format_numeric;
use gts_model::WideTable;

/// Write a wide table as CSV: `Year,Country,<variables…>`.
///
/// Missing cells become empty fields; numbers are formatted without
/// trailing zeros.
pub fn write_wide_csv(path: &Path, table: &WideTable) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    let mut header = vec!["Year".to_string(), "Country".to_string()];
    header.extend(table.variables.iter().cloned());
    writer
        .write_record(&header)
        .with_context(|| format!("write header: {}", path.display()))?;

    for row in &table.rows {
        let mut record = vec![row.year.to_string(), table.country.clone()];
        record.extend(
            row.cells
                .iter()
                .map(|cell| cell.map(format_numeric).unwrap_or_default()),
        );
        writer
            .write_record(&record)
            .with_context(|| format!("write row {}: {}", row.year, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
