//! CSV loading.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, SerReader};
use tracing::info;

use crate::dataset::Dataset;

/// Load a growth-accounting CSV into a validated [`Dataset`].
///
/// Schema inference is disabled so every cell arrives as a string; numeric
/// coercion happens per-cell in the extractor, where a failed parse becomes
/// a missing value instead of a load error.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open csv: {}", path.display()))?
        .finish()
        .with_context(|| format!("read csv: {}", path.display()))?;

    let dataset = Dataset::from_dataframe(df)
        .with_context(|| format!("validate dataset: {}", path.display()))?;
    info!(
        rows = dataset.height(),
        years = dataset.years().len(),
        "loaded dataset"
    );
    Ok(dataset)
}
