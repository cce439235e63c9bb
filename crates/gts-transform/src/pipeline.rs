//! The batch selection pipeline.
//!
//! One call per user selection: range-filter the year universe, then for
//! each requested variable extract, transform, and optionally smooth. A
//! failure for one variable never aborts the rest; everything recoverable
//! becomes a warning on the result, deduplicated across the batch.

use tracing::debug;

use gts_ingest::Dataset;
use gts_model::{SelectionRequest, SelectionResult, SeriesError, Warnings};

use crate::extract::extract;
use crate::filter::filter_years;
use crate::smooth::moving_average;
use crate::transform::apply;

/// Run one selection against a dataset.
///
/// Pure with respect to its inputs: the same dataset and request always
/// produce the same result.
pub fn run_selection(dataset: &Dataset, request: &SelectionRequest) -> SelectionResult {
    let mut warnings = Warnings::new();
    let mut series_out = Vec::new();

    let all_years = dataset.years();
    let years = filter_years(&all_years, request.start_year, request.end_year);
    if years.is_empty() {
        warnings.push(format!(
            "no year columns between {} and {} in the dataset",
            request.start_year, request.end_year
        ));
        return SelectionResult {
            country: request.country.clone(),
            transformation: request.transformation,
            series: series_out,
            warnings: warnings.into_vec(),
        };
    }
    debug!(
        country = %request.country,
        years = years.len(),
        variables = request.variables.len(),
        "running selection"
    );

    for variable in &request.variables {
        let raw = match extract(dataset, &request.country, variable, &years) {
            Ok(raw) => raw,
            Err(error) => {
                warnings.push(error.to_string());
                continue;
            }
        };
        if raw.is_all_missing() {
            warnings.push(
                SeriesError::EmptyResult {
                    variable: variable.clone(),
                }
                .to_string(),
            );
            continue;
        }

        let (transformed, notes) = apply(&raw, request.transformation);
        warnings.extend(notes);

        let transformed = match request.smoothing_window {
            Some(window) => {
                let (smoothed, notes) = moving_average(&transformed, window);
                warnings.extend(notes);
                smoothed
            }
            None => transformed,
        };

        if transformed.is_empty() {
            warnings.push(format!(
                "no observations remain for {:?} after {} transform",
                variable, request.transformation
            ));
            continue;
        }
        debug!(variable = %variable, points = transformed.len(), "variable processed");
        series_out.push(transformed);
    }

    SelectionResult {
        country: request.country.clone(),
        transformation: request.transformation,
        series: series_out,
        warnings: warnings.into_vec(),
    }
}
