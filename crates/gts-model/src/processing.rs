use serde::{Deserialize, Serialize};

use crate::series::{Transformation, TransformedSeries};

/// One user selection: everything the pipeline needs for a single run.
///
/// Equal requests against the same dataset produce equal results; there is
/// no session state behind this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub country: String,
    /// Variables to extract, in request order.
    pub variables: Vec<String>,
    /// Inclusive year range. `start_year > end_year` yields an empty range.
    pub start_year: i32,
    pub end_year: i32,
    pub transformation: Transformation,
    /// Optional trailing moving-average window applied after transformation.
    pub smoothing_window: Option<usize>,
}

/// Result of one selection run: the surviving per-variable series plus the
/// deduplicated warnings gathered across all variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub country: String,
    pub transformation: Transformation,
    pub series: Vec<TransformedSeries>,
    pub warnings: Vec<String>,
}

impl SelectionResult {
    pub fn series_for(&self, variable: &str) -> Option<&TransformedSeries> {
        self.series.iter().find(|s| s.variable == variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_round_trips_through_json() {
        let request = SelectionRequest {
            country: "Bolivia (Plurinational State of)".to_string(),
            variables: vec!["Real GDP".to_string()],
            start_year: 1950,
            end_year: 1970,
            transformation: Transformation::GrowthRate,
            smoothing_window: Some(3),
        };
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: SelectionRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
    }
}
