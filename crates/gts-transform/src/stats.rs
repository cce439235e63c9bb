//! Per-series summary statistics.

use serde::{Deserialize, Serialize};

use gts_model::TransformedSeries;

/// Descriptive statistics of one transformed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` below two observations.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Summarize a series; `None` when it has no points.
pub fn summarize(series: &TransformedSeries) -> Option<SummaryStats> {
    if series.is_empty() {
        return None;
    }
    let count = series.len();
    let values = series.points.iter().map(|p| p.value);
    let sum: f64 = values.clone().sum();
    let mean = sum / count as f64;
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = if count >= 2 {
        let squared: f64 = values.map(|v| (v - mean).powi(2)).sum();
        Some((squared / (count - 1) as f64).sqrt())
    } else {
        None
    };
    Some(SummaryStats {
        count,
        mean,
        std_dev,
        min,
        max,
    })
}
