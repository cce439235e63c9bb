//! Moving-average smoothing.

use gts_model::{SeriesPoint, TransformedSeries};

/// Trailing moving average over the last `window` points of a series.
///
/// Windows run over series positions, not calendar years: rows dropped by a
/// transformation leave gaps that the window spans. Each output point keeps
/// the year of the window's last observation. A window of 0 or 1 is the
/// identity; a series shorter than the window yields an empty series plus
/// one warning.
pub fn moving_average(
    series: &TransformedSeries,
    window: usize,
) -> (TransformedSeries, Vec<String>) {
    if window <= 1 {
        return (series.clone(), Vec::new());
    }

    let mut out = TransformedSeries::new(series.variable.clone());
    if series.len() < window {
        let warning = format!(
            "{:?} has fewer than {} observations; moving average produced no points",
            series.variable, window
        );
        return (out, vec![warning]);
    }

    for end in (window - 1)..series.len() {
        let slice = &series.points[end + 1 - window..=end];
        let sum: f64 = slice.iter().map(|p| p.value).sum();
        out.points.push(SeriesPoint {
            year: slice[window - 1].year,
            value: sum / window as f64,
        });
    }
    (out, Vec::new())
}
