//! The three value transformations.

use gts_model::{RawSeries, SeriesPoint, Transformation, TransformedSeries};

/// Apply a transformation to a raw series.
///
/// Returns the transformed series plus any data-quality warnings. Raw
/// zero-fills missing cells and drops nothing; Log and GrowthRate compute
/// first and then drop rows whose result is missing. Year order is
/// preserved throughout.
pub fn apply(series: &RawSeries, kind: Transformation) -> (TransformedSeries, Vec<String>) {
    match kind {
        Transformation::Raw => (apply_raw(series), Vec::new()),
        Transformation::Log => apply_log(series),
        Transformation::GrowthRate => (apply_growth_rate(series), Vec::new()),
    }
}

fn apply_raw(series: &RawSeries) -> TransformedSeries {
    let mut out = TransformedSeries::new(series.variable.clone());
    out.points = series
        .points
        .iter()
        .map(|&(year, value)| SeriesPoint {
            year,
            value: value.unwrap_or(0.0),
        })
        .collect();
    out
}

fn apply_log(series: &RawSeries) -> (TransformedSeries, Vec<String>) {
    let mut out = TransformedSeries::new(series.variable.clone());
    let mut saw_non_positive = false;
    for &(year, value) in &series.points {
        match value {
            Some(v) if v > 0.0 => out.points.push(SeriesPoint {
                year,
                value: v.ln(),
            }),
            Some(_) => saw_non_positive = true,
            None => {}
        }
    }
    // One warning per variable, no matter how many offending cells.
    let warnings = if saw_non_positive {
        vec![format!(
            "non-positive values for {:?} dropped before log transform",
            series.variable
        )]
    } else {
        Vec::new()
    };
    (out, warnings)
}

fn apply_growth_rate(series: &RawSeries) -> TransformedSeries {
    let mut out = TransformedSeries::new(series.variable.clone());
    let mut previous: Option<f64> = None;
    for &(year, value) in &series.points {
        // Change against the immediately preceding entry of the filtered
        // series; the first entry has no base and a zero or missing base
        // yields a missing result.
        if let (Some(base), Some(current)) = (previous, value)
            && base != 0.0
        {
            out.points.push(SeriesPoint {
                year,
                value: (current - base) / base * 100.0,
            });
        }
        previous = value;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(points: Vec<(i32, Option<f64>)>) -> RawSeries {
        let mut series = RawSeries::new("Bolivia", "Real GDP");
        series.points = points;
        series
    }

    #[test]
    fn raw_zero_fills_missing() {
        let (out, warnings) = apply(
            &raw(vec![(1950, Some(100.0)), (1951, Some(110.0)), (1952, None)]),
            Transformation::Raw,
        );
        assert!(warnings.is_empty());
        assert_eq!(
            out.points,
            vec![
                SeriesPoint { year: 1950, value: 100.0 },
                SeriesPoint { year: 1951, value: 110.0 },
                SeriesPoint { year: 1952, value: 0.0 },
            ]
        );
    }

    #[test]
    fn log_masks_non_positive_with_one_warning() {
        let (out, warnings) = apply(
            &raw(vec![
                (1950, Some(1.0)),
                (1951, Some(0.0)),
                (1952, Some(-5.0)),
                (1953, Some(std::f64::consts::E)),
                (1954, None),
            ]),
            Transformation::Log,
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Real GDP"));
        let years: Vec<i32> = out.years().collect();
        assert_eq!(years, vec![1950, 1953]);
        assert_eq!(out.points[0].value, 0.0);
        assert!((out.points[1].value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log_without_offenders_has_no_warning() {
        let (out, warnings) = apply(&raw(vec![(1950, Some(2.0))]), Transformation::Log);
        assert!(warnings.is_empty());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn growth_rate_drops_base_year_and_missing() {
        // The §8 scenario: {1950: 100, 1951: 110, 1952: missing}.
        let (out, warnings) = apply(
            &raw(vec![(1950, Some(100.0)), (1951, Some(110.0)), (1952, None)]),
            Transformation::GrowthRate,
        );
        assert!(warnings.is_empty());
        assert_eq!(out.points, vec![SeriesPoint { year: 1951, value: 10.0 }]);
    }

    #[test]
    fn growth_rate_of_constant_series_is_zero() {
        let points: Vec<(i32, Option<f64>)> =
            (1950..1960).map(|year| (year, Some(7.0))).collect();
        let (out, _) = apply(&raw(points), Transformation::GrowthRate);
        assert_eq!(out.len(), 9);
        assert!(out.points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn growth_rate_zero_base_is_missing() {
        let (out, _) = apply(
            &raw(vec![(1950, Some(0.0)), (1951, Some(5.0)), (1952, Some(10.0))]),
            Transformation::GrowthRate,
        );
        // 1951 has a zero base, 1952 divides by 5.
        assert_eq!(out.points, vec![SeriesPoint { year: 1952, value: 100.0 }]);
    }

    #[test]
    fn growth_rate_after_missing_gap_uses_previous_entry() {
        // 1952's base is the missing 1951, so 1952 is dropped; 1953's base is
        // the missing 1952, dropped too.
        let (out, _) = apply(
            &raw(vec![
                (1950, Some(100.0)),
                (1951, None),
                (1952, Some(120.0)),
                (1953, None),
            ]),
            Transformation::GrowthRate,
        );
        assert!(out.is_empty());
    }
}
