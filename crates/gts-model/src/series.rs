use serde::{Deserialize, Serialize};

/// Value transformation applied to an extracted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transformation {
    /// Values as stored in the source cell; missing cells become 0.
    Raw,
    /// Natural logarithm; non-positive inputs are masked to missing.
    Log,
    /// Year-over-year percent change against the previous filtered year.
    GrowthRate,
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Transformation::Raw => "raw",
            Transformation::Log => "log",
            Transformation::GrowthRate => "growth rate (%)",
        };
        f.write_str(label)
    }
}

/// A year/value series as read from the dataset, before any transformation.
///
/// Holds one entry per requested year. `None` means the source cell was
/// blank or failed numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    pub country: String,
    pub variable: String,
    pub points: Vec<(i32, Option<f64>)>,
}

impl RawSeries {
    pub fn new(country: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            variable: variable.into(),
            points: Vec::new(),
        }
    }

    /// True when every requested year is missing (the `EmptyResult` case).
    pub fn is_all_missing(&self) -> bool {
        self.points.iter().all(|(_, value)| value.is_none())
    }
}

/// A single transformed observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// A series after transformation, with missing rows already dropped.
///
/// Only `Transformation::Raw` keeps every requested year (it zero-fills
/// missing cells instead of dropping them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedSeries {
    pub variable: String,
    pub points: Vec<SeriesPoint>,
}

impl TransformedSeries {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Years covered by the series, in series order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_missing_detection() {
        let mut series = RawSeries::new("Bolivia (Plurinational State of)", "Real GDP");
        series.points = vec![(1950, None), (1951, None)];
        assert!(series.is_all_missing());

        series.points.push((1952, Some(1.0)));
        assert!(!series.is_all_missing());
    }

    #[test]
    fn transformation_labels() {
        assert_eq!(Transformation::Raw.to_string(), "raw");
        assert_eq!(Transformation::GrowthRate.to_string(), "growth rate (%)");
    }
}
