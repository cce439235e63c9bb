use serde::{Deserialize, Serialize};

/// Canonical display/export ordering of variable names.
///
/// This is injected configuration, not a property of the dataset: the export
/// stage projects the selected variables onto this list and keeps its order.
/// Variables absent from the list are excluded from ordered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableOrder {
    pub names: Vec<String>,
}

impl VariableOrder {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Default ordering for the growth-accounting dataset variables.
    pub fn default_growth_accounting() -> Self {
        Self::new(
            [
                "Real GDP at constant 2017 national prices (in mil. 2017US$)",
                "Number of persons engaged (in millions)",
                "Average annual hours worked by persons engaged",
                "Human capital index, based on years of schooling and returns to education",
                "Capital services at constant 2017 national prices (in mil. 2017US$)",
                "TFP at constant national prices (2017=1)",
                "Share of labour compensation in GDP at current national prices",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Project `present` onto the canonical ordering.
    ///
    /// Returns the canonical names that appear in `present`, in canonical
    /// order. Names in `present` that are not in the canonical list are
    /// dropped.
    pub fn ordered_subset<'a, I>(&self, present: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = present.into_iter().collect();
        self.names
            .iter()
            .filter(|name| present.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}
