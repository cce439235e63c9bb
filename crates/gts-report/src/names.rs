//! Identifier sanitization for Stata output.

/// Sanitize a variable name into a valid Stata identifier.
///
/// Lowercase alphanumeric with single underscores for everything else,
/// prefixed with `v` when it would start with a digit, at most 32 bytes,
/// `var` when nothing survives.
pub fn stata_variable_name(raw: &str) -> String {
    let mut safe = String::with_capacity(raw.len());
    let mut last_was_underscore = true; // skip leading separators
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            safe.push(ch.to_ascii_lowercase());
            last_was_underscore = false;
        } else if !last_was_underscore {
            safe.push('_');
            last_was_underscore = true;
        }
    }
    if safe.ends_with('_') {
        safe.pop();
    }
    if safe.is_empty() {
        return "var".to_string();
    }
    if safe.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        safe.insert(0, 'v');
    }
    if safe.len() > 32 {
        safe.truncate(32);
    }
    safe
}

/// Sanitize a set of names, appending `_2`, `_3`, … to later collisions.
pub fn unique_stata_names<'a, I>(raw_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::BTreeSet::new();
    let mut names = Vec::new();
    for raw in raw_names {
        let base = stata_variable_name(raw);
        let mut candidate = base.clone();
        let mut counter = 2;
        while !seen.insert(candidate.clone()) {
            let suffix = format!("_{counter}");
            let mut next = base.clone();
            next.truncate(32 - suffix.len());
            if next.ends_with('_') {
                next.pop();
            }
            candidate = format!("{next}{suffix}");
            counter += 1;
        }
        names.push(candidate);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_variable_names() {
        assert_eq!(
            stata_variable_name("Real GDP at constant 2017 national prices (in mil. 2017US$)"),
            "real_gdp_at_constant_2017_nation"
        );
        assert_eq!(stata_variable_name("2017 prices"), "v2017_prices");
        assert_eq!(stata_variable_name("---"), "var");
    }

    #[test]
    fn collisions_get_numbered() {
        let names = unique_stata_names(["Real GDP", "Real? GDP", "Real GDP"]);
        assert_eq!(names, vec!["real_gdp", "real_gdp_2", "real_gdp_3"]);
    }
}
