//! Year-range filtering.

/// Restrict `all_years` to the inclusive interval `[start, end]`, ascending.
///
/// An inverted range (`start > end`) yields an empty result by construction,
/// not an error. An empty result is the caller's "no data in range" signal
/// and suppresses downstream computation for the request.
pub fn filter_years(all_years: &[i32], start: i32, end: i32) -> Vec<i32> {
    let mut years: Vec<i32> = all_years
        .iter()
        .copied()
        .filter(|year| (start..=end).contains(year))
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_interval() {
        let all: Vec<i32> = (1950..=2020).collect();
        let expected: Vec<i32> = (1960..=1970).collect();
        assert_eq!(filter_years(&all, 1960, 1970), expected);
    }

    #[test]
    fn disjoint_interval_is_empty() {
        let all: Vec<i32> = (1950..=2020).collect();
        assert!(filter_years(&all, 2025, 2030).is_empty());
    }

    #[test]
    fn inverted_interval_is_empty() {
        let all: Vec<i32> = (1950..=2020).collect();
        assert!(filter_years(&all, 1970, 1960).is_empty());
    }

    #[test]
    fn result_is_sorted_even_for_unsorted_input() {
        assert_eq!(filter_years(&[1952, 1950, 1951], 1950, 1951), vec![1950, 1951]);
    }
}
