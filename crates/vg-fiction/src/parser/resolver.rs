//! Name suggestions with fuzzy matching.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// The candidate most similar to `input`, if any scores above the threshold.
pub fn closest<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(&input, &c.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

/// A `" Did you mean 'x'?"` suffix, or an empty string.
pub fn did_you_mean<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> String {
    closest(input, candidates)
        .map(|c| format!(" Did you mean '{c}'?"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_names_are_suggested() {
        let names = ["Captain Vorn", "Vorn Patroller", "Ralen"];
        assert_eq!(closest("captain vron", names), Some("Captain Vorn"));
        assert_eq!(closest("Raln", names), Some("Ralen"));
    }

    #[test]
    fn distant_names_are_not() {
        assert_eq!(closest("toaster", ["Captain Vorn"]), None);
        assert_eq!(did_you_mean("toaster", ["Captain Vorn"]), "");
    }

    #[test]
    fn suffix_format() {
        assert_eq!(
            did_you_mean("medkit", ["Medkit Case"]),
            " Did you mean 'Medkit Case'?"
        );
    }
}
