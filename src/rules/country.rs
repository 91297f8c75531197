use super::{first_match, title_case, Matcher, Rule};

/// Placeholder for answers naming a region instead of a country
pub const NO_COUNTRY: &str = "[none entered]";

/// Checked in order against the lowercased answer
const COUNTRY_RULES: &[Rule<&str>] = &[
    Rule::new(Matcher::ContainsAfterStart("states"), "United States"),
    Rule::new(Matcher::Contains("oregon"), "United States"),
    Rule::new(Matcher::TrimmedEquals("us"), "United States"),
    Rule::new(Matcher::ContainsAfterStart("kingdom"), "United Kingdom"),
    Rule::new(Matcher::TrimmedEquals("uk"), "United Kingdom"),
    Rule::new(Matcher::Contains("india"), "India"),
    Rule::new(Matcher::Contains("netherl"), "The Netherlands"),
    Rule::new(Matcher::Contains("canada"), "Canada"),
    Rule::new(Matcher::Contains("germ"), "Germany"),
    Rule::new(Matcher::Exact("gernany"), "Germany"),
    Rule::new(Matcher::Contains("china"), "China"),
    Rule::new(Matcher::Contains("korea"), "South Korea"),
    Rule::new(Matcher::Contains("asia"), NO_COUNTRY),
    Rule::new(Matcher::Contains("europe"), NO_COUNTRY),
    Rule::new(Matcher::TrimmedEquals(NO_COUNTRY), NO_COUNTRY),
];

/// Canonical country name for a free-text answer.
///
/// Unrecognized answers are trimmed and title-cased.
pub fn canonicalize_country(value: &str) -> String {
    match first_match(COUNTRY_RULES, &value.to_lowercase()) {
        Some(country) => country.to_string(),
        None => title_case(value.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_spellings() {
        assert_eq!(canonicalize_country("oregon, usa"), "United States");
        assert_eq!(canonicalize_country("United states of America"), "United States");
        assert_eq!(canonicalize_country(" US "), "United States");
        assert_eq!(canonicalize_country("uk"), "United Kingdom");
        assert_eq!(canonicalize_country("The United Kingdom"), "United Kingdom");
        assert_eq!(canonicalize_country("netherlands"), "The Netherlands");
        assert_eq!(canonicalize_country("Gernany"), "Germany");
        assert_eq!(canonicalize_country("Republic of Korea"), "South Korea");
    }

    #[test]
    fn test_regions_are_not_countries() {
        assert_eq!(canonicalize_country("Asia (unspecified)"), NO_COUNTRY);
        assert_eq!(canonicalize_country("Europe"), NO_COUNTRY);
    }

    #[test]
    fn test_fallback_title_cases() {
        assert_eq!(canonicalize_country("  mexico "), "Mexico");
        assert_eq!(canonicalize_country("new zealand"), "New Zealand");
        // "states" at the very start is not treated as United States
        assert_eq!(canonicalize_country("states"), "States");
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        let inputs = [
            "oregon, usa",
            "uk",
            "India",
            "netherl",
            "canada",
            "germany",
            "china",
            "korea",
            "Asia (unspecified)",
            "  mexico ",
            "new ZEALAND",
            "",
        ];
        for input in inputs {
            let once = canonicalize_country(input);
            assert_eq!(canonicalize_country(&once), once, "input {:?}", input);
        }
    }
}
