use super::{first_match, title_case, Matcher, Rule};

const COLLEAGUE_REPUTATION: &[Rule<&str>] = &[
    Rule::exact("I don't know / Prefer not to comment", "No comment"),
    Rule::new(Matcher::StartsWith("No"), "Not considered good"),
    Rule::new(Matcher::StartsWith("Yes"), "Considered good"),
];

const TRAINEE_BUCKETS: &[Rule<&str>] = &[
    Rule::exact("Less than 5", "<5"),
    Rule::exact("More than 20", ">15"),
    Rule::exact("15-20", ">15"),
];

pub const QUEER_NON_CONFORMING: &str = "Queer / Non-conforming";

/// How the mentor is seen by colleagues; unmatched answers pass through
pub fn colleague_reputation(value: &str) -> String {
    first_match(COLLEAGUE_REPUTATION, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Whether colleague reputation has a rule for this answer
pub fn is_known_reputation(value: &str) -> bool {
    first_match(COLLEAGUE_REPUTATION, value).is_some()
}

/// "Has the mentor ever asked for feedback", derived from the frequency
pub fn has_ever_asked_feedback(frequency: &str) -> &'static str {
    if frequency == "Never" { "No" } else { "Yes" }
}

/// Frequency answer with "More frequently" folded into "Frequently"
pub fn feedback_frequency(value: &str) -> String {
    if value == "More frequently" {
        "Frequently".to_string()
    } else {
        value.to_string()
    }
}

/// Discipline category without its parenthesized examples, title-cased.
///
/// Answers look like "Life sciences (e.g., ...)"; the space before the
/// parenthesis is dropped. Answers without a parenthesis are trimmed and
/// title-cased whole.
pub fn discipline(value: &str) -> String {
    match value.find('(') {
        Some(pos) => {
            let head = &value[..pos];
            let head = head
                .char_indices()
                .last()
                .map(|(i, _)| &head[..i])
                .unwrap_or(head);
            title_case(head)
        }
        None => title_case(value.trim()),
    }
}

/// Collapses the trainee-count answer into coarser buckets
pub fn trainee_bucket(value: &str) -> String {
    first_match(TRAINEE_BUCKETS, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Groups gender answers mentioning "queer" past the first character
pub fn gender(value: &str) -> String {
    if Matcher::ContainsAfterStart("queer").matches(&value.to_lowercase()) {
        QUEER_NON_CONFORMING.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colleague_reputation() {
        assert_eq!(
            colleague_reputation("I don't know / Prefer not to comment"),
            "No comment"
        );
        assert_eq!(colleague_reputation("No, not really"), "Not considered good");
        assert_eq!(colleague_reputation("Yes, definitely"), "Considered good");
        assert_eq!(colleague_reputation("Maybe"), "Maybe");
        assert!(!is_known_reputation("Maybe"));
    }

    #[test]
    fn test_feedback() {
        assert_eq!(has_ever_asked_feedback("Never"), "No");
        assert_eq!(has_ever_asked_feedback("Rarely"), "Yes");
        assert_eq!(has_ever_asked_feedback(""), "Yes");
        assert_eq!(feedback_frequency("More frequently"), "Frequently");
        assert_eq!(feedback_frequency("Rarely"), "Rarely");
    }

    #[test]
    fn test_discipline() {
        assert_eq!(
            discipline("life sciences (e.g., biology, ecology)"),
            "Life Sciences"
        );
        assert_eq!(discipline("PHYSICAL SCIENCES (physics)"), "Physical Sciences");
        assert_eq!(discipline(" engineering "), "Engineering");
        assert_eq!(discipline(""), "");
        assert_eq!(discipline("(none)"), "");
    }

    #[test]
    fn test_trainee_buckets() {
        assert_eq!(trainee_bucket("More than 20"), ">15");
        assert_eq!(trainee_bucket("15-20"), ">15");
        assert_eq!(trainee_bucket("Less than 5"), "<5");
        assert_eq!(trainee_bucket("5-10"), "5-10");
    }

    #[test]
    fn test_gender() {
        assert_eq!(gender("Genderqueer"), QUEER_NON_CONFORMING);
        assert_eq!(gender("Non-binary / QUEER"), QUEER_NON_CONFORMING);
        assert_eq!(gender("Queer"), "Queer");
        assert_eq!(gender("Woman"), "Woman");
    }
}
