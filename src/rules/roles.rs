use super::{first_match, Rule};

/// Short labels for the career-stage answers
const ROLE_LABELS: &[Rule<&str>] = &[
    Rule::exact("an Associate Professor (or equivalent)", "Associate Prof"),
    Rule::exact("a Graduate Student", "Grad student"),
    Rule::exact("a Postdoctoral Researcher", "Postdoc"),
    Rule::exact("an Assistant Professor (or equivalent)", "Assistant Prof"),
    Rule::exact("an Assistant Professor  (or equivalent)", "Assistant Prof"),
    Rule::exact("a Professor (or equivalent)", "Full Prof"),
    Rule::exact("working in academia as a non-ECR", "Non-ECR academic"),
    Rule::exact("other / prefer not to say", "Other"),
];

pub const ACADEMIC_ECR: &str = "Academic (ECR)";
pub const ACADEMIC_NON_ECR: &str = "Academic (Non-ECR)";
pub const NON_ACADEMIC: &str = "Non-Academic";

/// Coarse grouping of the respondent's current position
const ROLE_SUMMARIES: &[Rule<&str>] = &[
    Rule::exact("an Associate Professor (or equivalent)", ACADEMIC_NON_ECR),
    Rule::exact("a Graduate Student", ACADEMIC_ECR),
    Rule::exact("a Postdoctoral Researcher", ACADEMIC_ECR),
    Rule::exact("an Assistant Professor (or equivalent)", ACADEMIC_NON_ECR),
    Rule::exact("an Assistant Professor  (or equivalent)", ACADEMIC_NON_ECR),
    Rule::exact("a Professor (or equivalent)", ACADEMIC_NON_ECR),
    Rule::exact("working in academia as a non-ECR", ACADEMIC_NON_ECR),
    Rule::exact("other / prefer not to say", NON_ACADEMIC),
    Rule::exact("working in industry", NON_ACADEMIC),
];

/// Short role label; unknown roles pass through unchanged
pub fn role_label(value: &str) -> String {
    first_match(ROLE_LABELS, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// ECR / non-ECR / non-academic grouping; unknown roles pass through
pub fn role_summary(value: &str) -> String {
    first_match(ROLE_SUMMARIES, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
