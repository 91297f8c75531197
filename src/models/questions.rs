use std::collections::HashMap;

/// Short field names used throughout the cleaned table
pub mod field {
    pub const TIMESTAMP: &str = "timestamp";
    pub const MENTEE_CURRENT: &str = "mentee_current";
    pub const MENTEE_CURRENT_SUMMARY: &str = "mentee_current_summary";
    pub const MENTEE_THEN: &str = "mentee_then";
    pub const MENTOR_THEN: &str = "mentor_then";
    pub const DISCIPLINE: &str = "discipline";
    pub const EXPERTISE: &str = "expertise";
    pub const MENTEE_GENDER: &str = "mentee_gender";
    pub const MENTOR_GENDER: &str = "mentor_gender";
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const MENTEE_MINORITY: &str = "mentee_minority";
    pub const MENTOR_MINORITY: &str = "mentor_minority";
    pub const EXPERIENCE_WITH_MENTOR: &str = "experience_with_mentor";
    pub const MENTOR_SEEN_BY_COLLEAGUES: &str = "mentor_seen_by_colleagues";
    pub const MENTOR_NUM_TRAINEES: &str = "mentor_num_trainees";
    pub const MENTOR_MENTEE_MEETING_TIME: &str = "mentor_mentee_meeting_time";
    pub const MENTEE_EXPERIENCE_WAS_COMMON: &str = "mentee_experience_was_common";
    pub const MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY: &str = "mentee_experience_was_common_summary";
    pub const MENTEE_INFLUENCE_ON_PROJECT: &str = "mentee_influence_on_project";
    pub const MENTOR_AWARENESS_ON_SHORTCOMINGS: &str = "mentor_awareness_on_shortcomings";
    pub const MENTOR_AWARENESS_ON_SHORTCOMINGS_SUMMARY: &str =
        "mentor_awareness_on_shortcomings_summary";
    pub const MENTOR_AWARENESS_ON_STRENGTHS: &str = "mentor_awareness_on_strengths";
    pub const MENTOR_AWARENESS_ON_STRENGTHS_SUMMARY: &str = "mentor_awareness_on_strengths_summary";
    pub const MENTOR_ASKING_FEEDBACK: &str = "mentor_asking_feedback";
    pub const MENTOR_HAS_EVER_ASKED_FEEDBACK: &str = "mentor_has_ever_asked_feedback";
    pub const MENTOR_MAKES_EASY_TO_RAISE_CONCERNS: &str =
        "mentor_makes_easy_mentees_to_raise_concerns";
    pub const MENTOR_MAKES_EASY_TO_RAISE_CONCERNS_SUMMARY: &str =
        "mentor_makes_easy_mentees_to_raise_concerns_summary";
    pub const CODE_OF_CONDUCT: &str = "code_of_conduct";
    pub const MENTOR_BIGGEST_SHORTCOMINGS: &str = "mentor_biggest_shortcomings";
    pub const MENTOR_BIGGEST_STRENGTHS: &str = "mentor_biggest_strengths";
    pub const MENTEE_ADVICE_TO_MENTOR: &str = "mentee_advice_to_mentor";
    pub const MENTEE_ADVICE_TO_MENTEES: &str = "mentee_advice_to_mentees";
}

/// Column order of the cleaned table.
///
/// Remapped fields missing here (`expertise`, `state` and the free-text
/// wisdom answers) are dropped from the table on purpose.
pub const OUTPUT_HEADERS: [&str; 27] = [
    field::TIMESTAMP,
    field::MENTEE_CURRENT,
    field::MENTEE_CURRENT_SUMMARY,
    field::MENTEE_THEN,
    field::MENTOR_THEN,
    field::DISCIPLINE,
    field::MENTEE_GENDER,
    field::MENTOR_GENDER,
    field::COUNTRY,
    field::MENTEE_MINORITY,
    field::MENTOR_MINORITY,
    field::EXPERIENCE_WITH_MENTOR,
    field::MENTOR_SEEN_BY_COLLEAGUES,
    field::MENTOR_NUM_TRAINEES,
    field::MENTOR_MENTEE_MEETING_TIME,
    field::MENTEE_EXPERIENCE_WAS_COMMON,
    field::MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY,
    field::MENTEE_INFLUENCE_ON_PROJECT,
    field::MENTOR_AWARENESS_ON_SHORTCOMINGS,
    field::MENTOR_AWARENESS_ON_SHORTCOMINGS_SUMMARY,
    field::MENTOR_AWARENESS_ON_STRENGTHS,
    field::MENTOR_AWARENESS_ON_STRENGTHS_SUMMARY,
    field::MENTOR_ASKING_FEEDBACK,
    field::MENTOR_HAS_EVER_ASKED_FEEDBACK,
    field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS,
    field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS_SUMMARY,
    field::CODE_OF_CONDUCT,
];

/// Long-form survey questions and the field each one is stored under
const SURVEY_QUESTIONS: [(&str, &str); 26] = [
    ("You are currently", field::MENTEE_CURRENT),
    (
        "You worked (or are still working) with the mentor you have in mind as:",
        field::MENTEE_THEN,
    ),
    ("Your mentor was (or is):", field::MENTOR_THEN),
    (
        "If you had to chose one, which one of the following categories would best describe your relationship with science as an ECR or when you were an ECR?",
        field::DISCIPLINE,
    ),
    (
        "How would you describe your ECR expertise? (e.g., Microbial Ecologist, Biochemist, Computer Scientist, Civil Engineer, etc.)",
        field::EXPERTISE,
    ),
    (
        "Please chose your gender (if you are no longer a trainee, respond with your gender at the time you were a trainee). The purpose of this question is to generate enough data, if possible, to not completely miss issues related or specific to gender.",
        field::MENTEE_GENDER,
    ),
    (
        "Please chose, to the best of your knowledge, your mentor's gender (similar to the previous one, this question is here in an attempt to generate enough data to not completely miss mentorship patterns related or specific to gender).",
        field::MENTOR_GENDER,
    ),
    (
        "Where were you (or still are) working as an ECR? Please enter a country name (please avoid using acronyms and spell out the full country name in English (i.g., United States, United Kingdom, Mexico, etc)).",
        field::COUNTRY,
    ),
    (
        "If you are/were in the United States, which state? (please avoid using acronyms (i.e., Illinois, Massachusetts, etc)). Leave this blank if you were/are not working in the United Sates OR if you think this information, combined with your other responses, can identify you.",
        field::STATE,
    ),
    (
        "Except your gender, were you / are you a member of a minority group in your workplace based on your ethnic background and/or religion?",
        field::MENTEE_MINORITY,
    ),
    (
        "Except their gender, and to the best of your knowledge, was/is your mentor a member of a minority group in the workplace based on their ethnic background and/or religion?",
        field::MENTOR_MINORITY,
    ),
    (
        "Considering its entirety and its influence on your wellbeing and career, how would you characterize your experience with your mentor?",
        field::EXPERIENCE_WITH_MENTOR,
    ),
    (
        "Do you think your mentor was (or is) considered a good scientist by their colleagues?",
        field::MENTOR_SEEN_BY_COLLEAGUES,
    ),
    (
        "How many trainees your mentor was (or is) responsible for during the time you worked with them as an ECR (or currently, if you are still advised by this mentor)?",
        field::MENTOR_NUM_TRAINEES,
    ),
    (
        "On average, how much time your mentor was (or is) able to dedicate to you for 1-on-1 interactions outside of group meetings?",
        field::MENTOR_MENTEE_MEETING_TIME,
    ),
    (
        "Was/is your experience with your mentor comparable to the experience of the other trainees who worked/are working with them?",
        field::MENTEE_EXPERIENCE_WAS_COMMON,
    ),
    (
        "To what extent did/does your mentor encourage you to define your project or influence its trajectory?",
        field::MENTEE_INFLUENCE_ON_PROJECT,
    ),
    (
        "Do you think your mentor is/was aware of their shortcomings in mentoring trainees?",
        field::MENTOR_AWARENESS_ON_SHORTCOMINGS,
    ),
    (
        "Do you think your mentor is/was aware of their strengths in mentoring trainees?",
        field::MENTOR_AWARENESS_ON_STRENGTHS,
    ),
    (
        "How frequently did/does your mentor ask for feedback from their trainees on their mentorship style?",
        field::MENTOR_ASKING_FEEDBACK,
    ),
    (
        "Do you think your mentor made/makes it easy for their trainees to raise their concerns about the mentorship they're receiving?",
        field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS,
    ),
    (
        "Was/is there a public document defining the code of conduct, expectations, or the group culture provided by your mentor?",
        field::CODE_OF_CONDUCT,
    ),
    (
        "What is/was the BIGGEST SHORTCOMING of their mentorship style? Please consider describing how did (or does) this shortcoming influence your work, your wellbeing, or your career (you can list multiple, but please list each shortcoming and its influence as a separate paragraph).",
        field::MENTOR_BIGGEST_SHORTCOMINGS,
    ),
    (
        "What is/was the MOST ADMIRABLE trait of their mentorship style? Please consider describing how this trait positively influenced (or influences) your daily work, your wellbeing, or your career (you can list multiple, but please list each shortcoming and its influence as a separate paragraph).",
        field::MENTOR_BIGGEST_STRENGTHS,
    ),
    (
        "Based on your experience, what advice would you give to your mentor so they could do better?",
        field::MENTEE_ADVICE_TO_MENTOR,
    ),
    (
        "Based on your experience, what advice would you give to those who are getting ready to pursue a career in science and are looking for mentors?",
        field::MENTEE_ADVICE_TO_MENTEES,
    ),
];

/// Immutable question → field lookup, built once per run
#[derive(Debug, Clone)]
pub struct QuestionKeyTable {
    entries: HashMap<&'static str, &'static str>,
}

impl QuestionKeyTable {
    /// The mapping for the mentorship survey form
    pub fn survey() -> Self {
        Self::from_pairs(&SURVEY_QUESTIONS)
    }

    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: pairs.iter().copied().collect(),
        }
    }

    /// Field name for a long-form question, if the question is known
    pub fn field_for(&self, question: &str) -> Option<&'static str> {
        self.entries.get(question).copied()
    }

    /// Long-form question that maps to `field`
    pub fn question_for(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, f)| **f == field)
            .map(|(q, _)| *q)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_survey_table_is_one_to_one() {
        let table = QuestionKeyTable::survey();
        assert_eq!(table.len(), SURVEY_QUESTIONS.len());

        let fields: HashSet<&str> = SURVEY_QUESTIONS.iter().map(|(_, f)| *f).collect();
        assert_eq!(fields.len(), SURVEY_QUESTIONS.len());
    }

    #[test]
    fn test_field_lookup() {
        let table = QuestionKeyTable::survey();
        assert_eq!(
            table.field_for("You are currently"),
            Some(field::MENTEE_CURRENT)
        );
        assert_eq!(table.field_for("Timestamp"), None);
        assert_eq!(
            table.question_for(field::MENTOR_THEN),
            Some("Your mentor was (or is):")
        );
    }

    #[test]
    fn test_output_headers_start_with_identity_and_are_unique() {
        assert_eq!(OUTPUT_HEADERS[0], field::TIMESTAMP);
        let unique: HashSet<&str> = OUTPUT_HEADERS.iter().copied().collect();
        assert_eq!(unique.len(), OUTPUT_HEADERS.len());
        assert!(!unique.contains(field::STATE));
        assert!(!unique.contains(field::EXPERTISE));
    }
}
