use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::questions::field;

/// The four open-ended questions whose answers can be quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WisdomField {
    MentorBiggestShortcomings,
    MentorBiggestStrengths,
    MenteeAdviceToMentor,
    MenteeAdviceToMentees,
}

impl WisdomField {
    /// Publication order
    pub const ALL: [WisdomField; 4] = [
        WisdomField::MentorBiggestShortcomings,
        WisdomField::MentorBiggestStrengths,
        WisdomField::MenteeAdviceToMentor,
        WisdomField::MenteeAdviceToMentees,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            WisdomField::MentorBiggestShortcomings => field::MENTOR_BIGGEST_SHORTCOMINGS,
            WisdomField::MentorBiggestStrengths => field::MENTOR_BIGGEST_STRENGTHS,
            WisdomField::MenteeAdviceToMentor => field::MENTEE_ADVICE_TO_MENTOR,
            WisdomField::MenteeAdviceToMentees => field::MENTEE_ADVICE_TO_MENTEES,
        }
    }

    /// Section heading in the curated document
    pub fn subtitle(&self) -> &'static str {
        match self {
            WisdomField::MentorBiggestShortcomings => {
                "Mentees report on biggest shortcomings of their mentors"
            }
            WisdomField::MentorBiggestStrengths => {
                "Mentees report on biggest strengths of their mentors"
            }
            WisdomField::MenteeAdviceToMentor => "Mentees advise their mentors to do better",
            WisdomField::MenteeAdviceToMentees => "Mentees advise future mentees",
        }
    }

    /// Explanatory paragraph under the section heading
    pub fn introduction(&self) -> &'static str {
        match self {
            WisdomField::MentorBiggestShortcomings => {
                "In this section you will find the words of ECRs to describe '<b>the BIGGEST SHORTCOMING of the mentorship they have received</b>' from a mentor of theirs, considering how did this shortcoming influenced their work, wellbeing, and/or career. You will see that even mentees who overall had a positive experience with their mentors suffered from some aspects of the mentorship they have received."
            }
            WisdomField::MentorBiggestStrengths => {
                "In this section you will find the words of ECRs to describe '<b>the MOST ADMIRABLE aspect of the mentorship they have received</b>' from a mentor of theirs, considering how did this shortcoming influenced their work, wellbeing, and/or career. You will see that even mentees who had a negative experience with their mentor had benefited from some aspects of the mentorship style they have received."
            }
            WisdomField::MenteeAdviceToMentor => {
                "In this section you will find the words of ECRs to describe the advice they would have given to their mentor so they could do better."
            }
            WisdomField::MenteeAdviceToMentees => {
                "In this section you will find the words of ECRs to describe what advice they would have given to those who are getting ready to pursue a career in science and are looking for mentors."
            }
        }
    }

    /// Phrase relating the quote to its subject, given the mentor's glyph
    pub fn relation(&self, mentor_glyph: &str) -> String {
        match self {
            WisdomField::MentorBiggestShortcomings => format!(
                "reporting on the <b>biggest shortcomings</b> of their mentor ({})",
                mentor_glyph
            ),
            WisdomField::MentorBiggestStrengths => format!(
                "reporting on the <b>most admirable qualities</b> of their mentor ({})",
                mentor_glyph
            ),
            WisdomField::MenteeAdviceToMentor => {
                format!("shares <b>their advice</b> for their mentor ({})", mentor_glyph)
            }
            WisdomField::MenteeAdviceToMentees => {
                "shares <b>their advice</b> for future mentees".to_string()
            }
        }
    }

    /// Stable identifier of this field's answer in one response
    pub fn identifier(&self, timestamp: &str) -> String {
        format!("{}!{}", self.field_name(), timestamp)
    }
}

impl fmt::Display for WisdomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Review status written into the audit file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Listed in the approval sidecar
    Approved,
    /// Default for everything a reviewer has not opted in
    PendingReview,
}

impl ReviewStatus {
    /// Marker in the audit file's status column
    pub fn marker(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "",
            ReviewStatus::PendingReview => "R",
        }
    }
}

/// One non-empty free-text answer extracted for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WisdomEntry {
    /// `field!timestamp`
    pub identifier: String,
    pub field: WisdomField,
    pub timestamp: String,
    /// Answer with surrounding whitespace and leading dashes removed
    pub text: String,
    pub status: ReviewStatus,
}

impl WisdomEntry {
    pub fn is_approved(&self) -> bool {
        self.status == ReviewStatus::Approved
    }
}

/// Identifiers a reviewer has cleared for publication
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalSet {
    identifiers: HashSet<String>,
}

impl ApprovalSet {
    /// Parse the sidecar format: one identifier per line, blank lines ignored
    pub fn parse(content: &str) -> Self {
        Self {
            identifiers: content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn status_of(&self, identifier: &str) -> ReviewStatus {
        if self.contains(identifier) {
            ReviewStatus::Approved
        } else {
            ReviewStatus::PendingReview
        }
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl FromIterator<String> for ApprovalSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            identifiers: iter.into_iter().collect(),
        }
    }
}
