use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{SurveyError, SurveyResult};
use crate::models::{field, NormalizedRecord, NormalizedSurvey, QuestionKeyTable, RawRecord};
use crate::rules::{self, LikertScale};

/// Configuration for Stage 0 normalization
#[derive(Debug, Clone)]
pub struct Stage0Config {
    /// Question → field mapping applied to every response
    pub questions: QuestionKeyTable,
}

impl Default for Stage0Config {
    fn default() -> Self {
        Self {
            questions: QuestionKeyTable::survey(),
        }
    }
}

/// A value that did not fit its field's rules and fell back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// A rating outside "1".."5"
    UnexpectedRating,
    /// A discipline answer without its parenthesized examples
    DisciplineWithoutParenthesis,
    /// A reputation answer matching no known prefix
    UnrecognizedReputation,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AnomalyKind::UnexpectedRating => "unexpected rating",
            AnomalyKind::DisciplineWithoutParenthesis => "discipline without parenthesis",
            AnomalyKind::UnrecognizedReputation => "unrecognized reputation answer",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueAnomaly {
    pub timestamp: String,
    pub field: &'static str,
    pub value: String,
    pub kind: AnomalyKind,
}

/// Result of Stage 0 normalization
#[derive(Debug)]
pub struct NormalizationResult {
    /// Normalized responses, in input order
    pub survey: NormalizedSurvey,
    /// Values that took a best-effort fallback
    pub anomalies: Vec<ValueAnomaly>,
}

/// Perform Stage 0: rename every answer to its short field and derive the
/// summary fields.
///
/// A question missing from the key table is a data-contract violation and
/// aborts the run. Malformed values degrade to a fallback and are reported
/// as anomalies instead.
pub fn normalize(raw: &[RawRecord], config: &Stage0Config) -> SurveyResult<NormalizationResult> {
    let mut records = Vec::with_capacity(raw.len());
    let mut anomalies = Vec::new();

    for response in raw {
        let record = normalize_record(response, &config.questions, &mut anomalies)?;
        debug!(
            "Normalized response '{}' into {} fields",
            record.timestamp,
            record.field_count()
        );
        records.push(record);
    }

    for anomaly in &anomalies {
        warn!(
            "Response '{}': {} in {}: {:?}",
            anomaly.timestamp, anomaly.kind, anomaly.field, anomaly.value
        );
    }

    Ok(NormalizationResult {
        survey: NormalizedSurvey { records },
        anomalies,
    })
}

/// Normalize one response
pub fn normalize_record(
    raw: &RawRecord,
    questions: &QuestionKeyTable,
    anomalies: &mut Vec<ValueAnomaly>,
) -> SurveyResult<NormalizedRecord> {
    let mut record = NormalizedRecord::new(raw.timestamp.clone());

    for (question, answer) in &raw.answers {
        let name = questions
            .field_for(question)
            .ok_or_else(|| SurveyError::UnknownQuestion {
                timestamp: raw.timestamp.clone(),
                question: question.clone(),
            })?;

        if let Some(kind) = detect_anomaly(name, answer) {
            anomalies.push(ValueAnomaly {
                timestamp: raw.timestamp.clone(),
                field: name,
                value: answer.clone(),
                kind,
            });
        }

        apply_rules(name, answer, &mut record);
    }

    Ok(record)
}

/// Likert-rated fields and the summary column each one feeds
const LIKERT_SUMMARIES: [(&str, &str, LikertScale); 4] = [
    (
        field::MENTEE_EXPERIENCE_WAS_COMMON,
        field::MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY,
        rules::EXPERIENCE_WAS_COMMON,
    ),
    (
        field::MENTOR_AWARENESS_ON_SHORTCOMINGS,
        field::MENTOR_AWARENESS_ON_SHORTCOMINGS_SUMMARY,
        rules::AWARENESS_ON_SHORTCOMINGS,
    ),
    (
        field::MENTOR_AWARENESS_ON_STRENGTHS,
        field::MENTOR_AWARENESS_ON_STRENGTHS_SUMMARY,
        rules::AWARENESS_ON_STRENGTHS,
    ),
    (
        field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS,
        field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS_SUMMARY,
        rules::EASE_OF_RAISING_CONCERNS,
    ),
];

fn likert_summary(name: &str) -> Option<(&'static str, LikertScale)> {
    LIKERT_SUMMARIES
        .iter()
        .find(|(source, _, _)| *source == name)
        .map(|(_, summary, scale)| (*summary, *scale))
}

/// Store one answer under `name`, plus any summary fields derived from it
fn apply_rules(name: &'static str, value: &str, record: &mut NormalizedRecord) {
    if let Some((summary, scale)) = likert_summary(name) {
        record.set(summary, scale.summarize(value).map(str::to_string));
    }

    let stored = match name {
        field::MENTEE_CURRENT => {
            record.set(field::MENTEE_CURRENT_SUMMARY, Some(rules::role_summary(value)));
            rules::role_label(value)
        }
        field::MENTEE_THEN | field::MENTOR_THEN => rules::role_label(value),
        field::MENTOR_SEEN_BY_COLLEAGUES => rules::colleague_reputation(value),
        field::MENTOR_ASKING_FEEDBACK => {
            record.set(
                field::MENTOR_HAS_EVER_ASKED_FEEDBACK,
                Some(rules::has_ever_asked_feedback(value).to_string()),
            );
            rules::feedback_frequency(value)
        }
        field::DISCIPLINE => rules::discipline(value),
        field::MENTOR_NUM_TRAINEES => rules::trainee_bucket(value),
        field::COUNTRY => rules::canonicalize_country(value),
        field::MENTEE_GENDER | field::MENTOR_GENDER => rules::gender(value),
        _ => value.to_string(),
    };

    record.set(name, Some(stored));
}

fn detect_anomaly(name: &str, value: &str) -> Option<AnomalyKind> {
    if value.is_empty() {
        return None;
    }
    if likert_summary(name).is_some() && !rules::is_rating(value) {
        return Some(AnomalyKind::UnexpectedRating);
    }
    match name {
        field::DISCIPLINE if !value.contains('(') => Some(AnomalyKind::DisciplineWithoutParenthesis),
        field::MENTOR_SEEN_BY_COLLEAGUES if !rules::is_known_reputation(value) => {
            Some(AnomalyKind::UnrecognizedReputation)
        }
        _ => None,
    }
}
