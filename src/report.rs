use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{field, NormalizedSurvey, WisdomEntry, WisdomField};
use crate::stages::ValueAnomaly;

/// Fields whose label distribution is reported by `analyze`
pub const SUMMARY_FIELDS: [&str; 11] = [
    field::MENTEE_CURRENT_SUMMARY,
    field::MENTEE_GENDER,
    field::COUNTRY,
    field::MENTOR_SEEN_BY_COLLEAGUES,
    field::MENTOR_NUM_TRAINEES,
    field::MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY,
    field::MENTOR_AWARENESS_ON_SHORTCOMINGS_SUMMARY,
    field::MENTOR_AWARENESS_ON_STRENGTHS_SUMMARY,
    field::MENTOR_HAS_EVER_ASKED_FEEDBACK,
    field::MENTOR_MAKES_EASY_TO_RAISE_CONCERNS_SUMMARY,
    field::EXPERIENCE_WITH_MENTOR,
];

const NO_VALUE: &str = "(none)";

/// Timestamp layouts seen in form exports
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct WisdomCounts {
    pub total: usize,
    pub approved: usize,
}

/// Overview of a normalized survey, without writing any artifact
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub responses: usize,
    pub first_response: Option<NaiveDateTime>,
    pub last_response: Option<NaiveDateTime>,
    pub distributions: BTreeMap<String, BTreeMap<String, usize>>,
    pub wisdom: BTreeMap<WisdomField, WisdomCounts>,
    pub anomalies: usize,
}

impl SurveySummary {
    pub fn build(
        survey: &NormalizedSurvey,
        entries: &[WisdomEntry],
        anomalies: &[ValueAnomaly],
    ) -> Self {
        let timestamps: Vec<NaiveDateTime> = survey
            .iter()
            .filter_map(|r| parse_timestamp(&r.timestamp))
            .collect();

        let mut distributions = BTreeMap::new();
        for name in SUMMARY_FIELDS {
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for record in survey.iter() {
                let label = match record.get(name) {
                    Some(v) if !v.is_empty() => v,
                    _ => NO_VALUE,
                };
                *counts.entry(label.to_string()).or_insert(0) += 1;
            }
            distributions.insert(name.to_string(), counts);
        }

        let mut wisdom: BTreeMap<WisdomField, WisdomCounts> = WisdomField::ALL
            .iter()
            .map(|w| (*w, WisdomCounts::default()))
            .collect();
        for entry in entries {
            let counts = wisdom.entry(entry.field).or_default();
            counts.total += 1;
            if entry.is_approved() {
                counts.approved += 1;
            }
        }

        Self {
            responses: survey.len(),
            first_response: timestamps.iter().min().copied(),
            last_response: timestamps.iter().max().copied(),
            distributions,
            wisdom,
            anomalies: anomalies.len(),
        }
    }

    /// Plain-text rendering for the terminal
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("Survey Analysis\n");
        output.push_str("===============\n");
        output.push_str(&format!("Responses: {}\n", self.responses));
        if let (Some(first), Some(last)) = (self.first_response, self.last_response) {
            output.push_str(&format!("Collected: {} to {}\n", first, last));
        }
        output.push_str(&format!("Fallback values: {}\n", self.anomalies));

        for (name, counts) in &self.distributions {
            output.push_str(&format!("\n{}\n{}\n", name, "-".repeat(name.len())));
            for (label, count) in counts {
                output.push_str(&format!("{:>5}  {}\n", count, label));
            }
        }

        output.push_str("\nWisdom\n------\n");
        for (field, counts) in &self.wisdom {
            output.push_str(&format!(
                "{}: {} answers, {} approved\n",
                field, counts.total, counts.approved
            ));
        }

        output
    }
}

/// Parse a response timestamp; trailing zone labels like "GMT-5" are ignored
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = match value.find(" GMT") {
        Some(pos) => &value[..pos],
        None => value,
    }
    .trim();

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
}
