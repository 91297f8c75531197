use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{SurveyError, SurveyResult};
use crate::models::{ApprovalSet, RawRecord};

/// Parse a raw survey export file into records
pub fn parse_survey_file(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open raw survey: {:?}", path))?;
    parse_survey(file).with_context(|| format!("Failed to parse raw survey: {:?}", path))
}

/// Parse tab-separated survey data.
///
/// The header row holds the long-form questions; its first column is the
/// response timestamp, which identifies each row and is not a question.
pub fn parse_survey<R: Read>(reader: R) -> SurveyResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(SurveyError::EmptyHeader);
    }
    let questions: Vec<&str> = headers.iter().skip(1).collect();

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (index, result) in reader.records().enumerate() {
        let row = result?;
        let row_number = index + 1;

        if row.len() > headers.len() {
            return Err(SurveyError::MalformedRow {
                row: row_number,
                expected: headers.len(),
                found: row.len(),
            });
        }

        let timestamp = row.get(0).unwrap_or("").to_string();
        if !seen.insert(timestamp.clone()) {
            return Err(SurveyError::DuplicateTimestamp(timestamp));
        }

        // Short rows come from trailing empty cells being dropped by the export
        let answers = questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let answer = row.get(i + 1).unwrap_or("");
                (question.to_string(), answer.to_string())
            })
            .collect();

        records.push(RawRecord { timestamp, answers });
    }

    debug!(
        "Parsed {} responses to {} questions",
        records.len(),
        questions.len()
    );

    Ok(records)
}

/// Load the approval sidecar; a missing file means nothing is approved
pub fn load_approvals(path: &Path) -> Result<ApprovalSet> {
    if !path.exists() {
        debug!("No approval sidecar at {:?}", path);
        return Ok(ApprovalSet::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read approval sidecar: {:?}", path))?;
    Ok(ApprovalSet::parse(&content))
}
