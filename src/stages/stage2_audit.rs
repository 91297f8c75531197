use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::AuditFile;
use crate::models::{ApprovalSet, NormalizedSurvey, WisdomEntry, WisdomField};

/// Configuration for Stage 2 wisdom extraction
#[derive(Debug, Clone)]
pub struct Stage2Config {
    /// Free-text fields to extract, in audit file order
    pub fields: Vec<WisdomField>,
}

impl Default for Stage2Config {
    fn default() -> Self {
        Self {
            fields: WisdomField::ALL.to_vec(),
        }
    }
}

/// Result of Stage 2
#[derive(Debug)]
pub struct Stage2Result {
    pub audit_path: PathBuf,
    /// Every extracted entry, grouped by field then survey order
    pub entries: Vec<WisdomEntry>,
}

impl Stage2Result {
    pub fn approved_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_approved()).count()
    }
}

/// Collect every non-empty wisdom answer with its review status
pub fn extract_wisdom(
    survey: &NormalizedSurvey,
    approvals: &ApprovalSet,
    config: &Stage2Config,
) -> Vec<WisdomEntry> {
    let mut entries = Vec::new();

    for &wisdom in &config.fields {
        for record in survey.iter() {
            let Some(text) = record.get(wisdom.field_name()) else {
                continue;
            };
            let text = text.trim().trim_start_matches('-');
            if text.is_empty() {
                continue;
            }

            let identifier = wisdom.identifier(&record.timestamp);
            entries.push(WisdomEntry {
                status: approvals.status_of(&identifier),
                identifier,
                field: wisdom,
                timestamp: record.timestamp.clone(),
                text: text.to_string(),
            });
        }
    }

    entries
}

/// Execute Stage 2: write the audit file reviewers edit to approve quotes
pub fn execute_stage2(
    survey: &NormalizedSurvey,
    approvals: &ApprovalSet,
    output: &Path,
    config: &Stage2Config,
) -> Result<Stage2Result> {
    let entries = extract_wisdom(survey, approvals, config);

    info!("Writing {} wisdom entries to {:?}", entries.len(), output);
    AuditFile::new(&entries).write_file(output)?;

    Ok(Stage2Result {
        audit_path: output.to_path_buf(),
        entries,
    })
}
