use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{CuratedDocument, DOCUMENT_TITLE};
use crate::models::{ApprovalSet, NormalizedSurvey, WisdomField};

/// Configuration for Stage 3 rendering
#[derive(Debug, Clone)]
pub struct Stage3Config {
    /// Heading line at the top of the document
    pub title: String,
    /// Sections in publication order
    pub sections: Vec<WisdomField>,
}

impl Default for Stage3Config {
    fn default() -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            sections: WisdomField::ALL.to_vec(),
        }
    }
}

/// Result of Stage 3 rendering
#[derive(Debug)]
pub struct Stage3Result {
    pub document_path: PathBuf,
    /// Quotes published, per field in publication order
    pub quotes_per_field: Vec<(WisdomField, usize)>,
}

impl Stage3Result {
    pub fn total_quotes(&self) -> usize {
        self.quotes_per_field.iter().map(|(_, n)| n).sum()
    }
}

/// Execute Stage 3: render the curated document from approved answers
pub fn execute_stage3(
    survey: &NormalizedSurvey,
    approvals: &ApprovalSet,
    output: &Path,
    config: &Stage3Config,
) -> Result<Stage3Result> {
    let document = CuratedDocument::new(survey, approvals)
        .with_layout(&config.title, &config.sections);
    let quotes_per_field: Vec<(WisdomField, usize)> = config
        .sections
        .iter()
        .map(|w| (*w, document.quotes(*w).count()))
        .collect();

    info!("Writing curated document to {:?}", output);
    document.write_file(output)?;

    Ok(Stage3Result {
        document_path: output.to_path_buf(),
        quotes_per_field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{field, NormalizedRecord};

    #[test]
    fn test_stage3_config_default() {
        let config = Stage3Config::default();
        assert_eq!(config.title, DOCUMENT_TITLE);
        assert_eq!(config.sections, WisdomField::ALL.to_vec());
    }

    #[test]
    fn test_stage3_with_no_approvals_writes_sections_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentorship_wisdom.md");
        let mut record = NormalizedRecord::new("t1");
        record.set(field::MENTEE_GENDER, Some("Man".to_string()));
        record.set(field::MENTOR_BIGGEST_STRENGTHS, Some("kind".to_string()));
        let survey = NormalizedSurvey {
            records: vec![record],
        };

        let result = execute_stage3(
            &survey,
            &ApprovalSet::default(),
            &path,
            &Stage3Config::default(),
        )
        .unwrap();
        assert_eq!(result.total_quotes(), 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("### ").count(), 4);
        assert!(!content.contains("<blockquote>"));
    }

    #[test]
    fn test_stage3_renders_configured_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advice.md");
        let mut record = NormalizedRecord::new("t1");
        record.set(field::MENTEE_GENDER, Some("Woman".to_string()));
        record.set(field::MENTEE_ADVICE_TO_MENTEES, Some("ask early".to_string()));
        record.set(field::MENTOR_BIGGEST_STRENGTHS, Some("kind".to_string()));
        let survey = NormalizedSurvey {
            records: vec![record],
        };
        let approvals: ApprovalSet = [
            WisdomField::MenteeAdviceToMentees.identifier("t1"),
            WisdomField::MentorBiggestStrengths.identifier("t1"),
        ]
        .into_iter()
        .collect();
        let config = Stage3Config {
            title: "## Advice".to_string(),
            sections: vec![WisdomField::MenteeAdviceToMentees],
        };

        let result = execute_stage3(&survey, &approvals, &path, &config).unwrap();
        assert_eq!(
            result.quotes_per_field,
            vec![(WisdomField::MenteeAdviceToMentees, 1)]
        );

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("## Advice\n\n"));
        assert_eq!(content.matches("### ").count(), 1);
        assert!(content.contains("ask early"));
        assert!(!content.contains("kind"));
    }
}
