use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::CleanedTable;
use crate::models::{NormalizedSurvey, OUTPUT_HEADERS};

/// Configuration for Stage 1 table output
#[derive(Debug, Clone)]
pub struct Stage1Config {
    /// Column order; record fields not listed are left out
    pub headers: Vec<&'static str>,
}

impl Default for Stage1Config {
    fn default() -> Self {
        Self {
            headers: OUTPUT_HEADERS.to_vec(),
        }
    }
}

/// Result of Stage 1
#[derive(Debug)]
pub struct Stage1Result {
    pub table_path: PathBuf,
    pub rows_written: usize,
}

/// Execute Stage 1: write the cleaned table, one row per response in
/// survey order
pub fn execute_stage1(
    survey: &NormalizedSurvey,
    output: &Path,
    config: &Stage1Config,
) -> Result<Stage1Result> {
    info!(
        "Writing {} rows x {} columns to {:?}",
        survey.len(),
        config.headers.len(),
        output
    );
    CleanedTable::new(survey, &config.headers).write_file(output)?;

    Ok(Stage1Result {
        table_path: output.to_path_buf(),
        rows_written: survey.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{field, NormalizedRecord};

    #[test]
    fn test_stage1_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentorship.tsv");
        let mut first = NormalizedRecord::new("t1");
        first.set(field::COUNTRY, Some("Canada".to_string()));
        let survey = NormalizedSurvey {
            records: vec![first, NormalizedRecord::new("t2")],
        };

        let result = execute_stage1(&survey, &path, &Stage1Config::default()).unwrap();
        assert_eq!(result.rows_written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split('\t').count(), 27);
        assert!(lines[1].starts_with("t1\t"));
        assert!(lines[1].contains("\tCanada\t"));
        assert!(lines[2].starts_with("t2\t"));
        assert_eq!(lines[2].split('\t').count(), 27);
    }
}
