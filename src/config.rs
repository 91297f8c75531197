use std::path::{Path, PathBuf};

/// Conventional file names used when no explicit path is given
pub const DEFAULT_RAW_FILE: &str = "mentorship-RAW.tsv";
pub const DEFAULT_TABLE_FILE: &str = "mentorship.tsv";
pub const DEFAULT_AUDIT_FILE: &str = "mentorship_wisdom_all.txt";
pub const DEFAULT_APPROVALS_FILE: &str = "mentorship_wisdom_keys_to_keep.txt";
pub const DEFAULT_DOCUMENT_FILE: &str = "mentorship_wisdom.md";

/// Locations of every input and output of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw tab-separated survey export
    pub raw_path: PathBuf,
    /// Cleaned table written by stage 1
    pub table_path: PathBuf,
    /// Wisdom audit file written by stage 2
    pub audit_path: PathBuf,
    /// Reviewer-maintained approval sidecar (optional)
    pub approvals_path: PathBuf,
    /// Curated document written by stage 3
    pub document_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

impl PipelineConfig {
    /// Conventional file names resolved against a working directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            raw_path: dir.join(DEFAULT_RAW_FILE),
            table_path: dir.join(DEFAULT_TABLE_FILE),
            audit_path: dir.join(DEFAULT_AUDIT_FILE),
            approvals_path: dir.join(DEFAULT_APPROVALS_FILE),
            document_path: dir.join(DEFAULT_DOCUMENT_FILE),
        }
    }
}

/// What the working directory holds before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// The raw export is present; the full pipeline can run
    RawAvailable,
    /// Only the cleaned table exists; nothing to regenerate
    AlreadyProcessed,
    /// Neither file exists
    Missing,
}

impl PipelineConfig {
    /// Inspect which required inputs exist
    pub fn input_state(&self) -> InputState {
        if self.raw_path.exists() {
            InputState::RawAvailable
        } else if self.table_path.exists() {
            InputState::AlreadyProcessed
        } else {
            InputState::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_uses_conventional_names() {
        let config = PipelineConfig::in_dir(Path::new("/data"));
        assert_eq!(config.raw_path, PathBuf::from("/data/mentorship-RAW.tsv"));
        assert_eq!(config.table_path, PathBuf::from("/data/mentorship.tsv"));
        assert_eq!(
            config.approvals_path,
            PathBuf::from("/data/mentorship_wisdom_keys_to_keep.txt")
        );
    }

    #[test]
    fn test_input_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::in_dir(dir.path());
        assert_eq!(config.input_state(), InputState::Missing);

        std::fs::write(&config.table_path, "timestamp\n").unwrap();
        assert_eq!(config.input_state(), InputState::AlreadyProcessed);

        std::fs::write(&config.raw_path, "Timestamp\n").unwrap();
        assert_eq!(config.input_state(), InputState::RawAvailable);
    }
}
