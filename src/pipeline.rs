use anyhow::{Context, Result};
use tracing::info;

use crate::config::{InputState, PipelineConfig};
use crate::error::SurveyError;
use crate::io::{load_approvals, parse_survey_file};
use crate::report::SurveySummary;
use crate::stages::{
    execute_stage1, execute_stage2, execute_stage3, extract_wisdom, normalize, Stage0Config,
    Stage1Config, Stage2Config, Stage3Config,
};

/// What a `process` run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// All artifacts were regenerated from the raw export
    Processed {
        responses: usize,
        wisdom_entries: usize,
        approved: usize,
        quotes_published: usize,
    },
    /// No raw export, but the cleaned table already exists
    AlreadyProcessed,
}

/// Run every stage: table, audit file and curated document
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    match config.input_state() {
        InputState::RawAvailable => {}
        InputState::AlreadyProcessed => return Ok(PipelineOutcome::AlreadyProcessed),
        InputState::Missing => {
            return Err(SurveyError::MissingInput {
                raw: config.raw_path.clone(),
                table: config.table_path.clone(),
            }
            .into());
        }
    }

    info!("Loading raw survey from {:?}", config.raw_path);
    let raw = parse_survey_file(&config.raw_path)?;
    info!("Loaded {} responses", raw.len());

    // Stage 0: Normalize
    info!("Stage 0: Normalizing responses...");
    let norm = normalize(&raw, &Stage0Config::default())
        .context("Failed to normalize raw survey")?;
    if !norm.anomalies.is_empty() {
        info!("{} values fell back to best-effort defaults", norm.anomalies.len());
    }

    // Stage 1: Table
    info!("Stage 1: Writing cleaned table...");
    let stage1 = execute_stage1(&norm.survey, &config.table_path, &Stage1Config::default())?;

    // Stage 2: Audit
    let approvals = load_approvals(&config.approvals_path)?;
    info!("Loaded {} approved identifiers", approvals.len());
    info!("Stage 2: Writing wisdom audit file...");
    let stage2 = execute_stage2(
        &norm.survey,
        &approvals,
        &config.audit_path,
        &Stage2Config::default(),
    )?;

    // Stage 3: Render
    info!("Stage 3: Rendering curated document...");
    let stage3 = execute_stage3(
        &norm.survey,
        &approvals,
        &config.document_path,
        &Stage3Config::default(),
    )?;

    Ok(PipelineOutcome::Processed {
        responses: stage1.rows_written,
        wisdom_entries: stage2.entries.len(),
        approved: stage2.approved_count(),
        quotes_published: stage3.total_quotes(),
    })
}

/// Normalize and extract wisdom without writing anything
pub fn analyze_survey(config: &PipelineConfig) -> Result<SurveySummary> {
    let raw = parse_survey_file(&config.raw_path)?;
    let norm = normalize(&raw, &Stage0Config::default())
        .context("Failed to normalize raw survey")?;
    let approvals = load_approvals(&config.approvals_path)?;
    let entries = extract_wisdom(&norm.survey, &approvals, &Stage2Config::default());

    Ok(SurveySummary::build(&norm.survey, &entries, &norm.anomalies))
}
