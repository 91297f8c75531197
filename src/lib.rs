pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod stages;

pub use config::{InputState, PipelineConfig};
pub use error::{SurveyError, SurveyResult};
pub use io::{load_approvals, parse_survey, parse_survey_file, AuditFile, CleanedTable, CuratedDocument};
pub use models::{
    ApprovalSet, NormalizedRecord, NormalizedSurvey, QuestionKeyTable, RawRecord, ReviewStatus,
    WisdomEntry, WisdomField, OUTPUT_HEADERS,
};
pub use pipeline::{analyze_survey, run_pipeline, PipelineOutcome};
pub use report::SurveySummary;
pub use stages::{
    execute_stage1, execute_stage2, execute_stage3, extract_wisdom, normalize, Stage0Config,
    Stage1Config, Stage2Config, Stage3Config,
};
