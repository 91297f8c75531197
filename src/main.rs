use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mentorship_survey::{analyze_survey, run_pipeline, PipelineConfig, PipelineOutcome};

#[derive(Parser)]
#[command(name = "mentorship-survey")]
#[command(author, version, about = "Mentorship survey curation pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input and output locations shared by every subcommand
#[derive(Args)]
struct PathArgs {
    /// Working directory holding the survey files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Raw survey export (TSV)
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Reviewer approval sidecar, one identifier per line
    #[arg(long)]
    approvals: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the raw export and regenerate the wisdom files
    Process {
        #[command(flatten)]
        paths: PathArgs,

        /// Cleaned table output
        #[arg(long)]
        table: Option<PathBuf>,

        /// Wisdom audit file output
        #[arg(long)]
        audit: Option<PathBuf>,

        /// Curated document output
        #[arg(long)]
        document: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize the raw export without writing anything
    Analyze {
        #[command(flatten)]
        paths: PathArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            paths,
            table,
            audit,
            document,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = resolve_paths(&paths);
            override_path(&mut config.table_path, &paths.dir, table);
            override_path(&mut config.audit_path, &paths.dir, audit);
            override_path(&mut config.document_path, &paths.dir, document);
            process_survey(&config)
        }
        Commands::Analyze {
            paths,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(&resolve_paths(&paths), json)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn resolve_paths(paths: &PathArgs) -> PipelineConfig {
    let mut config = PipelineConfig::in_dir(&paths.dir);
    override_path(&mut config.raw_path, &paths.dir, paths.raw.clone());
    override_path(&mut config.approvals_path, &paths.dir, paths.approvals.clone());
    config
}

/// Relative overrides are resolved against the working directory
fn override_path(target: &mut PathBuf, dir: &Path, value: Option<PathBuf>) {
    if let Some(path) = value {
        *target = dir.join(path);
    }
}

fn process_survey(config: &PipelineConfig) -> Result<()> {
    match run_pipeline(config)? {
        PipelineOutcome::AlreadyProcessed => {
            println!(
                "No raw survey at {:?}, but the cleaned table {:?} exists. Nothing to regenerate; \
                 wisdom files need the raw export.",
                config.raw_path, config.table_path
            );
        }
        PipelineOutcome::Processed {
            responses,
            wisdom_entries,
            approved,
            quotes_published,
        } => {
            info!(
                "Complete: {} responses, {} wisdom entries ({} approved), {} quotes published",
                responses, wisdom_entries, approved, quotes_published
            );
        }
    }
    Ok(())
}

fn analyze(config: &PipelineConfig, json: bool) -> Result<()> {
    info!("Analyzing survey from {:?}", config.raw_path);
    let summary = analyze_survey(config)?;

    if json {
        let text =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
    } else {
        print!("{}", summary.format());
    }

    Ok(())
}
