//! autonomy-assessment: score a completed questionnaire and print the report.
//!
//! Configuration comes from `AUTONOMY_ASSESSMENT__*` environment variables;
//! command-line flags override it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use autonomy_assessment::adapters::{
    FileAnswerSource, JsonReportRenderer, LocalReportWriter, MarkdownReportRenderer,
};
use autonomy_assessment::application::{
    AssessmentRunner, RunAssessmentCommand, RunAssessmentHandler,
};
use autonomy_assessment::config::{AppConfig, LoggingConfig};
use autonomy_assessment::domain::catalog::{
    Archetype, CoreValue, ImpactLevel, MeaningTask, PactDimension, RewardCategory,
};
use autonomy_assessment::ports::{ReportFormat, ReportRenderer};

#[derive(Parser)]
#[command(name = "autonomy-assessment")]
#[command(about = "Autonomy vs structure career preference assessment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an answer sheet (YAML or JSON) and print the report
    Run {
        /// Path to the answer sheet
        answers: PathBuf,

        /// Report format (markdown or json)
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Also write the report to the output directory
        #[arg(short, long)]
        export: bool,

        /// Output directory (overrides configuration)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// List the questionnaire catalogs
    Catalog,
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Run {
            answers,
            format,
            export,
            output_dir,
        } => {
            if let Some(dir) = output_dir {
                config.report.output_dir = dir;
            }
            config.validate().context("invalid configuration")?;

            let export = if export && !config.features.export_reports {
                warn!("Report export is disabled by configuration; skipping");
                false
            } else {
                export
            };

            let renderers: Vec<Arc<dyn ReportRenderer>> = vec![
                Arc::new(MarkdownReportRenderer::new()),
                Arc::new(JsonReportRenderer::new()),
            ];
            let handler = RunAssessmentHandler::new(
                Arc::new(FileAnswerSource::new()),
                Arc::new(LocalReportWriter::new(config.report.output_dir.clone())),
                renderers,
                AssessmentRunner::new(config.scoring.engine()),
            );

            info!(answers = %answers.display(), "Running assessment");
            let result = handler
                .handle(RunAssessmentCommand {
                    answers,
                    format: format.unwrap_or(config.report.format),
                    export,
                })
                .await?;

            println!("{}", result.rendered);
            if let Some(path) = result.exported_to {
                eprintln!("Report saved to {}", path.display());
            }
        }
        Command::Catalog => print_catalog(),
    }

    Ok(())
}

fn print_catalog() {
    println!("Core values:");
    for value in CoreValue::all() {
        println!("  - {}", value.name());
    }

    println!("\nPurpose archetypes:");
    for archetype in Archetype::all() {
        println!("  - {}: {}", archetype.name(), archetype.statement());
    }

    println!("\nMeaning tasks:");
    for task in MeaningTask::all() {
        println!("  - {}", task.name());
    }

    println!("\nImpact levels:");
    for level in ImpactLevel::all() {
        println!("  - {}: {}", level.name(), level.description());
    }

    println!("\nReward categories:");
    for category in RewardCategory::all() {
        println!("  - {}", category.name());
    }

    println!("\nPACT dimensions:");
    for dimension in PactDimension::all() {
        println!(
            "  - {} (0-{}): {}",
            dimension.name(),
            dimension.scale().max(),
            dimension.statement()
        );
    }
}
