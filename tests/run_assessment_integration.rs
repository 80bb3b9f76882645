//! End-to-end runs through the file adapters: answer sheet on disk in,
//! rendered report (and optionally an exported file) out.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use autonomy_assessment::adapters::{
    FileAnswerSource, JsonReportRenderer, LocalReportWriter, MarkdownReportRenderer,
};
use autonomy_assessment::application::{
    AssessmentRunner, ReplayError, RunAssessmentCommand, RunAssessmentError,
    RunAssessmentHandler,
};
use autonomy_assessment::domain::assessment::AssessmentEvent;
use autonomy_assessment::domain::foundation::Stage;
use autonomy_assessment::domain::scoring::{
    AlignmentLevel, PactAggregation, PreferenceProfile, ScoringEngine,
};
use autonomy_assessment::ports::{report_file_name, ReportFormat, ReportRenderer};

// ════════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════════

const AUTONOMY_SHEET_YAML: &str = r#"
respondent: Sam
values:
  pairedChoice: freedom
  independence: 70
  jobPreference: flexible
  toggles: [Autonomy, Independence, Creativity, Growth, Balance]
purpose:
  ratings: { creator: 6, builder: 4, healer: 3, seeker: 6, justice: 2 }
  symbol: seeker
meaning:
  taskEnergy:
    self-directed: 5
    routine: 2
    team-meetings: 3
    admin: 1
    creative-problem: 5
    following-process: 2
  impactLevel: self
  rewardEdits:
    - { category: Mastery, points: 40 }
    - { category: Financial, points: 10 }
  idealWorkday: Long focus blocks and a short sync.
pact:
  purpose: 6
  authenticity: 5
  trajectory: 6
  congruence: 70
  reflection: Moving toward a principal role with more latitude.
"#;

const STRUCTURE_SHEET_JSON: &str = r#"{
  "values": {
    "pairedChoice": "structure",
    "independence": 20,
    "jobPreference": "structured",
    "toggles": ["Stability", "Security", "Collaboration", "Balance", "Service"]
  },
  "purpose": {
    "ratings": {"creator": 2, "builder": 5, "healer": 4, "seeker": 2, "justice": 3},
    "symbol": "builder"
  },
  "meaning": {
    "taskEnergy": {
      "self-directed": 2, "routine": 4, "team-meetings": 3,
      "admin": 3, "creative-problem": 2, "following-process": 5
    },
    "impactLevel": "organization",
    "idealWorkday": "Clear checklist and a predictable end time."
  },
  "pact": {
    "purpose": 3,
    "authenticity": 3,
    "trajectory": 3,
    "congruence": 30,
    "reflection": "Not sure the current team is the right place for me."
  }
}"#;

fn write_sheet(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn handler(output_dir: &Path, aggregation: PactAggregation) -> RunAssessmentHandler {
    let renderers: Vec<Arc<dyn ReportRenderer>> = vec![
        Arc::new(MarkdownReportRenderer::new()),
        Arc::new(JsonReportRenderer::new()),
    ];
    RunAssessmentHandler::new(
        Arc::new(FileAnswerSource::new()),
        Arc::new(LocalReportWriter::new(output_dir)),
        renderers,
        AssessmentRunner::new(ScoringEngine::new(aggregation)),
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn autonomy_sheet_renders_markdown_report() {
    let dir = TempDir::new().unwrap();
    let answers = write_sheet(dir.path(), "sam.yaml", AUTONOMY_SHEET_YAML);
    let reports = dir.path().join("reports");

    let result = handler(&reports, PactAggregation::Raw)
        .handle(RunAssessmentCommand {
            answers,
            format: ReportFormat::Markdown,
            export: false,
        })
        .await
        .unwrap();

    let results = &result.report.results;
    assert_eq!(results.profile, PreferenceProfile::StrongAutonomySeeker);
    // (6 + 5 + 6 + 70) / 4 = 21.75 on the mixed scale
    assert_eq!(results.alignment_score, 311);
    assert_eq!(results.alignment_level, AlignmentLevel::HighlyAligned);
    assert_eq!(results.recommendations.environments[0], "Startup");

    assert!(result
        .rendered
        .starts_with("# Autonomy vs Structure Assessment Report"));
    assert!(result.rendered.contains("**Respondent:** Sam"));
    assert!(result.rendered.contains("**311%**"));
    assert!(!result.rendered.contains("## Areas for Attention"));

    assert!(result.exported_to.is_none());
    assert!(!reports.exists());
}

#[tokio::test]
async fn rejected_reward_edit_keeps_prior_points() {
    let dir = TempDir::new().unwrap();
    let answers = write_sheet(dir.path(), "sam.yml", AUTONOMY_SHEET_YAML);

    let result = handler(dir.path(), PactAggregation::Raw)
        .handle(RunAssessmentCommand {
            answers,
            format: ReportFormat::Json,
            export: false,
        })
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&result.rendered).unwrap();
    let rewards = &json["answers"]["meaning"]["rewardPreferences"];
    // Mastery 40 would total 115 and is dropped; Financial 10 applies.
    assert_eq!(rewards["Mastery"], 25);
    assert_eq!(rewards["Financial"], 10);
}

#[tokio::test]
async fn structure_sheet_exports_json_report() {
    let dir = TempDir::new().unwrap();
    let answers = write_sheet(dir.path(), "structure.json", STRUCTURE_SHEET_JSON);
    let reports = dir.path().join("reports");

    let result = handler(&reports, PactAggregation::Normalized)
        .handle(RunAssessmentCommand {
            answers,
            format: ReportFormat::Json,
            export: true,
        })
        .await
        .unwrap();

    let results = &result.report.results;
    assert_eq!(results.profile, PreferenceProfile::StructurePreferrer);
    assert_eq!(results.indicators.structure, 5);
    // mean of 42.86, 42.86, 42.86 and 30
    assert_eq!(results.alignment_score, 40);
    assert_eq!(results.alignment_level, AlignmentLevel::NeedsAlignment);
    assert!(results.insights.needs_attention());

    let exported = result.exported_to.expect("report should be exported");
    assert_eq!(
        exported,
        reports.join(report_file_name(result.report.id(), ReportFormat::Json))
    );
    let on_disk = std::fs::read_to_string(&exported).unwrap();
    assert_eq!(on_disk, result.rendered);

    let json: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(json["results"]["profile"], "structure_preferrer");
    assert_eq!(json["metadata"]["pactAggregation"], "normalized");
}

#[tokio::test]
async fn run_emits_lifecycle_events() {
    let dir = TempDir::new().unwrap();
    let answers = write_sheet(dir.path(), "sam.yaml", AUTONOMY_SHEET_YAML);

    let result = handler(dir.path(), PactAggregation::Raw)
        .handle(RunAssessmentCommand {
            answers,
            format: ReportFormat::Markdown,
            export: false,
        })
        .await
        .unwrap();

    assert!(matches!(
        result.events.first(),
        Some(AssessmentEvent::Started { .. })
    ));
    let completed: Vec<Stage> = result
        .events
        .iter()
        .filter_map(|e| match e {
            AssessmentEvent::StageCompleted { stage, .. } => Some(*stage),
            _ => None,
        })
        .collect();
    assert_eq!(
        completed,
        vec![Stage::Values, Stage::Purpose, Stage::Meaning, Stage::Pact]
    );
    assert!(matches!(
        result.events.last(),
        Some(AssessmentEvent::ResultsComputed {
            alignment_score: 311,
            ..
        })
    ));
    assert!(result
        .events
        .iter()
        .all(|e| e.assessment_id() == result.report.id()));
}

#[tokio::test]
async fn sheet_missing_a_stage_is_rejected() {
    let dir = TempDir::new().unwrap();
    let partial = r#"{
      "values": {
        "pairedChoice": "freedom",
        "jobPreference": "flexible",
        "toggles": ["Autonomy", "Independence", "Creativity", "Growth", "Balance"]
      }
    }"#;
    let answers = write_sheet(dir.path(), "partial.json", partial);

    let err = handler(dir.path(), PactAggregation::Raw)
        .handle(RunAssessmentCommand {
            answers,
            format: ReportFormat::Markdown,
            export: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RunAssessmentError::Replay(ReplayError::MissingStage {
            stage: Stage::Purpose
        })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn missing_answer_file_is_reported() {
    let dir = TempDir::new().unwrap();

    let err = handler(dir.path(), PactAggregation::Raw)
        .handle(RunAssessmentCommand {
            answers: dir.path().join("nobody.yaml"),
            format: ReportFormat::Markdown,
            export: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RunAssessmentError::Source(_)));
}
