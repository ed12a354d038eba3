use chrono::Utc;
use clap::Args;
use serde_json::json;

use vsme_core::esg::scoring::VsmeScoreInput;
use vsme_core::plan::Plan;
use vsme_core::report::{JsonFileReportStore, ReportStore};
use vsme_core::service::{self, GenerateRequest};

use super::CommandOutput;
use crate::input;

/// Where reports live and whose they are
#[derive(Args)]
pub struct StoreArgs {
    /// Path to the JSON report store
    #[arg(long, env = "VSME_STORE", default_value = "vsme-reports.json")]
    pub store: String,

    /// Profile the reports belong to
    #[arg(long, env = "VSME_PROFILE")]
    pub profile: String,
}

impl StoreArgs {
    fn open(&self) -> JsonFileReportStore {
        tracing::debug!(store = %self.store, profile = %self.profile, "opening report store");
        JsonFileReportStore::open(&self.store)
    }
}

/// Arguments for generating and storing a report
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to JSON input file (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Subscription plan (free, starter, pro); unknown values count as free
    #[arg(long, env = "VSME_PLAN", default_value = "free")]
    pub plan: String,

    /// Idempotency key for this submission (defaults to profile + timestamp)
    #[arg(long)]
    pub submission_id: Option<String>,

    /// Print the rendered report instead of the stored record
    #[arg(long)]
    pub text: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for listing reports
#[derive(Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for showing one report
#[derive(Args)]
pub struct ShowArgs {
    /// Report identifier
    pub id: u64,

    /// Print the rendered report instead of the stored record
    #[arg(long)]
    pub text: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn run_generate(args: GenerateArgs) -> Result<CommandOutput, Box<dyn std::error::Error>> {
    let score_input: VsmeScoreInput =
        input::read_input(args.input.as_deref(), "report generation")?;
    let now = Utc::now();
    let submission_id = args
        .submission_id
        .unwrap_or_else(|| format!("{}-{}", args.store.profile, now.timestamp_millis()));

    let request = GenerateRequest {
        profile_id: args.store.profile.clone(),
        submission_id,
        plan: Plan::parse_lenient(&args.plan),
        input: score_input,
    };
    let generated = service::generate_report(&args.store.open(), request, now)?;

    if args.text {
        return Ok(CommandOutput::Text(generated.report.content));
    }
    Ok(CommandOutput::Value(json!({
        "result": generated.report.summary(),
        "reports_remaining": generated.reports_remaining,
        "warnings": generated.warnings,
    })))
}

pub fn run_history(args: HistoryArgs) -> Result<CommandOutput, Box<dyn std::error::Error>> {
    let reports = args.store.open().list(&args.store.profile)?;
    let rows: Vec<_> = reports.iter().map(|r| r.summary()).collect();
    Ok(CommandOutput::Value(serde_json::to_value(rows)?))
}

pub fn run_show(args: ShowArgs) -> Result<CommandOutput, Box<dyn std::error::Error>> {
    let report = args.store.open().get(&args.store.profile, args.id)?;
    if args.text {
        return Ok(CommandOutput::Text(report.content));
    }
    Ok(CommandOutput::Value(json!({ "result": report })))
}
