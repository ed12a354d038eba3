//! Report generation: quota, validation, scoring, persistence, rendering.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::coverage::coverage_percent;
use crate::esg::scoring::{score, VsmeScoreInput};
use crate::esg::validation::validate_input;
use crate::plan::{check_quota, Plan};
use crate::report::{render_report, ReportDraft, ReportStore, StoredReport};
use crate::VsmeResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub profile_id: String,
    pub submission_id: String,
    #[serde(default)]
    pub plan: Plan,
    pub input: VsmeScoreInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub report: StoredReport,
    pub warnings: Vec<String>,
    pub reports_remaining: u32,
}

/// Generate, render, and persist one report.
///
/// Nothing is scored unless the profile still has quota for the month of
/// `now` and the submission validates. The store is written exactly once,
/// after scoring has finished, and that write re-checks the quota so
/// concurrent requests cannot overshoot the plan's limit.
pub fn generate_report(
    store: &dyn ReportStore,
    request: GenerateRequest,
    now: DateTime<Utc>,
) -> VsmeResult<GeneratedReport> {
    let used = store.count_for_month(&request.profile_id, now.year(), now.month())?;
    check_quota(request.plan, used)?;

    let mut warnings = Vec::new();
    validate_input(&request.input, &mut warnings)?;

    let result = score(&request.input.metrics);

    let draft = ReportDraft {
        profile_id: request.profile_id,
        submission_id: request.submission_id,
        company_name: request.input.company_name,
        created_at: now,
        metrics: request.input.metrics,
        result,
        coverage_percent: coverage_percent(),
    };
    let content = render_report(&draft);
    let (report, quota) = store.insert_within_quota(draft, content, request.plan)?;

    tracing::info!(
        id = report.id,
        profile = %report.profile_id,
        esg_score = %report.result.esg_score,
        "report generated"
    );

    Ok(GeneratedReport {
        report,
        warnings,
        reports_remaining: quota.remaining_after,
    })
}
