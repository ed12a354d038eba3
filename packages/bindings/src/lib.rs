use napi::Result as NapiResult;
use napi_derive::napi;

use vsme_core::esg::metrics::MetricsRecord;
use vsme_core::esg::scoring::{self, VsmeScoreInput};
use vsme_core::plan::{self, Plan};
use vsme_core::report::{self, ReportDraft};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Raw engine call: a metrics record in, a score result out. No validation.
#[napi]
pub fn score_metrics(metrics_json: String) -> NapiResult<String> {
    let metrics: MetricsRecord = serde_json::from_str(&metrics_json).map_err(to_napi_error)?;
    let result = scoring::score(&metrics);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn calculate_vsme_score(input_json: String) -> NapiResult<String> {
    let input: VsmeScoreInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = scoring::calculate_vsme_score(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[napi]
pub fn render_report(draft_json: String) -> NapiResult<String> {
    let draft: ReportDraft = serde_json::from_str(&draft_json).map_err(to_napi_error)?;
    Ok(report::render_report(&draft))
}

/// Quota decision for one more report this month. Unknown plan names are
/// treated as the free plan.
#[napi]
pub fn check_quota(plan_name: String, reports_this_month: u32) -> NapiResult<String> {
    let status = plan::check_quota(Plan::parse_lenient(&plan_name), reports_this_month)
        .map_err(to_napi_error)?;
    serde_json::to_string(&status).map_err(to_napi_error)
}
