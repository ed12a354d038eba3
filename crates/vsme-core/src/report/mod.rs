//! Persisted reports: the scored submission, its rendered text, and the
//! stores that keep them.

pub mod render;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::esg::metrics::MetricsRecord;
use crate::esg::scoring::ScoreResult;
use crate::types::Score;

pub use render::render_report;
pub use store::{InMemoryReportStore, JsonFileReportStore, ReportStore};

/// A scored submission that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub profile_id: String,
    /// Caller-supplied key; a store accepts each one at most once
    pub submission_id: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub metrics: MetricsRecord,
    pub result: ScoreResult,
    pub coverage_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: u64,
    pub profile_id: String,
    pub submission_id: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub metrics: MetricsRecord,
    pub result: ScoreResult,
    pub coverage_percent: u32,
    pub content: String,
}

impl StoredReport {
    pub(crate) fn from_draft(id: u64, draft: ReportDraft, content: String) -> Self {
        Self {
            id,
            profile_id: draft.profile_id,
            submission_id: draft.submission_id,
            company_name: draft.company_name,
            created_at: draft.created_at,
            metrics: draft.metrics,
            result: draft.result,
            coverage_percent: draft.coverage_percent,
            content,
        }
    }

    /// Compact listing row for report history.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            id: self.id,
            company_name: self.company_name.clone(),
            created_at: self.created_at,
            esg_score: self.result.esg_score,
            environmental: self.result.environmental,
            social: self.result.social,
            governance: self.result.governance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: u64,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub esg_score: Score,
    pub environmental: Score,
    pub social: Score,
    pub governance: Score,
}
