use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::environmental::score_environmental;
use super::governance::score_governance;
use super::metrics::MetricsRecord;
use super::recommendations::{generate_recommendations, Recommendation, MAX_RECOMMENDATIONS};
use super::round1;
use super::social::score_social;
use super::validation::validate_input;
use crate::coverage;
use crate::types::{with_metadata, ComputationOutput, Score};
use crate::VsmeResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// One questionnaire submission as received from the request layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VsmeScoreInput {
    pub company_name: String,
    pub metrics: MetricsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-10
    pub environmental: Score,
    /// 0-10
    pub social: Score,
    /// 0-10
    pub governance: Score,
    /// 0-10, weighted by [`COMPOSITE_WEIGHTS`]
    pub esg_score: Score,
    pub band: ScoreBand,
    /// At most eight, most urgent first
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub environmental: Decimal,
    pub social: Decimal,
    pub governance: Decimal,
}

/// Headline label attached to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(esg_score: Score) -> Self {
        if esg_score >= dec!(7.5) {
            ScoreBand::Excellent
        } else if esg_score >= dec!(6) {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs improvement",
        }
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Environmental-heavy weighting. Fixed policy, not caller-configurable.
pub const COMPOSITE_WEIGHTS: PillarWeights = PillarWeights {
    environmental: dec!(0.4),
    social: dec!(0.3),
    governance: dec!(0.3),
};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Weighted composite of the three pillar scores, rounded to one decimal.
pub fn composite_score(environmental: Score, social: Score, governance: Score) -> Score {
    let w = COMPOSITE_WEIGHTS;
    round1(w.environmental * environmental + w.social * social + w.governance * governance)
}

/// Score a validated metrics record.
///
/// Pure and total: the three pillar scorers run independently over the same
/// record, then the composite and the recommendation list are derived from
/// the record plus the pillar scores. The same record always produces the
/// same result.
pub fn score(metrics: &MetricsRecord) -> ScoreResult {
    let environmental = score_environmental(metrics);
    let social = score_social(metrics);
    let governance = score_governance(metrics);
    let esg_score = composite_score(environmental, social, governance);
    let recommendations = generate_recommendations(metrics, environmental, social, governance);

    tracing::debug!(
        %environmental,
        %social,
        %governance,
        %esg_score,
        recommendations = recommendations.len(),
        "scored metrics record"
    );

    ScoreResult {
        environmental,
        social,
        governance,
        esg_score,
        band: ScoreBand::from_score(esg_score),
        recommendations,
    }
}

/// Validate a submission, score it, and wrap the result in the standard
/// computation envelope.
pub fn calculate_vsme_score(
    input: &VsmeScoreInput,
) -> VsmeResult<ComputationOutput<ScoreResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input, &mut warnings)?;

    let result = score(&input.metrics);

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "company_name": input.company_name,
        "score_range": "0-10",
        "pillar_weights": COMPOSITE_WEIGHTS,
        "bands": { "Excellent": ">=7.5", "Good": ">=6.0", "Needs improvement": "<6.0" },
        "max_recommendations": MAX_RECOMMENDATIONS,
        "vsme_coverage_percent": coverage::coverage_percent(),
    });

    Ok(with_metadata(
        "VSME ESG scoring (30 basic-module datapoints)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
