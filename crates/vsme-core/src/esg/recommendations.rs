use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::metrics::MetricsRecord;
use crate::types::Score;

/// Upper bound on the number of recommendations returned to the caller.
pub const MAX_RECOMMENDATIONS: usize = 8;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Urgency tier. Variants are declared most urgent first, so the derived
/// `Ord` sorts a list into action order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Mandatory disclosure under CSRD
    CriticalCsrd = 0,
    Critical = 2,
    High = 3,
    Medium = 4,
}

impl Priority {
    /// Stable numeric rank, lower is more urgent. Rank 1 is unassigned.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::CriticalCsrd => "Critical (CSRD)",
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Environmental,
    Social,
    Governance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub priority: Priority,
    pub action: String,
    pub impact: String,
    pub cost: String,
}

impl Recommendation {
    fn new(
        category: Category,
        priority: Priority,
        action: &str,
        impact: &str,
        cost: &str,
    ) -> Self {
        Self {
            category,
            priority,
            action: action.to_string(),
            impact: impact.to_string(),
            cost: cost.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Build the prioritised action list for a scored submission.
///
/// Every predicate is evaluated independently; the candidates are then
/// stable-sorted by priority (ties keep environmental, social, governance
/// order) and cut to [`MAX_RECOMMENDATIONS`]. The pillar scores are accepted
/// so callers can pass the full scoring context, but no current rule reads
/// them.
pub fn generate_recommendations(
    m: &MetricsRecord,
    _environmental: Score,
    _social: Score,
    _governance: Score,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    environmental_candidates(m, &mut recs);
    social_candidates(m, &mut recs);
    governance_candidates(m, &mut recs);

    // Vec::sort_by_key is stable
    recs.sort_by_key(|r| r.priority);
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn environmental_candidates(m: &MetricsRecord, recs: &mut Vec<Recommendation>) {
    let env = &m.environmental;
    let total_co2 = m.total_co2();

    if total_co2 > dec!(2) {
        recs.push(Recommendation::new(
            Category::Environmental,
            Priority::High,
            "CO2 reduction plan: target -30% within 3 years",
            "+2.0 E points and access to green financing",
            "€1,000-3,000 consultancy",
        ));
    }

    if env.scope3_co2 > total_co2.saturating_mul(dec!(0.7)) {
        recs.push(Recommendation::new(
            Category::Environmental,
            Priority::High,
            "Audit high-impact Scope 3 suppliers",
            "Identify 20-40% value-chain reduction",
            "€500-1,500",
        ));
    }

    if env.renewable_percent < dec!(50) {
        recs.push(Recommendation::new(
            Category::Environmental,
            Priority::Medium,
            "Switch to a 100% renewable electricity tariff",
            "+1.5 E points and zero Scope 2 emissions",
            "No extra cost",
        ));
    }

    if env.waste_recycled_percent < dec!(40) {
        recs.push(Recommendation::new(
            Category::Environmental,
            Priority::Medium,
            "Recycling programme: target 50% of waste",
            "+1.0 E points and €50-200/month savings",
            "€200-500 setup",
        ));
    }

    if env.waste_hazardous_kg > dec!(50) {
        recs.push(Recommendation::new(
            Category::Environmental,
            Priority::Critical,
            "Contract a licensed hazardous-waste handler",
            "Legal compliance and avoided fines of €3,000+",
            "€300-800/year",
        ));
    }
}

fn social_candidates(m: &MetricsRecord, recs: &mut Vec<Recommendation>) {
    let soc = &m.social;

    if soc.salary_gap_percent > dec!(15) {
        recs.push(Recommendation::new(
            Category::Social,
            Priority::CriticalCsrd,
            "Pay audit and gender equity plan",
            "+2.0 S points, required by CSRD",
            "€800-2,000",
        ));
    }

    if soc.turnover_rate > dec!(25) {
        recs.push(Recommendation::new(
            Category::Social,
            Priority::High,
            "Retention plan: staff surveys and workplace improvements",
            "+1.5 S points and lower turnover costs",
            "€500-1,500",
        ));
    }

    if m.training_per_employee() < dec!(20) {
        recs.push(Recommendation::new(
            Category::Social,
            Priority::Medium,
            "Training plan of 20h per employee per year",
            "+1.0 S points and productivity",
            "€200-500/employee",
        ));
    }

    if !soc.supplier_audit_hr {
        recs.push(Recommendation::new(
            Category::Social,
            Priority::High,
            "Human-rights audit of the top 5 suppliers",
            "+1.0 S points, CSRD S2 compliance",
            "€400-1,000",
        ));
    }

    if !soc.child_labor_policy {
        recs.push(Recommendation::new(
            Category::Social,
            Priority::Critical,
            "Adopt a value-chain child labour policy",
            "+0.5 S points, CSRD mandatory",
            "Free (template)",
        ));
    }
}

fn governance_candidates(m: &MetricsRecord, recs: &mut Vec<Recommendation>) {
    let gov = &m.governance;

    if m.audited_ratio() < dec!(25) {
        recs.push(Recommendation::new(
            Category::Governance,
            Priority::High,
            "Audit 25% of critical suppliers",
            "+1.5 G points and lower supply-chain risk",
            "€300-800",
        ));
    }

    if !gov.anticorruption_policy {
        recs.push(Recommendation::new(
            Category::Governance,
            Priority::CriticalCsrd,
            "Written anti-corruption policy and staff training",
            "+1.5 G points, CSRD mandatory",
            "Free (template) + €200 training",
        ));
    }

    if gov.ceo_median_pay_ratio.unwrap_or(Decimal::ZERO) > dec!(50) {
        recs.push(Recommendation::new(
            Category::Governance,
            Priority::Medium,
            "Review executive versus employee pay equity",
            "+0.5 G points and reputation",
            "Internal (policy review)",
        ));
    }

    if gov.board_independent_percent < dec!(20) {
        recs.push(Recommendation::new(
            Category::Governance,
            Priority::Medium,
            "Appoint an independent board member",
            "+1.0 G points and stronger corporate governance",
            "Variable (director fees)",
        ));
    }
}
