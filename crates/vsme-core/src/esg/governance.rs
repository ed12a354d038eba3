use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::finalize_score;
use super::metrics::MetricsRecord;
use crate::types::Score;

const BASE_SCORE: Decimal = dec!(6.0);

/// Political donations above this amount (EUR/year) count against the company.
const POLITICAL_CONTRIBUTION_LIMIT: Decimal = dec!(10000);

/// Governance pillar score in [0, 10].
pub fn score_governance(m: &MetricsRecord) -> Score {
    let gov = &m.governance;
    let mut score = BASE_SCORE;

    score += supplier_audit_adjustment(m.audited_ratio());

    // Anti-corruption policy is mandatory under CSRD: its absence always costs.
    score += if gov.anticorruption_policy {
        dec!(1.5)
    } else {
        dec!(-2.0)
    };

    if gov
        .board_diversity_age
        .as_deref()
        .is_some_and(|s| !s.is_empty())
    {
        score += dec!(0.5);
    }

    score += pay_ratio_adjustment(gov.ceo_median_pay_ratio.unwrap_or(Decimal::ZERO));
    score += political_contribution_adjustment(gov.political_contributions);

    if gov.board_independent_percent >= dec!(30) {
        score += dec!(1.0);
    }

    score += risk_management_bonus(gov.risks_identified);

    finalize_score(score)
}

fn supplier_audit_adjustment(audited_ratio: Decimal) -> Decimal {
    if audited_ratio >= dec!(50) {
        dec!(2.0)
    } else if audited_ratio >= dec!(30) {
        dec!(1.5)
    } else if audited_ratio >= dec!(10) {
        dec!(0.5)
    } else {
        dec!(-1.0)
    }
}

/// A missing ratio is treated as zero and lands in the "<= 50" band.
/// Ratios in (50, 100] are left unadjusted.
fn pay_ratio_adjustment(ratio: Decimal) -> Decimal {
    if ratio > Decimal::ZERO && ratio <= dec!(20) {
        dec!(1.5)
    } else if ratio <= dec!(50) {
        dec!(0.5)
    } else if ratio > dec!(100) {
        dec!(-1.0)
    } else {
        Decimal::ZERO
    }
}

fn political_contribution_adjustment(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        dec!(0.5)
    } else if amount > POLITICAL_CONTRIBUTION_LIMIT {
        dec!(-1.0)
    } else {
        Decimal::ZERO
    }
}

fn risk_management_bonus(risks_identified: u32) -> Decimal {
    match risks_identified {
        5.. => dec!(1.0),
        3 | 4 => dec!(0.5),
        _ => Decimal::ZERO,
    }
}
