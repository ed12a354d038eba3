use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::finalize_score;
use super::metrics::MetricsRecord;
use crate::types::Score;

const BASE_SCORE: Decimal = dec!(5.0);

/// Deducted per discrimination complaint, without a floor.
const COMPLAINT_PENALTY: Decimal = dec!(1.5);

/// Social pillar score in [0, 10]. Workforce stability, pay equity, and
/// safety move the score either way from a neutral 5.
pub fn score_social(m: &MetricsRecord) -> Score {
    let soc = &m.social;
    let mut score = BASE_SCORE;

    score += permanent_contract_adjustment(m.permanent_ratio());
    score += salary_gap_adjustment(soc.salary_gap_percent);
    score += turnover_adjustment(soc.turnover_rate);
    score -= Decimal::from(soc.discrimination_complaints) * COMPLAINT_PENALTY;
    score += gender_balance_bonus(m.women_ratio());
    score += training_bonus(m.training_per_employee());
    score += safety_adjustment(soc.accidents);

    if soc.supplier_audit_hr {
        score += dec!(1.0);
    }
    if soc.child_labor_policy {
        score += dec!(0.5);
    }
    if soc.diversity_policy {
        score += dec!(0.5);
    }

    finalize_score(score)
}

fn permanent_contract_adjustment(ratio: Decimal) -> Decimal {
    if ratio >= dec!(90) {
        dec!(2.5)
    } else if ratio >= dec!(80) {
        dec!(2.0)
    } else if ratio >= dec!(60) {
        dec!(1.0)
    } else {
        dec!(-0.5)
    }
}

/// Gaps above 10% up to and including 20% are left unadjusted.
fn salary_gap_adjustment(gap: Decimal) -> Decimal {
    if gap <= dec!(5) {
        dec!(2.0)
    } else if gap <= dec!(10) {
        dec!(1.0)
    } else if gap > dec!(20) {
        dec!(-2.0)
    } else {
        Decimal::ZERO
    }
}

fn turnover_adjustment(rate: Decimal) -> Decimal {
    if rate <= dec!(10) {
        dec!(1.0)
    } else if rate > dec!(30) {
        dec!(-1.5)
    } else {
        Decimal::ZERO
    }
}

/// A 40-60% share of women earns the full bonus; anything from 30% up
/// (including a majority above 60%) earns the partial one.
fn gender_balance_bonus(women_ratio: Decimal) -> Decimal {
    if women_ratio >= dec!(40) && women_ratio <= dec!(60) {
        dec!(1.5)
    } else if women_ratio >= dec!(30) {
        dec!(0.5)
    } else {
        Decimal::ZERO
    }
}

fn training_bonus(hours_per_employee: Decimal) -> Decimal {
    if hours_per_employee >= dec!(30) {
        dec!(1.5)
    } else if hours_per_employee >= dec!(20) {
        dec!(1.0)
    } else {
        Decimal::ZERO
    }
}

fn safety_adjustment(accidents: u32) -> Decimal {
    match accidents {
        0 => dec!(1.0),
        1 | 2 => Decimal::ZERO,
        _ => dec!(-2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esg::fixtures::baseline;

    #[test]
    fn test_baseline_clamps_to_ten() {
        // raw 13.0
        assert_eq!(score_social(&baseline()), dec!(10.0));
    }

    #[test]
    fn test_discrimination_complaints_scale_linearly() {
        let mut m = baseline();
        m.social.discrimination_complaints = 3;
        // 5 + 2.5 + 2 + 1 - 4.5 + 1.5 + 0 + 1 = 8.5
        assert_eq!(score_social(&m), dec!(8.5));

        m.social.discrimination_complaints = 10;
        assert_eq!(score_social(&m), dec!(0));
    }

    #[test]
    fn test_salary_gap_middle_band_unadjusted() {
        assert_eq!(salary_gap_adjustment(dec!(5)), dec!(2.0));
        assert_eq!(salary_gap_adjustment(dec!(10)), dec!(1.0));
        assert_eq!(salary_gap_adjustment(dec!(15)), dec!(0));
        assert_eq!(salary_gap_adjustment(dec!(20)), dec!(0));
        assert_eq!(salary_gap_adjustment(dec!(20.5)), dec!(-2.0));
    }

    #[test]
    fn test_gender_balance_branches() {
        assert_eq!(gender_balance_bonus(dec!(50)), dec!(1.5));
        assert_eq!(gender_balance_bonus(dec!(35)), dec!(0.5));
        assert_eq!(gender_balance_bonus(dec!(75)), dec!(0.5));
        assert_eq!(gender_balance_bonus(dec!(65)), dec!(0.5));
        assert_eq!(gender_balance_bonus(dec!(29.9)), dec!(0));
    }

    #[test]
    fn test_no_employees_uses_zero_ratios() {
        let mut m = baseline();
        m.social.employees_total = 0;
        m.social.training_hours = dec!(500);
        assert_eq!(m.permanent_ratio(), dec!(0));
        assert_eq!(m.women_ratio(), dec!(0));
        assert_eq!(m.training_per_employee(), dec!(0));
        // 5 - 0.5 + 2 + 1 + 0 + 0 + 1 = 8.5
        assert_eq!(score_social(&m), dec!(8.5));
    }

    #[test]
    fn test_struggling_workforce() {
        let mut m = baseline();
        m.social.employees_permanent = 5;
        m.social.employees_women = 1;
        m.social.salary_gap_percent = dec!(25);
        m.social.turnover_rate = dec!(40);
        m.social.accidents = 4;
        m.social.training_hours = dec!(250);
        // 5 - 0.5 - 2 - 1.5 + 0 + 1.0 (25h/head) - 2 = 0
        assert_eq!(score_social(&m), dec!(0));
    }

    #[test]
    fn test_policies_add_up() {
        let mut m = baseline();
        m.social.employees_permanent = 7;
        m.social.salary_gap_percent = dec!(12);
        m.social.turnover_rate = dec!(20);
        m.social.employees_women = 2;
        m.social.accidents = 1;
        m.social.supplier_audit_hr = true;
        m.social.child_labor_policy = true;
        m.social.diversity_policy = true;
        // 5 + 1 + 0 + 0 + 0 + 0 + 0 + 1 + 0.5 + 0.5 = 8
        assert_eq!(score_social(&m), dec!(8.0));
    }
}
