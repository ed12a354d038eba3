use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::finalize_score;
use super::metrics::{MetricsRecord, WaterSource};
use crate::types::Score;

const BASE_SCORE: Decimal = dec!(10.0);

/// Fossil fuel consumption above this many litres per year is penalised.
const FOSSIL_FUEL_LIMIT_LITRES: Decimal = dec!(500);

/// Each 15 percentage points of renewable supply is worth one point.
const RENEWABLE_DIVISOR: Decimal = dec!(15);

/// Environmental pillar score in [0, 10], starting from a clean 10 and
/// deducting for emissions, fossil fuels, and hazardous waste.
pub fn score_environmental(m: &MetricsRecord) -> Score {
    let env = &m.environmental;
    let mut score = BASE_SCORE;

    score -= emissions_penalty(m.co2_per_employee());

    if env.fossil_fuels_liters > FOSSIL_FUEL_LIMIT_LITRES {
        score -= dec!(1.5);
    }

    score += env.renewable_percent / RENEWABLE_DIVISOR;
    score -= hazardous_waste_penalty(env.waste_hazardous_kg);
    score += recycling_bonus(env.waste_recycled_percent);

    if env.water_source == WaterSource::Recycled {
        score += dec!(0.5);
    }

    finalize_score(score)
}

/// tCO2e per employee. Only the most severe matching tier applies.
fn emissions_penalty(co2_per_employee: Decimal) -> Decimal {
    if co2_per_employee > dec!(3) {
        dec!(3.0)
    } else if co2_per_employee > dec!(1.5) {
        dec!(1.5)
    } else if co2_per_employee > dec!(0.8) {
        dec!(0.5)
    } else {
        Decimal::ZERO
    }
}

fn hazardous_waste_penalty(kg: Decimal) -> Decimal {
    if kg > dec!(100) {
        dec!(2.0)
    } else if kg > dec!(50) {
        dec!(1.0)
    } else {
        Decimal::ZERO
    }
}

fn recycling_bonus(recycled_percent: Decimal) -> Decimal {
    if recycled_percent >= dec!(50) {
        dec!(1.5)
    } else if recycled_percent >= dec!(30) {
        dec!(0.75)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esg::fixtures::baseline;

    #[test]
    fn test_clean_company_keeps_full_score() {
        assert_eq!(score_environmental(&baseline()), dec!(10.0));
    }

    #[test]
    fn test_renewables_recycling_and_water_bonus_clamped() {
        let mut m = baseline();
        m.environmental.scope1_co2 = dec!(1);
        m.environmental.scope2_co2 = dec!(1);
        m.environmental.scope3_co2 = dec!(1);
        m.social.employees_total = 2;
        m.environmental.renewable_percent = dec!(100);
        m.environmental.waste_recycled_percent = dec!(60);
        m.environmental.water_source = WaterSource::Recycled;

        assert_eq!(m.co2_per_employee(), dec!(1.5));
        assert_eq!(score_environmental(&m), dec!(10.0));
    }

    #[test]
    fn test_emission_tiers_are_exclusive() {
        assert_eq!(emissions_penalty(dec!(5)), dec!(3.0));
        assert_eq!(emissions_penalty(dec!(3)), dec!(1.5));
        assert_eq!(emissions_penalty(dec!(1.5)), dec!(0.5));
        assert_eq!(emissions_penalty(dec!(0.8)), dec!(0));
    }

    #[test]
    fn test_heavy_polluter() {
        let mut m = baseline();
        // 40 t over 10 employees = 4 t/head
        m.environmental.scope1_co2 = dec!(25);
        m.environmental.scope3_co2 = dec!(15);
        m.environmental.fossil_fuels_liters = dec!(800);
        m.environmental.waste_hazardous_kg = dec!(120);
        m.environmental.renewable_percent = dec!(10);

        // 10 - 3 - 1.5 + 0.666.. - 2 = 4.1666..
        assert_eq!(score_environmental(&m), dec!(4.2));
    }

    #[test]
    fn test_fossil_fuel_limit_is_exclusive() {
        let mut m = baseline();
        m.environmental.fossil_fuels_liters = dec!(500);
        assert_eq!(score_environmental(&m), dec!(10.0));
        m.environmental.fossil_fuels_liters = dec!(500.01);
        assert_eq!(score_environmental(&m), dec!(8.5));
    }

    #[test]
    fn test_partial_recycling_and_moderate_hazardous_waste() {
        let mut m = baseline();
        m.environmental.scope2_co2 = dec!(20);
        m.environmental.waste_recycled_percent = dec!(30);
        m.environmental.waste_hazardous_kg = dec!(60);

        // 2 t/head -> -1.5; recycling +0.75; hazardous -1.0
        assert_eq!(score_environmental(&m), dec!(8.3));
    }

    #[test]
    fn test_no_workforce_uses_total_emissions() {
        let mut m = baseline();
        m.social.employees_total = 0;
        m.environmental.scope1_co2 = dec!(1);
        assert_eq!(m.co2_per_employee(), dec!(1));
        assert_eq!(score_environmental(&m), dec!(9.5));
    }
}
