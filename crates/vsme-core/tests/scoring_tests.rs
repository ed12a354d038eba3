use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use vsme_core::esg::metrics::{MetricsRecord, WaterSource};
use vsme_core::esg::recommendations::{Category, Priority};
use vsme_core::esg::scoring::{calculate_vsme_score, composite_score, score, VsmeScoreInput};
use vsme_core::esg::{environmental, governance, social};
use vsme_core::VsmeError;

// ===========================================================================
// Fixtures
// ===========================================================================

fn sample_submission() -> serde_json::Value {
    json!({
        "company_name": "Conservas del Cantábrico SL",
        "metrics": {
            "environmental": {
                "energy_kwh": 4200,
                "water_m3": 85,
                "water_source": "mains",
                "scope1_co2": 12.4,
                "scope2_co2": 8.1,
                "scope3_co2": 30,
                "waste_kg": 900,
                "waste_hazardous_kg": 35,
                "waste_recycled_percent": 45,
                "renewable_percent": 30,
                "transport_km": 18000,
                "fossil_fuels_liters": 1200
            },
            "social": {
                "employees_total": 24,
                "employees_permanent": 20,
                "employees_women": 11,
                "training_hours": 360,
                "accidents": 1,
                "discrimination_complaints": 0,
                "local_suppliers_percent": 60,
                "diversity_policy": true,
                "salary_gap_percent": 12,
                "turnover_rate": 14,
                "supplier_audit_hr": false,
                "child_labor_policy": true
            },
            "governance": {
                "suppliers_total": 40,
                "suppliers_audited": 6,
                "anticorruption_policy": true,
                "board_independent_percent": 25,
                "board_diversity_age": "35-62",
                "ceo_median_pay_ratio": 6.5,
                "political_contributions": 0,
                "risks_identified": 3
            }
        }
    })
}

fn sample_input() -> VsmeScoreInput {
    serde_json::from_value(sample_submission()).unwrap()
}

fn neutral_metrics() -> MetricsRecord {
    let mut value = sample_submission()["metrics"].clone();
    value["environmental"] = json!({
        "energy_kwh": 0, "water_m3": 0, "water_source": "mains",
        "scope1_co2": 0, "scope2_co2": 0, "scope3_co2": 0,
        "waste_kg": 0, "waste_hazardous_kg": 0, "waste_recycled_percent": 0,
        "renewable_percent": 0, "transport_km": 0, "fossil_fuels_liters": 0
    });
    value["social"] = json!({
        "employees_total": 10, "employees_permanent": 10, "employees_women": 5,
        "training_hours": 0, "accidents": 0, "discrimination_complaints": 0,
        "local_suppliers_percent": 0, "diversity_policy": false,
        "salary_gap_percent": 0, "turnover_rate": 0,
        "supplier_audit_hr": false, "child_labor_policy": false
    });
    value["governance"] = json!({
        "suppliers_total": 0, "suppliers_audited": 0, "anticorruption_policy": false,
        "board_independent_percent": 0, "political_contributions": 0, "risks_identified": 0
    });
    serde_json::from_value(value).unwrap()
}

// ===========================================================================
// Worked examples
// ===========================================================================

#[test]
fn test_environmental_bonuses_clamp_at_ten() {
    let mut m = neutral_metrics();
    m.environmental.scope1_co2 = dec!(1);
    m.environmental.scope2_co2 = dec!(1);
    m.environmental.scope3_co2 = dec!(1);
    m.social.employees_total = 2;
    m.environmental.renewable_percent = dec!(100);
    m.environmental.waste_recycled_percent = dec!(60);
    m.environmental.water_source = WaterSource::Recycled;

    assert_eq!(environmental::score_environmental(&m), dec!(10.0));
}

#[test]
fn test_governance_without_anticorruption_policy() {
    let m = neutral_metrics();
    assert!(!m.governance.anticorruption_policy);
    assert_eq!(governance::score_governance(&m), dec!(4.0));
}

#[test]
fn test_social_with_discrimination_complaints() {
    let mut m = neutral_metrics();
    m.social.discrimination_complaints = 3;
    assert_eq!(social::score_social(&m), dec!(8.5));
}

#[test]
fn test_sample_company_end_to_end() {
    let input = sample_input();
    let out = calculate_vsme_score(&input).unwrap();
    let r = &out.result;

    // E: 50.5 t / 24 = 2.10 t/head -> -1.5; fossil -1.5; renewables +2.0;
    //    recycling +0.75 => 9.75
    assert_eq!(r.environmental, dec!(9.8));
    // S: 5 + 2.0 (83% permanent) + 0 (12% gap) + 0 (14% turnover) + 1.5 (46% women)
    //    + 0 (15h/head) + 0 (1 accident) + 0.5 + 0.5 => 9.5
    assert_eq!(r.social, dec!(9.5));
    // G: 6 + 0.5 (15% audited) + 1.5 + 0.5 + 1.5 + 0.5 + 0 + 0.5 => 11 -> 10
    assert_eq!(r.governance, dec!(10.0));
    // 0.4*9.8 + 0.3*9.5 + 0.3*10 = 3.92 + 2.85 + 3 = 9.77
    assert_eq!(r.esg_score, dec!(9.8));

    // Scope 3 is 30 of 50.5 t, below the 70% share, so no supplier audit on emissions
    let actions: Vec<(Priority, Category)> = r
        .recommendations
        .iter()
        .map(|rec| (rec.priority, rec.category))
        .collect();
    assert_eq!(
        actions,
        vec![
            (Priority::High, Category::Environmental),
            (Priority::High, Category::Social),
            (Priority::High, Category::Governance),
            (Priority::Medium, Category::Environmental),
            (Priority::Medium, Category::Social),
        ]
    );
    assert!(out.warnings.is_empty());
}

#[test]
fn test_composite_arithmetic_is_exact() {
    for (e, s, g) in [
        (dec!(9.8), dec!(8.5), dec!(10.0)),
        (dec!(0), dec!(0), dec!(0)),
        (dec!(3.3), dec!(7.7), dec!(1.1)),
        (dec!(6.25), dec!(0), dec!(0)),
    ] {
        let expected = (dec!(0.4) * e + dec!(0.3) * s + dec!(0.3) * g)
            .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(composite_score(e, s, g), expected);
    }
    // 0.4 * 6.25 = 2.5 exactly
    assert_eq!(composite_score(dec!(6.25), dec!(0), dec!(0)), dec!(2.5));
}

#[test]
fn test_scoring_twice_is_identical() {
    let m = sample_input().metrics;
    let a = serde_json::to_string(&score(&m)).unwrap();
    let b = serde_json::to_string(&score(&m)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_legacy_water_source_values_accepted() {
    let mut value = sample_submission();
    value["metrics"]["environmental"]["water_source"] = json!("reciclada");
    let input: VsmeScoreInput = serde_json::from_value(value).unwrap();
    assert_eq!(
        input.metrics.environmental.water_source,
        WaterSource::Recycled
    );
}

#[test]
fn test_invalid_submission_rejected_before_scoring() {
    let mut input = sample_input();
    input.metrics.governance.board_independent_percent = dec!(101);
    let err = calculate_vsme_score(&input).unwrap_err();
    match err {
        VsmeError::InvalidInput { field, .. } => assert_eq!(field, "board_independent_percent"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_unknown_water_source_rejected_by_deserializer() {
    let mut value = sample_submission();
    value["metrics"]["environmental"]["water_source"] = json!("river");
    assert!(serde_json::from_value::<VsmeScoreInput>(value).is_err());
}

#[test]
fn test_zero_employee_record_scores_without_fault() {
    let mut m = neutral_metrics();
    m.social.employees_total = 0;
    let r = score(&m);
    assert!(r.social >= Decimal::ZERO && r.social <= dec!(10));
    assert_eq!(r.social, dec!(8.5));
}

#[test]
fn test_huge_emissions_rejected_by_validation_and_scored_without_overflow() {
    let huge = Decimal::MAX / dec!(2) + Decimal::ONE;
    let mut input = sample_input();
    input.metrics.environmental.scope1_co2 = huge;
    input.metrics.environmental.scope2_co2 = huge;

    match calculate_vsme_score(&input).unwrap_err() {
        VsmeError::InvalidInput { field, .. } => assert_eq!(field, "scope1_co2"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }

    // The raw engine stays total on records that never saw validation
    let mut m = neutral_metrics();
    m.environmental.scope1_co2 = huge;
    m.environmental.scope2_co2 = huge;
    m.environmental.scope3_co2 = Decimal::MAX;
    let r = score(&m);
    assert_eq!(m.total_co2(), Decimal::MAX);
    // Saturated total over 10 heads is far above 3 t/head: 10 - 3
    assert_eq!(r.environmental, dec!(7.0));
    assert_eq!(r.recommendations[0].priority, Priority::CriticalCsrd);
    assert!(r
        .recommendations
        .iter()
        .any(|rec| rec.action == "Audit high-impact Scope 3 suppliers"));
}
