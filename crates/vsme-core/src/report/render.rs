use std::fmt::Write;

use super::ReportDraft;
use crate::esg::round1;

const RULE: &str = "=================================================";
const THIN_RULE: &str = "-------------------------------------------------";

/// Render the plain-text report handed back to the company.
pub fn render_report(draft: &ReportDraft) -> String {
    let m = &draft.metrics;
    let r = &draft.result;
    let env = &m.environmental;
    let soc = &m.social;
    let gov = &m.governance;

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "   VSME ESG REPORT - {}", draft.company_name);
    let _ = writeln!(out, "{RULE}\n");

    let _ = writeln!(out, "ESG SCORE: {}/10 ({})", r.esg_score, r.band.label());
    let _ = writeln!(
        out,
        "VSME coverage: {}% ({} of {} datapoints)\n",
        draft.coverage_percent,
        crate::coverage::REPORTED_DATAPOINTS,
        crate::coverage::VSME_TOTAL_DATAPOINTS
    );

    // Environmental
    let _ = writeln!(out, "ENVIRONMENTAL: {}/10", r.environmental);
    let _ = writeln!(out, "   CO2 EMISSIONS:");
    let _ = writeln!(out, "   - Scope 1 (direct): {} t/year", env.scope1_co2);
    let _ = writeln!(out, "   - Scope 2 (electricity): {} t/year", env.scope2_co2);
    let _ = writeln!(out, "   - Scope 3 (value chain): {} t/year", env.scope3_co2);
    let _ = writeln!(out, "   - Total: {} t/year\n", m.total_co2());
    let _ = writeln!(out, "   ENERGY & RESOURCES:");
    let _ = writeln!(out, "   - Energy use: {} kWh/month", env.energy_kwh);
    let _ = writeln!(out, "   - Renewables: {}%", env.renewable_percent);
    let _ = writeln!(out, "   - Fossil fuels: {} L/year", env.fossil_fuels_liters);
    let _ = writeln!(
        out,
        "   - Water ({}): {} m3/month\n",
        env.water_source.label(),
        env.water_m3
    );
    let _ = writeln!(out, "   WASTE:");
    let _ = writeln!(out, "   - Total: {} kg/month", env.waste_kg);
    let _ = writeln!(out, "   - Hazardous: {} kg/month", env.waste_hazardous_kg);
    let _ = writeln!(out, "   - Recycled: {}%\n", env.waste_recycled_percent);
    let _ = writeln!(out, "   - Transport: {} km/year\n", env.transport_km);

    // Social
    let _ = writeln!(out, "SOCIAL: {}/10", r.social);
    let _ = writeln!(out, "   WORKFORCE:");
    let _ = writeln!(out, "   - Employees: {}", soc.employees_total);
    let _ = writeln!(
        out,
        "   - Permanent: {} ({}%)",
        soc.employees_permanent,
        round1(m.permanent_ratio())
    );
    let _ = writeln!(
        out,
        "   - Women: {} ({}%)",
        soc.employees_women,
        round1(m.women_ratio())
    );
    let _ = writeln!(out, "   - Gender pay gap: {}%", soc.salary_gap_percent);
    let _ = writeln!(out, "   - Annual turnover: {}%\n", soc.turnover_rate);
    let _ = writeln!(out, "   WORKING CONDITIONS:");
    let _ = writeln!(
        out,
        "   - Training: {}h ({}h/employee)",
        soc.training_hours,
        round1(m.training_per_employee())
    );
    let _ = writeln!(out, "   - Workplace accidents: {}", soc.accidents);
    let _ = writeln!(
        out,
        "   - Discrimination complaints: {}",
        soc.discrimination_complaints
    );
    let _ = writeln!(out, "   - Diversity policy: {}\n", yes_no(soc.diversity_policy));
    let _ = writeln!(out, "   VALUE CHAIN:");
    let _ = writeln!(out, "   - Local suppliers: {}%", soc.local_suppliers_percent);
    let _ = writeln!(out, "   - Human-rights audit: {}", yes_no(soc.supplier_audit_hr));
    let _ = writeln!(
        out,
        "   - Child labour policy: {}\n",
        yes_no(soc.child_labor_policy)
    );

    // Governance
    let _ = writeln!(out, "GOVERNANCE: {}/10", r.governance);
    let _ = writeln!(out, "   SUPPLIERS:");
    let _ = writeln!(out, "   - Total: {}", gov.suppliers_total);
    let _ = writeln!(
        out,
        "   - Audited: {} ({}%)\n",
        gov.suppliers_audited,
        round1(m.audited_ratio())
    );
    let _ = writeln!(out, "   BUSINESS ETHICS:");
    let anticorruption = if gov.anticorruption_policy {
        "Yes"
    } else {
        "No (CSRD critical)"
    };
    let _ = writeln!(out, "   - Anti-corruption policy: {anticorruption}");
    let _ = writeln!(
        out,
        "   - Political contributions: €{}\n",
        gov.political_contributions
    );
    let _ = writeln!(out, "   CORPORATE GOVERNANCE:");
    let _ = writeln!(
        out,
        "   - Independent board: {}%",
        gov.board_independent_percent
    );
    if let Some(age) = gov.board_diversity_age.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "   - Board age diversity: {age}");
    }
    if let Some(ratio) = gov.ceo_median_pay_ratio.filter(|r| !r.is_zero()) {
        let _ = writeln!(out, "   - CEO/median pay ratio: {}x", ratio.normalize());
    }
    let _ = writeln!(out, "   - Risks identified: {}\n", gov.risks_identified);

    // Recommendations
    let _ = writeln!(out, "TOP RECOMMENDED ACTIONS (BY PRIORITY):");
    let _ = writeln!(out, "{THIN_RULE}");
    if r.recommendations.is_empty() {
        let _ = writeln!(out, "No actions outstanding.\n");
    }
    for (i, rec) in r.recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}] {}\n   Impact: {}\n   Cost: {}\n",
            i + 1,
            rec.priority.label(),
            rec.action,
            rec.impact,
            rec.cost
        );
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "VSME-ready report ({}% of EFRAG datapoints)",
        draft.coverage_percent
    );
    let _ = writeln!(
        out,
        "Generated: {}",
        draft.created_at.format("%d/%m/%Y %H:%M")
    );
    let _ = writeln!(out, "{RULE}");

    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esg::fixtures::baseline;
    use crate::esg::scoring::score;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn draft() -> ReportDraft {
        let mut metrics = baseline();
        metrics.environmental.scope1_co2 = dec!(1.5);
        metrics.environmental.scope2_co2 = dec!(2);
        metrics.social.employees_women = 3;
        metrics.governance.ceo_median_pay_ratio = Some(dec!(12.50));
        metrics.governance.board_diversity_age = Some("28-61".into());
        ReportDraft {
            profile_id: "p1".into(),
            submission_id: "s1".into(),
            company_name: "Cerámicas Levante SA".into(),
            created_at: Utc.with_ymd_and_hms(2026, 2, 9, 18, 38, 0).unwrap(),
            result: score(&metrics),
            metrics,
            coverage_percent: 21,
        }
    }

    #[test]
    fn test_report_headline_and_sections() {
        let d = draft();
        let text = render_report(&d);
        assert!(text.contains("VSME ESG REPORT - Cerámicas Levante SA"));
        assert!(text.contains(&format!("ESG SCORE: {}/10", d.result.esg_score)));
        assert!(text.contains("VSME coverage: 21% (30 of 140 datapoints)"));
        assert!(text.contains("   - Total: 3.5 t/year"));
        assert!(text.contains("   - Women: 3 (30.0%)"));
        assert!(text.contains("   - Board age diversity: 28-61"));
        assert!(text.contains("   - CEO/median pay ratio: 12.5x"));
        assert!(text.contains("Anti-corruption policy: No (CSRD critical)"));
        assert!(text.contains("Generated: 09/02/2026 18:38"));
    }

    #[test]
    fn test_recommendations_numbered_in_priority_order() {
        let d = draft();
        let text = render_report(&d);
        let first = &d.result.recommendations[0];
        assert!(text.contains(&format!("1. [Critical (CSRD)] {}", first.action)));
        let n = d.result.recommendations.len();
        assert!(text.contains(&format!("{}. [", n)));
        assert!(!text.contains(&format!("{}. [", n + 1)));
    }
}
