use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::scoring::VsmeScoreInput;
use crate::error::VsmeError;
use crate::VsmeResult;

const MAX_COMPANY_NAME_LEN: usize = 255;
const MAX_BOARD_AGE_LEN: usize = 100;

/// Ceiling for any single reported quantity (kWh, tonnes, litres, EUR, ...).
const MAX_QUANTITY: Decimal = dec!(1000000000000000);

/// Reject submissions that fall outside the scorer's input domain.
///
/// The scorers themselves never re-check ranges, so anything that reaches
/// `score` must have passed through here (or an equivalent gate). Suspicious
/// but scoreable combinations are reported as warnings instead.
pub fn validate_input(input: &VsmeScoreInput, warnings: &mut Vec<String>) -> VsmeResult<()> {
    let name = input.company_name.trim();
    if name.is_empty() {
        return Err(invalid("company_name", "Company name must not be empty."));
    }
    if name.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(invalid(
            "company_name",
            &format!("Must be at most {} characters.", MAX_COMPANY_NAME_LEN),
        ));
    }

    let env = &input.metrics.environmental;
    non_negative("energy_kwh", env.energy_kwh)?;
    non_negative("water_m3", env.water_m3)?;
    non_negative("scope1_co2", env.scope1_co2)?;
    non_negative("scope2_co2", env.scope2_co2)?;
    non_negative("scope3_co2", env.scope3_co2)?;
    non_negative("waste_kg", env.waste_kg)?;
    non_negative("waste_hazardous_kg", env.waste_hazardous_kg)?;
    percentage("waste_recycled_percent", env.waste_recycled_percent)?;
    percentage("renewable_percent", env.renewable_percent)?;
    non_negative("transport_km", env.transport_km)?;
    non_negative("fossil_fuels_liters", env.fossil_fuels_liters)?;

    let soc = &input.metrics.social;
    if soc.employees_total == 0 {
        return Err(invalid("employees_total", "Must be at least 1."));
    }
    non_negative("training_hours", soc.training_hours)?;
    percentage("local_suppliers_percent", soc.local_suppliers_percent)?;
    percentage("salary_gap_percent", soc.salary_gap_percent)?;
    percentage("turnover_rate", soc.turnover_rate)?;

    if soc.employees_permanent > soc.employees_total {
        warnings.push(format!(
            "employees_permanent ({}) exceeds employees_total ({}).",
            soc.employees_permanent, soc.employees_total
        ));
    }
    if soc.employees_women > soc.employees_total {
        warnings.push(format!(
            "employees_women ({}) exceeds employees_total ({}).",
            soc.employees_women, soc.employees_total
        ));
    }

    let gov = &input.metrics.governance;
    percentage("board_independent_percent", gov.board_independent_percent)?;
    if let Some(ref age) = gov.board_diversity_age {
        if age.chars().count() > MAX_BOARD_AGE_LEN {
            return Err(invalid(
                "board_diversity_age",
                &format!("Must be at most {} characters.", MAX_BOARD_AGE_LEN),
            ));
        }
    }
    if let Some(ratio) = gov.ceo_median_pay_ratio {
        non_negative("ceo_median_pay_ratio", ratio)?;
    }
    non_negative("political_contributions", gov.political_contributions)?;

    if gov.suppliers_audited > gov.suppliers_total {
        warnings.push(format!(
            "suppliers_audited ({}) exceeds suppliers_total ({}).",
            gov.suppliers_audited, gov.suppliers_total
        ));
    }

    Ok(())
}

fn invalid(field: &str, reason: &str) -> VsmeError {
    VsmeError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

fn non_negative(field: &str, value: Decimal) -> VsmeResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "Must be non-negative."));
    }
    if value > MAX_QUANTITY {
        return Err(invalid(
            field,
            &format!("Must not exceed {}.", MAX_QUANTITY),
        ));
    }
    Ok(())
}

fn percentage(field: &str, value: Decimal) -> VsmeResult<()> {
    if value < dec!(0) || value > dec!(100) {
        return Err(invalid(field, "Must be between 0 and 100."));
    }
    Ok(())
}
