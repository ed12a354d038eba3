use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// The validated questionnaire for one company and reporting period.
///
/// Constructed once per submission and scored once. Field ranges are checked
/// by [`crate::esg::validation`] before the record reaches the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub environmental: EnvironmentalMetrics,
    pub social: SocialMetrics,
    pub governance: GovernanceMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMetrics {
    /// kWh per month
    pub energy_kwh: Decimal,
    /// m3 per month
    pub water_m3: Decimal,
    pub water_source: WaterSource,
    /// tCO2e per year, direct emissions
    pub scope1_co2: Decimal,
    /// tCO2e per year, purchased electricity
    pub scope2_co2: Decimal,
    /// tCO2e per year, value chain
    pub scope3_co2: Decimal,
    /// kg per month
    pub waste_kg: Decimal,
    /// kg per month
    pub waste_hazardous_kg: Decimal,
    /// 0-100
    pub waste_recycled_percent: Percent,
    /// 0-100
    pub renewable_percent: Percent,
    /// km per year
    pub transport_km: Decimal,
    /// litres per year
    pub fossil_fuels_liters: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub employees_total: u32,
    pub employees_permanent: u32,
    pub employees_women: u32,
    /// total hours across the workforce
    pub training_hours: Decimal,
    pub accidents: u32,
    pub discrimination_complaints: u32,
    /// 0-100
    pub local_suppliers_percent: Percent,
    pub diversity_policy: bool,
    /// 0-100, gender pay gap
    pub salary_gap_percent: Percent,
    /// 0-100, annual
    pub turnover_rate: Percent,
    pub supplier_audit_hr: bool,
    pub child_labor_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceMetrics {
    pub suppliers_total: u32,
    pub suppliers_audited: u32,
    pub anticorruption_policy: bool,
    /// 0-100
    pub board_independent_percent: Percent,
    /// Free-text description of the board's age spread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_diversity_age: Option<String>,
    /// CEO pay / median employee pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceo_median_pay_ratio: Option<Decimal>,
    /// EUR per year
    pub political_contributions: Decimal,
    pub risks_identified: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterSource {
    #[serde(alias = "red")]
    Mains,
    #[serde(alias = "pozo")]
    Well,
    #[serde(alias = "reciclada")]
    Recycled,
    #[serde(alias = "mixta")]
    Mixed,
}

impl WaterSource {
    pub fn label(&self) -> &'static str {
        match self {
            WaterSource::Mains => "mains",
            WaterSource::Well => "well",
            WaterSource::Recycled => "recycled",
            WaterSource::Mixed => "mixed",
        }
    }
}

// ---------------------------------------------------------------------------
// Derived figures
// ---------------------------------------------------------------------------

/// `numerator / denominator * 100`, or zero when the denominator is zero.
pub(crate) fn ratio_percent(numerator: u32, denominator: u32) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(numerator) / Decimal::from(denominator) * dec!(100)
}

impl EnvironmentalMetrics {
    /// Scope 1 + 2 + 3, tCO2e per year. Saturates at the Decimal range
    /// instead of overflowing, so unvalidated records still score.
    pub fn total_co2(&self) -> Decimal {
        self.scope1_co2
            .saturating_add(self.scope2_co2)
            .saturating_add(self.scope3_co2)
    }
}

impl MetricsRecord {
    pub fn total_co2(&self) -> Decimal {
        self.environmental.total_co2()
    }

    /// Emissions per head. Falls back to the undivided total when there is
    /// no workforce to spread it over.
    pub fn co2_per_employee(&self) -> Decimal {
        let total = self.total_co2();
        match self.social.employees_total {
            0 => total,
            n => total / Decimal::from(n),
        }
    }

    pub fn permanent_ratio(&self) -> Percent {
        ratio_percent(self.social.employees_permanent, self.social.employees_total)
    }

    pub fn women_ratio(&self) -> Percent {
        ratio_percent(self.social.employees_women, self.social.employees_total)
    }

    pub fn training_per_employee(&self) -> Decimal {
        match self.social.employees_total {
            0 => Decimal::ZERO,
            n => self.social.training_hours / Decimal::from(n),
        }
    }

    pub fn audited_ratio(&self) -> Percent {
        ratio_percent(
            self.governance.suppliers_audited,
            self.governance.suppliers_total,
        )
    }
}
