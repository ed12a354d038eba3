//! Subscription plans and the monthly report quota they grant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VsmeError;
use crate::VsmeResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Starter,
    Pro,
}

impl Plan {
    /// Reports that may be generated per calendar month.
    pub fn monthly_limit(&self) -> u32 {
        match self {
            Plan::Free => 1,
            Plan::Starter => 5,
            Plan::Pro => 999,
        }
    }

    /// Plan to suggest when this one's quota is exhausted.
    pub fn upgrade_target(&self) -> Plan {
        match self {
            Plan::Free => Plan::Starter,
            Plan::Starter | Plan::Pro => Plan::Pro,
        }
    }

    pub fn display_price(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Starter => "Starter €29/month",
            Plan::Pro => "Pro €59/month",
        }
    }

    /// Lenient parse: anything unrecognised is treated as the free plan.
    pub fn parse_lenient(s: &str) -> Plan {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Plan::Free => "free",
            Plan::Starter => "starter",
            Plan::Pro => "pro",
        };
        f.write_str(name)
    }
}

impl FromStr for Plan {
    type Err = VsmeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "starter" => Ok(Plan::Starter),
            "pro" => Ok(Plan::Pro),
            other => Err(VsmeError::InvalidInput {
                field: "plan".into(),
                reason: format!("Unknown plan '{}'.", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub plan: Plan,
    pub used: u32,
    pub limit: u32,
    /// Reports left this month after the one about to be generated
    pub remaining_after: u32,
}

/// Decide whether one more report may be generated this month.
pub fn check_quota(plan: Plan, reports_this_month: u32) -> VsmeResult<QuotaStatus> {
    let limit = plan.monthly_limit();
    if reports_this_month >= limit {
        tracing::warn!(%plan, used = reports_this_month, limit, "monthly report quota exhausted");
        return Err(VsmeError::QuotaExceeded {
            plan: plan.to_string(),
            used: reports_this_month,
            limit,
            upgrade_to: plan.upgrade_target().display_price().to_string(),
        });
    }
    Ok(QuotaStatus {
        plan,
        used: reports_this_month,
        limit,
        remaining_after: limit - reports_this_month - 1,
    })
}
