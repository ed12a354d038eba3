//! Share of the VSME standard that a submission reports on.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Datapoints in the full VSME standard.
pub const VSME_TOTAL_DATAPOINTS: u32 = 140;

/// Datapoints collected by the basic-module questionnaire.
pub const REPORTED_DATAPOINTS: u32 = 30;

/// Whole-number percentage of the standard covered by a submission.
pub fn coverage_percent() -> u32 {
    let pct = Decimal::from(REPORTED_DATAPOINTS) / Decimal::from(VSME_TOTAL_DATAPOINTS) * dec!(100);
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
