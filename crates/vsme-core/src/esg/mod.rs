pub mod environmental;
pub mod governance;
pub mod metrics;
pub mod recommendations;
pub mod scoring;
pub mod social;
pub mod validation;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Score;

pub(crate) const SCORE_MIN: Decimal = dec!(0.0);
pub(crate) const SCORE_MAX: Decimal = dec!(10.0);

/// Round to one decimal place, halves away from zero.
pub(crate) fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a raw pillar total into [0, 10] and round it for publication.
pub(crate) fn finalize_score(raw: Decimal) -> Score {
    round1(raw.clamp(SCORE_MIN, SCORE_MAX))
}
