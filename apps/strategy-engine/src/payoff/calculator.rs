//! Pointwise profit/loss evaluation.
//!
//! Intrinsic-value-only model: the payoff of each leg if exercised at the
//! hypothetical underlying price, net of the entry premium. Appropriate
//! for expiry-date payoff diagrams, not for marking live positions.

use rust_decimal::Decimal;

use crate::position::{OptionType, Position, PositionAction};

/// Intrinsic value per share of one leg at the given underlying price.
///
/// Call: `max(0, S - K)`. Put: `max(0, K - S)`.
#[must_use]
pub fn leg_intrinsic_value(position: &Position, underlying_price: Decimal) -> Decimal {
    match position.option_type {
        OptionType::Call => (underlying_price - position.strike).max(Decimal::ZERO),
        OptionType::Put => (position.strike - underlying_price).max(Decimal::ZERO),
    }
}

/// Expiry profit/loss of one leg at the given underlying price.
///
/// Buy: `(iv - premium) * quantity * 100`.
/// Sell: `(premium - iv) * quantity * 100`.
/// A zero-quantity leg yields exactly zero.
#[must_use]
pub fn leg_profit(position: &Position, underlying_price: Decimal) -> Decimal {
    let intrinsic = leg_intrinsic_value(position, underlying_price);
    let per_share = match position.action {
        PositionAction::Buy => intrinsic - position.premium,
        PositionAction::Sell => position.premium - intrinsic,
    };
    per_share * position.share_quantity()
}

/// Aggregate expiry profit/loss of a position set at the given price.
///
/// Empty input yields zero.
#[must_use]
pub fn aggregate_profit(positions: &[Position], underlying_price: Decimal) -> Decimal {
    positions
        .iter()
        .map(|p| leg_profit(p, underlying_price))
        .sum()
}
