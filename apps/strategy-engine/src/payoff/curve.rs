//! Payoff curve sampling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::position::Position;

use super::calculator::aggregate_profit;

/// One sample of the aggregate payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Hypothetical underlying price.
    pub price: Decimal,
    /// Aggregate profit/loss at that price.
    pub profit: Decimal,
}

/// Sample the aggregate payoff evenly across `[price_min, price_max]`.
///
/// Produces exactly `num_points` samples inclusive of both endpoints,
/// with step `(price_max - price_min) / (num_points - 1)`. When
/// `price_min == price_max` the same point is repeated `num_points`
/// times.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateCurve`] if `num_points < 2`.
pub fn generate_payoff_curve(
    positions: &[Position],
    price_min: Decimal,
    price_max: Decimal,
    num_points: usize,
) -> Result<Vec<PayoffPoint>, EngineError> {
    if num_points < 2 {
        return Err(EngineError::DegenerateCurve { num_points });
    }

    let step = (price_max - price_min) / Decimal::from(num_points as u64 - 1);

    let mut curve = Vec::with_capacity(num_points);
    for i in 0..num_points {
        // Pin the last sample to the exact upper bound so step rounding
        // never drifts the endpoint.
        let price = if i == num_points - 1 {
            price_max
        } else {
            price_min + step * Decimal::from(i as u64)
        };
        curve.push(PayoffPoint {
            price,
            profit: aggregate_profit(positions, price),
        });
    }

    Ok(curve)
}
