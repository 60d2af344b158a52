//! Sampled max-risk / max-reward estimation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::payoff::aggregate_profit;
use crate::position::Position;

/// Maximum risk and reward estimate for a position set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReward {
    /// Largest loss observed across the sampled prices (absolute value).
    pub max_risk: Decimal,
    /// Largest profit observed across the sampled prices.
    pub max_reward: Decimal,
}

/// Estimate max risk and reward by evaluating the payoff at candidate
/// prices.
///
/// Candidates: zero, `min_strike - 0.5 * range` and
/// `max_strike + 0.5 * range` (where `range = max_strike - min_strike`),
/// the current price, every distinct strike, and every strike scaled by
/// 0.8 and 1.2. Negative candidates are discarded.
///
/// This is a sampling heuristic, not an exact optimizer. The true
/// extremum of a piecewise-linear payoff sits at a strike, at zero, or
/// at infinity; an unbounded payoff (e.g. a naked long call) is reported
/// as the value at the highest sampled price, never as infinity, and a
/// pathological multi-leg combination can put its extremum outside the
/// sampled set.
#[must_use]
pub fn estimate_risk_reward(positions: &[Position], current_price: Decimal) -> RiskReward {
    if positions.is_empty() {
        return RiskReward::default();
    }

    let strikes: BTreeSet<Decimal> = positions.iter().map(|p| p.strike).collect();
    let (Some(&min_strike), Some(&max_strike)) = (strikes.first(), strikes.last()) else {
        return RiskReward::default();
    };
    let range = max_strike - min_strike;
    let half_range = range * Decimal::new(5, 1);

    let mut candidates = vec![
        Decimal::ZERO,
        min_strike - half_range,
        max_strike + half_range,
        current_price,
    ];
    for &strike in &strikes {
        candidates.push(strike);
        candidates.push(strike * Decimal::new(8, 1));
        candidates.push(strike * Decimal::new(12, 1));
    }

    let mut min_profit = Decimal::MAX;
    let mut max_profit = Decimal::MIN;
    let mut evaluated = 0usize;
    for price in candidates {
        if price < Decimal::ZERO {
            continue;
        }
        let profit = aggregate_profit(positions, price);
        min_profit = min_profit.min(profit);
        max_profit = max_profit.max(profit);
        evaluated += 1;
    }

    debug!(
        legs = positions.len(),
        candidates = evaluated,
        %min_profit,
        %max_profit,
        "estimated risk/reward from sampled prices"
    );

    RiskReward {
        max_risk: min_profit.abs(),
        max_reward: max_profit,
    }
}
