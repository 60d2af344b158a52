//! Breakeven detection over a sampled payoff curve.

use rust_decimal::Decimal;
use rust_decimal::prelude::Signed;

use crate::payoff::PayoffPoint;

/// Find the prices at which the sampled payoff crosses zero.
///
/// Scans consecutive point pairs; wherever the profit changes sign
/// between two adjacent samples (touching zero counts), the zero
/// crossing is linearly interpolated:
/// `p1 + (-y1 / (y2 - y1)) * (p2 - p1)`. Flat segments are skipped, so
/// the interpolation never divides by zero.
///
/// The curve is assumed sorted by ascending price, so the crossings come
/// back in ascending order. The payoff of a fixed leg set is
/// piecewise-linear in price, which makes the interpolation exact
/// whenever the grid brackets each crossing between two samples.
#[must_use]
pub fn find_breakevens(curve: &[PayoffPoint]) -> Vec<Decimal> {
    let mut breakevens = Vec::new();

    for pair in curve.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.profit == second.profit {
            // flat segment: no crossing to interpolate
            continue;
        }
        if first.profit.signum() * second.profit.signum() > Decimal::ZERO {
            continue;
        }

        let fraction = -first.profit / (second.profit - first.profit);
        let crossing = first.price + fraction * (second.price - first.price);

        // A sample landing exactly on zero is seen by both adjacent
        // pairs; report the crossing once.
        if breakevens.last() != Some(&crossing) {
            breakevens.push(crossing);
        }
    }

    breakevens
}
