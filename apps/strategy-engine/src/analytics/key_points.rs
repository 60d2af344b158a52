//! Chart key-point derivation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payoff::{PayoffPoint, aggregate_profit};
use crate::position::Position;

use super::breakeven::find_breakevens;

/// Classification of a chart key point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPointKind {
    /// The current underlying price.
    CurrentPrice,
    /// A leg strike price.
    Strike,
    /// A zero-profit crossing.
    Breakeven,
    /// The highest-profit sample on the curve.
    MaxProfit,
    /// The lowest-profit sample on the curve.
    MaxLoss,
}

/// One annotated point for chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Underlying price of the point.
    pub price: Decimal,
    /// Aggregate profit at that price.
    pub profit: Decimal,
    /// What the point marks.
    pub kind: KeyPointKind,
}

/// Derive the annotated key points for a payoff chart.
///
/// Produces, in order: the current price, one point per distinct strike
/// (ascending), every breakeven found on the curve (ascending), and the
/// max-profit and max-loss samples of the curve. The extremum points are
/// curve samples, so their quality depends on the caller's grid the same
/// way [`find_breakevens`] does.
#[must_use]
pub fn chart_key_points(
    positions: &[Position],
    current_price: Decimal,
    curve: &[PayoffPoint],
) -> Vec<KeyPoint> {
    let mut points = vec![KeyPoint {
        price: current_price,
        profit: aggregate_profit(positions, current_price),
        kind: KeyPointKind::CurrentPrice,
    }];

    let strikes: BTreeSet<Decimal> = positions.iter().map(|p| p.strike).collect();
    for strike in strikes {
        points.push(KeyPoint {
            price: strike,
            profit: aggregate_profit(positions, strike),
            kind: KeyPointKind::Strike,
        });
    }

    for breakeven in find_breakevens(curve) {
        points.push(KeyPoint {
            price: breakeven,
            profit: Decimal::ZERO,
            kind: KeyPointKind::Breakeven,
        });
    }

    if let Some(best) = curve.iter().max_by_key(|p| p.profit) {
        points.push(KeyPoint {
            price: best.price,
            profit: best.profit,
            kind: KeyPointKind::MaxProfit,
        });
    }
    if let Some(worst) = curve.iter().min_by_key(|p| p.profit) {
        points.push(KeyPoint {
            price: worst.price,
            profit: worst.profit,
            kind: KeyPointKind::MaxLoss,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::generate_payoff_curve;
    use crate::position::{OptionType, PositionAction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn long_call(strike: Decimal, premium: Decimal) -> Position {
        Position {
            id: format!("call-{strike}"),
            option_type: OptionType::Call,
            action: PositionAction::Buy,
            strike,
            premium,
            quantity: 1,
            expiry: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            strategy: None,
        }
    }

    #[test]
    fn long_call_key_points() {
        let positions = vec![long_call(dec!(100), dec!(5))];
        let curve = generate_payoff_curve(&positions, dec!(50), dec!(150), 101).unwrap();
        let points = chart_key_points(&positions, dec!(102), &curve);

        assert_eq!(points.len(), 5);

        assert_eq!(points[0].kind, KeyPointKind::CurrentPrice);
        assert_eq!(points[0].price, dec!(102));
        assert_eq!(points[0].profit, dec!(-300));

        assert_eq!(points[1].kind, KeyPointKind::Strike);
        assert_eq!(points[1].price, dec!(100));
        assert_eq!(points[1].profit, dec!(-500));

        assert_eq!(points[2].kind, KeyPointKind::Breakeven);
        assert_eq!(points[2].price, dec!(105));
        assert_eq!(points[2].profit, Decimal::ZERO);

        assert_eq!(points[3].kind, KeyPointKind::MaxProfit);
        assert_eq!(points[3].price, dec!(150));
        assert_eq!(points[3].profit, dec!(4500));

        assert_eq!(points[4].kind, KeyPointKind::MaxLoss);
        assert_eq!(points[4].profit, dec!(-500));
    }

    #[test]
    fn distinct_strikes_appear_once_each() {
        let positions = vec![
            long_call(dec!(100), dec!(5)),
            long_call(dec!(100), dec!(3)),
            long_call(dec!(120), dec!(2)),
        ];
        let curve = generate_payoff_curve(&positions, dec!(50), dec!(150), 101).unwrap();
        let points = chart_key_points(&positions, dec!(110), &curve);

        let strikes: Vec<Decimal> = points
            .iter()
            .filter(|p| p.kind == KeyPointKind::Strike)
            .map(|p| p.price)
            .collect();
        assert_eq!(strikes, vec![dec!(100), dec!(120)]);
    }

    #[test]
    fn empty_curve_still_yields_current_and_strikes() {
        let positions = vec![long_call(dec!(100), dec!(5))];
        let points = chart_key_points(&positions, dec!(100), &[]);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].kind, KeyPointKind::CurrentPrice);
        assert_eq!(points[1].kind, KeyPointKind::Strike);
    }

    #[test]
    fn key_point_serde_roundtrip() {
        let point = KeyPoint {
            price: dec!(105),
            profit: Decimal::ZERO,
            kind: KeyPointKind::Breakeven,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"breakeven\""));
        let parsed: KeyPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }
}
