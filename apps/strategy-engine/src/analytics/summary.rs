//! Cost and value summaries.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::position::Position;

/// Net entry cost of a position set.
///
/// `sum(premium * quantity * 100 * sign)` with buy = +1, sell = -1.
/// Positive means a net debit was paid; negative means a net credit was
/// received. Callers that want an unsigned display value take the
/// absolute value themselves and label the direction.
#[must_use]
pub fn total_cost(positions: &[Position]) -> Decimal {
    positions
        .iter()
        .map(|p| p.premium * p.share_quantity() * Decimal::from(p.action.sign()))
        .sum()
}

/// Total current value of a position set under caller-supplied marks.
///
/// `marks` maps position id to the current per-share mark; the engine
/// performs no valuation of its own. A position with no mark contributes
/// zero. Plain weighted sum, no action sign.
#[must_use]
pub fn total_current_value(positions: &[Position], marks: &HashMap<String, Decimal>) -> Decimal {
    positions
        .iter()
        .map(|p| {
            let mark = marks.get(&p.id).copied().unwrap_or(Decimal::ZERO);
            mark * p.share_quantity()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{OptionType, PositionAction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn leg(id: &str, action: PositionAction, premium: Decimal, quantity: u32) -> Position {
        Position {
            id: id.to_string(),
            option_type: OptionType::Call,
            action,
            strike: dec!(100),
            premium,
            quantity,
            expiry: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            strategy: None,
        }
    }

    #[test]
    fn total_cost_empty_is_zero() {
        assert_eq!(total_cost(&[]), Decimal::ZERO);
    }

    #[test]
    fn total_cost_net_debit() {
        // bull call spread: buy @ 12, sell @ 6
        let positions = vec![
            leg("long", PositionAction::Buy, dec!(12), 1),
            leg("short", PositionAction::Sell, dec!(6), 1),
        ];
        assert_eq!(total_cost(&positions), dec!(600));
    }

    #[test]
    fn total_cost_net_credit_is_negative() {
        let positions = vec![leg("short", PositionAction::Sell, dec!(3), 2)];
        assert_eq!(total_cost(&positions), dec!(-600));
    }

    #[test]
    fn total_cost_ignores_zero_quantity() {
        let positions = vec![leg("flat", PositionAction::Buy, dec!(12), 0)];
        assert_eq!(total_cost(&positions), Decimal::ZERO);
    }

    #[test]
    fn total_current_value_weighted_sum() {
        let positions = vec![
            leg("a", PositionAction::Buy, dec!(12), 1),
            leg("b", PositionAction::Sell, dec!(6), 2),
        ];
        let marks = HashMap::from([
            ("a".to_string(), dec!(15)),
            ("b".to_string(), dec!(4)),
        ]);

        // 15 * 100 + 4 * 200 - no action sign in this sum
        assert_eq!(total_current_value(&positions, &marks), dec!(2300));
    }

    #[test]
    fn total_current_value_unmarked_contributes_zero() {
        let positions = vec![leg("a", PositionAction::Buy, dec!(12), 1)];
        assert_eq!(
            total_current_value(&positions, &HashMap::new()),
            Decimal::ZERO
        );
    }
}
