//! Combo strategy leg extraction.
//!
//! A narrow, display-oriented filter used for exactly two named
//! multi-leg patterns. It extracts the rights (long) leg of a
//! recognized vertical spread so the UI can show which strike the
//! holder controls.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::position::{OptionType, Position};

/// Strategy label substring for a bull call spread (the journal UI
/// labels its strategies in Chinese).
const BULL_CALL_SPREAD_LABEL: &str = "牛市看涨";

/// Strategy label substring for a bear put spread.
const BEAR_PUT_SPREAD_LABEL: &str = "熊市看跌";

/// Extract the first long leg of a recognized vertical spread.
///
/// Recognizes exactly two patterns by substring on the strategy name:
/// bull call spread (`牛市看涨` / "bull call spread") and bear put
/// spread (`熊市看跌` / "bear put spread").
///
/// Returns an empty map when the name matches neither pattern, the leg
/// list is empty, or the first leg's type is not `leg_type`. On a match
/// the result holds a single `strike -> quantity` entry for the *first*
/// buy leg only. That single-leg extraction is the contract: even when
/// several buy legs exist, only the first is returned - callers that
/// want a full combo decomposition need a different operation.
#[must_use]
pub fn filter_combo_strategy(
    strategy_name: &str,
    legs: &[Position],
    leg_type: OptionType,
) -> BTreeMap<Decimal, u32> {
    let mut extracted = BTreeMap::new();

    let lowered = strategy_name.to_lowercase();
    let recognized = strategy_name.contains(BULL_CALL_SPREAD_LABEL)
        || strategy_name.contains(BEAR_PUT_SPREAD_LABEL)
        || lowered.contains("bull call spread")
        || lowered.contains("bear put spread");
    if !recognized {
        return extracted;
    }

    let Some(first) = legs.first() else {
        return extracted;
    };
    if first.option_type != leg_type {
        return extracted;
    }

    if let Some(long_leg) = legs.iter().find(|leg| leg.action.is_buy()) {
        extracted.insert(long_leg.strike, long_leg.quantity);
    }

    extracted
}
