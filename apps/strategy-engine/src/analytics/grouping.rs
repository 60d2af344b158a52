//! Expiry and strategy grouping.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Milliseconds per calendar day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Positions sharing one expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryBucket {
    /// The shared expiration date.
    pub expiry: NaiveDate,
    /// Whole days from the evaluation time to expiry midnight UTC,
    /// rounded up. Negative for already-expired contracts.
    pub days_to_expiry: i64,
    /// The positions in this bucket.
    pub positions: Vec<Position>,
}

/// A named collection of positions sharing a strategy label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyBundle {
    /// The strategy label.
    pub name: String,
    /// The positions carrying that label.
    pub positions: Vec<Position>,
}

/// Group positions by exact expiry date, ascending by days to expiry.
///
/// `days_to_expiry = ceil((expiry midnight UTC - now) / 1 day)`; an
/// expired contract gets a negative count, which is accepted, not an
/// error. The evaluation time is an explicit parameter so callers (and
/// tests) control the clock.
#[must_use]
pub fn group_by_expiry(positions: &[Position], now: DateTime<Utc>) -> Vec<ExpiryBucket> {
    let mut groups: BTreeMap<NaiveDate, Vec<Position>> = BTreeMap::new();
    for position in positions {
        groups
            .entry(position.expiry)
            .or_default()
            .push(position.clone());
    }

    // BTreeMap iterates dates ascending, which is also ascending
    // days_to_expiry for a fixed `now`.
    groups
        .into_iter()
        .map(|(expiry, positions)| ExpiryBucket {
            expiry,
            days_to_expiry: days_until(expiry, now),
            positions,
        })
        .collect()
}

/// Group positions by strategy label, ascending by name.
///
/// Positions without a label are collected under `"custom"`.
#[must_use]
pub fn group_by_strategy(positions: &[Position]) -> Vec<StrategyBundle> {
    let mut groups: BTreeMap<String, Vec<Position>> = BTreeMap::new();
    for position in positions {
        let name = position
            .strategy
            .clone()
            .unwrap_or_else(|| "custom".to_string());
        groups.entry(name).or_default().push(position.clone());
    }

    groups
        .into_iter()
        .map(|(name, positions)| StrategyBundle { name, positions })
        .collect()
}

/// Ceiling day count from `now` to the date's midnight UTC.
fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let millis = (midnight - now).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}
