//! Strategy analytics.
//!
//! Summary risk/reward metrics and charting derivations over a position
//! set:
//! - cost and caller-marked value summaries
//! - sampled max-risk/max-reward estimation
//! - breakeven detection by linear interpolation over a payoff curve
//! - grouping by expiry date and by strategy label
//! - narrow combo-strategy leg extraction
//!
//! The payoff of a fixed set of option legs is piecewise-linear in the
//! underlying price, so linear interpolation between samples is exact
//! for root-finding as long as the grid brackets each crossing.

mod breakeven;
mod combo;
mod grouping;
mod key_points;
mod risk;
mod summary;

pub use breakeven::find_breakevens;
pub use combo::filter_combo_strategy;
pub use grouping::{ExpiryBucket, StrategyBundle, group_by_expiry, group_by_strategy};
pub use key_points::{KeyPoint, KeyPointKind, chart_key_points};
pub use risk::{RiskReward, estimate_risk_reward};
pub use summary::{total_cost, total_current_value};
