// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Options Payoff & Risk Analytics
//!
//! Pure, synchronous analytics core for options strategy analysis.
//! The engine consumes plain [`Position`] records supplied by a caller
//! (UI state, portfolio service) and produces plain data records back:
//! payoff curves, risk/reward summaries, expiry buckets, chart key points.
//!
//! # Model
//!
//! All profit/loss figures use the intrinsic-value-at-expiry model: no
//! Greeks, no time decay. This is the right model for expiry-date payoff
//! diagrams and the wrong one for marking live positions before expiry.
//!
//! # Layers
//!
//! - `position`: the canonical single-leg record and its validation
//! - `payoff`: per-leg and aggregate P&L, payoff curve sampling
//! - `analytics`: cost/value summaries, risk/reward estimation,
//!   breakeven detection, expiry/strategy grouping, combo-leg extraction
//! - `events`: explicit observer registry for leg add/remove signaling
//!
//! Every operation is a deterministic pure function of its arguments;
//! the only time-dependent derivation (`days_to_expiry`) takes the
//! evaluation timestamp as an explicit parameter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Strategy analytics - summaries, risk/reward, breakevens, grouping.
pub mod analytics;

/// Engine error types.
pub mod error;

/// Leg event registry for explicit add/remove signaling.
pub mod events;

/// Payoff calculator - intrinsic value, leg/aggregate profit, curves.
pub mod payoff;

/// Position model - one options leg plus validation.
pub mod position;

pub use analytics::{
    ExpiryBucket, KeyPoint, KeyPointKind, RiskReward, StrategyBundle, chart_key_points,
    estimate_risk_reward, filter_combo_strategy, find_breakevens, group_by_expiry,
    group_by_strategy, total_cost, total_current_value,
};
pub use error::EngineError;
pub use events::{LegEvent, LegEventBus, SubscriptionId};
pub use payoff::{
    PayoffPoint, aggregate_profit, generate_payoff_curve, leg_intrinsic_value, leg_profit,
};
pub use position::{CONTRACT_MULTIPLIER, OptionType, Position, PositionAction, validate_positions};
