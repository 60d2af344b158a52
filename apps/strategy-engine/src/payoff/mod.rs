//! Payoff calculator.
//!
//! Expiry-date profit/loss under the intrinsic-value model: per-leg and
//! aggregate pointwise evaluation plus evenly spaced curve sampling.
//! Pure functions, no I/O, no state.

mod calculator;
mod curve;

pub use calculator::{aggregate_profit, leg_intrinsic_value, leg_profit};
pub use curve::{PayoffPoint, generate_payoff_curve};
