//! Engine error types.
//!
//! The pure evaluation functions are total and never fail; errors exist
//! only at the ingestion boundary (position validation) and for the one
//! contract guard on curve generation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the strategy engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Strike must be strictly positive.
    #[error("Invalid strike {value}: must be greater than zero")]
    InvalidStrike {
        /// The rejected strike value.
        value: Decimal,
    },

    /// Premium must be non-negative.
    #[error("Invalid premium {value}: must not be negative")]
    InvalidPremium {
        /// The rejected premium value.
        value: Decimal,
    },

    /// A payoff curve needs at least two sample points.
    #[error("Degenerate curve: {num_points} points requested, minimum is 2")]
    DegenerateCurve {
        /// The rejected sample count.
        num_points: usize,
    },
}
