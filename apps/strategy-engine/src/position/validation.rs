//! Construction-time position validation.
//!
//! The payoff and analytics functions are intentionally total and do not
//! re-check their inputs; rejecting malformed legs is the ingestion
//! layer's job, done here.

use rust_decimal::Decimal;

use crate::error::EngineError;

use super::types::Position;

impl Position {
    /// Validate the numeric invariants of this leg.
    ///
    /// A zero quantity is legal (the leg contributes zero everywhere).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStrike`] if `strike <= 0`, or
    /// [`EngineError::InvalidPremium`] if `premium < 0`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.strike <= Decimal::ZERO {
            return Err(EngineError::InvalidStrike { value: self.strike });
        }
        if self.premium < Decimal::ZERO {
            return Err(EngineError::InvalidPremium {
                value: self.premium,
            });
        }
        Ok(())
    }
}

/// Validate every leg in a slice, failing on the first invalid one.
///
/// # Errors
///
/// Returns the first validation error encountered, if any.
pub fn validate_positions(positions: &[Position]) -> Result<(), EngineError> {
    positions.iter().try_for_each(Position::validate)
}
