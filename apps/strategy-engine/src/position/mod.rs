//! Position model.
//!
//! The canonical representation of one options leg. Leaf dependency for
//! the payoff calculator and the strategy analytics.

mod types;
mod validation;

pub use types::{CONTRACT_MULTIPLIER, OptionType, Position, PositionAction};
pub use validation::validate_positions;
