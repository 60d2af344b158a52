//! Core position types.
//!
//! Defines the option type (call/put), the position action (buy/sell),
//! and the single-leg [`Position`] record everything else consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shares of the underlying per contract (fixed for equity options).
pub const CONTRACT_MULTIPLIER: u32 = 100;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// Position action (bought or sold/written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionAction {
    /// Bought (long the leg, premium paid).
    Buy,
    /// Sold/written (short the leg, premium received).
    Sell,
}

impl PositionAction {
    /// Get the sign multiplier for this action.
    #[must_use]
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }

    /// Check if this is a buy.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Check if this is a sell.
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

/// One options leg within a possibly multi-leg strategy.
///
/// A leg with `quantity == 0` is legal: it contributes zero to every
/// aggregate but is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Opaque unique identifier, assigned by the caller.
    pub id: String,
    /// Call or put.
    pub option_type: OptionType,
    /// Buy or sell.
    pub action: PositionAction,
    /// Contract strike price (must be positive for a valid position).
    pub strike: Decimal,
    /// Premium paid/received per share at entry (non-negative).
    pub premium: Decimal,
    /// Number of contracts.
    pub quantity: u32,
    /// Contract expiration date.
    pub expiry: NaiveDate,
    /// Human-readable strategy label, used only for display grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl Position {
    /// Quantity expressed in underlying shares (contracts x multiplier).
    #[must_use]
    pub fn share_quantity(&self) -> Decimal {
        Decimal::from(self.quantity) * Decimal::from(CONTRACT_MULTIPLIER)
    }

    /// Check if this leg is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.option_type, OptionType::Call)
    }

    /// Check if this leg is a put.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.option_type, OptionType::Put)
    }

    /// Check if the leg has expired as of the given date.
    #[must_use]
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        self.expiry < as_of
    }
}
