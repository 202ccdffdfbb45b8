//! Dynamic late-fee pricing.
//!
//! Model:
//! - Start from `overdue_days × daily_rate`.
//! - Bestsellers are charged `bestseller_multiplier` times more.
//! - Premium members pay `premium_multiplier` of the resulting amount.
//! - Round to cents, midpoint away from zero.
//!
//! The default parameters (0.50 per day, ×1.5 bestseller, ×0.8 premium) reproduce
//! the published fee table, e.g. 365 overdue days of a bestseller for a premium
//! member cost `365 × 0.50 × 1.5 × 0.8 = 219.00`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult};

/// Message carried by the error returned for negative overdue days.
pub const NEGATIVE_OVERDUE_DAYS: &str = "Overdue days cannot be negative.";

/// Number of decimal places fees are rounded to.
pub const FEE_SCALE: u32 = 2;

/// Pricing parameters for overdue books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LateFeePolicy {
    /// Charge per overdue day, before modifiers.
    pub daily_rate: Decimal,
    /// Factor applied when the book is a bestseller.
    pub bestseller_multiplier: Decimal,
    /// Factor applied when the borrower is a premium member.
    pub premium_multiplier: Decimal,
}

impl Default for LateFeePolicy {
    fn default() -> Self {
        Self {
            daily_rate: Decimal::new(50, 2),
            bestseller_multiplier: Decimal::new(15, 1),
            premium_multiplier: Decimal::new(8, 1),
        }
    }
}

impl LateFeePolicy {
    pub fn with_daily_rate(mut self, daily_rate: Decimal) -> Self {
        self.daily_rate = daily_rate;
        self
    }

    pub fn with_bestseller_multiplier(mut self, multiplier: Decimal) -> Self {
        self.bestseller_multiplier = multiplier;
        self
    }

    pub fn with_premium_multiplier(mut self, multiplier: Decimal) -> Self {
        self.premium_multiplier = multiplier;
        self
    }

    /// Reject parameters that could produce a negative fee.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("daily_rate", self.daily_rate),
            ("bestseller_multiplier", self.bestseller_multiplier),
            ("premium_multiplier", self.premium_multiplier),
        ];
        for (name, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(DomainError::validation(format!(
                    "{name} must be non-negative (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Compute the late fee for a single overdue loan.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `overdue_days` is negative,
    /// and with [`DomainError::Validation`] when the policy itself is invalid.
    pub fn calculate(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> DomainResult<Decimal> {
        if overdue_days < 0 {
            return Err(DomainError::invalid_argument(NEGATIVE_OVERDUE_DAYS));
        }
        self.validate()?;

        let mut fee = mul(Decimal::from(overdue_days), self.daily_rate)?;
        if is_bestseller {
            fee = mul(fee, self.bestseller_multiplier)?;
        }
        if is_premium_member {
            fee = mul(fee, self.premium_multiplier)?;
        }

        Ok(fee.round_dp_with_strategy(FEE_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }
}

fn mul(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| DomainError::validation("late fee exceeds the representable range"))
}

/// Compute a late fee with the default [`LateFeePolicy`].
pub fn calculate_dynamic_late_fee(
    overdue_days: i64,
    is_bestseller: bool,
    is_premium_member: bool,
) -> DomainResult<Decimal> {
    LateFeePolicy::default().calculate(overdue_days, is_bestseller, is_premium_member)
}
