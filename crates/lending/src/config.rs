//! Lending configuration.
//!
//! The host may supply a late-fee policy as inline JSON in
//! `LIBRIS_LATE_FEE_POLICY`; any field left out keeps its default, e.g.
//! `{"daily_rate": "0.75"}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use libris_core::DomainError;

use crate::fee::LateFeePolicy;

/// Environment variable holding the late-fee policy as JSON.
pub const FEE_POLICY_ENV: &str = "LIBRIS_LATE_FEE_POLICY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed lending config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid late-fee policy: {0}")]
    InvalidPolicy(#[source] DomainError),
}

/// Configuration for a [`LendingCatalog`](crate::LendingCatalog).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingConfig {
    pub fee_policy: LateFeePolicy,
}

impl LendingConfig {
    /// Parse a full config document, e.g. `{"fee_policy": {"daily_rate": "0.75"}}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config
            .fee_policy
            .validate()
            .map_err(ConfigError::InvalidPolicy)?;
        Ok(config)
    }

    /// Read the fee policy from `LIBRIS_LATE_FEE_POLICY`.
    ///
    /// Falls back to defaults when the variable is unset or unusable.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(FEE_POLICY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match parse_policy(raw) {
            Ok(fee_policy) => Self { fee_policy },
            Err(err) => {
                tracing::warn!("{FEE_POLICY_ENV} ignored; using default late-fee policy: {err}");
                Self::default()
            }
        }
    }
}

fn parse_policy(raw: &str) -> Result<LateFeePolicy, ConfigError> {
    let policy: LateFeePolicy = serde_json::from_str(raw)?;
    policy.validate().map_err(ConfigError::InvalidPolicy)?;
    Ok(policy)
}
