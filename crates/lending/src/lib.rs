//! Lending domain module.
//!
//! This crate contains the business rules for lending books out of a single
//! catalog and pricing late returns, implemented as deterministic domain logic
//! (no IO, no HTTP, no storage). User status and notification delivery are
//! reached through the traits in [`ports`].

pub mod catalog;
pub mod config;
pub mod fee;
pub mod in_memory;
pub mod ports;

pub use catalog::{
    ACCOUNT_NOT_ACTIVE, BookStock, InventorySnapshot, LendingCatalog, borrowed_message,
    returned_message,
};
pub use config::{ConfigError, FEE_POLICY_ENV, LendingConfig};
pub use fee::{LateFeePolicy, NEGATIVE_OVERDUE_DAYS, calculate_dynamic_late_fee};
pub use in_memory::{InMemoryUserDirectory, Notification, RecordingNotifier, TracingNotifier};
pub use ports::{Notifier, UserStatusOracle};
