//! Lending catalog: book inventory plus the borrow/return lifecycle.
//!
//! The catalog owns a single mapping of book identifier to available copies.
//! It keeps no record of who holds a copy, so a return is accepted for any
//! catalogued book regardless of the returning user's history.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use libris_core::{BookId, DomainError, DomainResult, UserId};

use crate::config::LendingConfig;
use crate::fee::LateFeePolicy;
use crate::ports::{Notifier, UserStatusOracle};

/// Message sent to a user whose borrow was refused because the account is inactive.
pub const ACCOUNT_NOT_ACTIVE: &str = "Your account is not active.";

pub fn borrowed_message(book_id: &BookId) -> String {
    format!("You have borrowed the book: {book_id}")
}

pub fn returned_message(book_id: &BookId) -> String {
    format!("You have returned the book: {book_id}")
}

/// Available copies of one book at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStock {
    pub book_id: BookId,
    pub available: i64,
}

/// Read-only copy of the inventory, ordered by book identifier.
///
/// The ordering holds however the snapshot was built, including after
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SnapshotRepr")]
pub struct InventorySnapshot {
    books: Vec<BookStock>,
}

#[derive(Deserialize)]
struct SnapshotRepr {
    books: Vec<BookStock>,
}

impl From<SnapshotRepr> for InventorySnapshot {
    fn from(repr: SnapshotRepr) -> Self {
        Self::new(repr.books)
    }
}

impl InventorySnapshot {
    pub fn new(mut books: Vec<BookStock>) -> Self {
        books.sort_by(|a, b| a.book_id.cmp(&b.book_id));
        Self { books }
    }

    pub fn books(&self) -> &[BookStock] {
        &self.books
    }

    pub fn get(&self, book_id: &BookId) -> Option<i64> {
        self.books
            .binary_search_by(|stock| stock.book_id.cmp(book_id))
            .ok()
            .map(|idx| self.books[idx].available)
    }

    /// Sum of available copies across all books.
    pub fn total_available(&self) -> i64 {
        self.books
            .iter()
            .fold(0i64, |acc, stock| acc.saturating_add(stock.available))
    }
}

/// Why a borrow was refused (logged, never surfaced as an error).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum BorrowRejection {
    InactiveUser,
    UnknownBook,
    NoCopiesAvailable,
}

impl BorrowRejection {
    fn as_str(self) -> &'static str {
        match self {
            BorrowRejection::InactiveUser => "inactive_user",
            BorrowRejection::UnknownBook => "unknown_book",
            BorrowRejection::NoCopiesAvailable => "no_copies_available",
        }
    }

    fn log(self, book_id: &BookId, user_id: &UserId) {
        tracing::debug!(
            book_id = %book_id,
            user_id = %user_id,
            reason = self.as_str(),
            "borrow rejected"
        );
    }
}

/// Inventory of books and the rules for lending them out.
///
/// Collaborators are injected at construction:
/// - `U` decides whether a user may borrow.
/// - `N` delivers messages to users.
///
/// Mutating operations take `&mut self`; hosts that share a catalog across
/// callers wrap it in their own lock.
#[derive(Debug)]
pub struct LendingCatalog<U, N> {
    inventory: HashMap<BookId, i64>,
    users: U,
    notifier: N,
    fee_policy: LateFeePolicy,
}

impl<U, N> LendingCatalog<U, N>
where
    U: UserStatusOracle,
    N: Notifier,
{
    /// Create an empty catalog using the default late-fee policy.
    pub fn new(users: U, notifier: N) -> Self {
        Self {
            inventory: HashMap::new(),
            users,
            notifier,
            fee_policy: LateFeePolicy::default(),
        }
    }

    /// Create an empty catalog configured from `config`.
    ///
    /// Fails when the configured fee policy does not validate.
    pub fn from_config(users: U, notifier: N, config: &LendingConfig) -> DomainResult<Self> {
        Self::new(users, notifier).with_fee_policy(config.fee_policy.clone())
    }

    /// Replace the late-fee policy; rejected unless it validates.
    pub fn with_fee_policy(mut self, fee_policy: LateFeePolicy) -> DomainResult<Self> {
        fee_policy.validate()?;
        self.fee_policy = fee_policy;
        Ok(self)
    }

    pub fn fee_policy(&self) -> &LateFeePolicy {
        &self.fee_policy
    }

    /// Add `quantity` copies of a book, creating the entry on first use.
    ///
    /// The quantity is not validated: zero and negative values are stored as
    /// given (saturating at the `i64` bounds).
    pub fn add_book(&mut self, book_id: BookId, quantity: i64) {
        let count = self.inventory.entry(book_id.clone()).or_insert(0);
        *count = count.saturating_add(quantity);
        tracing::debug!(book_id = %book_id, quantity, available = *count, "book added");
    }

    /// Copies of `book_id` currently on the shelf.
    ///
    /// An uncatalogued book is [`DomainError::BookNotFound`], never `Ok(0)`.
    pub fn available_copies(&self, book_id: &BookId) -> DomainResult<i64> {
        self.inventory
            .get(book_id)
            .copied()
            .ok_or_else(|| DomainError::book_not_found(book_id.clone()))
    }

    pub fn contains(&self, book_id: &BookId) -> bool {
        self.inventory.contains_key(book_id)
    }

    /// Number of catalogued books (distinct identifiers).
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::new(
            self.inventory
                .iter()
                .map(|(book_id, available)| BookStock {
                    book_id: book_id.clone(),
                    available: *available,
                })
                .collect(),
        )
    }

    /// Lend one copy of `book_id` to `user_id`.
    ///
    /// The user-status oracle is consulted exactly once. An inactive user is
    /// notified and refused; an active user asking for an unknown or exhausted
    /// book is refused silently. Returns `true` only when a copy was lent.
    pub fn borrow_book(&mut self, book_id: &BookId, user_id: &UserId) -> bool {
        if !self.users.is_user_active(user_id) {
            BorrowRejection::InactiveUser.log(book_id, user_id);
            self.notifier.notify_user(user_id, ACCOUNT_NOT_ACTIVE);
            return false;
        }

        let outcome = match self.inventory.get_mut(book_id) {
            None => Err(BorrowRejection::UnknownBook),
            Some(count) if *count <= 0 => Err(BorrowRejection::NoCopiesAvailable),
            Some(count) => {
                *count -= 1;
                Ok(*count)
            }
        };
        let remaining = match outcome {
            Ok(remaining) => remaining,
            Err(reason) => {
                reason.log(book_id, user_id);
                return false;
            }
        };

        tracing::info!(book_id = %book_id, user_id = %user_id, remaining, "book borrowed");
        self.notifier.notify_user(user_id, &borrowed_message(book_id));
        true
    }

    /// Put one copy of `book_id` back on the shelf.
    ///
    /// Unknown books are refused without contacting any collaborator. Known
    /// books are always accepted, whoever returns them.
    pub fn return_book(&mut self, book_id: &BookId, user_id: &UserId) -> bool {
        let Some(count) = self.inventory.get_mut(book_id) else {
            tracing::debug!(book_id = %book_id, user_id = %user_id, "return rejected: unknown book");
            return false;
        };
        *count = count.saturating_add(1);
        let available = *count;

        tracing::info!(book_id = %book_id, user_id = %user_id, available, "book returned");
        self.notifier.notify_user(user_id, &returned_message(book_id));
        true
    }

    /// Late fee for an overdue loan under this catalog's policy.
    pub fn calculate_dynamic_late_fee(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> DomainResult<Decimal> {
        self.fee_policy
            .calculate(overdue_days, is_bestseller, is_premium_member)
    }
}
