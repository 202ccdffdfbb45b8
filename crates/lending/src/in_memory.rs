//! In-memory collaborators for tests/dev.
//!
//! - No IO
//! - Every interaction is recorded so callers can assert on it afterwards
//! - A poisoned lock degrades to "not recorded" rather than panicking

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use libris_core::UserId;

use crate::ports::{Notifier, UserStatusOracle};

/// User directory backed by a map of explicit statuses plus a default.
///
/// Users without an explicit status get `default_active`.
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    default_active: bool,
    statuses: Mutex<HashMap<UserId, bool>>,
    queries: Mutex<Vec<UserId>>,
}

impl InMemoryUserDirectory {
    /// Every user is active unless marked otherwise.
    pub fn all_active() -> Self {
        Self::with_default(true)
    }

    /// Every user is inactive unless marked otherwise.
    pub fn all_inactive() -> Self {
        Self::with_default(false)
    }

    /// Only the listed users are active.
    pub fn with_active<I, T>(users: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<UserId>,
    {
        let directory = Self::all_inactive();
        for user in users {
            directory.set_active(user.into(), true);
        }
        directory
    }

    fn with_default(default_active: bool) -> Self {
        Self {
            default_active,
            statuses: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn set_active(&self, user_id: UserId, active: bool) {
        if let Ok(mut statuses) = self.statuses.lock() {
            statuses.insert(user_id, active);
        }
    }

    /// Every identifier queried so far, in call order.
    pub fn queries(&self) -> Vec<UserId> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::all_active()
    }
}

impl UserStatusOracle for InMemoryUserDirectory {
    fn is_user_active(&self, user_id: &UserId) -> bool {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(user_id.clone());
        }

        self.statuses
            .lock()
            .ok()
            .and_then(|statuses| statuses.get(user_id).copied())
            .unwrap_or(self.default_active)
    }
}

/// A message handed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub user_id: UserId,
    pub message: String,
}

/// Notifier that keeps every notification in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn messages_for(&self, user_id: &UserId) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| &n.user_id == user_id)
            .map(|n| n.message)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify_user(&self, user_id: &UserId, message: &str) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(Notification {
                user_id: user_id.clone(),
                message: message.to_string(),
            });
        }
    }
}

/// Notifier that "delivers" by emitting a structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_user(&self, user_id: &UserId, message: &str) {
        tracing::info!(user_id = %user_id, body = message, "notification delivered");
    }
}
