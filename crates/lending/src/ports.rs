//! Collaborator ports consumed by the lending catalog.
//!
//! The catalog never decides whether a user is active, nor how a message reaches
//! them. Hosts inject implementations of these traits at construction time.

use std::sync::Arc;

use libris_core::UserId;

/// Answers whether a user may borrow.
///
/// Implementations must not fail for any identifier; unknown users are simply
/// reported as inactive (or active) according to the host's policy.
pub trait UserStatusOracle {
    fn is_user_active(&self, user_id: &UserId) -> bool;
}

/// Delivers a human-readable message to a user.
///
/// Fire-and-forget from the catalog's perspective: delivery guarantees, retries
/// and transport belong to the implementation.
pub trait Notifier {
    fn notify_user(&self, user_id: &UserId, message: &str);
}

impl<T> UserStatusOracle for &T
where
    T: UserStatusOracle + ?Sized,
{
    fn is_user_active(&self, user_id: &UserId) -> bool {
        (**self).is_user_active(user_id)
    }
}

impl<T> UserStatusOracle for Arc<T>
where
    T: UserStatusOracle + ?Sized,
{
    fn is_user_active(&self, user_id: &UserId) -> bool {
        (**self).is_user_active(user_id)
    }
}

impl<T> UserStatusOracle for Box<T>
where
    T: UserStatusOracle + ?Sized,
{
    fn is_user_active(&self, user_id: &UserId) -> bool {
        (**self).is_user_active(user_id)
    }
}

impl<T> Notifier for &T
where
    T: Notifier + ?Sized,
{
    fn notify_user(&self, user_id: &UserId, message: &str) {
        (**self).notify_user(user_id, message)
    }
}

impl<T> Notifier for Arc<T>
where
    T: Notifier + ?Sized,
{
    fn notify_user(&self, user_id: &UserId, message: &str) {
        (**self).notify_user(user_id, message)
    }
}

impl<T> Notifier for Box<T>
where
    T: Notifier + ?Sized,
{
    fn notify_user(&self, user_id: &UserId, message: &str) {
        (**self).notify_user(user_id, message)
    }
}
