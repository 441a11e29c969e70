//! Notification Port - fire-and-forget user notices (toasts).

use lineup_domain::Notice;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, notice: &Notice);
}
