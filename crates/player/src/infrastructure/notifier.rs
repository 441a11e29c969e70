//! Notification adapter that writes notices to the log.
//!
//! Used by the headless runner; a UI front end would show toasts instead.

use lineup_domain::{Notice, Severity};

use crate::ports::outbound::NotificationPort;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        let duration_ms = notice.duration_ms;
        match notice.severity {
            Severity::Error => tracing::error!(duration_ms, "{}", notice.message),
            Severity::Warning => tracing::warn!(duration_ms, "{}", notice.message),
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %notice.severity, duration_ms, "{}", notice.message)
            }
        }
    }
}
