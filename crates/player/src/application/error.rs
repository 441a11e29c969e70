//! Service layer error types
//!
//! None of these are fatal: every failure leaves the session editable with
//! its local state intact.

use thiserror::Error;

use lineup_domain::Notice;

use crate::ports::outbound::ApiError;

/// Display time for the starter-count warning.
pub const VALIDATION_NOTICE_MS: u32 = 3000;
/// Display time for save failures.
pub const ERROR_NOTICE_MS: u32 = 4000;

/// Errors that can occur while saving a lineup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// No CSRF token available; nothing was sent
    #[error("Security token not found. Please refresh.")]
    MissingSecurityToken,

    /// No save endpoint configured; nothing was sent
    #[error("Save URL not configured")]
    MissingSaveUrl,

    /// Local validation failed; nothing was sent
    #[error("Need exactly {expected} starters (currently {actual})")]
    StarterCount { expected: usize, actual: usize },

    /// A save is already in flight
    #[error("Save already in progress")]
    InProgress,

    /// Lineup is read-only
    #[error("Lineup is read-only")]
    ReadOnly,

    /// The server answered but refused the lineup
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable answer
    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl SaveError {
    /// Whether the save was refused before any network call.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Rejected(_) | Self::Transport(_))
    }

    /// Notice shown to the user for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingSecurityToken => Notice::error(self.to_string()),
            Self::StarterCount { .. } => {
                Notice::warning(self.to_string()).with_duration(VALIDATION_NOTICE_MS)
            }
            Self::InProgress | Self::ReadOnly => Notice::info(self.to_string()),
            Self::MissingSaveUrl | Self::Rejected(_) | Self::Transport(_) => {
                Notice::error(format!("Error: {}", self)).with_duration(ERROR_NOTICE_MS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_domain::Severity;

    #[test]
    fn starter_count_is_a_timed_warning() {
        let notice = SaveError::StarterCount {
            expected: 11,
            actual: 9,
        }
        .notice();
        assert_eq!(notice.message, "Need exactly 11 starters (currently 9)");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.duration_ms, Some(3000));
    }

    #[test]
    fn server_errors_are_prefixed() {
        let notice = SaveError::Rejected("Team is locked".into()).notice();
        assert_eq!(notice.message, "Error: Team is locked");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.duration_ms, Some(4000));

        let transport = SaveError::from(ApiError::RequestFailed("connection refused".into()));
        assert_eq!(
            transport.notice().message,
            "Error: Request failed: connection refused"
        );
        assert!(!transport.is_local());
    }

    #[test]
    fn missing_token_message() {
        let notice = SaveError::MissingSecurityToken.notice();
        assert_eq!(notice.message, "Security token not found. Please refresh.");
        assert!(SaveError::MissingSecurityToken.is_local());
    }
}
