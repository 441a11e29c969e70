//! Platform abstraction ports
//!
//! Storage and time are abstracted so the session stays deterministic under
//! test and the runner can swap in native implementations.

use chrono::{DateTime, Utc};

/// Persistent key/value storage (localStorage or a file).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StoragePort: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const TUTORIAL_SHOWN_PREFIX: &str = "lineup_tutorial_shown_";

    /// Marks the tap tutorial tip as shown for one team panel.
    pub fn tutorial_shown(team_type: &str) -> String {
        format!("{}{}", TUTORIAL_SHOWN_PREFIX, team_type)
    }
}
