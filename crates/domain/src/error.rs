//! Error types for the domain layer
//!
//! `DomainError` covers value-object parsing. `LineupError` covers rejected
//! assignment operations; none of them are fatal to an editing session.

use thiserror::Error;

use crate::ids::PlayerId;
use crate::notice::Severity;

/// Error for value-object construction and parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Formation {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         Self::ALL
    ///             .into_iter()
    ///             .find(|f| f.name() == s)
    ///             .ok_or_else(|| DomainError::parse(format!("Unknown formation: {}", s)))
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// A rejected assignment operation.
///
/// Validation variants describe a move the rules do not allow; `UnknownPlayer`
/// is a data-integrity problem (an id that is not on the roster).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineupError {
    #[error("Player data not found: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Player already on the bench")]
    AlreadyOnBench(PlayerId),

    #[error("Player is already in the starting lineup")]
    AlreadyStarter(PlayerId),

    #[error("Maximum {max} substitutes allowed")]
    BenchFull { max: usize },

    #[error("Player is not on the bench")]
    NotOnBench(PlayerId),

    #[error("Slot {slot} does not exist ({capacity} slots in formation)")]
    InvalidSlot { slot: usize, capacity: usize },
}

impl LineupError {
    /// Notification severity used when surfacing this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownPlayer(_) | Self::InvalidSlot { .. } => Severity::Error,
            Self::AlreadyOnBench(_)
            | Self::AlreadyStarter(_)
            | Self::BenchFull { .. }
            | Self::NotOnBench(_) => Severity::Warning,
        }
    }

    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::UnknownPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown formation: 9-9-9");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown formation: 9-9-9");
    }

    #[test]
    fn test_bench_full_message() {
        let err = LineupError::BenchFull { max: 12 };
        assert_eq!(err.to_string(), "Maximum 12 substitutes allowed");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_unknown_player_is_integrity_error() {
        let err = LineupError::UnknownPlayer(PlayerId::new("99"));
        assert!(err.is_data_integrity());
        assert_eq!(err.severity(), Severity::Error);
        assert!(err.to_string().contains("99"));
    }
}
