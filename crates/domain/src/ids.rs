use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a rostered player.
///
/// Ids arrive from the server as the string form of a numeric primary key.
/// The domain treats them as opaque; only the wire layer needs the integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer form used on the wire, `None` when the id is not numeric.
    pub fn as_wire_id(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for PlayerId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Team whose lineup is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TeamId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_id_parses_numeric_ids() {
        assert_eq!(PlayerId::new("42").as_wire_id(), Some(42));
        assert_eq!(PlayerId::new(" 7 ").as_wire_id(), Some(7));
        assert_eq!(PlayerId::new("abc").as_wire_id(), None);
    }

    #[test]
    fn numeric_conversion_uses_string_form() {
        assert_eq!(PlayerId::from(3_i64), PlayerId::new("3"));
        assert_eq!(PlayerId::from(3_i64).to_string(), "3");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PlayerId::new("9")).unwrap();
        assert_eq!(json, "\"9\"");
        let team: TeamId = serde_json::from_str("12").unwrap();
        assert_eq!(team.get(), 12);
    }
}
