//! Response bodies returned by the server.

use serde::{Deserialize, Serialize};

use lineup_domain::PlayerId;

use crate::initial_data::WireId;

/// `status` value of an accepted save.
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: WireId,
}

/// Authoritative assignments echoed back after a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupData {
    #[serde(default)]
    pub starters: Vec<PlayerRef>,
    #[serde(default)]
    pub substitutes: Vec<PlayerRef>,
}

impl LineupData {
    /// Starter and substitute ids in their string form.
    pub fn into_ids(self) -> (Vec<PlayerId>, Vec<PlayerId>) {
        let convert = |refs: Vec<PlayerRef>| -> Vec<PlayerId> {
            refs.into_iter().map(|r| PlayerId::from(r.id)).collect()
        };
        (convert(self.starters), convert(self.substitutes))
    }
}

/// Body of a save response, success or failure.
///
/// `message` and `error` are kept as raw JSON since servers put either strings
/// or structured values there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveLineupResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LineupData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl SaveLineupResponse {
    pub fn success(data: Option<LineupData>) -> Self {
        Self {
            status: Some(SUCCESS_STATUS.to_string()),
            data,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// First non-empty of `message` then `error`.
    pub fn error_message(&self) -> Option<String> {
        [&self.message, &self.error]
            .into_iter()
            .flatten()
            .find_map(text_of)
    }
}

fn text_of(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_data_yields_string_ids() {
        let response: SaveLineupResponse = serde_json::from_str(
            r#"{"status": "success", "data": {"starters": [{"id": 3}, {"id": "4"}], "substitutes": [{"id": 9}]}}"#,
        )
        .unwrap();

        assert!(response.is_success());
        let (starters, substitutes) = response.data.unwrap().into_ids();
        assert_eq!(starters, vec![PlayerId::new("3"), PlayerId::new("4")]);
        assert_eq!(substitutes, vec![PlayerId::new("9")]);
    }

    #[test]
    fn message_takes_priority_over_error() {
        let response: SaveLineupResponse =
            serde_json::from_str(r#"{"message": "Bad lineup", "error": "ignored"}"#).unwrap();
        assert_eq!(response.error_message().as_deref(), Some("Bad lineup"));
        assert!(!response.is_success());
    }

    #[test]
    fn empty_message_falls_through_to_error() {
        let response: SaveLineupResponse =
            serde_json::from_str(r#"{"status": "error", "message": "", "error": "Team locked"}"#)
                .unwrap();
        assert_eq!(response.error_message().as_deref(), Some("Team locked"));
    }

    #[test]
    fn structured_error_is_stringified() {
        let response: SaveLineupResponse =
            serde_json::from_str(r#"{"error": {"starters": ["too many"]}}"#).unwrap();
        assert_eq!(
            response.error_message().as_deref(),
            Some(r#"{"starters":["too many"]}"#)
        );
    }

    #[test]
    fn no_message_fields() {
        let response: SaveLineupResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.error_message(), None);
        assert!(response.data.is_none());
    }
}
