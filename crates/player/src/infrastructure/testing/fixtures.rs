//! Simple test fixtures used across unit tests.

use lineup_shared::{InitialLineupData, PlayerData, PlayerTable, WireId};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Page data with players `1..=roster_size`, starters `1..=starters` and the
/// given substitutes.
pub fn initial_data(roster_size: i64, starters: i64, substitutes: &[i64]) -> InitialLineupData {
    let players: PlayerTable = (1..=roster_size)
        .map(|id| {
            (
                id.to_string(),
                PlayerData {
                    name: format!("Player {}", id),
                    position: if id == 1 { "GK" } else { "MF" }.to_string(),
                    photo_url: None,
                },
            )
        })
        .collect();

    InitialLineupData {
        team_type: "home".to_string(),
        team_id: 4,
        can_edit: true,
        save_url: Some("/teams/4/lineup/".to_string()),
        formation: Some("4-4-2".to_string()),
        players,
        starters: (1..=starters).map(WireId::Number).collect(),
        substitutes: substitutes.iter().copied().map(WireId::Number).collect(),
    }
}
