use serde::{Deserialize, Serialize};

use lineup_domain::{LineupState, PlayerId, TeamId};

/// Body of the save-lineup POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLineupRequest {
    pub team_id: i64,
    pub formation: String,
    pub starters: Vec<i64>,
    pub substitutes: Vec<i64>,
}

impl SaveLineupRequest {
    /// Build the request from the current lineup.
    ///
    /// Ids that are not integers cannot be sent and are skipped.
    pub fn from_lineup(team_id: TeamId, lineup: &LineupState) -> Self {
        Self {
            team_id: team_id.get(),
            formation: lineup.formation().name().to_string(),
            starters: wire_ids("starters", &lineup.starters()),
            substitutes: wire_ids("substitutes", lineup.substitutes()),
        }
    }
}

fn wire_ids(list: &'static str, ids: &[PlayerId]) -> Vec<i64> {
    ids.iter()
        .filter_map(|id| {
            let wire = id.as_wire_id();
            if wire.is_none() {
                tracing::warn!(list, player_id = %id, "Skipping non-numeric player id");
            }
            wire
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_domain::{Formation, PlayerProfile, Roster};

    #[test]
    fn serializes_integer_ids() {
        let roster: Roster = ["1", "2", "3", "guest"]
            .into_iter()
            .map(|id| (PlayerId::new(id), PlayerProfile::new(id, "MF")))
            .collect();
        let (lineup, _) = LineupState::new(
            Formation::ThreeFiveTwo,
            roster,
            vec![PlayerId::new("2"), PlayerId::new("guest")],
            vec![PlayerId::new("3")],
        );

        let request = SaveLineupRequest::from_lineup(TeamId::new(9), &lineup);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "team_id": 9,
                "formation": "3-5-2",
                "starters": [2],
                "substitutes": [3],
            })
        );
    }
}
