//! Lineup persistence - validates and sends a lineup, then interprets the
//! server's answer.

use std::sync::Arc;

use lineup_domain::{LineupState, PlayerId, TeamId};
use lineup_shared::SaveLineupRequest;

use crate::application::error::SaveError;
use crate::ports::outbound::{ApiResponse, LineupApiPort};

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Where and with which credentials a lineup is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub team_id: TeamId,
    pub save_url: Option<String>,
    pub csrf_token: Option<String>,
}

/// What the server says the lineup now is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoritativeLineup {
    /// The server echoed its stored assignments; they replace local state.
    Replaced {
        starters: Vec<PlayerId>,
        substitutes: Vec<PlayerId>,
    },
    /// Accepted without data; local assignments stand as saved.
    Confirmed,
}

#[derive(Clone)]
pub struct LineupPersistence {
    api: Arc<dyn LineupApiPort>,
    target: SaveTarget,
}

impl LineupPersistence {
    pub fn new(api: Arc<dyn LineupApiPort>, target: SaveTarget) -> Self {
        Self { api, target }
    }

    /// Save `lineup`.
    ///
    /// The security token and the starter count are checked before anything
    /// is sent.
    pub async fn save(&self, lineup: &LineupState) -> Result<AuthoritativeLineup, SaveError> {
        let csrf_token = self
            .target
            .csrf_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(SaveError::MissingSecurityToken)?;

        let expected = lineup.capacity();
        let actual = lineup.starter_count();
        if actual != expected {
            return Err(SaveError::StarterCount { expected, actual });
        }

        let save_url = self
            .target
            .save_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SaveError::MissingSaveUrl)?;

        let request = SaveLineupRequest::from_lineup(self.target.team_id, lineup);
        tracing::info!(
            team_id = request.team_id,
            formation = %request.formation,
            starters = request.starters.len(),
            substitutes = request.substitutes.len(),
            "Saving lineup"
        );

        let response = self.api.post_lineup(save_url, csrf_token, &request).await?;
        interpret(response)
    }
}

fn interpret(response: ApiResponse) -> Result<AuthoritativeLineup, SaveError> {
    if !response.is_ok() {
        let message = response
            .body
            .error_message()
            .unwrap_or_else(|| format!("Server responded with status: {}", response.status));
        return Err(SaveError::Rejected(message));
    }

    if !response.body.is_success() {
        let message = response
            .body
            .error_message()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Err(SaveError::Rejected(message));
    }

    Ok(match response.body.data {
        Some(data) => {
            let (starters, substitutes) = data.into_ids();
            AuthoritativeLineup::Replaced {
                starters,
                substitutes,
            }
        }
        None => AuthoritativeLineup::Confirmed,
    })
}
