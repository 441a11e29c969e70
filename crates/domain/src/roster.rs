//! Roster - immutable reference data for the players a manager can pick.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;

/// Display data for a rostered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            photo_url: None,
        }
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}

/// Ordered roster.
///
/// Order is the available-pool display order: numeric ids ascending, then any
/// non-numeric ids in the order they were supplied. Duplicate ids keep the
/// first profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(PlayerId, PlayerProfile)>,
}

impl Roster {
    pub fn new(players: impl IntoIterator<Item = (PlayerId, PlayerProfile)>) -> Self {
        let mut entries: Vec<(PlayerId, PlayerProfile)> = Vec::new();
        for (id, profile) in players {
            if !entries.iter().any(|(existing, _)| *existing == id) {
                entries.push((id, profile));
            }
        }
        // Stable sort keeps supplied order among non-numeric ids
        entries.sort_by_key(|(id, _)| match id.as_wire_id() {
            Some(n) => (0, n),
            None => (1, 0),
        });
        Self { entries }
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerProfile> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, profile)| profile)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &PlayerProfile)> {
        self.entries.iter().map(|(id, profile)| (id, profile))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(PlayerId, PlayerProfile)> for Roster {
    fn from_iter<T: IntoIterator<Item = (PlayerId, PlayerProfile)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> PlayerProfile {
        PlayerProfile::new(name, "MF")
    }

    #[test]
    fn numeric_ids_are_ordered_numerically() {
        let roster = Roster::new([
            (PlayerId::new("10"), profile("Ten")),
            (PlayerId::new("2"), profile("Two")),
            (PlayerId::new("guest"), profile("Guest")),
            (PlayerId::new("1"), profile("One")),
        ]);

        let ids: Vec<&str> = roster.ids().map(PlayerId::as_str).collect();
        assert_eq!(ids, vec!["1", "2", "10", "guest"]);
    }

    #[test]
    fn duplicate_ids_keep_first_profile() {
        let roster = Roster::new([
            (PlayerId::new("1"), profile("First")),
            (PlayerId::new("1"), profile("Second")),
        ]);

        assert_eq!(roster.len(), 1);
        assert_eq!(
            roster.get(&PlayerId::new("1")).map(|p| p.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn lookup_of_unknown_id_is_none() {
        let roster: Roster = [(PlayerId::new("1"), profile("One"))].into_iter().collect();
        assert!(!roster.contains(&PlayerId::new("2")));
        assert!(roster.contains(&PlayerId::new("1")));
    }
}
