//! Initial data the page hands to the editor.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use lineup_domain::{
    Formation, LineupState, PlayerId, PlayerProfile, Roster, SanitizeReport, TeamId,
};

/// A player id as it appears on the wire: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for PlayerId {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Number(n) => PlayerId::from(n),
            WireId::Text(s) => PlayerId::from(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<PlayerData> for PlayerProfile {
    fn from(value: PlayerData) -> Self {
        let profile = PlayerProfile::new(value.name, value.position);
        match value.photo_url {
            Some(url) if !url.is_empty() => profile.with_photo_url(url),
            _ => profile,
        }
    }
}

/// The `players` object, keyed by the string form of the player id.
///
/// Entries keep the order they were supplied in. A repeated key replaces the
/// earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTable(Vec<(String, PlayerData)>);

impl PlayerTable {
    pub fn get(&self, id: &str) -> Option<&PlayerData> {
        self.0.iter().find(|(key, _)| key == id).map(|(_, data)| data)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlayerData)> {
        self.0.iter().map(|(key, data)| (key, data))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, id: impl Into<String>, data: PlayerData) {
        let id = id.into();
        match self.0.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => *existing = data,
            None => self.0.push((id, data)),
        }
    }
}

impl FromIterator<(String, PlayerData)> for PlayerTable {
    fn from_iter<T: IntoIterator<Item = (String, PlayerData)>>(iter: T) -> Self {
        let mut table = Self::default();
        for (id, data) in iter {
            table.insert(id, data);
        }
        table
    }
}

impl Serialize for PlayerTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, data) in &self.0 {
            map.serialize_entry(id, data)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlayerTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PlayerTableVisitor;

        impl<'de> Visitor<'de> for PlayerTableVisitor {
            type Value = PlayerTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of player records keyed by id")
            }

            fn visit_map<M>(self, mut map: M) -> Result<PlayerTable, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut table = PlayerTable::default();
                while let Some((id, data)) = map.next_entry::<String, PlayerData>()? {
                    table.insert(id, data);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(PlayerTableVisitor)
    }
}

/// Page data for one team's lineup panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialLineupData {
    /// Panel discriminator, e.g. "home" or "away".
    pub team_type: String,
    pub team_id: i64,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default, alias = "saveUrl")]
    pub save_url: Option<String>,
    /// Missing or null means 4-4-2.
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(default)]
    pub players: PlayerTable,
    #[serde(default)]
    pub starters: Vec<WireId>,
    #[serde(default)]
    pub substitutes: Vec<WireId>,
}

impl InitialLineupData {
    pub fn team_id(&self) -> TeamId {
        TeamId::new(self.team_id)
    }

    /// Formation to edit with; unknown names fall back to 4-4-2.
    pub fn formation(&self) -> Formation {
        self.formation
            .as_deref()
            .map(Formation::from_name)
            .unwrap_or_default()
    }

    pub fn roster(&self) -> Roster {
        self.players
            .iter()
            .map(|(id, data)| (PlayerId::new(id.clone()), PlayerProfile::from(data.clone())))
            .collect()
    }

    /// Build the lineup aggregate, reporting any entries that had to be dropped.
    pub fn to_lineup(&self) -> (LineupState, SanitizeReport) {
        LineupState::new(
            self.formation(),
            self.roster(),
            self.starters.iter().cloned().map(PlayerId::from),
            self.substitutes.iter().cloned().map(PlayerId::from),
        )
    }
}
