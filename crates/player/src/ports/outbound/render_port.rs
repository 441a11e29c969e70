//! Render Port - projection of the lineup onto a display surface.
//!
//! The session always hands over a complete [`LineupView`]; adapters never
//! read or mutate lineup state themselves.

use serde::Serialize;

use lineup_domain::{
    Formation, InteractionEffect, InteractionMode, LineupCounts, LineupState, PlayerId,
    ZoneLabel,
};

/// Save button state, doubling as the save-in-flight guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveButtonState {
    /// Nothing to save; button disabled.
    #[default]
    Clean,
    /// Unsaved changes; button enabled.
    Dirty,
    /// Save in flight; button disabled, label "Saving...".
    Saving,
}

impl SaveButtonState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Saving => "Saving...",
            Self::Clean | Self::Dirty => "Save Lineup",
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Dirty)
    }
}

/// A player token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub photo_url: Option<String>,
}

/// One pitch slot; `card == None` renders as an empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchSlotView {
    pub slot: usize,
    pub card: Option<PlayerCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchRowView {
    pub label: Option<ZoneLabel>,
    pub slots: Vec<PitchSlotView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupView {
    pub formation: Formation,
    /// Forwards first.
    pub pitch: Vec<PitchRowView>,
    pub substitutes: Vec<PlayerCard>,
    pub available: Vec<PlayerCard>,
    pub counts: LineupCounts,
    /// Wired modality, `None` for read-only panels.
    pub mode: Option<InteractionMode>,
    pub can_edit: bool,
}

impl LineupView {
    pub fn build(lineup: &LineupState, mode: Option<InteractionMode>, can_edit: bool) -> Self {
        let card = |id: &PlayerId| -> Option<PlayerCard> {
            lineup.roster().get(id).map(|profile| PlayerCard {
                id: id.clone(),
                name: profile.name.clone(),
                position: profile.position.clone(),
                photo_url: profile.photo_url.clone(),
            })
        };

        let pitch = lineup
            .layout()
            .rows
            .into_iter()
            .map(|row| PitchRowView {
                label: row.label,
                slots: row
                    .slots
                    .into_iter()
                    .map(|slot| PitchSlotView {
                        slot: slot.slot,
                        card: slot.occupant.as_ref().and_then(card),
                    })
                    .collect(),
            })
            .collect();

        Self {
            formation: lineup.formation(),
            pitch,
            substitutes: lineup.substitutes().iter().filter_map(card).collect(),
            available: lineup.available().iter().filter_map(card).collect(),
            counts: lineup.counts(),
            mode,
            can_edit,
        }
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RenderPort: Send + Sync {
    /// Full re-render of pitch, bench, pool and counts.
    fn render(&self, view: &LineupView);

    /// Visual-only interaction feedback (highlights, picker).
    fn apply_effect(&self, effect: &InteractionEffect);

    fn set_save_button(&self, state: SaveButtonState);
}
