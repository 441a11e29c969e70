//! Headless adapters for the runner: no surface to draw on, so rendering and
//! handler wiring are logged.

use lineup_domain::{InteractionEffect, InteractionMode};

use crate::ports::outbound::{InteractionBindings, LineupView, RenderPort, SaveButtonState};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessRenderer;

impl RenderPort for HeadlessRenderer {
    fn render(&self, view: &LineupView) {
        let pitch: Vec<String> = view
            .pitch
            .iter()
            .map(|row| {
                let names: Vec<&str> = row
                    .slots
                    .iter()
                    .map(|slot| slot.card.as_ref().map_or("-", |card| card.name.as_str()))
                    .collect();
                format!(
                    "{}: {}",
                    row.label.map_or("", |label| label.as_str()),
                    names.join(", ")
                )
            })
            .collect();

        tracing::debug!(
            formation = %view.formation,
            starters = view.counts.starters,
            substitutes = view.counts.substitutes,
            available = view.counts.available,
            pitch = ?pitch,
            "Lineup rendered"
        );
    }

    fn apply_effect(&self, effect: &InteractionEffect) {
        tracing::trace!(?effect, "Interaction effect");
    }

    fn set_save_button(&self, state: SaveButtonState) {
        tracing::debug!(label = state.label(), enabled = state.is_enabled(), "Save button updated");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBindings;

impl InteractionBindings for LoggingBindings {
    fn attach(&self, mode: InteractionMode) {
        tracing::debug!(%mode, "Handlers attached");
    }

    fn detach(&self, mode: InteractionMode) {
        tracing::debug!(%mode, "Handlers detached");
    }
}
