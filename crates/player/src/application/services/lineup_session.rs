//! Lineup Session - the editing session for one team's lineup panel.
//!
//! The session is the single owner of [`LineupState`]. Taps go through the
//! pure interaction state machine, drops through [`DragCoordinator`], and both
//! end in the same assignment commands. After every real change the session
//! re-renders and marks the lineup dirty.

use std::sync::Arc;

use serde::Serialize;

use lineup_domain::interaction::{self, InteractionEffect, Transition};
use lineup_domain::{
    drop_command, AssignmentCommand, AssignmentOutcome, DropZone, Formation, InteractionMode,
    InteractionState, LineupError, LineupState, Notice, PlayerId, SanitizeReport, TapEvent,
    DEFAULT_MOBILE_BREAKPOINT,
};
use lineup_shared::InitialLineupData;

use crate::application::error::SaveError;
use crate::application::services::mode_controller::{
    ModeChange, ModeController, ResizeDebouncer, DEFAULT_RESIZE_DEBOUNCE_MS,
};
use crate::application::services::persistence::{
    AuthoritativeLineup, LineupPersistence, SaveTarget,
};
use crate::ports::inbound::DragCoordinator;
use crate::ports::outbound::{
    storage_keys, ClockPort, InteractionBindings, LineupApiPort, LineupView, NotificationPort,
    RenderPort, SaveButtonState, StoragePort,
};

pub const MSG_SAVED: &str = "Lineup saved successfully!";
pub const MSG_TUTORIAL: &str =
    "Tip: Tap + to pick a player, or tap a player then tap where to move them";
const SAVED_NOTICE_MS: u32 = 3000;
const TUTORIAL_NOTICE_MS: u32 = 4000;

/// Adapters the session talks to.
#[derive(Clone)]
pub struct SessionPorts {
    pub renderer: Arc<dyn RenderPort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub bindings: Arc<dyn InteractionBindings>,
    pub api: Arc<dyn LineupApiPort>,
    pub storage: Arc<dyn StoragePort>,
    pub clock: Arc<dyn ClockPort>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub mobile_breakpoint: u32,
    pub resize_debounce_ms: u64,
    pub csrf_token: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            csrf_token: None,
        }
    }
}

/// Serializable summary of the session, printed by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupSnapshot {
    pub team_type: String,
    pub formation: Formation,
    pub starters: Vec<PlayerId>,
    pub substitutes: Vec<PlayerId>,
    pub available: Vec<PlayerId>,
    pub save_state: SaveButtonState,
    pub mode: Option<InteractionMode>,
}

pub struct LineupSession {
    team_type: String,
    can_edit: bool,
    lineup: LineupState,
    interaction: InteractionState,
    save_state: SaveButtonState,
    /// Button state to return to if an in-flight save fails.
    state_before_save: SaveButtonState,
    edited_during_save: bool,
    modes: ModeController,
    resize: ResizeDebouncer,
    persistence: LineupPersistence,
    renderer: Arc<dyn RenderPort>,
    notifier: Arc<dyn NotificationPort>,
    storage: Arc<dyn StoragePort>,
    clock: Arc<dyn ClockPort>,
}

impl LineupSession {
    pub fn new(data: &InitialLineupData, ports: SessionPorts, settings: SessionSettings) -> Self {
        let (lineup, report) = data.to_lineup();
        log_sanitize_report(&data.team_type, &report);

        let overflow = lineup.overflow();
        if !overflow.is_empty() {
            tracing::warn!(
                team_type = %data.team_type,
                overflow = overflow.len(),
                "More starters than formation slots; extra starters are not placed"
            );
        }

        let persistence = LineupPersistence::new(
            ports.api,
            SaveTarget {
                team_id: data.team_id(),
                save_url: data.save_url.clone(),
                csrf_token: settings.csrf_token,
            },
        );

        tracing::info!(
            team_type = %data.team_type,
            players = lineup.roster().len(),
            starters = lineup.starter_count(),
            substitutes = lineup.substitutes().len(),
            can_edit = data.can_edit,
            "Lineup session initialized"
        );

        Self {
            team_type: data.team_type.clone(),
            can_edit: data.can_edit,
            lineup,
            interaction: InteractionState::Idle,
            save_state: SaveButtonState::Clean,
            state_before_save: SaveButtonState::Clean,
            edited_during_save: false,
            modes: ModeController::new(ports.bindings, settings.mobile_breakpoint),
            resize: ResizeDebouncer::new(settings.resize_debounce_ms),
            persistence,
            renderer: ports.renderer,
            notifier: ports.notifier,
            storage: ports.storage,
            clock: ports.clock,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn lineup(&self) -> &LineupState {
        &self.lineup
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn save_state(&self) -> SaveButtonState {
        self.save_state
    }

    pub fn is_dirty(&self) -> bool {
        self.save_state == SaveButtonState::Dirty || self.edited_during_save
    }

    pub fn mode(&self) -> Option<InteractionMode> {
        self.modes.current()
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    pub fn team_type(&self) -> &str {
        &self.team_type
    }

    pub fn snapshot(&self) -> LineupSnapshot {
        LineupSnapshot {
            team_type: self.team_type.clone(),
            formation: self.lineup.formation(),
            starters: self.lineup.starters(),
            substitutes: self.lineup.substitutes().to_vec(),
            available: self.lineup.available(),
            save_state: self.save_state,
            mode: self.modes.current(),
        }
    }

    // =========================================================================
    // Lifecycle and viewport
    // =========================================================================

    /// First render and, for editable lineups, first handler wiring.
    pub fn start(&mut self, width: u32) -> ModeChange {
        if !self.can_edit {
            self.render();
            return ModeChange::Disabled;
        }
        self.renderer.set_save_button(self.save_state);
        self.apply_width(width)
    }

    /// Wire the modality for `width`. A switch drops any selection and
    /// re-renders before the new handlers go in.
    pub fn apply_width(&mut self, width: u32) -> ModeChange {
        if !self.can_edit {
            return ModeChange::Disabled;
        }

        let renderer = &self.renderer;
        let lineup = &self.lineup;
        let state = &mut self.interaction;
        let change = self.modes.apply_width(width, |_, to| {
            for effect in interaction::reset(state).effects {
                renderer.apply_effect(&effect);
            }
            *state = InteractionState::Idle;
            renderer.render(&LineupView::build(lineup, Some(to), true));
        });

        if let ModeChange::Switched {
            to: InteractionMode::Tap,
            ..
        } = change
        {
            self.show_tutorial_once();
        }
        change
    }

    /// Viewport resized; the mode is re-evaluated once resizing settles.
    pub fn handle_resize(&mut self, width: u32) {
        let now = self.now_millis();
        self.resize.record(width, now);
    }

    /// Apply a settled resize, if its quiet period has elapsed.
    pub fn poll_resize(&mut self) -> Option<ModeChange> {
        let width = self.resize.poll(self.now_millis())?;
        Some(self.apply_width(width))
    }

    /// Milliseconds until a pending resize settles.
    pub fn resize_pending_ms(&self) -> Option<u64> {
        let deadline = self.resize.deadline()?;
        Some(deadline.saturating_sub(self.now_millis()))
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Feed one tap-mode gesture through the interaction state machine.
    pub fn handle_tap(&mut self, event: TapEvent) {
        if self.modes.current() != Some(InteractionMode::Tap) {
            tracing::debug!(?event, "Tap ignored: tap handlers not wired");
            return;
        }
        let transition = interaction::transition(&self.interaction, event, &self.lineup);
        self.run_transition(transition);
    }

    /// Apply a formation picked from the selector.
    pub fn change_formation(&mut self, formation: Formation) -> AssignmentOutcome {
        if !self.can_edit {
            tracing::debug!(%formation, "Formation change ignored: lineup is read-only");
            return AssignmentOutcome::Unchanged;
        }
        self.reset_interaction();
        let outcome = self.lineup.change_formation(formation);
        if let AssignmentOutcome::FormationChanged { overflow, .. } = &outcome {
            if !overflow.is_empty() {
                tracing::warn!(
                    %formation,
                    overflow = overflow.len(),
                    "Starters exceed the new formation's slots"
                );
            }
        }
        self.record_outcome(&outcome);
        outcome
    }

    /// Lenient variant taking the selector's raw value.
    pub fn select_formation(&mut self, name: &str) -> AssignmentOutcome {
        self.change_formation(Formation::from_name(name))
    }

    // =========================================================================
    // Saving
    // =========================================================================

    /// Validate and send the lineup, then apply the server's answer.
    pub async fn save(&mut self) -> Result<(), SaveError> {
        let snapshot = match self.begin_save() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.notifier.notify(&e.notice());
                return Err(e);
            }
        };
        let result = self.persistence.save(&snapshot).await;
        self.finish_save(result)
    }

    /// Enter the `Saving` state and return the lineup to send.
    ///
    /// Local edits stay possible until [`finish_save`](Self::finish_save).
    pub fn begin_save(&mut self) -> Result<LineupState, SaveError> {
        if !self.can_edit {
            return Err(SaveError::ReadOnly);
        }
        if self.save_state == SaveButtonState::Saving {
            return Err(SaveError::InProgress);
        }
        self.state_before_save = self.save_state;
        self.edited_during_save = false;
        self.set_save_state(SaveButtonState::Saving);
        Ok(self.lineup.clone())
    }

    /// Apply the outcome of a save started with [`begin_save`](Self::begin_save).
    pub fn finish_save(
        &mut self,
        result: Result<AuthoritativeLineup, SaveError>,
    ) -> Result<(), SaveError> {
        let edited = std::mem::take(&mut self.edited_during_save);

        match result {
            Ok(authoritative) => {
                if let AuthoritativeLineup::Replaced {
                    starters,
                    substitutes,
                } = authoritative
                {
                    let report = self.lineup.replace_assignments(starters, substitutes);
                    log_sanitize_report(&self.team_type, &report);
                }
                if edited {
                    tracing::info!(
                        team_type = %self.team_type,
                        "Lineup changed while saving; marking dirty"
                    );
                    self.set_save_state(SaveButtonState::Dirty);
                } else {
                    self.set_save_state(SaveButtonState::Clean);
                }
                self.render();
                tracing::info!(team_type = %self.team_type, "Lineup saved");
                self.notifier
                    .notify(&Notice::success(MSG_SAVED).with_duration(SAVED_NOTICE_MS));
                Ok(())
            }
            Err(e) => {
                if e.is_local() {
                    tracing::warn!(team_type = %self.team_type, error = %e, "Lineup not saved");
                } else {
                    tracing::error!(team_type = %self.team_type, error = %e, "Failed to save lineup");
                }
                let restored = if edited {
                    SaveButtonState::Dirty
                } else {
                    self.state_before_save
                };
                self.set_save_state(restored);
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Run a transition's effects in order. A rejected assignment keeps the
    /// current selection and drops the remaining effects.
    fn run_transition(&mut self, transition: Transition) {
        let Transition { next, effects } = transition;
        for effect in effects {
            match effect {
                InteractionEffect::Assign(command) => {
                    if self.apply_command(&command).is_err() {
                        return;
                    }
                }
                InteractionEffect::Notify(notice) => self.notifier.notify(&notice),
                visual => self.renderer.apply_effect(&visual),
            }
        }
        self.interaction = next;
    }

    fn apply_command(
        &mut self,
        command: &AssignmentCommand,
    ) -> Result<AssignmentOutcome, LineupError> {
        match self.lineup.apply(command) {
            Ok(outcome) => {
                self.record_outcome(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                self.report_rejection(command, &e);
                Err(e)
            }
        }
    }

    fn record_outcome(&mut self, outcome: &AssignmentOutcome) {
        if !outcome.is_change() {
            return;
        }
        tracing::debug!(team_type = %self.team_type, ?outcome, "Lineup updated");
        self.render();
        self.mark_dirty();
    }

    fn report_rejection(&self, command: &AssignmentCommand, error: &LineupError) {
        if error.is_data_integrity() {
            tracing::warn!(player_id = %command.player(), error = %error, "Assignment rejected");
        } else {
            tracing::info!(player_id = %command.player(), error = %error, "Assignment rejected");
        }
        self.notifier
            .notify(&Notice::new(error.to_string(), error.severity()));
    }

    fn reset_interaction(&mut self) {
        for effect in interaction::reset(&self.interaction).effects {
            self.renderer.apply_effect(&effect);
        }
        self.interaction = InteractionState::Idle;
    }

    fn render(&self) {
        self.renderer.render(&LineupView::build(
            &self.lineup,
            self.modes.current(),
            self.can_edit,
        ));
    }

    fn mark_dirty(&mut self) {
        match self.save_state {
            SaveButtonState::Saving => self.edited_during_save = true,
            SaveButtonState::Dirty => {}
            SaveButtonState::Clean => self.set_save_state(SaveButtonState::Dirty),
        }
    }

    fn set_save_state(&mut self, state: SaveButtonState) {
        if self.save_state != state {
            self.save_state = state;
            self.renderer.set_save_button(state);
        }
    }

    fn show_tutorial_once(&self) {
        let key = storage_keys::tutorial_shown(&self.team_type);
        if self.storage.load(&key).is_some() {
            return;
        }
        self.notifier
            .notify(&Notice::info(MSG_TUTORIAL).with_duration(TUTORIAL_NOTICE_MS));
        self.storage.save(&key, "true");
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0)
    }
}

impl DragCoordinator for LineupSession {
    fn on_drop(
        &mut self,
        source: DropZone,
        destination: DropZone,
        player: &PlayerId,
    ) -> Result<AssignmentOutcome, LineupError> {
        if self.modes.current() != Some(InteractionMode::Drag) {
            tracing::debug!(player_id = %player, "Drop ignored: drag handlers not wired");
            return Ok(AssignmentOutcome::Unchanged);
        }

        let command = drop_command(player.clone(), destination);
        let Some(current) = self.lineup.zone_of(player) else {
            let error = LineupError::UnknownPlayer(player.clone());
            self.report_rejection(&command, &error);
            return Err(error);
        };
        if !source.is_origin(current) {
            tracing::debug!(
                player_id = %player,
                ?source,
                ?current,
                "Drop source differs from lineup; using lineup zone"
            );
        }
        if destination.is_origin(current) {
            return Ok(AssignmentOutcome::Unchanged);
        }

        self.apply_command(&command)
    }
}

fn log_sanitize_report(team_type: &str, report: &SanitizeReport) {
    if report.is_clean() {
        return;
    }
    tracing::warn!(
        team_type,
        unknown = ?report.unknown,
        duplicates = ?report.duplicates,
        conflicting = ?report.conflicting,
        bench_overflow = ?report.bench_overflow,
        "Dropped invalid lineup entries"
    );
}
