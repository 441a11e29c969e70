//! Tap-to-select interaction state machine.
//!
//! At most one of "a player is armed" / "a slot is armed" holds at any time;
//! the tagged union makes both-at-once unrepresentable. [`transition`] is pure:
//! it reads the lineup to resolve zones but never mutates it. Mutations are
//! requested through [`InteractionEffect::Assign`], which the session applies
//! before any other effect of the same transition.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::lineup::{AssignmentCommand, LineupState, Zone};
use crate::notice::Notice;

pub const MSG_TAP_DESTINATION: &str = "Tap where to move this player";
pub const MSG_PICK_PLAYER: &str = "Select a player from the list";
pub const MSG_PICK_SUBSTITUTES: &str = "Select players to add to your bench";
pub const MSG_PLAYER_MOVED: &str = "Player moved!";
pub const MSG_PLAYER_ASSIGNED: &str = "Player assigned!";
pub const MSG_PLAYER_NOT_FOUND: &str = "Player not found";

/// A tappable empty destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "slot")]
pub enum SlotTarget {
    /// Starter slot index.
    Pitch(usize),
    Bench,
}

/// An armed player and where it was when armed.
///
/// `origin` is informational; destinations are resolved against the lineup's
/// current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSelection {
    pub player_id: PlayerId,
    pub origin: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub target: SlotTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    PlayerArmed(PlayerSelection),
    SlotArmed(SlotSelection),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn armed_player(&self) -> Option<&PlayerId> {
        match self {
            Self::PlayerArmed(selection) => Some(&selection.player_id),
            _ => None,
        }
    }
}

/// A user gesture in tap mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "target", rename_all = "snake_case")]
pub enum TapEvent {
    /// Tap on a player token anywhere (pitch, bench, pool).
    TapPlayer(PlayerId),
    /// Tap on an empty placeholder.
    TapEmptySlot(SlotTarget),
    /// Tap on the bench area itself.
    TapBenchZone,
    /// The "add substitute" button.
    OpenBenchPicker,
    /// Tap on a player inside the picker.
    TapPickerPlayer(PlayerId),
    ClosePicker,
    Deselect,
}

/// Side effects requested by a transition, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEffect {
    HighlightPlayer(PlayerId),
    ClearPlayerHighlight,
    MarkDestinations,
    ClearDestinations,
    HighlightSlot(SlotTarget),
    ClearSlotHighlight,
    OpenPicker {
        target: SlotTarget,
        players: Vec<PlayerId>,
    },
    ClosePicker,
    Assign(AssignmentCommand),
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: InteractionState,
    pub effects: Vec<InteractionEffect>,
}

impl Transition {
    fn new(next: InteractionState, effects: Vec<InteractionEffect>) -> Self {
        Self { next, effects }
    }

    fn stay(state: &InteractionState) -> Self {
        Self::new(state.clone(), Vec::new())
    }

    /// The assignment this transition requests, if any.
    pub fn command(&self) -> Option<&AssignmentCommand> {
        self.effects.iter().find_map(|effect| match effect {
            InteractionEffect::Assign(command) => Some(command),
            _ => None,
        })
    }
}

/// Where a destination tap would put the armed player.
enum Destination {
    Slot(usize),
    Bench,
}

pub fn transition(state: &InteractionState, event: TapEvent, lineup: &LineupState) -> Transition {
    if event == TapEvent::Deselect {
        return reset(state);
    }

    match state {
        InteractionState::Idle => from_idle(event, lineup),
        InteractionState::PlayerArmed(selection) => from_player_armed(state, selection, event, lineup),
        InteractionState::SlotArmed(selection) => from_slot_armed(state, *selection, event, lineup),
    }
}

/// Effects that return any state to `Idle`.
pub fn reset(state: &InteractionState) -> Transition {
    let effects = match state {
        InteractionState::Idle => Vec::new(),
        InteractionState::PlayerArmed(_) => clear_player(),
        InteractionState::SlotArmed(_) => clear_slot(),
    };
    Transition::new(InteractionState::Idle, effects)
}

fn from_idle(event: TapEvent, lineup: &LineupState) -> Transition {
    match event {
        TapEvent::TapPlayer(player) => arm_player(player, lineup, Vec::new()),
        TapEvent::TapEmptySlot(target) => arm_slot(target, lineup, Vec::new()),
        TapEvent::TapBenchZone | TapEvent::OpenBenchPicker => {
            arm_slot(SlotTarget::Bench, lineup, Vec::new())
        }
        TapEvent::TapPickerPlayer(_) | TapEvent::ClosePicker | TapEvent::Deselect => {
            Transition::stay(&InteractionState::Idle)
        }
    }
}

fn from_player_armed(
    state: &InteractionState,
    selection: &PlayerSelection,
    event: TapEvent,
    lineup: &LineupState,
) -> Transition {
    let armed = &selection.player_id;
    match event {
        TapEvent::TapPlayer(tapped) if tapped == *armed => reset(state),
        TapEvent::TapPlayer(tapped) => match lineup.zone_of(&tapped) {
            Some(Zone::Starter(slot)) => move_armed(state, armed, Destination::Slot(slot), lineup),
            Some(Zone::Bench(_)) => move_armed(state, armed, Destination::Bench, lineup),
            Some(Zone::Pool) => arm_player(tapped, lineup, clear_player()),
            None => {
                let mut transition = Transition::stay(state);
                transition
                    .effects
                    .push(InteractionEffect::Notify(Notice::error(MSG_PLAYER_NOT_FOUND)));
                transition
            }
        },
        TapEvent::TapEmptySlot(SlotTarget::Pitch(slot)) => {
            move_armed(state, armed, Destination::Slot(slot), lineup)
        }
        TapEvent::TapEmptySlot(SlotTarget::Bench)
        | TapEvent::TapBenchZone
        | TapEvent::OpenBenchPicker => move_armed(state, armed, Destination::Bench, lineup),
        TapEvent::TapPickerPlayer(_) | TapEvent::ClosePicker | TapEvent::Deselect => {
            Transition::stay(state)
        }
    }
}

fn from_slot_armed(
    state: &InteractionState,
    selection: SlotSelection,
    event: TapEvent,
    lineup: &LineupState,
) -> Transition {
    match event {
        TapEvent::TapPickerPlayer(player) => {
            if lineup.zone_of(&player) != Some(Zone::Pool) {
                let mut transition = Transition::stay(state);
                transition
                    .effects
                    .push(InteractionEffect::Notify(Notice::error(MSG_PLAYER_NOT_FOUND)));
                return transition;
            }
            let command = match selection.target {
                SlotTarget::Pitch(slot) => AssignmentCommand::PlaceInStarterSlot { player, slot },
                SlotTarget::Bench => AssignmentCommand::AddToBench(player),
            };
            let mut effects = vec![InteractionEffect::Assign(command)];
            effects.extend(clear_slot());
            effects.push(InteractionEffect::Notify(Notice::success(MSG_PLAYER_ASSIGNED)));
            Transition::new(InteractionState::Idle, effects)
        }
        TapEvent::ClosePicker | TapEvent::Deselect => reset(state),
        TapEvent::TapEmptySlot(target) if target == selection.target => Transition::stay(state),
        TapEvent::TapEmptySlot(target) => arm_slot(target, lineup, clear_slot()),
        TapEvent::TapBenchZone | TapEvent::OpenBenchPicker => {
            if selection.target == SlotTarget::Bench {
                Transition::stay(state)
            } else {
                arm_slot(SlotTarget::Bench, lineup, clear_slot())
            }
        }
        TapEvent::TapPlayer(player) => arm_player(player, lineup, clear_slot()),
    }
}

fn arm_player(
    player: PlayerId,
    lineup: &LineupState,
    mut effects: Vec<InteractionEffect>,
) -> Transition {
    let Some(origin) = lineup.zone_of(&player) else {
        effects.push(InteractionEffect::Notify(Notice::error(MSG_PLAYER_NOT_FOUND)));
        return Transition::new(InteractionState::Idle, effects);
    };
    effects.push(InteractionEffect::HighlightPlayer(player.clone()));
    effects.push(InteractionEffect::MarkDestinations);
    effects.push(InteractionEffect::Notify(Notice::info(MSG_TAP_DESTINATION)));
    Transition::new(
        InteractionState::PlayerArmed(PlayerSelection {
            player_id: player,
            origin,
        }),
        effects,
    )
}

fn arm_slot(
    target: SlotTarget,
    lineup: &LineupState,
    mut effects: Vec<InteractionEffect>,
) -> Transition {
    let message = match target {
        SlotTarget::Pitch(_) => MSG_PICK_PLAYER,
        SlotTarget::Bench => MSG_PICK_SUBSTITUTES,
    };
    effects.push(InteractionEffect::HighlightSlot(target));
    effects.push(InteractionEffect::OpenPicker {
        target,
        players: lineup.available(),
    });
    effects.push(InteractionEffect::Notify(Notice::info(message)));
    Transition::new(InteractionState::SlotArmed(SlotSelection { target }), effects)
}

fn move_armed(
    state: &InteractionState,
    armed: &PlayerId,
    destination: Destination,
    lineup: &LineupState,
) -> Transition {
    // Resolve against the live lineup; the stored origin may be stale.
    let current = lineup.zone_of(armed);
    let command = match (destination, current) {
        (Destination::Slot(slot), Some(Zone::Starter(from))) if from == slot => return reset(state),
        (Destination::Bench, Some(Zone::Bench(_))) => return reset(state),
        (Destination::Slot(slot), _) => AssignmentCommand::PlaceInStarterSlot {
            player: armed.clone(),
            slot,
        },
        (Destination::Bench, _) => AssignmentCommand::MoveToBench(armed.clone()),
    };

    let mut effects = vec![InteractionEffect::Assign(command)];
    effects.extend(clear_player());
    effects.push(InteractionEffect::Notify(Notice::success(MSG_PLAYER_MOVED)));
    Transition::new(InteractionState::Idle, effects)
}

fn clear_player() -> Vec<InteractionEffect> {
    vec![
        InteractionEffect::ClearPlayerHighlight,
        InteractionEffect::ClearDestinations,
    ]
}

fn clear_slot() -> Vec<InteractionEffect> {
    vec![
        InteractionEffect::ClearSlotHighlight,
        InteractionEffect::ClosePicker,
    ]
}
