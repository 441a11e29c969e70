//! Lineup domain: formations, lineup state, assignment rules and the tap
//! interaction state machine.
//!
//! Everything here is pure. No I/O and no logging; operations return
//! outcomes and reports that the application layer acts on.

pub mod drag;
pub mod error;
pub mod events;
pub mod formation;
pub mod ids;
pub mod interaction;
pub mod layout;
pub mod lineup;
pub mod mode;
pub mod notice;
pub mod roster;

pub use drag::{drop_command, DropZone};
pub use error::{DomainError, LineupError};
pub use events::{AssignmentOutcome, SanitizeReport};
pub use formation::Formation;
pub use ids::{PlayerId, TeamId};
pub use interaction::{
    transition, InteractionEffect, InteractionState, PlayerSelection, SlotSelection, SlotTarget,
    TapEvent, Transition,
};
pub use layout::{zone_label, LayoutRow, LayoutSlot, SlotLayout, ZoneLabel};
pub use lineup::{
    AssignmentCommand, LineupCounts, LineupState, StarterCountStatus, Zone, MAX_SUBSTITUTES,
};
pub use mode::{InteractionMode, DEFAULT_MOBILE_BREAKPOINT};
pub use notice::{Notice, Severity};
pub use roster::{PlayerProfile, Roster};
