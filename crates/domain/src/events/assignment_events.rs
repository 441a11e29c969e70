//! Assignment-related domain events

use crate::formation::Formation;
use crate::ids::PlayerId;
use crate::lineup::Zone;

/// Outcome of a successful assignment operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The player changed zone; any vacated starter slot is now empty.
    Moved {
        player: PlayerId,
        from: Zone,
        to: Zone,
    },
    /// The mover took an occupied starter slot and the occupant took the
    /// mover's former zone.
    Swapped {
        mover: PlayerId,
        displaced: PlayerId,
        slot: usize,
        displaced_to: Zone,
    },
    /// The pitch was rebuilt for a different formation.
    FormationChanged {
        from: Formation,
        to: Formation,
        /// Starters that no longer fit in the new formation's slots.
        overflow: Vec<PlayerId>,
    },
    /// Same-origin move; nothing changed.
    Unchanged,
}

impl AssignmentOutcome {
    /// Whether state was mutated (and so needs a re-render and a dirty mark).
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Entries dropped while loading external lineup data.
///
/// The domain does not log; callers report these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Ids that are not on the roster.
    pub unknown: Vec<PlayerId>,
    /// Repeated ids within the same list.
    pub duplicates: Vec<PlayerId>,
    /// Ids listed both as starter and substitute (the bench entry is dropped).
    pub conflicting: Vec<PlayerId>,
    /// Substitutes beyond the bench cap.
    pub bench_overflow: Vec<PlayerId>,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
            && self.duplicates.is_empty()
            && self.conflicting.is_empty()
            && self.bench_overflow.is_empty()
    }
}
