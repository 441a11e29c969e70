//! Lineup aggregate - canonical starters/substitutes state and the rules for
//! moving players between zones.
//!
//! # Invariants
//!
//! - No player is both a starter and a substitute
//! - Neither list contains duplicates
//! - Every assigned id is on the roster
//! - The bench holds at most [`MAX_SUBSTITUTES`] players
//! - `starters` always has at least one entry per formation slot; emptied
//!   slots hold `None` so slot positions never shift
//!
//! Every mutation either succeeds with an [`AssignmentOutcome`] or fails with
//! a [`LineupError`] without touching state. The same methods serve both the
//! drag and the tap interaction paths.

use serde::{Deserialize, Serialize};

use crate::error::LineupError;
use crate::events::{AssignmentOutcome, SanitizeReport};
use crate::formation::Formation;
use crate::ids::PlayerId;
use crate::layout::SlotLayout;
use crate::roster::Roster;

/// Bench capacity.
pub const MAX_SUBSTITUTES: usize = 12;

/// Where a player currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "zone", content = "index")]
pub enum Zone {
    /// Starter slot index.
    Starter(usize),
    /// Position on the bench.
    Bench(usize),
    /// Not assigned.
    Pool,
}

/// A single placement request, independent of how the user expressed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentCommand {
    PlaceInStarterSlot { player: PlayerId, slot: usize },
    AddToBench(PlayerId),
    MoveToBench(PlayerId),
    RemoveFromBench(PlayerId),
    ReturnToPool(PlayerId),
}

impl AssignmentCommand {
    pub fn player(&self) -> &PlayerId {
        match self {
            Self::PlaceInStarterSlot { player, .. }
            | Self::AddToBench(player)
            | Self::MoveToBench(player)
            | Self::RemoveFromBench(player)
            | Self::ReturnToPool(player) => player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterCountStatus {
    Short,
    Complete,
    Over,
}

/// Counts shown next to each zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupCounts {
    pub starters: usize,
    pub substitutes: usize,
    pub available: usize,
    pub capacity: usize,
    pub status: StarterCountStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupState {
    formation: Formation,
    roster: Roster,
    starters: Vec<Option<PlayerId>>,
    substitutes: Vec<PlayerId>,
}

impl LineupState {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Build a lineup from externally supplied data.
    ///
    /// Entries that would break an invariant are dropped and listed in the
    /// returned report.
    pub fn new(
        formation: Formation,
        roster: Roster,
        starters: impl IntoIterator<Item = PlayerId>,
        substitutes: impl IntoIterator<Item = PlayerId>,
    ) -> (Self, SanitizeReport) {
        let mut state = Self {
            formation,
            roster,
            starters: Vec::new(),
            substitutes: Vec::new(),
        };
        let report = state.replace_assignments(starters, substitutes);
        (state, report)
    }

    /// Replace starters and substitutes wholesale (e.g. with server state).
    pub fn replace_assignments(
        &mut self,
        starters: impl IntoIterator<Item = PlayerId>,
        substitutes: impl IntoIterator<Item = PlayerId>,
    ) -> SanitizeReport {
        let mut report = SanitizeReport::default();

        let mut placed: Vec<PlayerId> = Vec::new();
        for id in starters {
            if !self.roster.contains(&id) {
                report.unknown.push(id);
            } else if placed.contains(&id) {
                report.duplicates.push(id);
            } else {
                placed.push(id);
            }
        }

        let mut bench: Vec<PlayerId> = Vec::new();
        for id in substitutes {
            if !self.roster.contains(&id) {
                report.unknown.push(id);
            } else if placed.contains(&id) {
                report.conflicting.push(id);
            } else if bench.contains(&id) {
                report.duplicates.push(id);
            } else if bench.len() >= MAX_SUBSTITUTES {
                report.bench_overflow.push(id);
            } else {
                bench.push(id);
            }
        }

        self.starters = padded(placed.into_iter().map(Some).collect(), self.capacity());
        self.substitutes = bench;
        report
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn formation(&self) -> Formation {
        self.formation
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of starter slots in the current formation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.formation.slot_count()
    }

    /// Slot-indexed starter entries, including any overflow past capacity.
    #[inline]
    pub fn starter_slots(&self) -> &[Option<PlayerId>] {
        &self.starters
    }

    /// Filled starters in slot order. This is what gets counted and saved.
    pub fn starters(&self) -> Vec<PlayerId> {
        self.starters.iter().flatten().cloned().collect()
    }

    pub fn starter_count(&self) -> usize {
        self.starters.iter().flatten().count()
    }

    #[inline]
    pub fn substitutes(&self) -> &[PlayerId] {
        &self.substitutes
    }

    /// Roster players that are neither starters nor substitutes, in roster
    /// order. Always derived, never stored.
    pub fn available(&self) -> Vec<PlayerId> {
        self.roster
            .ids()
            .filter(|id| matches!(self.locate(id), Zone::Pool))
            .cloned()
            .collect()
    }

    pub fn occupant(&self, slot: usize) -> Option<&PlayerId> {
        self.starters.get(slot).and_then(Option::as_ref)
    }

    /// Current zone of a player, `None` when the id is not on the roster.
    pub fn zone_of(&self, player: &PlayerId) -> Option<Zone> {
        self.roster.contains(player).then(|| self.locate(player))
    }

    /// Display projection of the pitch.
    pub fn layout(&self) -> SlotLayout {
        SlotLayout::build(self.formation, &self.starters)
    }

    /// Starters that do not fit the current formation.
    pub fn overflow(&self) -> Vec<PlayerId> {
        self.starters
            .iter()
            .skip(self.capacity())
            .flatten()
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> LineupCounts {
        let starters = self.starter_count();
        let capacity = self.capacity();
        let status = match starters.cmp(&capacity) {
            std::cmp::Ordering::Less => StarterCountStatus::Short,
            std::cmp::Ordering::Equal => StarterCountStatus::Complete,
            std::cmp::Ordering::Greater => StarterCountStatus::Over,
        };
        LineupCounts {
            starters,
            substitutes: self.substitutes.len(),
            available: self.roster.len() - starters - self.substitutes.len(),
            capacity,
            status,
        }
    }

    // =========================================================================
    // Assignment operations
    // =========================================================================

    /// Dispatch a command to the matching operation.
    pub fn apply(&mut self, command: &AssignmentCommand) -> Result<AssignmentOutcome, LineupError> {
        match command {
            AssignmentCommand::PlaceInStarterSlot { player, slot } => {
                self.place_in_starter_slot(player, *slot)
            }
            AssignmentCommand::AddToBench(player) => self.add_to_bench(player),
            AssignmentCommand::MoveToBench(player) => self.move_to_bench(player),
            AssignmentCommand::RemoveFromBench(player) => self.remove_from_bench(player),
            AssignmentCommand::ReturnToPool(player) => self.return_to_pool(player),
        }
    }

    /// Put a player into a starter slot.
    ///
    /// An occupied slot results in a swap: the occupant takes the mover's
    /// former place (starter slot, bench position, or the pool). Otherwise the
    /// mover's former starter slot is left empty.
    pub fn place_in_starter_slot(
        &mut self,
        player: &PlayerId,
        slot: usize,
    ) -> Result<AssignmentOutcome, LineupError> {
        let origin = self.require_known(player)?;
        let capacity = self.capacity();
        if slot >= capacity {
            return Err(LineupError::InvalidSlot { slot, capacity });
        }
        if origin == Zone::Starter(slot) {
            return Ok(AssignmentOutcome::Unchanged);
        }

        match self.starters[slot].take() {
            Some(occupant) => {
                match origin {
                    Zone::Starter(from) => self.starters[from] = Some(occupant.clone()),
                    Zone::Bench(from) => self.substitutes[from] = occupant.clone(),
                    Zone::Pool => {}
                }
                self.starters[slot] = Some(player.clone());
                Ok(AssignmentOutcome::Swapped {
                    mover: player.clone(),
                    displaced: occupant,
                    slot,
                    displaced_to: origin,
                })
            }
            None => {
                self.vacate(origin);
                self.starters[slot] = Some(player.clone());
                Ok(AssignmentOutcome::Moved {
                    player: player.clone(),
                    from: origin,
                    to: Zone::Starter(slot),
                })
            }
        }
    }

    /// Append a pool player to the bench.
    pub fn add_to_bench(&mut self, player: &PlayerId) -> Result<AssignmentOutcome, LineupError> {
        match self.require_known(player)? {
            Zone::Bench(_) => Err(LineupError::AlreadyOnBench(player.clone())),
            Zone::Starter(_) => Err(LineupError::AlreadyStarter(player.clone())),
            Zone::Pool => {
                self.ensure_bench_room()?;
                self.substitutes.push(player.clone());
                Ok(AssignmentOutcome::Moved {
                    player: player.clone(),
                    from: Zone::Pool,
                    to: Zone::Bench(self.substitutes.len() - 1),
                })
            }
        }
    }

    /// Move a starter or pool player to the end of the bench.
    ///
    /// A player already on the bench is a same-origin move and leaves state
    /// unchanged.
    pub fn move_to_bench(&mut self, player: &PlayerId) -> Result<AssignmentOutcome, LineupError> {
        let origin = self.require_known(player)?;
        if let Zone::Bench(_) = origin {
            return Ok(AssignmentOutcome::Unchanged);
        }
        self.ensure_bench_room()?;

        self.vacate(origin);
        self.substitutes.push(player.clone());
        Ok(AssignmentOutcome::Moved {
            player: player.clone(),
            from: origin,
            to: Zone::Bench(self.substitutes.len() - 1),
        })
    }

    /// Take a player off the bench; they become available again.
    pub fn remove_from_bench(
        &mut self,
        player: &PlayerId,
    ) -> Result<AssignmentOutcome, LineupError> {
        match self.require_known(player)? {
            Zone::Bench(position) => {
                self.substitutes.remove(position);
                Ok(AssignmentOutcome::Moved {
                    player: player.clone(),
                    from: Zone::Bench(position),
                    to: Zone::Pool,
                })
            }
            _ => Err(LineupError::NotOnBench(player.clone())),
        }
    }

    /// Send a starter or substitute back to the available pool.
    pub fn return_to_pool(&mut self, player: &PlayerId) -> Result<AssignmentOutcome, LineupError> {
        let origin = self.require_known(player)?;
        if origin == Zone::Pool {
            return Ok(AssignmentOutcome::Unchanged);
        }
        self.vacate(origin);
        Ok(AssignmentOutcome::Moved {
            player: player.clone(),
            from: origin,
            to: Zone::Pool,
        })
    }

    /// Rebuild the pitch for another formation.
    ///
    /// Filled starters keep their relative order and are packed into the new
    /// slots; any that do not fit stay in the list as overflow.
    pub fn change_formation(&mut self, formation: Formation) -> AssignmentOutcome {
        if formation == self.formation {
            return AssignmentOutcome::Unchanged;
        }
        let previous = std::mem::replace(&mut self.formation, formation);
        let filled: Vec<Option<PlayerId>> = self.starters.drain(..).flatten().map(Some).collect();
        self.starters = padded(filled, self.capacity());

        AssignmentOutcome::FormationChanged {
            from: previous,
            to: formation,
            overflow: self.overflow(),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn locate(&self, player: &PlayerId) -> Zone {
        if let Some(slot) = self
            .starters
            .iter()
            .position(|s| s.as_ref() == Some(player))
        {
            return Zone::Starter(slot);
        }
        if let Some(position) = self.substitutes.iter().position(|s| s == player) {
            return Zone::Bench(position);
        }
        Zone::Pool
    }

    fn require_known(&self, player: &PlayerId) -> Result<Zone, LineupError> {
        self.zone_of(player)
            .ok_or_else(|| LineupError::UnknownPlayer(player.clone()))
    }

    fn ensure_bench_room(&self) -> Result<(), LineupError> {
        if self.substitutes.len() >= MAX_SUBSTITUTES {
            return Err(LineupError::BenchFull {
                max: MAX_SUBSTITUTES,
            });
        }
        Ok(())
    }

    /// Clear a player's former place. Formation slots are emptied in place;
    /// overflow entries are removed outright.
    fn vacate(&mut self, zone: Zone) {
        match zone {
            Zone::Starter(slot) if slot < self.capacity() => self.starters[slot] = None,
            Zone::Starter(slot) => {
                self.starters.remove(slot);
            }
            Zone::Bench(position) => {
                self.substitutes.remove(position);
            }
            Zone::Pool => {}
        }
    }
}

fn padded(mut slots: Vec<Option<PlayerId>>, capacity: usize) -> Vec<Option<PlayerId>> {
    if slots.len() < capacity {
        slots.resize(capacity, None);
    }
    slots
}
