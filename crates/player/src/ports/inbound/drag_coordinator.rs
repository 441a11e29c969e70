//! Drag Coordinator - the drag modality's entry point.
//!
//! Whatever drag library is wired reports a completed drop here. The
//! coordinator turns it into the same assignment commands the tap path uses.

use lineup_domain::{AssignmentOutcome, DropZone, LineupError, PlayerId};

pub trait DragCoordinator {
    /// A player was dragged from `source` and released over `destination`.
    ///
    /// `source` is what the drag library reported; the coordinator resolves
    /// the player's real zone from the lineup before acting.
    fn on_drop(
        &mut self,
        source: DropZone,
        destination: DropZone,
        player: &PlayerId,
    ) -> Result<AssignmentOutcome, LineupError>;
}
