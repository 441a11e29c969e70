//! Drop targets for the drag modality.
//!
//! A drop resolves to the same [`AssignmentCommand`]s the tap machine emits,
//! so both modalities share one set of rules.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::lineup::{AssignmentCommand, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "zone", content = "slot")]
pub enum DropZone {
    StarterSlot(usize),
    Bench,
    Pool,
}

impl DropZone {
    /// Whether dropping a player currently in `zone` here is a no-op.
    pub fn is_origin(self, zone: Zone) -> bool {
        match (self, zone) {
            (Self::StarterSlot(slot), Zone::Starter(current)) => slot == current,
            (Self::Bench, Zone::Bench(_)) | (Self::Pool, Zone::Pool) => true,
            _ => false,
        }
    }
}

/// Command for dropping `player` onto `destination`.
pub fn drop_command(player: PlayerId, destination: DropZone) -> AssignmentCommand {
    match destination {
        DropZone::StarterSlot(slot) => AssignmentCommand::PlaceInStarterSlot { player, slot },
        DropZone::Bench => AssignmentCommand::MoveToBench(player),
        DropZone::Pool => AssignmentCommand::ReturnToPool(player),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_zones_map_to_commands() {
        let player = PlayerId::new("7");
        assert_eq!(
            drop_command(player.clone(), DropZone::StarterSlot(3)),
            AssignmentCommand::PlaceInStarterSlot {
                player: player.clone(),
                slot: 3
            }
        );
        assert_eq!(
            drop_command(player.clone(), DropZone::Bench),
            AssignmentCommand::MoveToBench(player.clone())
        );
        assert_eq!(
            drop_command(player.clone(), DropZone::Pool),
            AssignmentCommand::ReturnToPool(player)
        );
    }

    #[test]
    fn origin_detection() {
        assert!(DropZone::StarterSlot(2).is_origin(Zone::Starter(2)));
        assert!(!DropZone::StarterSlot(2).is_origin(Zone::Starter(3)));
        assert!(DropZone::Bench.is_origin(Zone::Bench(5)));
        assert!(DropZone::Pool.is_origin(Zone::Pool));
        assert!(!DropZone::Pool.is_origin(Zone::Bench(0)));
    }
}
