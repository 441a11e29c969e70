//! Slot layout - projects starter slots onto formation rows for display.
//!
//! Rows are displayed forwards-first (goalkeeper at the bottom of the pitch),
//! so the formation's row list is walked in reverse. Slot `0` is the leftmost
//! position of the forward-most row, and slot indices increase left-to-right,
//! row by row, towards the goalkeeper.

use serde::{Deserialize, Serialize};

use crate::formation::Formation;
use crate::ids::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneLabel {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defence,
    #[serde(rename = "MID")]
    Midfield,
    #[serde(rename = "FWD")]
    Forward,
}

impl ZoneLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defence => "DEF",
            Self::Midfield => "MID",
            Self::Forward => "FWD",
        }
    }
}

/// Label for a row given its goalkeeper-first index.
///
/// Precedence matters for short formations: first row, last row, second row,
/// then second-to-last row. Everything else is unlabeled.
pub fn zone_label(row_index: usize, total_rows: usize) -> Option<ZoneLabel> {
    if row_index == 0 {
        Some(ZoneLabel::Goalkeeper)
    } else if row_index + 1 == total_rows {
        Some(ZoneLabel::Forward)
    } else if row_index == 1 {
        Some(ZoneLabel::Defence)
    } else if row_index + 2 == total_rows {
        Some(ZoneLabel::Midfield)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub slot: usize,
    /// `None` renders as an empty placeholder.
    pub occupant: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    /// Index in the formation's goalkeeper-first row list.
    pub row_index: usize,
    pub label: Option<ZoneLabel>,
    pub slots: Vec<LayoutSlot>,
}

/// Display projection of the pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub formation: Formation,
    /// Rows in display order (forwards first).
    pub rows: Vec<LayoutRow>,
    /// Starters that did not fit in the formation's slots.
    pub overflow: Vec<PlayerId>,
}

impl SlotLayout {
    /// Build the layout from slot-indexed starter entries.
    ///
    /// Entries past the formation's capacity are reported in `overflow` and
    /// left out of the rows; the caller's list is not modified.
    pub fn build(formation: Formation, starters: &[Option<PlayerId>]) -> Self {
        let row_sizes = formation.rows();
        let total_rows = row_sizes.len();
        let mut entries = starters.iter();
        let mut slot = 0;

        let rows = row_sizes
            .iter()
            .enumerate()
            .rev()
            .map(|(row_index, &size)| {
                let slots = (0..size)
                    .map(|_| {
                        let occupant = entries.next().cloned().flatten();
                        let layout_slot = LayoutSlot { slot, occupant };
                        slot += 1;
                        layout_slot
                    })
                    .collect();
                LayoutRow {
                    row_index,
                    label: zone_label(row_index, total_rows),
                    slots,
                }
            })
            .collect();

        let overflow = entries.flatten().cloned().collect();

        Self {
            formation,
            rows,
            overflow,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|r| r.slots.len()).sum()
    }

    /// Display coordinates `(row, column)` of a slot, rows forwards-first.
    pub fn position_of(&self, slot: usize) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, layout_row)| {
            layout_row
                .slots
                .iter()
                .position(|s| s.slot == slot)
                .map(|column| (row, column))
        })
    }

    pub fn occupant_of(&self, slot: usize) -> Option<&PlayerId> {
        self.rows
            .iter()
            .flat_map(|r| r.slots.iter())
            .find(|s| s.slot == slot)
            .and_then(|s| s.occupant.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<Option<PlayerId>> {
        range.map(|i| Some(PlayerId::new(i.to_string()))).collect()
    }

    #[test]
    fn labels_follow_row_precedence() {
        assert_eq!(zone_label(0, 4), Some(ZoneLabel::Goalkeeper));
        assert_eq!(zone_label(1, 4), Some(ZoneLabel::Defence));
        assert_eq!(zone_label(2, 4), Some(ZoneLabel::Midfield));
        assert_eq!(zone_label(3, 4), Some(ZoneLabel::Forward));

        // 4-2-3-1: the middle row has no label
        assert_eq!(zone_label(2, 5), None);
        assert_eq!(zone_label(3, 5), Some(ZoneLabel::Midfield));

        // three rows: defence wins over midfield
        assert_eq!(zone_label(1, 3), Some(ZoneLabel::Defence));
    }

    #[test]
    fn first_starter_goes_to_forward_row() {
        let layout = SlotLayout::build(Formation::FourFourTwo, &ids(1..=11));

        assert_eq!(layout.rows.len(), 4);
        assert_eq!(layout.rows[0].label, Some(ZoneLabel::Forward));
        assert_eq!(layout.rows[0].row_index, 3);
        assert_eq!(layout.rows[0].slots.len(), 2);
        assert_eq!(layout.rows[0].slots[0].occupant, Some(PlayerId::new("1")));
        assert_eq!(layout.rows[0].slots[1].occupant, Some(PlayerId::new("2")));

        let goalkeeper_row = &layout.rows[3];
        assert_eq!(goalkeeper_row.label, Some(ZoneLabel::Goalkeeper));
        assert_eq!(goalkeeper_row.slots[0].occupant, Some(PlayerId::new("11")));
        assert_eq!(goalkeeper_row.slots[0].slot, 10);
    }

    #[test]
    fn missing_starters_leave_empty_placeholders() {
        let layout = SlotLayout::build(Formation::FourThreeThree, &ids(1..=4));

        assert_eq!(layout.slot_count(), 11);
        assert_eq!(layout.occupant_of(3), Some(&PlayerId::new("4")));
        assert_eq!(layout.occupant_of(4), None);
        assert!(layout.overflow.is_empty());
    }

    #[test]
    fn gaps_keep_their_slot() {
        let starters = vec![None, Some(PlayerId::new("5"))];
        let layout = SlotLayout::build(Formation::FourFourTwo, &starters);

        assert_eq!(layout.occupant_of(0), None);
        assert_eq!(layout.occupant_of(1), Some(&PlayerId::new("5")));
    }

    #[test]
    fn starters_beyond_capacity_are_not_placed() {
        let starters = ids(1..=13);
        let layout = SlotLayout::build(Formation::FourFourTwo, &starters);

        assert_eq!(layout.slot_count(), 11);
        assert_eq!(
            layout.overflow,
            vec![PlayerId::new("12"), PlayerId::new("13")]
        );
        // The caller's list is untouched
        assert_eq!(starters.len(), 13);
    }

    #[test]
    fn position_of_maps_slot_to_row_and_column() {
        let layout = SlotLayout::build(Formation::FourTwoThreeOne, &[]);

        // 4-2-3-1 displayed as [1, 3, 2, 4, 1]
        assert_eq!(layout.position_of(0), Some((0, 0)));
        assert_eq!(layout.position_of(1), Some((1, 0)));
        assert_eq!(layout.position_of(3), Some((1, 2)));
        assert_eq!(layout.position_of(4), Some((2, 0)));
        assert_eq!(layout.position_of(10), Some((4, 0)));
        assert_eq!(layout.position_of(11), None);
    }
}
