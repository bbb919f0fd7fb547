//! Immutable inventory snapshot handed to observers and views.

use serde::{Deserialize, Serialize};

use crate::model::PlacedBox;

/// One row of the tabular inventory summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Shelf number, 1-based as displayed.
    pub shelf: usize,
    /// Formatted size ("0.25×0.75").
    pub size: String,
    /// Position within the shelf's insertion-ordered sequence.
    pub index: usize,
}

/// A point-in-time copy of every shelf's placed boxes.
///
/// Order within a shelf is insertion order, not spatial order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Per-shelf box lists, indexed by shelf.
    pub shelves: Vec<Vec<PlacedBox>>,
}

impl InventorySnapshot {
    /// Number of shelves.
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Boxes on one shelf, if the index is valid.
    pub fn boxes(&self, shelf: usize) -> Option<&[PlacedBox]> {
        self.shelves.get(shelf).map(|v| v.as_slice())
    }

    /// Iterate (shelf index, boxes) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[PlacedBox])> {
        self.shelves.iter().enumerate().map(|(i, v)| (i, v.as_slice()))
    }

    /// Total number of placed boxes across all shelves.
    pub fn total_boxes(&self) -> usize {
        self.shelves.iter().map(|v| v.len()).sum()
    }

    /// Flatten into table rows (shelf number, size label, index).
    pub fn rows(&self) -> Vec<SummaryRow> {
        let mut rows = Vec::with_capacity(self.total_boxes());
        for (shelf, boxes) in self.iter() {
            for (index, placed) in boxes.iter().enumerate() {
                rows.push(SummaryRow {
                    shelf: shelf + 1,
                    size: placed.size_label(),
                    index,
                });
            }
        }
        rows
    }
}
