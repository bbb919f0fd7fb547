//! Data model: placed boxes, snapshots, geometry, drag payloads.

mod geometry;
mod payload;
mod placed_box;
mod snapshot;

pub use geometry::{PixelRect, ShelfGeometry};
pub use payload::DragPayload;
pub use placed_box::PlacedBox;
pub use snapshot::{InventorySnapshot, SummaryRow};
