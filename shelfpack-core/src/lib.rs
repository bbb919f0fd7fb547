//! shelfpack-core - Core library for shelf-packing inventory layouts.
//!
//! This library provides the packing model behind the bookshelf inventory
//! tools: fractional box placement on horizontal shelves, leftmost-fit
//! placement search, point hit testing against the rendered geometry, layout
//! file (de)serialization, and the asset catalog with calibration tracking.
//!
//! # Example
//!
//! ```
//! use shelfpack_core::{PackConfig, ShelfPacker};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = PackConfig::default();
//! let mut packer = ShelfPacker::new(config.shelf_count, config.padding);
//! packer.generate(&config, &mut StdRng::seed_from_u64(7));
//!
//! if let Some(candidate) = packer.find_placement(0, 0.15, 0.6).unwrap() {
//!     packer.place(0, candidate).unwrap();
//! }
//! println!("{} boxes placed", packer.snapshot().total_boxes());
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod packer;
pub mod validation;

// Re-exports for convenience
pub use assets::{Asset, AssetCatalog, CalibrationStatus};
pub use config::{PackConfig, DEFAULT_PADDING, DEFAULT_SHELF_COUNT, EPS};
pub use error::{ErrorCode, PackError, Result};
pub use layout::{load_layout, save_layout, summary_table};
pub use model::{DragPayload, InventorySnapshot, PixelRect, PlacedBox, ShelfGeometry, SummaryRow};
pub use packer::ShelfPacker;
pub use validation::{validate_snapshot, ValidationResult};

/// Generate a packed layout from scratch.
///
/// This is the high-level entry point for the CLI's `generate` command:
/// 1. Build an empty packer from the config
/// 2. Fill every shelf left to right with randomly sized boxes
/// 3. Return the resulting snapshot
///
/// The RNG is passed in so callers can seed deterministically.
pub fn generate_layout(config: &PackConfig, rng: &mut impl rand::Rng) -> InventorySnapshot {
    let mut packer = ShelfPacker::new(config.shelf_count, config.padding);
    packer.generate(config, rng);
    packer.snapshot()
}
