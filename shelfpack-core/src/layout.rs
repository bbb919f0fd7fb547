//! Layout file IO and the textual inventory summary.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::model::InventorySnapshot;

/// Load a layout snapshot from a JSON file.
pub fn load_layout(path: &Path) -> Result<InventorySnapshot> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&contents)?;
    Ok(snapshot)
}

/// Save a layout snapshot to a JSON file.
pub fn save_layout(path: &Path, snapshot: &InventorySnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Render the inventory as a fixed-width text table.
///
/// Columns match the viewer's inventory table: shelf number (1-based),
/// formatted size, insertion index.
pub fn summary_table(snapshot: &InventorySnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<7}{:<12}{}", "Shelf", "Size", "Index");

    for row in snapshot.rows() {
        let _ = writeln!(out, "{:<7}{:<12}{}", row.shelf, row.size, row.index);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} box(es) on {} shelf(ves)",
        snapshot.total_boxes(),
        snapshot.shelf_count()
    );
    out
}
