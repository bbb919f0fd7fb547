//! Validation of inventory layouts against the shelf invariants.

use crate::config::EPS;
use crate::error::{PackError, Result};
use crate::model::{InventorySnapshot, PlacedBox};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a full inventory snapshot.
///
/// Errors: out-of-range box ratios, boxes extending past the shelf end,
/// overlapping boxes on a shelf. Warnings: adjacent gaps smaller than the
/// configured padding (a generated layout always honors it; a hand-edited
/// layout file may not), and an entirely empty layout.
pub fn validate_snapshot(snapshot: &InventorySnapshot, padding: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if snapshot.total_boxes() == 0 {
        result.add_warning("Layout contains no boxes");
    }

    for (shelf, boxes) in snapshot.iter() {
        let shelf_result = validate_shelf(shelf, boxes, padding);
        result.merge(shelf_result);
    }

    result
}

/// Validate a single shelf's box list.
pub fn validate_shelf(shelf: usize, boxes: &[PlacedBox], padding: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (index, b) in boxes.iter().enumerate() {
        if b.width <= EPS || b.width > 1.0 + EPS {
            result.add_error(format!(
                "Shelf {}, box {}: width {} outside (0, 1]",
                shelf + 1,
                index,
                b.width
            ));
        }
        if b.height <= EPS || b.height > 1.0 + EPS {
            result.add_error(format!(
                "Shelf {}, box {}: height {} outside (0, 1]",
                shelf + 1,
                index,
                b.height
            ));
        }
        if b.offset < -EPS {
            result.add_error(format!(
                "Shelf {}, box {}: negative offset {}",
                shelf + 1,
                index,
                b.offset
            ));
        }
        if b.end() > 1.0 + EPS {
            result.add_error(format!(
                "Shelf {}, box {}: extends past shelf end ({:.4} > 1.0)",
                shelf + 1,
                index,
                b.end()
            ));
        }
    }

    // Overlap and gap checks on the spatially sorted intervals
    let mut sorted: Vec<&PlacedBox> = boxes.iter().collect();
    sorted.sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap());

    for pair in sorted.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.end() > right.offset + EPS {
            result.add_error(format!(
                "Shelf {}: boxes at {:.4} and {:.4} overlap",
                shelf + 1,
                left.offset,
                right.offset
            ));
        } else if left.end() + padding > right.offset + EPS {
            result.add_warning(format!(
                "Shelf {}: gap between {:.4} and {:.4} is below padding {:.2}",
                shelf + 1,
                left.offset,
                right.offset,
                padding
            ));
        }
    }

    result
}

/// Quick validation check for the command-line `validate` subcommand.
pub fn quick_validate(snapshot: &InventorySnapshot, padding: f64) -> Result<()> {
    let result = validate_snapshot(snapshot, padding);

    if !result.passed {
        return Err(PackError::InvalidLayout {
            details: result.errors.join("; "),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(boxes: Vec<PlacedBox>) -> InventorySnapshot {
        InventorySnapshot {
            shelves: vec![boxes],
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_error() {
        let result = ValidationResult::error("bad layout");
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["bad layout"]);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 1);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_snapshot tests ====================

    #[test]
    fn test_validate_well_formed_shelf() {
        let snapshot = snapshot_of(vec![
            PlacedBox::new(0.0, 0.2, 0.5),
            PlacedBox::new(0.3, 0.2, 0.6),
        ]);
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(result.passed);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_empty_layout_warns() {
        let snapshot = InventorySnapshot {
            shelves: vec![vec![], vec![]],
        };
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no boxes")));
    }

    #[test]
    fn test_validate_overlap() {
        let snapshot = snapshot_of(vec![
            PlacedBox::new(0.0, 0.3, 0.5),
            PlacedBox::new(0.2, 0.2, 0.5),
        ]);
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("overlap")));
    }

    #[test]
    fn test_validate_narrow_gap_warns() {
        let snapshot = snapshot_of(vec![
            PlacedBox::new(0.0, 0.3, 0.5),
            PlacedBox::new(0.31, 0.2, 0.5),
        ]);
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(result.passed); // A tight gap is only a warning
        assert!(result.warnings.iter().any(|w| w.contains("below padding")));
    }

    #[test]
    fn test_validate_past_shelf_end() {
        let snapshot = snapshot_of(vec![PlacedBox::new(0.9, 0.2, 0.5)]);
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("past shelf end")));
    }

    #[test]
    fn test_validate_bad_ratios() {
        let snapshot = snapshot_of(vec![PlacedBox::new(0.0, 0.0, 1.4)]);
        let result = validate_snapshot(&snapshot, 0.02);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        let snapshot = snapshot_of(vec![PlacedBox::new(0.0, 0.2, 0.5)]);
        assert!(quick_validate(&snapshot, 0.02).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let snapshot = snapshot_of(vec![
            PlacedBox::new(0.0, 0.3, 0.5),
            PlacedBox::new(0.1, 0.3, 0.5),
        ]);
        assert!(quick_validate(&snapshot, 0.02).is_err());
    }
}
