//! Shelf packer: leftmost-fit placement, commit/removal, hit testing.

use rand::Rng;

use crate::config::{PackConfig, EPS};
use crate::error::{PackError, Result};
use crate::model::{InventorySnapshot, PlacedBox, ShelfGeometry};

/// Observer callback invoked after each committed mutation.
pub type InventoryObserver = Box<dyn Fn(&InventorySnapshot)>;

/// Per-shelf packing state and the operations on it.
///
/// Shelves own insertion-ordered sequences of [`PlacedBox`]. The placement
/// invariant (no two boxes on a shelf overlap, with `padding` as the
/// minimum gap) is established by `find_placement` at query time; `place`
/// is the confirmed-commit step and does not re-validate.
///
/// All state is exclusively owned and every operation completes
/// synchronously. A drag gesture's `find_placement` followed by `place`
/// must not be interleaved with unrelated mutations on the same shelf;
/// that sequencing is the caller's responsibility.
pub struct ShelfPacker {
    shelves: Vec<Vec<PlacedBox>>,
    padding: f64,
    observers: Vec<InventoryObserver>,
}

impl ShelfPacker {
    /// Create a packer with empty shelves.
    pub fn new(shelf_count: usize, padding: f64) -> Self {
        Self {
            shelves: vec![Vec::new(); shelf_count],
            padding,
            observers: Vec::new(),
        }
    }

    /// Rebuild a packer from a previously captured snapshot.
    pub fn from_snapshot(snapshot: InventorySnapshot, padding: f64) -> Self {
        Self {
            shelves: snapshot.shelves,
            padding,
            observers: Vec::new(),
        }
    }

    /// Number of shelves.
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Minimum gap enforced between adjacent boxes.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Populate every shelf with a full left-to-right packing.
    ///
    /// Walks a cursor from 0.0, drawing widths and heights uniformly from
    /// the configured ranges; each width is clamped to the remaining space
    /// and the cursor advances by `width + padding`. A final sliver
    /// narrower than the float tolerance is dropped rather than placed.
    pub fn generate<R: Rng>(&mut self, config: &PackConfig, rng: &mut R) {
        for shelf in self.shelves.iter_mut() {
            shelf.clear();
            let mut cursor = 0.0;
            while cursor < 1.0 {
                let remaining = 1.0 - cursor;
                let width = config.draw_width(rng).min(remaining);
                if width < EPS {
                    break;
                }
                let height = config.draw_height(rng);
                shelf.push(PlacedBox::new(cursor, width, height));
                cursor += width + self.padding;
            }
        }
        tracing::debug!(
            shelves = self.shelves.len(),
            boxes = self.shelves.iter().map(Vec::len).sum::<usize>(),
            "generated packed shelves"
        );
    }

    /// Find the leftmost slot on a shelf that fits a candidate box.
    ///
    /// Returns `Ok(None)` when the candidate does not fit anywhere on the
    /// shelf; that is a normal outcome, not an error. Errors are reserved
    /// for an invalid shelf index or out-of-range dimensions.
    ///
    /// The returned placement never overlaps an existing box and keeps at
    /// least `padding` clear of the box to its left.
    pub fn find_placement(
        &self,
        shelf: usize,
        width: f64,
        height: f64,
    ) -> Result<Option<PlacedBox>> {
        self.check_shelf(shelf)?;
        PlacedBox::check_ratio("width", width)?;
        PlacedBox::check_ratio("height", height)?;

        let mut intervals: Vec<(f64, f64)> = self.shelves[shelf]
            .iter()
            .map(|b| (b.offset, b.end()))
            .collect();
        intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let mut cursor = 0.0;
        for (start, end) in intervals {
            if cursor + width <= start + EPS {
                return Ok(Some(PlacedBox::new(cursor, width, height)));
            }
            cursor = end + self.padding;
        }

        if cursor + width <= 1.0 + EPS {
            Ok(Some(PlacedBox::new(cursor, width, height)))
        } else {
            Ok(None)
        }
    }

    /// Commit a placement to a shelf.
    ///
    /// Appends unconditionally; the caller is expected to have validated
    /// the slot via [`find_placement`]. Observers are notified with the
    /// post-mutation snapshot.
    pub fn place(&mut self, shelf: usize, placed: PlacedBox) -> Result<()> {
        self.check_shelf(shelf)?;
        self.shelves[shelf].push(placed);
        tracing::info!(
            shelf,
            offset = placed.offset,
            width = placed.width,
            "placed box"
        );
        self.notify();
        Ok(())
    }

    /// Remove a box by its position in the shelf's insertion order.
    ///
    /// Offsets of the remaining boxes are absolute and stay untouched; no
    /// re-packing occurs. State is unchanged on error.
    pub fn remove(&mut self, shelf: usize, index: usize) -> Result<PlacedBox> {
        self.check_shelf(shelf)?;
        let len = self.shelves[shelf].len();
        if index >= len {
            return Err(PackError::InvalidBoxIndex { shelf, index, len });
        }
        let removed = self.shelves[shelf].remove(index);
        tracing::info!(shelf, index, "removed box");
        self.notify();
        Ok(removed)
    }

    /// Hit-test a point within one shelf's band.
    ///
    /// `x` is a fraction of the usable shelf width; `y` is the vertical
    /// position within the shelf band (0.0 at the band top, 1.0 on the
    /// shelf line). The geometry supplies the height-to-pixel mapping so
    /// the test matches the rendered rectangles exactly. First match in
    /// insertion order wins.
    pub fn box_at(
        &self,
        shelf: usize,
        x: f64,
        y: f64,
        geometry: &ShelfGeometry,
    ) -> Result<Option<usize>> {
        self.check_shelf(shelf)?;
        if !(0.0..=1.0).contains(&y) {
            return Ok(None);
        }
        for (i, placed) in self.shelves[shelf].iter().enumerate() {
            if !placed.contains_x(x) {
                continue;
            }
            let box_top = 1.0 - geometry.box_band_fraction(placed.height);
            if y >= box_top {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Hit-test a pixel position against every shelf.
    ///
    /// Convenience for pointer handling: maps the position into a shelf
    /// band and defers to [`box_at`](Self::box_at). Returns
    /// `(shelf, box index)` or `None`.
    pub fn hit_test(&self, px: f32, py: f32, geometry: &ShelfGeometry) -> Option<(usize, usize)> {
        let shelf = geometry.shelf_at_y(py)?;
        let x = geometry.x_to_norm(px);
        let y = geometry.band_fraction(shelf, py);
        match self.box_at(shelf, x, y, geometry) {
            Ok(Some(index)) => Some((shelf, index)),
            _ => None,
        }
    }

    /// Read-only snapshot of every shelf's boxes.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            shelves: self.shelves.clone(),
        }
    }

    /// Register an observer invoked synchronously after each committed
    /// `place` or `remove`.
    pub fn subscribe(&mut self, observer: impl Fn(&InventorySnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }

    fn check_shelf(&self, shelf: usize) -> Result<()> {
        if shelf >= self.shelves.len() {
            return Err(PackError::InvalidShelf {
                shelf,
                count: self.shelves.len(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for ShelfPacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShelfPacker")
            .field("shelves", &self.shelves)
            .field("padding", &self.padding)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PADDING;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn packer_with(shelf: Vec<PlacedBox>) -> ShelfPacker {
        let mut p = ShelfPacker::new(1, DEFAULT_PADDING);
        p.shelves[0] = shelf;
        p
    }

    // ==================== find_placement tests ====================

    #[test]
    fn test_find_placement_empty_shelf() {
        let p = ShelfPacker::new(1, DEFAULT_PADDING);
        let placed = p
            .find_placement(0, 0.3, 0.6)
            .expect("valid query")
            .expect("fits");
        assert!((placed.offset - 0.0).abs() < EPS);
    }

    #[test]
    fn test_find_placement_leftmost_not_best_fit() {
        // Gap [0.22, 0.3) is 0.08 wide; gap after 0.5 is 0.48 wide.
        let p = packer_with(vec![
            PlacedBox::new(0.0, 0.2, 0.5),
            PlacedBox::new(0.3, 0.2, 0.5),
        ]);

        // 0.25 fits only after the last box, never in the first gap
        let placed = p.find_placement(0, 0.25, 0.5).unwrap().expect("fits");
        assert!((placed.offset - 0.52).abs() < 1e-9);

        // 0.08 takes the first gap even though the trailing gap is larger
        let placed = p.find_placement(0, 0.08, 0.5).unwrap().expect("fits");
        assert!((placed.offset - 0.22).abs() < 1e-9);
    }

    #[test]
    fn test_find_placement_no_fit() {
        let p = packer_with(vec![
            PlacedBox::new(0.0, 0.45, 0.5),
            PlacedBox::new(0.5, 0.45, 0.5),
        ]);
        assert!(p.find_placement(0, 0.2, 0.5).unwrap().is_none());
    }

    #[test]
    fn test_find_placement_unsorted_input() {
        // Insertion order differs from spatial order
        let p = packer_with(vec![
            PlacedBox::new(0.5, 0.2, 0.5),
            PlacedBox::new(0.0, 0.2, 0.5),
        ]);
        let placed = p.find_placement(0, 0.2, 0.5).unwrap().expect("fits");
        assert!((placed.offset - 0.22).abs() < 1e-9);
    }

    #[test]
    fn test_find_placement_never_overlaps() {
        let existing = vec![
            PlacedBox::new(0.1, 0.15, 0.5),
            PlacedBox::new(0.4, 0.2, 0.5),
            PlacedBox::new(0.75, 0.1, 0.5),
        ];
        let p = packer_with(existing.clone());

        for width in [0.05, 0.08, 0.1, 0.12, 0.2] {
            if let Some(found) = p.find_placement(0, width, 0.5).unwrap() {
                for b in &existing {
                    let clear_left = found.end() <= b.offset + EPS;
                    let clear_right = b.end() + p.padding() <= found.offset + EPS;
                    assert!(
                        clear_left || clear_right,
                        "width {} at {} overlaps box at {}",
                        width,
                        found.offset,
                        b.offset
                    );
                }
            }
        }
    }

    #[test]
    fn test_find_placement_invalid_inputs() {
        let p = ShelfPacker::new(2, DEFAULT_PADDING);
        assert!(matches!(
            p.find_placement(5, 0.2, 0.5),
            Err(PackError::InvalidShelf { shelf: 5, count: 2 })
        ));
        assert!(matches!(
            p.find_placement(0, 0.0, 0.5),
            Err(PackError::MalformedDimension { field: "width", .. })
        ));
        assert!(matches!(
            p.find_placement(0, 0.2, 1.5),
            Err(PackError::MalformedDimension {
                field: "height",
                ..
            })
        ));
    }

    // ==================== place / remove tests ====================

    #[test]
    fn test_place_then_remove_roundtrip() {
        let mut p = packer_with(vec![PlacedBox::new(0.0, 0.2, 0.5)]);
        let before = p.snapshot();

        let placed = p.find_placement(0, 0.1, 0.6).unwrap().expect("fits");
        p.place(0, placed).expect("valid shelf");
        assert_eq!(p.snapshot().total_boxes(), 2);

        p.remove(0, 1).expect("valid index");
        assert_eq!(p.snapshot(), before);
    }

    #[test]
    fn test_remove_invalid_leaves_state() {
        let mut p = packer_with(vec![PlacedBox::new(0.0, 0.2, 0.5)]);
        let before = p.snapshot();

        assert!(matches!(
            p.remove(0, 1),
            Err(PackError::InvalidBoxIndex {
                shelf: 0,
                index: 1,
                len: 1
            })
        ));
        assert!(matches!(p.remove(3, 0), Err(PackError::InvalidShelf { .. })));
        assert_eq!(p.snapshot(), before);
    }

    #[test]
    fn test_remove_keeps_offsets_absolute() {
        let mut p = packer_with(vec![
            PlacedBox::new(0.0, 0.2, 0.5),
            PlacedBox::new(0.3, 0.2, 0.5),
            PlacedBox::new(0.6, 0.2, 0.5),
        ]);
        p.remove(0, 1).unwrap();
        let snapshot = p.snapshot();
        let boxes = snapshot.boxes(0).unwrap();
        assert_eq!(boxes.len(), 2);
        assert!((boxes[0].offset - 0.0).abs() < EPS);
        // The third box keeps its absolute offset; nothing shifts left
        assert!((boxes[1].offset - 0.6).abs() < EPS);
    }

    // ==================== observer tests ====================

    #[test]
    fn test_observer_fires_on_mutation() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut p = ShelfPacker::new(1, DEFAULT_PADDING);
        p.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.total_boxes()));

        p.place(0, PlacedBox::new(0.0, 0.2, 0.5)).unwrap();
        p.place(0, PlacedBox::new(0.3, 0.2, 0.5)).unwrap();
        p.remove(0, 0).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_observer_not_fired_on_failure_or_query() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut p = ShelfPacker::new(1, DEFAULT_PADDING);
        p.subscribe(move |_| *sink.borrow_mut() += 1);

        let _ = p.find_placement(0, 0.2, 0.5);
        assert!(p.remove(0, 0).is_err());
        assert!(p.place(9, PlacedBox::new(0.0, 0.2, 0.5)).is_err());

        assert_eq!(*count.borrow(), 0);
    }

    // ==================== box_at tests ====================

    fn geometry() -> ShelfGeometry {
        ShelfGeometry::new(500.0, 560.0, 5)
    }

    #[test]
    fn test_box_at_inside_box() {
        let p = packer_with(vec![
            PlacedBox::new(0.0, 0.2, 0.5),
            PlacedBox::new(0.3, 0.2, 0.8),
        ]);
        let g = geometry();

        // Point near the shelf line, inside the first box horizontally
        let hit = p.box_at(0, 0.1, 0.95, &g).unwrap();
        assert_eq!(hit, Some(0));

        let hit = p.box_at(0, 0.35, 0.5, &g).unwrap();
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_box_at_padding_gap() {
        let p = packer_with(vec![
            PlacedBox::new(0.0, 0.2, 0.5),
            PlacedBox::new(0.3, 0.2, 0.5),
        ]);
        let g = geometry();

        // x in the gap between the boxes
        assert_eq!(p.box_at(0, 0.25, 0.95, &g).unwrap(), None);
    }

    #[test]
    fn test_box_at_above_short_box() {
        let p = packer_with(vec![PlacedBox::new(0.0, 0.2, 0.4)]);
        let g = geometry();

        // Horizontally inside, but above the box top
        assert_eq!(p.box_at(0, 0.1, 0.1, &g).unwrap(), None);
        // Outside the band entirely
        assert_eq!(p.box_at(0, 0.1, 1.5, &g).unwrap(), None);
    }

    #[test]
    fn test_box_at_invalid_shelf() {
        let p = ShelfPacker::new(1, DEFAULT_PADDING);
        assert!(p.box_at(4, 0.5, 0.5, &geometry()).is_err());
    }

    #[test]
    fn test_hit_test_pixels() {
        let p = packer_with(vec![PlacedBox::new(0.0, 0.5, 0.9)]);
        let g = geometry();

        let rect = g.box_rect(0, &PlacedBox::new(0.0, 0.5, 0.9));
        let cx = rect.x + rect.width / 2.0;
        let cy = rect.y + rect.height / 2.0;
        assert_eq!(p.hit_test(cx, cy, &g), Some((0, 0)));

        // Above the case entirely
        assert_eq!(p.hit_test(cx, 5.0, &g), None);
    }
}
