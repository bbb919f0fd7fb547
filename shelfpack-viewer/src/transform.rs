//! Mapping between the egui canvas rect and the bookshelf pixel geometry.

use egui::{Pos2, Rect};
use shelfpack_core::{PixelRect, ShelfGeometry};

/// Build the shelf geometry for the canvas allocated this frame.
///
/// The geometry works in canvas-local pixels with origin at the canvas
/// top-left; egui hands us absolute screen rects, so pointer positions must
/// go through [`to_local`] before hit testing.
pub fn geometry_for_rect(rect: Rect, shelf_count: usize) -> ShelfGeometry {
    ShelfGeometry::new(rect.width(), rect.height(), shelf_count)
}

/// Convert an absolute screen position to canvas-local pixels.
pub fn to_local(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y)
}

/// Convert a canvas-local pixel rectangle to an absolute egui rect.
pub fn to_screen(rect: PixelRect, canvas_rect: Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(canvas_rect.min.x + rect.x, canvas_rect.min.y + rect.y),
        egui::Vec2::new(rect.width, rect.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;
    use shelfpack_core::PlacedBox;

    #[test]
    fn test_local_screen_roundtrip() {
        let canvas = Rect::from_min_size(Pos2::new(200.0, 100.0), Vec2::new(500.0, 560.0));
        let geometry = geometry_for_rect(canvas, 5);

        let placed = PlacedBox::new(0.25, 0.2, 0.5);
        let local = geometry.box_rect(2, &placed);
        let screen = to_screen(local, canvas);

        // The screen rect's corner maps back to the local rect's corner.
        let back = to_local(screen.min, canvas);
        assert!((back.x - local.x).abs() < 0.001);
        assert!((back.y - local.y).abs() < 0.001);
    }

    #[test]
    fn test_pointer_maps_into_shelf_band() {
        let canvas = Rect::from_min_size(Pos2::new(200.0, 100.0), Vec2::new(500.0, 560.0));
        let geometry = geometry_for_rect(canvas, 5);

        // A pointer in the middle of the canvas lands in a valid band.
        let local = to_local(Pos2::new(450.0, 380.0), canvas);
        assert_eq!(geometry.shelf_at_y(local.y), Some(2));
    }
}
