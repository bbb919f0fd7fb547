//! Canvas rendering for the bookshelf view.
//!
//! Pure painting over a snapshot and geometry. No model mutation happens
//! here; the app decides what is hovered, selected, or previewed and this
//! module only draws it.

use egui::{Painter, Pos2, Rect, Stroke};
use shelfpack_core::{InventorySnapshot, PlacedBox, ShelfGeometry};

use crate::theme;
use crate::transform;

/// Render the complete bookshelf on the canvas.
#[allow(clippy::too_many_arguments)]
pub fn render_bookshelf(
    painter: &Painter,
    snapshot: &InventorySnapshot,
    geometry: &ShelfGeometry,
    canvas_rect: Rect,
    hovered: Option<(usize, usize)>,
    selected: Option<(usize, usize)>,
    preview: Option<(usize, PlacedBox)>,
    preview_blocked: Option<usize>,
) {
    render_case(painter, geometry, canvas_rect);
    render_shelf_lines(painter, geometry, canvas_rect);
    render_boxes(painter, snapshot, geometry, canvas_rect, hovered, selected);

    if let Some((shelf, placed)) = preview {
        render_preview(painter, geometry, canvas_rect, shelf, &placed);
    }
    if let Some(shelf) = preview_blocked {
        render_blocked_band(painter, geometry, canvas_rect, shelf);
    }
}

/// Render the case frame and interior.
fn render_case(painter: &Painter, geometry: &ShelfGeometry, canvas_rect: Rect) {
    let outer = Rect::from_min_size(canvas_rect.min, canvas_rect.size());
    painter.rect_filled(outer, 0.0, theme::CANVAS_BG);

    let interior = Rect::from_min_max(
        Pos2::new(
            canvas_rect.min.x + geometry.margin,
            canvas_rect.min.y + geometry.margin,
        ),
        Pos2::new(
            canvas_rect.max.x - geometry.margin,
            canvas_rect.max.y - geometry.margin,
        ),
    );
    painter.rect_filled(interior, 2.0, theme::SHELF_INTERIOR);
    painter.rect_stroke(
        interior,
        2.0,
        Stroke::new(theme::CASE_STROKE_WIDTH, theme::CASE_BORDER),
    );
}

/// Render the horizontal shelf lines.
fn render_shelf_lines(painter: &Painter, geometry: &ShelfGeometry, canvas_rect: Rect) {
    let stroke = Stroke::new(theme::SHELF_STROKE_WIDTH, theme::SHELF_LINE);
    for shelf in 0..geometry.shelf_count {
        let y = canvas_rect.min.y + geometry.shelf_line_y(shelf);
        let left = canvas_rect.min.x + geometry.margin;
        let right = canvas_rect.max.x - geometry.margin;
        painter.line_segment([Pos2::new(left, y), Pos2::new(right, y)], stroke);
    }
}

/// Render every placed box, with hover and selection emphasis.
fn render_boxes(
    painter: &Painter,
    snapshot: &InventorySnapshot,
    geometry: &ShelfGeometry,
    canvas_rect: Rect,
    hovered: Option<(usize, usize)>,
    selected: Option<(usize, usize)>,
) {
    for (shelf, boxes) in snapshot.iter() {
        for (index, placed) in boxes.iter().enumerate() {
            let rect = transform::to_screen(geometry.box_rect(shelf, placed), canvas_rect);
            let is_hovered = hovered == Some((shelf, index));
            let is_selected = selected == Some((shelf, index));

            let (fill, border, stroke_width) = if is_hovered {
                (
                    theme::BOX_HOVER_FILL,
                    theme::BOX_HOVER_BORDER,
                    theme::BOX_HOVER_STROKE_WIDTH,
                )
            } else {
                (theme::BOX_FILL, theme::BOX_BORDER, theme::BOX_STROKE_WIDTH)
            };

            painter.rect_filled(rect, 1.0, fill);
            painter.rect_stroke(rect, 1.0, Stroke::new(stroke_width, border));

            if is_selected {
                let glow = rect.expand(3.0);
                painter.rect_stroke(
                    glow,
                    2.0,
                    Stroke::new(theme::SELECTION_STROKE_WIDTH, theme::SELECTION),
                );
            }
        }
    }
}

/// Render the translucent dashed preview of a pending placement.
fn render_preview(
    painter: &Painter,
    geometry: &ShelfGeometry,
    canvas_rect: Rect,
    shelf: usize,
    placed: &PlacedBox,
) {
    let rect = transform::to_screen(geometry.box_rect(shelf, placed), canvas_rect);
    painter.rect_filled(rect, 1.0, theme::PREVIEW_FILL);
    dashed_rect(
        painter,
        rect,
        Stroke::new(theme::PREVIEW_STROKE_WIDTH, theme::PREVIEW_STROKE),
    );
}

/// Tint a shelf band where the dragged box cannot fit.
fn render_blocked_band(
    painter: &Painter,
    geometry: &ShelfGeometry,
    canvas_rect: Rect,
    shelf: usize,
) {
    let (top, bottom) = geometry.shelf_band(shelf);
    let rect = Rect::from_min_max(
        Pos2::new(
            canvas_rect.min.x + geometry.margin,
            canvas_rect.min.y + top,
        ),
        Pos2::new(canvas_rect.max.x - geometry.margin, canvas_rect.min.y + bottom),
    );
    painter.rect_filled(rect, 0.0, theme::PREVIEW_BLOCKED);
}

/// Stroke a rectangle with a dashed outline.
fn dashed_rect(painter: &Painter, rect: Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..4 {
        painter.extend(egui::Shape::dashed_line(
            &[corners[i], corners[(i + 1) % 4]],
            stroke,
            6.0,
            4.0,
        ));
    }
}
