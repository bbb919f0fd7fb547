//! Color palette and styling constants for the viewer.
//!
//! Design philosophy:
//! - Warm wood tones for the case itself, like a real bookshelf
//! - Boxes are the focus and get saturated, distinguishable fills
//! - The drop preview is clearly provisional (translucent, dashed)
//! - Calibration colors follow the usual traffic-light reading

#![allow(dead_code)] // Many constants reserved for future features

use egui::Color32;
use shelfpack_core::CalibrationStatus;

// =============================================================================
// BACKGROUND
// =============================================================================
pub const BACKGROUND: Color32 = Color32::from_rgb(25, 25, 28);
pub const CANVAS_BG: Color32 = Color32::from_rgb(32, 34, 37);

// =============================================================================
// CASE - Wood tones for the frame and shelf lines
// =============================================================================
pub const CASE_FILL: Color32 = Color32::from_rgb(62, 48, 36);
pub const CASE_BORDER: Color32 = Color32::from_rgb(140, 105, 70);
pub const SHELF_LINE: Color32 = Color32::from_rgb(120, 90, 60);
pub const SHELF_INTERIOR: Color32 = Color32::from_rgb(45, 38, 32);

// =============================================================================
// BOXES - Warm amber tones that pop against the dark interior
// =============================================================================
pub const BOX_FILL: Color32 = Color32::from_rgba_premultiplied(255, 180, 80, 60);
pub const BOX_BORDER: Color32 = Color32::from_rgb(255, 200, 100);
pub const BOX_HOVER_FILL: Color32 = Color32::from_rgba_premultiplied(255, 200, 100, 110);
pub const BOX_HOVER_BORDER: Color32 = Color32::from_rgb(255, 230, 150);

// =============================================================================
// PREVIEW - Provisional placement while dragging
// =============================================================================
pub const PREVIEW_FILL: Color32 = Color32::from_rgba_premultiplied(100, 200, 255, 50);
pub const PREVIEW_STROKE: Color32 = Color32::from_rgb(120, 210, 255);
pub const PREVIEW_BLOCKED: Color32 = Color32::from_rgba_premultiplied(200, 80, 80, 60);

// =============================================================================
// INTERACTION - Selection and hover
// =============================================================================
pub const SELECTION: Color32 = Color32::from_rgb(255, 220, 50);
pub const SELECTION_GLOW: Color32 = Color32::from_rgba_premultiplied(255, 220, 50, 80);

// =============================================================================
// CALIBRATION STATUS - Traffic-light table row tints
// =============================================================================
pub const CAL_OVERDUE: Color32 = Color32::from_rgb(255, 100, 100);
pub const CAL_DUE_SOON: Color32 = Color32::from_rgb(255, 165, 0);
pub const CAL_CURRENT: Color32 = Color32::from_rgb(144, 238, 144);

/// Row tint for a calibration status.
pub fn calibration_color(status: CalibrationStatus) -> Color32 {
    match status {
        CalibrationStatus::Overdue => CAL_OVERDUE,
        CalibrationStatus::DueSoon => CAL_DUE_SOON,
        CalibrationStatus::Current => CAL_CURRENT,
    }
}

// =============================================================================
// TEXT
// =============================================================================
pub const LABEL_TEXT: Color32 = Color32::from_rgb(240, 240, 240);
pub const DIM_TEXT: Color32 = Color32::from_rgb(140, 145, 150);
pub const STATUS_TEXT_DARK: Color32 = Color32::from_rgb(25, 25, 28);

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const CASE_STROKE_WIDTH: f32 = 2.0;
pub const SHELF_STROKE_WIDTH: f32 = 2.0;
pub const BOX_STROKE_WIDTH: f32 = 1.5;
pub const BOX_HOVER_STROKE_WIDTH: f32 = 2.5;
pub const PREVIEW_STROKE_WIDTH: f32 = 2.0;
pub const SELECTION_STROKE_WIDTH: f32 = 3.0;
