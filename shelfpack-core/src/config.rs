//! Configuration constants and settings for the packing core.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon for normalized [0, 1] coordinates.
pub const EPS: f64 = 1e-9;

/// Minimum horizontal gap between adjacent boxes, as a fraction of shelf width.
pub const DEFAULT_PADDING: f64 = 0.02;

/// Number of shelves created at startup.
pub const DEFAULT_SHELF_COUNT: usize = 5;

/// Width range for generated shelf boxes (fraction of shelf width).
pub const DEFAULT_WIDTH_RANGE: (f64, f64) = (0.1, 0.2);

/// Height range for generated shelf boxes (fraction of shelf height).
pub const DEFAULT_HEIGHT_RANGE: (f64, f64) = (0.4, 0.8);

/// Width range for palette (draggable) boxes.
pub const PALETTE_WIDTH_RANGE: (f64, f64) = (0.2, 0.3);

/// Height range for palette (draggable) boxes.
pub const PALETTE_HEIGHT_RANGE: (f64, f64) = (0.5, 0.9);

/// Outer margin of the rendered bookshelf, in pixels.
pub const MARGIN_PX: f32 = 30.0;

/// Horizontal cushion inside each shelf, as a fraction of content width.
pub const SIDE_CUSHION_RATIO: f32 = 0.05;

/// Vertical clearance between a box top and the shelf above, in pixels.
pub const BOX_TOP_CLEARANCE: f32 = 8.0;

/// Maximum number of entries kept in the recently-viewed asset list.
pub const RECENT_LIMIT: usize = 20;

/// Days before the due date at which calibration counts as due soon.
pub const DUE_SOON_DAYS: i64 = 7;

/// Parameters for building the initial packed layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Number of shelves.
    pub shelf_count: usize,
    /// Minimum horizontal gap between boxes (fraction of shelf width).
    pub padding: f64,
    /// Uniform draw range for box widths.
    pub width_range: (f64, f64),
    /// Uniform draw range for box heights.
    pub height_range: (f64, f64),
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            shelf_count: DEFAULT_SHELF_COUNT,
            padding: DEFAULT_PADDING,
            width_range: DEFAULT_WIDTH_RANGE,
            height_range: DEFAULT_HEIGHT_RANGE,
        }
    }
}

impl PackConfig {
    /// Create a configuration with a custom shelf count.
    pub fn new(shelf_count: usize) -> Self {
        Self {
            shelf_count,
            ..Default::default()
        }
    }

    /// Draw a width uniformly from the configured range.
    pub fn draw_width<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.width_range.0..=self.width_range.1)
    }

    /// Draw a height uniformly from the configured range.
    pub fn draw_height<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.height_range.0..=self.height_range.1)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();
        assert_eq!(config.shelf_count, 5);
        assert!(float_cmp::approx_eq(config.padding, 0.02));
    }

    #[test]
    fn test_draws_stay_in_range() {
        let config = PackConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let w = config.draw_width(&mut rng);
            let h = config.draw_height(&mut rng);
            assert!(float_cmp::in_range(w, 0.1, 0.2));
            assert!(float_cmp::in_range(h, 0.4, 0.8));
        }
    }

    #[test]
    fn test_float_cmp() {
        assert!(float_cmp::approx_eq(0.3, 0.1 + 0.2));
        assert!(float_cmp::approx_zero(1e-12));
        assert!(float_cmp::in_range(1.0 + 1e-12, 0.0, 1.0));
        assert!(!float_cmp::in_range(1.1, 0.0, 1.0));
    }
}
