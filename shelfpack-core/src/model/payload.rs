//! Drag payload: the "width,height" text carried by a box drag.

use std::fmt;
use std::str::FromStr;

use crate::error::{PackError, Result};
use crate::model::PlacedBox;

/// Candidate box dimensions carried by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPayload {
    /// Candidate width (fraction of usable shelf width).
    pub width: f64,
    /// Candidate height (fraction of shelf height).
    pub height: f64,
}

impl DragPayload {
    /// Create a payload, validating both ratios.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        PlacedBox::check_ratio("width", width)?;
        PlacedBox::check_ratio("height", height)?;
        Ok(Self { width, height })
    }
}

impl FromStr for DragPayload {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || PackError::MalformedPayload {
            payload: s.to_string(),
        };

        let (w, h) = s.split_once(',').ok_or_else(malformed)?;
        let width: f64 = w.trim().parse().map_err(|_| malformed())?;
        let height: f64 = h.trim().parse().map_err(|_| malformed())?;

        DragPayload::new(width, height)
    }
}

impl fmt::Display for DragPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let p: DragPayload = "0.25,0.75".parse().expect("Should parse");
        assert!((p.width - 0.25).abs() < 1e-12);
        assert!((p.height - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_parse_with_spaces() {
        let p: DragPayload = " 0.3 , 0.6 ".parse().expect("Should parse");
        assert!((p.width - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_parse_malformed() {
        assert!("0.25".parse::<DragPayload>().is_err());
        assert!("a,b".parse::<DragPayload>().is_err());
        assert!("".parse::<DragPayload>().is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        // Parses as numbers but fails ratio validation
        let err = "1.5,0.5".parse::<DragPayload>().unwrap_err();
        assert!(matches!(err, PackError::MalformedDimension { .. }));
    }

    #[test]
    fn test_display_roundtrip() {
        let p = DragPayload::new(0.25, 0.75).expect("valid");
        let back: DragPayload = p.to_string().parse().expect("Should parse");
        assert_eq!(p, back);
    }
}
