//! Error types for shelf packing and layout handling.

use thiserror::Error;

/// Error codes for packing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// IO failure while reading or writing a layout file (-1)
    Io = -1,
    /// Malformed layout JSON (-3)
    Json = -3,
    /// Shelf index out of range (E100)
    InvalidShelf = 100,
    /// Box index out of range on an existing shelf (E101)
    InvalidBoxIndex = 101,
    /// Candidate width/height outside (0, 1] (E200)
    MalformedDimension = 200,
    /// Unparsable drag payload text (E201)
    MalformedPayload = 201,
    /// Layout file violates the shelf invariants (E202)
    InvalidLayout = 202,
}

/// Main error type for the packing core.
///
/// A full shelf is not an error: `find_placement` reports "does not fit"
/// as `Ok(None)`. The variants here are caller mistakes or IO failures.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Shelf index {shelf} out of range (shelf count {count})")]
    InvalidShelf { shelf: usize, count: usize },

    #[error("Box index {index} out of range on shelf {shelf} ({len} boxes)")]
    InvalidBoxIndex {
        shelf: usize,
        index: usize,
        len: usize,
    },

    #[error("Invalid {field}: {value} is outside (0, 1]")]
    MalformedDimension { field: &'static str, value: f64 },

    #[error("Malformed drag payload: '{payload}'")]
    MalformedPayload { payload: String },

    #[error("Layout validation failed: {details}")]
    InvalidLayout { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PackError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackError::InvalidShelf { .. } => ErrorCode::InvalidShelf,
            PackError::InvalidBoxIndex { .. } => ErrorCode::InvalidBoxIndex,
            PackError::MalformedDimension { .. } => ErrorCode::MalformedDimension,
            PackError::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            PackError::InvalidLayout { .. } => ErrorCode::InvalidLayout,
            PackError::Io(_) => ErrorCode::Io,
            PackError::Json(_) => ErrorCode::Json,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PackError::InvalidShelf { shelf: 7, count: 5 };
        assert_eq!(err.code(), ErrorCode::InvalidShelf);
        assert_eq!(err.code_value(), 100);

        let err = PackError::MalformedDimension {
            field: "width",
            value: 1.5,
        };
        assert_eq!(err.code_value(), 200);
    }

    #[test]
    fn test_error_display() {
        let err = PackError::InvalidBoxIndex {
            shelf: 2,
            index: 9,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Box index 9 out of range on shelf 2 (3 boxes)"
        );
    }
}
