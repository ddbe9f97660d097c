//! Error types for dimension operations

use thiserror::Error;

/// Main error type for dimension construction, editing and transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    /// A required input was not supplied
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The reference geometry cannot define the dimension
    /// (parallel lines, coincident points)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A numeric value is outside its allowed range
    #[error("Value out of range: {name} = {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Result type alias for dimension operations
pub type Result<T> = std::result::Result<T, DimensionError>;

impl DimensionError {
    /// Error raised whenever the two reference lines of an angular
    /// dimension end up parallel
    pub(crate) fn parallel_lines() -> Self {
        DimensionError::InvalidGeometry(
            "the two lines that define the dimension are parallel".to_string(),
        )
    }

    /// Check if this error reports degenerate geometry
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, DimensionError::InvalidGeometry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DimensionError::InvalidArgument("first line".to_string());
        assert_eq!(err.to_string(), "Invalid argument: first line");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = DimensionError::OutOfRange {
            name: "offset",
            value: -1.5,
        };
        assert!(err.to_string().contains("offset"));
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_parallel_lines_is_geometry_error() {
        let err = DimensionError::parallel_lines();
        assert!(err.is_invalid_geometry());
        assert!(err.to_string().contains("parallel"));
    }
}
