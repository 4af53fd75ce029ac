//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and export operations
#[derive(Debug)]
pub enum GenerationError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Region connection exhausted its candidates with regions left over
    ///
    /// Indicates a sealed-off room or corridor with no adjacent open
    /// boundary; accepting this silently would produce a disconnected
    /// dungeon.
    UnreachableRegions {
        /// Number of populated regions remaining
        remaining: usize,
    },

    /// Dead-end resolution cascaded longer than the grid has tiles
    ///
    /// Each cascade step deletes a tile, so this can only fire on a
    /// corrupted grid.
    ResolutionOverflow {
        /// Coordinates being resolved when the bound was hit
        position: (i32, i32),
        /// Iteration bound that was exceeded
        limit: usize,
    },

    /// Failed to save a rendered layout to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnreachableRegions { remaining } => {
                write!(
                    f,
                    "Region connection finished with {remaining} disconnected regions"
                )
            }
            Self::ResolutionOverflow { position, limit } => {
                write!(
                    f,
                    "Dead-end resolution at ({}, {}) exceeded {limit} iterations",
                    position.0, position.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
