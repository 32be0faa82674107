//! Error types for map construction, loading and export
//!
//! The connectivity engine itself is total and never produces these; they
//! surface only where grids are built or files are touched.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map operations
#[derive(Debug)]
pub enum MapError {
    /// Grid rows do not all share the same length
    NonRectangular {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Flat tile data cannot be folded into rows of the requested width
    RaggedTileData {
        /// Number of tile codes supplied
        len: usize,
        /// Requested number of columns
        columns: usize,
    },

    /// Grid would exceed the supported dimension limit
    GridTooLarge {
        /// Requested dimensions (rows, cols)
        dimensions: (usize, usize),
        /// Largest allowed extent on either axis
        limit: usize,
    },

    /// Collision data contains something that is not a tile code
    CollisionParse {
        /// File the data came from
        path: PathBuf,
        /// Zero-based position of the bad entry in the tile list
        entry: usize,
        /// Offending text
        token: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an overlay image to disk
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

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonRectangular {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Grid is not rectangular: row {row} has {found} tiles, expected {expected}"
                )
            }
            Self::RaggedTileData { len, columns } => {
                write!(
                    f,
                    "Cannot fold {len} tile codes into rows of {columns} columns"
                )
            }
            Self::GridTooLarge { dimensions, limit } => {
                write!(
                    f,
                    "Grid size {}x{} exceeds the limit of {limit} per axis",
                    dimensions.0, dimensions.1
                )
            }
            Self::CollisionParse { path, entry, token } => {
                write!(
                    f,
                    "Invalid tile code '{token}' at entry {entry} in '{}'",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for map results
pub type Result<T> = std::result::Result<T, MapError>;

impl From<image::ImageError> for MapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
