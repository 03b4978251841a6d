//! Error types for tree construction, board handling and search

use std::fmt;
use std::path::PathBuf;

use crate::geometry::Point;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum PentominoError {
    /// A point has no entry in the fixed code table
    ///
    /// Occurs when a point lies beyond the pentomino radius or breaks the
    /// scan-order validity rule. Indicates a defect in shape generation.
    PointOutOfRange {
        /// The offending point
        point: Point,
    },

    /// A node index does not address a node of the shape tree
    InvalidNodeIndex {
        /// The invalid index
        index: usize,
        /// Number of nodes in the tree
        node_count: usize,
    },

    /// A placement would stamp a cell outside the board
    PlacementOutOfBounds {
        /// Target cell of the placement
        point: Point,
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// A placement would stamp a cell that is already filled
    PlacementConflict {
        /// Target cell of the placement
        point: Point,
        /// Symbol already occupying the cell
        occupant: char,
    },

    /// Rectangle dimensions cannot hold the twelve pentominoes
    InvalidRectangle {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Explanation of why the rectangle is rejected
        reason: String,
    },

    /// Board contents are malformed
    InvalidBoard {
        /// Description of what's wrong with the board
        reason: String,
    },

    /// Shape tree construction produced an inconsistent tree
    MalformedTree {
        /// Description of the inconsistency
        reason: String,
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

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or stream operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PentominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutOfRange { point } => {
                write!(f, "Point {point} is outside the shape code table")
            }
            Self::InvalidNodeIndex { index, node_count } => {
                write!(
                    f,
                    "Node index {index} is out of bounds (tree has {node_count} nodes)"
                )
            }
            Self::PlacementOutOfBounds { point, dimensions } => {
                write!(
                    f,
                    "Placement cell {point} is outside the {}x{} board",
                    dimensions.0, dimensions.1
                )
            }
            Self::PlacementConflict { point, occupant } => {
                write!(f, "Placement cell {point} is already occupied by '{occupant}'")
            }
            Self::InvalidRectangle { rows, cols, reason } => {
                write!(f, "Invalid rectangle {rows}x{cols}: {reason}")
            }
            Self::InvalidBoard { reason } => {
                write!(f, "Invalid board: {reason}")
            }
            Self::MalformedTree { reason } => {
                write!(f, "Malformed shape tree: {reason}")
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

impl std::error::Error for PentominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, PentominoError>;

impl From<std::io::Error> for PentominoError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PentominoError {
    PentominoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid rectangle error
pub fn invalid_rectangle(rows: usize, cols: usize, reason: &impl ToString) -> PentominoError {
    PentominoError::InvalidRectangle {
        rows,
        cols,
        reason: reason.to_string(),
    }
}

/// Create a malformed tree error
pub fn malformed_tree(reason: &impl ToString) -> PentominoError {
    PentominoError::MalformedTree {
        reason: reason.to_string(),
    }
}
