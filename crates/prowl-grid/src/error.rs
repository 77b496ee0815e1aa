//! Error types for maze construction.

use prowl_core::Cell;
use std::fmt;

/// Errors arising from [`Maze::new`](crate::Maze::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Attempted to construct a maze with zero cells.
    EmptyMaze,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// The offending dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The supported maximum.
        max: u32,
    },
    /// A wall cell lies outside the map bounds.
    WallOutOfBounds {
        /// The offending wall cell.
        cell: Cell,
        /// Map width.
        width: u32,
        /// Map height.
        height: u32,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMaze => write!(f, "maze must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::WallOutOfBounds {
                cell,
                width,
                height,
            } => {
                write!(f, "wall cell {cell} outside {width}x{height} map")
            }
        }
    }
}

impl std::error::Error for MazeError {}
