//! Error types for grid construction and path queries.

use std::fmt;

use gridpath_core::{Point, Range};

/// Errors that can occur when building a [`PassGrid`](crate::PassGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} cells, expected {expected} like the first row"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors returned by a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal lies outside the grid.
    OutOfBounds { point: Point, bounds: Range },
    /// Both endpoints are valid but no chain of passable cells joins them.
    NoPath { from: Point, to: Point },
    /// The grid itself could not be built.
    InvalidGrid(GridError),
    /// A text map lacks the start or goal marker.
    MissingMarker(char),
    /// A text map holds the start or goal marker more than once.
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "coordinate {point} is outside the grid {bounds}")
            }
            Self::NoPath { from, to } => write!(f, "no path from {from} to {to}"),
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            Self::MissingMarker(m) => write!(f, "map has no \u{201c}{m}\u{201d} marker"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "marker \u{201c}{marker}\u{201d} appears more than once, at {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}
