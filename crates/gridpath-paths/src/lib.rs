//! Shortest paths on passable/blocked grids.
//!
//! This crate answers one question: how many orthogonal unit steps separate
//! two cells of a [`PassGrid`], moving only through passable cells? It does
//! so with a breadth-first search, which is optimal when every step costs
//! the same.
//!
//! - [`pathfind`] — one-shot query with the full endpoint policy
//! - [`pathfind_with`] — the same, reusing a [`PathRange`] workspace
//! - [`pathfind_text`] — parse a `.`/`#` [`TextMap`] and query it
//! - [`PathRange::bfs_distance`] — the raw search over any [`Pather`]
//!
//! ```
//! use gridpath_core::Point;
//! use gridpath_paths::{pathfind_text, PathError};
//!
//! let map = ". . .\n# # .\n. . .";
//! assert_eq!(pathfind_text(map, Point::new(0, 0), Point::new(0, 2)), Ok(6));
//! assert!(matches!(
//!     pathfind_text(map, Point::new(0, 0), Point::new(3, 0)),
//!     Err(PathError::OutOfBounds { .. })
//! ));
//! ```

mod bfs;
mod distance;
mod error;
mod grid;
mod pathfind;
mod pathrange;
mod text;
mod traits;

pub use distance::manhattan;
pub use error::{GridError, PathError};
pub use grid::PassGrid;
pub use pathfind::{pathfind, pathfind_text, pathfind_with};
pub use pathrange::{PathRange, UNREACHABLE};
pub use text::{Legend, TextMap};
pub use traits::Pather;
