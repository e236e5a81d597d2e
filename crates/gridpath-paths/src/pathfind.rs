//! Shortest-path queries on a [`PassGrid`].
//!
//! Endpoint policy:
//!
//! - a start or goal outside the grid is [`PathError::OutOfBounds`], the
//!   start being checked first;
//! - `start == goal` is distance 0, even on a blocked cell;
//! - otherwise a blocked start or goal is [`PathError::NoPath`].

use gridpath_core::Point;
use log::{debug, trace};

use crate::PathRange;
use crate::error::PathError;
use crate::grid::PassGrid;
use crate::text::TextMap;

/// Number of unit steps on the shortest 4-connected path from `start` to
/// `goal` through passable cells.
///
/// Allocates a fresh [`PathRange`]; use [`pathfind_with`] to reuse one
/// across queries.
pub fn pathfind(grid: &PassGrid, start: Point, goal: Point) -> Result<u32, PathError> {
    let mut pr = PathRange::new(grid.bounds());
    pathfind_with(&mut pr, grid, start, goal)
}

/// Like [`pathfind`], searching with the caches of `pr`.
///
/// `pr` is re-targeted to the grid's bounds if it covers a different range.
pub fn pathfind_with(
    pr: &mut PathRange,
    grid: &PassGrid,
    start: Point,
    goal: Point,
) -> Result<u32, PathError> {
    check_bounds(grid, start)?;
    check_bounds(grid, goal)?;

    if start == goal {
        return Ok(0);
    }
    if !grid.is_passable(start) || !grid.is_passable(goal) {
        debug!("pathfind: blocked endpoint, {start} -> {goal}");
        return Err(PathError::NoPath {
            from: start,
            to: goal,
        });
    }

    if pr.range() != grid.bounds() {
        pr.set_range(grid.bounds());
    }
    trace!(
        "pathfind: {start} -> {goal} on {}x{} grid",
        grid.width(),
        grid.height()
    );

    match pr.bfs_distance(grid, start, goal) {
        Some(d) => Ok(d as u32),
        None => {
            debug!("pathfind: frontier exhausted, {start} -> {goal}");
            Err(PathError::NoPath {
                from: start,
                to: goal,
            })
        }
    }
}

/// Parse a text map (see [`TextMap`]) and search it from `start` to `goal`.
pub fn pathfind_text(map: &str, start: Point, goal: Point) -> Result<u32, PathError> {
    let map = TextMap::parse(map)?;
    pathfind(map.grid(), start, goal)
}

fn check_bounds(grid: &PassGrid, p: Point) -> Result<(), PathError> {
    if grid.contains(p) {
        return Ok(());
    }
    debug!("pathfind: {p} outside {}", grid.bounds());
    Err(PathError::OutOfBounds {
        point: p,
        bounds: grid.bounds(),
    })
}
