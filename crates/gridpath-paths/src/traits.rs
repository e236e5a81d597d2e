use gridpath_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Breadth-first search needs nothing else: every step between a cell and a
/// neighbor it reports costs 1.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
