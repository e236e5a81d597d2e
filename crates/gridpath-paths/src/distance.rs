use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the length of the shortest 4-connected path on an open grid, and a
/// lower bound on it otherwise.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
