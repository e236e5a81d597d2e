use gridpath_core::Point;

use crate::PathRange;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;

impl PathRange {
    /// Length of the shortest path from `from` to `to`, by breadth-first search.
    ///
    /// Each step has cost 1. The search stops as soon as `to` is discovered.
    /// Returns `None` if either point is outside the range or `to` cannot be
    /// reached. `from` is expanded whether or not `pather` would ever step
    /// onto it; endpoint policy belongs to the caller.
    pub fn bfs_distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<i32> {
        let si = self.idx(from)?;
        let gi = self.idx(to)?;

        // Reset.
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_queue.clear();

        self.bfs_map[si] = 0;
        if si == gi {
            return Some(0);
        }
        self.bfs_queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.bfs_queue.pop_front() else {
                break 'search None;
            };
            let nd = self.bfs_map[ci] + 1;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = nd;
                if ni == gi {
                    break 'search Some(nd);
                }
                self.bfs_queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        found
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last [`bfs_distance`](Self::bfs_distance) call. Since
    /// the search stops at the goal, cells farther away than it may be
    /// unreached even when connected.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Range;

    /// Open field with a wall at x == 2 except for a gap at y == 4.
    struct Walled;

    impl Pather for Walled {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(
                p.neighbors_4()
                    .into_iter()
                    .filter(|n| n.x != 2 || n.y == 4),
            );
        }
    }

    /// Every cell is isolated.
    struct Islands;

    impl Pather for Islands {
        fn neighbors(&self, _p: Point, _buf: &mut Vec<Point>) {}
    }

    #[test]
    fn bfs_routes_through_gap() {
        let mut pr = PathRange::new(Range::sized(5, 5));
        // (0,0) -> down to (0,4) -> right to (4,4) -> up to (4,0)
        assert_eq!(
            pr.bfs_distance(&Walled, Point::new(0, 0), Point::new(4, 0)),
            Some(12)
        );
        assert_eq!(pr.bfs_at(Point::new(0, 0)), 0);
        assert_eq!(pr.bfs_at(Point::new(4, 0)), 12);
        assert_eq!(pr.bfs_at(Point::new(2, 4)), 6);
        assert_eq!(pr.bfs_at(Point::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn bfs_same_point_is_zero() {
        let mut pr = PathRange::new(Range::sized(3, 3));
        assert_eq!(pr.bfs_distance(&Islands, Point::new(1, 1), Point::new(1, 1)), Some(0));
    }

    #[test]
    fn bfs_unreachable() {
        let mut pr = PathRange::new(Range::sized(3, 3));
        assert_eq!(pr.bfs_distance(&Islands, Point::new(0, 0), Point::new(2, 2)), None);
        assert_eq!(pr.bfs_at(Point::new(2, 2)), UNREACHABLE);
    }

    #[test]
    fn bfs_outside_range_is_none() {
        let mut pr = PathRange::new(Range::sized(3, 3));
        assert_eq!(pr.bfs_distance(&Walled, Point::new(-1, 0), Point::new(1, 1)), None);
        assert_eq!(pr.bfs_distance(&Walled, Point::new(0, 0), Point::new(3, 1)), None);
        assert_eq!(pr.bfs_at(Point::new(7, 7)), UNREACHABLE);
    }

    #[test]
    fn bfs_ignores_neighbors_outside_range() {
        // `Walled` happily reports points past the edge; they must be skipped.
        let mut pr = PathRange::new(Range::sized(2, 1));
        assert_eq!(pr.bfs_distance(&Walled, Point::new(0, 0), Point::new(1, 0)), Some(1));
    }

    #[test]
    fn bfs_reuse_resets_state() {
        let mut pr = PathRange::new(Range::sized(5, 5));
        assert_eq!(
            pr.bfs_distance(&Walled, Point::new(0, 0), Point::new(4, 4)),
            Some(8)
        );
        assert_eq!(
            pr.bfs_distance(&Walled, Point::new(4, 0), Point::new(3, 0)),
            Some(1)
        );
        assert_eq!(pr.bfs_at(Point::new(0, 0)), UNREACHABLE);
    }
}
