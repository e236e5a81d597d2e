//! Maps written as text.
//!
//! A [`TextMap`] parses ASCII art into a [`PassGrid`]. Rows are separated by
//! newlines and whitespace inside a row is ignored, so both of these describe
//! the same 5×2 map:
//!
//! ```text
//! . P . . .        .P...
//! . # # # .        .###.
//! ```
//!
//! Which characters block movement, and which mark the start and the goal,
//! is configured through a [`Legend`].

use gridpath_core::Point;

use crate::error::{GridError, PathError};
use crate::grid::PassGrid;
use crate::pathfind::pathfind;

/// Character assignments for text maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    /// Characters that mark blocked cells. Anything else is passable.
    pub blocked: Vec<char>,
    /// Marks the start cell (passable).
    pub start: char,
    /// Marks the goal cell (passable).
    pub goal: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            blocked: vec!['#'],
            start: 'P',
            goal: 'Q',
        }
    }
}

impl Legend {
    /// Whether `ch` marks a blocked cell.
    #[inline]
    pub fn is_blocked(&self, ch: char) -> bool {
        self.blocked.contains(&ch)
    }
}

/// Every occurrence of one marker character.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Marks {
    ch: char,
    at: Vec<Point>,
}

impl Marks {
    fn new(ch: char) -> Self {
        Self { ch, at: Vec::new() }
    }

    fn first(&self) -> Option<Point> {
        self.at.first().copied()
    }

    /// The single marked position. Zero or several marks are an error.
    fn unique(&self) -> Result<Point, PathError> {
        match self.at.as_slice() {
            [] => Err(PathError::MissingMarker(self.ch)),
            [p] => Ok(*p),
            [first, second, ..] => Err(PathError::DuplicateMarker {
                marker: self.ch,
                first: *first,
                second: *second,
            }),
        }
    }
}

/// A grid parsed from text, together with the positions of its start/goal
/// markers.
///
/// Markers are always passable cells. They are only interpreted by
/// [`endpoints`](Self::endpoints) and [`shortest_path`](Self::shortest_path),
/// so a map with repeated markers can still be queried with explicit
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMap {
    grid: PassGrid,
    start: Marks,
    goal: Marks,
}

impl TextMap {
    /// Parse `s` using the default [`Legend`].
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::with_legend(s, &Legend::default())
    }

    /// Parse `s` using the given legend.
    ///
    /// Leading and trailing blank lines are ignored. Every remaining line
    /// must hold the same number of non-whitespace characters.
    pub fn with_legend(s: &str, legend: &Legend) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut start = Marks::new(legend.start);
        let mut goal = Marks::new(legend.goal);

        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let p = Point::new(row.len() as i32, y as i32);
                let mut marker = false;
                if ch == start.ch {
                    start.at.push(p);
                    marker = true;
                }
                if ch == goal.ch {
                    goal.at.push(p);
                    marker = true;
                }
                row.push(marker || !legend.is_blocked(ch));
            }
            rows.push(row);
        }

        let grid = PassGrid::from_rows(&rows)?;
        Ok(Self { grid, start, goal })
    }

    /// The parsed grid.
    pub fn grid(&self) -> &PassGrid {
        &self.grid
    }

    /// Consume the map, keeping only the grid.
    pub fn into_grid(self) -> PassGrid {
        self.grid
    }

    /// Position of the first start marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start.first()
    }

    /// Position of the first goal marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal.first()
    }

    /// Positions of the start and goal markers.
    ///
    /// Each marker must appear exactly once; the start is checked first.
    pub fn endpoints(&self) -> Result<(Point, Point), PathError> {
        Ok((self.start.unique()?, self.goal.unique()?))
    }

    /// Shortest distance between the start and goal markers.
    pub fn shortest_path(&self) -> Result<u32, PathError> {
        let (start, goal) = self.endpoints()?;
        pathfind(&self.grid, start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACED: &str = "\
. P . . .
. # # # .
. . . . .
. . Q . .
. . . . .";

    #[test]
    fn parse_spaced_map() {
        let m = TextMap::parse(SPACED).unwrap();
        assert_eq!(m.grid().width(), 5);
        assert_eq!(m.grid().height(), 5);
        assert_eq!(m.start(), Some(Point::new(1, 0)));
        assert_eq!(m.goal(), Some(Point::new(2, 3)));
        assert!(m.grid().is_passable(Point::new(1, 0)));
        assert!(!m.grid().is_passable(Point::new(2, 1)));
        assert_eq!(m.grid().passable_count(), 22);
    }

    #[test]
    fn compact_and_spaced_agree() {
        let compact = ".P...\n.###.\n.....\n..Q..\n.....";
        assert_eq!(TextMap::parse(compact).unwrap(), TextMap::parse(SPACED).unwrap());
    }

    #[test]
    fn surrounding_blank_lines_and_crlf() {
        let m = TextMap::parse("\n\n..#\r\n#..\r\n\n").unwrap();
        assert_eq!(m.grid().to_string(), "..#\n#..");
        assert_eq!(m.start(), None);
        assert_eq!(m.goal(), None);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(TextMap::parse(""), Err(GridError::Empty));
        assert_eq!(TextMap::parse("  \n \n"), Err(GridError::Empty));
    }

    #[test]
    fn ragged_text_is_rejected() {
        assert_eq!(
            TextMap::parse("...\n..\n..."),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
        // A blank line inside the map is a zero-width row.
        assert!(matches!(
            TextMap::parse("...\n\n..."),
            Err(GridError::Ragged { row: 1, found: 0, .. })
        ));
    }

    #[test]
    fn duplicate_marker_only_fails_endpoints() {
        let m = TextMap::parse("P..\n..P").unwrap();
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert!(m.grid().is_passable(Point::new(2, 1)));
        assert_eq!(
            m.endpoints(),
            Err(PathError::DuplicateMarker {
                marker: 'P',
                first: Point::new(0, 0),
                second: Point::new(2, 1),
            })
        );
        assert!(matches!(
            m.shortest_path(),
            Err(PathError::DuplicateMarker { marker: 'P', .. })
        ));
    }

    #[test]
    fn markers_are_passable_even_if_listed_as_blocked() {
        let legend = Legend {
            blocked: vec!['#', 'P'],
            ..Legend::default()
        };
        let m = TextMap::with_legend("P.Q", &legend).unwrap();
        assert!(m.grid().is_passable(Point::new(0, 0)));
        assert_eq!(m.shortest_path(), Ok(2));
    }

    #[test]
    fn shared_start_and_goal_marker() {
        let legend = Legend {
            start: '*',
            goal: '*',
            ..Legend::default()
        };
        let m = TextMap::with_legend("..\n.*", &legend).unwrap();
        assert_eq!(m.start(), Some(Point::new(1, 1)));
        assert_eq!(m.goal(), Some(Point::new(1, 1)));
        assert_eq!(m.shortest_path(), Ok(0));
    }

    #[test]
    fn custom_legend() {
        let legend = Legend {
            blocked: vec!['X', '~'],
            start: 's',
            goal: 'g',
        };
        let m = TextMap::with_legend("s X\n~ g", &legend).unwrap();
        assert_eq!(m.grid().to_string(), ".#\n#.");
        assert_eq!(
            m.endpoints(),
            Ok((Point::new(0, 0), Point::new(1, 1)))
        );
        // '#' is an ordinary passable cell under this legend.
        let m = TextMap::with_legend("#", &legend).unwrap();
        assert!(m.grid().is_passable(Point::ZERO));
    }

    #[test]
    fn missing_markers_reported_in_order() {
        let m = TextMap::parse("...\n.Q.").unwrap();
        assert_eq!(m.endpoints(), Err(PathError::MissingMarker('P')));
        let m = TextMap::parse("P..\n...").unwrap();
        assert_eq!(m.shortest_path(), Err(PathError::MissingMarker('Q')));
    }

    #[test]
    fn shortest_path_between_markers() {
        let m = TextMap::parse(SPACED).unwrap();
        assert_eq!(m.shortest_path(), Ok(6));
    }
}
