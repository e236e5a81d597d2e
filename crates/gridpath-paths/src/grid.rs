//! The [`PassGrid`] type — a rectangular map of passable and blocked cells.
//!
//! Cells are stored row-major in a flat `Vec<bool>`; `true` means passable.
//! A grid always has at least one row and one column.

use std::fmt;

use gridpath_core::{Point, Range};

use crate::error::GridError;
use crate::traits::Pather;

/// A rectangular grid of passable (`true`) and blocked (`false`) cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct PassGrid {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl PassGrid {
    /// Create a `width × height` grid with every cell set to `passable`.
    pub fn filled(width: i32, height: i32, passable: bool) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![passable; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    /// Create a fully passable grid.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        Self::filled(width, height, true)
    }

    /// Build a grid from rows indexed `[row][col]`.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.as_ref().len();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            width: expected as i32,
            height: rows.len() as i32,
        })
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<bool> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }

    /// Set the cell at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Point, passable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = passable;
        }
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major iterator over `(Point, passable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Copy the cells out as nested rows.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width as usize)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl Pather for PassGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl TryFrom<Vec<Vec<bool>>> for PassGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<PassGrid> for Vec<Vec<bool>> {
    fn from(g: PassGrid) -> Self {
        g.rows()
    }
}

/// Renders `.` for passable and `#` for blocked cells, one line per row.
impl fmt::Display for PassGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", if c { '.' } else { '#' })?;
            }
        }
        Ok(())
    }
}
