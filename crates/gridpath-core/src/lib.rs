//! **gridpath-core** — geometry primitives shared by the *gridpath* crates.
//!
//! [`Point`] names a cell, [`Range`] names a rectangle of cells.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
