//! Grid coordinates.
//!
//! A `Cell` is a plain coordinate pair with no identity beyond its position.
//! Coordinates are signed so that neighbor offsets past the border are still
//! representable; such cells are never alive.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A cell position on the square grid.
///
/// Valid cells satisfy `0 <= x < density` and `0 <= y < density`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `(dx, dy)`, wrapping on `i32` overflow.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Check whether this cell lies inside a `side × side` grid.
    #[must_use]
    pub fn in_bounds(self, side: u32) -> bool {
        let side = i64::from(side);
        (0..side).contains(&i64::from(self.x)) && (0..side).contains(&i64::from(self.y))
    }
}

/// Row-major order: by `y`, then by `x`.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
