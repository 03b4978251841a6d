//! Integer grid points on an unbounded plane
//!
//! Rows grow downward and columns grow to the right. The anchor of every shape
//! is the origin, and growth only ever reaches points that satisfy
//! [`Point::is_valid_location`], which keeps a shape from being re-derived
//! through a different growth order.

use std::fmt;

/// A (row, col) position on an unbounded grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index, increasing downward
    pub row: i32,
    /// Column index, increasing to the right
    pub col: i32,
}

impl Point {
    /// The fixed anchor of every shape
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from its row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbors, in the order right, left, down, up
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row, self.col + 1),
            Self::new(self.row, self.col - 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row - 1, self.col),
        ]
    }

    /// Scan-order validity rule for anchored shapes
    ///
    /// Rejects every point left of the anchor column and every point above the
    /// anchor within the anchor column.
    pub const fn is_valid_location(self) -> bool {
        self.col >= 0 && (self.row >= 0 || self.col > 0)
    }

    /// Neighbors that pass the validity rule, in neighbor order
    pub fn next_points(self) -> impl Iterator<Item = Self> {
        self.neighbors()
            .into_iter()
            .filter(|point| point.is_valid_location())
    }

    /// Manhattan distance from the origin
    pub const fn radius(self) -> u32 {
        self.row.unsigned_abs() + self.col.unsigned_abs()
    }

    /// Translate by another point
    #[must_use]
    pub const fn offset(self, by: Self) -> Self {
        Self::new(self.row + by.row, self.col + by.col)
    }

    /// Check 4-adjacency
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
