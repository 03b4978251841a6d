//! Rectangle dimensions that can hold the twelve pentominoes

use std::fmt;

use crate::io::configuration::{BOARD_AREA, MIN_BOARD_ROWS};
use crate::io::error::{Result, invalid_rectangle};

/// Validated board dimensions with `rows * cols == 60` and `rows <= cols`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectangleSize {
    rows: usize,
    cols: usize,
}

impl RectangleSize {
    /// Validate explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` unless the area is 60, the row count is at
    /// least 3 and the rows do not outnumber the columns
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(BOARD_AREA) {
            return Err(invalid_rectangle(
                rows,
                cols,
                &format!("area must be exactly {BOARD_AREA} cells"),
            ));
        }
        if rows < MIN_BOARD_ROWS {
            return Err(invalid_rectangle(
                rows,
                cols,
                &format!("at least {MIN_BOARD_ROWS} rows are needed to seed the X pentomino"),
            ));
        }
        if rows > cols {
            return Err(invalid_rectangle(
                rows,
                cols,
                &"rows may not outnumber columns (use the transposed size)",
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Derive the column count from a row count
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if the row count does not divide 60 or the
    /// resulting rectangle fails [`RectangleSize::new`]
    pub fn from_rows(rows: usize) -> Result<Self> {
        if rows == 0 || BOARD_AREA % rows != 0 {
            return Err(invalid_rectangle(
                rows,
                0,
                &format!("row count must divide {BOARD_AREA}"),
            ));
        }
        Self::new(rows, BOARD_AREA / rows)
    }

    /// Every valid rectangle, by ascending row count
    pub fn all() -> Vec<Self> {
        (MIN_BOARD_ROWS..=BOARD_AREA)
            .take_while(|rows| rows * rows <= BOARD_AREA)
            .filter_map(|rows| Self::from_rows(rows).ok())
            .collect()
    }

    /// Number of rows
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(self) -> usize {
        self.cols
    }
}

impl fmt::Display for RectangleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
