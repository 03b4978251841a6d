//! Immutable rectangular board
//!
//! A board is a value: stamping a pentomino returns a new board and leaves the
//! original untouched, so backtracking simply drops the boards it no longer
//! needs.

use ndarray::Array2;
use std::fmt;

use crate::board::rectangle::RectangleSize;
use crate::geometry::Point;
use crate::io::configuration::EMPTY_CELL;
use crate::io::error::{PentominoError, Result};
use crate::shapes::alphabet::{SymbolSet, is_symbol};

/// Grid of cells holding either the empty marker or a pentomino symbol
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Array2<char>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn empty(size: RectangleSize) -> Self {
        Self {
            cells: Array2::from_elem((size.rows(), size.cols()), EMPTY_CELL),
        }
    }

    /// Parse a board from text rows of `.` and pentomino letters
    ///
    /// Dimensions are not restricted to area 60, which keeps small boards
    /// available for inspecting individual pruning rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if there are no rows, the rows differ in length
    /// or a character is neither empty nor a pentomino letter
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let width = lines.first().map_or(0, |line| line.as_ref().chars().count());
        if width == 0 {
            return Err(PentominoError::InvalidBoard {
                reason: "board needs at least one non-empty row".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(lines.len() * width);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(PentominoError::InvalidBoard {
                    reason: format!("row {row} has a different length than row 0"),
                });
            }
            for cell in line.chars() {
                if cell != EMPTY_CELL && !is_symbol(cell) {
                    return Err(PentominoError::InvalidBoard {
                        reason: format!("unexpected character '{cell}' in row {row}"),
                    });
                }
                cells.push(cell);
            }
        }

        let cells = Array2::from_shape_vec((lines.len(), width), cells).map_err(|e| {
            PentominoError::InvalidBoard {
                reason: e.to_string(),
            }
        })?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Underlying cell grid
    pub const fn cells(&self) -> &Array2<char> {
        &self.cells
    }

    /// Cell content at a point, `None` outside the board
    pub fn get(&self, point: Point) -> Option<char> {
        let index = self.index_of(point)?;
        self.cells.get(index).copied()
    }

    /// Check that a point is on the board and unfilled
    pub fn is_empty_at(&self, point: Point) -> bool {
        self.get(point) == Some(EMPTY_CELL)
    }

    /// Anchor square for the next placement
    ///
    /// Takes the first empty column of every row and picks the smallest;
    /// ties go to the lowest row index. Returns `None` on a full board.
    pub fn next_empty_square(&self) -> Option<Point> {
        let (col, row) = self
            .cells
            .rows()
            .into_iter()
            .enumerate()
            .filter_map(|(row, line)| {
                line.iter()
                    .position(|&cell| cell == EMPTY_CELL)
                    .map(|col| (col, row))
            })
            .min()?;
        to_point(row, col)
    }

    /// Check whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Number of unfilled cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == EMPTY_CELL).count()
    }

    /// Set of pentomino symbols present anywhere on the board
    pub fn symbols_present(&self) -> SymbolSet {
        self.cells.iter().copied().collect()
    }

    /// Number of cells holding a symbol
    pub fn symbol_count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&cell| cell == symbol).count()
    }

    /// Return a new board with the given cells set to `symbol`
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is not a pentomino letter, or if any
    /// target cell lies outside the board or is already filled
    pub fn stamp(&self, points: &[Point], symbol: char) -> Result<Self> {
        if !is_symbol(symbol) {
            return Err(PentominoError::InvalidBoard {
                reason: format!("'{symbol}' is not a pentomino symbol"),
            });
        }

        let mut cells = self.cells.clone();
        for &point in points {
            let cell = self
                .index_of(point)
                .and_then(|index| cells.get_mut(index))
                .ok_or(PentominoError::PlacementOutOfBounds {
                    point,
                    dimensions: (self.rows(), self.cols()),
                })?;
            if *cell != EMPTY_CELL {
                return Err(PentominoError::PlacementConflict {
                    point,
                    occupant: *cell,
                });
            }
            *cell = symbol;
        }
        Ok(Self { cells })
    }

    fn index_of(&self, point: Point) -> Option<[usize; 2]> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }
}

fn to_point(row: usize, col: usize) -> Option<Point> {
    Some(Point::new(i32::try_from(row).ok()?, i32::try_from(col).ok()?))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.rows() {
            let text: String = line.iter().collect();
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}
