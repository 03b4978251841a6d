//! Initial boards seeded with the X pentomino
//!
//! X is symmetric under every rotation and reflection, so restricting its
//! center to the upper-left quadrant of the board removes mirrored and rotated
//! copies of each tiling. The topmost-leftmost center is skipped because it
//! always cuts off the corner cell.

use std::collections::BTreeMap;

use crate::board::grid::Board;
use crate::board::rectangle::RectangleSize;
use crate::geometry::Point;
use crate::io::configuration::X_SYMBOL;
use crate::io::error::Result;

/// Candidate X centers in the upper-left quadrant, column by column
pub fn x_centers(size: RectangleSize) -> Vec<Point> {
    let max_row = (size.rows() - 1) / 2;
    let max_col = (size.cols() - 1) / 2;

    let mut centers = Vec::new();
    for col in 1..=max_col {
        for row in 1..=max_row {
            if let (Ok(row), Ok(col)) = (i32::try_from(row), i32::try_from(col)) {
                centers.push(Point::new(row, col));
            }
        }
    }
    centers.into_iter().skip(1).collect()
}

/// The five cells of an X pentomino centered on a point
pub const fn x_cells(center: Point) -> [Point; 5] {
    let [right, left, down, up] = center.neighbors();
    [center, right, left, down, up]
}

/// Boards of one size with X placed at each quadrant center
///
/// # Errors
///
/// Returns an error if an X placement falls outside the board
pub fn seeded_boards(size: RectangleSize) -> Result<Vec<Board>> {
    let template = Board::empty(size);
    x_centers(size)
        .into_iter()
        .map(|center| template.stamp(&x_cells(center), X_SYMBOL))
        .collect()
}

/// Seeded boards for every valid rectangle, ordered by row count
///
/// # Errors
///
/// Propagates seeding errors
pub fn initial_boards() -> Result<BTreeMap<RectangleSize, Vec<Board>>> {
    RectangleSize::all()
        .into_iter()
        .map(|size| -> Result<(RectangleSize, Vec<Board>)> { Ok((size, seeded_boards(size)?)) })
        .collect()
}
