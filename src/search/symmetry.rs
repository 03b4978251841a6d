//! Mirror-duplicate elimination keyed off the X pentomino
//!
//! When X sits centered on the middle row of an odd-height board, every tiling
//! has a mirror image about that row which the seeding cannot tell apart. The
//! W pentomino breaks the tie: boards with W mostly above the middle row are
//! the mirrored half and get pruned.

use ndarray::{Axis, Slice};

use crate::board::grid::Board;
use crate::io::configuration::{W_CELLS_ABOVE_MIDDLE, W_SYMBOL, X_CELLS_ON_AXIS, X_SYMBOL};

/// True when the board is the redundant mirror of a tiling kept elsewhere
///
/// Boards with an odd column count are examined transposed. Boards with an
/// even (examined) row count have no middle row and are never pruned.
pub fn symmetry_pruned(board: &Board) -> bool {
    let cells = if board.cols() % 2 == 1 {
        board.cells().t()
    } else {
        board.cells().view()
    };

    let rows = cells.nrows();
    if rows % 2 == 0 {
        return false;
    }
    let middle = (rows - 1) / 2;

    let x_on_axis = cells
        .row(middle)
        .iter()
        .filter(|&&cell| cell == X_SYMBOL)
        .count();
    if x_on_axis != X_CELLS_ON_AXIS {
        return false;
    }

    let w_above = cells
        .slice_axis(Axis(0), Slice::from(..middle))
        .iter()
        .filter(|&&cell| cell == W_SYMBOL)
        .count();
    w_above >= W_CELLS_ABOVE_MIDDLE
}
