use crate::board::grid::Board;
use crate::io::error::{PentominoError, Result, invalid_parameter};
use crate::shapes::tree::ShapeTree;

/// Stamp a leaf's pentomino onto the board at its next empty square
///
/// The leaf's path (itself and its ancestors) is translated by the board's
/// anchor square and every resulting cell receives the leaf's symbol. The
/// input board is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The index does not address a leaf of the tree
/// - The board has no empty square left
/// - A target cell is outside the board or already filled
pub fn place(tree: &ShapeTree, board: &Board, leaf: usize) -> Result<Board> {
    let node = tree.node(leaf).ok_or(PentominoError::InvalidNodeIndex {
        index: leaf,
        node_count: tree.len(),
    })?;
    let symbol = node
        .symbol()
        .ok_or_else(|| invalid_parameter("leaf", &leaf, &"node is not a leaf"))?;
    let anchor = board.next_empty_square().ok_or_else(|| PentominoError::InvalidBoard {
        reason: "no empty square left for a placement".to_string(),
    })?;

    let cells: Vec<_> = tree
        .path(leaf)?
        .into_iter()
        .map(|point| point.offset(anchor))
        .collect();
    board.stamp(&cells, symbol)
}
