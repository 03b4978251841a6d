//! Candidate placements at a board's anchor square

use bitvec::prelude::*;

use crate::board::grid::Board;
use crate::shapes::tree::ShapeTree;

/// Leaves of the tree whose pentomino fits at the board's next empty square
///
/// A node is bad when its point, translated by the anchor, leaves the board
/// or lands on a filled cell; badness is inherited by every descendant.
/// Leaves that stay good and whose symbol is not yet on the board are
/// returned in tree order. A full board yields no candidates.
pub fn find_placements(tree: &ShapeTree, board: &Board) -> Vec<usize> {
    let Some(anchor) = board.next_empty_square() else {
        return Vec::new();
    };

    // Parents precede children in the arena, so one forward sweep reaches every descendant
    let mut bad = bitvec![0; tree.len()];
    for (index, node) in tree.nodes().iter().enumerate() {
        let inherited = node
            .parent
            .is_some_and(|parent| bad.get(parent).as_deref() == Some(&true));
        if inherited || !board.is_empty_at(node.point.offset(anchor)) {
            bad.set(index, true);
        }
    }

    let present = board.symbols_present();
    tree.leaves()
        .filter(|(index, _)| bad.get(*index).as_deref() == Some(&false))
        .filter(|(_, leaf)| leaf.symbol().is_some_and(|symbol| !present.contains(symbol)))
        .map(|(index, _)| index)
        .collect()
}
