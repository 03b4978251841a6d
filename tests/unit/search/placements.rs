//! Tests for candidate placement discovery at the anchor square

#[cfg(test)]
mod tests {
    use pentotile::board::{Board, RectangleSize, place};
    use pentotile::search::find_placements;
    use pentotile::shapes::{ShapeTree, build_tree};

    const SOLVED_3X20: [&str; 3] = [
        "UUXIIIIINNNFTWYYYYZV",
        "UXXXPPLNNFFFTWWYZZZV",
        "UUXPPPLLLLFTTTWWZVVV",
    ];

    fn tree() -> ShapeTree {
        build_tree().expect("pentomino tree builds")
    }

    fn erase(rows: &[&str], symbols: &str) -> Board {
        let erased: Vec<String> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|cell| if symbols.contains(cell) { '.' } else { cell })
                    .collect()
            })
            .collect();
        Board::from_rows(&erased).expect("well-formed board")
    }

    // Brute-force reference: every leaf whose cells are free and whose symbol is unused
    fn fitting_leaves(tree: &ShapeTree, board: &Board) -> Vec<usize> {
        let Some(anchor) = board.next_empty_square() else {
            return Vec::new();
        };
        let present = board.symbols_present();
        tree.leaves()
            .filter(|(_, leaf)| leaf.symbol().is_some_and(|symbol| !present.contains(symbol)))
            .filter(|(index, _)| {
                tree.path(*index).is_ok_and(|path| {
                    path.iter()
                        .all(|point| board.is_empty_at(point.offset(anchor)))
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    // Tests candidate counts on empty rectangles
    // Verified by skipping the bounds check on translated points
    #[test]
    fn test_empty_board_candidates() {
        let tree = tree();
        let wide = Board::empty(RectangleSize::from_rows(5).expect("valid"));
        assert_eq!(find_placements(&tree, &wide).len(), 37);

        let narrow = Board::empty(RectangleSize::from_rows(3).expect("valid"));
        assert_eq!(find_placements(&tree, &narrow).len(), 29);
    }

    // Tests agreement with the brute-force reference, in tree order
    // Verified by marking only the node itself bad without its descendants
    #[test]
    fn test_matches_brute_force() {
        let tree = tree();
        let boards = [
            Board::empty(RectangleSize::from_rows(6).expect("valid")),
            erase(&SOLVED_3X20, "VZY"),
            erase(&SOLVED_3X20, "UX"),
            erase(&SOLVED_3X20, "IPLNF"),
        ];
        for board in &boards {
            assert_eq!(find_placements(&tree, board), fitting_leaves(&tree, board));
        }
    }

    // Tests that a single missing piece has exactly one fitting orientation
    // Verified by allowing shape points onto filled cells
    #[test]
    fn test_single_gap_has_one_candidate() {
        let tree = tree();
        let board = erase(&SOLVED_3X20, "V");
        let candidates = find_placements(&tree, &board);
        assert_eq!(candidates.len(), 1);

        let completed = place(&tree, &board, candidates[0]).expect("fits");
        assert_eq!(completed, erase(&SOLVED_3X20, ""));
    }

    // Tests that pieces already on the board are never offered
    // Verified by dropping the used-symbol filter
    #[test]
    fn test_used_symbols_excluded() {
        let tree = tree();
        let board = erase(&SOLVED_3X20, "UX");
        assert_eq!(find_placements(&tree, &board).len(), 4);
        for leaf in find_placements(&tree, &board) {
            let symbol = tree.node(leaf).and_then(|node| node.symbol());
            assert!(matches!(symbol, Some('U' | 'X')));
        }
    }

    // Tests a full board
    // Verified by anchoring at the origin when no cell is empty
    #[test]
    fn test_full_board_has_no_candidates() {
        let tree = tree();
        assert!(find_placements(&tree, &erase(&SOLVED_3X20, "")).is_empty());
    }
}
