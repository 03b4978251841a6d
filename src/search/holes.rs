//! Hole-size validity check
//!
//! A hole is a maximal 4-connected group of empty cells. Only holes whose
//! size is a multiple of five can still be covered by pentominoes.

use bitvec::prelude::*;

use crate::board::grid::Board;
use crate::geometry::Point;
use crate::io::configuration::{EMPTY_CELL, PENTOMINO_SIZE};

/// Sizes of every hole, discovered in row-major order of their first cell
pub fn hole_sizes(board: &Board) -> Vec<usize> {
    let cols = board.cols();
    let mut visited = bitvec![0; board.rows() * cols];
    let mut sizes = Vec::new();
    let mut stack = Vec::new();

    for (start, &cell) in board.cells().iter().enumerate() {
        if visited.get(start).as_deref() == Some(&true) || cell != EMPTY_CELL {
            continue;
        }

        visited.set(start, true);
        stack.push(start);
        let mut size = 0;

        while let Some(index) = stack.pop() {
            size += 1;
            let Some(point) = to_point(index, cols) else {
                continue;
            };
            for neighbor in point.neighbors() {
                if !board.is_empty_at(neighbor) {
                    continue;
                }
                let Some(next) = to_index(neighbor, cols) else {
                    continue;
                };
                if visited.get(next).as_deref() == Some(&false) {
                    visited.set(next, true);
                    stack.push(next);
                }
            }
        }

        sizes.push(size);
    }

    sizes
}

/// True when every hole has a size divisible by five
pub fn holes_valid(board: &Board) -> bool {
    hole_sizes(board)
        .into_iter()
        .all(|size| size % PENTOMINO_SIZE == 0)
}

fn to_point(index: usize, cols: usize) -> Option<Point> {
    let row = i32::try_from(index / cols).ok()?;
    let col = i32::try_from(index % cols).ok()?;
    Some(Point::new(row, col))
}

fn to_index(point: Point, cols: usize) -> Option<usize> {
    let row = usize::try_from(point.row).ok()?;
    let col = usize::try_from(point.col).ok()?;
    Some(row * cols + col)
}
