//! Tiered construction of the shape tree
//!
//! Growth starts from a single anchor node. Each tier extends every current
//! leaf by one cell adjacent to any point of its path, drops candidates whose
//! figure value was already produced earlier in the same tier, and attaches
//! the survivors as children. After the last tier every leaf is folded to the
//! canonical number of its free shape and tagged with a letter.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace};

use crate::geometry::Point;
use crate::io::configuration::{PENTOMINO_COUNT, PENTOMINO_SIZE, PENTOMINO_SYMBOLS};
use crate::io::error::{PentominoError, Result, invalid_parameter, malformed_tree};
use crate::shapes::figure::{Figure, point_bit};
use crate::shapes::symmetry::canonical_number;
use crate::shapes::tree::{NodeKind, ShapeNode, ShapeTree};

/// Node under construction, carrying its path figure
#[derive(Clone, Debug)]
struct GrowthNode {
    point: Point,
    parent: Option<usize>,
    branches: Option<Vec<usize>>,
    figure: Figure,
}

/// Builder for a shape tree of a given cell count
#[derive(Clone, Copy, Debug)]
pub struct TreeBuilder {
    target_size: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(PENTOMINO_SIZE)
    }
}

impl TreeBuilder {
    /// Create a builder for shapes of `target_size` cells
    pub const fn new(target_size: usize) -> Self {
        Self { target_size }
    }

    /// Grow, canonicalize and label the tree
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target size is zero
    /// - A grown point falls outside the code table (target size above 5)
    /// - More canonical shapes appear than there are letters
    /// - Some leaf does not sit `target_size - 1` edges below the root
    pub fn build(&self) -> Result<ShapeTree> {
        if self.target_size == 0 {
            return Err(invalid_parameter(
                "target_size",
                &self.target_size,
                &"shapes need at least one cell",
            ));
        }

        let mut arena = vec![GrowthNode {
            point: Point::ORIGIN,
            parent: None,
            branches: None,
            figure: 0,
        }];
        let mut frontier = vec![0];

        for tier in 1..self.target_size {
            frontier = grow_tier(&mut arena, &frontier)?;
            trace!(tier, candidates = frontier.len(), "grew shape tier");
        }

        let mut canonical = HashMap::with_capacity(frontier.len());
        for &leaf in &frontier {
            let points = path_points(&arena, leaf)?;
            canonical.insert(leaf, canonical_number(&points)?);
        }

        let letters = assign_letters(canonical.values().copied())?;
        let tree = finalize(arena, &canonical, &letters)?;
        let depth = tree.depth();
        if depth + 1 != self.target_size {
            return Err(malformed_tree(&format!(
                "depth {depth} for shapes of {} cells",
                self.target_size
            )));
        }

        debug!(
            nodes = tree.len(),
            depth,
            leaves = frontier.len(),
            shapes = letters.len(),
            "shape tree built"
        );
        Ok(tree)
    }
}

/// Build the pentomino shape tree
///
/// # Errors
///
/// Returns `MalformedTree` if construction does not yield exactly twelve
/// distinct symbols, and propagates any construction error
pub fn build_tree() -> Result<ShapeTree> {
    let tree = TreeBuilder::default().build()?;
    let symbol_count = tree.symbols().len();
    if symbol_count != PENTOMINO_COUNT {
        return Err(malformed_tree(&format!(
            "expected {PENTOMINO_COUNT} pentomino symbols, found {symbol_count}"
        )));
    }
    Ok(tree)
}

fn path_points(arena: &[GrowthNode], index: usize) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut current = Some(index);
    while let Some(position) = current {
        let node = arena.get(position).ok_or(PentominoError::InvalidNodeIndex {
            index: position,
            node_count: arena.len(),
        })?;
        points.push(node.point);
        current = node.parent;
    }
    Ok(points)
}

// First occurrence of a figure within the tier wins
fn grow_tier(arena: &mut Vec<GrowthNode>, frontier: &[usize]) -> Result<Vec<usize>> {
    let mut seen_figures = HashSet::new();
    let mut candidates = Vec::new();

    for &leaf in frontier {
        let path = path_points(arena, leaf)?;
        let leaf_figure = arena.get(leaf).map_or(0, |node| node.figure);

        for point in &path {
            for next in point.next_points() {
                if path.contains(&next) {
                    continue;
                }
                let figure = leaf_figure + point_bit(next)?;
                if seen_figures.insert(figure) {
                    candidates.push(GrowthNode {
                        point: next,
                        parent: Some(leaf),
                        branches: None,
                        figure,
                    });
                }
            }
        }
    }

    // Leaves left without children become internal nodes with no branches
    for &leaf in frontier {
        if let Some(node) = arena.get_mut(leaf) {
            node.branches.get_or_insert_with(Vec::new);
        }
    }

    let first = arena.len();
    for (offset, candidate) in candidates.into_iter().enumerate() {
        if let Some(parent) = candidate.parent.and_then(|index| arena.get_mut(index)) {
            parent.branches.get_or_insert_with(Vec::new).push(first + offset);
        }
        arena.push(candidate);
    }

    Ok((first..arena.len()).collect())
}

// Letters follow ascending canonical numbers, which names the classical shapes
fn assign_letters(canonical: impl Iterator<Item = Figure>) -> Result<HashMap<Figure, char>> {
    let distinct: BTreeSet<Figure> = canonical.collect();
    if distinct.len() > PENTOMINO_SYMBOLS.chars().count() {
        return Err(malformed_tree(&format!(
            "{} canonical shapes exceed the {}-letter alphabet",
            distinct.len(),
            PENTOMINO_SYMBOLS.len()
        )));
    }
    Ok(distinct.into_iter().zip(PENTOMINO_SYMBOLS.chars()).collect())
}

fn finalize(
    arena: Vec<GrowthNode>,
    canonical: &HashMap<usize, Figure>,
    letters: &HashMap<Figure, char>,
) -> Result<ShapeTree> {
    let mut nodes = Vec::with_capacity(arena.len());
    for (index, node) in arena.into_iter().enumerate() {
        let kind = if let Some(branches) = node.branches {
            NodeKind::Internal { branches }
        } else {
            let symbol = canonical
                .get(&index)
                .and_then(|number| letters.get(number))
                .copied()
                .ok_or_else(|| malformed_tree(&format!("leaf {index} has no symbol")))?;
            NodeKind::Leaf { symbol }
        };
        nodes.push(ShapeNode {
            point: node.point,
            parent: node.parent,
            kind,
        });
    }
    ShapeTree::from_nodes(nodes)
}
