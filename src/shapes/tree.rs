//! Arena-backed shape tree
//!
//! Nodes live in one ordered vector and refer to each other by index. Every
//! child is appended after its parent, so a parent index is always smaller
//! than the indices of its descendants.

use crate::geometry::Point;
use crate::io::error::{PentominoError, Result, malformed_tree};

/// Role of a node in the finished tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Shape not yet at target size, with the indices of its children
    Internal {
        /// Child node indices in creation order
        branches: Vec<usize>,
    },
    /// Completed shape orientation tagged with its pentomino letter
    Leaf {
        /// Letter of the free pentomino this orientation belongs to
        symbol: char,
    },
}

/// One node of the shape tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeNode {
    /// Cell this node adds, relative to the anchor
    pub point: Point,
    /// Index of the node that spawned this one (`None` for the root)
    pub parent: Option<usize>,
    /// Internal or leaf payload
    pub kind: NodeKind,
}

impl ShapeNode {
    /// Letter of a leaf node
    pub const fn symbol(&self) -> Option<char> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Children of an internal node (empty for leaves)
    pub const fn branches(&self) -> &[usize] {
        match &self.kind {
            NodeKind::Internal { branches } => branches.as_slice(),
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Check whether this node completes a shape
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Immutable tree of every anchored pentomino orientation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeTree {
    nodes: Vec<ShapeNode>,
}

impl ShapeTree {
    /// Wrap an ordered node arena
    ///
    /// # Errors
    ///
    /// Returns `MalformedTree` if the first node is not a root, or if any
    /// other node does not point to an earlier parent
    pub fn from_nodes(nodes: Vec<ShapeNode>) -> Result<Self> {
        for (index, node) in nodes.iter().enumerate() {
            let consistent = node.parent.map_or(index == 0, |parent| parent < index);
            if !consistent {
                return Err(malformed_tree(&format!(
                    "node {index} has parent {:?}",
                    node.parent
                )));
            }
        }
        Ok(Self { nodes })
    }

    /// Number of nodes
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds no nodes
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[ShapeNode] {
        &self.nodes
    }

    /// Node at an index
    pub fn node(&self, index: usize) -> Option<&ShapeNode> {
        self.nodes.get(index)
    }

    /// Leaf nodes with their indices, in arena order
    pub fn leaves(&self) -> impl Iterator<Item = (usize, &ShapeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
    }

    /// Indices from a node up to the root, the node itself first
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeIndex` if the index or any ancestor link is out of range
    pub fn lineage(&self, index: usize) -> Result<Vec<usize>> {
        let mut lineage = Vec::new();
        let mut current = Some(index);
        while let Some(position) = current {
            let node = self.nodes.get(position).ok_or(PentominoError::InvalidNodeIndex {
                index: position,
                node_count: self.nodes.len(),
            })?;
            lineage.push(position);
            current = node.parent;
        }
        Ok(lineage)
    }

    /// Points on the path from a node up to the root, the node's own point first
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeIndex` if the index is out of range
    pub fn path(&self, index: usize) -> Result<Vec<Point>> {
        Ok(self
            .lineage(index)?
            .into_iter()
            .filter_map(|position| self.nodes.get(position).map(|node| node.point))
            .collect())
    }

    /// Distinct leaf symbols in order of first appearance
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols = Vec::new();
        for (_, leaf) in self.leaves() {
            if let Some(symbol) = leaf.symbol()
                && !symbols.contains(&symbol)
            {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Number of edges on the longest root-to-node path
    pub fn depth(&self) -> usize {
        let mut depths: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let depth = node
                .parent
                .and_then(|parent| depths.get(parent))
                .map_or(0, |parent_depth| parent_depth + 1);
            depths.push(depth);
        }
        depths.into_iter().max().unwrap_or(0)
    }
}
