//! Shape canonicalization tree and its supporting pieces
//!
//! This module contains:
//! - The symbol alphabet and symbol sets
//! - The fixed point code table and figure values
//! - Symmetry orientations and canonical shape numbers
//! - The arena-backed shape tree and its builder

/// Pentomino letters and bitset-backed symbol sets
pub mod alphabet;
/// Tiered construction of the shape tree
pub mod builder;
/// Point code table and figure values
pub mod figure;
/// Orientation images and canonical numbers
pub mod symmetry;
/// Arena-backed shape tree
pub mod tree;

pub use alphabet::SymbolSet;
pub use builder::build_tree;
pub use tree::{NodeKind, ShapeNode, ShapeTree};
