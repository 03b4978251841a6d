//! Exhaustive enumeration of pentomino rectangle tilings
//!
//! A canonical shape tree describing every anchored orientation of the twelve
//! free pentominoes is built once, then a pruned backtracking search consumes it
//! to fill every 60-cell rectangle, with the X pentomino pre-seeded.

#![forbid(unsafe_code)]

/// Rectangular boards, placement of pentominoes and initial seeding
pub mod board;
/// Grid points and neighbor enumeration
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Backtracking search with hole and symmetry pruning
pub mod search;
/// Shape canonicalization tree construction
pub mod shapes;

pub use io::error::{PentominoError, Result};
