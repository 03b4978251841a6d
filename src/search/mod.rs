//! Backtracking search over seeded boards
//!
//! Each board passes through the hole check, the symmetry check and the
//! completion check before its candidate placements are expanded.

/// Hole-size validity check
pub mod holes;
/// Candidate placements at a board's anchor square
pub mod placements;
/// Recursive solver and whole-run orchestration
pub mod solver;
/// Mirror-duplicate elimination
pub mod symmetry;

pub use holes::holes_valid;
pub use placements::find_placements;
pub use solver::{SearchMode, SearchStats, Solver, solve_all, solve_rectangle};
pub use symmetry::symmetry_pruned;
