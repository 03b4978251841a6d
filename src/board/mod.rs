//! Rectangular boards and pentomino placement
//!
//! This module contains:
//! - Rectangle size validation and enumeration
//! - The immutable board value and its next-empty-square rule
//! - Stamping a shape tree leaf onto a board
//! - Initial boards seeded with the X pentomino

/// Immutable board grid
pub mod grid;
/// Stamping pentominoes onto boards
pub mod placement;
/// Rectangle dimensions of area 60
pub mod rectangle;
/// X-pentomino seeded initial boards
pub mod seeding;

pub use grid::Board;
pub use placement::place;
pub use rectangle::RectangleSize;
pub use seeding::initial_boards;
