//! Geometry primitives shared by the shape tree and the boards

/// Integer grid points with 4-directional neighbors
pub mod point;

pub use point::Point;
