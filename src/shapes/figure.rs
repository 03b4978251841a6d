//! Point code table and figure values
//!
//! Every valid point within radius 4 of the anchor owns one bit position. A
//! figure value sets the bit of each non-anchor point of a shape, so two point
//! sets share a figure exactly when they contain the same points.

use crate::geometry::Point;
use crate::io::configuration::MAX_CODE_RADIUS;
use crate::io::error::{PentominoError, Result};

/// Figure value of a set of points, a bit per non-anchor point
pub type Figure = u32;

// First code of each radius ring, and the shift that maps its smallest valid row to it
const RING_BASE: [i32; 5] = [0, 0, 2, 6, 12];
const RING_SHIFT: [i32; 5] = [0, 0, 1, 2, 3];

/// Bit position of a point, if it lies within the code table
///
/// Defined for the anchor (code 0, never used in figures) and for every point
/// that passes the scan-order validity rule within the maximum radius.
pub fn point_code(point: Point) -> Option<u32> {
    let radius = point.radius();
    if radius > MAX_CODE_RADIUS || !point.is_valid_location() {
        return None;
    }
    let ring = radius as usize;
    let base = RING_BASE.get(ring)?;
    let shift = RING_SHIFT.get(ring)?;
    u32::try_from(base + point.row + shift).ok()
}

/// Single-bit figure contribution of a non-anchor point
///
/// # Errors
///
/// Returns `PointOutOfRange` if the point has no code
pub fn point_bit(point: Point) -> Result<Figure> {
    point_code(point)
        .and_then(|code| 1_u32.checked_shl(code))
        .ok_or(PentominoError::PointOutOfRange { point })
}

/// Figure value of a point set, ignoring the anchor
///
/// # Errors
///
/// Returns `PointOutOfRange` if any non-anchor point has no code
pub fn figure_of(points: &[Point]) -> Result<Figure> {
    points
        .iter()
        .filter(|&&point| point != Point::ORIGIN)
        .try_fold(0, |figure: Figure, &point| -> Result<Figure> {
            Ok(figure + point_bit(point)?)
        })
}
