//! Orientation images and canonical shape numbers
//!
//! The eight images of a shape come from an optional diagonal transpose
//! followed by row and column sign flips. Each image is re-anchored so the
//! minimum column is 0 and, within column 0, the minimum row is 0; the anchor
//! then always belongs to the image and every point passes the validity rule.

use crate::geometry::Point;
use crate::io::error::{Result, invalid_parameter};
use crate::shapes::figure::{Figure, figure_of};

/// Number of symmetry images of a planar shape
pub const ORIENTATION_COUNT: usize = 8;

/// Apply orientation `index` (taken modulo 8) and re-anchor the result
pub fn orient(points: &[Point], index: usize) -> Vec<Point> {
    let turn = index % ORIENTATION_COUNT;
    let rotation = turn % 4;

    let oriented: Vec<Point> = points
        .iter()
        .map(|&point| {
            let mut image = if turn >= 4 {
                Point::new(point.col, point.row)
            } else {
                point
            };
            if rotation % 2 == 0 {
                image.row = -image.row;
            }
            if rotation > 1 {
                image.col = -image.col;
            }
            image
        })
        .collect();

    normalize(&oriented)
}

/// Translate a shape so its minimum column is 0 and its column-0 minimum row is 0
pub fn normalize(points: &[Point]) -> Vec<Point> {
    let Some(min_col) = points.iter().map(|point| point.col).min() else {
        return Vec::new();
    };
    let min_row = points
        .iter()
        .filter(|point| point.col == min_col)
        .map(|point| point.row)
        .min()
        .unwrap_or(0);

    let anchor = Point::new(-min_row, -min_col);
    points.iter().map(|&point| point.offset(anchor)).collect()
}

/// All eight re-anchored images of a shape
pub fn orientations(points: &[Point]) -> Vec<Vec<Point>> {
    (0..ORIENTATION_COUNT)
        .map(|index| orient(points, index))
        .collect()
}

/// Minimum figure value over the eight images of a shape
///
/// Identical for every orientation of the same free polyomino.
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty shape, and `PointOutOfRange` if
/// an image reaches beyond the code table, which happens only for shapes
/// larger than a pentomino
pub fn canonical_number(points: &[Point]) -> Result<Figure> {
    if points.is_empty() {
        return Err(invalid_parameter("points", &0, &"shape has no points"));
    }

    let mut best = Figure::MAX;
    for image in orientations(points) {
        best = best.min(figure_of(&image)?);
    }
    Ok(best)
}
