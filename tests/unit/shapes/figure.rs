//! Tests for the point code table and figure values

#[cfg(test)]
mod tests {
    use pentotile::PentominoError;
    use pentotile::geometry::Point;
    use pentotile::shapes::figure::{figure_of, point_bit, point_code};
    use std::collections::HashSet;

    // Tests known codes on each radius ring
    // Verified by using the radius offset table for the row term
    #[test]
    fn test_point_code_table() {
        assert_eq!(point_code(Point::ORIGIN), Some(0));
        assert_eq!(point_code(Point::new(0, 1)), Some(0));
        assert_eq!(point_code(Point::new(1, 0)), Some(1));
        assert_eq!(point_code(Point::new(-1, 1)), Some(2));
        assert_eq!(point_code(Point::new(0, 2)), Some(3));
        assert_eq!(point_code(Point::new(1, 1)), Some(4));
        assert_eq!(point_code(Point::new(2, 0)), Some(5));
        assert_eq!(point_code(Point::new(-2, 1)), Some(6));
        assert_eq!(point_code(Point::new(3, 0)), Some(11));
        assert_eq!(point_code(Point::new(-3, 1)), Some(12));
        assert_eq!(point_code(Point::new(4, 0)), Some(19));
    }

    // Tests that invalid or distant points have no code
    // Verified by accepting radius 5 points in point_code
    #[test]
    fn test_point_code_out_of_range() {
        assert_eq!(point_code(Point::new(0, -1)), None);
        assert_eq!(point_code(Point::new(-1, 0)), None);
        assert_eq!(point_code(Point::new(5, 0)), None);
        assert_eq!(point_code(Point::new(-2, 3)), None);
    }

    // Tests that the twenty non-anchor points within radius 4 get distinct codes 0..20
    // Verified by dropping the column sign term from the code
    #[test]
    fn test_point_codes_are_injective() {
        let mut codes = HashSet::new();
        let mut count = 0;
        for row in -4..=4 {
            for col in 0..=4 {
                let point = Point::new(row, col);
                if point == Point::ORIGIN {
                    continue;
                }
                if let Some(code) = point_code(point) {
                    assert!(code < 20, "{point} has code {code}");
                    codes.insert(code);
                    count += 1;
                }
            }
        }
        assert_eq!(count, 20);
        assert_eq!(codes.len(), 20);
    }

    // Tests bit conversion and its error
    // Verified by returning bit zero for points outside the table
    #[test]
    fn test_point_bit() {
        assert_eq!(point_bit(Point::new(1, 1)).ok(), Some(1 << 4));
        assert!(matches!(
            point_bit(Point::new(0, -2)),
            Err(PentominoError::PointOutOfRange { .. })
        ));
    }

    // Tests that the anchor is ignored and order does not matter
    // Verified by including the anchor in figure_of
    #[test]
    fn test_figure_of() {
        let forward = [Point::ORIGIN, Point::new(0, 1), Point::new(1, 0)];
        let backward = [Point::new(1, 0), Point::new(0, 1), Point::ORIGIN];

        assert_eq!(figure_of(&forward).ok(), Some(0b11));
        assert_eq!(figure_of(&backward).ok(), Some(0b11));
        assert_eq!(figure_of(&[Point::ORIGIN]).ok(), Some(0));
        assert!(figure_of(&[Point::ORIGIN, Point::new(0, -1)]).is_err());
    }
}
