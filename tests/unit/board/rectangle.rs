//! Tests for rectangle size validation and enumeration

#[cfg(test)]
mod tests {
    use pentotile::PentominoError;
    use pentotile::board::RectangleSize;

    // Tests that exactly four rectangles qualify, in row order
    // Verified by including single-row rectangles in all
    #[test]
    fn test_all_sizes() {
        let sizes: Vec<(usize, usize)> = RectangleSize::all()
            .into_iter()
            .map(|size| (size.rows(), size.cols()))
            .collect();
        assert_eq!(sizes, vec![(3, 20), (4, 15), (5, 12), (6, 10)]);
    }

    // Tests explicit construction
    // Verified by swapping rows and columns in new
    #[test]
    fn test_new_accepts_valid_dimensions() {
        let size = RectangleSize::new(5, 12).expect("5x12 is valid");
        assert_eq!(size.rows(), 5);
        assert_eq!(size.cols(), 12);
        assert_eq!(size.to_string(), "5x12");
    }

    // Tests each rejection reason
    // Verified by skipping the area check
    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(matches!(
            RectangleSize::new(5, 11),
            Err(PentominoError::InvalidRectangle { rows: 5, cols: 11, .. })
        ));
        assert!(RectangleSize::new(2, 30).is_err());
        assert!(RectangleSize::new(1, 60).is_err());
        assert!(RectangleSize::new(10, 6).is_err());
        assert!(RectangleSize::new(0, 0).is_err());
    }

    // Tests deriving columns from a row count
    // Verified by computing columns by multiplication
    #[test]
    fn test_from_rows() {
        assert_eq!(
            RectangleSize::from_rows(6).ok(),
            RectangleSize::new(6, 10).ok()
        );
        assert!(RectangleSize::from_rows(0).is_err());
        assert!(RectangleSize::from_rows(7).is_err());
        assert!(RectangleSize::from_rows(2).is_err());
        assert!(RectangleSize::from_rows(10).is_err());
    }

    // Tests ordering by row count
    // Verified by ordering by column count
    #[test]
    fn test_ordering() {
        let small = RectangleSize::from_rows(3).expect("valid");
        let large = RectangleSize::from_rows(6).expect("valid");
        assert!(small < large);
    }
}
