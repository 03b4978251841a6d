//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pentotile::PentominoError;
    use pentotile::geometry::Point;
    use pentotile::io::error::{invalid_parameter, invalid_rectangle, malformed_tree};
    use std::error::Error;

    // Tests error source chaining for file system errors
    // Verified by returning None from source for FileSystem
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = PentominoError::FileSystem {
            path: "/tmp/out".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/out"));
    }

    // Tests placement messages carry the point and board size
    // Verified by omitting the board size from the message
    #[test]
    fn test_placement_out_of_bounds_message() {
        let error = PentominoError::PlacementOutOfBounds {
            point: Point::new(3, -1),
            dimensions: (3, 20),
        };
        assert_eq!(
            error.to_string(),
            "Placement cell (3, -1) is outside the 3x20 board"
        );
    }

    // Tests helper constructors
    // Verified by building InvalidParameter from invalid_rectangle
    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("cell_pixels", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'cell_pixels' = '0': must be positive"
        );

        let error = invalid_rectangle(7, 0, &"row count must divide 60");
        assert!(matches!(
            error,
            PentominoError::InvalidRectangle { rows: 7, cols: 0, .. }
        ));
        assert_eq!(error.to_string(), "Invalid rectangle 7x0: row count must divide 60");

        let error = malformed_tree(&"leaf 3 has no symbol");
        assert_eq!(error.to_string(), "Malformed shape tree: leaf 3 has no symbol");
        assert!(error.source().is_none());
    }

    // Tests node index messages
    // Verified by printing the node count as the index
    #[test]
    fn test_invalid_node_index_message() {
        let error = PentominoError::InvalidNodeIndex {
            index: 95,
            node_count: 91,
        };
        let message = error.to_string();
        assert!(message.contains("95"));
        assert!(message.contains("91 nodes"));
    }

    // Tests conversion from stream errors
    // Verified by mapping stream errors to InvalidParameter
    #[test]
    fn test_from_io_error() {
        let error: PentominoError = std::io::Error::other("broken pipe").into();
        assert!(matches!(error, PentominoError::FileSystem { .. }));
        assert!(error.to_string().contains("broken pipe"));
    }
}
