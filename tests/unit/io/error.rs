//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use treasuregrid::MapError;
    use treasuregrid::io::error::invalid_parameter;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MapError::FileSystem {
            path: "/tmp/map.js".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/map.js"));
    }

    // Tests NonRectangular error formatting
    // Verified by omitting the row index from the message
    #[test]
    fn test_non_rectangular_error() {
        let error = MapError::NonRectangular {
            row: 3,
            expected: 70,
            found: 69,
        };

        let message = error.to_string();
        assert!(message.contains("row 3"));
        assert!(message.contains("69"));
        assert!(message.contains("70"));
        assert!(error.source().is_none());
    }

    // Tests GridTooLarge error formatting
    // Verified by printing only the limit
    #[test]
    fn test_grid_too_large_error() {
        let error = MapError::GridTooLarge {
            dimensions: (20_000, 5),
            limit: 10_000,
        };

        let message = error.to_string();
        assert!(message.contains("20000x5"));
        assert!(message.contains("10000"));
    }

    // Tests CollisionParse error contains token, entry and path
    // Verified by omitting the token from the message
    #[test]
    fn test_collision_parse_error() {
        let error = MapError::CollisionParse {
            path: PathBuf::from("town.js"),
            entry: 12,
            token: "abc".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("abc"));
        assert!(message.contains("12"));
        assert!(message.contains("town.js"));
    }

    // Tests InvalidParameter helper carries all fields
    // Verified by dropping the reason
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = MapError::ImageExport {
            path: PathBuf::from("/readonly/overlay.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("overlay.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests From conversions pick the matching variant
    // Verified by mapping I/O errors to InvalidParameter
    #[test]
    fn test_from_conversions() {
        let from_io: MapError = std::io::Error::other("boom").into();
        assert!(matches!(from_io, MapError::FileSystem { .. }));

        let from_image: MapError =
            image::ImageError::IoError(std::io::Error::other("boom")).into();
        assert!(matches!(from_image, MapError::ImageExport { .. }));
    }
}
