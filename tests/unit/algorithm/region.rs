//! Tests for `ConnectedRegion` membership, set equality and bounds

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use treasuregrid::algorithm::region::ConnectedRegion;
    use treasuregrid::spatial::grid::TileCoord;

    fn region(tiles: &[(i32, i32)]) -> ConnectedRegion {
        ConnectedRegion::from_tiles(tiles.iter().map(|&t| TileCoord::from(t)).collect())
    }

    // Verifies an empty region has no tiles, bounds or members
    // Verified by reporting a default bounding box for empty regions
    #[test]
    fn test_empty_region() {
        let empty = ConnectedRegion::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.bounds(), None);
        assert_eq!(empty.seed(), None);
        assert!(!empty.contains(TileCoord::new(0, 0)));
        assert_eq!(empty, ConnectedRegion::from_tiles(Vec::new()));
    }

    // Tests membership inside and around the bounding box
    // Verified by testing membership against the bounding box only
    #[test]
    fn test_contains() {
        let r = region(&[(2, 3), (3, 3), (3, 4)]);
        assert!(r.contains(TileCoord::new(2, 3)));
        assert!(r.contains(TileCoord::new(3, 4)));
        assert!(!r.contains(TileCoord::new(2, 4)));
        assert!(!r.contains(TileCoord::new(1, 3)));
        assert!(!r.contains(TileCoord::new(4, 3)));
        assert!(!r.contains(TileCoord::new(3, 5)));
        assert!(!r.contains(TileCoord::new(-1, -1)));
    }

    // Tests discovery order is preserved and duplicates dropped
    // Verified by pushing every input tile
    #[test]
    fn test_from_tiles_keeps_order_and_drops_duplicates() {
        let r = region(&[(5, 5), (4, 5), (5, 5), (5, 6)]);
        assert_eq!(r.count(), 3);
        assert_eq!(
            r.tiles(),
            &[
                TileCoord::new(5, 5),
                TileCoord::new(4, 5),
                TileCoord::new(5, 6)
            ]
        );
        assert_eq!(r.seed(), Some(TileCoord::new(5, 5)));
    }

    // Tests equality ignores discovery order
    // Verified by deriving PartialEq on the tile vector
    #[test]
    fn test_set_equality() {
        let a = region(&[(0, 0), (1, 0), (1, 1)]);
        let b = region(&[(1, 1), (0, 0), (1, 0)]);
        let c = region(&[(0, 0), (1, 0)]);
        let d = region(&[(0, 0), (1, 0), (0, 1)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    // Tests inclusive bounds and sorted output
    // Verified by making the max corner exclusive
    #[test]
    fn test_bounds_and_sorting() {
        let r = region(&[(3, 1), (2, 2), (3, 2), (3, 0)]);
        assert_eq!(
            r.bounds(),
            Some((TileCoord::new(2, 0), TileCoord::new(3, 2)))
        );
        assert_eq!(
            r.to_sorted_vec(),
            vec![
                TileCoord::new(3, 0),
                TileCoord::new(3, 1),
                TileCoord::new(2, 2),
                TileCoord::new(3, 2)
            ]
        );
    }

    // Tests negative coordinates are representable
    // Verified by casting offsets through u32
    #[test]
    fn test_negative_coordinates() {
        let r = region(&[(-2, -1), (-1, -1)]);
        assert!(r.contains(TileCoord::new(-2, -1)));
        assert!(!r.contains(TileCoord::new(0, -1)));
        assert_eq!(
            r.bounds(),
            Some((TileCoord::new(-2, -1), TileCoord::new(-1, -1)))
        );
    }

    // Tests iteration and display
    // Verified by omitting the tile count from the display string
    #[test]
    fn test_iteration_and_display() {
        let r = region(&[(0, 0), (0, 1)]);
        let collected: HashSet<TileCoord> = (&r).into_iter().copied().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(r.iter().count(), 2);

        let text = r.to_string();
        assert!(text.contains("2 tiles"));
        assert!(text.contains("(0, 0)"));
        assert_eq!(ConnectedRegion::empty().to_string(), "ConnectedRegion(empty)");
    }

    // Tests tiles at the extremes of the coordinate range build a usable region
    // Verified by sizing the membership bitset from the full bounding box
    #[test]
    fn test_far_apart_tiles() {
        let corners = region(&[(i32::MIN, i32::MIN), (i32::MAX, i32::MAX), (i32::MIN, i32::MIN)]);
        assert_eq!(corners.count(), 2);
        assert!(corners.contains(TileCoord::new(i32::MIN, i32::MIN)));
        assert!(corners.contains(TileCoord::new(i32::MAX, i32::MAX)));
        assert!(!corners.contains(TileCoord::new(0, 0)));
        assert_eq!(
            corners.bounds(),
            Some((TileCoord::new(i32::MIN, i32::MIN), TileCoord::new(i32::MAX, i32::MAX)))
        );

        let wide = region(&[(0, 0), (i32::MAX, i32::MAX)]);
        assert_eq!(wide.count(), 2);
        assert!(wide.contains(TileCoord::new(i32::MAX, i32::MAX)));
        assert!(!wide.contains(TileCoord::new(1, 0)));
        assert_eq!(wide.seed(), Some(TileCoord::new(0, 0)));
    }

    // Tests sparse and compact regions with the same tiles compare equal
    // Verified by comparing the membership representations directly
    #[test]
    fn test_sparse_region_equality() {
        let sparse = region(&[(5_000, 0), (0, 0), (0, 5_000), (0, 0)]);
        let same = region(&[(0, 5_000), (5_000, 0), (0, 0)]);
        let compact = region(&[(0, 0), (1, 0)]);

        assert_eq!(sparse.count(), 3);
        assert_eq!(
            sparse.tiles(),
            &[TileCoord::new(5_000, 0), TileCoord::new(0, 0), TileCoord::new(0, 5_000)]
        );
        assert_eq!(sparse, same);
        assert_ne!(sparse, compact);
        assert!(!sparse.contains(TileCoord::new(5_000, 5_000)));
    }
}
