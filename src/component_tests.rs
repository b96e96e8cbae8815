//! Component tests for `KdTreePointTable` - testing each operation individually

#[cfg(test)]
mod tests {
    use crate::{KdTreePointTable, Point, PointTable, PointTableError, Rect};

    fn grid(n: i32) -> KdTreePointTable<(i32, i32)> {
        let mut table = KdTreePointTable::new();
        // odd columns first so the tree does not degenerate into a path
        for i in (0..n).filter(|c| c % 2 == 1).chain((0..n).filter(|c| c % 2 == 0)) {
            for j in 0..n {
                table.put(Point::new(f64::from(i), f64::from(j)), (i, j)).unwrap();
            }
        }
        table
    }

    // ============================================================================
    // BASIC INITIALIZATION TESTS
    // ============================================================================

    #[test]
    fn test_new_table() {
        let table = KdTreePointTable::<String>::new();
        assert!(table.is_empty(), "New table should be empty");
        assert_eq!(table.len(), 0);
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn test_default_table() {
        let table: KdTreePointTable<u8> = KdTreePointTable::default();
        assert!(table.is_empty(), "Default table should be empty");
    }

    // ============================================================================
    // PUT OPERATION TESTS
    // ============================================================================

    #[test]
    fn test_put_single_point() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(10.0, 20.0), "a").unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn test_put_multiple_points() {
        let table = grid(10);
        assert_eq!(table.len(), 100);
    }

    #[test]
    fn test_put_duplicate_point_overwrites() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(1.0, 1.0), 1).unwrap();
        table.put(Point::new(1.0, 1.0), 2).unwrap();
        assert_eq!(table.len(), 1, "Re-insert should not grow the table");
        assert_eq!(table.get(Point::new(1.0, 1.0)).unwrap(), Some(&2));
    }

    #[test]
    fn test_put_negative_zero_matches_zero() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(0.0, 0.0), 1).unwrap();
        table.put(Point::new(-0.0, -0.0), 2).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Point::new(0.0, 0.0)).unwrap(), Some(&2));
    }

    #[test]
    fn test_put_negative_and_extreme_coordinates() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(-100.0, -50.0), 'a').unwrap();
        table.put(Point::new(f64::MAX, 0.0), 'b').unwrap();
        table.put(Point::new(0.0, f64::MIN), 'c').unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(Point::new(f64::MAX, 0.0)).unwrap(), Some(&'b'));
        assert_eq!(table.get(Point::new(0.0, f64::MIN)).unwrap(), Some(&'c'));

        // both other points are so far away that the squared distance overflows
        let query = Point::new(-100.0, -50.0);
        assert!(table.nearest(query).unwrap().is_some(), "a neighbour must be found");
        assert_eq!(table.nearest_k(query, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_put_infinite_rejected() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(1.0, 1.0), 1).unwrap();
        for bad in [Point::new(f64::INFINITY, 0.0), Point::new(0.0, f64::NEG_INFINITY)] {
            let err = table.put(bad, 2).unwrap_err();
            assert!(
                matches!(err, PointTableError::InvalidPoint { op: "put", .. }),
                "unexpected error {err:?}"
            );
        }
        assert_eq!(table.len(), 1, "Failed put must not change the table");
    }

    #[test]
    fn test_put_nan_rejected() {
        let mut table = KdTreePointTable::new();
        table.put(Point::new(1.0, 1.0), 1).unwrap();
        let err = table.put(Point::new(1.0, f64::NAN), 2).unwrap_err();
        assert!(
            matches!(err, PointTableError::InvalidPoint { op: "put", .. }),
            "unexpected error {err:?}"
        );
        assert_eq!(table.len(), 1, "Failed put must not change the table");
        assert_eq!(table.height(), 1);
    }

    // ============================================================================
    // GET / CONTAINS TESTS
    // ============================================================================

    #[test]
    fn test_get_every_inserted_point() {
        let table = grid(8);
        for i in 0..8 {
            for j in 0..8 {
                let p = Point::new(f64::from(i), f64::from(j));
                assert_eq!(table.get(p).unwrap(), Some(&(i, j)), "lookup of {p}");
                assert!(table.contains(p).unwrap());
            }
        }
    }

    #[test]
    fn test_get_missing_point() {
        let table = grid(4);
        assert_eq!(table.get(Point::new(1.5, 1.0)).unwrap(), None);
        assert_eq!(table.get(Point::new(1.0, 1.5)).unwrap(), None);
        assert!(!table.contains(Point::new(-1.0, 0.0)).unwrap());
        assert!(!KdTreePointTable::<u8>::new().contains(Point::new(0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_get_follows_y_splits() {
        // Second level splits on y; the lookups must take both y branches.
        let mut table = KdTreePointTable::new();
        table.put(Point::new(0.5, 0.5), 0).unwrap();
        table.put(Point::new(0.2, 0.5), 1).unwrap();
        table.put(Point::new(0.1, 0.9), 2).unwrap();
        table.put(Point::new(0.3, 0.1), 3).unwrap();
        assert_eq!(table.get(Point::new(0.1, 0.9)).unwrap(), Some(&2));
        assert_eq!(table.get(Point::new(0.3, 0.1)).unwrap(), Some(&3));
    }

    #[test]
    fn test_get_nan_rejected() {
        let table = grid(2);
        assert!(table.get(Point::new(f64::NAN, f64::NAN)).is_err());
        assert!(table.contains(Point::new(f64::NAN, 0.0)).is_err());
    }

    // ============================================================================
    // POINTS TESTS
    // ============================================================================

    #[test]
    fn test_points_visits_each_once() {
        let table = grid(6);
        let mut points: Vec<Point> = table.points().collect();
        assert_eq!(points.len(), 36);
        points.sort();
        points.dedup();
        assert_eq!(points.len(), 36, "points() yielded a duplicate");
    }

    #[test]
    fn test_points_is_restartable() {
        let table = grid(3);
        assert_eq!(table.points().count(), table.points().count());
    }

    // ============================================================================
    // RANGE TESTS
    // ============================================================================

    #[test]
    fn test_range_empty_table() {
        let table = KdTreePointTable::<u8>::new();
        assert!(table.range(&Rect::everything()).unwrap().is_empty());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let table = grid(5);
        let mut hits = table.range(&Rect::new(1.0, 1.0, 2.0, 2.0)).unwrap();
        hits.sort();
        assert_eq!(
            hits,
            vec![
                Point::new(1.0, 1.0),
                Point::new(1.0, 2.0),
                Point::new(2.0, 1.0),
                Point::new(2.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_range_degenerate_rects() {
        let table = grid(5);
        let mut column = table.range(&Rect::new(3.0, 0.0, 3.0, 4.0)).unwrap();
        column.sort();
        assert_eq!(column.len(), 5, "zero-width rectangle covers one column");
        assert!(column.iter().all(|p| p.x() == 3.0));

        let row = table.range(&Rect::new(-10.0, 2.0, 10.0, 2.0)).unwrap();
        assert_eq!(row.len(), 5, "zero-height rectangle covers one row");

        let single = table.range(&Rect::new(4.0, 4.0, 4.0, 4.0)).unwrap();
        assert_eq!(single, vec![Point::new(4.0, 4.0)]);
    }

    #[test]
    fn test_range_outside_cloud() {
        let table = grid(5);
        assert!(table.range(&Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap().is_empty());
        assert!(table.range(&Rect::new(0.5, 0.5, 0.7, 3.9)).unwrap().is_empty());
    }

    #[test]
    fn test_range_whole_plane() {
        let table = grid(5);
        assert_eq!(table.range(&Rect::everything()).unwrap().len(), 25);
    }

    #[test]
    fn test_range_nan_rejected() {
        let table = grid(2);
        assert!(matches!(
            table.range(&Rect::new(0.0, 0.0, 1.0, f64::NAN)),
            Err(PointTableError::InvalidRect { op: "range", .. })
        ));
    }

    // ============================================================================
    // NEAREST TESTS
    // ============================================================================

    #[test]
    fn test_nearest_empty_and_single() {
        let mut table = KdTreePointTable::new();
        assert_eq!(table.nearest(Point::new(0.0, 0.0)).unwrap(), None);

        table.put(Point::new(2.0, 2.0), ()).unwrap();
        assert_eq!(table.nearest(Point::new(2.0, 2.0)).unwrap(), None, "Only the query itself");
        assert_eq!(
            table.nearest(Point::new(-5.0, 7.0)).unwrap(),
            Some(Point::new(2.0, 2.0))
        );
    }

    #[test]
    fn test_nearest_skips_query_point() {
        let table = grid(5);
        let nearest = table.nearest(Point::new(2.0, 2.0)).unwrap().unwrap();
        assert_ne!(nearest, Point::new(2.0, 2.0));
        assert_eq!(nearest.distance_squared_to(Point::new(2.0, 2.0)), 1.0);
    }

    #[test]
    fn test_nearest_across_split() {
        // The query falls on the upper side of the root split, its closest
        // point on the lower side.
        let mut table = KdTreePointTable::new();
        table.put(Point::new(0.5, 0.5), 0).unwrap();
        table.put(Point::new(0.1, 0.5), 1).unwrap();
        table.put(Point::new(0.51, 0.9), 2).unwrap();
        table.put(Point::new(0.49, 0.95), 3).unwrap();
        assert_eq!(
            table.nearest(Point::new(0.505, 0.95)).unwrap(),
            Some(Point::new(0.49, 0.95))
        );
    }

    #[test]
    fn test_nearest_nan_rejected() {
        assert!(grid(2).nearest(Point::new(f64::NAN, 0.0)).is_err());
    }

    // ============================================================================
    // NEAREST K TESTS
    // ============================================================================

    #[test]
    fn test_nearest_k_zero() {
        assert!(grid(3).nearest_k(Point::new(1.0, 1.0), 0).unwrap().is_empty());
    }

    #[test]
    fn test_nearest_k_empty_table() {
        let table = KdTreePointTable::<u8>::new();
        assert!(table.nearest_k(Point::new(1.0, 1.0), 5).unwrap().is_empty());
    }

    #[test]
    fn test_nearest_k_more_than_available() {
        let table = grid(3);
        let all = table.nearest_k(Point::new(1.0, 1.0), 100).unwrap();
        assert_eq!(all.len(), 8, "Every point but the query itself");
        assert!(!all.contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_nearest_k_closest_first() {
        let table = grid(9);
        let query = Point::new(4.2, 4.1);
        let found = table.nearest_k(query, 5).unwrap();
        assert_eq!(found.len(), 5);
        for pair in found.windows(2) {
            assert!(
                query.distance_squared_to(pair[0]) <= query.distance_squared_to(pair[1]),
                "{} listed before {}",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(
            found[..4],
            [
                Point::new(4.0, 4.0),
                Point::new(5.0, 4.0),
                Point::new(4.0, 5.0),
                Point::new(4.0, 3.0),
            ]
        );
        // (3, 4) and (5, 5) tie for fifth
        assert!(query.distance_squared_to(found[4]) < 1.5);
    }

    #[test]
    fn test_nearest_k_nan_rejected() {
        assert!(grid(2).nearest_k(Point::new(0.0, f64::NAN), 1).is_err());
    }

    // ============================================================================
    // EXTEND / CLONE TESTS
    // ============================================================================

    #[test]
    fn test_extend_and_clone() {
        let mut table = grid(2);
        table.extend([(Point::new(9.0, 9.0), (9, 9)), (Point::new(f64::NAN, 1.0), (0, 0))]);
        assert_eq!(table.len(), 5, "NaN entry should be skipped");

        let copy = table.clone();
        table.put(Point::new(10.0, 10.0), (10, 10)).unwrap();
        assert_eq!(copy.len(), 5, "Clone is independent");
        assert!(!copy.contains(Point::new(10.0, 10.0)).unwrap());
    }
}
