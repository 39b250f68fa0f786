//! Tests for points and axis-aligned rectangles

#[cfg(test)]
mod tests {
    use metaltile::geometry::{Point, Rect};

    // Tests squared distance uses both axes
    // Verified by dropping the y term
    #[test]
    fn test_distance_squared() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_squared(b) - 25.0).abs() < 1e-12);
        assert!((b.distance_squared(a) - 25.0).abs() < 1e-12);
        assert!(a.distance_squared(a).abs() < 1e-12);
    }

    // Tests non-finite coordinates are detected
    // Verified by checking only the x coordinate
    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(0.0, -3.5).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    // Tests corners are normalised regardless of argument order
    // Verified by storing corners as given
    #[test]
    fn test_rect_new_normalises_corners() {
        let rect = Rect::new(5.0, 4.0, 1.0, 2.0);
        assert_eq!(rect.min, Point::new(1.0, 2.0));
        assert_eq!(rect.max, Point::new(5.0, 4.0));
        assert!((rect.width() - 4.0).abs() < 1e-12);
        assert!((rect.height() - 2.0).abs() < 1e-12);
        assert!((rect.area() - 8.0).abs() < 1e-12);
        assert_eq!(rect.center(), Point::new(3.0, 3.0));
    }

    // Tests zero-width rectangles are empty
    // Verified by requiring both extents to be zero
    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::new(1.0, 0.0, 1.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 2.0, 3.0, 2.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }

    // Tests containment includes the boundary
    // Verified by using strict comparisons
    #[test]
    fn test_rect_contains_boundary() {
        let rect = Rect::from_size(2.0, 1.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(2.0, 1.0)));
        assert!(rect.contains(Point::new(1.0, 0.5)));
        assert!(!rect.contains(Point::new(2.1, 0.5)));
        assert!(!rect.contains(Point::new(1.0, -0.1)));
    }

    // Tests enclosure honours the tolerance
    // Verified by ignoring the tolerance argument
    #[test]
    fn test_rect_encloses_with_tolerance() {
        let outer = Rect::from_size(10.0, 10.0);
        let slightly_out = Rect::new(-1e-10, 0.0, 10.0, 10.0 + 1e-10);
        assert!(outer.encloses(&Rect::new(1.0, 1.0, 9.0, 9.0), 0.0));
        assert!(!outer.encloses(&slightly_out, 0.0));
        assert!(outer.encloses(&slightly_out, 1e-9));
    }

    // Tests union covers both rectangles
    // Verified by taking the min of the max corners
    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, -1.0, 3.0, 0.5);
        let both = a.union(&b);
        assert_eq!(both, Rect::new(0.0, -1.0, 3.0, 1.0));
    }

    // Tests the corner ring is counter-clockwise from the lower-left
    // Verified by swapping the second and fourth corners
    #[test]
    fn test_rect_corners_counter_clockwise() {
        let corners = Rect::new(0.0, 0.0, 2.0, 1.0).corners();
        assert_eq!(
            corners,
            [
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
    }
}
