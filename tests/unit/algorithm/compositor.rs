//! Tests for frame construction and region set composition

#[cfg(test)]
mod tests {
    use metaltile::algorithm::compositor::{compose, frame_ring};
    use metaltile::geometry::{Point, Rect};
    use metaltile::spatial::borders::{BorderSegment, Orientation};
    use metaltile::{LayerTag, RegionSet};

    fn segment(bounds: Rect, orientation: Orientation) -> BorderSegment {
        BorderSegment {
            bounds,
            orientation,
            seeds: (0, 1),
        }
    }

    // Tests the frame is one polygon with a single rectangular hole
    // Verified by returning the outer rectangle without subtracting
    #[test]
    fn test_frame_ring_shape() {
        let frame = frame_ring(10.0, 8.0, 1.0).expect("valid frame");

        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].exterior(), Rect::from_size(10.0, 8.0).corners());
        assert_eq!(frame[0].holes().len(), 1);
        assert!((frame[0].area() - (80.0 - 48.0)).abs() < 1e-9);
        assert!(!frame[0].contains(Point::new(5.0, 4.0)));
        assert!(frame[0].contains(Point::new(0.5, 4.0)));
    }

    // Tests a frame that would close up is rejected
    // Verified by comparing against the line width instead of twice it
    #[test]
    fn test_frame_ring_too_wide() {
        assert!(frame_ring(4.0, 10.0, 2.0).is_err());
        assert!(frame_ring(10.0, 10.0, 0.0).is_err());
        assert!(frame_ring(-1.0, 10.0, 1.0).is_err());
        assert!(frame_ring(4.1, 10.0, 2.0).is_ok());
    }

    // Tests no segments yields the frame alone with the default layer tag
    // Verified by skipping the frame when no segments exist
    #[test]
    fn test_compose_without_segments() {
        let regions = compose(&[], 10.0, 10.0, 1.0).expect("composition succeeds");

        assert_eq!(regions.len(), 1);
        assert!((regions.area() - 36.0).abs() < 1e-9);
        assert_eq!(regions.extent(), Rect::from_size(10.0, 10.0));
        assert_eq!(regions.layer(), LayerTag { layer: 71, datatype: 20 });
        assert_eq!(regions.layer(), LayerTag::default());
        assert_eq!(
            regions.into_polygons(),
            frame_ring(10.0, 10.0, 1.0).expect("valid frame")
        );
    }

    // Tests a segment spanning the interior merges with the frame and splits the hole
    // Verified by appending segments without a union
    #[test]
    fn test_compose_merges_segments() {
        let segments = [segment(Rect::new(4.5, 0.0, 5.5, 10.0), Orientation::Vertical)];
        let regions = compose(&segments, 10.0, 10.0, 1.0).expect("composition succeeds");

        assert_eq!(regions.len(), 1);
        let polygon = &regions.polygons()[0];
        assert_eq!(polygon.holes().len(), 2);
        assert!((regions.area() - 44.0).abs() < 1e-9);
        assert_eq!(regions.bounds(), Some(Rect::from_size(10.0, 10.0)));
    }

    // Tests overlapping segments are counted once
    // Verified by summing segment areas before merging
    #[test]
    fn test_compose_overlapping_segments() {
        let segments = [
            segment(Rect::new(4.5, 1.0, 5.5, 6.0), Orientation::Vertical),
            segment(Rect::new(4.5, 5.0, 5.5, 9.0), Orientation::Vertical),
            segment(Rect::new(1.0, 4.5, 9.0, 5.5), Orientation::Horizontal),
        ];
        let regions = compose(&segments, 10.0, 10.0, 1.0).expect("composition succeeds");

        assert_eq!(regions.len(), 1);
        assert_eq!(regions.polygons()[0].holes().len(), 4);
        // 36 frame + 8 vertical + 8 horizontal - 1 crossing
        assert!((regions.area() - 51.0).abs() < 1e-9);
    }

    // Tests bounds cover the geometry and every polygon stays axis-aligned
    // Verified by reporting bounds from the first polygon only
    #[test]
    fn test_region_set_accessors() {
        let regions: RegionSet = compose(&[], 6.0, 4.0, 0.5).expect("composition succeeds");
        assert!(!regions.is_empty());
        assert_eq!(regions.bounds(), Some(Rect::from_size(6.0, 4.0)));
        assert!(regions
            .polygons()
            .iter()
            .all(metaltile::geometry::Polygon::is_rectilinear));
    }
}
