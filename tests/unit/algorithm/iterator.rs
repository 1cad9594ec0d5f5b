//! Tests for the contraction recurrence and point cloud assembly

#[cfg(test)]
mod tests {
    use chaosgame::algorithm::iterator::{AttractorIterator, generate_point_cloud};
    use chaosgame::AlgorithmError;
    use chaosgame::algorithm::sampler::CornerSequence;
    use chaosgame::spatial::Polygon;

    fn walk<'a>(
        sequence: &'a CornerSequence,
        vertices: &'a Polygon,
        scale: f64,
        starting_pos: [f64; 2],
    ) -> AttractorIterator<'a> {
        let Ok(iter) = AttractorIterator::new(sequence, vertices, scale, starting_pos) else {
            unreachable!("in-range sequence rejected");
        };
        iter
    }

    fn triangle() -> Polygon {
        let Ok(polygon) = Polygon::generate(3, false) else {
            unreachable!("board generation failed");
        };
        polygon
    }

    // Tests the first point is the starting position and later points follow the recurrence exactly
    // Verified by contracting toward the previous corner
    #[test]
    fn test_recurrence_is_exact() {
        let vertices = triangle();
        let sequence = CornerSequence::from_indices(vec![2, 1, 3, 3, 2, 1, 1, 2, 3]);

        let points: Vec<[f64; 2]> =
            walk(&sequence, &vertices, 0.5, [0.0, 0.0]).collect();

        assert_eq!(points.len(), 9);
        assert_eq!(points[0], [0.0, 0.0]);
        for i in 1..points.len() {
            let Some(corner) = vertices.corner(sequence.as_slice()[i]) else {
                unreachable!("index out of range");
            };
            let prev = points[i - 1];
            let expected = [
                0.5 * prev[0] + 0.5 * corner[0],
                0.5 * prev[1] + 0.5 * corner[1],
            ];
            assert_eq!(points[i], expected);
        }
    }

    // Tests a scale of one never moves the point
    // Verified by swapping the roles of scale and 1 - scale
    #[test]
    fn test_unit_scale_stays_put() {
        let vertices = triangle();
        let sequence = CornerSequence::from_indices(vec![1, 2, 3, 1, 2]);

        let points: Vec<[f64; 2]> =
            walk(&sequence, &vertices, 1.0, [0.25, -0.5]).collect();

        assert!(points.iter().all(|&p| p == [0.25, -0.5]));
    }

    // Tests a tiny scale snaps the point onto the chosen corner
    // Verified by ignoring the chosen corner
    #[test]
    fn test_tiny_scale_snaps_to_corner() {
        let vertices = triangle();
        let sequence = CornerSequence::from_indices(vec![1, 2]);

        let points: Vec<[f64; 2]> =
            walk(&sequence, &vertices, 1e-12, [0.0, 0.0]).collect();
        let Some(corner) = vertices.corner(2) else {
            unreachable!("missing corner");
        };

        assert!((points[1][0] - corner[0]).abs() < 1e-9);
        assert!((points[1][1] - corner[1]).abs() < 1e-9);
    }

    // Tests the walk reports its exact length
    // Verified by yielding an extra trailing point
    #[test]
    fn test_exact_size() {
        let vertices = triangle();
        let sequence = CornerSequence::from_indices(vec![3; 17]);

        let points = walk(&sequence, &vertices, 0.5, [0.0, 0.0]);
        assert_eq!(points.len(), 17);
        assert_eq!(points.count(), 17);
    }

    // Tests indices off the board fail before the walk starts
    // Verified by skipping off-board indices and keeping the position
    #[test]
    fn test_off_board_index_rejected() {
        let vertices = triangle();

        for bad in [0, 4] {
            let sequence = CornerSequence::from_indices(vec![1, 2, bad, 3]);

            assert!(matches!(
                AttractorIterator::new(&sequence, &vertices, 0.5, [0.0, 0.0]),
                Err(AlgorithmError::InvalidParameter {
                    parameter: "corner_index",
                    ..
                })
            ));
            assert!(
                generate_point_cloud(&sequence, &vertices, 0.5, [0.0, 0.0], 1, |_| {}).is_err()
            );
        }
    }

    // Tests the contraction helper moves the right fraction of the distance
    // Verified by moving scale instead of 1 - scale toward the corner
    #[test]
    fn test_contract() {
        let moved = AttractorIterator::contract([0.0, 0.0], [1.0, 2.0], 0.25);
        assert_eq!(moved, [0.75, 1.5]);
    }

    // Tests point cloud shape, contents and progress notifications
    // Verified by dropping the final observer call
    #[test]
    fn test_generate_point_cloud() {
        let vertices = triangle();
        let sequence = CornerSequence::from_indices(vec![1, 2, 3, 1, 2, 3, 1]);
        let mut reports = Vec::new();

        let Ok(cloud) =
            generate_point_cloud(&sequence, &vertices, 0.5, [0.1, 0.2], 3, |n| reports.push(n))
        else {
            unreachable!("point cloud assembly failed");
        };

        assert_eq!(cloud.dim(), (7, 2));
        assert_eq!(cloud.get([0, 0]), Some(&0.1));
        assert_eq!(cloud.get([0, 1]), Some(&0.2));
        assert_eq!(reports, vec![3, 6, 7]);

        let walked: Vec<[f64; 2]> =
            walk(&sequence, &vertices, 0.5, [0.1, 0.2]).collect();
        for (row, point) in cloud.rows().into_iter().zip(walked) {
            assert_eq!(row.to_vec(), point.to_vec());
        }
    }

    // Tests an empty sequence yields an empty cloud
    // Verified by always emitting the starting position
    #[test]
    fn test_empty_sequence() {
        let vertices = triangle();
        let sequence = CornerSequence::default();

        let Ok(cloud) = generate_point_cloud(&sequence, &vertices, 0.5, [0.0, 0.0], 0, |_| {})
        else {
            unreachable!("point cloud assembly failed");
        };

        assert_eq!(cloud.dim(), (0, 2));
    }
}
