use geo::{HaversineDistance, HaversineLength};

/// Side of a street centerline, seen along the direction of the projection
/// edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Single-letter tag used in the persisted rows.
    pub fn letter(&self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

/// Result of projecting a point onto a linestring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Index of the edge the foot lies on.
    pub edge_index: usize,
    /// The edge itself, kept for the side computation.
    pub edge: geo::Line,
    /// Closest point on the linestring to the query point.
    pub foot: geo::Coord,
    /// Haversine distance from the query point to the foot, in meters.
    pub distance: f64,
}

/// Project `point` onto the closest edge of `line`.
///
/// The foot of perpendicular is computed per edge in lon/lat space, clamped
/// to the segment endpoints; candidate feet are compared by haversine
/// distance to the query point, ties resolving to the lowest edge index.
/// Returns `None` when the line has fewer than two distinct consecutive
/// vertices.
pub fn project_onto_line(line: &geo::LineString, point: geo::Coord) -> Option<Projection> {
    if 2 > line.coords().count() {
        return None;
    }
    let mut best: Option<Projection> = None;
    for (edge_index, edge) in line.lines().enumerate() {
        if edge.start == edge.end {
            continue;
        }
        let foot = foot_on_edge(&edge, point);
        let distance = geo::Point::from(point).haversine_distance(&geo::Point::from(foot));
        let closer = match &best {
            Some(current) => distance < current.distance,
            None => true,
        };
        if closer {
            best = Some(Projection {
                edge_index,
                edge,
                foot,
                distance,
            });
        }
    }
    best
}

/// Foot of perpendicular of `point` onto the segment, clamped to the segment
/// endpoints. Computed on raw lon/lat; the haversine metric only enters when
/// candidate feet are compared across edges.
fn foot_on_edge(edge: &geo::Line, point: geo::Coord) -> geo::Coord {
    let direction = edge.end - edge.start;
    let squared_length = direction.x * direction.x + direction.y * direction.y;
    let offset = point - edge.start;
    let along = (offset.x * direction.x + offset.y * direction.y) / squared_length;
    let t = along.clamp(0.0, 1.0);
    geo::Coord {
        x: edge.start.x + t * direction.x,
        y: edge.start.y + t * direction.y,
    }
}

/// Classify which side of the projection edge the original point lies on.
/// The sign of the 2-D cross product of the edge direction and the vector
/// from the edge start to the point decides; exact collinearity counts as
/// `Right` so the function stays total.
pub fn side_of_projection(projection: &Projection, point: geo::Coord) -> Side {
    let edge = &projection.edge;
    let cross = (edge.end.x - edge.start.x) * (point.y - edge.start.y)
        - (edge.end.y - edge.start.y) * (point.x - edge.start.x);
    if cross > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Linestring running from the start of `line` up to the foot of
/// `projection`.
pub fn slice_to_projection(line: &geo::LineString, projection: &Projection) -> geo::LineString {
    let mut coords: Vec<geo::Coord> = line
        .coords()
        .take(projection.edge_index + 1)
        .copied()
        .collect();
    coords.push(projection.foot);
    geo::LineString::new(coords)
}

/// Arc length from the start of `line` to the foot of `projection`, in
/// meters. Uses the same haversine metric as the projection itself.
pub fn distance_along(line: &geo::LineString, projection: &Projection) -> f64 {
    slice_to_projection(line, projection).haversine_length()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::{HaversineDistance, HaversineLength};
    use rstest::rstest;

    use super::{distance_along, project_onto_line, side_of_projection, Side};

    fn coord(x: f64, y: f64) -> geo::Coord {
        geo::Coord { x, y }
    }

    #[test]
    fn test_project_onto_line_hits_perpendicular_foot() {
        let line: geo::LineString = vec![(0.0, 0.0), (10.0, 0.0)].into();
        let projection = project_onto_line(&line, coord(3.0, 0.5)).unwrap();
        assert_eq!(0, projection.edge_index);
        assert_relative_eq!(3.0, projection.foot.x, max_relative = 1e-9);
        assert_relative_eq!(0.0, projection.foot.y);
        let expected = geo::Point::new(3.0, 0.5).haversine_distance(&geo::Point::new(3.0, 0.0));
        assert_relative_eq!(expected, projection.distance, max_relative = 1e-9);
    }

    #[test]
    fn test_project_onto_line_clamps_to_segment_end() {
        let line: geo::LineString = vec![(0.0, 0.0), (10.0, 0.0)].into();
        let projection = project_onto_line(&line, coord(12.0, 1.0)).unwrap();
        assert_eq!(coord(10.0, 0.0), projection.foot);
    }

    #[test]
    fn test_project_onto_line_round_trips_vertices() {
        let line: geo::LineString = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 1.0)].into();
        let mut expected_distance = 0.0;
        let mut previous: Option<geo::Coord> = None;
        for vertex in line.coords().copied() {
            if let Some(previous) = previous {
                expected_distance += geo::Point::from(previous)
                    .haversine_distance(&geo::Point::from(vertex));
            }
            let projection = project_onto_line(&line, vertex).unwrap();
            assert_relative_eq!(vertex.x, projection.foot.x, max_relative = 1e-9);
            assert_relative_eq!(vertex.y, projection.foot.y, max_relative = 1e-9);
            assert_relative_eq!(
                expected_distance,
                distance_along(&line, &projection),
                max_relative = 1e-9,
                epsilon = 1e-6
            );
            previous = Some(vertex);
        }
    }

    #[test]
    fn test_project_onto_line_tie_prefers_lowest_edge_index() {
        // The shared vertex is the foot on both edges, at zero distance.
        let line: geo::LineString = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)].into();
        let projection = project_onto_line(&line, coord(1.0, 0.0)).unwrap();
        assert_eq!(0, projection.edge_index);
    }

    #[test]
    fn test_project_onto_line_fails_on_degenerate_input() {
        let single: geo::LineString = vec![(5.0, 5.0)].into();
        assert!(project_onto_line(&single, coord(0.0, 0.0)).is_none());

        // Two coordinates, but not two distinct ones.
        let collapsed: geo::LineString = vec![(5.0, 5.0), (5.0, 5.0)].into();
        assert!(project_onto_line(&collapsed, coord(0.0, 0.0)).is_none());
    }

    #[rstest]
    #[case(coord(5.0, 0.1), Side::Left)] // north of an eastbound edge
    #[case(coord(5.0, -0.1), Side::Right)] // south of an eastbound edge
    #[case(coord(5.0, 0.0), Side::Right)] // exactly collinear resolves to Right
    fn test_side_of_projection(#[case] point: geo::Coord, #[case] expected: Side) {
        let line: geo::LineString = vec![(0.0, 0.0), (10.0, 0.0)].into();
        let projection = project_onto_line(&line, point).unwrap();
        assert_eq!(expected, side_of_projection(&projection, point));
    }

    #[test]
    fn test_side_of_projection_follows_edge_direction() {
        // Same point, reversed edge direction flips the side.
        let eastbound: geo::LineString = vec![(0.0, 0.0), (10.0, 0.0)].into();
        let westbound: geo::LineString = vec![(10.0, 0.0), (0.0, 0.0)].into();
        let point = coord(5.0, 0.1);
        let east = project_onto_line(&eastbound, point).unwrap();
        let west = project_onto_line(&westbound, point).unwrap();
        assert_eq!(Side::Left, side_of_projection(&east, point));
        assert_eq!(Side::Right, side_of_projection(&west, point));
    }

    #[test]
    fn test_distance_along_composes_with_total_length() {
        let line: geo::LineString = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)].into();
        let last = coord(1.0, 1.0);
        let projection = project_onto_line(&line, last).unwrap();
        assert_relative_eq!(
            line.haversine_length(),
            distance_along(&line, &projection),
            max_relative = 1e-9
        );
    }
}
