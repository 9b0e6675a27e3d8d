use crate::geometry::project::{project_onto_line, Projection};
use crate::model::street::DecodedStreet;

/// Pick the candidate street whose projection of `point` lies nearest.
///
/// Ties resolve to the lowest candidate index. Candidates without a
/// projectable geometry are logged and passed over; `None` means every
/// candidate failed.
pub fn match_street(streets: &[DecodedStreet], point: geo::Coord) -> Option<(usize, Projection)> {
    let mut best: Option<(usize, Projection)> = None;
    for (index, street) in streets.iter().enumerate() {
        let projection = match project_onto_line(&street.geometry, point) {
            Some(projection) => projection,
            None => {
                log::warn!(
                    "Street {} has no projectable geometry, passing over candidate",
                    street.id
                );
                continue;
            }
        };
        let closer = match &best {
            Some((_, current)) => projection.distance < current.distance,
            None => true,
        };
        if closer {
            best = Some((index, projection));
        }
    }
    best
}
