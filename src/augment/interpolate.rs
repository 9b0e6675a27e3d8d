use crate::model::street::Observation;

/// Estimate a fractional housenumber at arc distance `query` by linear
/// interpolation between the observations of `track` bracketing it.
///
/// `track` must be sorted ascending by distance. Returns `None` when the
/// track holds fewer than two observations or when `query` falls outside the
/// observed range; the estimate never extrapolates and never rounds.
pub fn interpolate(track: &[Observation], query: f64) -> Option<f64> {
    if track.len() < 2 {
        return None;
    }
    let lower = track.iter().filter(|o| o.distance <= query).last()?;
    let upper = track.iter().find(|o| o.distance >= query)?;
    if upper.distance == lower.distance {
        return Some(f64::from(lower.housenumber));
    }
    let fraction = (query - lower.distance) / (upper.distance - lower.distance);
    Some(
        f64::from(lower.housenumber)
            + (f64::from(upper.housenumber) - f64::from(lower.housenumber)) * fraction,
    )
}
