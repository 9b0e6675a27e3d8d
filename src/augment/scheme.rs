use crate::geometry::project::Side;
use crate::model::street::Observation;

/// Numbering scheme of a street.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberingScheme {
    /// Odd numbers on one side, even on the other; both sides interpolate as
    /// a single track.
    Zigzag,
    /// Numbers run up one side and down the other; each side interpolates on
    /// its own.
    Updown,
}

/// Infer the numbering scheme of a street from the parity pattern of its
/// observations: zigzag iff one side holds only odd numbers and the other
/// only even ones. A street without observations stays `Updown`.
pub fn classify(observations: &[Observation]) -> NumberingScheme {
    if observations.is_empty() {
        return NumberingScheme::Updown;
    }

    let mut left_total = 0usize;
    let mut left_odd = 0usize;
    let mut right_total = 0usize;
    let mut right_odd = 0usize;
    for observation in observations {
        let odd = observation.housenumber % 2 == 1;
        match observation.side {
            Side::Left => {
                left_total += 1;
                if odd {
                    left_odd += 1;
                }
            }
            Side::Right => {
                right_total += 1;
                if odd {
                    right_odd += 1;
                }
            }
        }
    }
    let left_even = left_total - left_odd;
    let right_even = right_total - right_odd;

    let right_odd_left_even = right_odd == right_total && left_even == left_total;
    let left_odd_right_even = left_odd == left_total && right_even == right_total;
    if right_odd_left_even || left_odd_right_even {
        NumberingScheme::Zigzag
    } else {
        NumberingScheme::Updown
    }
}
