use geo::HaversineDistance;
use rayon::prelude::*;

use crate::geometry::decode::decode_street_line;
use crate::geometry::project::{distance_along, side_of_projection, Side};
use crate::model::anchor::Anchor;
use crate::model::housenumber::HousenumberParser;
use crate::model::street::{AddressRecord, DecodedStreet, LookupTuple, Observation, StreetCandidate};

use super::interpolate::interpolate;
use super::matcher::match_street;
use super::scheme::{classify, NumberingScheme};
use super::sink::AnchorSink;

/// Augment one lookup tuple: project every address record of the batch onto
/// its best-fitting candidate street, then interpolate synthetic anchors at
/// the street vertices.
///
/// Observed anchors are emitted in batch order and always precede the
/// tuple's vertex anchors; vertex anchors follow in candidate order, vertex
/// by vertex, left side before right. Record-level failures are logged and
/// skipped; only sink errors abort the tuple. The driver holds no state
/// across tuples.
pub fn augment_tuple<P, S>(tuple: &LookupTuple, parser: &P, sink: &mut S) -> anyhow::Result<()>
where
    P: HousenumberParser,
    S: AnchorSink,
{
    let mut streets = decode_streets(&tuple.streets);

    for record in &tuple.batch {
        let housenumber = match parser.parse(&record.number) {
            Some(housenumber) => housenumber,
            None => {
                log::warn!(
                    "Could not normalize housenumber '{}', skipping record",
                    record.number
                );
                continue;
            }
        };
        let point = match parse_point(record) {
            Some(point) => point,
            None => {
                log::warn!(
                    "Could not parse coordinate ('{}', '{}'), skipping record",
                    record.lon,
                    record.lat
                );
                continue;
            }
        };
        let (street_index, projection) = match match_street(&streets, point) {
            Some(matched) => matched,
            None => {
                log::warn!(
                    "No candidate street matched point ({}, {}), skipping record",
                    point.x,
                    point.y
                );
                continue;
            }
        };

        let street = &mut streets[street_index];
        let side = side_of_projection(&projection, point);
        let distance = distance_along(&street.geometry, &projection);
        street.observations.push(Observation {
            housenumber,
            distance,
            side,
        });
        sink.accept(Anchor::Observed {
            street_id: street.id.clone(),
            housenumber,
            point,
            foot: projection.foot,
            side,
        })?;
    }

    for street in &mut streets {
        // Stable sort keeps insertion order among equal distances.
        street
            .observations
            .sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    for street in &streets {
        let scheme = classify(&street.observations);
        log::debug!(
            "Street {} classified as {:?} from {} observations",
            street.id,
            scheme,
            street.observations.len()
        );
        emit_vertex_anchors(street, scheme, sink)?;
    }

    sink.end_of_tuple()
}

/// Run the driver over disjoint tuples in parallel, collecting each tuple's
/// anchors in input order. Callers streaming into a shared sink must
/// serialize the writes themselves.
pub fn augment_tuples_par<P>(
    tuples: &[LookupTuple],
    parser: &P,
) -> anyhow::Result<Vec<Vec<Anchor>>>
where
    P: HousenumberParser + Sync,
{
    tuples
        .par_iter()
        .map(|tuple| {
            let mut anchors: Vec<Anchor> = Vec::new();
            augment_tuple(tuple, parser, &mut anchors)?;
            Ok(anchors)
        })
        .collect()
}

/// Decode every candidate, keeping candidate order. A street that fails to
/// decode keeps an empty geometry so it simply never matches.
fn decode_streets(candidates: &[StreetCandidate]) -> Vec<DecodedStreet> {
    candidates
        .iter()
        .map(|candidate| {
            let geometry = match decode_street_line(&candidate.line) {
                Ok(line) => line,
                Err(err) => {
                    log::warn!("Could not decode street {}: {}", candidate.id, err);
                    geo::LineString::new(Vec::new())
                }
            };
            DecodedStreet::new(candidate.id.clone(), geometry)
        })
        .collect()
}

fn parse_point(record: &AddressRecord) -> Option<geo::Coord> {
    let x: f64 = record.lon.trim().parse().ok()?;
    let y: f64 = record.lat.trim().parse().ok()?;
    Some(geo::Coord { x, y })
}

/// Walk the street's vertices from index one, interpolating housenumbers at
/// the running arc distance. A zigzag street interpolates over all of its
/// observations at once; an updown street over each side separately, left
/// before right.
fn emit_vertex_anchors<S: AnchorSink>(
    street: &DecodedStreet,
    scheme: NumberingScheme,
    sink: &mut S,
) -> anyhow::Result<()> {
    let side_tracks = match scheme {
        NumberingScheme::Zigzag => None,
        NumberingScheme::Updown => Some((
            side_track(&street.observations, Side::Left),
            side_track(&street.observations, Side::Right),
        )),
    };

    let mut cumulative = 0.0;
    for edge in street.geometry.lines() {
        cumulative +=
            geo::Point::from(edge.start).haversine_distance(&geo::Point::from(edge.end));
        let estimates = match &side_tracks {
            None => vec![interpolate(&street.observations, cumulative)],
            Some((left, right)) => {
                vec![interpolate(left, cumulative), interpolate(right, cumulative)]
            }
        };
        for housenumber in estimates.into_iter().flatten() {
            sink.accept(Anchor::Vertex {
                street_id: street.id.clone(),
                housenumber,
                vertex: edge.end,
            })?;
        }
    }
    Ok(())
}

fn side_track(observations: &[Observation], side: Side) -> Vec<Observation> {
    observations
        .iter()
        .filter(|observation| observation.side == side)
        .copied()
        .collect()
}
