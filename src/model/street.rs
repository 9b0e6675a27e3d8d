use serde::Deserialize;

use crate::geometry::project::Side;

/// Candidate street as handed over by the upstream batcher: a stable id and
/// an encoded polyline, precision 6.
#[derive(Clone, Debug, Deserialize)]
pub struct StreetCandidate {
    pub id: String,
    pub line: String,
}

/// Raw address record from the point corpus. Field names follow the upstream
/// extract; `LON`/`LAT` arrive as stringified floats.
#[derive(Clone, Debug, Deserialize)]
pub struct AddressRecord {
    #[serde(rename = "NUMBER")]
    pub number: String,
    #[serde(rename = "LON")]
    pub lon: String,
    #[serde(rename = "LAT")]
    pub lat: String,
}

/// One unit of work: the candidate streets sharing a name within a locality,
/// plus the address records already narrowed to them.
#[derive(Clone, Debug, Deserialize)]
pub struct LookupTuple {
    pub streets: Vec<StreetCandidate>,
    pub batch: Vec<AddressRecord>,
}

/// A single address observation matched onto a street: the normalized
/// housenumber, the arc distance from the street's first vertex to the
/// projection in meters, and the side of the centerline. Immutable once
/// recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub housenumber: u32,
    pub distance: f64,
    pub side: Side,
}

/// A candidate street decoded for matching. Observations recorded against
/// the street live on the street itself, so street and observations can
/// never fall out of step.
#[derive(Clone, Debug)]
pub struct DecodedStreet {
    pub id: String,
    pub geometry: geo::LineString,
    pub observations: Vec<Observation>,
}

impl DecodedStreet {
    pub fn new(id: String, geometry: geo::LineString) -> Self {
        Self {
            id,
            geometry,
            observations: Vec::new(),
        }
    }
}
