use serde::Serialize;

use crate::geometry::project::Side;

/// Geocoded anchor emitted by the augmentation driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchor {
    /// An observed address point projected onto its street.
    Observed {
        street_id: String,
        housenumber: u32,
        /// Original address point.
        point: geo::Coord,
        /// Foot of the projection on the street.
        foot: geo::Coord,
        side: Side,
    },
    /// A synthetic anchor interpolated at an intermediate street vertex.
    Vertex {
        street_id: String,
        housenumber: f64,
        vertex: geo::Coord,
    },
}

impl Anchor {
    pub fn street_id(&self) -> &str {
        match self {
            Anchor::Observed { street_id, .. } => street_id,
            Anchor::Vertex { street_id, .. } => street_id,
        }
    }
}

/// Row shape of the downstream `address` table. Absent fields serialize as
/// `None`; coordinates render with seven fractional digits, vertex
/// housenumbers truncate to three.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddressRow {
    pub id: String,
    pub source: &'static str,
    pub housenumber: String,
    pub lon: Option<String>,
    pub lat: Option<String>,
    pub parity: Option<&'static str>,
    pub proj_lon: String,
    pub proj_lat: String,
}

impl From<&Anchor> for AddressRow {
    fn from(anchor: &Anchor) -> Self {
        match anchor {
            Anchor::Observed {
                street_id,
                housenumber,
                point,
                foot,
                side,
            } => Self {
                id: street_id.clone(),
                source: "OBS",
                housenumber: housenumber.to_string(),
                lon: Some(format_coordinate(point.x)),
                lat: Some(format_coordinate(point.y)),
                parity: Some(side.letter()),
                proj_lon: format_coordinate(foot.x),
                proj_lat: format_coordinate(foot.y),
            },
            Anchor::Vertex {
                street_id,
                housenumber,
                vertex,
            } => Self {
                id: street_id.clone(),
                source: "VTX",
                housenumber: format_vertex_housenumber(*housenumber),
                lon: None,
                lat: None,
                parity: None,
                proj_lon: format_coordinate(vertex.x),
                proj_lat: format_coordinate(vertex.y),
            },
        }
    }
}

fn format_coordinate(value: f64) -> String {
    format!("{:.7}", value)
}

/// Vertex housenumbers keep three fractional digits, truncated rather than
/// rounded.
fn format_vertex_housenumber(value: f64) -> String {
    format!("{:.3}", (value * 1000.0).trunc() / 1000.0)
}
