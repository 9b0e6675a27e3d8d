use anyhow::anyhow;

/// Precision of the encoded polylines handed over by the street importer.
const POLYLINE_PRECISION: u32 = 6;

/// Decode an encoded street polyline and drop consecutive duplicate
/// coordinates.
pub fn decode_street_line(encoded: &str) -> anyhow::Result<geo::LineString> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|err| anyhow!("Could not decode polyline, {}", err))?;
    Ok(dedupe_consecutive(line))
}

/// Remove consecutive duplicate coordinates from a linestring. Equality is
/// exact on both axes; a tolerance here would change arc lengths between runs.
pub fn dedupe_consecutive(line: geo::LineString) -> geo::LineString {
    let mut coords: Vec<geo::Coord> = Vec::with_capacity(line.0.len());
    for coord in line.0 {
        if coords.last() != Some(&coord) {
            coords.push(coord);
        }
    }
    geo::LineString::new(coords)
}
