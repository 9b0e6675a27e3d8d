//! Conflation core fusing street linestrings with point-located housenumber
//! records into a stream of geocoded address anchors. Observed anchors carry
//! the projection of each address onto its best-fitting street; synthetic
//! anchors carry housenumbers interpolated at the street vertices, so that
//! downstream queries can interpolate between consecutive anchors with a
//! straight linear formula.
pub mod augment;
pub mod geometry;
pub mod model;
