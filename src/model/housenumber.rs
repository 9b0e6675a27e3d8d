/// Housenumber normalization seam. Implementations return the positive
/// integer housenumber, or `None` when the raw string does not normalize.
/// The enclosing pipeline usually plugs in its own locale-aware parser.
pub trait HousenumberParser {
    fn parse(&self, raw: &str) -> Option<u32>;
}

/// Conservative default: a decimal integer with surrounding whitespace,
/// nothing else. Zero and suffixed forms like "12B" do not normalize.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericHousenumberParser;

impl HousenumberParser for NumericHousenumberParser {
    fn parse(&self, raw: &str) -> Option<u32> {
        match raw.trim().parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(number) => Some(number),
        }
    }
}
