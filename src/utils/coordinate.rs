//! Parsing of coordinates supplied as text.
//!
//! Tabular exports often use a decimal comma (`52,5200`). Both forms
//! are accepted.

use crate::error::RouterError;

/// Parses a coordinate in degrees, accepting `,` as decimal separator.
pub fn parse_coordinate(value: &str) -> Result<f64, RouterError> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| RouterError::InvalidCoordinate {
            value: value.to_string(),
        })
}
