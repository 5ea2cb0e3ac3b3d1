//! Text → number → `Coordinate` parsing.
//!
//! The core only ever sees finite `f64`s; everything that can go wrong with
//! raw text is caught here and reported as [`SessionError::Parse`].

use gc_core::Coordinate;

use crate::{SessionError, SessionResult};

/// Parse one angle in decimal degrees.
///
/// Surrounding whitespace is ignored.  Empty, non-numeric, infinite and NaN
/// input are rejected.
pub fn parse_degrees(text: &str) -> SessionResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SessionError::Parse("expected a number in decimal degrees, got nothing".into()));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SessionError::Parse(format!(
            "{trimmed:?} is not a number in decimal degrees"
        ))),
    }
}

/// Parse a `LAT,LON` pair and validate it as a [`Coordinate`].
pub fn parse_coordinate(text: &str) -> SessionResult<Coordinate> {
    let Some((lat, lon)) = text.split_once(',') else {
        return Err(SessionError::Parse(format!(
            "{:?} is not a coordinate: expected LAT,LON",
            text.trim()
        )));
    };
    Ok(Coordinate::new(parse_degrees(lat)?, parse_degrees(lon)?)?)
}
