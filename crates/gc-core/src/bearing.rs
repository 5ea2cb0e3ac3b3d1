//! Initial and final great-circle bearings.
//!
//! The forward azimuth is `atan2(x, y)` with
//!
//! ```text
//! x = sin(Δλ)·cos(φ2)
//! y = cos(φ1)·sin(φ2) − sin(φ1)·cos(φ2)·cos(Δλ)
//! ```
//!
//! `atan2` keeps the quadrant and stays well-conditioned near the poles,
//! where `asin(x / |(x, y)|)` does neither.
//!
//! When `|(x, y)|` collapses to zero the two points are coincident or
//! antipodal and no unique great circle joins them.  That case is reported as
//! [`GcError::UndefinedBearing`]; it is never folded into a 0° (north) result.

use crate::angle::normalize_degrees;
use crate::{Coordinate, GcError, GcResult};

/// Magnitude of `(x, y)` below which the bearing is undefined.
///
/// Exactly antipodal inputs leave residue on the order of 1e-16; genuine
/// tracks between distinct non-antipodal points are many orders above this.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// A compass direction in degrees clockwise from true north, in `[0, 360)`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bearing(f64);

impl Bearing {
    /// Wrap any angle in degrees into a bearing.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Bearing(normalize_degrees(deg))
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The opposite direction.
    #[inline]
    pub fn reciprocal(self) -> Self {
        Bearing::from_degrees(self.0 + 180.0)
    }

    /// 16-point compass label (`N`, `NNE`, … `NNW`).
    pub fn compass_point(self) -> &'static str {
        const POINTS: [&str; 16] = [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
            "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
        ];
        // Each point covers 22.5°, centred on its nominal heading.
        let idx = ((self.0 + 11.25) / 22.5) as usize % POINTS.len();
        POINTS[idx]
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Initial bearing (forward azimuth) from `origin` toward `destination`.
///
/// # Errors
/// [`GcError::UndefinedBearing`] when the points coincide or are antipodal.
pub fn initial_bearing(origin: Coordinate, destination: Coordinate) -> GcResult<Bearing> {
    let (lat1, lon1) = origin.to_radians();
    let (lat2, lon2) = destination.to_radians();
    let d_lon = lon2 - lon1;

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    if x.hypot(y) < DEGENERATE_EPSILON {
        return Err(GcError::UndefinedBearing);
    }

    Ok(Bearing::from_degrees(x.atan2(y).to_degrees()))
}

/// Bearing of the great-circle track on arrival at `destination`.
///
/// Equal to the reciprocal of the initial bearing of the reverse leg.
pub fn final_bearing(origin: Coordinate, destination: Coordinate) -> GcResult<Bearing> {
    initial_bearing(destination, origin).map(Bearing::reciprocal)
}
