//! Validated geographic coordinate and great-circle midpoint.
//!
//! `Coordinate` uses `f64` decimal degrees on a spherical Earth.  Fields are
//! private: the only way to obtain one is [`Coordinate::new`], which rejects
//! out-of-range (and NaN) input, so every `Coordinate` in the program is valid.

use crate::angle::normalize_longitude;
use crate::{GcError, GcResult};

/// Residual `|B|` below which two points are treated as antipodal when
/// computing the midpoint.
const ANTIPODAL_EPSILON: f64 = 1e-12;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`, both inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    latitude:  f64,
    longitude: f64,
}

impl Coordinate {
    /// Validate and construct a coordinate.
    ///
    /// Latitude is checked first, so an input with both fields out of range
    /// reports [`GcError::LatitudeOutOfRange`].
    pub fn new(latitude: f64, longitude: f64) -> GcResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GcError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GcError::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    #[inline]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// `(latitude, longitude)` in radians, for the trigonometric engines.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GcError;

    fn try_from((latitude, longitude): (f64, f64)) -> GcResult<Self> {
        Coordinate::new(latitude, longitude)
    }
}

/// Unvalidated wire shape; deserialisation goes through [`Coordinate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    latitude:  f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GcError;

    fn try_from(raw: RawCoordinate) -> GcResult<Self> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

/// The point halfway along the great circle from `origin` to `destination`.
///
/// Antipodal points lie on infinitely many great circles, so their midpoint
/// is [`GcError::UndefinedMidpoint`].  Coincident points return themselves.
pub fn midpoint(origin: Coordinate, destination: Coordinate) -> GcResult<Coordinate> {
    let (lat1, lon1) = origin.to_radians();
    let (lat2, lon2) = destination.to_radians();
    let d_lon = lon2 - lon1;

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    // Cartesian sum of the two unit vectors; zero length means antipodal.
    let sx = lat1.cos() + bx;
    let sz = lat1.sin() + lat2.sin();
    if (sx * sx + by * by + sz * sz).sqrt() < ANTIPODAL_EPSILON {
        return Err(GcError::UndefinedMidpoint);
    }

    let lat_m = sz.atan2((sx * sx + by * by).sqrt());
    let lon_m = lon1 + by.atan2(sx);

    let latitude = lat_m.to_degrees().clamp(-90.0, 90.0);
    let longitude = normalize_longitude(lon_m.to_degrees());
    Coordinate::new(latitude, longitude)
}
