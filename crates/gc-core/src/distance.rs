//! Haversine great-circle distance.
//!
//! All three output units come from a single central angle multiplied by a
//! fixed mean radius, so a [`DistanceResult`] can only be built from that
//! angle and its fields are always mutually proportional.

use crate::angle::round_to;
use crate::Coordinate;

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Mean Earth radius, statute miles.
pub const EARTH_RADIUS_SM: f64 = 3959.0;
/// Mean Earth radius, nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.1;

/// Decimal places kept on every reported distance.
pub const DISTANCE_DECIMALS: i32 = 3;

/// A unit of length the calculator reports in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    Kilometres,
    StatuteMiles,
    NauticalMiles,
}

impl DistanceUnit {
    /// Every unit, in reporting order.
    pub const ALL: [DistanceUnit; 3] = [
        DistanceUnit::Kilometres,
        DistanceUnit::StatuteMiles,
        DistanceUnit::NauticalMiles,
    ];

    /// Sphere radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometres    => EARTH_RADIUS_KM,
            DistanceUnit::StatuteMiles  => EARTH_RADIUS_SM,
            DistanceUnit::NauticalMiles => EARTH_RADIUS_NM,
        }
    }

    /// Human-readable label, used as the table's unit column.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Kilometres    => "kilometres",
            DistanceUnit::StatuteMiles  => "statute miles",
            DistanceUnit::NauticalMiles => "nautical miles",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Great-circle distance between two points in every [`DistanceUnit`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceResult {
    central_angle:  f64,
    kilometres:     f64,
    statute_miles:  f64,
    nautical_miles: f64,
}

impl DistanceResult {
    /// Derive all three distances from one central angle (radians).
    pub fn from_central_angle(central_angle: f64) -> Self {
        let scale = |unit: DistanceUnit| round_to(central_angle * unit.earth_radius(), DISTANCE_DECIMALS);
        Self {
            central_angle,
            kilometres:     scale(DistanceUnit::Kilometres),
            statute_miles:  scale(DistanceUnit::StatuteMiles),
            nautical_miles: scale(DistanceUnit::NauticalMiles),
        }
    }

    /// Angular separation, radians, in `[0, π]`.
    #[inline]
    pub fn central_angle(&self) -> f64 {
        self.central_angle
    }

    #[inline]
    pub fn kilometres(&self) -> f64 {
        self.kilometres
    }

    #[inline]
    pub fn statute_miles(&self) -> f64 {
        self.statute_miles
    }

    #[inline]
    pub fn nautical_miles(&self) -> f64 {
        self.nautical_miles
    }

    /// Distance in `unit`, rounded to [`DISTANCE_DECIMALS`].
    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Kilometres    => self.kilometres,
            DistanceUnit::StatuteMiles  => self.statute_miles,
            DistanceUnit::NauticalMiles => self.nautical_miles,
        }
    }
}

/// Central angle between two points, radians, via the haversine formula.
///
/// `a` is clamped into `[0, 1]` before the square root: rounding can push it
/// a hair outside for coincident or nearly antipodal points, and `asin` of
/// anything above 1 is NaN.
pub fn central_angle(origin: Coordinate, destination: Coordinate) -> f64 {
    let (lat1, lon1) = origin.to_radians();
    let (lat2, lon2) = destination.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Haversine great-circle distance from `origin` to `destination`.
///
/// Total over valid coordinates: the result is always finite and
/// non-negative, zero for identical points and about `π·R` for antipodes.
pub fn distance(origin: Coordinate, destination: Coordinate) -> DistanceResult {
    DistanceResult::from_central_angle(central_angle(origin, destination))
}
