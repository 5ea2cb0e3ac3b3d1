//! Core error type.
//!
//! Every fallible operation in `gc-core` returns [`GcResult`].  The core never
//! catches its own errors; the caller decides whether to re-prompt or abort.

use thiserror::Error;

/// Errors raised by coordinate construction and the bearing/midpoint engines.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GcError {
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Origin and destination coincide or are antipodal, so no single
    /// great circle (and hence no bearing) is defined between them.
    #[error("bearing is undefined for coincident or antipodal points")]
    UndefinedBearing,

    #[error("midpoint is undefined for antipodal points")]
    UndefinedMidpoint,
}

impl GcError {
    /// `true` for the two construction-time range failures.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, GcError::LatitudeOutOfRange(_) | GcError::LongitudeOutOfRange(_))
    }
}

/// Shorthand result type for `gc-core`.
pub type GcResult<T> = Result<T, GcError>;
