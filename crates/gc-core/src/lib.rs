//! `gc-core` — coordinate validation and spherical navigation maths for the
//! `gcnav` great-circle calculator.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, safe to call from any thread.  The interactive front end lives in
//! `gc-session`.
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`geo`]      | `Coordinate` (validated lat/lon), `midpoint`             |
//! | [`distance`] | `distance`, `central_angle`, `DistanceResult`, radii     |
//! | [`bearing`]  | `initial_bearing`, `final_bearing`, `Bearing`            |
//! | [`angle`]    | degree normalisation and rounding helpers                |
//! | [`error`]    | `GcError`, `GcResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize` to result types and validating            |
//!           | `Serialize`/`Deserialize` to `Coordinate`.                 |
//!
//! # Example
//!
//! ```rust
//! use gc_core::{Coordinate, distance, initial_bearing};
//!
//! let london   = Coordinate::new(51.5074, -0.1278)?;
//! let new_york = Coordinate::new(40.7128, -74.0060)?;
//!
//! let d = distance(london, new_york);
//! assert!((d.kilometres() - 5570.0).abs() < 10.0);
//!
//! let b = initial_bearing(london, new_york)?;
//! assert!((288.0..292.0).contains(&b.degrees()));
//! # Ok::<(), gc_core::GcError>(())
//! ```

pub mod angle;
pub mod bearing;
pub mod distance;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bearing::{Bearing, final_bearing, initial_bearing};
pub use distance::{DistanceResult, DistanceUnit, central_angle, distance};
pub use error::{GcError, GcResult};
pub use geo::{Coordinate, midpoint};
