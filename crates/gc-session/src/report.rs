//! One calculation's results and their console rendering.

use std::io::{self, Write};

use gc_core::{
    Bearing, Coordinate, DistanceResult, DistanceUnit, distance, final_bearing, initial_bearing,
    midpoint,
};

/// Everything computed for one (origin, destination) pair.
///
/// `None` in a bearing or midpoint field means the quantity is undefined for
/// this pair (coincident or antipodal points), not that it was skipped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub origin:          Coordinate,
    pub destination:     Coordinate,
    pub distance:        DistanceResult,
    pub initial_bearing: Option<Bearing>,
    pub final_bearing:   Option<Bearing>,
    pub midpoint:        Option<Coordinate>,
}

impl Report {
    pub fn compute(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
            distance:        distance(origin, destination),
            initial_bearing: initial_bearing(origin, destination).ok(),
            final_bearing:   final_bearing(origin, destination).ok(),
            midpoint:        midpoint(origin, destination).ok(),
        }
    }

    /// Write the distance table followed by the bearing summary.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{:>10} {:>10} {:>10} {:>10} {:>12}  {:<14}",
            "Orig Lat", "Orig Lon", "Dest Lat", "Dest Lon", "Distance", "Unit"
        )?;
        writeln!(out, "{}", "-".repeat(72))?;
        for unit in DistanceUnit::ALL {
            writeln!(
                out,
                "{:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>12.3}  {:<14}",
                self.origin.latitude(),
                self.origin.longitude(),
                self.destination.latitude(),
                self.destination.longitude(),
                self.distance.in_unit(unit),
                unit,
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Initial bearing : {}", describe_bearing(self.initial_bearing))?;
        writeln!(out, "Final bearing   : {}", describe_bearing(self.final_bearing))?;
        match self.midpoint {
            Some(m) => writeln!(out, "Midpoint        : {m}")?,
            None    => writeln!(out, "Midpoint        : undefined (antipodal points)")?,
        }
        Ok(())
    }
}

fn describe_bearing(bearing: Option<Bearing>) -> String {
    match bearing {
        Some(b) => format!("{b} ({})", b.compass_point()),
        None    => "undefined (origin and destination coincide or are antipodal)".to_string(),
    }
}
