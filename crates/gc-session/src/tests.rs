//! Tests for gc-session: parsing, rendering, and the prompt loop.

use std::io::Cursor;

use crate::{Session, SessionConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(max_attempts: u32, repeat: bool) -> SessionConfig {
    SessionConfig { max_attempts, repeat }
}

/// Run a full session over `input` and return (result, rendered output).
fn run_session(
    input:  &str,
    config: SessionConfig,
) -> (crate::SessionResult<usize>, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config).unwrap();
    let result = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output)
}

const LONDON_TO_NEW_YORK: &str = "51.5074\n-0.1278\n40.7128\n-74.0060\n";

#[cfg(test)]
mod parsing {
    use crate::{SessionError, parse_coordinate, parse_degrees};
    use gc_core::GcError;

    #[test]
    fn degrees_trimmed_and_parsed() {
        assert_eq!(parse_degrees("  51.5074\n").unwrap(), 51.5074);
        assert_eq!(parse_degrees("-0.1278").unwrap(), -0.1278);
        assert_eq!(parse_degrees("90").unwrap(), 90.0);
    }

    #[test]
    fn degrees_reject_garbage() {
        for bad in ["", "   \n", "north", "51.5N", "1,5"] {
            assert!(matches!(parse_degrees(bad), Err(SessionError::Parse(_))), "{bad:?}");
        }
    }

    #[test]
    fn degrees_reject_non_finite() {
        for bad in ["inf", "-infinity", "NaN"] {
            assert!(matches!(parse_degrees(bad), Err(SessionError::Parse(_))), "{bad:?}");
        }
    }

    #[test]
    fn coordinate_pair() {
        let c = parse_coordinate("51.5074, -0.1278").unwrap();
        assert_eq!(c.latitude(), 51.5074);
        assert_eq!(c.longitude(), -0.1278);
    }

    #[test]
    fn coordinate_pair_errors() {
        assert!(matches!(parse_coordinate("51.5074"), Err(SessionError::Parse(_))));
        assert!(matches!(parse_coordinate("x,0"), Err(SessionError::Parse(_))));
        assert!(matches!(
            parse_coordinate("0,181"),
            Err(SessionError::Coordinate(GcError::LongitudeOutOfRange(_)))
        ));
    }

    #[test]
    fn recoverable_errors() {
        assert!(SessionError::Parse("x".into()).is_recoverable());
        assert!(SessionError::Coordinate(GcError::LatitudeOutOfRange(91.0)).is_recoverable());
        assert!(!SessionError::Coordinate(GcError::UndefinedBearing).is_recoverable());
        assert!(!SessionError::EndOfInput.is_recoverable());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::{SessionConfig, SessionError};
    use std::io::Cursor;

    use super::config;

    #[test]
    fn default_values() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.max_attempts, 3);
        assert!(cfg.repeat);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_attempts_rejected() {
        let result = crate::Session::new(Cursor::new(String::new()), Vec::new(), config(0, false));
        assert!(matches!(result, Err(SessionError::Config(_))));
    }
}

#[cfg(test)]
mod report {
    use gc_core::Coordinate;

    use crate::Report;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn rendered(report: &Report) -> String {
        let mut buf = Vec::new();
        report.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn london_to_new_york() {
        let r = Report::compute(c(51.5074, -0.1278), c(40.7128, -74.0060));
        assert!((r.distance.kilometres() - 5570.0).abs() < 10.0);
        let b = r.initial_bearing.unwrap();
        assert!((288.0..292.0).contains(&b.degrees()));
        assert!(r.final_bearing.is_some());
        assert!(r.midpoint.is_some());

        let text = rendered(&r);
        assert!(text.contains("kilometres"));
        assert!(text.contains("statute miles"));
        assert!(text.contains("nautical miles"));
        assert!(text.contains("51.507"));
        assert!(text.contains("-74.006"));
        assert!(text.contains("(WNW)"), "{text}");
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn coincident_points_render_undefined_bearing() {
        let r = Report::compute(c(0.0, 0.0), c(0.0, 0.0));
        assert_eq!(r.distance.kilometres(), 0.0);
        assert_eq!(r.distance.statute_miles(), 0.0);
        assert_eq!(r.distance.nautical_miles(), 0.0);
        assert!(r.initial_bearing.is_none());
        assert!(r.final_bearing.is_none());

        let text = rendered(&r);
        assert!(text.contains("Initial bearing : undefined"), "{text}");
        assert!(!text.contains("0.0°"), "{text}");
    }

    #[test]
    fn antipodal_points_render_undefined_midpoint() {
        let r = Report::compute(c(0.0, 0.0), c(0.0, 180.0));
        assert!(r.midpoint.is_none());
        assert!(rendered(&r).contains("Midpoint        : undefined"));
    }

    #[test]
    fn one_row_per_unit() {
        let text = rendered(&Report::compute(c(0.0, 0.0), c(0.0, 90.0)));
        // header + rule + three unit rows before the blank line
        let table: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(table.len(), 5, "{text}");
        assert!(table[2].contains("10007.543"), "{text}");
    }
}

#[cfg(test)]
mod session {
    use crate::{Field, SessionError};

    use super::{LONDON_TO_NEW_YORK, config, run_session};

    #[test]
    fn single_calculation() {
        let (result, out) = run_session(LONDON_TO_NEW_YORK, config(3, false));
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("Input the origin latitude"));
        assert!(out.contains("Input the destination longitude"));
        assert!(out.contains("nautical miles"));
        assert!(!out.contains("Calculate another"));
    }

    #[test]
    fn bad_input_is_retried() {
        let input = "abc\n91\n51.5074\n-0.1278\n40.7128\n-74.0060\n";
        let (result, out) = run_session(input, config(3, false));
        assert_eq!(result.unwrap(), 1);
        assert_eq!(out.matches("Please try again.").count(), 2, "{out}");
        assert!(out.contains("latitude 91 is outside"), "{out}");
    }

    #[test]
    fn longitude_retry_keeps_latitude() {
        let input = "10\n200\n20\n10\n30\n";
        let mut session = crate::Session::new(
            std::io::Cursor::new(input.to_string()),
            Vec::new(),
            config(3, false),
        )
        .unwrap();
        let report = session.run_once().unwrap();
        assert_eq!(report.origin.latitude(), 10.0);
        assert_eq!(report.origin.longitude(), 20.0);
        assert_eq!(report.destination.latitude(), 10.0);
        assert_eq!(report.destination.longitude(), 30.0);
    }

    #[test]
    fn attempts_exhausted() {
        let (result, out) = run_session("x\ny\nz\n51.0\n", config(3, false));
        assert!(matches!(
            result,
            Err(SessionError::AttemptsExhausted { field: Field::Latitude, attempts: 3 })
        ));
        assert_eq!(out.matches("Please try again.").count(), 2, "{out}");
    }

    #[test]
    fn end_of_input_mid_prompt() {
        let (result, _) = run_session("51.5\n", config(3, false));
        assert!(matches!(result, Err(SessionError::EndOfInput)));
    }

    #[test]
    fn repeat_until_declined() {
        let input = format!("{LONDON_TO_NEW_YORK}y\n0\n0\n0\n0\nn\n");
        let (result, out) = run_session(&input, config(3, true));
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out.matches("Calculate another?").count(), 2);
        assert!(out.contains("Initial bearing : undefined"));
    }

    #[test]
    fn end_of_input_at_repeat_prompt_stops() {
        let (result, _) = run_session(LONDON_TO_NEW_YORK, config(3, true));
        assert_eq!(result.unwrap(), 1);
    }
}
