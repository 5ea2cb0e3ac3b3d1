//! The interactive prompt loop.
//!
//! # Loop shape
//!
//! ```text
//! loop:
//!   ① origin      — prompt latitude, then longitude (each a bounded retry)
//!   ② destination — same
//!   ③ compute     — Report::compute, render to the output
//!   ④ repeat?     — only when config.repeat; anything but y/yes stops
//! ```
//!
//! Each iteration owns its two `Coordinate`s and drops them when it ends;
//! nothing but the completed-calculation count carries over.  Bad input is
//! answered with a message and a re-prompt inside a `for` loop, never by
//! recursion, so persistent garbage exhausts `max_attempts` instead of the
//! stack.

use std::io::{BufRead, Write};

use gc_core::{Coordinate, GcResult};
use tracing::{debug, info, warn};

use crate::error::Field;
use crate::input::parse_degrees;
use crate::{Report, SessionConfig, SessionError, SessionResult};

/// Drives prompts over any line-oriented reader/writer pair.
///
/// The binary passes locked stdin/stdout; tests pass in-memory buffers.
pub struct Session<R, W> {
    input:  R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Validate `config` and build a session.
    pub fn new(input: R, output: W, config: SessionConfig) -> SessionResult<Self> {
        config.validate()?;
        Ok(Self { input, output, config })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consume the session and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run calculations until the user declines another (or `repeat` is
    /// off).  Returns how many calculations completed.
    pub fn run(&mut self) -> SessionResult<usize> {
        info!(max_attempts = self.config.max_attempts, repeat = self.config.repeat, "session started");
        let mut completed = 0;
        loop {
            self.run_once()?;
            completed += 1;
            if !self.config.repeat || !self.ask_repeat()? {
                break;
            }
        }
        info!(completed, "session finished");
        Ok(completed)
    }

    /// Acquire an origin and destination, compute, and render one report.
    pub fn run_once(&mut self) -> SessionResult<Report> {
        let origin = self.prompt_coordinate("origin")?;
        let destination = self.prompt_coordinate("destination")?;

        let report = Report::compute(origin, destination);
        debug!(
            %origin,
            %destination,
            km = report.distance.kilometres(),
            initial_bearing = report.initial_bearing.map(|b| b.degrees()),
            "computed great-circle report"
        );

        writeln!(self.output)?;
        report.render(&mut self.output)?;
        writeln!(self.output)?;
        Ok(report)
    }

    /// Prompt for one point: latitude first, range-checked on its own, then
    /// longitude.
    pub fn prompt_coordinate(&mut self, label: &str) -> SessionResult<Coordinate> {
        let latitude = self.prompt_field(label, Field::Latitude, |lat| {
            Coordinate::new(lat, 0.0).map(|_| lat)
        })?;
        self.prompt_field(label, Field::Longitude, |lon| Coordinate::new(latitude, lon))
    }

    fn prompt_field<T>(
        &mut self,
        label: &str,
        field: Field,
        build: impl Fn(f64) -> GcResult<T>,
    ) -> SessionResult<T> {
        let max = self.config.max_attempts;
        for attempt in 1..=max {
            let line = self.prompt(&format!("Input the {label} {field} in decimal degrees: "))?;
            let outcome = parse_degrees(&line).and_then(|v| build(v).map_err(SessionError::from));
            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    warn!(%field, attempt, error = %e, "rejected input");
                    if attempt < max {
                        writeln!(self.output, "{e}. Please try again.")?;
                    } else {
                        writeln!(self.output, "{e}.")?;
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Err(SessionError::AttemptsExhausted { field, attempts: max })
    }

    /// End of input at this question counts as "no".
    fn ask_repeat(&mut self) -> SessionResult<bool> {
        match self.prompt("Calculate another? [y/N]: ") {
            Ok(answer) => {
                let answer = answer.trim().to_ascii_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            Err(SessionError::EndOfInput) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn prompt(&mut self, text: &str) -> SessionResult<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line)
    }
}
