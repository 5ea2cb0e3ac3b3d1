//! `gc-session` — the interactive front end of the gcnav calculator.
//!
//! Reads coordinates as text, validates them through `gc-core`, and renders
//! distance and bearing results as a console table.  The session never does
//! maths itself; it only sequences prompts and formats what `gc-core`
//! returns.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gc_session::{Session, SessionConfig};
//!
//! let stdin = std::io::stdin();
//! let mut session = Session::new(stdin.lock(), std::io::stdout(), SessionConfig::default())?;
//! let completed = session.run()?;
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use error::{Field, SessionError, SessionResult};
pub use input::{parse_coordinate, parse_degrees};
pub use report::Report;
pub use session::Session;
