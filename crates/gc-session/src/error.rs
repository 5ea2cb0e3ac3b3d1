use std::fmt;

use gc_core::GcError;
use thiserror::Error;

/// Which half of a coordinate a prompt is asking for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Field {
    Latitude,
    Longitude,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Latitude  => "latitude",
            Field::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    Parse(String),

    #[error(transparent)]
    Coordinate(#[from] GcError),

    #[error("no valid {field} after {attempts} attempts")]
    AttemptsExhausted {
        field:    Field,
        attempts: u32,
    },

    #[error("input ended before the session completed")]
    EndOfInput,

    #[error("session configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// `true` for errors the prompt loop answers with a re-prompt rather
    /// than propagating: unparseable text and out-of-range values.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::Parse(_) => true,
            SessionError::Coordinate(e) => e.is_range_error(),
            _ => false,
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
