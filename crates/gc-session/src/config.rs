//! Session configuration.
//!
//! Built by the binary from its command-line flags; library callers can use
//! [`SessionConfig::default`] and override fields directly.

use crate::{SessionError, SessionResult};

/// Controls the prompt loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// How many times a single field is prompted for before the session
    /// gives up with [`SessionError::AttemptsExhausted`].  Must be ≥ 1.
    pub max_attempts: u32,

    /// Offer another calculation after each result.
    pub repeat: bool,
}

impl SessionConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    pub fn validate(&self) -> SessionResult<()> {
        if self.max_attempts == 0 {
            return Err(SessionError::Config("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            repeat:       true,
        }
    }
}
