//! Error types for the engine.
//!
//! The engine never logs or prints failures; it returns them to the driver,
//! which decides whether to re-prompt, abort a level load, or treat the
//! failure as an internal bug.

use thiserror::Error;

use super::branch::Move;

/// Engine error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A move outside the legal moves of the current position and player.
    #[error("invalid move {branch}: {reason}")]
    InvalidMove { branch: Move, reason: String },

    /// A branch list that cannot form a grounded position.
    #[error("malformed level: {0}")]
    MalformedLevel(String),

    /// A search window with `alpha >= beta`.
    #[error("empty search window ({alpha}, {beta})")]
    InvalidWindow { alpha: i32, beta: i32 },

    /// Search was interrupted through its cancel flag.
    #[error("search cancelled")]
    Cancelled,
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidMove {
            branch: Move::new(7),
            reason: "no such branch".to_string(),
        };
        assert_eq!(err.to_string(), "invalid move 7: no such branch");

        let err = Error::MalformedLevel("ground vertex 0 is missing".to_string());
        assert_eq!(err.to_string(), "malformed level: ground vertex 0 is missing");

        let err = Error::InvalidWindow { alpha: 5, beta: 5 };
        assert_eq!(err.to_string(), "empty search window (5, 5)");

        assert_eq!(Error::Cancelled.to_string(), "search cancelled");
    }
}
