#![forbid(unsafe_code)]

//! Error model.
//!
//! # Design Principles
//!
//! 1. **Result everywhere** — no panics in library code.
//! 2. **Domain-specific errors** — deck construction and loading failures
//!    are typed so callers can match on what matters.
//! 3. **Total input handling** — unrecognized keys and other inputs
//!    outside the enumerated set are no-ops, never errors.

use std::fmt;

/// Deck construction and loading errors.
#[derive(Debug)]
pub enum DeckError {
    /// The slide sequence was empty. Fatal configuration error: the
    /// controller refuses to construct over it.
    Empty,
    /// I/O failure while reading a deck file.
    Io(std::io::Error),
    /// The deck file was not valid deck JSON.
    Parse(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "deck contains no slides"),
            Self::Io(err) => write!(f, "failed to read deck: {err}"),
            Self::Parse(detail) => write!(f, "failed to parse deck: {detail}"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for slidedeck APIs.
pub type Result<T> = std::result::Result<T, DeckError>;
