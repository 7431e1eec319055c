//! Error types shared by the collbench crates.
//!
//! The benchmark itself cannot fail; every error here originates at the
//! console boundary (reading a size, a menu choice, or probe values) or
//! from parsing a variant name.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors at the interactive console boundary.
#[derive(Debug)]
pub enum InputError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Input ended while a value was still expected.
    UnexpectedEof {
        /// What the prompt was waiting for.
        expected: &'static str,
    },
    /// A token could not be parsed as the requested integer type.
    NotAnInteger {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "console I/O failed: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "input ended while waiting for {expected}")
            }
            Self::NotAnInteger { token } => write!(f, "'{token}' is not a valid integer"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A string did not name any [`Variant`](crate::Variant).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVariantError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown container variant '{}'", self.input)
    }
}

impl Error for ParseVariantError {}
