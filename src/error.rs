// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyboardError>;

/// Errors raised while resolving or emitting key events.
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// The identifier has no entry in the keysym table.
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    /// The byte sink refused a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeyboardError {
    /// Returns `true` for a failed keysym lookup.
    #[must_use]
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_key_display() {
        let err = KeyboardError::UnknownKey("no-such-key".to_string());
        assert_eq!(err.to_string(), "unknown key: \"no-such-key\"");
        assert!(err.is_unknown_key());
    }

    /// Sink errors must pass through unchanged.
    #[test]
    fn test_io_error_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection reset");
        let err = KeyboardError::from(io);
        assert!(!err.is_unknown_key());

        let source = err.source().expect("Io should expose its source");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source should be the original io::Error");
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(io.to_string(), "connection reset");
    }
}
