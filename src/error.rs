// In: src/error.rs

//! This module defines the single, unified error type for the entire base32k library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Base32kError {
    // =========================================================================
    // === Format Errors (raised by the decoder)
    // =========================================================================
    /// A code point whose top nibble maps to no registered lane.
    #[error("Invalid character at position {position}: {codepoint}")]
    InvalidLane { position: usize, codepoint: char },

    /// A padding-marker-shaped character that is not the final code point,
    /// or whose value lies outside the marker range.
    #[error("Invalid character or misplaced padding character at position {position}: {codepoint:?}")]
    InvalidPadding { position: usize, codepoint: char },

    // =========================================================================
    // === Shell Errors
    // =========================================================================
    #[error("error reading stdin: no input line")]
    EmptyInput,

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl Base32kError {
    /// The code point index of a format error, if this is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Base32kError::InvalidLane { position, .. }
            | Base32kError::InvalidPadding { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The offending code point of a format error, if this is one.
    pub fn codepoint(&self) -> Option<char> {
        match self {
            Base32kError::InvalidLane { codepoint, .. }
            | Base32kError::InvalidPadding { codepoint, .. } => Some(*codepoint),
            _ => None,
        }
    }

    /// True for errors caused by malformed encoded input.
    pub fn is_format_error(&self) -> bool {
        self.position().is_some()
    }
}
