//! # Error Types
//!
//! The compression pipeline itself is total; errors only arise at the
//! boundary: inputs too large to describe in a 64-bit bit-length field, and
//! malformed hex when a digest is parsed back from text.

use thiserror::Error;

/// Errors surfaced by the SHA-256 core and its adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha256Error {
    /// The message bit length (or its padded size) does not fit the 64-bit
    /// length field. Reported instead of silently truncating the length.
    #[error("length overflow: a message of {len} bytes cannot be padded (bit length exceeds 64 bits)")]
    LengthOverflow {
        /// Length of the rejected message in bytes.
        len: usize,
    },

    /// A hex-encoded digest did not have exactly 64 characters.
    #[error("invalid hex digest length: expected 64 characters, got {len}")]
    InvalidHexLength {
        /// Number of characters supplied.
        len: usize,
    },

    /// A hex-encoded digest contained a non-hex character.
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidHexCharacter {
        /// The offending character.
        character: char,
        /// Character offset within the input string.
        index: usize,
    },
}
