//! # Message Padding
//!
//! Defines `PaddedMessage`, the only construction path for the byte buffer
//! that is fed block-by-block to the compression core.
//!
//! ## Invariants
//!
//! For a message of `L` bytes the padded buffer has length
//! `N = ceil((L + 9) / 64) * 64` and:
//!
//! - bytes `[0, L)` are the message;
//! - byte `L` is `0x80` (a single `1` bit followed by zeros);
//! - bytes `[L + 1, N - 8)` are zero;
//! - bytes `[N - 8, N)` hold `L * 8` as a big-endian `u64`.
//!
//! The length is always computed from the message, so any number of blocks
//! is produced. A message whose bit length does not fit in 64 bits is
//! rejected with [`Sha256Error::LengthOverflow`].

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::Sha256Error;

/// The `1` bit appended directly after the message, as a whole byte.
const MARKER: u8 = 0x80;

/// Message length in bits, or `LengthOverflow` if it needs more than 64 bits.
fn bit_len(len: usize) -> Result<u64, Sha256Error> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(Sha256Error::LengthOverflow { len })
}

/// Compute the padded buffer length for a message of `len` bytes.
///
/// Allocates nothing, so it can be used to validate sizes up front.
///
/// # Errors
///
/// Returns `Sha256Error::LengthOverflow` if the bit length of the message
/// cannot be represented in 64 bits, or the padded size in `usize`.
pub fn padded_len(len: usize) -> Result<usize, Sha256Error> {
    bit_len(len)?;
    len.checked_add(1 + LENGTH_FIELD_LEN)
        .and_then(|min| min.checked_add(BLOCK_LEN - 1))
        .map(|rounded| rounded / BLOCK_LEN * BLOCK_LEN)
        .ok_or(Sha256Error::LengthOverflow { len })
}

/// A message padded to a whole number of 64-byte blocks.
///
/// The inner buffer is private; `PaddedMessage::new()` is the only
/// constructor, so every value upholds the module invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage(Vec<u8>);

impl PaddedMessage {
    /// Pad `message` per the SHA-256 padding rule.
    ///
    /// # Errors
    ///
    /// Returns `Sha256Error::LengthOverflow` for messages whose bit length
    /// exceeds 64 bits.
    pub fn new(message: &[u8]) -> Result<Self, Sha256Error> {
        let total = padded_len(message.len())?;
        let bits = bit_len(message.len())?;

        let mut buf = Vec::with_capacity(total);
        buf.extend_from_slice(message);
        buf.push(MARKER);
        buf.resize(total - LENGTH_FIELD_LEN, 0);
        buf.extend_from_slice(&bits.to_be_bytes());
        Ok(Self(buf))
    }

    /// Access the padded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Total padded length in bytes. Always a non-zero multiple of 64.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of 64-byte blocks in the buffer.
    pub fn block_count(&self) -> usize {
        self.0.len() / BLOCK_LEN
    }

    /// Iterate over the blocks in message order.
    pub fn blocks(&self) -> impl Iterator<Item = [u8; BLOCK_LEN]> + '_ {
        self.0.chunks_exact(BLOCK_LEN).map(|chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            block
        })
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
