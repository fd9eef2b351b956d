//! # Whole-Buffer Hashing
//!
//! `sha256()` is the one hashing entry point: pad, then schedule and
//! compress every block in order starting from the IV, then emit the final
//! state as the digest. The remaining functions are adapters over it.

use crate::compress::compress_block;
use crate::constants::IV;
use crate::digest::Sha256Digest;
use crate::error::Sha256Error;
use crate::padding::PaddedMessage;

/// Compute the SHA-256 digest of `message`.
///
/// Supports any number of blocks; the padded length is derived from the
/// message length on every call.
///
/// # Errors
///
/// Returns `Sha256Error::LengthOverflow` if the message bit length does not
/// fit in 64 bits. No other failure is possible.
pub fn sha256(message: &[u8]) -> Result<Sha256Digest, Sha256Error> {
    let padded = PaddedMessage::new(message)?;
    let mut state = IV;
    for block in padded.blocks() {
        compress_block(&mut state, &block);
    }
    Ok(Sha256Digest::from_state(&state))
}

/// Hash the UTF-8 bytes of a string.
pub fn sha256_str(input: &str) -> Result<Sha256Digest, Sha256Error> {
    sha256(input.as_bytes())
}

/// Hash `message` and render the digest as 64 lowercase hex characters.
pub fn sha256_hex(message: &[u8]) -> Result<String, Sha256Error> {
    sha256(message).map(|digest| digest.to_hex())
}

/// Hash `message`, then hash the 32 raw digest bytes again.
///
/// The second pass hashes the binary digest, not its hex rendering.
pub fn sha256_twice(message: &[u8]) -> Result<Sha256Digest, Sha256Error> {
    let first = sha256(message)?;
    sha256(first.as_bytes())
}
