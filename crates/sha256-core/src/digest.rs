//! # SHA-256 Digest
//!
//! `Sha256Digest` is the 32-byte output of one `sha256()` call. It owns its
//! bytes, so it outlives every buffer used while hashing.
//!
//! The raw bytes are the digest. Lowercase hex is provided for display and
//! comparison against published vectors, and is also the serde
//! representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compress::HashState;
use crate::constants::DIGEST_LEN;
use crate::error::Sha256Error;

/// A 256-bit SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize a final hash state: each word big-endian, `H0` first.
    pub fn from_state(state: &HashState) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (out, word) in bytes.chunks_exact_mut(4).zip(state) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning the raw bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from 64 hex characters (either case).
    ///
    /// # Errors
    ///
    /// `InvalidHexLength` if the string is not 64 characters long,
    /// `InvalidHexCharacter` for the first non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, Sha256Error> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(Sha256Error::InvalidHexLength {
                len: s.chars().count(),
            });
        }

        let mut bytes = [0u8; DIGEST_LEN];
        // Byte length is 64, so there are at most 64 chars and index / 2 < 32.
        for (index, character) in s.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(Sha256Error::InvalidHexCharacter { character, index })?;
            let byte = &mut bytes[index / 2];
            *byte = (*byte << 4) | nibble as u8;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Sha256Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Sha256Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256Digest({self})")
    }
}

impl FromStr for Sha256Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
