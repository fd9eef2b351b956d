//! # sha256-core — SHA-256 Hash Core
//!
//! Compresses an arbitrary-length byte sequence into a 256-bit digest
//! following the standard SHA-256 construction:
//!
//! 1. **Padding** (`padding`) — append `0x80`, zero fill, and the 64-bit
//!    big-endian bit length until the buffer is a whole number of 64-byte
//!    blocks.
//! 2. **Schedule expansion** (`schedule`) — each block's 16 big-endian words
//!    are expanded into a 64-word message schedule.
//! 3. **Compression** (`compress`) — 64 rounds per block, folded into the
//!    hash state chained from the previous block.
//! 4. **Digest emission** (`digest`) — the final eight state words written
//!    big-endian as 32 bytes.
//!
//! `sha256()` is the single entry point. String input and hex output are
//! thin adapters on top of it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every invocation owns its buffers; the only shared data are the
//!   read-only constant tables, so hashing independent messages from many
//!   threads needs no synchronization.

pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hash;
pub mod padding;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use compress::{compress, compress_block, HashState};
pub use constants::{BLOCK_LEN, DIGEST_LEN, IV, K};
pub use digest::Sha256Digest;
pub use error::Sha256Error;
pub use hash::{sha256, sha256_hex, sha256_str, sha256_twice};
pub use padding::{padded_len, PaddedMessage};
pub use schedule::{message_schedule, Schedule};
