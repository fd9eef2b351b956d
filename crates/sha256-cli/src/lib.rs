//! # sha256-cli — SHA-256 Command-Line Interface
//!
//! The presentation layer around `sha256-core`: reads the message, invokes
//! the core once (or twice for hash-of-hash), and renders results as hex
//! text or JSON.
//!
//! ## Subcommands
//!
//! - `hash` — Hash a string or file, optionally double-hash and time it
//! - `verify` — Compare the digest against an expected hex literal
//! - `inspect` — Dump the padded blocks and message schedules in binary
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; every handler returns a
//!   report value and `main` does the printing.
//! - No hashing logic here: all digest computation goes through
//!   `sha256_core`.

pub mod hash;
pub mod input;
pub mod inspect;
pub mod verify;
