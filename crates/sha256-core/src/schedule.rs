//! # Message Schedule Expansion
//!
//! Expands one 64-byte block into the 64-word schedule consumed by the
//! compression rounds. Words 0–15 are read big-endian from the block; words
//! 16–63 follow the recurrence
//!
//! ```text
//! w[i] = w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])   (mod 2^32)
//! ```
//!
//! Rotations use `u32::rotate_right`, a true rotation for every amount.

use crate::constants::{BLOCK_LEN, ROUNDS};

/// One block's message schedule.
pub type Schedule = [u32; ROUNDS];

/// σ0(x) = rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
#[inline]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1(x) = rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
#[inline]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a block into its 64-word message schedule.
///
/// Pure function of the block; a fresh schedule is built for every block
/// and dropped once that block has been compressed.
pub fn message_schedule(block: &[u8; BLOCK_LEN]) -> Schedule {
    let mut w = [0u32; ROUNDS];

    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
