//! # Compression Core
//!
//! Runs the 64 SHA-256 rounds for one block and folds the result into the
//! chained hash state. All arithmetic is modular (`wrapping_*`); overflow is
//! part of the algorithm, not an error.
//!
//! Blocks must be compressed in message order: each block starts from the
//! state left by the previous one.

use crate::constants::{BLOCK_LEN, K, ROUNDS};
use crate::schedule::{message_schedule, Schedule};

/// The eight-word running hash state, `H0..H7`.
pub type HashState = [u32; 8];

/// Σ0(a) = rotr(a, 2) ^ rotr(a, 13) ^ rotr(a, 22)
#[inline]
fn big_sigma0(a: u32) -> u32 {
    a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22)
}

/// Σ1(e) = rotr(e, 6) ^ rotr(e, 11) ^ rotr(e, 25)
#[inline]
fn big_sigma1(e: u32) -> u32 {
    e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25)
}

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere.
#[inline]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Majority of `a`, `b`, `c` per bit.
#[inline]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Apply 64 compression rounds for one block's schedule to `state`.
///
/// The working variables start from `state`; after the last round each one
/// is added (mod 2^32) into the corresponding state word.
pub fn compress(state: &mut HashState, schedule: &Schedule) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(schedule[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

/// Expand `block` into its schedule and compress it into `state`.
pub fn compress_block(state: &mut HashState, block: &[u8; BLOCK_LEN]) {
    let schedule = message_schedule(block);
    compress(state, &schedule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::IV;
    use crate::padding::PaddedMessage;

    #[test]
    fn test_single_block_abc_state() {
        let block = PaddedMessage::new(b"abc").unwrap().blocks().next().unwrap();
        let mut state = IV;
        compress_block(&mut state, &block);
        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn test_compress_wraps_instead_of_overflowing() {
        // Saturated inputs overflow on every addition; debug builds would
        // panic here if any addition were not wrapping.
        let mut first = [u32::MAX; 8];
        compress(&mut first, &[u32::MAX; ROUNDS]);
        let mut second = [u32::MAX; 8];
        compress(&mut second, &[u32::MAX; ROUNDS]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_chaining_depends_on_block_order() {
        let padded = PaddedMessage::new(&[0x5a; 100]).unwrap();
        let blocks: Vec<_> = padded.blocks().collect();
        assert_eq!(blocks.len(), 2);

        let mut forward = IV;
        compress_block(&mut forward, &blocks[0]);
        compress_block(&mut forward, &blocks[1]);

        let mut reversed = IV;
        compress_block(&mut reversed, &blocks[1]);
        compress_block(&mut reversed, &blocks[0]);

        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_boolean_helpers() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0b1100, 0b1010, 0b0110), 0b1110);
        assert_eq!(big_sigma0(0), 0);
        assert_eq!(big_sigma1(0), 0);
    }
}
