//! Test utilities and fixtures for vecgen development.
//!
//! Provides seeded RNG constructors, a stuck [`ConstRng`] for exercising
//! rejection-sampling limits, and helpers for building and inspecting
//! memory image buffers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vecgen_core::{Vector, LANES, LANE_BYTES};

/// Base address used by memory image fixtures.
pub const TEST_BASE: u32 = 0x1000;

/// A deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A zeroed memory image buffer of `len` bytes.
pub fn zeroed_image(len: usize) -> Vec<u8> {
    vec![0; len]
}

/// A zeroed buffer large enough for one vector at the given stride.
pub fn vector_image(stride: usize) -> Vec<u8> {
    zeroed_image(stride * (LANES - 1) + LANE_BYTES)
}

/// Read the little-endian `u32` at buffer index `index`.
///
/// Panics if the read runs past the end of `bytes`.
pub fn read_u32_le(bytes: &[u8], index: usize) -> u32 {
    let mut word = [0u8; LANE_BYTES];
    word.copy_from_slice(&bytes[index..index + LANE_BYTES]);
    u32::from_le_bytes(word)
}

/// Vector whose lane `i` is `start + i`.
pub fn ramp_vector(start: u32) -> Vector {
    std::array::from_fn(|i| start.wrapping_add(i as u32))
}

/// An RNG that returns the same word forever.
///
/// Any allocator asking it for distinct values can collect at most one,
/// so it drives the draw-budget path deterministically.
#[derive(Clone, Debug)]
pub struct ConstRng {
    word: u64,
}

impl ConstRng {
    pub fn new(word: u64) -> Self {
        Self { word }
    }
}

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (byte, src) in dst.iter_mut().zip(self.word.to_le_bytes().iter().cycle()) {
            *byte = *src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u32_le_is_little_endian() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xff];
        assert_eq!(read_u32_le(&bytes, 0), 0x1234_5678);
    }

    #[test]
    fn vector_image_fits_last_lane() {
        assert_eq!(vector_image(4).len(), 64);
        assert_eq!(vector_image(8).len(), 124);
    }

    #[test]
    fn const_rng_repeats() {
        let mut rng = ConstRng::new(0xdead_beef);
        assert_eq!(rng.next_u32(), 0xdead_beef);
        assert_eq!(rng.next_u32(), 0xdead_beef);
    }
}
