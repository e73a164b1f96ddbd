//! Deterministic RNG for the injectable noise source.
//!
//! The rogue pattern is the only randomized operation in the crate, and its
//! generator is always passed in by the caller. Seeds can be derived per
//! component with BLAKE3 so separate sessions or turns get independent but
//! reproducible noise streams.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state PCG32
/// expects.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed from a base seed and a string key.
///
/// Hashes the base seed and key with BLAKE3 and truncates, so e.g.
/// `derive_component_seed(session_seed, "turn-3")` yields a stream
/// unrelated to other turns but stable across runs.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}
