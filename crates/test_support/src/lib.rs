//! Shared helpers used by the beacon-wire integration and unit tests.
//!
//! This crate hosts deterministic fixtures and proptest strategies that need
//! to stay in sync across multiple test suites. Every builder takes a `seed`
//! so that two fixtures built from different seeds differ in every byte field.

pub mod blocks;
pub mod execution_requests;
pub mod strategies;

use beacon_wire_types::aliases::{Address, FixedBytes};

/// Deterministic `N`-byte value: `seed, seed + 1, seed + 2, ...` (wrapping).
pub fn seeded_bytes<const N: usize>(seed: u8) -> FixedBytes<N> {
    FixedBytes::new(std::array::from_fn(|i| seed.wrapping_add(i as u8)))
}

/// Deterministic byte vector of length `len`.
pub fn seeded_vec(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| seed.wrapping_add(i as u8)).collect()
}

/// Deterministic execution address.
pub fn seeded_address(seed: u8) -> Address {
    Address::from(seeded_bytes::<20>(seed))
}
