//! Protocol sizes shared across the beacon-wire crates.

/// Length of a compressed BLS12-381 G2 signature.
pub const BLS_SIGNATURE_LENGTH: usize = 96;

/// Length of a compressed BLS12-381 G1 public key.
pub const BLS_PUBLIC_KEY_LENGTH: usize = 48;

/// Length of the free-form graffiti a proposer stamps into a block body.
pub const GRAFFITI_LENGTH: usize = 32;

/// Depth of the deposit contract merkle tree. Deposit proofs carry one extra
/// branch for the mixed-in deposit count.
pub const DEPOSIT_CONTRACT_TREE_DEPTH: usize = 32;

/// Number of branches in a deposit proof.
pub const DEPOSIT_PROOF_LENGTH: usize = DEPOSIT_CONTRACT_TREE_DEPTH + 1;

/// Number of validators in a sync committee (mainnet preset).
pub const SYNC_COMMITTEE_SIZE: usize = 512;

/// Bytes needed to hold one bit per sync committee member.
pub const SYNC_COMMITTEE_BITS_LENGTH: usize = SYNC_COMMITTEE_SIZE / 8;

/// Maximum committees per slot (mainnet preset), one bit each in
/// `Attestation::committee_bits`.
pub const MAX_COMMITTEES_PER_SLOT: usize = 64;

/// Bytes needed to hold the Electra committee bitvector.
pub const COMMITTEE_BITS_LENGTH: usize = MAX_COMMITTEES_PER_SLOT / 8;
