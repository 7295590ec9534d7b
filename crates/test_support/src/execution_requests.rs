//! Deterministic execution-request fixtures.

use beacon_wire_types::electra::{
    ConsolidationRequest, DepositRequest, ExecutionRequests, WithdrawalRequest,
};

use crate::{seeded_address, seeded_bytes};

/// Produce a request bundle with `count` entries of each kind.
///
/// Amounts and indices are derived from the seed so that fixtures built from
/// different seeds never compare equal.
pub fn sample_execution_requests(seed: u8, count: usize) -> ExecutionRequests {
    let base = u64::from(seed);
    ExecutionRequests {
        deposits: (0..count)
            .map(|i| DepositRequest {
                pubkey: seeded_bytes(seed),
                withdrawal_credentials: seeded_bytes(seed.wrapping_add(1)),
                amount: 32_000_000_000 + base,
                signature: seeded_bytes(seed.wrapping_add(2)),
                index: base * 100 + i as u64,
            })
            .collect(),
        withdrawals: (0..count)
            .map(|i| WithdrawalRequest {
                source_address: seeded_address(seed.wrapping_add(3)),
                validator_pubkey: seeded_bytes(seed.wrapping_add(4)),
                amount: base + i as u64,
            })
            .collect(),
        consolidations: (0..count)
            .map(|_| ConsolidationRequest {
                source_address: seeded_address(seed.wrapping_add(5)),
                source_pubkey: seeded_bytes(seed.wrapping_add(6)),
                target_pubkey: seeded_bytes(seed.wrapping_add(7)),
            })
            .collect(),
    }
}
