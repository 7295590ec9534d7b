//! Deterministic block fixtures.
//!
//! `count` controls the length of every list in the generated object, so
//! `count = 0` yields the smallest valid value and `count = 2` exercises
//! element ordering.

use beacon_wire_types::{
    aliases::{B256, Bloom, Bytes, U256},
    altair::SyncAggregate,
    blob::{BYTES_PER_BLOB, Blob, KzgCommitment, KzgProof},
    capella::{BlsToExecutionChange, SignedBlsToExecutionChange, Withdrawal},
    constants::DEPOSIT_PROOF_LENGTH,
    deneb::{ExecutionPayload, ExecutionPayloadHeader},
    electra::{
        Attestation, AttesterSlashing, BeaconBlock, BeaconBlockBody, BlindedBeaconBlockBody,
        IndexedAttestation, SignedBeaconBlock, SignedBlockContents,
    },
    phase0::{
        AttestationData, BeaconBlockHeader, Checkpoint, Deposit, DepositData, Eth1Data,
        ProposerSlashing, SignedBeaconBlockHeader, SignedVoluntaryExit, VoluntaryExit,
    },
};

use crate::{
    execution_requests::sample_execution_requests, seeded_address, seeded_bytes, seeded_vec,
};

fn repeat<T>(count: usize, seed: u8, build: impl Fn(u8) -> T) -> Vec<T> {
    (0..count).map(|i| build(seed.wrapping_add(i as u8))).collect()
}

pub fn eth1_data(seed: u8) -> Eth1Data {
    Eth1Data {
        deposit_root: seeded_bytes(seed),
        deposit_count: u64::from(seed) * 7,
        block_hash: seeded_bytes(seed.wrapping_add(1)),
    }
}

pub fn signed_header(seed: u8) -> SignedBeaconBlockHeader {
    SignedBeaconBlockHeader::new(
        BeaconBlockHeader::new(
            u64::from(seed) + 1_000,
            u64::from(seed),
            seeded_bytes(seed),
            seeded_bytes(seed.wrapping_add(1)),
            seeded_bytes(seed.wrapping_add(2)),
        ),
        seeded_bytes(seed.wrapping_add(3)),
    )
}

pub fn proposer_slashing(seed: u8) -> ProposerSlashing {
    ProposerSlashing {
        signed_header_1: signed_header(seed),
        signed_header_2: signed_header(seed.wrapping_add(9)),
    }
}

pub fn attestation_data(seed: u8) -> AttestationData {
    AttestationData {
        slot: u64::from(seed) + 64,
        index: 0,
        beacon_block_root: seeded_bytes(seed),
        source: Checkpoint { epoch: u64::from(seed), root: seeded_bytes(seed.wrapping_add(1)) },
        target: Checkpoint { epoch: u64::from(seed) + 1, root: seeded_bytes(seed.wrapping_add(2)) },
    }
}

pub fn indexed_attestation(seed: u8) -> IndexedAttestation {
    IndexedAttestation {
        attesting_indices: vec![u64::from(seed), u64::from(seed) + 3, u64::from(seed) + 11],
        data: attestation_data(seed),
        signature: seeded_bytes(seed.wrapping_add(4)),
    }
}

pub fn attester_slashing(seed: u8) -> AttesterSlashing {
    AttesterSlashing {
        attestation_1: indexed_attestation(seed),
        attestation_2: indexed_attestation(seed.wrapping_add(1)),
    }
}

pub fn attestation(seed: u8) -> Attestation {
    Attestation {
        aggregation_bits: Bytes::from(seeded_vec(seed, 5)),
        data: attestation_data(seed),
        signature: seeded_bytes(seed.wrapping_add(5)),
        committee_bits: seeded_bytes(seed.wrapping_add(6)),
    }
}

pub fn deposit(seed: u8) -> Deposit {
    Deposit {
        proof: (0..DEPOSIT_PROOF_LENGTH).map(|i| seeded_bytes(seed.wrapping_add(i as u8))).collect(),
        data: DepositData {
            pubkey: seeded_bytes(seed),
            withdrawal_credentials: seeded_bytes(seed.wrapping_add(1)),
            amount: 32_000_000_000,
            signature: seeded_bytes(seed.wrapping_add(2)),
        },
    }
}

pub fn voluntary_exit(seed: u8) -> SignedVoluntaryExit {
    SignedVoluntaryExit {
        message: VoluntaryExit { epoch: u64::from(seed) + 256, validator_index: u64::from(seed) },
        signature: seeded_bytes(seed.wrapping_add(1)),
    }
}

pub fn bls_to_execution_change(seed: u8) -> SignedBlsToExecutionChange {
    SignedBlsToExecutionChange {
        message: BlsToExecutionChange {
            validator_index: u64::from(seed),
            from_bls_pubkey: seeded_bytes(seed),
            to_execution_address: seeded_address(seed.wrapping_add(1)),
        },
        signature: seeded_bytes(seed.wrapping_add(2)),
    }
}

pub fn sync_aggregate(seed: u8) -> SyncAggregate {
    SyncAggregate {
        sync_committee_bits: seeded_bytes(seed),
        sync_committee_signature: seeded_bytes(seed.wrapping_add(1)),
    }
}

pub fn withdrawal(seed: u8) -> Withdrawal {
    Withdrawal {
        index: u64::from(seed),
        validator_index: u64::from(seed) + 5,
        address: seeded_address(seed),
        amount: 1_000 + u64::from(seed),
    }
}

pub fn execution_payload(seed: u8, count: usize) -> ExecutionPayload {
    ExecutionPayload {
        parent_hash: seeded_bytes(seed),
        fee_recipient: seeded_address(seed.wrapping_add(1)),
        state_root: seeded_bytes(seed.wrapping_add(2)),
        receipts_root: seeded_bytes(seed.wrapping_add(3)),
        logs_bloom: Bloom::new(seeded_bytes::<256>(seed).0),
        prev_randao: seeded_bytes(seed.wrapping_add(4)),
        block_number: u64::from(seed) + 1,
        gas_limit: 30_000_000,
        gas_used: 21_000 * count as u64,
        timestamp: 1_700_000_000 + u64::from(seed),
        extra_data: Bytes::from(seeded_vec(seed, 8)),
        base_fee_per_gas: U256::from(7_000_000_000u64) + U256::from(seed),
        block_hash: seeded_bytes(seed.wrapping_add(5)),
        transactions: repeat(count, seed, |s| Bytes::from(seeded_vec(s, 40))),
        withdrawals: repeat(count, seed, withdrawal),
        blob_gas_used: 131_072 * count as u64,
        excess_blob_gas: u64::from(seed),
    }
}

pub fn execution_payload_header(seed: u8) -> ExecutionPayloadHeader {
    ExecutionPayloadHeader {
        parent_hash: seeded_bytes(seed),
        fee_recipient: seeded_address(seed.wrapping_add(1)),
        state_root: seeded_bytes(seed.wrapping_add(2)),
        receipts_root: seeded_bytes(seed.wrapping_add(3)),
        logs_bloom: Bloom::new(seeded_bytes::<256>(seed).0),
        prev_randao: seeded_bytes(seed.wrapping_add(4)),
        block_number: u64::from(seed) + 1,
        gas_limit: 30_000_000,
        gas_used: 21_000,
        timestamp: 1_700_000_000 + u64::from(seed),
        extra_data: Bytes::new(),
        base_fee_per_gas: U256::from(7_000_000_000u64),
        block_hash: seeded_bytes(seed.wrapping_add(5)),
        transactions_root: seeded_bytes(seed.wrapping_add(6)),
        withdrawals_root: B256::repeat_byte(seed),
        blob_gas_used: 0,
        excess_blob_gas: 0,
    }
}

pub fn kzg_commitment(seed: u8) -> KzgCommitment {
    KzgCommitment::new(seeded_bytes::<48>(seed).0)
}

pub fn kzg_proof(seed: u8) -> KzgProof {
    KzgProof::new(seeded_bytes::<48>(seed.wrapping_add(128)).0)
}

pub fn blob(seed: u8) -> Blob {
    Blob::new(Bytes::from(seeded_vec(seed, BYTES_PER_BLOB))).expect("fixture blob has BYTES_PER_BLOB bytes")
}

pub fn sample_beacon_block_body(seed: u8, count: usize) -> BeaconBlockBody {
    BeaconBlockBody {
        randao_reveal: seeded_bytes(seed),
        eth1_data: eth1_data(seed),
        graffiti: seeded_bytes(seed.wrapping_add(1)),
        proposer_slashings: repeat(count, seed, proposer_slashing),
        attester_slashings: repeat(count, seed, attester_slashing),
        attestations: repeat(count, seed, attestation),
        deposits: repeat(count, seed, deposit),
        voluntary_exits: repeat(count, seed, voluntary_exit),
        sync_aggregate: sync_aggregate(seed),
        execution_payload: execution_payload(seed, count),
        bls_to_execution_changes: repeat(count, seed, bls_to_execution_change),
        blob_kzg_commitments: repeat(count, seed, kzg_commitment),
        execution_requests: sample_execution_requests(seed, count),
    }
}

pub fn sample_beacon_block(seed: u8, count: usize) -> BeaconBlock {
    BeaconBlock {
        slot: 9_000_000 + u64::from(seed),
        proposer_index: u64::from(seed) * 3,
        parent_root: seeded_bytes(seed),
        state_root: seeded_bytes(seed.wrapping_add(1)),
        body: sample_beacon_block_body(seed, count),
    }
}

pub fn sample_signed_beacon_block(seed: u8, count: usize) -> SignedBeaconBlock {
    SignedBeaconBlock {
        message: sample_beacon_block(seed, count),
        signature: seeded_bytes(seed.wrapping_add(42)),
    }
}

pub fn sample_blinded_beacon_block_body(seed: u8, count: usize) -> BlindedBeaconBlockBody {
    BlindedBeaconBlockBody {
        randao_reveal: seeded_bytes(seed),
        eth1_data: eth1_data(seed),
        graffiti: seeded_bytes(seed.wrapping_add(1)),
        proposer_slashings: repeat(count, seed, proposer_slashing),
        attester_slashings: repeat(count, seed, attester_slashing),
        attestations: repeat(count, seed, attestation),
        deposits: repeat(count, seed, deposit),
        voluntary_exits: repeat(count, seed, voluntary_exit),
        sync_aggregate: sync_aggregate(seed),
        execution_payload_header: execution_payload_header(seed),
        bls_to_execution_changes: repeat(count, seed, bls_to_execution_change),
        blob_kzg_commitments: repeat(count, seed, kzg_commitment),
        execution_requests: sample_execution_requests(seed, count),
    }
}

/// A bundle whose block commits to `blob_count` blobs, each with its proof.
pub fn sample_signed_block_contents(seed: u8, blob_count: usize) -> SignedBlockContents {
    let mut signed_block = sample_signed_beacon_block(seed, 1);
    signed_block.message.body.blob_kzg_commitments = repeat(blob_count, seed, kzg_commitment);

    SignedBlockContents {
        signed_block,
        kzg_proofs: repeat(blob_count, seed, kzg_proof),
        blobs: repeat(blob_count, seed, blob),
    }
}
