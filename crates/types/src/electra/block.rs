//! Electra beacon blocks.
//!
//! [`BeaconBlock`] and [`BeaconBlockBody`] carry derived serde codecs and travel
//! as nested values. [`SignedBeaconBlock`], [`BlindedBeaconBlockBody`] and
//! [`SignedBlockContents`] deliberately have none: their wire format, with its
//! presence rules and defaults, is owned by `beacon-wire-codec`.

use serde::{Deserialize, Serialize};

use crate::{
    aliases::{BlsSignature, Graffiti, Root},
    altair::SyncAggregate,
    blob::{Blob, KzgCommitment, KzgProof},
    capella::SignedBlsToExecutionChange,
    deneb::{ExecutionPayload, ExecutionPayloadHeader},
    electra::{Attestation, AttesterSlashing, ExecutionRequests},
    phase0::{Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockBody {
    pub randao_reveal: BlsSignature,
    pub eth1_data: Eth1Data,
    pub graffiti: Graffiti,
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload: ExecutionPayload,
    pub bls_to_execution_changes: Vec<SignedBlsToExecutionChange>,
    pub blob_kzg_commitments: Vec<KzgCommitment>,
    pub execution_requests: ExecutionRequests,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlock {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: Root,
    pub state_root: Root,
    pub body: BeaconBlockBody,
}

/// A beacon block and the proposer's signature over its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: BlsSignature,
}

/// A block body with the execution payload replaced by its header, as handed to
/// external block builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlindedBeaconBlockBody {
    pub randao_reveal: BlsSignature,
    pub eth1_data: Eth1Data,
    pub graffiti: Graffiti,
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload_header: ExecutionPayloadHeader,
    pub bls_to_execution_changes: Vec<SignedBlsToExecutionChange>,
    pub blob_kzg_commitments: Vec<KzgCommitment>,
    pub execution_requests: ExecutionRequests,
}

/// A signed block published together with its blobs and their KZG proofs.
///
/// `kzg_proofs[i]` proves `blobs[i]` against
/// `signed_block.message.body.blob_kzg_commitments[i]`; the pairing is not
/// checked here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedBlockContents {
    pub signed_block: SignedBeaconBlock,
    pub kzg_proofs: Vec<KzgProof>,
    pub blobs: Vec<Blob>,
}

impl SignedBlockContents {
    /// Number of blobs carried in the bundle.
    #[inline]
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }
}
