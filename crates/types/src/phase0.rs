//! Phase0 containers that survive unchanged into Electra blocks.
//!
//! Integers are carried as decimal strings (`"12345"`), roots and signatures as
//! `0x`-prefixed hex, following the beacon API JSON schema. Every field is
//! mandatory; a missing one fails deserialization of the whole container.
//!
//! ## References
//! - Ethereum spec: `consensus-specs/specs/phase0/beacon-chain.md`

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::{
    aliases::{B256, BlsPublicKey, BlsSignature, Hash32, Root},
    constants::DEPOSIT_PROOF_LENGTH,
};

/// Eth1 chain data voted on by proposers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eth1Data {
    pub deposit_root: Root,
    #[serde(with = "serde_utils::quoted_u64")]
    pub deposit_count: u64,
    pub block_hash: Hash32,
}

/// Beacon block header (Ethereum consensus spec)
///
/// | Field             | Meaning                              |
/// |-------------------|--------------------------------------|
/// | `slot`            | Slot the block was proposed in       |
/// | `proposer_index`  | Validator index of the proposer      |
/// | `parent_root`     | Root of the parent block             |
/// | `state_root`      | Post-state root                      |
/// | `body_root`       | SSZ root of the block body           |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

impl BeaconBlockHeader {
    /// Create a new beacon block header
    pub fn new(
        slot: u64,
        proposer_index: u64,
        parent_root: Root,
        state_root: Root,
        body_root: Root,
    ) -> Self {
        Self { slot, proposer_index, parent_root, state_root, body_root }
    }
}

/// A beacon block header and the proposer's BLS signature over its root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: BlsSignature,
}

impl SignedBeaconBlockHeader {
    pub fn new(message: BeaconBlockHeader, signature: BlsSignature) -> Self {
        Self { message, signature }
    }
}

/// Two conflicting headers signed by the same proposer for the same slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: u64,
    pub root: Root,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationData {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    pub beacon_block_root: Root,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositData {
    pub pubkey: BlsPublicKey,
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
    pub signature: BlsSignature,
}

/// A deposit with its merkle proof against the deposit contract root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    /// Exactly [`DEPOSIT_PROOF_LENGTH`] branches.
    #[serde(deserialize_with = "deserialize_deposit_proof")]
    pub proof: Vec<B256>,
    pub data: DepositData,
}

fn deserialize_deposit_proof<'de, D>(deserializer: D) -> Result<Vec<B256>, D::Error>
where
    D: Deserializer<'de>,
{
    let proof = Vec::<B256>::deserialize(deserializer)?;
    if proof.len() != DEPOSIT_PROOF_LENGTH {
        return Err(D::Error::invalid_length(proof.len(), &"33 deposit proof branches"));
    }
    Ok(proof)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryExit {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: BlsSignature,
}
