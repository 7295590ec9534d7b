//! Electra attestation containers (EIP-7549 moved the committee index out of
//! `AttestationData` into `committee_bits`).

use serde::{Deserialize, Serialize};

use crate::{
    aliases::{BlsSignature, Bytes, CommitteeBits},
    phase0::AttestationData,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// SSZ bitlist, including the length delimiter bit.
    pub aggregation_bits: Bytes,
    pub data: AttestationData,
    pub signature: BlsSignature,
    pub committee_bits: CommitteeBits,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedAttestation {
    #[serde(with = "serde_utils::quoted_u64_vec")]
    pub attesting_indices: Vec<u64>,
    pub data: AttestationData,
    pub signature: BlsSignature,
}

/// Two conflicting attestations signed by an overlapping set of validators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{aliases::B256, phase0::Checkpoint};

    #[test]
    fn test_attesting_indices_are_quoted() {
        let attestation = IndexedAttestation {
            attesting_indices: vec![1, 22, 333],
            data: AttestationData {
                slot: 9,
                index: 0,
                beacon_block_root: B256::repeat_byte(1),
                source: Checkpoint { epoch: 1, root: B256::repeat_byte(2) },
                target: Checkpoint { epoch: 2, root: B256::repeat_byte(3) },
            },
            signature: BlsSignature::repeat_byte(4),
        };

        let value = serde_json::to_value(&attestation).unwrap();
        assert_eq!(value["attesting_indices"], json!(["1", "22", "333"]));
        assert_eq!(serde_json::from_value::<IndexedAttestation>(value).unwrap(), attestation);
    }
}
