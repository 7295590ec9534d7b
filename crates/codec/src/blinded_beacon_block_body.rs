//! JSON codec for [`BlindedBeaconBlockBody`].
//!
//! All fields are mandatory except `bls_to_execution_changes`, which defaults
//! to an empty list when absent.

use beacon_wire_types::{
    altair::SyncAggregate,
    blob::{BYTES_PER_COMMITMENT, KzgCommitment},
    capella::SignedBlsToExecutionChange,
    codec::hex,
    constants::{BLS_SIGNATURE_LENGTH, GRAFFITI_LENGTH},
    deneb::ExecutionPayloadHeader,
    electra::{Attestation, AttesterSlashing, BlindedBeaconBlockBody, ExecutionRequests},
    phase0::{Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
};
use serde::{Deserialize, Serialize};

use crate::{
    codec::JsonCodec,
    error::CodecError,
    unpack::{
        hex_field, hex_list_field, list_field, object_field, optional_list_field, wire_list,
    },
};

/// Wire shape of a blinded beacon block body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlindedBeaconBlockBodyWire {
    pub randao_reveal: Option<String>,
    pub eth1_data: Option<Eth1Data>,
    pub graffiti: Option<String>,
    pub proposer_slashings: Option<Vec<Option<ProposerSlashing>>>,
    pub attester_slashings: Option<Vec<Option<AttesterSlashing>>>,
    pub attestations: Option<Vec<Option<Attestation>>>,
    pub deposits: Option<Vec<Option<Deposit>>>,
    pub voluntary_exits: Option<Vec<Option<SignedVoluntaryExit>>>,
    pub sync_aggregate: Option<SyncAggregate>,
    pub execution_payload_header: Option<ExecutionPayloadHeader>,
    pub bls_to_execution_changes: Option<Vec<Option<SignedBlsToExecutionChange>>>,
    pub blob_kzg_commitments: Option<Vec<Option<String>>>,
    pub execution_requests: Option<ExecutionRequests>,
}

impl JsonCodec for BlindedBeaconBlockBody {
    const OBJECT: &'static str = "BlindedBeaconBlockBody";

    type Wire = BlindedBeaconBlockBodyWire;

    fn to_wire(&self) -> Self::Wire {
        BlindedBeaconBlockBodyWire {
            randao_reveal: Some(hex::encode(self.randao_reveal)),
            eth1_data: Some(self.eth1_data.clone()),
            graffiti: Some(hex::encode(self.graffiti)),
            proposer_slashings: wire_list(&self.proposer_slashings),
            attester_slashings: wire_list(&self.attester_slashings),
            attestations: wire_list(&self.attestations),
            deposits: wire_list(&self.deposits),
            voluntary_exits: wire_list(&self.voluntary_exits),
            sync_aggregate: Some(self.sync_aggregate.clone()),
            execution_payload_header: Some(self.execution_payload_header.clone()),
            bls_to_execution_changes: wire_list(&self.bls_to_execution_changes),
            blob_kzg_commitments: Some(
                self.blob_kzg_commitments.iter().map(|c| Some(c.to_string())).collect(),
            ),
            execution_requests: Some(self.execution_requests.clone()),
        }
    }

    fn unpack(wire: Self::Wire) -> Result<Self, CodecError> {
        const OBJECT: &str = BlindedBeaconBlockBody::OBJECT;

        let randao_reveal =
            hex_field::<BLS_SIGNATURE_LENGTH>(OBJECT, "randao_reveal", wire.randao_reveal)?;
        let eth1_data = object_field(OBJECT, "eth1_data", wire.eth1_data)?;
        let graffiti = hex_field::<GRAFFITI_LENGTH>(OBJECT, "graffiti", wire.graffiti)?;
        let proposer_slashings =
            list_field(OBJECT, "proposer_slashings", wire.proposer_slashings)?;
        let attester_slashings =
            list_field(OBJECT, "attester_slashings", wire.attester_slashings)?;
        let attestations = list_field(OBJECT, "attestations", wire.attestations)?;
        let deposits = list_field(OBJECT, "deposits", wire.deposits)?;
        let voluntary_exits = list_field(OBJECT, "voluntary_exits", wire.voluntary_exits)?;
        let sync_aggregate = object_field(OBJECT, "sync_aggregate", wire.sync_aggregate)?;
        let execution_payload_header =
            object_field(OBJECT, "execution_payload_header", wire.execution_payload_header)?;
        let bls_to_execution_changes =
            optional_list_field(OBJECT, "bls_to_execution_changes", wire.bls_to_execution_changes)?;
        let blob_kzg_commitments = hex_list_field(
            OBJECT,
            "blob_kzg_commitments",
            wire.blob_kzg_commitments,
            BYTES_PER_COMMITMENT,
            |bytes| KzgCommitment::from_slice(&bytes),
        )?;
        let execution_requests =
            object_field(OBJECT, "execution_requests", wire.execution_requests)?;

        Ok(Self {
            randao_reveal: randao_reveal.into(),
            eth1_data,
            graffiti: graffiti.into(),
            proposer_slashings,
            attester_slashings,
            attestations,
            deposits,
            voluntary_exits,
            sync_aggregate,
            execution_payload_header,
            bls_to_execution_changes,
            blob_kzg_commitments,
            execution_requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use beacon_wire_test_support::blocks::{kzg_commitment, sample_blinded_beacon_block_body};

    use super::*;

    #[test]
    fn test_commitments_are_prefixed_hex() {
        let body = sample_blinded_beacon_block_body(5, 2);
        let wire = body.to_wire();

        let commitments = wire.blob_kzg_commitments.unwrap();
        assert_eq!(commitments.len(), 2);
        assert_eq!(commitments[0].as_deref(), Some(kzg_commitment(5).to_string().as_str()));
        assert!(commitments.iter().flatten().all(|c| c.starts_with("0x") && c.len() == 98));
    }

    #[test]
    fn test_unpack_wire_round_trip() {
        let body = sample_blinded_beacon_block_body(5, 2);
        assert_eq!(BlindedBeaconBlockBody::unpack(body.to_wire()).unwrap(), body);
    }

    #[test]
    fn test_missing_optional_list_defaults() {
        let body = sample_blinded_beacon_block_body(5, 1);
        let mut wire = body.to_wire();
        wire.bls_to_execution_changes = None;

        let decoded = BlindedBeaconBlockBody::unpack(wire).unwrap();
        assert!(decoded.bls_to_execution_changes.is_empty());
        assert_eq!(decoded.deposits, body.deposits);
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let mut wire = sample_blinded_beacon_block_body(5, 1).to_wire();
        wire.graffiti = None;
        wire.randao_reveal = None;
        wire.execution_requests = None;

        let err = BlindedBeaconBlockBody::unpack(wire).unwrap_err();
        assert!(matches!(err, CodecError::FieldMissing { field: "randao_reveal", .. }));
    }
}
