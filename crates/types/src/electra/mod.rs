//! Electra fork containers.

pub mod block;
pub mod execution_requests;
pub mod operations;

pub use block::{
    BeaconBlock, BeaconBlockBody, BlindedBeaconBlockBody, SignedBeaconBlock, SignedBlockContents,
};
pub use execution_requests::{
    ConsolidationRequest, DepositRequest, ExecutionRequests, WithdrawalRequest,
};
pub use operations::{Attestation, AttesterSlashing, IndexedAttestation};
