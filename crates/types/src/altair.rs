//! Altair sync committee aggregate.

use serde::{Deserialize, Serialize};

use crate::aliases::{BlsSignature, SyncCommitteeBits};

/// Sync committee participation bits and the aggregate signature over the
/// previous slot's block root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAggregate {
    pub sync_committee_bits: SyncCommitteeBits,
    pub sync_committee_signature: BlsSignature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_aggregate_lengths_are_enforced() {
        let aggregate = SyncAggregate {
            sync_committee_bits: SyncCommitteeBits::repeat_byte(0xff),
            sync_committee_signature: BlsSignature::repeat_byte(0x0c),
        };

        let mut value = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(serde_json::from_value::<SyncAggregate>(value.clone()).unwrap(), aggregate);

        value["sync_committee_bits"] = serde_json::json!(format!("0x{}", "ff".repeat(63)));
        assert!(serde_json::from_value::<SyncAggregate>(value).is_err());
    }
}
