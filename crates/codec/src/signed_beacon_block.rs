//! JSON codec for [`SignedBeaconBlock`].
//!
//! ```json
//! {"message": <BeaconBlock>, "signature": "0x<96 bytes>"}
//! ```

use beacon_wire_types::{
    aliases::BlsSignature,
    codec::hex,
    constants::BLS_SIGNATURE_LENGTH,
    electra::{BeaconBlock, SignedBeaconBlock},
};
use serde::{Deserialize, Serialize};

use crate::{
    codec::JsonCodec,
    error::CodecError,
    unpack::{hex_field, object_field},
};

/// Wire shape of a signed beacon block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedBeaconBlockWire {
    pub message: Option<BeaconBlock>,
    pub signature: Option<String>,
}

impl JsonCodec for SignedBeaconBlock {
    const OBJECT: &'static str = "SignedBeaconBlock";

    type Wire = SignedBeaconBlockWire;

    fn to_wire(&self) -> Self::Wire {
        SignedBeaconBlockWire {
            message: Some(self.message.clone()),
            signature: Some(hex::encode(self.signature)),
        }
    }

    fn unpack(wire: Self::Wire) -> Result<Self, CodecError> {
        let message = object_field(Self::OBJECT, "message", wire.message)?;
        let signature =
            hex_field::<BLS_SIGNATURE_LENGTH>(Self::OBJECT, "signature", wire.signature)?;

        Ok(Self { message, signature: BlsSignature::new(signature) })
    }
}

#[cfg(test)]
mod tests {
    use beacon_wire_test_support::blocks::sample_signed_beacon_block;
    use beacon_wire_types::HexError;

    use super::*;

    #[test]
    fn test_wire_signature_is_prefixed_hex() {
        let block = sample_signed_beacon_block(1, 0);
        let wire = block.to_wire();

        let signature = wire.signature.unwrap();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 2 * BLS_SIGNATURE_LENGTH);
    }

    #[test]
    fn test_unpack_checks_message_before_signature() {
        let wire = SignedBeaconBlockWire { message: None, signature: None };
        let err = SignedBeaconBlock::unpack(wire).unwrap_err();
        assert!(matches!(err, CodecError::FieldMissing { field: "message", .. }));
    }

    #[test]
    fn test_unpack_rejects_short_signature() {
        let mut wire = sample_signed_beacon_block(1, 0).to_wire();
        wire.signature = Some(hex::encode([1u8; 95]));

        let err = SignedBeaconBlock::unpack(wire).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidField {
                field: "signature",
                source: HexError::LengthMismatch { expected: 96, actual: 95 },
                ..
            }
        ));
    }
}
