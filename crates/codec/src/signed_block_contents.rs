//! JSON codec for [`SignedBlockContents`].
//!
//! ```json
//! {"signed_block": <SignedBeaconBlock>, "kzg_proofs": ["0x.."], "blobs": ["0x.."]}
//! ```
//!
//! `signed_block` is unpacked by the [`SignedBeaconBlock`] codec; its failures
//! surface as [`CodecError::Nested`].

use beacon_wire_types::{
    aliases::Bytes,
    blob::{BYTES_PER_BLOB, BYTES_PER_PROOF, Blob, KzgProof},
    codec::hex,
    electra::{SignedBeaconBlock, SignedBlockContents},
};
use serde::{Deserialize, Serialize};

use crate::{
    codec::JsonCodec,
    error::CodecError,
    signed_beacon_block::SignedBeaconBlockWire,
    unpack::{hex_list_field, object_field},
};

/// Wire shape of a block-contents bundle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedBlockContentsWire {
    pub signed_block: Option<SignedBeaconBlockWire>,
    pub kzg_proofs: Option<Vec<Option<String>>>,
    pub blobs: Option<Vec<Option<String>>>,
}

impl JsonCodec for SignedBlockContents {
    const OBJECT: &'static str = "SignedBlockContents";

    type Wire = SignedBlockContentsWire;

    fn to_wire(&self) -> Self::Wire {
        SignedBlockContentsWire {
            signed_block: Some(self.signed_block.to_wire()),
            kzg_proofs: Some(self.kzg_proofs.iter().map(|proof| Some(proof.to_string())).collect()),
            blobs: Some(self.blobs.iter().map(|blob| Some(hex::encode(blob.data()))).collect()),
        }
    }

    fn unpack(wire: Self::Wire) -> Result<Self, CodecError> {
        const OBJECT: &str = SignedBlockContents::OBJECT;

        let signed_block = object_field(OBJECT, "signed_block", wire.signed_block)?;
        let signed_block = SignedBeaconBlock::unpack(signed_block).map_err(|source| {
            CodecError::Nested { object: OBJECT, field: "signed_block", source: Box::new(source) }
        })?;
        let kzg_proofs =
            hex_list_field(OBJECT, "kzg_proofs", wire.kzg_proofs, BYTES_PER_PROOF, |bytes| {
                KzgProof::from_slice(&bytes)
            })?;
        let blobs = hex_list_field(OBJECT, "blobs", wire.blobs, BYTES_PER_BLOB, |bytes| {
            Blob::new(Bytes::from(bytes))
        })?;

        Ok(Self { signed_block, kzg_proofs, blobs })
    }
}
