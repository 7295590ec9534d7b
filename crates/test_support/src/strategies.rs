//! Proptest strategies over the fixture builders.
//!
//! The seed drives every byte field and the count drives every list length,
//! which is enough variety to exercise ordering and nesting without generating
//! hundreds of kilobytes per case.

use beacon_wire_types::electra::{BlindedBeaconBlockBody, SignedBeaconBlock, SignedBlockContents};
use proptest::prelude::*;

use crate::blocks::{
    sample_blinded_beacon_block_body, sample_signed_beacon_block, sample_signed_block_contents,
};

pub fn arb_signed_beacon_block() -> impl Strategy<Value = SignedBeaconBlock> {
    (any::<u8>(), 0usize..3, any::<u64>()).prop_map(|(seed, count, slot)| {
        let mut block = sample_signed_beacon_block(seed, count);
        block.message.slot = slot;
        block
    })
}

pub fn arb_blinded_beacon_block_body() -> impl Strategy<Value = BlindedBeaconBlockBody> {
    (any::<u8>(), 0usize..3, any::<[u8; 32]>()).prop_map(|(seed, count, graffiti)| {
        let mut body = sample_blinded_beacon_block_body(seed, count);
        body.graffiti = graffiti.into();
        body
    })
}

/// Blobs are 128KB each, so bundles stay small.
pub fn arb_signed_block_contents() -> impl Strategy<Value = SignedBlockContents> {
    (any::<u8>(), 0usize..2).prop_map(|(seed, blob_count)| sample_signed_block_contents(seed, blob_count))
}
