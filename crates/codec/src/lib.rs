//! Strict JSON and YAML codecs for Electra beacon blocks
//!
//! This crate encodes and decodes the three top-level objects of the block
//! proposal API against the exact beacon API wire contract:
//!
//! - [`SignedBeaconBlock`](beacon_wire_types::electra::SignedBeaconBlock)
//! - [`BlindedBeaconBlockBody`](beacon_wire_types::electra::BlindedBeaconBlockBody)
//! - [`SignedBlockContents`](beacon_wire_types::electra::SignedBlockContents)
//!
//! ## Architecture
//!
//! ```text
//!   domain object ──to_wire──▶ wire shape ──serde_json──▶ JSON bytes
//!                                   │
//!                                   └──flow emitter + "→'──▶ YAML bytes
//!
//!   YAML bytes ──serde_yaml──▶ wire shape ──serde_json──▶ JSON bytes
//!   JSON bytes ──serde_json──▶ wire shape ──unpack──▶ domain object
//! ```
//!
//! The YAML path always ends in the JSON unpack, so both formats share one
//! set of validation rules.
//!
//! ## Usage
//!
//! ```no_run
//! use beacon_wire_codec::{JsonCodec, YamlCodec};
//! use beacon_wire_types::electra::SignedBeaconBlock;
//!
//! # fn example(input: &[u8]) -> Result<(), beacon_wire_codec::CodecError> {
//! let block = SignedBeaconBlock::from_json(input)?;
//! let yaml = block.to_yaml()?;
//! assert_eq!(SignedBeaconBlock::from_yaml(&yaml)?, block);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

/// JSON and YAML codec traits.
pub mod codec;
/// Error types for the codecs.
pub mod error;
/// Flow-style YAML emitter.
pub mod flow;

mod blinded_beacon_block_body;
mod signed_beacon_block;
mod signed_block_contents;
mod unpack;

pub use blinded_beacon_block_body::BlindedBeaconBlockBodyWire;
pub use codec::{JsonCodec, YamlCodec};
pub use error::CodecError;
pub use signed_beacon_block::SignedBeaconBlockWire;
pub use signed_block_contents::SignedBlockContentsWire;
