//! Domain model for Electra beacon blocks and block contents.
//!
//! Sub-objects (`Eth1Data`, `SyncAggregate`, execution payload headers,
//! slashings, exits, deposits, execution requests) carry their own derived
//! serde codecs. The three top-level objects coded by `beacon-wire-codec`
//! ([`electra::SignedBeaconBlock`], [`electra::BlindedBeaconBlockBody`],
//! [`electra::SignedBlockContents`]) carry none.
//!
//! [`codec::hex`] is the scalar hex codec every byte field goes through.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![allow(missing_docs)]

pub mod aliases;
pub mod altair;
pub mod blob;
pub mod capella;
pub mod codec;
pub mod constants;
pub mod deneb;
pub mod electra;
pub mod error;
pub mod phase0;

pub use error::HexError;
