//! EIP-4844 blob types
//!
//! Blobs are large (~128KB) data chunks committed to via KZG commitments and
//! carried next to a block in a [`SignedBlockContents`](crate::electra::SignedBlockContents)
//! bundle.
//!
//! ## Key Properties
//!
//! - **Blob size**: Exactly 131,072 bytes (fixed by EIP-4844)
//! - **Commitment size**: 48 bytes (BLS12-381 G1 point)
//! - **Proof size**: 48 bytes (BLS12-381 G1 point)
//!
//! On the wire every one of them is a `0x`-prefixed hex string of exactly that
//! many bytes. Points are not checked for curve membership here; that belongs to
//! KZG verification.
//!
//! ## References
//!
//! - EIP-4844: <https://eips.ethereum.org/EIPS/eip-4844>
//! - Consensus specs: <https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/>

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{aliases::Bytes, codec::hex, error::HexError};

/// The number of bytes in a single blob.
///
/// 4096 field elements of 32 bytes each in the BLS12-381 scalar field.
///
/// **Do NOT change this value** - it's part of the Ethereum consensus protocol.
pub const BYTES_PER_BLOB: usize = 131_072;

/// The size of a KZG commitment in bytes (compressed G1 point).
pub const BYTES_PER_COMMITMENT: usize = 48;

/// The size of a KZG proof in bytes (compressed G1 point).
pub const BYTES_PER_PROOF: usize = 48;

/// A single blob containing arbitrary data.
///
/// The payload is held in a reference-counted [`Bytes`] rather than an inline
/// array: 128KB is too large to move around on the stack.
///
/// ## Example
///
/// ```rust
/// use beacon_wire_types::{aliases::Bytes, blob::{Blob, BYTES_PER_BLOB}};
///
/// let blob = Blob::new(Bytes::from(vec![0u8; BYTES_PER_BLOB])).unwrap();
/// assert_eq!(blob.data().len(), BYTES_PER_BLOB);
///
/// assert!(Blob::new(Bytes::from(vec![0u8; 1000])).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Blob {
    /// **Invariant**: This MUST be exactly `BYTES_PER_BLOB` (131,072) bytes.
    /// The constructor enforces this constraint.
    data: Bytes,
}

impl Blob {
    /// Creates a new blob from the given data.
    ///
    /// ## Errors
    ///
    /// Returns [`HexError::LengthMismatch`] if `data.len() != BYTES_PER_BLOB`.
    pub fn new(data: Bytes) -> Result<Self, HexError> {
        if data.len() != BYTES_PER_BLOB {
            return Err(HexError::LengthMismatch { expected: BYTES_PER_BLOB, actual: data.len() });
        }

        Ok(Self { data })
    }

    /// Returns a reference to the blob data.
    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

// 262k hex digits are useless in a panic message.
impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({}..)", hex::encode(&self.data[..4]))
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hex::serialize(&self.data, serializer)
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = hex::deserialize(deserializer, BYTES_PER_BLOB)?;
        Ok(Self { data: Bytes::from(bytes) })
    }
}

/// A KZG commitment to a blob.
///
/// The commitment is a point on the BLS12-381 curve (G1 group), serialized as a
/// compressed point. It does not validate curve membership.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KzgCommitment(
    /// The 48-byte commitment data (compressed BLS12-381 G1 point).
    pub [u8; BYTES_PER_COMMITMENT],
);

impl KzgCommitment {
    /// Creates a new KZG commitment from a 48-byte array.
    #[inline]
    pub const fn new(bytes: [u8; BYTES_PER_COMMITMENT]) -> Self {
        Self(bytes)
    }

    /// Creates a commitment from a byte slice.
    ///
    /// ## Errors
    ///
    /// Returns an error if the slice is not exactly 48 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HexError> {
        <[u8; BYTES_PER_COMMITMENT]>::try_from(bytes)
            .map(Self)
            .map_err(|_| HexError::LengthMismatch { expected: BYTES_PER_COMMITMENT, actual: bytes.len() })
    }
}

impl fmt::Display for KzgCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KzgCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KzgCommitment({self})")
    }
}

impl Serialize for KzgCommitment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hex::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for KzgCommitment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = hex::deserialize(deserializer, BYTES_PER_COMMITMENT)?;
        KzgCommitment::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}

/// A KZG proof that a blob matches its commitment.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KzgProof(
    /// The 48-byte proof data (compressed BLS12-381 G1 point).
    pub [u8; BYTES_PER_PROOF],
);

impl KzgProof {
    /// Creates a new KZG proof from a 48-byte array.
    #[inline]
    pub const fn new(bytes: [u8; BYTES_PER_PROOF]) -> Self {
        Self(bytes)
    }

    /// Creates a proof from a byte slice.
    ///
    /// ## Errors
    ///
    /// Returns an error if the slice is not exactly 48 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HexError> {
        <[u8; BYTES_PER_PROOF]>::try_from(bytes)
            .map(Self)
            .map_err(|_| HexError::LengthMismatch { expected: BYTES_PER_PROOF, actual: bytes.len() })
    }
}

impl fmt::Display for KzgProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KzgProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KzgProof({self})")
    }
}

impl Serialize for KzgProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hex::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for KzgProof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = hex::deserialize(deserializer, BYTES_PER_PROOF)?;
        KzgProof::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}
