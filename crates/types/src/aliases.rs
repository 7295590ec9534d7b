pub type U256 = alloy_primitives::U256;
pub type B256 = alloy_primitives::B256;
pub type Address = alloy_primitives::Address;
pub type Bloom = alloy_primitives::Bloom;
pub type Bytes = alloy_primitives::Bytes;
pub type FixedBytes<const N: usize> = alloy_primitives::FixedBytes<N>;

pub type Root = B256;
pub type Hash32 = B256;

pub type BlsSignature = FixedBytes<{ crate::constants::BLS_SIGNATURE_LENGTH }>;
pub type BlsPublicKey = FixedBytes<{ crate::constants::BLS_PUBLIC_KEY_LENGTH }>;
pub type Graffiti = FixedBytes<{ crate::constants::GRAFFITI_LENGTH }>;
pub type SyncCommitteeBits = FixedBytes<{ crate::constants::SYNC_COMMITTEE_BITS_LENGTH }>;
pub type CommitteeBits = FixedBytes<{ crate::constants::COMMITTEE_BITS_LENGTH }>;
