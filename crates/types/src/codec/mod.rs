pub mod hex;
pub mod quoted_u256;

pub use self::hex::{HEX_PREFIX, decode, decode_fixed, encode};
