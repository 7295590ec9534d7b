//! Scalar hex codec.
//!
//! Byte fields travel as `0x`-prefixed lowercase hex on the wire. Encoding
//! always writes the prefix; decoding accepts it in either case, or not at all.

use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

use crate::error::HexError;

/// Prefix written in front of every encoded value.
pub const HEX_PREFIX: &str = "0x";

/// Renders `bytes` as lowercase hex with a `0x` prefix. Empty input yields `"0x"`.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    format!("{HEX_PREFIX}{}", ::hex::encode(bytes))
}

/// Decodes a hex string, optionally checking the decoded length.
///
/// ## Errors
///
/// - [`HexError::MalformedHex`] if the digits contain a non-hex character or
///   have an odd count.
/// - [`HexError::LengthMismatch`] if `expected_len` is given and differs from
///   the decoded length.
pub fn decode(input: &str, expected_len: Option<usize>) -> Result<Vec<u8>, HexError> {
    let bytes = ::hex::decode(strip_prefix(input))?;

    match expected_len {
        Some(expected) if bytes.len() != expected => {
            Err(HexError::LengthMismatch { expected, actual: bytes.len() })
        }
        _ => Ok(bytes),
    }
}

/// Decodes a hex string into a fixed-size array of exactly `N` bytes.
pub fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], HexError> {
    let bytes = decode(input, Some(N))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn strip_prefix(input: &str) -> &str {
    input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")).unwrap_or(input)
}

/// Serializes a byte slice as a prefixed hex string.
pub(crate) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode(bytes))
}

/// Deserializes a hex string of exactly `expected_len` bytes.
pub(crate) fn deserialize<'de, D>(deserializer: D, expected_len: usize) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    decode(&value, Some(expected_len)).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use ::hex::FromHexError;

    use super::*;

    #[test]
    fn test_encode_adds_prefix_and_lowercases() {
        assert_eq!(encode([0xAB, 0x01, 0xff]), "0xab01ff");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode([]), "0x");
    }

    #[test]
    fn test_decode_prefix_is_optional() {
        assert_eq!(decode("0x0102", None).unwrap(), vec![1, 2]);
        assert_eq!(decode("0X0102", None).unwrap(), vec![1, 2]);
        assert_eq!(decode("0102", None).unwrap(), vec![1, 2]);
        assert_eq!(decode("0x", None).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_accepts_uppercase_digits() {
        assert_eq!(decode("0xABCDEF", Some(3)).unwrap(), vec![0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let err = decode("0xZZ", Some(1)).unwrap_err();
        assert!(matches!(err, HexError::MalformedHex(FromHexError::InvalidHexCharacter { .. })));
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let err = decode("0x123", None).unwrap_err();
        assert_eq!(err, HexError::MalformedHex(FromHexError::OddLength));
    }

    #[test]
    fn test_decode_enforces_length() {
        let err = decode("0x0102", Some(3)).unwrap_err();
        assert_eq!(err, HexError::LengthMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_decode_fixed() {
        let out: [u8; 4] = decode_fixed("0xdeadbeef").unwrap();
        assert_eq!(out, [0xde, 0xad, 0xbe, 0xef]);

        let err = decode_fixed::<4>("0xdead").unwrap_err();
        assert_eq!(err, HexError::LengthMismatch { expected: 4, actual: 2 });
    }

    #[test]
    fn test_signature_lengths() {
        let ok = encode([7u8; 96]);
        assert_eq!(decode_fixed::<96>(&ok).unwrap(), [7u8; 96]);

        for len in [95usize, 97] {
            let err = decode_fixed::<96>(&encode(vec![7u8; len])).unwrap_err();
            assert_eq!(err, HexError::LengthMismatch { expected: 96, actual: len });
        }
    }
}
