//! Serde adapter for 256-bit integers carried as decimal strings, as the beacon
//! API does for `base_fee_per_gas`.

use serde::{
    Deserialize, Deserializer, Serializer,
    de::{Error as _, Unexpected},
};

use crate::aliases::U256;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    // `from_str_radix` skips `_` and reads an empty string as zero.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(D::Error::invalid_value(Unexpected::Str(&value), &"a decimal integer"));
    }
    U256::from_str_radix(&value, 10).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: U256,
    }

    #[test]
    fn test_decimal_round_trip() {
        let wrapper = Wrapper { value: U256::from(1_000_000_007u64) };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"value":"1000000007"}"#);
        assert_eq!(serde_json::from_str::<Wrapper>(&json).unwrap(), wrapper);
    }

    #[test]
    fn test_rejects_hex() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"0x10"}"#).is_err());
    }

    /// Empty strings and digit separators never decode to a value.
    #[test]
    fn test_rejects_empty_and_separators() {
        for input in ["", "_", "1_0", " 1", "-1"] {
            let json = format!(r#"{{"value":"{input}"}}"#);
            assert!(serde_json::from_str::<Wrapper>(&json).is_err(), "accepted {input:?}");
        }
    }
}
