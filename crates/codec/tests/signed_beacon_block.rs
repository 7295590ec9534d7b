//! JSON codec tests for `SignedBeaconBlock`.
//!
//! Every negative case starts from a valid encoding and breaks exactly one
//! thing, so the reported field is unambiguous.

mod common;

use beacon_wire_codec::{CodecError, JsonCodec};
use beacon_wire_test_support::blocks::sample_signed_beacon_block;
use beacon_wire_types::{HexError, electra::SignedBeaconBlock};
use color_eyre::Result;
use common::{at, init_tracing, json_value, mutated_json, remove};
use serde_json::{Value, json};

/// Encoding then decoding yields an equal block.
#[test]
fn test_json_round_trip() -> Result<()> {
    init_tracing();
    let block = sample_signed_beacon_block(3, 2);

    let decoded = SignedBeaconBlock::from_json(&block.to_json()?)?;
    assert_eq!(decoded, block);
    Ok(())
}

/// Output keys follow declaration order and byte fields carry the `0x` prefix.
#[test]
fn test_json_layout() -> Result<()> {
    let block = sample_signed_beacon_block(3, 1);
    let value = json_value(&block)?;

    let keys: Vec<_> = value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
    assert_eq!(keys, ["message", "signature"]);

    let signature = value["signature"].as_str().unwrap_or_default();
    assert!(signature.starts_with("0x"));
    assert_eq!(signature.len(), 2 + 2 * 96);

    assert_eq!(value["message"]["slot"], json!(block.message.slot.to_string()));
    Ok(())
}

/// Re-encoding a decoded block reproduces the same bytes.
#[test]
fn test_encoding_is_stable() -> Result<()> {
    let block = sample_signed_beacon_block(8, 3);
    let first = block.to_json()?;
    let second = SignedBeaconBlock::from_json(&first)?.to_json()?;
    assert_eq!(first, second);
    Ok(())
}

/// Hex input without the `0x` prefix is accepted; output always restores it.
#[test]
fn test_unprefixed_signature_accepted() -> Result<()> {
    let block = sample_signed_beacon_block(4, 0);
    let doc = mutated_json(&block, |value| {
        let signature = at(value, "/signature");
        let bare = signature.as_str().map(|s| s.trim_start_matches("0x").to_owned());
        *signature = Value::from(bare);
    })?;

    let decoded = SignedBeaconBlock::from_json(&doc)?;
    assert_eq!(decoded, block);
    assert!(json_value(&decoded)?["signature"].as_str().is_some_and(|s| s.starts_with("0x")));
    Ok(())
}

#[test]
fn test_missing_signature() -> Result<()> {
    init_tracing();
    let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| remove(value, "", "signature"))?;

    let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
    assert!(matches!(
        err,
        CodecError::FieldMissing { object: "SignedBeaconBlock", field: "signature" }
    ));
    Ok(())
}

/// `null` and `""` are both treated as absent.
#[test]
fn test_null_and_empty_signature() -> Result<()> {
    for replacement in [Value::Null, json!("")] {
        let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| {
            *at(value, "/signature") = replacement.clone();
        })?;

        let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
        assert!(matches!(err, CodecError::FieldMissing { field: "signature", .. }));
    }
    Ok(())
}

#[test]
fn test_missing_message() -> Result<()> {
    let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| remove(value, "", "message"))?;

    let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
    assert!(matches!(err, CodecError::FieldMissing { field: "message", .. }));
    Ok(())
}

/// A 95 or 97 byte signature is rejected rather than padded or truncated.
#[test]
fn test_signature_length_mismatch() -> Result<()> {
    for len in [95usize, 97] {
        let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| {
            *at(value, "/signature") = json!(format!("0x{}", "ab".repeat(len)));
        })?;

        let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
        match err {
            CodecError::InvalidField {
                field: "signature",
                source: HexError::LengthMismatch { expected, actual },
                ..
            } => {
                assert_eq!(expected, 96);
                assert_eq!(actual, len);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    Ok(())
}

#[test]
fn test_malformed_signature_hex() -> Result<()> {
    let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| {
        *at(value, "/signature") = json!(format!("0x{}", "zz".repeat(96)));
    })?;

    let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidField { field: "signature", source: HexError::MalformedHex(_), .. }
    ));
    Ok(())
}

/// A short root inside the nested message is rejected by its own codec.
#[test]
fn test_nested_message_rejected() -> Result<()> {
    let doc = mutated_json(&sample_signed_beacon_block(4, 0), |value| {
        *at(value, "/message/parent_root") = json!("0x1234");
    })?;

    let err = SignedBeaconBlock::from_json(&doc).unwrap_err();
    assert!(matches!(err, CodecError::InvalidValue { object: "SignedBeaconBlock", .. }));
    Ok(())
}

#[test]
fn test_syntax_error() {
    let err = SignedBeaconBlock::from_json(b"{\"message\": ").unwrap_err();
    assert!(matches!(err, CodecError::InvalidJson { object: "SignedBeaconBlock", .. }));

    let err = SignedBeaconBlock::from_json(b"").unwrap_err();
    assert!(matches!(err, CodecError::InvalidJson { .. }));
}

/// An empty object reports the first declared field.
#[test]
fn test_empty_object() {
    let err = SignedBeaconBlock::from_json(b"{}").unwrap_err();
    assert!(matches!(err, CodecError::FieldMissing { field: "message", .. }));
}
