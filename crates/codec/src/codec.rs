//! JSON and YAML codec traits.
//!
//! An object implements [`JsonCodec`] by naming its wire shape, building that
//! shape from itself, and unpacking a parsed shape back into a validated value.
//! [`YamlCodec`] is then provided for free: it reuses the same wire shape and
//! always finishes through [`JsonCodec::from_json`], so the two formats cannot
//! disagree on what they accept.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::{error::CodecError, flow};

/// Strict JSON codec for one object type.
pub trait JsonCodec: Sized {
    /// Object name used in error reports and log events.
    const OBJECT: &'static str;

    /// Field-for-field textual mirror of the JSON schema. Every field is
    /// optional so that absence is visible to [`JsonCodec::unpack`].
    type Wire: Serialize + DeserializeOwned;

    /// Builds the wire shape. Byte fields are hex-encoded, sequences keep
    /// their order.
    fn to_wire(&self) -> Self::Wire;

    /// Validates a parsed wire shape field by field, in declaration order, and
    /// rebuilds the domain object. Fails on the first invalid field.
    fn unpack(wire: Self::Wire) -> Result<Self, CodecError>;

    /// Serializes the object to JSON.
    fn to_json(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(&self.to_wire())
            .map_err(|source| CodecError::Serialize { object: Self::OBJECT, source })
    }

    /// Parses and validates a JSON document.
    fn from_json(input: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(input)
            .map_err(|err| CodecError::from_json(Self::OBJECT, err))
            .and_then(Self::unpack)
            .inspect_err(|err| {
                debug!(object = Self::OBJECT, %err, "Rejected document");
            })
    }
}

/// YAML codec layered on [`JsonCodec`].
///
/// Output is single-line flow style with `'`-delimited scalars:
///
/// ```text
/// {message: {slot: '1', ...}, signature: '0x8c2f...'}
/// ```
pub trait YamlCodec: JsonCodec {
    /// Serializes the object to flow-style YAML.
    ///
    /// The emitter double-quotes scalars; every `"` in its output is then
    /// replaced by `'`. This is exact only while no scalar contains a quote
    /// or backslash of its own, which holds for hex and decimal content.
    fn to_yaml(&self) -> Result<Vec<u8>, CodecError> {
        let value = serde_json::to_value(self.to_wire())
            .map_err(|source| CodecError::Serialize { object: Self::OBJECT, source })?;

        Ok(flow::to_string(&value).replace('"', "'").into_bytes())
    }

    /// Parses a YAML document into the wire shape, re-serializes it as JSON
    /// and hands it to [`JsonCodec::from_json`].
    fn from_yaml(input: &[u8]) -> Result<Self, CodecError> {
        let wire: Self::Wire = serde_yaml::from_slice(input).map_err(|source| {
            debug!(object = Self::OBJECT, %source, "Rejected YAML document");
            CodecError::InvalidYaml { object: Self::OBJECT, source }
        })?;

        let json = serde_json::to_vec(&wire)
            .map_err(|source| CodecError::Serialize { object: Self::OBJECT, source })?;
        trace!(object = Self::OBJECT, len = json.len(), "Relaying YAML document through JSON codec");

        Self::from_json(&json)
    }
}

impl<T: JsonCodec> YamlCodec for T {}
