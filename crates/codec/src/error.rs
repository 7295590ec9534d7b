//! Error types for wire codec operations
use beacon_wire_types::HexError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a wire document.
///
/// Every variant names the object type being decoded, and where applicable the
/// field and element index that failed. Decoding is fail-fast: the first error
/// in declaration order is returned and no partial object survives.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not syntactically valid JSON.
    #[error("invalid JSON for {object}: {source}")]
    InvalidJson {
        object: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not valid YAML, or does not have the object's shape.
    #[error("invalid YAML for {object}: {source}")]
    InvalidYaml {
        object: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    /// A mandatory field is absent, `null`, or an empty string.
    #[error("{object}: {field} missing")]
    FieldMissing { object: &'static str, field: &'static str },

    /// A present field failed hex decoding or its length check.
    #[error("{object}: invalid value for {field}: {source}")]
    InvalidField {
        object: &'static str,
        field: &'static str,
        #[source]
        source: HexError,
    },

    /// A present sequence holds a `null` (or empty string) element.
    #[error("{object}: {field} entry {index} missing")]
    SequenceElementMissing { object: &'static str, field: &'static str, index: usize },

    /// An element of a byte-string sequence failed hex decoding or its length
    /// check.
    #[error("{object}: invalid value for {field} entry {index}: {source}")]
    InvalidSequenceElement {
        object: &'static str,
        field: &'static str,
        index: usize,
        #[source]
        source: HexError,
    },

    /// A nested value was rejected by its own codec while the document was
    /// parsed, e.g. a short root inside `eth1_data` or a field of the wrong type.
    #[error("{object}: invalid nested value: {source}")]
    InvalidValue {
        object: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A nested object coded by this crate failed to unpack.
    #[error("{object}: invalid {field}: {source}")]
    Nested {
        object: &'static str,
        field: &'static str,
        #[source]
        source: Box<CodecError>,
    },

    /// The wire shape could not be serialized.
    #[error("failed to serialize {object}: {source}")]
    Serialize {
        object: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    /// Classifies a `serde_json` parse failure: syntax problems are
    /// [`CodecError::InvalidJson`], anything a nested codec rejected is
    /// [`CodecError::InvalidValue`].
    pub(crate) fn from_json(object: &'static str, source: serde_json::Error) -> Self {
        if source.is_data() {
            Self::InvalidValue { object, source }
        } else {
            Self::InvalidJson { object, source }
        }
    }

    /// Walks through [`CodecError::Nested`] wrappers to the error that caused
    /// the rejection.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
