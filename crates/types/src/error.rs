//! Error types for byte-field decoding.
use thiserror::Error;

/// Errors produced when turning a hex string into bytes, or when a byte
/// buffer does not have the length its type requires.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// The digits are not valid hex (bad character or odd digit count).
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] ::hex::FromHexError),

    /// The decoded value has the wrong number of bytes.
    #[error("incorrect length: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Length mandated by the field's type.
        expected: usize,
        /// Length actually decoded.
        actual: usize,
    },
}
