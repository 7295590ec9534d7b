//! Field-level checks shared by every object's unpack pass.
//!
//! Each helper takes the object and field name so the error it returns
//! identifies exactly what failed.

use beacon_wire_types::{HexError, codec::hex};

use crate::error::CodecError;

/// Treats `None` and `""` alike: both mean the field was not supplied.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// A mandatory hex field of exactly `N` bytes.
pub(crate) fn hex_field<const N: usize>(
    object: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<[u8; N], CodecError> {
    let value = present(value).ok_or(CodecError::FieldMissing { object, field })?;
    hex::decode_fixed::<N>(&value).map_err(|source| CodecError::InvalidField { object, field, source })
}

/// A mandatory nested object.
pub(crate) fn object_field<T>(
    object: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, CodecError> {
    value.ok_or(CodecError::FieldMissing { object, field })
}

/// A mandatory sequence whose elements must all be present.
pub(crate) fn list_field<T>(
    object: &'static str,
    field: &'static str,
    value: Option<Vec<Option<T>>>,
) -> Result<Vec<T>, CodecError> {
    let list = value.ok_or(CodecError::FieldMissing { object, field })?;
    list.into_iter()
        .enumerate()
        .map(|(index, element)| {
            element.ok_or(CodecError::SequenceElementMissing { object, field, index })
        })
        .collect()
}

/// An optional sequence: absent means empty, present follows [`list_field`].
pub(crate) fn optional_list_field<T>(
    object: &'static str,
    field: &'static str,
    value: Option<Vec<Option<T>>>,
) -> Result<Vec<T>, CodecError> {
    match value {
        None => Ok(Vec::new()),
        list => list_field(object, field, list),
    }
}

/// A mandatory sequence of hex strings, each decoded to `expected_len` bytes
/// and handed to `build`.
///
/// All elements are checked for presence before any is decoded, so a missing
/// entry is reported ahead of a malformed one.
pub(crate) fn hex_list_field<T>(
    object: &'static str,
    field: &'static str,
    value: Option<Vec<Option<String>>>,
    expected_len: usize,
    build: impl Fn(Vec<u8>) -> Result<T, HexError>,
) -> Result<Vec<T>, CodecError> {
    let list = value.ok_or(CodecError::FieldMissing { object, field })?;
    let list: Vec<String> = list
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            present(element).ok_or(CodecError::SequenceElementMissing { object, field, index })
        })
        .collect::<Result<_, _>>()?;

    list.iter()
        .enumerate()
        .map(|(index, element)| {
            hex::decode(element, Some(expected_len))
                .and_then(&build)
                .map_err(|source| CodecError::InvalidSequenceElement { object, field, index, source })
        })
        .collect()
}

/// Wire form of an owned list: every element present, order kept.
pub(crate) fn wire_list<T: Clone>(items: &[T]) -> Option<Vec<Option<T>>> {
    Some(items.iter().cloned().map(Some).collect())
}
