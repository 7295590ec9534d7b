//! Shared helpers for codec integration tests.
//!
//! Negative documents are built from a valid encoding: the bytes are parsed
//! into a [`serde_json::Value`], edited in place, then re-serialized.

#![allow(dead_code)]

use std::sync::Once;

use beacon_wire_codec::JsonCodec;
use color_eyre::Result;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Installs a test writer subscriber once per test binary. `RUST_LOG` selects
/// what is shown; rejections are logged at `debug`.
pub(crate) fn init_tracing() {
    TRACING.call_once(|| {
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Encodes `object` to JSON and parses it back into a value tree for editing.
pub(crate) fn json_value<T: JsonCodec>(object: &T) -> Result<Value> {
    Ok(serde_json::from_slice(&object.to_json()?)?)
}

/// Encodes `object`, applies `edit` to its JSON value tree and returns the
/// resulting document bytes.
pub(crate) fn mutated_json<T: JsonCodec>(object: &T, edit: impl FnOnce(&mut Value)) -> Result<Vec<u8>> {
    let mut value = json_value(object)?;
    edit(&mut value);
    Ok(serde_json::to_vec(&value)?)
}

/// Mutable access to the value at a `/`-separated JSON pointer.
///
/// # Panics
///
/// Panics when the pointer does not resolve; the caller's fixture is wrong.
pub(crate) fn at<'a>(value: &'a mut Value, pointer: &str) -> &'a mut Value {
    value.pointer_mut(pointer).unwrap_or_else(|| panic!("no value at {pointer}"))
}

/// Removes `field` from the object at `pointer`.
pub(crate) fn remove(value: &mut Value, pointer: &str, field: &str) {
    let removed = at(value, pointer).as_object_mut().and_then(|object| object.shift_remove(field));
    assert!(removed.is_some(), "no field {field} at {pointer}");
}
