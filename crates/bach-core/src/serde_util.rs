//! Lenient deserializers for server payloads.
//!
//! The BACH server writes rows straight from SQLite and JSON files edited by
//! hand, so `null` shows up where strings are expected and booleans arrive
//! as `0`/`1`.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` (or a missing value, with `#[serde(default)]`) as `T::default()`.
///
/// # Errors
///
/// Propagates the inner deserializer error for values of the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrBool {
    Bool(bool),
    Int(i64),
}

/// Deserialize a SQLite-style flag (`0`, `1`, `true`, `false`, `null`).
///
/// # Errors
///
/// Fails when the value is neither a number, a boolean nor `null`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<IntOrBool>::deserialize(deserializer)? {
        Some(IntOrBool::Bool(value)) => value,
        Some(IntOrBool::Int(value)) => value != 0,
        None => false,
    })
}
