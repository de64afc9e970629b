//! Serde helpers for Nomad's JSON encoding.
//!
//! Nomad's Go encoder writes nil slices and maps as `null` rather than
//! omitting them. These helpers fold `null` into the type's default so model
//! definitions can use plain `Vec`/`BTreeMap` fields.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
