//! Helpers over key-value maps.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use log::debug;

use crate::{Error, Result};

/// Builds a map pairing `keys[i]` with `values[i]`.
///
/// When a key repeats, the value paired with its last occurrence wins.
pub fn combine<K, V>(keys: Vec<K>, values: Vec<V>) -> Result<HashMap<K, V>>
where
    K: Eq + Hash,
{
    if keys.len() != values.len() {
        debug!(
            "combine got {} keys and {} values",
            keys.len(),
            values.len()
        );
        return Err(Error::ArgumentMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    Ok(keys.into_iter().zip(values).collect())
}

/// Every key of `m`, in the map's iteration order.
pub fn keys<K, V, S>(m: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
    S: BuildHasher,
{
    m.keys().cloned().collect()
}

/// Every value of `m`, in the map's iteration order.
pub fn values<K, V, S>(m: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
    S: BuildHasher,
{
    m.values().cloned().collect()
}
