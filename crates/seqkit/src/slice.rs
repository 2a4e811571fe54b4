//! Helpers over fully materialized slices.

use std::{collections::HashSet, hash::Hash};

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result, SeqIterator};

/// Splits `vs` into groups of `size` elements. The last group holds whatever
/// is left when `vs` cannot be split evenly.
pub fn chunk<T>(vs: &[T], size: usize) -> Result<Vec<&[T]>> {
    if size == 0 {
        debug!("chunk called with a zero size over {} elements", vs.len());
        return Err(Error::InvalidSize { size });
    }
    Ok(vs.chunks(size).collect())
}

/// Removes every element equal to the type's default (zero) value.
pub fn compact<T>(vs: &[T]) -> Vec<T>
where
    T: Clone + Default + PartialEq,
{
    let zero = T::default();
    drop_if(vs, |v| *v == zero)
}

/// Keeps the elements of `vs` for which `dropper` returns `false`.
pub fn drop_if<T, F>(vs: &[T], mut dropper: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seqiter::slice(vs)
        .filter(|v| !dropper(v))
        .into_std()
        .collect()
}

/// Elements of `vs` that do not appear in `xs`.
pub fn difference<T>(vs: &[T], xs: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    if vs.is_empty() || xs.is_empty() {
        return vs.to_vec();
    }
    drop_if(vs, |v| exists(v, xs))
}

/// Elements of `vs` that also appear in `xs`, in `vs` order.
pub fn intersection<T>(vs: &[T], xs: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    if vs.is_empty() || xs.is_empty() {
        return vec![];
    }
    drop_if(vs, |v| !exists(v, xs))
}

#[inline]
pub fn exists<T>(v: &T, xs: &[T]) -> bool
where
    T: PartialEq,
{
    xs.contains(v)
}

/// Folds `vs` left to right starting from `initial`. `f` also receives the index.
pub fn reduce<T, R, F>(vs: &[T], mut f: F, initial: R) -> R
where
    F: FnMut(R, &T, usize) -> R,
{
    vs.iter()
        .enumerate()
        .fold(initial, |acc, (index, v)| f(acc, v, index))
}

/// Removes duplicates, keeping the first occurrence of every value.
pub fn unique<T>(xs: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(xs.len());
    drop_if(xs, |x| !seen.insert(x.clone()))
}

/// Flattens arbitrarily nested JSON arrays into a single `Vec<T>`.
///
/// A value that already deserializes into `T` is taken as is, otherwise arrays
/// are descended into. `null` at the top level gives an empty vector.
pub fn flatten<T>(value: &Value) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut out = vec![];
    if !value.is_null() {
        flatten_into(value, &mut out)?;
    }
    Ok(out)
}

/// Parses `text` as JSON and [`flatten`]s it.
pub fn flatten_str<T>(text: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_str(text)?;
    flatten(&value)
}

fn flatten_into<T>(value: &Value, out: &mut Vec<T>) -> Result<()>
where
    T: DeserializeOwned,
{
    match (T::deserialize(value), value) {
        (Ok(v), _) => out.push(v),
        (Err(_), Value::Array(values)) => {
            for v in values {
                flatten_into(v, out)?;
            }
        }
        (Err(err), _) => {
            let kind = kind_of(value);
            debug!("flatten met a JSON {kind} it cannot convert: {err}");
            return Err(Error::UnsupportedValue {
                kind,
                reason: err.to_string(),
            });
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
