//! Property access over nested collections.
//!
//! [`get`] resolves a nested property path one level at a time, returning
//! the missing marker the moment any intermediate level is absent. The
//! pick/omit family copies listed entries into a fresh mapping, always
//! deep-cloning the copied values rather than aliasing them.

use std::collections::BTreeSet;

use crate::equality::deep_clone;
use crate::error::Error;
use crate::traverse::reduce;
use crate::value::{Collection, Mapping, Value, expect_mapping, expect_sequence};

/// Resolves a nested property from a collection.
///
/// `props` may be a single key or index, a dot-delimited text path (split
/// on `.`), or an explicit sequence of keys and indices. A text key inside
/// an explicit sequence is *not* split further. The walk returns
/// `Value::Null` the moment any intermediate level is missing, without
/// failing.
///
/// # Errors
///
/// Fails with [`Error::NotCollection`] when the root input is not a
/// collection, and with [`Error::NotSequence`] when `props` is neither a
/// key, an index, nor a sequence of them.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let nested = mapping! { "a" => mapping! { "b" => mapping! { "c" => 44 } } };
/// assert_eq!(get(&Value::from("a.b.c"), &nested)?, Value::Number(44.0));
///
/// let partial = mapping! { "a" => mapping! { "b" => mapping! { "x" => 1 } } };
/// assert_eq!(get(&Value::from("a.b.c"), &partial)?, Value::Null);
///
/// let records = seq![mapping! { "a" => 44 }, mapping! { "a" => 55 }];
/// assert_eq!(get(&seq![0, "a"], &records)?, Value::Number(44.0));
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn get(props: &Value, collection: &Value) -> Result<Value, Error> {
    Collection::expect(collection)?;

    let segments: Vec<Value> = match props {
        Value::Text(path) => path.split('.').map(Value::from).collect(),
        Value::Number(_) => vec![props.clone()],
        Value::Seq(keys) => keys.clone(),
        _ => return Err(Error::NotSequence),
    };

    let mut current = collection;
    for segment in &segments {
        match step(current, segment) {
            Some(next) => current = next,
            None => return Ok(Value::Null),
        }
    }
    Ok(deep_clone(current))
}

/// The historical name of [`get`].
pub use self::get as path;

/// Resolves one level of a walk: an index into a sequence or a key into a
/// mapping.
fn step<'a>(current: &'a Value, key: &Value) -> Option<&'a Value> {
    match current {
        Value::Seq(items) => key_index(key).and_then(|index| items.get(index)),
        Value::Map(entries) => key_text(key).and_then(|name| entries.get(&name)),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn key_index(key: &Value) -> Option<usize> {
    match key {
        Value::Number(number) if number.fract() == 0.0 && *number >= 0.0 => {
            Some(*number as usize)
        }
        Value::Text(text) => text.parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::Text(text) => Some(text.clone()),
        Value::Number(number) if number.fract() == 0.0 => Some((*number as i64).to_string()),
        _ => None,
    }
}

/// A new mapping containing only the listed keys of `mapping`.
///
/// Keys absent from the source are omitted; presence is an ownership check
/// on the source mapping, not a non-null check, so a key bound to `Null`
/// is still copied. Copied values are deep-cloned.
///
/// # Errors
///
/// Fails with [`Error::NotMapping`] when `mapping` is not a mapping, and
/// with [`Error::NotSequence`] when `props` is not a sequence.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let source = mapping! { "a" => 44, "b" => 55, "c" => 66 };
/// assert_eq!(
///     pick(&seq!["a", "b"], &source)?,
///     mapping! { "a" => 44, "b" => 55 },
/// );
/// assert_eq!(
///     pick(&seq!["a", "missing"], &source)?,
///     mapping! { "a" => 44 },
/// );
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn pick(props: &Value, mapping: &Value) -> Result<Value, Error> {
    let entries = expect_mapping(mapping)?;
    reduce(
        |mut output: Mapping, key, _| {
            if let Some(name) = key_text(key) {
                if let Some(item) = entries.get(&name) {
                    output.insert(name, deep_clone(item));
                }
            }
            Ok(output)
        },
        Mapping::new(),
        props,
    )
    .map(Value::Map)
}

/// Like [`pick`], but always includes every listed key, binding keys
/// absent from the source to `Value::Null`.
///
/// # Errors
///
/// Fails with [`Error::NotMapping`] when `mapping` is not a mapping, and
/// with [`Error::NotSequence`] when `props` is not a sequence.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let source = mapping! { "a" => 44, "c" => 66 };
/// assert_eq!(
///     pick_all(&seq!["a", "b", "c"], &source)?,
///     mapping! { "a" => 44, "b" => Value::Null, "c" => 66 },
/// );
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn pick_all(props: &Value, mapping: &Value) -> Result<Value, Error> {
    let entries = expect_mapping(mapping)?;
    reduce(
        |mut output: Mapping, key, _| {
            if let Some(name) = key_text(key) {
                let item = entries.get(&name).map_or(Value::Null, deep_clone);
                output.insert(name, item);
            }
            Ok(output)
        },
        Mapping::new(),
        props,
    )
    .map(Value::Map)
}

/// The inverse of [`pick`]: a new mapping with every source entry except
/// the listed keys. Retained values are deep-cloned.
///
/// # Errors
///
/// Fails with [`Error::NotMapping`] when `mapping` is not a mapping, and
/// with [`Error::NotSequence`] when `props` is not a sequence.
pub fn omit(props: &Value, mapping: &Value) -> Result<Value, Error> {
    let entries = expect_mapping(mapping)?;
    let excluded: BTreeSet<String> = expect_sequence(props)?
        .iter()
        .filter_map(key_text)
        .collect();

    let mut output = Mapping::new();
    for (key, item) in entries {
        if !excluded.contains(key) {
            output.insert(key.clone(), deep_clone(item));
        }
    }
    Ok(Value::Map(output))
}
