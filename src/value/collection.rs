//! The collection dispatcher.
//!
//! Classifies a [`Value`] as an ordered sequence or a keyed mapping, and
//! provides the validators every traversal primitive runs before operating.
//! Classification is unambiguous: a value is exactly one of the two variants
//! or neither. Sequences are excluded from the mapping variant, and the
//! missing marker is neither.

use crate::error::Error;
use crate::value::{Mapping, Value};

/// A borrowed view of a collection, dispatched on by the traversal core.
///
/// # Examples
///
/// ```rust
/// use hanuman::{mapping, seq};
/// use hanuman::value::{Collection, Value};
///
/// let sequence = seq![1, 2, 3];
/// assert!(matches!(Collection::classify(&sequence), Some(Collection::Seq(_))));
///
/// let entries = mapping! { "a" => 1 };
/// assert!(matches!(Collection::classify(&entries), Some(Collection::Map(_))));
///
/// assert!(Collection::classify(&Value::Null).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    /// An ordered sequence of values.
    Seq(&'a [Value]),
    /// A keyed mapping of text keys to values.
    Map(&'a Mapping),
}

impl<'a> Collection<'a> {
    /// Classifies a value, returning `None` when it is neither a sequence
    /// nor a mapping.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Seq(items) => Some(Self::Seq(items)),
            Value::Map(entries) => Some(Self::Map(entries)),
            _ => None,
        }
    }

    /// Classifies a value, failing with [`Error::NotCollection`] when it is
    /// neither variant.
    pub fn expect(value: &'a Value) -> Result<Self, Error> {
        Self::classify(value).ok_or(Error::NotCollection)
    }
}

/// Validates that a value is an ordered sequence and borrows its elements.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for any other value.
pub fn expect_sequence(value: &Value) -> Result<&[Value], Error> {
    value.as_sequence().ok_or(Error::NotSequence)
}

/// Validates that a value is a keyed mapping and borrows its entries.
///
/// # Errors
///
/// Fails with [`Error::NotMapping`] for any other value.
pub fn expect_mapping(value: &Value) -> Result<&Mapping, Error> {
    value.as_mapping().ok_or(Error::NotMapping)
}

/// Validates that a value is callable and borrows the callable.
///
/// # Errors
///
/// Fails with [`Error::NotCallable`] for any other value.
pub fn expect_callable(value: &Value) -> Result<&crate::curry::Curried, Error> {
    value.as_callable().ok_or(Error::NotCallable)
}
