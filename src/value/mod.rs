//! The dynamic value model.
//!
//! [`Value`] is the tagged union every primitive operates on: the missing
//! marker, booleans, numbers, text, ordered sequences, keyed mappings, and
//! callables. It is the runtime-tag fallback at API boundaries that accept
//! untyped input; the typed traversal core dispatches on the borrowed
//! [`Collection`] view instead.
//!
//! Mappings are backed by `BTreeMap`, so enumeration order is the map's own
//! stable order. Callers must not depend on any particular key order beyond
//! that stability.

mod collection;
mod macros;
#[cfg(feature = "serde")]
mod serde;

pub use collection::{Collection, expect_callable, expect_mapping, expect_sequence};

use std::collections::BTreeMap;

use crate::curry::Curried;

/// The mapping representation used by [`Value::Map`].
pub type Mapping = BTreeMap<String, Value>;

/// A dynamic value.
///
/// `Value::Null` doubles as the missing-value marker returned by lookups
/// that find nothing at a given path.
///
/// Equality is deep and structural ([`crate::equality::equals`]): sequences
/// compare order-sensitively, mappings by key set, numbers by `f64` equality
/// (so `NaN != NaN`), and callables by reference identity.
///
/// # Examples
///
/// ```rust
/// use hanuman::{mapping, seq};
/// use hanuman::value::Value;
///
/// let user = mapping! {
///     "name" => mapping! { "first" => "Albert", "last" => "King" },
///     "age" => 44,
/// };
/// assert!(user.is_mapping());
///
/// let fruit = seq!["apple", "banana", "cherry"];
/// assert!(fruit.is_sequence());
/// assert!(!fruit.is_empty());
/// assert_eq!(Value::Null.is_truthy(), false);
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value, also the missing-value marker.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A text value.
    Text(String),
    /// An ordered, index-addressable sequence.
    Seq(Vec<Value>),
    /// A keyed mapping of text keys to values.
    Map(Mapping),
    /// A curried callable, boxed so the value representation stays finite
    /// (the callable's argument buffer holds values inline).
    Callable(Box<Curried>),
}

impl Value {
    /// Returns `true` for the missing-value marker.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this value is an ordered sequence.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns `true` if this value is a keyed mapping.
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` if this value is a callable.
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    /// Returns `true` for zero-length text, an empty sequence, or an empty
    /// mapping; `false` for every other value, including numbers, booleans,
    /// the missing marker, and callables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hanuman::{mapping, seq};
    /// use hanuman::value::Value;
    ///
    /// assert!(Value::Text(String::new()).is_empty());
    /// assert!(seq![].is_empty());
    /// assert!(mapping! {}.is_empty());
    ///
    /// assert!(!Value::Null.is_empty());
    /// assert!(!Value::Number(0.0).is_empty());
    /// assert!(!Value::Bool(false).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Seq(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Truthiness, as predicates observe it.
    ///
    /// `Null`, `false`, zero and NaN numbers, and empty text are falsy.
    /// Sequences, mappings, and callables are always truthy, including an
    /// empty sequence.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::Seq(_) | Self::Map(_) | Self::Callable(_) => true,
        }
    }

    /// Borrows the elements if this value is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the entries if this value is a mapping.
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the number if this value is numeric.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Borrows the text if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrows the callable if this value is one.
    pub fn as_callable(&self) -> Option<&Curried> {
        match self {
            Self::Callable(callable) => Some(&**callable),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::equals(self, other)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(index: usize) -> Self {
        Self::Number(index as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Self::Map(entries)
    }
}

impl From<Curried> for Value {
    fn from(callable: Curried) -> Self {
        Self::Callable(Box::new(callable))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

static_assertions::assert_impl_all!(Value: Clone, PartialEq, std::fmt::Debug);
// Callables hold `Rc` internally; the whole model is single-threaded.
static_assertions::assert_not_impl_any!(Value: Send, Sync);
