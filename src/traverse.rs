//! The traversal primitives.
//!
//! Every primitive validates its input through the collection dispatcher
//! before operating, and dispatches on the [`Collection`] view: sequences
//! iterate by index, mappings by key enumeration. The left fold ([`reduce`])
//! is the foundational primitive; `filter`, `scan`, and the mapping-side
//! copies are expressed through the same fold.
//!
//! Callbacks are Rust closures here; the pre-curried, `Value`-argument
//! renditions live in [`crate::ops`].

use crate::equality::{deep_clone, equals};
use crate::error::Error;
use crate::value::{Collection, Value, expect_sequence};

/// Left-folds over a slice, threading the accumulator through `function`
/// together with each element and its index.
fn fold<A, F>(mut function: F, initial: A, items: &[Value]) -> Result<A, Error>
where
    F: FnMut(A, &Value, usize) -> Result<A, Error>,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = function(accumulator, item, index)?;
    }
    Ok(accumulator)
}

/// Applies `function` to each element of a collection.
///
/// For a sequence the callback receives `(value, index, sequence)`; for a
/// mapping it receives `(value, key, mapping)`. Mapping enumeration follows
/// the mapping's own key order; callers must not depend on any particular
/// order beyond that.
///
/// # Errors
///
/// Fails with [`Error::NotCollection`] for a non-collection input.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let fruit = seq!["apple", "banana", "cherry"];
/// let mut seen = Vec::new();
/// for_each(
///     |value, key, _| {
///         seen.push((key.clone(), value.clone()));
///         Ok(())
///     },
///     &fruit,
/// )?;
/// assert_eq!(seen[1], (Value::Number(1.0), Value::from("banana")));
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn for_each<F>(mut function: F, collection: &Value) -> Result<(), Error>
where
    F: FnMut(&Value, &Value, &Value) -> Result<(), Error>,
{
    match Collection::expect(collection)? {
        Collection::Seq(items) => {
            for (index, item) in items.iter().enumerate() {
                function(item, &Value::from(index), collection)?;
            }
        }
        Collection::Map(entries) => {
            for (key, item) in entries {
                function(item, &Value::from(key.as_str()), collection)?;
            }
        }
    }
    Ok(())
}

/// Like [`for_each`], but evaluates `predicate` before each step and stops
/// the iteration as soon as it returns `true`, without applying `function`
/// to that or any subsequent element.
///
/// Over a mapping the enumeration order is unspecified, so the point of
/// early termination is nondeterministic from the caller's perspective.
///
/// # Errors
///
/// Fails with [`Error::NotCollection`] for a non-collection input.
pub fn for_each_break<F, P>(
    mut function: F,
    mut predicate: P,
    collection: &Value,
) -> Result<(), Error>
where
    F: FnMut(&Value, &Value, &Value) -> Result<(), Error>,
    P: FnMut(&Value, &Value, &Value) -> Result<bool, Error>,
{
    match Collection::expect(collection)? {
        Collection::Seq(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = Value::from(index);
                if predicate(item, &key, collection)? {
                    return Ok(());
                }
                function(item, &key, collection)?;
            }
        }
        Collection::Map(entries) => {
            for (key, item) in entries {
                let key = Value::from(key.as_str());
                if predicate(item, &key, collection)? {
                    return Ok(());
                }
                function(item, &key, collection)?;
            }
        }
    }
    Ok(())
}

/// Creates a new collection by applying `function` to each element.
///
/// A sequence maps to a new sequence in order; a mapping maps to a new
/// mapping with the same keys and transformed values.
///
/// # Errors
///
/// Fails with [`Error::NotCollection`] for a non-collection input.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let numbers = seq![1, 2, 3];
/// let doubled = map(
///     |item| Ok(Value::Number(item.as_number().unwrap_or(0.0) * 2.0)),
///     &numbers,
/// )?;
/// assert_eq!(doubled, seq![2, 4, 6]);
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn map<F>(mut function: F, collection: &Value) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    match Collection::expect(collection)? {
        Collection::Seq(items) => fold(
            |mut output: Vec<Value>, item, _| {
                output.push(function(item)?);
                Ok(output)
            },
            Vec::with_capacity(items.len()),
            items,
        )
        .map(Value::Seq),
        Collection::Map(entries) => {
            let mut output = crate::value::Mapping::new();
            for (key, item) in entries {
                output.insert(key.clone(), function(item)?);
            }
            Ok(Value::Map(output))
        }
    }
}

/// Creates a new sequence containing the values for which `predicate`
/// holds, preserving relative order.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
pub fn filter<P>(mut predicate: P, sequence: &Value) -> Result<Value, Error>
where
    P: FnMut(&Value) -> Result<bool, Error>,
{
    let items = expect_sequence(sequence)?;
    fold(
        |mut output: Vec<Value>, item, _| {
            if predicate(item)? {
                output.push(item.clone());
            }
            Ok(output)
        },
        Vec::new(),
        items,
    )
    .map(Value::Seq)
}

/// The complement of [`filter`]: keeps the values for which `predicate`
/// does *not* hold.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
pub fn reject<P>(mut predicate: P, sequence: &Value) -> Result<Value, Error>
where
    P: FnMut(&Value) -> Result<bool, Error>,
{
    filter(|item| Ok(!predicate(item)?), sequence)
}

/// Left-folds `function` over a sequence starting from `initial`, passing
/// `(accumulator, value, index)` at each step.
///
/// The accumulator may be any type, including a fresh collection the
/// callback extends; the fold never touches the input sequence itself.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let numbers = seq![1, 2, 3, 4, 5, 6];
/// let total = reduce(
///     |accumulator: f64, item, _| Ok(accumulator + item.as_number().unwrap_or(0.0)),
///     0.0,
///     &numbers,
/// )?;
/// assert!((total - 21.0).abs() < f64::EPSILON);
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn reduce<A, F>(function: F, initial: A, sequence: &Value) -> Result<A, Error>
where
    F: FnMut(A, &Value, usize) -> Result<A, Error>,
{
    let items = expect_sequence(sequence)?;
    fold(function, initial, items)
}

/// Like [`reduce`], but returns the sequence of every intermediate
/// accumulator, starting with `initial`. The result has one more element
/// than the input.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let numbers = seq![1, 2, 3, 4, 5, 6];
/// let factorials = scan(
///     |accumulator, item, _| {
///         let product = accumulator.as_number().unwrap_or(0.0)
///             * item.as_number().unwrap_or(0.0);
///         Ok(Value::Number(product))
///     },
///     Value::Number(1.0),
///     &numbers,
/// )?;
/// assert_eq!(factorials, seq![1, 1, 2, 6, 24, 120, 720]);
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn scan<F>(mut function: F, initial: Value, sequence: &Value) -> Result<Value, Error>
where
    F: FnMut(Value, &Value, usize) -> Result<Value, Error>,
{
    let items = expect_sequence(sequence)?;
    let mut states = Vec::with_capacity(items.len() + 1);
    states.push(initial.clone());
    fold(
        |accumulator, item, index| {
            let next = function(accumulator, item, index)?;
            states.push(next.clone());
            Ok(next)
        },
        initial,
        items,
    )?;
    Ok(Value::Seq(states))
}

/// Whether a sequence contains an element deep-equal to `target`.
///
/// Comparison uses structural equality and short-circuits on the first
/// match via the [`for_each_break`] mechanism.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
pub fn contains(target: &Value, sequence: &Value) -> Result<bool, Error> {
    expect_sequence(sequence)?;
    let mut found = false;
    for_each_break(
        |_, _, _| Ok(()),
        |item, _, _| {
            if equals(item, target) {
                found = true;
            }
            Ok(found)
        },
        sequence,
    )?;
    Ok(found)
}

/// The first element satisfying `predicate`, or `Value::Null` when none
/// matches.
///
/// # Errors
///
/// Fails with [`Error::NotSequence`] for a non-sequence input.
pub fn find<P>(mut predicate: P, sequence: &Value) -> Result<Value, Error>
where
    P: FnMut(&Value) -> Result<bool, Error>,
{
    let items = expect_sequence(sequence)?;
    for item in items {
        if predicate(item)? {
            return Ok(deep_clone(item));
        }
    }
    Ok(Value::Null)
}

/// The inclusive sequence of integers from `start` to `end`.
///
/// Both bounds are coerced to integers by truncation; a bound `start`
/// greater than `end` yields the empty sequence.
///
/// # Errors
///
/// Fails with [`Error::NotNumber`] when either bound is not a finite
/// number.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let numbers = range(&Value::Number(1.0), &Value::Number(10.0))?;
/// assert_eq!(numbers.as_sequence().map(<[Value]>::len), Some(10));
/// assert_eq!(
///     range(&Value::Number(1.0), &Value::Number(3.0))?,
///     seq![1, 2, 3],
/// );
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn range(start: &Value, end: &Value) -> Result<Value, Error> {
    let start = coerce_integer(start)?;
    let end = coerce_integer(end)?;
    let items = (start..=end).map(Value::from).collect();
    Ok(Value::Seq(items))
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_integer(bound: &Value) -> Result<i64, Error> {
    match bound.as_number() {
        Some(number) if number.is_finite() => Ok(number.trunc() as i64),
        _ => Err(Error::NotNumber),
    }
}
