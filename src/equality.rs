//! Deep structural equality and deep cloning.

use crate::value::Value;

/// Deep structural equality between two values.
///
/// Primitives compare by value (`f64` equality for numbers, so
/// `NaN != NaN`); sequences compare element-wise in order; mappings compare
/// by key count and per-key equality, so a key present on either side but
/// not the other makes them unequal; callables compare by reference
/// identity. A sequence never equals a mapping.
///
/// This is also the `PartialEq` implementation of [`Value`].
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let left = mapping! { "a" => seq![1, 2, 3] };
/// let right = mapping! { "a" => seq![1, 2, 3] };
/// assert!(equals(&left, &right));
///
/// assert!(!equals(&seq![1, 2], &seq![2, 1]));
/// assert!(!equals(&seq![], &mapping! {}));
/// ```
pub fn equals(first: &Value, second: &Value) -> bool {
    match (first, second) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => left == right,
        (Value::Text(left), Value::Text(right)) => left == right,
        (Value::Seq(left), Value::Seq(right)) => {
            left.len() == right.len()
                && left.iter().zip(right).all(|(a, b)| equals(a, b))
        }
        (Value::Map(left), Value::Map(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, a)| right.get(key).is_some_and(|b| equals(a, b)))
        }
        (Value::Callable(left), Value::Callable(right)) => left.same_callable(right),
        _ => false,
    }
}

/// A deep copy of a value.
///
/// Text and booleans are copied by value; numbers and the missing marker
/// are returned as-is; callables keep reference semantics and are never
/// deep-copied. Sequences and mappings are rebuilt recursively, so every
/// nested collection in the result is distinct from its source.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let source = mapping! { "items" => seq![1, 2], "label" => "original" };
/// let copy = deep_clone(&source);
/// assert!(equals(&source, &copy));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Seq(items) => Value::Seq(items.iter().map(deep_clone).collect()),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), deep_clone(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::curry;
    use crate::{mapping, seq};

    #[test]
    fn test_variant_mismatch_is_unequal() {
        assert!(!equals(&Value::Number(0.0), &Value::Bool(false)));
        assert!(!equals(&Value::Null, &Value::Bool(false)));
        assert!(!equals(&seq![], &mapping! {}));
    }

    #[test]
    fn test_mapping_equality_is_symmetric_on_extra_keys() {
        let small = mapping! { "a" => 1 };
        let large = mapping! { "a" => 1, "b" => 2 };
        assert!(!equals(&small, &large));
        assert!(!equals(&large, &small));
    }

    #[test]
    fn test_callables_compare_by_identity() {
        let callable = curry(1, |_, args| Ok(args[0].clone()));
        let same = Value::from(callable.clone());
        let other = curry(1, |_, args| Ok(args[0].clone()));

        assert!(equals(&Value::from(callable), &same));
        assert!(!equals(&same, &Value::from(other)));
    }

    #[test]
    fn test_deep_clone_shares_callables() {
        let callable = curry(1, |_, args| Ok(args[0].clone()));
        let source = seq![callable];
        let copy = deep_clone(&source);
        assert!(equals(&source, &copy));
    }

    #[test]
    fn test_deep_clone_nested() {
        let source = mapping! {
            "name" => mapping! { "first" => "Susan", "last" => "Wellington" },
            "scores" => seq![62, 44],
        };
        let copy = deep_clone(&source);
        assert!(equals(&source, &copy));
    }
}
