//! The dynamic, pre-curried operation surface.
//!
//! Every traversal primitive is exported here wrapped by the Currying
//! Engine, taking `Value` arguments only. Callback arguments must be
//! [`Value::Callable`]; the wrappers validate that before traversing and
//! then delegate to the typed core.
//!
//! Callbacks receive the element value first; the iteration primitives
//! ([`for_each`], [`for_each_break`]) also pass the key and the collection,
//! and the folds ([`reduce`], [`scan`]) pass `(accumulator, value, index)`.
//! Because the engine ignores surplus arguments, a unary callable simply
//! consumes the value and discards the rest.
//!
//! # Examples
//!
//! ```rust
//! use hanuman::prelude::*;
//!
//! let double = curry(1, |_, args| {
//!     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
//! });
//!
//! // Point-free: partially apply `map`, then feed it collections.
//! let double_all = ops::map().partial(&[Value::from(double)]);
//! assert_eq!(double_all.call(&[seq![1, 2, 3]])?, seq![2, 4, 6]);
//! # Ok::<(), hanuman::error::Error>(())
//! ```

use crate::access;
use crate::curry::Curried;
use crate::equality;
use crate::error::Error;
use crate::traverse;
use crate::value::{Value, expect_callable};

fn invoke_as_predicate(callable: &Curried, args: &[Value]) -> Result<bool, Error> {
    Ok(callable.call(args)?.is_truthy())
}

/// Curried [`traverse::for_each`]: `(fn, collection)`, returns `Null`.
pub fn for_each() -> Curried {
    Curried::wrap(2, |_, args| {
        let function = expect_callable(&args[0])?;
        // The collection argument is cloned once and reused for every
        // callback invocation.
        let mut call_args = [Value::Null, Value::Null, args[1].clone()];
        traverse::for_each(
            |item, key, _| {
                call_args[0] = item.clone();
                call_args[1] = key.clone();
                function.call(&call_args).map(|_| ())
            },
            &args[1],
        )?;
        Ok(Value::Null)
    })
}

/// Curried [`traverse::for_each_break`]: `(fn, predicate, collection)`,
/// returns `Null`.
pub fn for_each_break() -> Curried {
    Curried::wrap(3, |_, args| {
        let function = expect_callable(&args[0])?;
        let predicate = expect_callable(&args[1])?;
        // One collection clone per callback, not per element.
        let mut fn_args = [Value::Null, Value::Null, args[2].clone()];
        let mut predicate_args = [Value::Null, Value::Null, args[2].clone()];
        traverse::for_each_break(
            |item, key, _| {
                fn_args[0] = item.clone();
                fn_args[1] = key.clone();
                function.call(&fn_args).map(|_| ())
            },
            |item, key, _| {
                predicate_args[0] = item.clone();
                predicate_args[1] = key.clone();
                invoke_as_predicate(predicate, &predicate_args)
            },
            &args[2],
        )?;
        Ok(Value::Null)
    })
}

/// Curried [`traverse::map`]: `(fn, collection)`.
pub fn map() -> Curried {
    Curried::wrap(2, |_, args| {
        let function = expect_callable(&args[0])?;
        traverse::map(|item| function.call(&[item.clone()]), &args[1])
    })
}

/// Curried [`traverse::filter`]: `(predicate, sequence)`.
pub fn filter() -> Curried {
    Curried::wrap(2, |_, args| {
        let predicate = expect_callable(&args[0])?;
        traverse::filter(
            |item| invoke_as_predicate(predicate, &[item.clone()]),
            &args[1],
        )
    })
}

/// Curried [`traverse::reject`]: `(predicate, sequence)`.
pub fn reject() -> Curried {
    Curried::wrap(2, |_, args| {
        let predicate = expect_callable(&args[0])?;
        traverse::reject(
            |item| invoke_as_predicate(predicate, &[item.clone()]),
            &args[1],
        )
    })
}

/// Curried [`traverse::reduce`]: `(fn, initial, sequence)`.
///
/// The callback receives `(accumulator, value, index)`.
pub fn reduce() -> Curried {
    Curried::wrap(3, |_, args| {
        let function = expect_callable(&args[0])?;
        traverse::reduce(
            |accumulator, item, index| {
                function.call(&[accumulator, item.clone(), Value::from(index)])
            },
            args[1].clone(),
            &args[2],
        )
    })
}

/// Curried [`traverse::scan`]: `(fn, initial, sequence)`.
pub fn scan() -> Curried {
    Curried::wrap(3, |_, args| {
        let function = expect_callable(&args[0])?;
        traverse::scan(
            |accumulator, item, index| {
                function.call(&[accumulator, item.clone(), Value::from(index)])
            },
            args[1].clone(),
            &args[2],
        )
    })
}

/// Curried [`access::get`]: `(props, collection)`.
pub fn get() -> Curried {
    Curried::wrap(2, |_, args| access::get(&args[0], &args[1]))
}

/// Curried [`access::pick`]: `(props, mapping)`.
pub fn pick() -> Curried {
    Curried::wrap(2, |_, args| access::pick(&args[0], &args[1]))
}

/// Curried [`access::pick_all`]: `(props, mapping)`.
pub fn pick_all() -> Curried {
    Curried::wrap(2, |_, args| access::pick_all(&args[0], &args[1]))
}

/// Curried [`access::omit`]: `(props, mapping)`.
pub fn omit() -> Curried {
    Curried::wrap(2, |_, args| access::omit(&args[0], &args[1]))
}

/// Curried [`Value::is_empty`]: `(value)`, returns a boolean value.
pub fn is_empty() -> Curried {
    Curried::wrap(1, |_, args| Ok(Value::Bool(args[0].is_empty())))
}

/// Curried [`equality::deep_clone`]: `(value)`.
pub fn clone() -> Curried {
    Curried::wrap(1, |_, args| Ok(equality::deep_clone(&args[0])))
}

/// Curried [`equality::equals`]: `(a, b)`, returns a boolean value.
pub fn equals() -> Curried {
    Curried::wrap(2, |_, args| {
        Ok(Value::Bool(equality::equals(&args[0], &args[1])))
    })
}

/// Curried [`traverse::contains`]: `(target, sequence)`, returns a boolean
/// value.
pub fn contains() -> Curried {
    Curried::wrap(2, |_, args| {
        traverse::contains(&args[0], &args[1]).map(Value::Bool)
    })
}

/// Curried [`traverse::find`]: `(predicate, sequence)`.
pub fn find() -> Curried {
    Curried::wrap(2, |_, args| {
        let predicate = expect_callable(&args[0])?;
        traverse::find(
            |item| invoke_as_predicate(predicate, &[item.clone()]),
            &args[1],
        )
    })
}

/// Curried [`traverse::range`]: `(start, end)`.
pub fn range() -> Curried {
    Curried::wrap(2, |_, args| traverse::range(&args[0], &args[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::curry;
    use crate::seq;

    #[test]
    fn test_map_rejects_non_callable() {
        let result = map().call(&[Value::Number(1.0), seq![1]]);
        assert_eq!(result, Err(Error::NotCallable));
    }

    #[test]
    fn test_unary_callback_ignores_key_and_collection() {
        let increment = curry(1, |_, args| {
            Ok(Value::Number(args[0].as_number().unwrap_or(0.0) + 1.0))
        });
        let result = map()
            .call(&[Value::from(increment), seq![1, 2]])
            .unwrap();
        assert_eq!(result, seq![2, 3]);
    }

    #[test]
    fn test_reduce_supplies_indices() {
        let collect_indices = curry(3, |_, args| {
            let Value::Seq(mut items) = args[0].clone() else {
                return Ok(Value::Null);
            };
            items.push(args[2].clone());
            Ok(Value::Seq(items))
        });
        let result = reduce()
            .call(&[Value::from(collect_indices), seq![], seq![7, 8, 9]])
            .unwrap();
        assert_eq!(result, seq![0, 1, 2]);
    }
}
