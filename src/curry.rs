//! The currying engine.
//!
//! [`Curried`] wraps a native function of fixed arity and accumulates
//! arguments across invocations until the arity is satisfied, at which point
//! the native function is invoked with the full argument list in original
//! order and the *final* call's receiver.
//!
//! # Design Decisions
//!
//! Partial application uses copy semantics: every additional argument
//! produces a new `Curried` with a freshly extended argument buffer, never
//! a mutation of an existing one. Two partial-application chains built from
//! the same base callable therefore never alias each other's state. The
//! native function is shared through `Rc`, so a `Curried` clone is cheap.
//!
//! A call that supplies more arguments than the arity invokes the native
//! function with the first `arity` arguments and ignores the rest. This
//! lets traversal primitives always supply `(value, key, collection)` to a
//! callback while a unary callback consumes just the value.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::Error;
use crate::value::Value;

/// The native function signature wrapped by the engine.
///
/// The first parameter is the dynamic receiver of the invoking call; the
/// second is the full argument list, exactly `arity` values long.
pub type Native = Rc<dyn Fn(&Value, &[Value]) -> Result<Value, Error>>;

type ArgBuffer = SmallVec<[Value; 4]>;

/// A curried callable: a fixed-arity native function plus the arguments
/// accumulated so far.
///
/// # Examples
///
/// ```rust
/// use hanuman::curry::curry;
/// use hanuman::value::Value;
///
/// let add_three = curry(3, |_, args| {
///     let total = args
///         .iter()
///         .filter_map(Value::as_number)
///         .sum::<f64>();
///     Ok(Value::Number(total))
/// });
///
/// // Any partition of the three arguments yields the same result.
/// let applied = add_three.partial(&[Value::Number(10.0)]);
/// assert_eq!(
///     applied.call(&[Value::Number(1.0), Value::Number(2.0)])?,
///     Value::Number(13.0),
/// );
/// # Ok::<(), hanuman::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Curried {
    arity: usize,
    native: Native,
    applied: ArgBuffer,
}

impl Curried {
    /// Wraps a native function, fixing its arity.
    ///
    /// Arity is immutable once defined; it is inspected, never altered.
    pub fn wrap<F>(arity: usize, native: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    {
        Self {
            arity,
            native: Rc::new(native),
            applied: ArgBuffer::new(),
        }
    }

    /// The declared arity of the wrapped function.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many further arguments are needed before invocation.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.applied.len())
    }

    /// Accumulates arguments without invoking, returning a new callable.
    ///
    /// The receiving `Curried` is left untouched; the returned one closes
    /// over the concatenated argument list. Invocation happens on the next
    /// [`call`](Self::call) that satisfies the arity.
    pub fn partial(&self, args: &[Value]) -> Self {
        let mut applied = self.applied.clone();
        applied.extend(args.iter().cloned());
        Self {
            arity: self.arity,
            native: Rc::clone(&self.native),
            applied,
        }
    }

    /// Calls with no receiver (the receiver defaults to `Value::Null`).
    ///
    /// # Errors
    ///
    /// Propagates whatever the wrapped native function raises once the
    /// arity is satisfied; the engine itself raises nothing.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.call_with(&Value::Null, args)
    }

    /// Calls with an explicit dynamic receiver.
    ///
    /// If the accumulated and supplied arguments reach the arity, the
    /// native function is invoked with the first `arity` arguments in
    /// original order and with *this* call's receiver; receivers of earlier
    /// partial calls are never retained. Otherwise a new curried callable
    /// closing over the combined arguments is returned.
    ///
    /// # Errors
    ///
    /// Propagates whatever the wrapped native function raises.
    pub fn call_with(&self, receiver: &Value, args: &[Value]) -> Result<Value, Error> {
        if self.applied.len() + args.len() >= self.arity {
            if self.applied.is_empty() && args.len() == self.arity {
                return (self.native)(receiver, args);
            }
            // Only the arguments that complete the arity are cloned;
            // surplus arguments are never copied.
            let needed = self.arity - self.applied.len();
            let mut combined = self.applied.clone();
            combined.extend(args.iter().take(needed).cloned());
            (self.native)(receiver, &combined)
        } else {
            Ok(Value::from(self.partial(args)))
        }
    }

    /// Reference identity with another callable: the same wrapped native
    /// function and equal accumulated arguments.
    pub fn same_callable(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.native, &other.native) && self.applied == other.applied
    }
}

impl PartialEq for Curried {
    fn eq(&self, other: &Self) -> bool {
        self.same_callable(other)
    }
}

impl std::fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("applied", &self.applied.len())
            .finish_non_exhaustive()
    }
}

/// Wraps a native function of the given arity into a curried callable.
///
/// This is the engine's entry point; every primitive in [`crate::ops`] is
/// exported through it.
///
/// # Examples
///
/// ```rust
/// use hanuman::curry::curry;
/// use hanuman::value::Value;
///
/// let add = curry(2, |_, args| {
///     let first = args[0].as_number().unwrap_or(0.0);
///     let second = args[1].as_number().unwrap_or(0.0);
///     Ok(Value::Number(first + second))
/// });
///
/// let add_five = add.partial(&[Value::Number(5.0)]);
/// assert_eq!(add_five.call(&[Value::Number(3.0)])?, Value::Number(8.0));
/// assert_eq!(add_five.call(&[Value::Number(10.0)])?, Value::Number(15.0));
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn curry<F>(arity: usize, native: F) -> Curried
where
    F: Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
{
    Curried::wrap(arity, native)
}
