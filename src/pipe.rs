//! Left-to-right pipeline composition.
//!
//! A [`Pipeline`] chains curried callables in order, threading an
//! accumulator through every stage. There are two explicit threading
//! rules; a pipeline never infers which one to use from a value's shape:
//!
//! - [`pipe1`]: strictly unary chaining, where exactly one value flows
//!   between stages, whatever its shape;
//! - [`pipe_spread`]: the caller's full argument list feeds the first
//!   stage, and any stage result that is a sequence is spread as the next
//!   stage's positional arguments.
//!
//! With `pipe_spread`, a stage returning a sequence that is meant as a
//! single value will still be spread; use `pipe1` when that matters.

use crate::curry::Curried;
use crate::error::Error;
use crate::value::Value;

/// How values thread between pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Threading {
    /// Exactly one value flows into every stage.
    Unary,
    /// A sequence accumulator spreads as positional arguments.
    Spread,
}

/// A left-to-right chain of curried callables.
///
/// The pipeline itself is a callable: [`call`](Self::call) runs every stage
/// in order and returns the final accumulator. The caller's receiver is
/// forwarded to every stage.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let subtract_ten = curry(1, |_, args| {
///     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) - 10.0))
/// });
/// let double = curry(1, |_, args| {
///     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
/// });
///
/// let pipeline = pipe_spread([subtract_ten, double]);
/// assert_eq!(pipeline.call(&[Value::Number(22.0)])?, Value::Number(24.0));
/// # Ok::<(), hanuman::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    stages: Vec<Curried>,
    threading: Threading,
}

impl Pipeline {
    /// Runs the pipeline with no receiver.
    ///
    /// # Errors
    ///
    /// Propagates the first error any stage raises.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.call_with(&Value::Null, args)
    }

    /// Runs the pipeline, forwarding `receiver` to every stage.
    ///
    /// Under [`pipe_spread`] the accumulator starts as the full argument
    /// list; under [`pipe1`] it is the first argument, or `Value::Null`
    /// when none is supplied.
    ///
    /// # Errors
    ///
    /// Propagates the first error any stage raises.
    pub fn call_with(&self, receiver: &Value, args: &[Value]) -> Result<Value, Error> {
        match self.threading {
            Threading::Unary => {
                let mut accumulator = args.first().cloned().unwrap_or(Value::Null);
                for stage in &self.stages {
                    accumulator =
                        stage.call_with(receiver, std::slice::from_ref(&accumulator))?;
                }
                Ok(accumulator)
            }
            Threading::Spread => {
                let mut accumulator = Value::Seq(args.to_vec());
                for stage in &self.stages {
                    let params = match accumulator {
                        Value::Seq(items) => items,
                        other => vec![other],
                    };
                    accumulator = stage.call_with(receiver, &params)?;
                }
                Ok(accumulator)
            }
        }
    }

    /// Converts the pipeline into a unary curried callable, so it can be a
    /// `Value` and a stage of another pipeline.
    pub fn into_curried(self) -> Curried {
        Curried::wrap(1, move |receiver, args| self.call_with(receiver, args))
    }
}

/// Builds a strictly unary pipeline: one value flows between stages.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let wrap = curry(1, |_, args| Ok(seq![args[0].clone()]));
/// let identity = curry(1, |_, args| Ok(args[0].clone()));
///
/// // The intermediate sequence is passed whole, never spread.
/// let pipeline = pipe1([wrap, identity]);
/// assert_eq!(pipeline.call(&[Value::Number(7.0)])?, seq![7]);
/// # Ok::<(), hanuman::error::Error>(())
/// ```
pub fn pipe1<I>(stages: I) -> Pipeline
where
    I: IntoIterator<Item = Curried>,
{
    Pipeline {
        stages: stages.into_iter().collect(),
        threading: Threading::Unary,
    }
}

/// Builds a spreading pipeline: the first stage may be variadic, and any
/// sequence-valued accumulator spreads as the next stage's arguments.
pub fn pipe_spread<I>(stages: I) -> Pipeline
where
    I: IntoIterator<Item = Curried>,
{
    Pipeline {
        stages: stages.into_iter().collect(),
        threading: Threading::Spread,
    }
}

/// Builds a spreading [`Pipeline`] from stage expressions.
///
/// Equivalent to [`pipe_spread`] over the listed stages, so the first
/// stage may be variadic.
///
/// # Examples
///
/// ```rust
/// use hanuman::prelude::*;
///
/// let add = curry(2, |_, args| {
///     Ok(Value::Number(
///         args[0].as_number().unwrap_or(0.0) + args[1].as_number().unwrap_or(0.0),
///     ))
/// });
/// let double = curry(1, |_, args| {
///     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
/// });
///
/// let pipeline = pipeline![add, double];
/// assert_eq!(
///     pipeline.call(&[Value::Number(1.0), Value::Number(2.0)])?,
///     Value::Number(6.0),
/// );
/// # Ok::<(), hanuman::error::Error>(())
/// ```
#[macro_export]
macro_rules! pipeline {
    ($($stage:expr),+ $(,)?) => {
        $crate::pipe::pipe_spread(::std::vec![$($stage),+])
    };
}
