//! # hanuman
//!
//! A small functional-programming utility library providing curried,
//! auto-currying higher-order functions over dynamic values.
//!
//! ## Overview
//!
//! The library is built from three mechanisms:
//!
//! - **Currying Engine**: [`Curried`](curry::Curried) wraps a fixed-arity
//!   native function and accumulates arguments across calls until the arity
//!   is satisfied, forwarding the final call's receiver to the wrapped
//!   function.
//! - **Collection Dispatcher**: [`Collection`](value::Collection) classifies
//!   a [`Value`](value::Value) as an ordered sequence or a keyed mapping, so
//!   that every traversal primitive behaves correctly over both.
//! - **Composition**: [`Pipeline`](pipe::Pipeline) chains curried callables
//!   left-to-right, either strictly unary ([`pipe1`](pipe::pipe1)) or with a
//!   variadic first stage ([`pipe_spread`](pipe::pipe_spread)).
//!
//! Traversal primitives come in two layers:
//!
//! - a *typed core* ([`traverse`], [`access`], [`equality`]) generic over
//!   Rust closures, dispatching on the collection shape at compile time
//!   wherever possible;
//! - a *dynamic boundary* ([`ops`]) exporting every primitive pre-wrapped by
//!   the Currying Engine, for point-free composition with pipelines.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for the data subset of [`Value`](value::Value)
//!
//! ## Example
//!
//! ```rust
//! use hanuman::prelude::*;
//!
//! let numbers = seq![1, 2, 3, 4, 5, 6];
//!
//! let sum = reduce(
//!     |accumulator: f64, item, _| Ok(accumulator + item.as_number().unwrap_or(0.0)),
//!     0.0,
//!     &numbers,
//! )?;
//! assert!((sum - 21.0).abs() < f64::EPSILON);
//!
//! let evens = filter(
//!     |item| Ok(item.as_number().is_some_and(|n| n % 2.0 == 0.0)),
//!     &numbers,
//! )?;
//! assert_eq!(evens, seq![2, 4, 6]);
//! # Ok::<(), hanuman::error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface: the value model, the currying engine,
/// the typed traversal primitives, pipelines, and the constructor macros.
///
/// # Usage
///
/// ```rust
/// use hanuman::prelude::*;
/// ```
pub mod prelude {

    pub use crate::access::*;
    pub use crate::curry::*;
    pub use crate::equality::*;
    pub use crate::error::*;
    pub use crate::pipe::{Pipeline, pipe1, pipe_spread};
    pub use crate::traverse::*;
    pub use crate::value::*;

    pub use crate::ops;

    // Constructor macros (already at crate root via #[macro_export])
    pub use crate::mapping;
    pub use crate::pipeline;
    pub use crate::seq;
}

pub mod access;
pub mod curry;
pub mod equality;
pub mod error;
pub mod ops;
pub mod pipe;
pub mod traverse;
pub mod value;
