//! json-maybe - nullable scalar wrappers with lenient JSON coercion.
//!
//! [`Maybe<T>`] pairs a bool, int64, float64 or string with a validity flag.
//! A wrapper decodes from `null` (no value), from its native JSON shape, or
//! from a loosely-typed stand-in that converts without losing information:
//!
//! - [`MaybeBool`]: `true`, `1`, `"0"`, `"t"`, ...
//! - [`MaybeInt64`]: `12`, `12.0`, `"12"`
//! - [`MaybeFloat64`]: `1.5`, `3`, `"1.5"`
//! - [`MaybeString`]: strings only
//!
//! Everything else fails with a [`CastError`] or a JSON decode [`Error`],
//! and the wrapper keeps its previous state.
//!
//! # Example
//!
//! ```
//! use json_maybe::{CastError, MaybeBool, MaybeInt64};
//!
//! assert_eq!(MaybeInt64::from_json("12345.00").unwrap(), MaybeInt64::new(12345));
//! assert_eq!(
//!     MaybeInt64::from_json("12345.11").unwrap_err().to_string(),
//!     "unsafe float64 to int64 cast: 12345.110000"
//! );
//!
//! let mut flag = MaybeBool::new(true);
//! assert_eq!(flag.set_dynamic(2i64), Err(CastError::UnsafeIntToBool(2)));
//! assert_eq!(flag, MaybeBool::new(true));
//! ```

mod codec;
mod dynamic;
mod error;
mod flag;
mod kind;
mod maybe;
pub mod parse;
mod scalar;

pub use dynamic::Dynamic;
pub use error::{CastError, Error, ParseReason};
pub use flag::ValidFlag;
pub use kind::Kind;
pub use maybe::{Maybe, MaybeBool, MaybeFloat64, MaybeInt64, MaybeString, Nullable};
pub use scalar::Scalar;
