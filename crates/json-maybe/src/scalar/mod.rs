//! Coercion engines, one per scalar kind.
//!
//! Every engine follows the same outline:
//! - `Dynamic::Null` succeeds with no value
//! - the native kind is taken as-is
//! - a few cross-kind sources are accepted when the conversion is safe
//! - anything else is an unsupported cast
//!
//! | target  | cross-kind sources                                |
//! |---------|---------------------------------------------------|
//! | bool    | int64 in {0, 1}, bool-literal strings             |
//! | int64   | integral finite in-range float64, decimal strings |
//! | float64 | int64 (widened), float strings                    |
//! | string  | none                                              |

mod boolean;
mod float64;
mod int64;
mod string;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

use crate::dynamic::Dynamic;
use crate::error::CastError;
use crate::kind::Kind;

/// A scalar type a [`Maybe`](crate::Maybe) can wrap.
pub trait Scalar: Clone + Default + PartialEq + Serialize + DeserializeOwned {
    const KIND: Kind;

    /// Coerces `value` into this kind. `Ok(None)` means the input was null.
    fn coerce(value: Dynamic) -> Result<Option<Self>, CastError>;

    /// Decodes `text` as one of the alternate representations accepted when
    /// it does not decode as `Self`, in priority order.
    fn decode_alternate(text: &[u8]) -> Option<Dynamic>;

    /// Whether the serde path accepts a visited value of `kind` before
    /// handing it to [`Scalar::coerce`]. Mirrors [`Scalar::decode_alternate`].
    fn accepts_decoded(kind: Kind) -> bool;

    fn encode<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }
}

pub(crate) fn unsupported<T: Scalar>(value: &Dynamic) -> CastError {
    CastError::Unsupported {
        from: value.kind(),
        to: T::KIND,
    }
}

pub(crate) fn decode_as<T: DeserializeOwned>(text: &[u8]) -> Option<T> {
    serde_json::from_slice(text).ok()
}
