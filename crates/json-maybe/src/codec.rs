//! JSON text codec and serde integration for [`Maybe`].
//!
//! Decoding tries, in order:
//! 1. the `null` literal, which always succeeds and clears the wrapper
//! 2. the native JSON shape of the scalar
//! 3. the scalar's alternate representations, fed through its coercion engine
//!
//! If nothing decodes, the error from step 2 is returned.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::trace;

use crate::dynamic::Dynamic;
use crate::error::Error;
use crate::maybe::Maybe;
use crate::scalar::Scalar;

const NULL: &[u8] = b"null";

fn trim_json(text: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r');
    let start = text.iter().position(|b| !is_ws(b)).unwrap_or(text.len());
    let end = text.iter().rposition(|b| !is_ws(b)).map_or(start, |i| i + 1);
    &text[start..end]
}

impl<T: Scalar> Maybe<T> {
    /// Decodes one JSON value into this wrapper.
    ///
    /// On error the wrapper keeps its previous state.
    pub fn unmarshal_json(&mut self, text: &[u8]) -> Result<(), Error> {
        if trim_json(text) == NULL {
            self.clear();
            return Ok(());
        }
        match serde_json::from_slice::<T>(text) {
            Ok(v) => {
                self.set(v);
                Ok(())
            }
            Err(err) => match T::decode_alternate(text) {
                Some(alternate) => {
                    trace!(
                        target_kind = %T::KIND,
                        source_kind = %alternate.kind(),
                        "coercing alternate representation"
                    );
                    self.set_dynamic(alternate).map_err(Error::from)
                }
                None => Err(Error::Decode(err)),
            },
        }
    }

    /// Encodes as `null` when invalid, otherwise as the scalar.
    pub fn marshal_json(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::Encode)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let mut out = Self::null();
        out.unmarshal_json(text.as_bytes())?;
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}

impl<T: Scalar> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => value.encode(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(MaybeVisitor(PhantomData))
    }
}

struct MaybeVisitor<T>(PhantomData<T>);

impl<'de, T: Scalar> Visitor<'de> for MaybeVisitor<T> {
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "null or a value coercible to {}", T::KIND)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Maybe::null())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Maybe::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor(PhantomData))
    }
}

/// Maps each visited JSON shape onto a [`Dynamic`] and applies the same
/// acceptance rules as [`Maybe::unmarshal_json`].
struct ScalarVisitor<T>(PhantomData<T>);

impl<T: Scalar> ScalarVisitor<T> {
    fn accept<E>(&self, value: Dynamic, unexpected: Unexpected<'_>) -> Result<Maybe<T>, E>
    where
        E: de::Error,
    {
        if !T::accepts_decoded(value.kind()) {
            return Err(E::invalid_type(unexpected, self));
        }
        Maybe::from_dynamic(value).map_err(E::custom)
    }
}

impl<'de, T: Scalar> Visitor<'de> for ScalarVisitor<T> {
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a value coercible to {}", T::KIND)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Maybe::null())
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.accept(Dynamic::Bool(v), Unexpected::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.accept(Dynamic::Int64(v), Unexpected::Signed(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match i64::try_from(v) {
            Ok(n) => self.accept(Dynamic::Int64(n), Unexpected::Unsigned(v)),
            Err(_) => self.accept(Dynamic::Float64(v as f64), Unexpected::Unsigned(v)),
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.accept(Dynamic::Float64(v), Unexpected::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.accept(Dynamic::String(v.to_owned()), Unexpected::Str(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v)
    }
}
