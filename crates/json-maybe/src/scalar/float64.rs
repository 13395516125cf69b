use serde::ser::Error as _;
use serde::Serializer;

use crate::dynamic::Dynamic;
use crate::error::{fixed, CastError};
use crate::kind::Kind;
use crate::parse::parse_float;

use super::{decode_as, unsupported, Scalar};

impl Scalar for f64 {
    const KIND: Kind = Kind::Float64;

    fn coerce(value: Dynamic) -> Result<Option<Self>, CastError> {
        match value {
            Dynamic::Null => Ok(None),
            Dynamic::Float64(f) => Ok(Some(f)),
            Dynamic::Int64(n) => Ok(Some(n as f64)),
            Dynamic::String(s) => parse_float(&s).map(Some),
            other => Err(unsupported::<f64>(&other)),
        }
    }

    fn decode_alternate(text: &[u8]) -> Option<Dynamic> {
        decode_as::<String>(text).map(Dynamic::String)
    }

    fn accepts_decoded(kind: Kind) -> bool {
        matches!(kind, Kind::Float64 | Kind::Int64 | Kind::String)
    }

    /// JSON has no literal for NaN or infinities; refuse instead of writing `null`.
    fn encode<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(S::Error::custom(format!("unsupported value: {}", fixed(self))));
        }
        serializer.serialize_f64(*self)
    }
}
