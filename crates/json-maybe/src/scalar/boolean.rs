use crate::dynamic::Dynamic;
use crate::error::CastError;
use crate::kind::Kind;
use crate::parse::parse_bool;

use super::{decode_as, unsupported, Scalar};

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn coerce(value: Dynamic) -> Result<Option<Self>, CastError> {
        match value {
            Dynamic::Null => Ok(None),
            Dynamic::Bool(b) => Ok(Some(b)),
            Dynamic::Int64(0) => Ok(Some(false)),
            Dynamic::Int64(1) => Ok(Some(true)),
            Dynamic::Int64(n) => Err(CastError::UnsafeIntToBool(n)),
            Dynamic::String(s) => parse_bool(&s).map(Some),
            other => Err(unsupported::<bool>(&other)),
        }
    }

    fn decode_alternate(text: &[u8]) -> Option<Dynamic> {
        decode_as::<i64>(text)
            .map(Dynamic::Int64)
            .or_else(|| decode_as::<String>(text).map(Dynamic::String))
    }

    fn accepts_decoded(kind: Kind) -> bool {
        matches!(kind, Kind::Bool | Kind::Int64 | Kind::String)
    }
}
