use serde_json::Number;

use crate::dynamic::Dynamic;
use crate::error::CastError;
use crate::kind::Kind;
use crate::parse::parse_int;

use super::{decode_as, unsupported, Scalar};

// 2^63; `i64::MAX as f64` rounds up to this, so the upper bound is exclusive.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Integral, finite and inside the i64 range.
fn exact_int(v: f64) -> Option<i64> {
    if v.is_finite() && v.trunc() == v && v >= -I64_UPPER && v < I64_UPPER {
        Some(v as i64)
    } else {
        None
    }
}

/// Optional `-` followed by digits only, i.e. a JSON number without
/// fraction or exponent.
fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Scalar for i64 {
    const KIND: Kind = Kind::Int64;

    fn coerce(value: Dynamic) -> Result<Option<Self>, CastError> {
        match value {
            Dynamic::Null => Ok(None),
            Dynamic::Int64(n) => Ok(Some(n)),
            Dynamic::Float64(f) => exact_int(f)
                .map(Some)
                .ok_or(CastError::UnsafeFloatToInt(f)),
            Dynamic::String(s) => parse_int(&s).map(Some),
            other => Err(unsupported::<i64>(&other)),
        }
    }

    fn decode_alternate(text: &[u8]) -> Option<Dynamic> {
        if let Some(s) = decode_as::<String>(text) {
            return Some(Dynamic::String(s));
        }
        let number = decode_as::<Number>(text)?;
        let literal = std::str::from_utf8(text).ok()?.trim();
        // An integer literal only lands here when it is outside the i64 range.
        // Its f64 image may round back inside (-2^63 - 1 becomes -2^63), so
        // the literal goes to the integer parser, which reports the range.
        if is_integer_literal(literal) {
            return Some(Dynamic::String(literal.to_owned()));
        }
        number.as_f64().map(Dynamic::Float64)
    }

    fn accepts_decoded(kind: Kind) -> bool {
        matches!(kind, Kind::Int64 | Kind::Float64 | Kind::String)
    }
}
