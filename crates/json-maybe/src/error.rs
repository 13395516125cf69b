//! Error types for coercion and the text codec.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// Why a string could not be parsed into a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseReason {
    InvalidSyntax,
    OutOfRange,
}

impl fmt::Display for ParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseReason::InvalidSyntax => f.write_str("invalid syntax"),
            ParseReason::OutOfRange => f.write_str("value out of range"),
        }
    }
}

/// A dynamic value could not be coerced into the target scalar.
///
/// On any of these the receiving wrapper is left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CastError {
    #[error("unsupported cast from {from} to {to}")]
    Unsupported { from: Kind, to: Kind },
    #[error("unsafe int64 to bool cast: {0}")]
    UnsafeIntToBool(i64),
    #[error("unsafe float64 to int64 cast: {}", fixed(.0))]
    UnsafeFloatToInt(f64),
    #[error("parse {to}: parsing {quoted}: {reason}", quoted = quote(.input))]
    Parse {
        to: Kind,
        input: String,
        reason: ParseReason,
    },
}

impl CastError {
    /// Target kind of the failed cast.
    pub fn target(&self) -> Kind {
        match self {
            CastError::Unsupported { to, .. } | CastError::Parse { to, .. } => *to,
            CastError::UnsafeIntToBool(_) => Kind::Bool,
            CastError::UnsafeFloatToInt(_) => Kind::Int64,
        }
    }

    pub fn is_unsafe(&self) -> bool {
        matches!(
            self,
            CastError::UnsafeIntToBool(_) | CastError::UnsafeFloatToInt(_)
        )
    }
}

/// Errors returned by the text codec.
#[derive(Debug, Error)]
pub enum Error {
    /// An alternate representation decoded but failed coercion.
    #[error(transparent)]
    Cast(#[from] CastError),
    /// The input was not valid JSON for any accepted representation.
    #[error(transparent)]
    Decode(serde_json::Error),
    #[error(transparent)]
    Encode(serde_json::Error),
}

impl Error {
    pub fn is_cast(&self) -> bool {
        matches!(self, Error::Cast(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    pub fn as_cast(&self) -> Option<&CastError> {
        match self {
            Error::Cast(err) => Some(err),
            _ => None,
        }
    }
}

/// Double-quoted rendering of parser input. Quotes, backslashes and the
/// usual control escapes are backslash-escaped; other control characters
/// print as `\xNN`.
pub(crate) fn quote(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Fixed-point rendering with six decimals; non-finite values print as
/// `NaN`, `+Inf` or `-Inf`.
pub(crate) fn fixed(v: &f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if *v == f64::INFINITY {
        "+Inf".to_owned()
    } else if *v == f64::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{v:.6}")
    }
}
