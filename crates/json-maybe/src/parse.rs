//! Strict text parsers used when a string stands in for a scalar.
//!
//! Accepted forms:
//! - bool: exactly `1 t T TRUE true True` / `0 f F FALSE false False`
//! - int64: base 10, optional `+`/`-`, no whitespace or separators
//! - float64: decimal or exponent notation, `inf`/`infinity`/`nan` in any
//!   case with optional sign; finite literals that overflow are rejected

use crate::error::{CastError, ParseReason};
use crate::kind::Kind;

fn parse_error(to: Kind, input: &str, reason: ParseReason) -> CastError {
    CastError::Parse {
        to,
        input: input.to_owned(),
        reason,
    }
}

pub fn parse_bool(input: &str) -> Result<bool, CastError> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(parse_error(Kind::Bool, input, ParseReason::InvalidSyntax)),
    }
}

pub fn parse_int(input: &str) -> Result<i64, CastError> {
    use std::num::IntErrorKind;

    input.parse::<i64>().map_err(|err| {
        let reason = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseReason::OutOfRange,
            _ => ParseReason::InvalidSyntax,
        };
        parse_error(Kind::Int64, input, reason)
    })
}

pub fn parse_float(input: &str) -> Result<f64, CastError> {
    let parsed = input
        .parse::<f64>()
        .map_err(|_| parse_error(Kind::Float64, input, ParseReason::InvalidSyntax))?;
    if parsed.is_infinite() && !is_infinity_literal(input) {
        return Err(parse_error(Kind::Float64, input, ParseReason::OutOfRange));
    }
    Ok(parsed)
}

fn is_infinity_literal(input: &str) -> bool {
    let unsigned = input
        .strip_prefix('+')
        .or_else(|| input.strip_prefix('-'))
        .unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_literals() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Ok(true), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Ok(false), "{s}");
        }
    }

    #[test]
    fn bool_rejects_other_spellings() {
        for s in ["", "tRUE", "yes", " true", "2"] {
            assert!(parse_bool(s).is_err(), "{s:?}");
        }
        assert_eq!(
            parse_bool("not_int").unwrap_err().to_string(),
            "parse bool: parsing \"not_int\": invalid syntax"
        );
    }

    #[test]
    fn int_syntax_and_range() {
        assert_eq!(parse_int("12345"), Ok(12345));
        assert_eq!(parse_int("+12"), Ok(12));
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));
        assert!(matches!(
            parse_int("9223372036854775808"),
            Err(CastError::Parse {
                reason: ParseReason::OutOfRange,
                ..
            })
        ));
        for s in ["", "12.0", "1e3", " 1", "1_000", "0x10"] {
            assert!(matches!(
                parse_int(s),
                Err(CastError::Parse {
                    reason: ParseReason::InvalidSyntax,
                    ..
                })
            ));
        }
    }

    #[test]
    fn float_forms() {
        assert_eq!(parse_float("12345"), Ok(12345.0));
        assert_eq!(parse_float("-1.5e2"), Ok(-150.0));
        assert_eq!(parse_float("Inf"), Ok(f64::INFINITY));
        assert_eq!(parse_float("-infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_float("NaN").unwrap().is_nan());
    }

    #[test]
    fn float_overflow_and_garbage() {
        assert_eq!(
            parse_float("1e400").unwrap_err().to_string(),
            "parse float64: parsing \"1e400\": value out of range"
        );
        assert_eq!(
            parse_float("not_int").unwrap_err().to_string(),
            "parse float64: parsing \"not_int\": invalid syntax"
        );
    }
}
