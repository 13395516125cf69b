use crate::dynamic::Dynamic;
use crate::error::CastError;
use crate::kind::Kind;

use super::{unsupported, Scalar};

impl Scalar for String {
    const KIND: Kind = Kind::String;

    fn coerce(value: Dynamic) -> Result<Option<Self>, CastError> {
        match value {
            Dynamic::Null => Ok(None),
            Dynamic::String(s) => Ok(Some(s)),
            other => Err(unsupported::<String>(&other)),
        }
    }

    fn decode_alternate(_text: &[u8]) -> Option<Dynamic> {
        None
    }

    fn accepts_decoded(kind: Kind) -> bool {
        kind == Kind::String
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_implicit_widening() {
        assert_eq!(String::coerce("str".into()), Ok(Some("str".to_owned())));
        for v in [
            Dynamic::Bool(true),
            Dynamic::Int64(12345),
            Dynamic::Float64(12345.11),
        ] {
            let kind = v.kind();
            assert_eq!(
                String::coerce(v),
                Err(CastError::Unsupported {
                    from: kind,
                    to: Kind::String
                })
            );
        }
    }

    #[test]
    fn numeric_text_has_no_fallback() {
        assert_eq!(String::decode_alternate(b"12345.11"), None);
    }
}
