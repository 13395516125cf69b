//! Kind names used in cast diagnostics.

use std::fmt;

/// The kind of a dynamic value, or of a wrapper's target scalar.
///
/// Source kinds cover everything a decoded JSON value can be; target kinds
/// are the four scalars ([`Kind::Bool`], [`Kind::Int64`], [`Kind::Float64`],
/// [`Kind::String`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int64,
    Float64,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int64 => "int64",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Kind::Int64.to_string(), "int64");
        assert_eq!(Kind::Float64.to_string(), "float64");
        assert_eq!(Kind::Array.to_string(), "array");
    }
}
