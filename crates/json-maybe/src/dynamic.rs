//! Dynamically-typed input accepted by the coercion engines.

use serde_json::{Map, Value};

use crate::kind::Kind;

/// A value whose kind is only known at runtime.
///
/// `Null` means absence of a value, not the text `"null"`. `Array` and
/// `Object` exist so that structured inputs can be named in an
/// unsupported-cast error; no wrapper accepts them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

impl Dynamic {
    pub fn kind(&self) -> Kind {
        match self {
            Dynamic::Null => Kind::Null,
            Dynamic::Bool(_) => Kind::Bool,
            Dynamic::Int64(_) => Kind::Int64,
            Dynamic::Float64(_) => Kind::Float64,
            Dynamic::String(_) => Kind::String,
            Dynamic::Array(_) => Kind::Array,
            Dynamic::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<i64> for Dynamic {
    fn from(v: i64) -> Self {
        Dynamic::Int64(v)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float64(v)
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::String(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::String(v.to_owned())
    }
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Dynamic::Null,
        }
    }
}

/// Numbers resolve integer-first. Unsigned values past `i64::MAX` become
/// `Float64`, which the int64 engine then range-checks.
impl From<Value> for Dynamic {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Dynamic::Null,
            Value::Bool(b) => Dynamic::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Dynamic::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Dynamic::Float64(u as f64)
                } else {
                    Dynamic::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Dynamic::String(s),
            Value::Array(items) => Dynamic::Array(items),
            Value::Object(fields) => Dynamic::Object(fields),
        }
    }
}

impl From<&Value> for Dynamic {
    fn from(v: &Value) -> Self {
        Dynamic::from(v.clone())
    }
}
