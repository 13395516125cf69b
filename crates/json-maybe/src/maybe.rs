//! The optional-scalar wrapper.

use crate::dynamic::Dynamic;
use crate::error::{CastError, Error};
use crate::flag::ValidFlag;
use crate::scalar::Scalar;

/// A scalar value or an explicit null.
///
/// When the wrapper is null its value is always `T::default()`, so two null
/// wrappers of the same type always compare equal.
///
/// ```
/// use json_maybe::MaybeInt64;
///
/// let mut age = MaybeInt64::default();
/// assert!(!age.valid());
///
/// age.unmarshal_json(b"\"42\"").unwrap();
/// assert_eq!(age.get(), Some(&42));
/// assert_eq!(age.to_json().unwrap(), "42");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    flag: ValidFlag,
    value: T,
}

pub type MaybeBool = Maybe<bool>;
pub type MaybeInt64 = Maybe<i64>;
pub type MaybeFloat64 = Maybe<f64>;
pub type MaybeString = Maybe<String>;

impl<T: Scalar> Maybe<T> {
    /// A wrapper holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            flag: ValidFlag::VALID,
            value,
        }
    }

    /// A null wrapper.
    pub fn null() -> Self {
        Self::default()
    }

    /// Builds a wrapper from a dynamic value through the coercion engine.
    pub fn from_dynamic(value: impl Into<Dynamic>) -> Result<Self, CastError> {
        let mut out = Self::null();
        out.set_dynamic(value)?;
        Ok(out)
    }

    #[inline]
    pub fn valid(&self) -> bool {
        self.flag.valid()
    }

    pub fn flag(&self) -> ValidFlag {
        self.flag
    }

    /// The held value, or `T::default()` when null.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn get(&self) -> Option<&T> {
        self.valid().then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid() {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn set(&mut self, value: T) {
        self.flag = ValidFlag::VALID;
        self.value = value;
    }

    /// Resets to null.
    pub fn clear(&mut self) {
        self.flag = ValidFlag::NULL;
        self.value = T::default();
    }

    /// Coerces `value` into this wrapper in place.
    ///
    /// Null always succeeds and clears the wrapper. On error the wrapper is
    /// left as it was.
    pub fn set_dynamic(&mut self, value: impl Into<Dynamic>) -> Result<(), CastError> {
        match T::coerce(value.into())? {
            Some(v) => self.set(v),
            None => self.clear(),
        }
        Ok(())
    }
}

impl<T: Scalar> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

impl<T: Scalar> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

/// Object-safe view over any wrapper, for handling mixed kinds uniformly.
pub trait Nullable {
    fn is_valid(&self) -> bool;
    fn set_dynamic(&mut self, value: Dynamic) -> Result<(), CastError>;
    fn unmarshal_json(&mut self, text: &[u8]) -> Result<(), Error>;
    fn marshal_json(&self) -> Result<Vec<u8>, Error>;
}

impl<T: Scalar> Nullable for Maybe<T> {
    fn is_valid(&self) -> bool {
        self.valid()
    }

    fn set_dynamic(&mut self, value: Dynamic) -> Result<(), CastError> {
        Maybe::set_dynamic(self, value)
    }

    fn unmarshal_json(&mut self, text: &[u8]) -> Result<(), Error> {
        Maybe::unmarshal_json(self, text)
    }

    fn marshal_json(&self) -> Result<Vec<u8>, Error> {
        Maybe::marshal_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    #[test]
    fn set_makes_valid() {
        let mut v = MaybeInt64::default();
        assert!(!v.valid());
        v.set(12345);
        assert!(v.valid());
        assert_eq!(*v.value(), 12345);
    }

    #[test]
    fn new_is_valid() {
        let v = MaybeFloat64::new(64.0);
        assert!(v.valid());
        assert_eq!(v.get(), Some(&64.0));
        assert_eq!(MaybeString::new("a".into()).into_option(), Some("a".into()));
    }

    #[test]
    fn clear_resets_value() {
        let mut v = MaybeString::new("abc".into());
        v.clear();
        assert_eq!(v, MaybeString::null());
        assert_eq!(v.value(), "");
        assert_eq!(v.get(), None);
    }

    #[test]
    fn set_dynamic_null_resets() {
        let mut v = MaybeBool::new(true);
        v.set_dynamic(Dynamic::Null).unwrap();
        assert_eq!(v, MaybeBool::null());
        assert!(!*v.value());
    }

    #[test]
    fn failed_set_dynamic_keeps_state() {
        let mut v = MaybeBool::new(true);
        let err = v.set_dynamic(5i64).unwrap_err();
        assert_eq!(err, CastError::UnsafeIntToBool(5));
        assert_eq!(v, MaybeBool::new(true));

        let mut s = MaybeString::null();
        assert_eq!(
            s.set_dynamic(1.5f64),
            Err(CastError::Unsupported {
                from: Kind::Float64,
                to: Kind::String
            })
        );
        assert_eq!(s, MaybeString::null());
    }

    #[test]
    fn set_dynamic_native_kinds() {
        let mut v = MaybeInt64::null();
        v.set_dynamic(12345i64).unwrap();
        assert_eq!(v, MaybeInt64::new(12345));

        let mut f = MaybeFloat64::null();
        f.set_dynamic("2.5").unwrap();
        assert_eq!(f, MaybeFloat64::new(2.5));
    }

    #[test]
    fn option_conversions() {
        assert_eq!(MaybeInt64::from(Some(3)), MaybeInt64::new(3));
        assert_eq!(MaybeInt64::from(None), MaybeInt64::null());
        assert_eq!(Option::<bool>::from(MaybeBool::new(false)), Some(false));
        assert_eq!(MaybeBool::from(true), MaybeBool::new(true));
    }

    #[test]
    fn from_dynamic_builds() {
        assert_eq!(MaybeInt64::from_dynamic(7.0f64), Ok(MaybeInt64::new(7)));
        assert!(MaybeInt64::from_dynamic(true).is_err());
    }

    #[test]
    fn nullable_is_object_safe() {
        let mut fields: Vec<Box<dyn Nullable>> = vec![
            Box::new(MaybeBool::null()),
            Box::new(MaybeInt64::null()),
            Box::new(MaybeFloat64::null()),
            Box::new(MaybeString::null()),
        ];
        for field in fields.iter_mut() {
            field.unmarshal_json(b"\"1\"").unwrap();
            assert!(field.is_valid());
        }
        let encoded: Vec<Vec<u8>> = fields.iter().map(|f| f.marshal_json().unwrap()).collect();
        assert_eq!(
            encoded,
            vec![b"true".to_vec(), b"1".to_vec(), b"1.0".to_vec(), b"\"1\"".to_vec()]
        );
    }
}
