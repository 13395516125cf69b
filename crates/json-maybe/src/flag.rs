//! Validity flag shared by every wrapper.

/// Marks whether a wrapper holds a value (`true`) or is null (`false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidFlag(bool);

impl ValidFlag {
    pub const VALID: ValidFlag = ValidFlag(true);
    pub const NULL: ValidFlag = ValidFlag(false);

    #[inline]
    pub fn valid(self) -> bool {
        self.0
    }
}

impl From<bool> for ValidFlag {
    fn from(v: bool) -> Self {
        ValidFlag(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(!ValidFlag::default().valid());
        assert_eq!(ValidFlag::default(), ValidFlag::NULL);
        assert!(ValidFlag::from(true).valid());
    }
}
