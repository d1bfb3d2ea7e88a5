//! # Constant runtime values
//!
//! The merger stores enum internal representations and passes runtime values
//! through native hooks as [ConstValue]s. This is a small owned value type;
//! it carries no list or object composites since only leaf representations
//! flow through the slots this crate writes.

use std::fmt;

/// An owned, constant runtime value.
///
/// Enum values default their internal representation to their own name as a
/// [`ConstValue::String`], and configuration may replace it with any variant,
/// including `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl ConstValue {
    /// Returns whether this value is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ConstValue::Null)
    }

    /// Returns the contained string, if this is a `String` value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for ConstValue {
    #[inline]
    fn from(value: &str) -> Self {
        ConstValue::String(value.into())
    }
}

impl From<String> for ConstValue {
    #[inline]
    fn from(value: String) -> Self {
        ConstValue::String(value)
    }
}

impl From<bool> for ConstValue {
    #[inline]
    fn from(value: bool) -> Self {
        ConstValue::Boolean(value)
    }
}

impl From<i64> for ConstValue {
    #[inline]
    fn from(value: i64) -> Self {
        ConstValue::Int(value)
    }
}

impl From<f64> for ConstValue {
    #[inline]
    fn from(value: f64) -> Self {
        ConstValue::Float(value)
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Null => write!(f, "null"),
            ConstValue::Boolean(value) => write!(f, "{}", value),
            ConstValue::Int(value) => write!(f, "{}", value),
            ConstValue::Float(value) => write!(f, "{}", value),
            ConstValue::String(value) => write!(f, "{:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(ConstValue::from("ACTIVE"), ConstValue::String("ACTIVE".into()));
        assert_eq!(ConstValue::from(0), ConstValue::Int(0));
        assert_eq!(ConstValue::from(false), ConstValue::Boolean(false));
        assert!(ConstValue::Null.is_null());
        assert!(!ConstValue::Int(0).is_null());
    }

    #[test]
    fn display() {
        assert_eq!(ConstValue::Null.to_string(), "null");
        assert_eq!(ConstValue::Int(42).to_string(), "42");
        assert_eq!(ConstValue::String("a".into()).to_string(), "\"a\"");
    }
}
