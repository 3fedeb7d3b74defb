//! Polymorphic arguments for the dict-style operations.

use crate::value::Json;

/// An object key or an array index.
///
/// Operations addressing a child by position accept either form and apply
/// whichever matches the receiver variant. Indexes stay signed so negative
/// and oversized positions flow through as out-of-range instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOrIndex {
    Key(String),
    Index(i64),
}

impl From<&str> for KeyOrIndex {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for KeyOrIndex {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<&String> for KeyOrIndex {
    fn from(value: &String) -> Self {
        Self::Key(value.clone())
    }
}

impl From<i8> for KeyOrIndex {
    fn from(value: i8) -> Self {
        Self::Index(value as i64)
    }
}

impl From<i16> for KeyOrIndex {
    fn from(value: i16) -> Self {
        Self::Index(value as i64)
    }
}

impl From<i32> for KeyOrIndex {
    fn from(value: i32) -> Self {
        Self::Index(value as i64)
    }
}

impl From<i64> for KeyOrIndex {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<isize> for KeyOrIndex {
    fn from(value: isize) -> Self {
        Self::Index(value as i64)
    }
}

impl From<u8> for KeyOrIndex {
    fn from(value: u8) -> Self {
        Self::Index(value as i64)
    }
}

impl From<u16> for KeyOrIndex {
    fn from(value: u16) -> Self {
        Self::Index(value as i64)
    }
}

impl From<u32> for KeyOrIndex {
    fn from(value: u32) -> Self {
        Self::Index(value as i64)
    }
}

impl From<u64> for KeyOrIndex {
    fn from(value: u64) -> Self {
        Self::Index(value as i64)
    }
}

impl From<usize> for KeyOrIndex {
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

/// An object key or an array element probe.
///
/// [`Json::contains`] accepts either form: a key tests object membership, a
/// value scans an array for a structurally equal element.
#[derive(Debug, Clone)]
pub enum KeyOrValue {
    Key(String),
    Value(Json),
}

impl From<&str> for KeyOrValue {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for KeyOrValue {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<&String> for KeyOrValue {
    fn from(value: &String) -> Self {
        Self::Key(value.clone())
    }
}

impl From<Json> for KeyOrValue {
    fn from(value: Json) -> Self {
        Self::Value(value)
    }
}

impl From<&Json> for KeyOrValue {
    fn from(value: &Json) -> Self {
        Self::Value(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_become_keys() {
        assert_eq!(KeyOrIndex::from("a"), KeyOrIndex::Key("a".to_string()));
        assert_eq!(
            KeyOrIndex::from(String::from("a")),
            KeyOrIndex::Key("a".to_string())
        );
        assert!(matches!(KeyOrValue::from("a"), KeyOrValue::Key(k) if k == "a"));
    }

    #[test]
    fn integer_widths_become_signed_indexes() {
        assert_eq!(KeyOrIndex::from(3u8), KeyOrIndex::Index(3));
        assert_eq!(KeyOrIndex::from(3u64), KeyOrIndex::Index(3));
        assert_eq!(KeyOrIndex::from(3usize), KeyOrIndex::Index(3));
        assert_eq!(KeyOrIndex::from(-1i32), KeyOrIndex::Index(-1));
        assert_eq!(KeyOrIndex::from(-1isize), KeyOrIndex::Index(-1));
    }

    #[test]
    fn oversized_unsigned_wraps_negative() {
        // Wrapped indexes land below zero, which every operation treats as
        // out of range.
        let KeyOrIndex::Index(i) = KeyOrIndex::from(u64::MAX) else {
            panic!("expected an index");
        };
        assert!(i < 0);
    }

    #[test]
    fn handles_become_value_probes() {
        let j = Json::from(1);
        assert!(matches!(KeyOrValue::from(&j), KeyOrValue::Value(_)));
        assert!(matches!(KeyOrValue::from(j), KeyOrValue::Value(_)));
    }
}
