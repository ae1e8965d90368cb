//! The closed set of value kinds that can be written as self-describing,
//! tag-prefixed values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BitweaveError;
use crate::types::{Decimal, TimeSpan, Timestamp};

/// The kind of a tagged scalar. The discriminant is the 8-bit wire tag.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ScalarKind {
    Int32 = 0,
    Int64 = 1,
    Int16 = 2,
    UInt8 = 3,
    String = 4,
    Ascii = 5,
    Timestamp = 6,
    Decimal = 7,
    Float64 = 8,
    Boolean = 9,
    TimeSpan = 10,
    ByteArray = 11,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 12] = [
        Self::Int32,
        Self::Int64,
        Self::Int16,
        Self::UInt8,
        Self::String,
        Self::Ascii,
        Self::Timestamp,
        Self::Decimal,
        Self::Float64,
        Self::Boolean,
        Self::TimeSpan,
        Self::ByteArray,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Resolves a wire tag. Unknown tags mean a corrupt stream.
    pub fn from_tag(tag: u8) -> Result<Self, BitweaveError> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| BitweaveError::InvalidState(format!("unknown scalar tag {tag}")))
    }

    /// Returns `true` for kinds carried as `Option` with a presence bit.
    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::Boolean | Self::TimeSpan)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A value of one of the `ScalarKind`s.
///
/// Numeric, time and text kinds are nullable and always encoded with a presence
/// bit. `Boolean` and `TimeSpan` are not.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Int32(Option<i32>),
    Int64(Option<i64>),
    Int16(Option<i16>),
    UInt8(Option<u8>),
    String(Option<String>),
    Ascii(Option<String>),
    Timestamp(Option<Timestamp>),
    Decimal(Option<Decimal>),
    Float64(Option<f64>),
    Boolean(bool),
    TimeSpan(TimeSpan),
    ByteArray(Option<Vec<u8>>),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Int16(_) => ScalarKind::Int16,
            Self::UInt8(_) => ScalarKind::UInt8,
            Self::String(_) => ScalarKind::String,
            Self::Ascii(_) => ScalarKind::Ascii,
            Self::Timestamp(_) => ScalarKind::Timestamp,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Boolean(_) => ScalarKind::Boolean,
            Self::TimeSpan(_) => ScalarKind::TimeSpan,
            Self::ByteArray(_) => ScalarKind::ByteArray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_match_discriminants() {
        for (index, kind) in ScalarKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.tag()), index);
            assert_eq!(ScalarKind::from_tag(kind.tag()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_tag_is_invalid_state() {
        assert!(matches!(
            ScalarKind::from_tag(12),
            Err(BitweaveError::InvalidState(_))
        ));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(ScalarValue::Boolean(true).kind(), ScalarKind::Boolean);
        assert_eq!(ScalarValue::Ascii(None).kind(), ScalarKind::Ascii);
        assert!(!ScalarKind::TimeSpan.is_nullable());
        assert_eq!(ScalarKind::ByteArray.to_string(), "ByteArray");
    }

    #[test]
    fn test_value_serializes_to_json() {
        let json = serde_json::to_string(&ScalarValue::Int16(Some(-5))).unwrap();
        assert_eq!(json, r#"{"Int16":-5}"#);
        let back: ScalarValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScalarValue::Int16(Some(-5)));
    }
}
