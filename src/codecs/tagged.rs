//! Self-describing values: an 8-bit `ScalarKind` tag followed by the value.

use crate::codecs::length::check_length;
use crate::codecs::varlen::single_byte_chars;
use crate::error::BitweaveError;
use crate::types::{ScalarKind, ScalarValue};
use crate::vector::BitVector;

impl BitVector {
    /// Appends `value` preceded by its kind tag.
    ///
    /// Text and byte payloads are validated before the tag is written, so a
    /// rejected value leaves the vector unchanged.
    pub fn append_scalar(&mut self, value: &ScalarValue) -> Result<(), BitweaveError> {
        match value {
            ScalarValue::String(Some(s)) => check_length(s.encode_utf16().count())?,
            ScalarValue::Ascii(Some(s)) => check_length(single_byte_chars(s)?.len())?,
            ScalarValue::ByteArray(Some(b)) => check_length(b.len())?,
            _ => {}
        }

        self.append_byte(value.kind().tag());
        match value {
            ScalarValue::Int32(v) => self.append_opt(*v),
            ScalarValue::Int64(v) => self.append_opt(*v),
            ScalarValue::Int16(v) => self.append_opt(*v),
            ScalarValue::UInt8(v) => self.append_opt(*v),
            ScalarValue::String(v) => self.append_string(v.as_deref())?,
            ScalarValue::Ascii(v) => self.append_ascii(v.as_deref())?,
            ScalarValue::Timestamp(v) => self.append_opt(*v),
            ScalarValue::Decimal(v) => self.append_opt(*v),
            ScalarValue::Float64(v) => self.append_opt(*v),
            ScalarValue::Boolean(v) => self.append(*v),
            ScalarValue::TimeSpan(v) => self.append(*v),
            ScalarValue::ByteArray(v) => self.append_byte_array(v.as_deref())?,
        }
        Ok(())
    }

    /// Reads a value written by `append_scalar`.
    ///
    /// Fails with `InvalidState` on an unknown tag.
    pub fn read_scalar(&mut self) -> Result<ScalarValue, BitweaveError> {
        let kind = ScalarKind::from_tag(self.read_byte())?;
        Ok(match kind {
            ScalarKind::Int32 => ScalarValue::Int32(self.read_opt()?),
            ScalarKind::Int64 => ScalarValue::Int64(self.read_opt()?),
            ScalarKind::Int16 => ScalarValue::Int16(self.read_opt()?),
            ScalarKind::UInt8 => ScalarValue::UInt8(self.read_opt()?),
            ScalarKind::String => ScalarValue::String(self.read_string()?),
            ScalarKind::Ascii => ScalarValue::Ascii(self.read_ascii()),
            ScalarKind::Timestamp => ScalarValue::Timestamp(self.read_opt()?),
            ScalarKind::Decimal => ScalarValue::Decimal(self.read_opt()?),
            ScalarKind::Float64 => ScalarValue::Float64(self.read_opt()?),
            ScalarKind::Boolean => ScalarValue::Boolean(self.read()?),
            ScalarKind::TimeSpan => ScalarValue::TimeSpan(self.read()?),
            ScalarKind::ByteArray => ScalarValue::ByteArray(self.read_byte_array()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Decimal, TimeSpan};

    #[test]
    fn test_tag_then_payload() {
        let mut bv = BitVector::new();
        bv.append_scalar(&ScalarValue::Boolean(true)).unwrap();
        assert_eq!(bv.write_cursor(), 9);
        assert_eq!(bv.words()[0] >> 23, (9 << 1) | 1);
    }

    #[test]
    fn test_every_kind_round_trips() {
        let values = vec![
            ScalarValue::Int32(Some(i32::MIN)),
            ScalarValue::Int64(None),
            ScalarValue::Int16(Some(-1)),
            ScalarValue::UInt8(Some(255)),
            ScalarValue::String(Some("h\u{e9}llo \u{1F30D}".to_string())),
            ScalarValue::Ascii(Some("plain".to_string())),
            ScalarValue::Timestamp(None),
            ScalarValue::Decimal(Some(Decimal::MIN)),
            ScalarValue::Float64(Some(-0.25)),
            ScalarValue::Boolean(false),
            ScalarValue::TimeSpan(TimeSpan::from_ticks(-36_000_000_000)),
            ScalarValue::ByteArray(None),
        ];
        let mut bv = BitVector::new();
        for v in &values {
            bv.append_scalar(v).unwrap();
        }
        for v in &values {
            assert_eq!(&bv.read_scalar().unwrap(), v);
        }
    }

    #[test]
    fn test_rejected_payload_writes_nothing() {
        let mut bv = BitVector::new();
        let err = bv
            .append_scalar(&ScalarValue::Ascii(Some("\u{20AC}".to_string())))
            .unwrap_err();
        assert!(matches!(err, BitweaveError::UnsupportedChar('\u{20AC}')));
        assert!(bv.is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let mut bv = BitVector::new();
        bv.append_byte(200);
        assert!(matches!(
            bv.read_scalar(),
            Err(BitweaveError::InvalidState(_))
        ));
    }
}
