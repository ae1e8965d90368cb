//! Fixed-width unsigned read/write primitives built directly on the word storage.
//!
//! A value of `bits` bits is stored most-significant bit first starting at the
//! write cursor. When the span crosses a word boundary the value is split: the
//! high part fills the tail of the current word and the low part fills the head
//! of the next one. Reads reverse this by concatenating at most two words.
//!
//! The `*_unchecked` writers neither validate the width nor grow the storage;
//! they are the fast path for codecs that call `ensure_capacity` once for a
//! whole composite value.

use super::{BitVector, WORD_BITS};
use crate::error::BitweaveError;

/// Rejects widths outside `2..=max` for the named kind.
pub(crate) fn validate_width(kind: &'static str, bits: u8, max: u8) -> Result<(), BitweaveError> {
    if bits < 2 || bits > max {
        return Err(BitweaveError::InvalidWidth { kind, bits, max });
    }
    Ok(())
}

impl BitVector {
    //==============================================================================
    // 1. Core word-splitting logic
    //==============================================================================

    /// Writes the low `bits` bits of `value`, `bits` in `1..=32`.
    #[inline]
    fn put_bits(&mut self, value: u32, bits: u32) {
        debug_assert!((1..=32).contains(&bits));
        let value = if bits == 32 { value } else { value & ((1u32 << bits) - 1) };
        let word = self.write_cursor / WORD_BITS;
        let free = (WORD_BITS - (self.write_cursor & (WORD_BITS - 1))) as u32;

        if bits <= free {
            self.words[word] |= value << (free - bits);
        } else {
            let spill = bits - free;
            self.words[word] |= value >> spill;
            self.words[word + 1] |= value << (32 - spill);
        }
        self.write_cursor += bits as usize;
    }

    /// Reads `bits` bits as the low bits of a `u32`, `bits` in `1..=32`.
    #[inline]
    fn take_bits(&mut self, bits: u32) -> u32 {
        debug_assert!((1..=32).contains(&bits));
        let position = self.take_read_position(bits as usize);
        let word = position / WORD_BITS;
        let offset = (position & (WORD_BITS - 1)) as u32;

        let mut window = self.word_at(word) << offset;
        if bits > 32 - offset {
            window |= self.word_at(word + 1) >> (32 - offset);
        }
        window >> (32 - bits)
    }

    //==============================================================================
    // 2. 8-bit fast path
    //==============================================================================

    /// Appends a full byte, growing the storage if needed.
    #[inline]
    pub fn append_byte(&mut self, value: u8) {
        self.ensure_capacity(8);
        self.append_byte_unchecked(value);
    }

    /// Appends a full byte without checking capacity.
    ///
    /// # Panics
    /// Panics if the storage has not been grown beforehand.
    #[inline]
    pub fn append_byte_unchecked(&mut self, value: u8) {
        self.put_bits(u32::from(value), 8);
    }

    /// Reads a full byte.
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.take_bits(8) as u8
    }

    //==============================================================================
    // 3. 2..=32 bit values
    //==============================================================================

    /// Appends the low `bits` bits of `value`, `bits` in `2..=32`.
    pub fn append_u32(&mut self, value: u32, bits: u8) -> Result<(), BitweaveError> {
        validate_width("u32", bits, 32)?;
        self.ensure_capacity(bits as usize);
        self.append_u32_unchecked(value, bits);
        Ok(())
    }

    /// Appends the low `bits` bits of `value` without validating the width or
    /// checking capacity. `bits` may be `1..=32`.
    ///
    /// # Panics
    /// Panics if the storage has not been grown beforehand.
    #[inline]
    pub fn append_u32_unchecked(&mut self, value: u32, bits: u8) {
        self.put_bits(value, u32::from(bits));
    }

    /// Reads a `bits`-bit unsigned value, `bits` in `2..=32`.
    pub fn read_u32(&mut self, bits: u8) -> Result<u32, BitweaveError> {
        validate_width("u32", bits, 32)?;
        Ok(self.read_u32_unchecked(bits))
    }

    /// Reads a `bits`-bit unsigned value without validating the width.
    #[inline]
    pub fn read_u32_unchecked(&mut self, bits: u8) -> u32 {
        self.take_bits(u32::from(bits))
    }

    //==============================================================================
    // 4. 2..=64 bit values
    //==============================================================================

    /// Appends the low `bits` bits of `value`, `bits` in `2..=64`.
    ///
    /// Widths above 32 store the low 32-bit word first, then the remaining
    /// `bits - 32` high bits.
    pub fn append_u64(&mut self, value: u64, bits: u8) -> Result<(), BitweaveError> {
        validate_width("u64", bits, 64)?;
        self.ensure_capacity(bits as usize);
        self.append_u64_unchecked(value, bits);
        Ok(())
    }

    /// Unchecked counterpart of `append_u64`. `bits` may be `1..=64`.
    ///
    /// # Panics
    /// Panics if the storage has not been grown beforehand.
    #[inline]
    pub fn append_u64_unchecked(&mut self, value: u64, bits: u8) {
        if bits <= 32 {
            self.put_bits(value as u32, u32::from(bits));
            return;
        }
        self.put_bits(value as u32, 32);
        self.put_bits((value >> 32) as u32, u32::from(bits) - 32);
    }

    /// Reads a `bits`-bit unsigned value, `bits` in `2..=64`.
    pub fn read_u64(&mut self, bits: u8) -> Result<u64, BitweaveError> {
        validate_width("u64", bits, 64)?;
        Ok(self.read_u64_unchecked(bits))
    }

    /// Reads a `bits`-bit unsigned value without validating the width.
    #[inline]
    pub fn read_u64_unchecked(&mut self, bits: u8) -> u64 {
        if bits <= 32 {
            return u64::from(self.take_bits(u32::from(bits)));
        }
        let low = u64::from(self.take_bits(32));
        let high = u64::from(self.take_bits(u32::from(bits) - 32));
        low | (high << 32)
    }
}

//==================================================================================
// 5. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_default_width_scenario() {
        let mut bv = BitVector::new();
        bv.append_u32(u32::MIN, 32).unwrap();
        bv.append_u32(u32::MAX, 32).unwrap();
        bv.append_u32(0, 32).unwrap();
        assert_eq!(bv.read_u32(32).unwrap(), u32::MIN);
        assert_eq!(bv.read_u32(32).unwrap(), u32::MAX);
        assert_eq!(bv.read_u32(32).unwrap(), 0);
    }

    #[test]
    fn test_value_split_across_word_boundary() {
        let mut bv = BitVector::new();
        bv.append_u32(0, 28).unwrap();
        bv.append_u32(0xABC, 12).unwrap();
        // high 4 bits land in word 0, low 8 bits at the head of word 1
        assert_eq!(bv.words()[0], 0xA);
        assert_eq!(bv.words()[1], 0xBC << 24);
        bv.advance_cursor(28);
        assert_eq!(bv.read_u32(12).unwrap(), 0xABC);
    }

    #[test]
    fn test_only_low_bits_are_stored() {
        let mut bv = BitVector::new();
        bv.append_bit(true);
        bv.append_u32(0xFFFF_FFFF, 4).unwrap();
        bv.append_bit(false);
        assert!(bv.read_bit());
        assert_eq!(bv.read_u32(4).unwrap(), 0xF);
        assert!(!bv.read_bit());
        assert_eq!(bv.write_cursor(), 6);
    }

    #[test]
    fn test_byte_fast_path_at_every_offset() {
        let mut bv = BitVector::new();
        for offset in 0..40 {
            bv.append_byte((offset * 7) as u8);
            bv.append_bit(offset % 2 == 0);
        }
        for offset in 0..40 {
            assert_eq!(bv.read_byte(), (offset * 7) as u8);
            assert_eq!(bv.read_bit(), offset % 2 == 0);
        }
    }

    #[test]
    fn test_u64_stores_low_word_first() {
        let mut bv = BitVector::new();
        bv.append_u64(0x0000_0001_8000_0000, 40).unwrap();
        assert_eq!(bv.words()[0], 0x8000_0000);
        assert_eq!(bv.words()[1], 0x01 << 24);
        assert_eq!(bv.read_u64(40).unwrap(), 0x0000_0001_8000_0000);
    }

    #[test]
    fn test_every_u64_width_at_max() {
        let mut bv = BitVector::new();
        for bits in 2..=64u8 {
            bv.append_u64(u64::MAX >> (64 - bits), bits).unwrap();
        }
        for bits in 2..=64u8 {
            assert_eq!(bv.read_u64(bits).unwrap(), u64::MAX >> (64 - bits));
        }
    }

    #[test]
    fn test_invalid_widths_are_rejected() {
        let mut bv = BitVector::new();
        assert!(matches!(
            bv.append_u32(1, 1),
            Err(BitweaveError::InvalidWidth { bits: 1, max: 32, .. })
        ));
        assert!(bv.append_u32(1, 33).is_err());
        assert!(bv.read_u32(0).is_err());
        assert!(bv.append_u64(1, 65).is_err());
        assert!(bv.read_u64(1).is_err());
        assert!(bv.is_empty());
    }
}
