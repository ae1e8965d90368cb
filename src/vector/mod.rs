//! This module defines `BitVector`, the growable buffer of packed bits that every
//! codec in the crate writes into and reads from.
//!
//! Storage is a `Vec<u32>`. Bit index 0 is the most significant bit of word 0 and
//! indices run towards the least significant bit, then on into the next word
//! (big-endian bit order within and across words, i.e. `bitvec`'s `Msb0` order).
//!
//! Two cursors are kept:
//! * the **write cursor** counts bits appended so far and only ever grows;
//! * the **read cursor** is the position of the next sequential read. It is never
//!   checked against the write cursor. Reading past the written data yields
//!   whatever bits are there (zeros past the backing storage) instead of an error.
//!
//! Every bit past the write cursor is zero. The write primitives rely on this and
//! only ever OR bits into place.

use bitvec::prelude::*;
use std::ops::Index;

use crate::config::BitweaveConfig;

mod bytes;
mod primitive;

pub(crate) use primitive::validate_width;

/// Number of bits in one storage word.
pub(crate) const WORD_BITS: usize = 32;

//==================================================================================
// 1. The BitVector
//==================================================================================

/// A compact, append-only sequence of bits with an independent read cursor.
///
/// Not thread-safe: a single instance must not be shared across threads without
/// external locking. Growth reallocates the backing storage.
#[derive(Debug)]
pub struct BitVector {
    words: Vec<u32>,
    write_cursor: usize,
    read_cursor: usize,
    log_growth: bool,
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl BitVector {
    /// Creates an empty vector with room for 128 bits.
    pub fn new() -> Self {
        Self::with_config(&BitweaveConfig::default())
    }

    /// Creates an empty vector with room for `32 * words` bits.
    pub fn with_capacity_words(words: usize) -> Self {
        Self {
            words: vec![0; words.max(1)],
            write_cursor: 0,
            read_cursor: 0,
            log_growth: false,
        }
    }

    /// Creates an empty vector from a `BitweaveConfig`.
    pub fn with_config(config: &BitweaveConfig) -> Self {
        let mut vector = Self::with_capacity_words(config.initial_capacity_words);
        vector.log_growth = config.log_growth;
        vector
    }

    /// Wraps an already populated word buffer. `write_cursor` must not exceed it.
    pub(crate) fn from_words(mut words: Vec<u32>, write_cursor: usize) -> Self {
        if words.is_empty() {
            words.push(0);
        }
        debug_assert!(write_cursor <= words.len() * WORD_BITS);
        Self {
            words,
            write_cursor,
            read_cursor: 0,
            log_growth: false,
        }
    }

    //------------------------------------------------------------------------------
    // Accessors
    //------------------------------------------------------------------------------

    /// The number of bits appended so far.
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// The position of the next sequential read.
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// The number of bits the backing storage can hold without growing.
    pub fn capacity_bits(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.write_cursor == 0
    }

    /// Bits written but not yet consumed by the read cursor.
    pub fn remaining_bits(&self) -> usize {
        self.write_cursor.saturating_sub(self.read_cursor)
    }

    /// A view over exactly the bits written so far.
    pub fn as_bitslice(&self) -> &BitSlice<u32, Msb0> {
        &BitSlice::<u32, Msb0>::from_slice(&self.words)[..self.write_cursor]
    }

    /// Reads the bit at an absolute position without moving either cursor.
    ///
    /// Returns `None` only when `index` lies past the backing storage.
    pub fn bit(&self, index: usize) -> Option<bool> {
        BitSlice::<u32, Msb0>::from_slice(&self.words)
            .get(index)
            .map(|bit| *bit)
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }

    /// The word at `index`, or zero past the backing storage.
    #[inline]
    pub(crate) fn word_at(&self, index: usize) -> u32 {
        self.words.get(index).copied().unwrap_or(0)
    }

    //------------------------------------------------------------------------------
    // Read cursor
    //------------------------------------------------------------------------------

    /// Moves the read cursor back to the first bit.
    pub fn reset_read_cursor(&mut self) {
        self.read_cursor = 0;
    }

    /// Skips `bits` bits without reading them.
    pub fn advance_cursor(&mut self, bits: usize) {
        self.read_cursor += bits;
    }

    /// Moves the read cursor to the start of the next byte.
    ///
    /// The cursor always moves forward: an already byte-aligned cursor skips a
    /// whole byte.
    pub fn advance_to_next_byte(&mut self) {
        self.read_cursor = ((self.read_cursor >> 3) + 1) << 3;
    }

    /// Advances the read cursor, returning where it was.
    #[inline]
    pub(crate) fn take_read_position(&mut self, bits: usize) -> usize {
        let position = self.read_cursor;
        self.read_cursor += bits;
        position
    }

    //------------------------------------------------------------------------------
    // Growth
    //------------------------------------------------------------------------------

    /// Grows the backing storage so that `bits` more bits can be appended.
    ///
    /// The storage length doubles until it fits, plus one spare word so that
    /// a write ending exactly on a word boundary never indexes past the end.
    pub fn ensure_capacity(&mut self, bits: usize) {
        let required = (self.write_cursor + bits) / WORD_BITS + 1;
        if self.words.len() >= required {
            return;
        }

        let old_len = self.words.len();
        let mut new_len = old_len.max(1) * 2;
        while new_len < required {
            new_len *= 2;
        }
        self.words.resize(new_len, 0);

        if self.log_growth {
            log_metric!(
                "event" = "grow",
                "old_words" = old_len,
                "new_words" = new_len,
                "write_cursor" = self.write_cursor
            );
        }
    }

    /// Appends `count` zero bits. The bits are already zero, only the cursor moves.
    pub(crate) fn append_zeros(&mut self, count: usize) {
        self.ensure_capacity(count);
        self.write_cursor += count;
    }

    //------------------------------------------------------------------------------
    // Single bits
    //------------------------------------------------------------------------------

    /// Appends one bit, growing the storage if needed.
    #[inline]
    pub fn append_bit(&mut self, value: bool) {
        self.ensure_capacity(1);
        self.append_bit_unchecked(value);
    }

    /// Appends one bit without checking capacity.
    ///
    /// # Panics
    /// Panics if the storage has not been grown beforehand with `ensure_capacity`.
    #[inline]
    pub fn append_bit_unchecked(&mut self, value: bool) {
        if value {
            let offset = self.write_cursor & (WORD_BITS - 1);
            self.words[self.write_cursor / WORD_BITS] |= 1u32 << (WORD_BITS - 1 - offset);
        }
        self.write_cursor += 1;
    }

    /// Reads the bit under the read cursor and advances it by one.
    #[inline]
    pub fn read_bit(&mut self) -> bool {
        let position = self.take_read_position(1);
        let offset = position & (WORD_BITS - 1);
        (self.word_at(position / WORD_BITS) << offset) >> (WORD_BITS - 1) == 1
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    /// # Panics
    /// Panics if `index` lies past the backing storage.
    fn index(&self, index: usize) -> &bool {
        &BitSlice::<u32, Msb0>::from_slice(&self.words)[index]
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_is_empty() {
        let bv = BitVector::new();
        assert!(bv.is_empty());
        assert_eq!(bv.capacity_bits(), 128);
        assert_eq!(bv.read_cursor(), 0);
    }

    #[test]
    fn test_bit_order_is_msb_first() {
        let mut bv = BitVector::new();
        bv.append_bit(true);
        bv.append_bit(false);
        bv.append_bit(true);
        assert_eq!(bv.words()[0], 0b101 << 29);
        assert!(bv[0]);
        assert!(!bv[1]);
        assert!(bv[2]);
        assert_eq!(bv.bit(3), Some(false));
    }

    #[test]
    fn test_thousand_true_bits() {
        let mut bv = BitVector::new();
        for _ in 0..1000 {
            bv.append_bit(true);
        }
        assert_eq!(bv.write_cursor(), 1000);
        for _ in 0..1000 {
            assert!(bv.read_bit());
        }
        assert_eq!(bv.remaining_bits(), 0);
    }

    #[test]
    fn test_growth_doubles_and_keeps_data() {
        let mut bv = BitVector::with_capacity_words(1);
        for i in 0..200 {
            bv.append_bit(i % 3 == 0);
        }
        assert!(bv.capacity_bits() >= 200 + WORD_BITS);
        assert!(bv.capacity_bits().is_power_of_two());
        for i in 0..200 {
            assert_eq!(bv.read_bit(), i % 3 == 0);
        }
    }

    #[test]
    fn test_unchecked_append_after_ensure_capacity() {
        let mut bv = BitVector::with_capacity_words(1);
        bv.ensure_capacity(100);
        for _ in 0..100 {
            bv.append_bit_unchecked(true);
        }
        assert_eq!(bv.as_bitslice().count_ones(), 100);
    }

    #[test]
    fn test_indexer_does_not_move_cursors() {
        let mut bv = BitVector::new();
        bv.append_bit(false);
        bv.append_bit(true);
        assert!(bv[1]);
        assert_eq!(bv.read_cursor(), 0);
        assert_eq!(bv.write_cursor(), 2);
    }

    #[test]
    fn test_bit_past_storage_is_none() {
        let bv = BitVector::with_capacity_words(1);
        assert_eq!(bv.bit(32), None);
    }

    #[test]
    fn test_reading_past_storage_yields_zero() {
        let mut bv = BitVector::with_capacity_words(1);
        bv.advance_cursor(10_000);
        assert!(!bv.read_bit());
    }

    #[test]
    fn test_advance_to_next_byte_always_moves_forward() {
        let mut bv = BitVector::new();
        bv.advance_cursor(3);
        bv.advance_to_next_byte();
        assert_eq!(bv.read_cursor(), 8);
        bv.advance_to_next_byte();
        assert_eq!(bv.read_cursor(), 16);
        bv.reset_read_cursor();
        assert_eq!(bv.read_cursor(), 0);
    }

    #[test]
    fn test_config_controls_initial_capacity() {
        let config = BitweaveConfig {
            initial_capacity_words: 16,
            log_growth: true,
        };
        let mut bv = BitVector::with_config(&config);
        assert_eq!(bv.capacity_bits(), 512);
        for _ in 0..600 {
            bv.append_bit(true);
        }
        assert_eq!(bv.write_cursor(), 600);
    }
}
