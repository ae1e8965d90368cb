//! Optional values: one presence bit, then the wrapped encoding when present.
//!
//! `None` costs exactly one `0` bit. `Some(v)` costs a `1` bit followed by the
//! normal encoding of `v`. Width validation happens before the presence bit is
//! written, so an invalid width is rejected even when the value is `None`.

use crate::error::BitweaveError;
use crate::traits::{IntCodec, Scalar};
use crate::vector::{validate_width, BitVector};

impl BitVector {
    /// Writes the presence bit and, for `Some`, hands the value to `write`.
    ///
    /// `write` runs with `extra_bits` already reserved after the presence bit.
    #[inline]
    pub(crate) fn append_presence<T>(
        &mut self,
        value: Option<T>,
        extra_bits: usize,
        write: impl FnOnce(&mut Self, T),
    ) {
        match value {
            None => self.append_bit(false),
            Some(v) => {
                self.ensure_capacity(1 + extra_bits);
                self.append_bit_unchecked(true);
                write(self, v);
            }
        }
    }

    /// Reads the presence bit and, when set, the wrapped value.
    #[inline]
    pub(crate) fn read_presence<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, BitweaveError>,
    ) -> Result<Option<T>, BitweaveError> {
        if !self.read_bit() {
            return Ok(None);
        }
        read(self).map(Some)
    }

    //==============================================================================
    // Scalars
    //==============================================================================

    /// Appends an optional fixed-encoding value.
    pub fn append_opt<T: Scalar>(&mut self, value: Option<T>) {
        self.append_presence(value, T::ENCODED_BITS, |bv, v| v.encode(bv));
    }

    /// Reads a value written by `append_opt`.
    pub fn read_opt<T: Scalar>(&mut self) -> Result<Option<T>, BitweaveError> {
        self.read_presence(T::decode)
    }

    //==============================================================================
    // Integers at a chosen width
    //==============================================================================

    /// Appends an optional integer at `bits` bits, `bits` in `2..=T::BITS`.
    pub fn append_int_opt<T: IntCodec>(
        &mut self,
        value: Option<T>,
        bits: u8,
    ) -> Result<(), BitweaveError> {
        validate_width(T::KIND, bits, T::BITS)?;
        self.append_presence(value, usize::from(bits), |bv, v| {
            v.write_unchecked(bv, bits)
        });
        Ok(())
    }

    /// Reads a value written by `append_int_opt` at the same width.
    pub fn read_int_opt<T: IntCodec>(&mut self, bits: u8) -> Result<Option<T>, BitweaveError> {
        validate_width(T::KIND, bits, T::BITS)?;
        self.read_presence(|bv| Ok(T::read_unchecked(bv, bits)))
    }
}
