//! Integers at caller-chosen widths.
//!
//! Unsigned values store their low `bits` bits through the primitive codec.
//! Signed values use a sign bit followed by a `(bits - 1)`-bit magnitude, where
//! the magnitude of a negative `v` is its one's complement `!v`. Decoding is then
//! `sign ? !magnitude : magnitude`, which reaches the type minimum exactly.
//!
//! `append_int` silently truncates a value that is too wide for the requested
//! width. `append_int_checked` rejects it before touching the buffer.

use crate::error::BitweaveError;
use crate::traits::{IntCodec, Scalar};
use crate::vector::{validate_width, BitVector};

//==================================================================================
// 1. Sign fold
//==================================================================================

impl BitVector {
    /// Writes `value` as sign bit + folded magnitude, `bits` in `2..=64`.
    /// Capacity must already be reserved.
    #[inline]
    pub(crate) fn append_signed_unchecked(&mut self, value: i64, bits: u8) {
        let negative = value < 0;
        let magnitude = if negative { !value } else { value } as u64;
        self.append_bit_unchecked(negative);
        self.append_u64_unchecked(magnitude, bits - 1);
    }

    /// Reads a value written by `append_signed_unchecked` at the same width.
    #[inline]
    pub(crate) fn read_signed_unchecked(&mut self, bits: u8) -> i64 {
        let negative = self.read_bit();
        let magnitude = self.read_u64_unchecked(bits - 1) as i64;
        if negative {
            !magnitude
        } else {
            magnitude
        }
    }

    //==============================================================================
    // 2. Public API (width validated)
    //==============================================================================

    /// Appends `value` at `bits` bits, `bits` in `2..=T::BITS`.
    ///
    /// A value outside the range of `bits` is truncated, not rejected.
    pub fn append_int<T: IntCodec>(&mut self, value: T, bits: u8) -> Result<(), BitweaveError> {
        validate_width(T::KIND, bits, T::BITS)?;
        self.ensure_capacity(usize::from(bits));
        value.write_unchecked(self, bits);
        Ok(())
    }

    /// Appends `value` at `bits` bits, rejecting values that do not fit.
    ///
    /// Nothing is written when an error is returned.
    pub fn append_int_checked<T: IntCodec>(
        &mut self,
        value: T,
        bits: u8,
    ) -> Result<(), BitweaveError> {
        validate_width(T::KIND, bits, T::BITS)?;
        check_fits(value, bits)?;
        self.ensure_capacity(usize::from(bits));
        value.write_unchecked(self, bits);
        Ok(())
    }

    /// Reads a value written at `bits` bits, `bits` in `2..=T::BITS`.
    pub fn read_int<T: IntCodec>(&mut self, bits: u8) -> Result<T, BitweaveError> {
        validate_width(T::KIND, bits, T::BITS)?;
        Ok(T::read_unchecked(self, bits))
    }
}

/// Fails with `ValueOutOfRange` if `value` is not representable at `bits` bits.
fn check_fits<T: IntCodec>(value: T, bits: u8) -> Result<(), BitweaveError> {
    let (min, max) = T::fit_bounds(bits);
    if value < min || value > max {
        return Err(BitweaveError::ValueOutOfRange {
            value: value.to_i128().unwrap_or_default(),
            bits,
            min: min.to_i128().unwrap_or_default(),
            max: max.to_i128().unwrap_or_default(),
        });
    }
    Ok(())
}

//==================================================================================
// 3. Trait implementations
//==================================================================================

macro_rules! impl_unsigned_codec {
    ($t:ty, $bits:expr) => {
        impl IntCodec for $t {
            const KIND: &'static str = stringify!($t);
            const BITS: u8 = $bits;

            #[inline]
            fn write_unchecked(self, bv: &mut BitVector, bits: u8) {
                bv.append_u64_unchecked(self as u64, bits);
            }

            #[inline]
            fn read_unchecked(bv: &mut BitVector, bits: u8) -> Self {
                bv.read_u64_unchecked(bits) as $t
            }
        }

        impl Scalar for $t {
            const ENCODED_BITS: usize = $bits;

            fn encode(self, bv: &mut BitVector) {
                self.write_unchecked(bv, $bits);
            }

            fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
                Ok(Self::read_unchecked(bv, $bits))
            }
        }
    };
}

macro_rules! impl_signed_codec {
    ($t:ty, $bits:expr) => {
        impl IntCodec for $t {
            const KIND: &'static str = stringify!($t);
            const BITS: u8 = $bits;

            #[inline]
            fn write_unchecked(self, bv: &mut BitVector, bits: u8) {
                bv.append_signed_unchecked(self as i64, bits);
            }

            #[inline]
            fn read_unchecked(bv: &mut BitVector, bits: u8) -> Self {
                bv.read_signed_unchecked(bits) as $t
            }
        }

        impl Scalar for $t {
            const ENCODED_BITS: usize = $bits;

            fn encode(self, bv: &mut BitVector) {
                self.write_unchecked(bv, $bits);
            }

            fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
                Ok(Self::read_unchecked(bv, $bits))
            }
        }
    };
}

impl_unsigned_codec!(u8, 8);
impl_unsigned_codec!(u16, 16);
impl_unsigned_codec!(u32, 32);
impl_unsigned_codec!(u64, 64);
impl_signed_codec!(i8, 8);
impl_signed_codec!(i16, 16);
impl_signed_codec!(i32, 32);
impl_signed_codec!(i64, 64);

impl Scalar for bool {
    const ENCODED_BITS: usize = 1;

    fn encode(self, bv: &mut BitVector) {
        bv.append_bit_unchecked(self);
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        Ok(bv.read_bit())
    }
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_fold_layout() {
        let mut bv = BitVector::new();
        bv.append_int(-1i32, 4).unwrap();
        bv.append_int(5i32, 4).unwrap();
        // -1 -> sign 1, magnitude !(-1) = 0 ; 5 -> sign 0, magnitude 5
        assert_eq!(bv.words()[0] >> 24, 0b1000_0101);
    }

    #[test]
    fn test_zero_has_positive_sign() {
        let mut bv = BitVector::new();
        bv.append_int(0i64, 64).unwrap();
        assert!(!bv[0]);
        assert_eq!(bv.read_int::<i64>(64).unwrap(), 0);
    }

    #[test]
    fn test_type_extremes_at_full_width() {
        let mut bv = BitVector::new();
        bv.append_int(i8::MIN, 8).unwrap();
        bv.append_int(i16::MAX, 16).unwrap();
        bv.append_int(i32::MIN, 32).unwrap();
        bv.append_int(i64::MIN, 64).unwrap();
        bv.append_int(i64::MAX, 64).unwrap();
        bv.append_int(u64::MAX, 64).unwrap();
        assert_eq!(bv.read_int::<i8>(8).unwrap(), i8::MIN);
        assert_eq!(bv.read_int::<i16>(16).unwrap(), i16::MAX);
        assert_eq!(bv.read_int::<i32>(32).unwrap(), i32::MIN);
        assert_eq!(bv.read_int::<i64>(64).unwrap(), i64::MIN);
        assert_eq!(bv.read_int::<i64>(64).unwrap(), i64::MAX);
        assert_eq!(bv.read_int::<u64>(64).unwrap(), u64::MAX);
    }

    #[test]
    fn test_fit_bounds_follow_shifted_type_limits() {
        assert_eq!(i32::fit_bounds(4), (-8, 7));
        assert_eq!(i64::fit_bounds(2), (-2, 1));
        assert_eq!(i16::fit_bounds(16), (i16::MIN, i16::MAX));
        assert_eq!(u8::fit_bounds(3), (0, 7));
    }

    #[test]
    fn test_checked_append_rejects_without_writing() {
        let mut bv = BitVector::new();
        let err = bv.append_int_checked(8i32, 4).unwrap_err();
        assert!(matches!(
            err,
            BitweaveError::ValueOutOfRange { value: 8, bits: 4, min: -8, max: 7 }
        ));
        assert!(bv.append_int_checked(-9i64, 4).is_err());
        assert!(bv.append_int_checked(16u32, 4).is_err());
        assert!(bv.is_empty());

        bv.append_int_checked(-8i32, 4).unwrap();
        bv.append_int_checked(7i32, 4).unwrap();
        assert_eq!(bv.read_int::<i32>(4).unwrap(), -8);
        assert_eq!(bv.read_int::<i32>(4).unwrap(), 7);
    }

    #[test]
    fn test_unchecked_append_truncates() {
        let mut bv = BitVector::new();
        bv.append_int(0x1FFu16, 8).unwrap();
        bv.append_bit(false);
        assert_eq!(bv.read_int::<u16>(8).unwrap(), 0xFF);
        assert!(!bv.read_bit());
    }

    #[test]
    fn test_width_limits_per_type() {
        let mut bv = BitVector::new();
        assert!(bv.append_int(1u8, 9).is_err());
        assert!(bv.append_int(1i8, 1).is_err());
        assert!(bv.append_int(1u16, 17).is_err());
        assert!(bv.append_int(1i16, 17).is_err());
        assert!(bv.append_int(1u32, 33).is_err());
        assert!(bv.append_int(1i32, 33).is_err());
        assert!(bv.append_int(1u64, 65).is_err());
        assert!(bv.append_int(1i64, 1).is_err());
        assert!(bv.read_int::<i16>(17).is_err());
        assert!(bv.read_int::<u8>(1).is_err());
        assert!(bv.is_empty());
    }

    #[test]
    fn test_scalar_bool_and_full_width() {
        let mut bv = BitVector::new();
        bv.append(true);
        bv.append(-42i16);
        bv.append(3_000_000_000u32);
        assert_eq!(bv.write_cursor(), 1 + 16 + 32);
        assert!(bv.read::<bool>().unwrap());
        assert_eq!(bv.read::<i16>().unwrap(), -42);
        assert_eq!(bv.read::<u32>().unwrap(), 3_000_000_000);
    }
}
