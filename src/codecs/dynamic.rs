//! Self-describing integers.
//!
//! A dynamic integer is a unary-coded class index followed by the value at the
//! class width. The unary code for `n` is `n` zero bits and a terminating `1`.
//!
//! | class | width | unsigned limit | signed limit (`|v|` after fold) |
//! |-------|-------|----------------|---------------------------------|
//! | 0     | 4     | `< 2^4`        | `< 2^3`                         |
//! | 1     | 8     | `< 2^8`        | `< 2^7`                         |
//! | 2     | 16    | `< 2^16`       | `< 2^15`                        |
//! | 3     | 24    | `< 2^24`       | `< 2^23`                        |
//! | 4     | 32    | `< 2^32`       | `< 2^31`                        |
//! | 5     | 64    | rest           | rest                            |
//!
//! Signed limits leave room for the sign bit, so every value lands in the
//! narrowest class that can hold it exactly.

use num_traits::cast;
use std::fmt;

use crate::error::BitweaveError;
use crate::traits::DynamicCodec;
use crate::vector::{BitVector, WORD_BITS};

const CLASS_WIDTHS: [u8; 6] = [4, 8, 16, 24, 32, 64];

/// Smallest class whose width holds `value` as an unsigned integer.
fn unsigned_class(value: u64) -> usize {
    CLASS_WIDTHS[..5]
        .iter()
        .position(|&width| value < 1u64 << width)
        .unwrap_or(5)
}

/// Smallest class whose width holds `value` as sign bit + folded magnitude.
fn signed_class(value: i64) -> usize {
    let magnitude = if value < 0 { !value } else { value } as u64;
    CLASS_WIDTHS[..5]
        .iter()
        .position(|&width| magnitude < 1u64 << (width - 1))
        .unwrap_or(5)
}

fn class_width(class: usize) -> Result<u8, BitweaveError> {
    CLASS_WIDTHS
        .get(class)
        .copied()
        .ok_or_else(|| BitweaveError::InvalidState(format!("dynamic width class {class}")))
}

impl BitVector {
    //==============================================================================
    // 1. Unary codes
    //==============================================================================

    /// Appends `n` zero bits followed by a single `1`.
    pub fn unary_put(&mut self, n: usize) {
        self.append_zeros(n);
        self.append_bit(true);
    }

    /// Counts zero bits up to and including the next `1`.
    ///
    /// Fails with `InvalidState` if no `1` is found before the end of storage.
    pub fn unary_get(&mut self) -> Result<usize, BitweaveError> {
        let mut count = 0;
        loop {
            let position = self.read_cursor();
            if position >= self.capacity_bits() {
                return Err(BitweaveError::InvalidState(
                    "unterminated unary code".to_string(),
                ));
            }
            let offset = position % WORD_BITS;
            let window = self.word_at(position / WORD_BITS) << offset;
            if window == 0 {
                let skipped = WORD_BITS - offset;
                count += skipped;
                self.advance_cursor(skipped);
                continue;
            }
            let zeros = window.leading_zeros() as usize;
            self.advance_cursor(zeros + 1);
            return Ok(count + zeros);
        }
    }

    //==============================================================================
    // 2. Minimal-width integers
    //==============================================================================

    /// Appends `value` with the narrowest width class that holds it.
    pub fn append_dynamic<T: DynamicCodec>(&mut self, value: T) {
        value.encode_dynamic(self);
    }

    /// Reads a value written by `append_dynamic`.
    ///
    /// Fails with `InvalidState` on an unknown class or a value that does not
    /// fit in `T`.
    pub fn read_dynamic<T: DynamicCodec>(&mut self) -> Result<T, BitweaveError> {
        T::decode_dynamic(self)
    }

    pub(crate) fn append_dynamic_u64(&mut self, value: u64) {
        let class = unsigned_class(value);
        let width = CLASS_WIDTHS[class];
        self.unary_put(class);
        self.ensure_capacity(usize::from(width));
        self.append_u64_unchecked(value, width);
    }

    pub(crate) fn read_dynamic_u64(&mut self) -> Result<u64, BitweaveError> {
        let width = class_width(self.unary_get()?)?;
        Ok(self.read_u64_unchecked(width))
    }

    pub(crate) fn append_dynamic_i64(&mut self, value: i64) {
        let class = signed_class(value);
        let width = CLASS_WIDTHS[class];
        self.unary_put(class);
        self.ensure_capacity(usize::from(width));
        self.append_signed_unchecked(value, width);
    }

    pub(crate) fn read_dynamic_i64(&mut self) -> Result<i64, BitweaveError> {
        let width = class_width(self.unary_get()?)?;
        Ok(self.read_signed_unchecked(width))
    }
}

/// Converts a decoded 64-bit value to the requested type.
fn narrow<W: num_traits::NumCast + Copy + fmt::Display, T: num_traits::NumCast>(
    value: W,
    kind: &str,
) -> Result<T, BitweaveError> {
    cast::<W, T>(value).ok_or_else(|| {
        BitweaveError::InvalidState(format!("dynamic value {value} does not fit in {kind}"))
    })
}

macro_rules! impl_dynamic_unsigned {
    ($($t:ty),*) => {
        $(
            impl DynamicCodec for $t {
                fn encode_dynamic(self, bv: &mut BitVector) {
                    bv.append_dynamic_u64(u64::from(self));
                }

                fn decode_dynamic(bv: &mut BitVector) -> Result<Self, BitweaveError> {
                    narrow(bv.read_dynamic_u64()?, stringify!($t))
                }
            }
        )*
    };
}

macro_rules! impl_dynamic_signed {
    ($($t:ty),*) => {
        $(
            impl DynamicCodec for $t {
                fn encode_dynamic(self, bv: &mut BitVector) {
                    bv.append_dynamic_i64(i64::from(self));
                }

                fn decode_dynamic(bv: &mut BitVector) -> Result<Self, BitweaveError> {
                    narrow(bv.read_dynamic_i64()?, stringify!($t))
                }
            }
        )*
    };
}

impl_dynamic_unsigned!(u8, u16, u32, u64);
impl_dynamic_signed!(i8, i16, i32, i64);
