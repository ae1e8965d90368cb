//! This module defines the shared codec traits implemented across the codec modules.
//!
//! * `IntCodec`: integers written at a caller-chosen width (`2..=BITS`).
//! * `Scalar`: values with one fixed encoding (booleans, full-width integers,
//!   floats, decimals, timestamps, durations).
//! * `DynamicCodec`: integers written with a self-describing minimal width.
//!
//! Keeping them as traits lets the nullable wrapper and the generic `append`/`read`
//! entry points on `BitVector` treat every scalar the same way.

use num_traits::PrimInt;
use std::fmt;

use crate::error::BitweaveError;
use crate::vector::BitVector;

/// An integer type that can be stored in any width from 2 up to its full size.
pub trait IntCodec: PrimInt + fmt::Display {
    /// Name used in width errors.
    const KIND: &'static str;
    /// Full width of the type in bits; also its default width.
    const BITS: u8;

    /// Writes `self` at `bits` bits. Width and capacity are the caller's problem;
    /// a value too wide for `bits` is silently truncated.
    fn write_unchecked(self, bv: &mut BitVector, bits: u8);

    /// Reads a value written by `write_unchecked` at the same width.
    fn read_unchecked(bv: &mut BitVector, bits: u8) -> Self;

    /// The inclusive range of values representable at `bits` bits:
    /// `TYPE_MIN >> (BITS - bits) ..= TYPE_MAX >> (BITS - bits)`.
    fn fit_bounds(bits: u8) -> (Self, Self) {
        let shift = usize::from(Self::BITS - bits);
        (Self::min_value() >> shift, Self::max_value() >> shift)
    }
}

/// A value with a single, fixed-size encoding.
pub trait Scalar: Sized {
    /// Upper bound on the bits `encode` writes, used to pre-grow the storage.
    const ENCODED_BITS: usize;

    /// Writes the value. The caller has already reserved `ENCODED_BITS` bits.
    fn encode(self, bv: &mut BitVector);

    /// Reads a value written by `encode`.
    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError>;
}

/// An integer type with a self-describing minimal-width encoding.
pub trait DynamicCodec: Sized {
    fn encode_dynamic(self, bv: &mut BitVector);
    fn decode_dynamic(bv: &mut BitVector) -> Result<Self, BitweaveError>;
}
