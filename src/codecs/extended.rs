//! Fixed-encoding values beyond plain integers, and the generic `append`/`read`
//! entry points shared by every `Scalar`.
//!
//! * `f64` / `f32`: the IEEE-754 bit pattern, reinterpreted as `i64` / `i32`
//!   with `bytemuck` and written with the signed codec at full width.
//! * `Decimal`: its four `[lo, mid, hi, flags]` words, each a full-width `i32`.
//! * `Timestamp` / `TimeSpan`: the tick count as a full-width `i64`.

use crate::error::BitweaveError;
use crate::traits::Scalar;
use crate::types::{Decimal, TimeSpan, Timestamp};
use crate::vector::BitVector;

impl BitVector {
    /// Appends a fixed-encoding value.
    pub fn append<T: Scalar>(&mut self, value: T) {
        self.ensure_capacity(T::ENCODED_BITS);
        value.encode(self);
    }

    /// Reads a value written by `append`.
    pub fn read<T: Scalar>(&mut self) -> Result<T, BitweaveError> {
        T::decode(self)
    }
}

impl Scalar for f64 {
    const ENCODED_BITS: usize = 64;

    fn encode(self, bv: &mut BitVector) {
        bv.append_signed_unchecked(bytemuck::cast::<f64, i64>(self), 64);
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        Ok(bytemuck::cast::<i64, f64>(bv.read_signed_unchecked(64)))
    }
}

impl Scalar for f32 {
    const ENCODED_BITS: usize = 32;

    fn encode(self, bv: &mut BitVector) {
        let bits = bytemuck::cast::<f32, i32>(self);
        bv.append_signed_unchecked(i64::from(bits), 32);
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        let bits = bv.read_signed_unchecked(32) as i32;
        Ok(bytemuck::cast::<i32, f32>(bits))
    }
}

impl Scalar for Decimal {
    const ENCODED_BITS: usize = 128;

    fn encode(self, bv: &mut BitVector) {
        for part in self.to_parts() {
            bv.append_signed_unchecked(i64::from(part), 32);
        }
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        let mut parts = [0i32; 4];
        for part in parts.iter_mut() {
            *part = bv.read_signed_unchecked(32) as i32;
        }
        Decimal::from_parts(parts)
    }
}

impl Scalar for Timestamp {
    const ENCODED_BITS: usize = 64;

    fn encode(self, bv: &mut BitVector) {
        bv.append_signed_unchecked(self.ticks(), 64);
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        Ok(Timestamp::from_ticks(bv.read_signed_unchecked(64)))
    }
}

impl Scalar for TimeSpan {
    const ENCODED_BITS: usize = 64;

    fn encode(self, bv: &mut BitVector) {
        bv.append_signed_unchecked(self.ticks(), 64);
    }

    fn decode(bv: &mut BitVector) -> Result<Self, BitweaveError> {
        Ok(TimeSpan::from_ticks(bv.read_signed_unchecked(64)))
    }
}
