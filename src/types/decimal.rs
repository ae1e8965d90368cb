//! A 128-bit decimal: a 96-bit unsigned coefficient, a sign and a power-of-ten
//! scale between 0 and 28. The value is `(-1)^sign * coefficient / 10^scale`.
//!
//! On the wire it is four 32-bit words `[lo, mid, hi, flags]`. The coefficient is
//! `lo | mid << 32 | hi << 64`. `flags` holds the scale in bits 16..=23 and the
//! sign in bit 31. Every other flag bit must be zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BitweaveError;

/// Largest supported scale.
pub const MAX_SCALE: u8 = 28;

/// Largest supported coefficient, `2^96 - 1`.
pub const MAX_COEFFICIENT: u128 = (1 << 96) - 1;

const SIGN_MASK: u32 = 0x8000_0000;
const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;

/// A fixed-point decimal number with exact round-trip representation.
///
/// Equality is structural: `1.0` and `1.00` differ because their scales differ.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    coefficient: u128,
    scale: u8,
    negative: bool,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        coefficient: 0,
        scale: 0,
        negative: false,
    };

    pub const MAX: Decimal = Decimal {
        coefficient: MAX_COEFFICIENT,
        scale: 0,
        negative: false,
    };

    pub const MIN: Decimal = Decimal {
        coefficient: MAX_COEFFICIENT,
        scale: 0,
        negative: true,
    };

    /// Builds a decimal, rejecting a coefficient above `2^96 - 1` or a scale
    /// above 28.
    pub fn new(coefficient: u128, scale: u8, negative: bool) -> Result<Self, BitweaveError> {
        if coefficient > MAX_COEFFICIENT {
            return Err(BitweaveError::InvalidDecimal(format!(
                "coefficient {coefficient} exceeds 96 bits"
            )));
        }
        if scale > MAX_SCALE {
            return Err(BitweaveError::InvalidDecimal(format!(
                "scale {scale} exceeds {MAX_SCALE}"
            )));
        }
        Ok(Self {
            coefficient,
            scale,
            negative,
        })
    }

    pub fn coefficient(&self) -> u128 {
        self.coefficient
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Splits the decimal into its `[lo, mid, hi, flags]` words.
    pub fn to_parts(&self) -> [i32; 4] {
        let mut flags = u32::from(self.scale) << SCALE_SHIFT;
        if self.negative {
            flags |= SIGN_MASK;
        }
        [
            self.coefficient as u32 as i32,
            (self.coefficient >> 32) as u32 as i32,
            (self.coefficient >> 64) as u32 as i32,
            flags as i32,
        ]
    }

    /// Rebuilds a decimal from `[lo, mid, hi, flags]`.
    ///
    /// Flags with unknown bits set, or a scale above 28, are `InvalidState`:
    /// they can only come from a corrupt stream.
    pub fn from_parts(parts: [i32; 4]) -> Result<Self, BitweaveError> {
        let flags = parts[3] as u32;
        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if flags & !(SIGN_MASK | SCALE_MASK) != 0 || scale > u32::from(MAX_SCALE) {
            return Err(BitweaveError::InvalidState(format!(
                "decimal flags {flags:#010x} are not valid"
            )));
        }
        let coefficient = u128::from(parts[0] as u32)
            | u128::from(parts[1] as u32) << 32
            | u128::from(parts[2] as u32) << 64;
        Ok(Self {
            coefficient,
            scale: scale as u8,
            negative: flags & SIGN_MASK != 0,
        })
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self {
            coefficient: u128::from(value.unsigned_abs()),
            scale: 0,
            negative: value < 0,
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = usize::from(self.scale);
        let mut digits = self.coefficient.to_string();
        if digits.len() <= scale {
            digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
        }
        if self.negative {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        let point = digits.len() - scale;
        write!(f, "{}.{}", &digits[..point], &digits[point..])
    }
}
