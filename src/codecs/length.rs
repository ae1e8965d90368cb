//! Element counts for strings and arrays.
//!
//! | prefix | payload  | lengths              |
//! |--------|----------|----------------------|
//! | `0`    | none     | 0                    |
//! | `10`   | 8 bits   | 1 ..= 255            |
//! | `110`  | 16 bits  | 256 ..= 65 535       |
//! | `111`  | 24 bits  | 65 536 ..= 16 777 215|

use crate::error::BitweaveError;
use crate::vector::BitVector;

/// The largest length the prefix can express.
pub const MAX_LENGTH: usize = (1 << 24) - 1;

/// Slack reserved on top of the payload: the longest prefix plus change.
const PREFIX_RESERVE_BITS: usize = 48;

/// Fails with `LengthOverflow` for lengths the prefix cannot express.
pub(crate) fn check_length(len: usize) -> Result<(), BitweaveError> {
    if len > MAX_LENGTH {
        return Err(BitweaveError::LengthOverflow(len));
    }
    Ok(())
}

impl BitVector {
    /// Appends a length prefix for `len` items of `item_bits` bits each.
    ///
    /// Storage for the prefix and the whole payload is reserved here, so the
    /// caller may write the items with the unchecked primitives.
    pub fn append_length(&mut self, len: usize, item_bits: usize) -> Result<(), BitweaveError> {
        check_length(len)?;
        if len == 0 {
            self.append_bit(false);
            return Ok(());
        }

        self.ensure_capacity(len * item_bits + PREFIX_RESERVE_BITS);
        self.append_bit_unchecked(true);
        if len < 1 << 8 {
            self.append_bit_unchecked(false);
            self.append_byte_unchecked(len as u8);
        } else if len < 1 << 16 {
            self.append_bit_unchecked(true);
            self.append_bit_unchecked(false);
            self.append_u32_unchecked(len as u32, 16);
        } else {
            self.append_bit_unchecked(true);
            self.append_bit_unchecked(true);
            self.append_u32_unchecked(len as u32, 24);
        }
        Ok(())
    }

    /// Reads a length prefix.
    pub fn read_length(&mut self) -> usize {
        if !self.read_bit() {
            return 0;
        }
        if !self.read_bit() {
            return usize::from(self.read_byte());
        }
        if !self.read_bit() {
            return self.read_u32_unchecked(16) as usize;
        }
        self.read_u32_unchecked(24) as usize
    }
}
