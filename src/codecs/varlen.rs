//! Strings and byte arrays.
//!
//! Every variable-length value is a presence bit, a length prefix and then the
//! items at a fixed width:
//! * `append_string` stores UTF-16 code units at 16 bits each;
//! * `append_ascii` stores single-byte characters at 8 bits each;
//! * `append_byte_array` stores raw bytes at 8 bits each.
//!
//! Lengths and character ranges are validated before anything is written.

use crate::codecs::length::check_length;
use crate::error::BitweaveError;
use crate::vector::BitVector;

impl BitVector {
    //==============================================================================
    // 1. UTF-16 text
    //==============================================================================

    /// Appends an optional string as UTF-16 code units.
    pub fn append_string(&mut self, value: Option<&str>) -> Result<(), BitweaveError> {
        let Some(text) = value else {
            self.append_bit(false);
            return Ok(());
        };
        let len = text.encode_utf16().count();
        check_length(len)?;

        self.append_bit(true);
        self.append_length(len, 16)?;
        for unit in text.encode_utf16() {
            self.append_u32_unchecked(u32::from(unit), 16);
        }
        Ok(())
    }

    /// Reads a string written by `append_string`.
    ///
    /// Fails with `InvalidState` if the code units are not valid UTF-16.
    pub fn read_string(&mut self) -> Result<Option<String>, BitweaveError> {
        let Some(units) = self.read_utf16_units() else {
            return Ok(None);
        };
        String::from_utf16(&units)
            .map(Some)
            .map_err(|e| BitweaveError::InvalidState(format!("string payload: {e}")))
    }

    /// Appends raw UTF-16 code units with the same layout as `append_string`.
    ///
    /// Unlike `&str`, the units may contain unpaired surrogates.
    pub fn append_utf16_units(&mut self, value: Option<&[u16]>) -> Result<(), BitweaveError> {
        let Some(units) = value else {
            self.append_bit(false);
            return Ok(());
        };
        check_length(units.len())?;

        self.append_bit(true);
        self.append_length(units.len(), 16)?;
        for &unit in units {
            self.append_u32_unchecked(u32::from(unit), 16);
        }
        Ok(())
    }

    /// Reads the code units written by `append_string` or `append_utf16_units`.
    pub fn read_utf16_units(&mut self) -> Option<Vec<u16>> {
        if !self.read_bit() {
            return None;
        }
        let len = self.read_length();
        Some((0..len).map(|_| self.read_u32_unchecked(16) as u16).collect())
    }

    /// Appends a single UTF-16 code unit.
    pub fn append_char16(&mut self, unit: u16) {
        self.ensure_capacity(16);
        self.append_u32_unchecked(u32::from(unit), 16);
    }

    pub fn read_char16(&mut self) -> u16 {
        self.read_u32_unchecked(16) as u16
    }

    //==============================================================================
    // 2. Single-byte text
    //==============================================================================

    /// Appends an optional string of single-byte characters (`U+0000..=U+00FF`).
    ///
    /// Fails with `UnsupportedChar` on the first character above `U+00FF`.
    pub fn append_ascii(&mut self, value: Option<&str>) -> Result<(), BitweaveError> {
        let Some(text) = value else {
            self.append_bit(false);
            return Ok(());
        };
        let bytes = single_byte_chars(text)?;
        check_length(bytes.len())?;

        self.append_bit(true);
        self.append_length(bytes.len(), 8)?;
        for byte in bytes {
            self.append_byte_unchecked(byte);
        }
        Ok(())
    }

    /// Reads a string written by `append_ascii`.
    pub fn read_ascii(&mut self) -> Option<String> {
        self.read_byte_array()
            .map(|bytes| bytes.into_iter().map(char::from).collect())
    }

    //==============================================================================
    // 3. Byte arrays
    //==============================================================================

    /// Appends an optional byte array.
    pub fn append_byte_array(&mut self, value: Option<&[u8]>) -> Result<(), BitweaveError> {
        let Some(bytes) = value else {
            self.append_bit(false);
            return Ok(());
        };
        check_length(bytes.len())?;

        self.append_bit(true);
        self.append_length(bytes.len(), 8)?;
        for &byte in bytes {
            self.append_byte_unchecked(byte);
        }
        Ok(())
    }

    /// Reads a byte array written by `append_byte_array`.
    pub fn read_byte_array(&mut self) -> Option<Vec<u8>> {
        if !self.read_bit() {
            return None;
        }
        let len = self.read_length();
        Some((0..len).map(|_| self.read_byte()).collect())
    }
}

/// Maps every character to its single-byte code point.
pub(crate) fn single_byte_chars(text: &str) -> Result<Vec<u8>, BitweaveError> {
    text.chars()
        .map(|c| u8::try_from(c).map_err(|_| BitweaveError::UnsupportedChar(c)))
        .collect()
}
