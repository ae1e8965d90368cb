//! Export to, and import from, a flat byte buffer.
//!
//! The byte image is the word storage written out big-endian and cut off at
//! `ceil(write_cursor / 8)` bytes. Any bits between the write cursor and the end
//! of the last byte are zero.

use super::{BitVector, WORD_BITS};

impl BitVector {
    /// Returns the written bits as `ceil(write_cursor / 8)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let byte_len = self.write_cursor.div_ceil(8);
        self.words()
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .take(byte_len)
            .collect()
    }

    /// Rebuilds a vector from bytes produced by `to_bytes`.
    ///
    /// The write cursor becomes `8 * bytes.len()` and the read cursor starts at 0.
    /// A trailing partial word is zero-filled past the last byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let words: Vec<u32> = bytes
            .chunks(4)
            .map(|chunk| {
                let mut be = [0u8; 4];
                be[..chunk.len()].copy_from_slice(chunk);
                u32::from_be_bytes(be)
            })
            .collect();

        log_metric!(
            "event" = "import",
            "bytes" = bytes.len(),
            "words" = words.len()
        );
        Self::from_words(words, bytes.len() * 8)
    }

    /// Produces an independent copy by exporting to bytes and importing them.
    ///
    /// The copy's write cursor is rounded up to a whole byte and its read cursor
    /// starts at 0. Growth logging carries over.
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::from_bytes(&self.to_bytes());
        copy.log_growth = self.log_growth;
        copy
    }
}
