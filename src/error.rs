// In: src/error.rs

//! This module defines the single, unified error type for the entire bitweave library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Errors fall into two families:
//! * **Range errors**: a caller asked for something the wire format cannot express
//!   (a bad width, a value that does not fit, a length that is too long). These are
//!   always raised *before* the buffer is touched.
//! * **Invalid state**: the bits being read do not form a valid encoding. This means
//!   stream corruption or a writer/reader mismatch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitweaveError {
    // =========================================================================
    // === Range Errors (rejected before any write)
    // =========================================================================
    #[error("Bit width {bits} is outside the valid range 2..={max} for {kind}")]
    InvalidWidth {
        kind: &'static str,
        bits: u8,
        max: u8,
    },

    #[error("Value {value} does not fit in {bits} bits (allowed {min}..={max})")]
    ValueOutOfRange {
        value: i128,
        bits: u8,
        min: i128,
        max: i128,
    },

    #[error("Length {0} exceeds the maximum encodable length of 16777215 items")]
    LengthOverflow(usize),

    #[error("Character {0:?} is outside the single-byte range of the ASCII codec")]
    UnsupportedChar(char),

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Time value out of range: {0}")]
    TimeOverflow(String),

    // =========================================================================
    // === Decoding Errors
    // =========================================================================
    /// The bits under the read cursor do not form a valid encoding.
    #[error("Invalid stream state: {0}")]
    InvalidState(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the underlying I/O subsystem (e.g. opening a log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while parsing configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl BitweaveError {
    /// Returns `true` for the errors that reject a request up front.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWidth { .. }
                | Self::ValueOutOfRange { .. }
                | Self::LengthOverflow(_)
                | Self::UnsupportedChar(_)
                | Self::InvalidDecimal(_)
                | Self::TimeOverflow(_)
        )
    }
}

//==================================================================================
// Python Conversion
//==================================================================================

#[cfg(feature = "python")]
impl From<BitweaveError> for pyo3::PyErr {
    fn from(err: BitweaveError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
