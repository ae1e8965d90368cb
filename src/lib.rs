//! This file is the root of the `bitweave` Rust crate.
//!
//! `bitweave` is a bit-addressable binary serialization engine. Values of many
//! kinds are packed into a single growable `BitVector` at arbitrary bit widths,
//! then read back in the same order through an independent read cursor.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`vector`, `codecs`,
//!     `types`, etc.) and re-exporting the public surface.
//! 2.  Defining the `#[pymodule]` entry point when built with the `python`
//!     feature.
//!
//! ```
//! use bitweave::BitVector;
//!
//! let mut bv = BitVector::new();
//! bv.append_int(-3i32, 4).unwrap();
//! bv.append_string(Some("hi")).unwrap();
//! bv.append_dynamic(1_000u32);
//!
//! let mut copy = BitVector::from_bytes(&bv.to_bytes());
//! assert_eq!(copy.read_int::<i32>(4).unwrap(), -3);
//! assert_eq!(copy.read_string().unwrap().as_deref(), Some("hi"));
//! assert_eq!(copy.read_dynamic::<u32>().unwrap(), 1_000);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod codecs;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod vector;

#[cfg(feature = "python")]
mod ffi;

pub use config::BitweaveConfig;
pub use error::BitweaveError;
pub use observability::enable_verbose_logging;
pub use traits::{DynamicCodec, IntCodec, Scalar};
pub use types::{Decimal, ScalarKind, ScalarValue, TimeSpan, Timestamp};
pub use vector::BitVector;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `bitweave` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn bitweave(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::python::PyBitVector>()?;

    // --- Expose the error type ---
    m.add(
        "BitweaveError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    m.add_function(wrap_pyfunction!(ffi::python::enable_verbose_logging_py, m)?)?;

    Ok(())
}
