//! This module defines the value types that have no direct primitive Rust
//! counterpart but are part of the wire format: decimals, tick-based times and
//! the tagged scalar union.

pub mod decimal;
pub mod scalar;
pub mod ticks;

// Re-export the main types for easier access.
pub use decimal::Decimal;
pub use scalar::{ScalarKind, ScalarValue};
pub use ticks::{TimeSpan, Timestamp};
