//! This module collects every codec layered on top of the `BitVector` storage
//! primitives. Each sub-module adds methods to `BitVector` and, where it makes
//! sense, implements the shared traits from `crate::traits`.
//!
//! Data flows strictly upward: every codec is expressed in terms of the ones
//! declared before it.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Width-validated integers and the sign-fold scheme for signed values.
pub mod integer;

/// Presence-bit decoration for any scalar codec.
pub mod nullable;

/// Tiered unary-prefixed length encoding.
pub mod length;

/// Strings and byte arrays.
pub mod varlen;

/// Floats, decimals, timestamps and durations.
pub mod extended;

/// Unary codes and self-describing minimal-width integers.
pub mod dynamic;

/// Tag-prefixed values of a closed set of scalar kinds.
pub mod tagged;

//==================================================================================
// 2. Unit Tests (Module-level integration tests)
//==================================================================================
