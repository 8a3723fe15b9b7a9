//! Utilities for spooltag: small, reusable helpers used across the crate.

pub mod hex;

// Re-export the common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex_upper(...)` etc if they prefer.
pub use hex::*;
