//! Text encodings used by the harness.
//!
//! Currently only hexadecimal: test vectors are written as hex literals
//! and mismatching buffers are rendered back to hex for diagnostics.

pub mod hex;

pub use hex::{DecodeError, decode, decode_exact, decode_into, encode};
