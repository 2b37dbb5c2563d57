//! Key-agreement primitives.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman scalar
//! multiplication using the Montgomery ladder as specified in RFC 7748.
//!
//! It operates purely on 32-byte arrays: a scalar and a u-coordinate in,
//! a u-coordinate out. No key types, no validation beyond what RFC 7748
//! mandates (scalar clamping and masking of the top u bit).
pub mod x25519;
