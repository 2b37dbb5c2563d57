//! X25519 scalar multiplication.
//!
//! This module provides an implementation of the X25519 function as
//! specified in RFC 7748. It is the primitive the verification harness
//! ships with, but the harness only ever reaches it through its
//! `ScalarMult` interface.
//!
//! ## Structure
//!
//! - `core`
//!   The public API: scalar clamping, the Montgomery ladder, and the
//!   key-exchange convenience wrappers.
//!
//! - `field`
//!   Arithmetic modulo `2²⁵⁵ − 19` in radix 2⁵¹. Kept private so that all
//!   use goes through the byte-level API.

mod core;
mod field;

// Re-export the public API at the `x25519` level.
pub use self::core::*;
