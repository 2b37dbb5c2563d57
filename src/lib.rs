//! Known-answer verification harness for X25519
//!
//! This crate checks an X25519 scalar-multiplication primitive against
//! published test vectors. The harness is deliberately small and strict:
//! every check is byte-exact and the first failure ends the run.
//!
//! # Module overview
//!
//! - `encoding`
//!   A strict hexadecimal codec. Test vectors are embedded as hex text and
//!   decoded into fixed-size arrays; anything malformed or of the wrong
//!   length is rejected before it reaches a comparison.
//!
//! - `harness`
//!   The verification logic: the byte comparator, the known-answer test
//!   runner, the iterated Monte-Carlo runner, and the embedded vectors.
//!   The primitive is only reached through the `ScalarMult` trait, so any
//!   implementation (or a test double) can be plugged in.
//!
//! - `keys`
//!   The X25519 implementation shipped with the harness (RFC 7748,
//!   Montgomery ladder over 𝔽ₚ with `p = 2²⁵⁵ − 19`).
//!
//! # Design goals
//!
//! - Fixed-size buffers: every scalar and point is a `[u8; 32]`
//! - No process termination below `main`; every failure is a `Result`
//! - Deterministic, sequential execution with single-failure abort
//! - Diagnostics through the `log` facade
//!
//! ```
//! use x25519_kat::harness::{Silent, run_all};
//! use x25519_kat::keys::x25519::X25519;
//!
//! run_all(&X25519, &mut Silent).unwrap();
//! ```

pub mod encoding;
pub mod harness;
pub mod keys;
