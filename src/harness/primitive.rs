use crate::keys::x25519::{X25519, x25519};

/// A 32-byte scalar or u-coordinate.
pub type Bytes32 = [u8; 32];

/// The scalar-multiplication primitive under test.
///
/// Implementations must be pure and deterministic: identical inputs give
/// byte-identical outputs, with no observable state between calls.
///
/// Any `Fn(&mut [u8; 32], &[u8; 32], &[u8; 32])` qualifies, which is how
/// tests substitute instrumented or faulty primitives.
pub trait ScalarMult {
    /// Writes `scalar · input_point` into `output`.
    fn scalar_mult(&self, output: &mut Bytes32, input_point: &Bytes32, scalar: &Bytes32);
}

impl ScalarMult for X25519 {
    fn scalar_mult(&self, output: &mut Bytes32, input_point: &Bytes32, scalar: &Bytes32) {
        x25519(output, input_point, scalar);
    }
}

impl<F> ScalarMult for F
where
    F: Fn(&mut Bytes32, &Bytes32, &Bytes32),
{
    fn scalar_mult(&self, output: &mut Bytes32, input_point: &Bytes32, scalar: &Bytes32) {
        self(output, input_point, scalar)
    }
}
