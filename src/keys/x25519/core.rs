use super::field::FieldElement;

/// The conventional Curve25519 base point, `u = 9`.
pub const BASEPOINT: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

/// The X25519 function (RFC 7748, section 5).
///
/// Writes into `output` the u-coordinate of `scalar · P`, where `P` is the
/// point whose u-coordinate is `input_point`.
///
/// ## Algorithm
///
/// 1. Clamp the 32-byte scalar into the RFC 7748 form.
/// 2. Mask bit 255 of the u-coordinate and decode it as a field element.
/// 3. Run the Montgomery ladder for 255 bits using constant-time swaps.
/// 4. Convert back to affine form with one inversion.
///
/// The ladder keeps two projective points `(x2:z2)` and `(x3:z3)` whose
/// difference is always the input point.
///
/// ## Notes
///
/// - Non-canonical u-coordinates (`p ≤ u < 2²⁵⁵`) are accepted and reduced.
/// - Low-order input points yield an all-zero output, returned as-is.
/// - Constant-time with respect to the scalar.
pub fn x25519(output: &mut [u8; 32], input_point: &[u8; 32], scalar: &[u8; 32]) {
    let mut k = *scalar;
    k[0] &= 248;
    k[31] &= 127;
    k[31] |= 64;

    let mut u = *input_point;
    u[31] &= 127;

    let x1 = FieldElement::from_bytes(&u);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u32;

    for pos in (0..=254).rev() {
        let bit = ((k[pos >> 3] >> (pos & 7)) & 1) as u32;
        swap ^= bit;

        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = bit;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + e.mul_a24());
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    *output = (x2 * z2.invert()).to_bytes();
}

/// X25519 key exchange.
///
/// Computes the shared secret between a local private scalar and a peer
/// public u-coordinate. Equivalent to [`x25519`] with an owned output.
///
/// Per RFC 7748 the result may be all zeros for low-order peer keys;
/// callers that need contributory behaviour must check for it.
pub fn exchange(private: &[u8; 32], public: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    x25519(&mut out, public, private);
    out
}

/// Derives the public u-coordinate for `private` (`private · BASEPOINT`).
pub fn public_key(private: &[u8; 32]) -> [u8; 32] {
    exchange(private, &BASEPOINT)
}

/// Unit handle for the X25519 function, for use where a value implementing
/// a scalar-multiplication interface is expected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct X25519;
