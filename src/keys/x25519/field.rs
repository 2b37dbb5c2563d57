//! Field arithmetic modulo `p = 2²⁵⁵ − 19` for the X25519 ladder.
//!
//! ## Representation
//!
//! Field elements are stored as five unsigned 51-bit limbs:
//!
//! ```text
//! x = l[0] + l[1]·2⁵¹ + l[2]·2¹⁰² + l[3]·2¹⁵³ + l[4]·2²⁰⁴
//! ```
//!
//! Limbs are allowed to grow slightly past 51 bits between operations
//! (additions are not reduced). Products are accumulated in `u128` and
//! folded back using `2²⁵⁵ ≡ 19 (mod p)`.
//!
//! Only the operations needed by the Montgomery ladder are provided.

use std::ops::{Add, Mul, Sub};

const MASK: u64 = (1 << 51) - 1;

/// `16·p`, limb by limb, added before subtracting so limbs never underflow.
const P16_LOW: u64 = 36028797018963664;
const P16_HIGH: u64 = 36028797018963952;

/// `(A − 2) / 4` for Curve25519.
const A24: u128 = 121665;

#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement([u64; 5]);

/// Reads 8 little-endian bytes starting at `offset`.
#[inline(always)]
fn load_8(input: &[u8; 32], offset: usize) -> u64 {
    let mut r = 0u64;
    for (i, byte) in input[offset..offset + 8].iter().enumerate() {
        r |= (*byte as u64) << (8 * i);
    }
    r
}

impl FieldElement {
    pub(crate) const ZERO: Self = FieldElement([0; 5]);
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0]);

    /// Decodes 32 little-endian bytes. Bit 255 is ignored.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> Self {
        FieldElement([
            load_8(input, 0) & MASK,
            (load_8(input, 6) >> 3) & MASK,
            (load_8(input, 12) >> 6) & MASK,
            (load_8(input, 19) >> 1) & MASK,
            (load_8(input, 24) >> 12) & MASK,
        ])
    }

    /// Canonical little-endian encoding (fully reduced below `p`).
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut l = Self::weak_reduce(self.0);

        // q = 1 iff the value is >= p
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;

        l[1] += l[0] >> 51;
        l[0] &= MASK;
        l[2] += l[1] >> 51;
        l[1] &= MASK;
        l[3] += l[2] >> 51;
        l[2] &= MASK;
        l[4] += l[3] >> 51;
        l[3] &= MASK;
        // dropping the carry out of l[4] subtracts 2^255
        l[4] &= MASK;

        let mut out = [0u8; 32];
        let mut acc = 0u64;
        let mut bits = 0;
        let mut idx = 0;

        for limb in l {
            acc |= limb << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;

        out
    }

    /// One round of carry propagation; limbs end up below `2⁵¹ + 2¹⁸`.
    #[inline(always)]
    fn weak_reduce(mut l: [u64; 5]) -> [u64; 5] {
        let c0 = l[0] >> 51;
        let c1 = l[1] >> 51;
        let c2 = l[2] >> 51;
        let c3 = l[3] >> 51;
        let c4 = l[4] >> 51;

        l[0] &= MASK;
        l[1] &= MASK;
        l[2] &= MASK;
        l[3] &= MASK;
        l[4] &= MASK;

        l[0] += c4 * 19;
        l[1] += c0;
        l[2] += c1;
        l[3] += c2;
        l[4] += c3;

        l
    }

    /// Folds five wide accumulators back into 51-bit limbs.
    #[inline(always)]
    fn carry_wide(c: [u128; 5]) -> Self {
        let mut out = [0u64; 5];

        let c1 = c[1] + (c[0] >> 51);
        out[0] = (c[0] as u64) & MASK;
        let c2 = c[2] + (c1 >> 51);
        out[1] = (c1 as u64) & MASK;
        let c3 = c[3] + (c2 >> 51);
        out[2] = (c2 as u64) & MASK;
        let c4 = c[4] + (c3 >> 51);
        out[3] = (c3 as u64) & MASK;
        out[4] = (c4 as u64) & MASK;

        let low = out[0] as u128 + (c4 >> 51) * 19;
        out[0] = (low as u64) & MASK;
        out[1] += (low >> 51) as u64;

        FieldElement(out)
    }

    /// Constant-time conditional swap: exchanges `self` and `rhs` iff
    /// `condition == 1`. `condition` must be 0 or 1.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = 0u64.wrapping_sub(condition as u64);

        for i in 0..5 {
            let t = mask & (self.0[i] ^ rhs.0[i]);
            self.0[i] ^= t;
            rhs.0[i] ^= t;
        }
    }

    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Squares `n` times in a row.
    pub(crate) fn n_square(self, n: usize) -> Self {
        let mut r = self;
        for _ in 0..n {
            r = r.square();
        }
        r
    }

    /// Multiplies by the ladder constant `a24 = 121665`.
    pub(crate) fn mul_a24(self) -> Self {
        Self::carry_wide(self.0.map(|limb| limb as u128 * A24))
    }

    /// Computes `self^(p − 2)`, the inverse for non-zero inputs.
    ///
    /// Zero maps to zero. The addition chain is fixed, so the running
    /// time does not depend on the value.
    pub(crate) fn invert(&self) -> Self {
        let z1 = *self;
        let z2 = z1.square();
        let z9 = z2.n_square(2) * z1;
        let z11 = z9 * z2;
        let z2_5_0 = z11.square() * z9;
        let z2_10_0 = z2_5_0.n_square(5) * z2_5_0;
        let z2_20_0 = z2_10_0.n_square(10) * z2_10_0;
        let z2_40_0 = z2_20_0.n_square(20) * z2_20_0;
        let z2_50_0 = z2_40_0.n_square(10) * z2_10_0;
        let z2_100_0 = z2_50_0.n_square(50) * z2_50_0;
        let z2_200_0 = z2_100_0.n_square(100) * z2_100_0;
        let z2_250_0 = z2_200_0.n_square(50) * z2_50_0;

        z2_250_0.n_square(5) * z11
    }
}

/// Limb-wise addition without reduction.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.0;
        for i in 0..5 {
            out[i] += rhs.0[i];
        }
        FieldElement(out)
    }
}

/// Subtraction through `self + 16p − rhs`, followed by a weak reduction.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let a = self.0;
        let b = rhs.0;

        FieldElement(Self::weak_reduce([
            (a[0] + P16_LOW) - b[0],
            (a[1] + P16_HIGH) - b[1],
            (a[2] + P16_HIGH) - b[2],
            (a[3] + P16_HIGH) - b[3],
            (a[4] + P16_HIGH) - b[4],
        ]))
    }
}

/// Schoolbook 5×5 limb product; high terms are folded in with factor 19.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = self.0;
        let b = rhs.0;

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        Self::carry_wide([c0, c1, c2, c3, c4])
    }
}
