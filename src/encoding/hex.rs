//! Strict hexadecimal codec.
//!
//! Decoding scans the text left to right. Spaces and colons are skipped,
//! so `"a5:46 e3"` and `"a546e3"` decode identically. Every other
//! character must be an ASCII hex digit (either case). Digits are paired
//! high nibble first.
//!
//! Errors are reported in scan order: the first invalid character wins
//! over a dangling nibble, which in turn wins over a short length. An
//! exact decode stops at the first surplus byte.

use std::str::CharIndices;

use thiserror::Error;

/// Characters skipped between digits.
const SEPARATORS: [char; 2] = [' ', ':'];

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Errors raised while decoding hexadecimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character that is neither a hex digit nor a separator.
    /// `position` is its byte offset in the input.
    #[error("invalid hex character {ch:?} at offset {position}")]
    InvalidChar { ch: char, position: usize },

    /// The text ends in the middle of a byte.
    #[error("odd number of hex digits (half final byte)")]
    OddDigits,

    /// The decoded bytes do not fit in the destination buffer.
    #[error("hex overflow: output exceeds {capacity} bytes")]
    Overflow { capacity: usize },

    /// The decoded length differs from the required one.
    #[error("unexpected hex length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Iterator over the bytes encoded in a hex string.
struct Pairs<'a> {
    chars: CharIndices<'a>,
}

fn pairs(text: &str) -> Pairs<'_> {
    Pairs {
        chars: text.char_indices(),
    }
}

impl Iterator for Pairs<'_> {
    type Item = Result<u8, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut high: Option<u8> = None;

        for (position, ch) in self.chars.by_ref() {
            if SEPARATORS.contains(&ch) {
                continue;
            }

            let Some(nibble) = ch.to_digit(16) else {
                return Some(Err(DecodeError::InvalidChar { ch, position }));
            };

            match high {
                None => high = Some(nibble as u8),
                Some(h) => return Some(Ok((h << 4) | nibble as u8)),
            }
        }

        high.map(|_| Err(DecodeError::OddDigits))
    }
}

/// Decodes `text` into a new vector.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    pairs(text).collect()
}

/// Decodes `text` into `dst` and returns the number of bytes written.
///
/// Fails with [`DecodeError::Overflow`] as soon as a byte would be written
/// past the end of `dst`. On error, `dst` may be partially written.
pub fn decode_into(dst: &mut [u8], text: &str) -> Result<usize, DecodeError> {
    let capacity = dst.len();
    let mut written = 0;

    for byte in pairs(text) {
        let byte = byte?;
        let slot = dst
            .get_mut(written)
            .ok_or(DecodeError::Overflow { capacity })?;

        *slot = byte;
        written += 1;
    }

    Ok(written)
}

/// Decodes `text` into exactly `N` bytes.
///
/// Shorter and longer inputs both fail with
/// [`DecodeError::LengthMismatch`]. Scanning stops at byte `N + 1`, so a
/// longer input always reports `actual: N + 1` and nothing after that
/// byte is examined.
///
/// ```
/// use x25519_kat::encoding::hex::{decode_exact, DecodeError};
///
/// assert_eq!(decode_exact::<2>("ab:CD"), Ok([0xab, 0xcd]));
/// assert_eq!(
///     decode_exact::<2>("abcdef"),
///     Err(DecodeError::LengthMismatch { expected: 2, actual: 3 })
/// );
/// ```
pub fn decode_exact<const N: usize>(text: &str) -> Result<[u8; N], DecodeError> {
    let mut out = [0u8; N];
    let mut actual = 0;

    for byte in pairs(text) {
        let byte = byte?;
        let Some(slot) = out.get_mut(actual) else {
            return Err(DecodeError::LengthMismatch {
                expected: N,
                actual: N + 1,
            });
        };

        *slot = byte;
        actual += 1;
    }

    if actual != N {
        return Err(DecodeError::LengthMismatch {
            expected: N,
            actual,
        });
    }

    Ok(out)
}

/// Renders `bytes` as lowercase hex without separators.
pub fn encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);

    for b in bytes {
        s.push(DIGITS[(b >> 4) as usize] as char);
        s.push(DIGITS[(b & 0x0f) as usize] as char);
    }

    s
}
