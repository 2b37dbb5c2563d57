//! Byte-exact comparison with diagnostic output.
//!
//! Every check performed by the runners goes through [`assert_equal`], so
//! all failures are reported the same way: the check's label followed by
//! both buffers in lowercase hex.

use log::debug;
use thiserror::Error;

use crate::encoding::encode;

/// A verification failure: `actual` differs from `expected`.
///
/// Both buffers are kept as lowercase hex. The `Display` form is the
/// three-line dump `ERR: <label>`, `a1 = <actual>`, `a2 = <expected>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERR: {label}\na1 = {actual}\na2 = {expected}")]
pub struct MismatchError {
    pub label: &'static str,
    pub actual: String,
    pub expected: String,
}

/// Checks that `actual` and `expected` are identical.
///
/// The whole length is always scanned. Buffers of different lengths are
/// reported as a mismatch. The dump itself is only logged at debug level;
/// printing it is left to whoever handles the returned error.
pub fn assert_equal(
    actual: &[u8],
    expected: &[u8],
    label: &'static str,
) -> Result<(), MismatchError> {
    let diff = actual
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b));

    if diff == 0 && actual.len() == expected.len() {
        return Ok(());
    }

    let actual = encode(actual);
    let expected = encode(expected);

    debug!("{label}: a1 = {actual}, a2 = {expected}");

    Err(MismatchError {
        label,
        actual,
        expected,
    })
}
