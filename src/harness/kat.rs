//! Table-driven known-answer tests.

use log::{debug, info};

use super::compare::assert_equal;
use super::error::Result;
use super::primitive::{Bytes32, ScalarMult};
use super::progress::Progress;
use crate::encoding::decode_exact;

/// One known-answer vector, all fields as hex text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KatVector {
    pub scalar: &'static str,
    pub point: &'static str,
    pub expected: &'static str,
}

/// Runs every vector of `table` in order against `primitive`.
///
/// Stops at the first malformed vector or mismatching output; entries
/// after it are neither decoded nor evaluated. Each verified entry emits
/// one progress tick.
///
/// Returns the number of verified entries.
pub fn run_kat<P, R>(primitive: &P, table: &[KatVector], progress: &mut R) -> Result<usize>
where
    P: ScalarMult + ?Sized,
    R: Progress + ?Sized,
{
    info!("KAT: {} vectors", table.len());

    for (index, vector) in table.iter().enumerate() {
        let scalar: Bytes32 = decode_exact(vector.scalar)?;
        let point: Bytes32 = decode_exact(vector.point)?;
        let expected: Bytes32 = decode_exact(vector.expected)?;

        let mut out = [0u8; 32];
        primitive.scalar_mult(&mut out, &point, &scalar);
        assert_equal(&out, &expected, "KAT")?;

        debug!("KAT vector {index} ok");
        progress.tick();
    }

    info!("KAT: all {} vectors passed", table.len());

    Ok(table.len())
}
