//! Iterated self-composition ("Monte-Carlo") test.
//!
//! Starting from `scalar = point = 9`, each iteration computes
//! `out = scalar · point`, then rotates the state: the old scalar becomes
//! the next input point and `out` becomes the next scalar. Every call
//! depends on all previous ones, so a single wrong output anywhere
//! changes every later checkpoint.

use log::{debug, info};
use thiserror::Error;

use super::compare::assert_equal;
use super::error::Result;
use super::primitive::{Bytes32, ScalarMult};
use super::progress::Progress;
use super::vectors::{MONTE_CARLO_CHECKPOINTS, MONTE_CARLO_MILLION};
use crate::encoding::decode_exact;
use crate::keys::x25519::BASEPOINT;

/// Expected scalar after a given iteration (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub iteration: u32,
    pub expected: &'static str,
}

/// Configuration of a Monte-Carlo run.
#[derive(Clone, Debug)]
pub struct MonteCarloParams {
    /// Number of primitive invocations (minimum 1).
    pub iterations: u32,
    /// Values checked along the way. Order does not matter.
    pub checkpoints: Vec<Checkpoint>,
    /// A progress tick is emitted every `progress_interval` iterations.
    pub progress_interval: u32,
}

/// Reasons a [`MonteCarloParams`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MonteCarloParamError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    #[error("progress interval must be at least 1")]
    ZeroProgressInterval,
    /// Checkpoints are 1-based and may not exceed the iteration count.
    #[error("checkpoint at iteration {iteration} is out of range")]
    CheckpointOutOfRange { iteration: u32 },
}

impl MonteCarloParams {
    /// The long run: 1,000,000 iterations with the published final value.
    pub fn extended() -> Self {
        let mut checkpoints = MONTE_CARLO_CHECKPOINTS.to_vec();
        checkpoints.push(MONTE_CARLO_MILLION);

        Self {
            iterations: MONTE_CARLO_MILLION.iteration,
            checkpoints,
            progress_interval: 50_000,
        }
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), MonteCarloParamError> {
        if self.iterations < 1 {
            return Err(MonteCarloParamError::ZeroIterations);
        }

        if self.progress_interval < 1 {
            return Err(MonteCarloParamError::ZeroProgressInterval);
        }

        if let Some(c) = self
            .checkpoints
            .iter()
            .find(|c| c.iteration == 0 || c.iteration > self.iterations)
        {
            return Err(MonteCarloParamError::CheckpointOutOfRange {
                iteration: c.iteration,
            });
        }

        Ok(())
    }
}

impl Default for MonteCarloParams {
    /// 1000 iterations, checked after iterations 1 and 1000, a tick every 50.
    fn default() -> Self {
        Self {
            iterations: 1000,
            checkpoints: MONTE_CARLO_CHECKPOINTS.to_vec(),
            progress_interval: 50,
        }
    }
}

/// Runs the Monte-Carlo test and returns the final scalar.
///
/// Parameters are validated and all checkpoint values decoded before the
/// first primitive call. The run aborts on the first checkpoint mismatch.
pub fn run_monte_carlo<P, R>(
    primitive: &P,
    params: &MonteCarloParams,
    progress: &mut R,
) -> Result<Bytes32>
where
    P: ScalarMult + ?Sized,
    R: Progress + ?Sized,
{
    params.validate()?;

    let mut checkpoints = params
        .checkpoints
        .iter()
        .map(|c| -> Result<(u32, Bytes32)> { Ok((c.iteration, decode_exact(c.expected)?)) })
        .collect::<Result<Vec<_>>>()?;
    checkpoints.sort_by_key(|&(iteration, _)| iteration);
    let mut pending = checkpoints.iter().peekable();

    info!(
        "Monte-Carlo: {} iterations, {} checkpoints",
        params.iterations,
        checkpoints.len()
    );

    let mut point = BASEPOINT;
    let mut scalar = BASEPOINT;

    for i in 1..=params.iterations {
        let mut out = [0u8; 32];
        primitive.scalar_mult(&mut out, &point, &scalar);
        point = scalar;
        scalar = out;

        while let Some((_, expected)) = pending.next_if(|&&(at, _)| at == i) {
            assert_equal(&scalar, expected, "KAT MC")?;
            debug!("Monte-Carlo checkpoint {i} ok");
        }

        if i % params.progress_interval == 0 {
            progress.tick();
        }
    }

    info!("Monte-Carlo: done");

    Ok(scalar)
}
