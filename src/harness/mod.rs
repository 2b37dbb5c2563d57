//! Known-answer verification of a scalar-multiplication primitive.
//!
//! The harness treats the primitive as an opaque, deterministic function
//! reached through [`ScalarMult`], and checks it two ways:
//!
//! - [`run_kat`]
//!   Evaluates a fixed table of (scalar, point, expected) vectors.
//!
//! - [`run_monte_carlo`]
//!   Chains the primitive's output back into its own input and checks the
//!   running value at fixed iterations.
//!
//! Both route every check through [`assert_equal`]. Errors are returned,
//! never handled: the first failure ends the run, and it is up to the
//! caller (normally the `x25519-kat` binary) to turn that into a process
//! exit status.
//!
//! [`run_all`] runs both against the embedded vectors in [`vectors`],
//! with the progress transcript of the classic test driver.

mod compare;
mod error;
mod kat;
mod monte_carlo;
mod primitive;
mod progress;
pub mod vectors;

pub use compare::{MismatchError, assert_equal};
pub use error::{HarnessError, Result};
pub use kat::{KatVector, run_kat};
pub use monte_carlo::{Checkpoint, MonteCarloParamError, MonteCarloParams, run_monte_carlo};
pub use primitive::{Bytes32, ScalarMult};
pub use progress::{ConsoleProgress, Progress, Silent};

/// Runs the embedded KAT table, then the default Monte-Carlo test.
pub fn run_all<P, R>(primitive: &P, progress: &mut R) -> Result<()>
where
    P: ScalarMult + ?Sized,
    R: Progress + ?Sized,
{
    progress.begin("x25519");
    run_kat(primitive, vectors::KAT_X25519, progress)?;
    progress.pause();
    run_monte_carlo(primitive, &MonteCarloParams::default(), progress)?;
    progress.finish();

    Ok(())
}
