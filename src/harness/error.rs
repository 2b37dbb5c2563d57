use thiserror::Error;

use super::compare::MismatchError;
use super::monte_carlo::MonteCarloParamError;
use crate::encoding::DecodeError;

/// Any failure that stops a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// An embedded test vector is malformed.
    #[error("test vector decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The primitive disagreed with an expected value.
    #[error(transparent)]
    Mismatch(#[from] MismatchError),

    /// The Monte-Carlo parameters were rejected before the run started.
    #[error("invalid Monte-Carlo parameters: {0}")]
    InvalidParams(#[from] MonteCarloParamError),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
