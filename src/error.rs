//! Error types for partition solves.
//!
//! Both solvers are leaf computations: any failure from the cost oracle
//! aborts the enclosing solve immediately and is surfaced to the caller
//! unchanged. The computation is deterministic and pure, so there is no
//! retry path.

use thiserror::Error;

/// Failure reported by a cost oracle for a specific piece.
///
/// Oracles that can reject a piece outright (for example, on an unexpected
/// byte range) construct one of these through [`CostError::new`] and return
/// it via [`FallibleCost`](crate::traits::FallibleCost).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cost oracle rejected piece: {reason}")]
pub struct CostError {
    reason: String,
}

impl CostError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the partition solvers.
///
/// The empty sequence is not an error: both solvers return `Ok(0.0)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The cost oracle failed; propagated unchanged.
    #[error(transparent)]
    Cost(#[from] CostError),

    /// The cost oracle returned NaN for the piece `[start, end)`.
    ///
    /// Positive infinity is a legal "unselectable piece" sentinel and flows
    /// through the minimisation; NaN would silently poison every comparison
    /// downstream of it, so it is rejected at the evaluation site.
    #[error("cost oracle returned NaN for piece [{start}, {end})")]
    NonFiniteCost { start: usize, end: usize },
}
