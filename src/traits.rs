//! Core trait definitions: the cost-oracle seam and the solver contract.
//!
//! To plug a pricing scheme into the solvers, provide a [`CostFn`]. Any
//! closure or `fn` item of shape `Fn(&[u8]) -> f64` already is one, through
//! the blanket implementation, so the common case needs no ceremony:
//!
//! ```
//! use part_dp::solve_prefix;
//!
//! // one fixed charge per piece, plus one per byte
//! let cost = solve_prefix(b"abab", &|s: &[u8]| 3.0 + s.len() as f64).unwrap();
//! assert_eq!(cost, 7.0);
//! ```
//!
//! The seam is generic, not boxed: each solver is monomorphised over the
//! oracle type, so an inlined closure carries no dispatch overhead even
//! though the oracle is called O(n²)–O(n³) times per solve.

use crate::error::{CostError, SolveError};

/// Black-box cost oracle for a single piece.
///
/// Contract:
/// - Pure and deterministic: equal pieces yield equal costs, every call.
/// - May be called many times with overlapping arguments; solvers do not
///   assume the oracle memoises anything.
/// - `f64::INFINITY` marks the piece as unselectable. NaN is a contract
///   violation and aborts the solve. Negative infinity is undefined (it can
///   manufacture NaN in intermediate sums).
pub trait CostFn {
    /// Cost of one contiguous piece.
    fn cost(&self, piece: &[u8]) -> Result<f64, CostError>;
}

impl<F> CostFn for F
where
    F: Fn(&[u8]) -> f64,
{
    fn cost(&self, piece: &[u8]) -> Result<f64, CostError> {
        Ok(self(piece))
    }
}

/// Adapter for oracles that can reject a piece outright.
///
/// ```
/// use part_dp::{solve_prefix, CostError, FallibleCost, SolveError};
///
/// let oracle = FallibleCost(|s: &[u8]| {
///     if s.contains(&b'!') {
///         Err(CostError::new("unexpected punctuation"))
///     } else {
///         Ok(s.len() as f64)
///     }
/// });
/// assert!(matches!(
///     solve_prefix(b"a!b", &oracle),
///     Err(SolveError::Cost(_))
/// ));
/// ```
pub struct FallibleCost<F>(pub F);

impl<F> CostFn for FallibleCost<F>
where
    F: Fn(&[u8]) -> Result<f64, CostError>,
{
    fn cost(&self, piece: &[u8]) -> Result<f64, CostError> {
        (self.0)(piece)
    }
}

/// Common contract of the minimum-cost partition solvers.
///
/// Semantics:
/// - A partition splits `seq` into one or more contiguous, non-overlapping
///   pieces whose concatenation is exactly `seq`.
/// - The total cost of a partition is the sum of the oracle over its pieces.
/// - `min_cost` returns the minimum total over all `2^(n-1)` partitions.
/// - The empty sequence has exactly one partition (no pieces) of cost 0.0.
///
/// Implementations are pure functions of `(seq, cost)`: no shared state
/// across calls, and re-invocation with identical inputs yields identical
/// results.
pub trait PartitionSolver {
    fn min_cost<C: CostFn>(&self, seq: &[u8], cost: &C) -> Result<f64, SolveError>;
}

/// Evaluate the oracle on `seq[start..end]`, rejecting NaN.
pub(crate) fn piece_cost<C: CostFn>(
    cost: &C,
    seq: &[u8],
    start: usize,
    end: usize,
) -> Result<f64, SolveError> {
    let c = cost.cost(&seq[start..end])?;
    if c.is_nan() {
        return Err(SolveError::NonFiniteCost { start, end });
    }
    Ok(c)
}
