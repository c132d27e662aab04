//! Prefix-boundary DP.
//!
//! State: `table[i]` = minimum cost of partitioning the length-`i` prefix.
//! Any optimal partition is an optimal partition of some proper prefix plus
//! exactly one final piece, so trying every length for that final piece is
//! enough; interior splits of the final piece are already captured by the
//! smaller prefix entries. O(n) end positions × O(n) start positions gives
//! the O(n²) bound (times the oracle's own cost per call).

use crate::error::SolveError;
use crate::tables::PrefixTable;
use crate::traits::{piece_cost, CostFn, PartitionSolver};

/// The O(n²) solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixSolver;

impl PartitionSolver for PrefixSolver {
    fn min_cost<C: CostFn>(&self, seq: &[u8], cost: &C) -> Result<f64, SolveError> {
        let n = seq.len();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("prefix_min_cost", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = PrefixTable::new(n);

        for i in 1..=n {
            let mut best = f64::INFINITY;
            // Final piece is seq[j..i]; the prefix before it is already optimal.
            for j in 0..i {
                best = best.min(table.get(j) + piece_cost(cost, seq, j, i)?);
            }
            table.set(i, best);
        }

        // n = 0 falls through to the base case: the empty partition.
        Ok(table.get(n))
    }
}
