use crate::solver::errors::SolverError;

/// Tuning knobs for the interval search.
///
/// The search is a bounded heuristic: the two numeric bounds trade
/// completeness for time and memory. Raising them widens coverage,
/// they never change which expressions are correct.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Also register the negated form of every nonzero leaf.
    pub allow_unary_minus: bool,
    /// Maximum expressions retained per value, shortest first.
    pub keep_top_k_by_len: usize,
    /// Maximum distinct values retained per interval before pruning.
    pub max_results_per_node: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            allow_unary_minus: true,
            keep_top_k_by_len: 3,
            max_results_per_node: 20_000,
        }
    }
}

impl SolverConfig {
    /// # Errors
    ///
    /// Returns an error if either numeric bound is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.keep_top_k_by_len == 0 {
            return Err(SolverError::InvalidConfig(
                "keep_top_k_by_len must be at least 1",
            ));
        }
        if self.max_results_per_node == 0 {
            return Err(SolverError::InvalidConfig(
                "max_results_per_node must be at least 1",
            ));
        }
        Ok(())
    }
}
