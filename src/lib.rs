//! Temurah - arithmetic aliases for integers drawn from a digit seed
//!
//! Given a fixed string of decimal digits (the "seed"), this library finds,
//! for every integer value reachable by joining contiguous digit runs with
//! `+ - * /` and parentheses, a short ranked list of expression strings
//! ("aliases") that evaluate to that value. The result is useful for
//! producing human-style numeric disguises of arbitrary integers from a
//! fixed digit source.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, ParseError, parse_expression};
pub use solver::{AliasMap, AliasSolver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_seed};

/// Compute the alias map for `seed` with the default configuration.
///
/// This is a convenience function that creates a default solver and runs
/// the full interval search.
///
/// # Arguments
///
/// * `seed` - A string of ASCII digits, not equal to `"0"`
///
/// # Returns
///
/// A map from non-negative integer value to its aliases, shortest first.
/// The entry for `1` is always present.
///
/// # Errors
///
/// This function will return an error if:
/// * The seed is empty
/// * The seed contains non-digit characters
/// * The seed is exactly `"0"`
///
/// # Examples
///
/// ```
/// let aliases = temurah::alias_map("352").unwrap_or_default();
/// assert!(aliases.contains_key(&1));
/// assert!(aliases.contains_key(&352));
/// ```
pub fn alias_map(seed: &str) -> Result<AliasMap, SolverError> {
    let solver = AliasSolver::new();
    solver.alias_map(seed)
}
