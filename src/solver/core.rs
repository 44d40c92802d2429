use std::collections::{BTreeMap, HashMap};

use log::{debug, info};

use crate::solver::alias::{Alias, BinOp};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::set::IntervalSet;
use crate::utils::{leaf_value, validate_seed};

/// The final public mapping: non-negative value to its ranked alias texts.
pub type AliasMap = BTreeMap<i64, Vec<String>>;

/// Memoized interval search over one seed string.
///
/// Subproblems are half-open digit ranges; every range is solved once,
/// bottom-up in increasing length, so parent intervals only ever read
/// finished child sets.
pub struct AliasSolver {
    config: SolverConfig,
}

impl AliasSolver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Compute the alias map for `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is not a nonzero decimal digit
    /// string, or if a configuration bound is zero.
    pub fn alias_map(&self, seed: &str) -> Result<AliasMap, SolverError> {
        validate_seed(seed)?;
        self.config.validate()?;

        info!("Solving intervals for seed '{}'", seed);

        let n = seed.len();
        let mut memo: HashMap<(usize, usize), IntervalSet> = HashMap::new();
        for length in 1..=n {
            for start in 0..=(n - length) {
                let end = start + length;
                let set = self.solve_interval(seed, start, end, &memo);
                memo.insert((start, end), set);
            }
        }

        // Merge every interval's solutions, shortest intervals first, so
        // each substring leaf survives into the public map and ranking
        // stays deterministic.
        let cap = self.config.keep_top_k_by_len;
        let mut merged = IntervalSet::default();
        for length in 1..=n {
            for start in 0..=(n - length) {
                let Some(set) = memo.get(&(start, start + length)) else {
                    continue;
                };
                if set.is_empty() {
                    continue;
                }
                for &value in set.values() {
                    for alias in set.aliases(value) {
                        merged.register(value, alias.clone(), cap);
                    }
                }
            }
        }

        let map = assemble(&merged, seed);
        info!("Found aliases for {} values", map.len());
        Ok(map)
    }

    fn solve_interval(
        &self,
        seed: &str,
        start: usize,
        end: usize,
        memo: &HashMap<(usize, usize), IntervalSet>,
    ) -> IntervalSet {
        let cap = self.config.keep_top_k_by_len;
        let mut set = IntervalSet::default();

        let digits = &seed[start..end];
        match leaf_value(seed, start, end) {
            Ok(leaf) => {
                set.register(leaf, Alias::literal(digits), cap);
                // negating zero would only duplicate the plain leaf
                if self.config.allow_unary_minus && leaf != 0 {
                    set.register(-leaf, Alias::negated(digits), cap);
                }
            }
            Err(err) => debug!("Skipping leaf '{}': {}", digits, err),
        }

        for split in (start + 1)..end {
            let (Some(left), Some(right)) = (memo.get(&(start, split)), memo.get(&(split, end)))
            else {
                continue;
            };
            for &lhs in left.values() {
                for &rhs in right.values() {
                    for e1 in left.aliases(lhs) {
                        for e2 in right.aliases(rhs) {
                            for op in BinOp::ALL {
                                let Some(value) = op.apply(lhs, rhs) else {
                                    continue;
                                };
                                set.register(value, Alias::combine(op, e1, e2), cap);
                            }
                        }
                    }
                }
            }
        }

        set.prune(self.config.max_results_per_node);
        debug!("Interval [{}, {}) holds {} values", start, end, set.len());
        set
    }
}

impl Default for AliasSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten the merged solutions into the public map: drop negative
/// values, strip one cosmetic outer paren pair, and guarantee an entry
/// for 1.
fn assemble(merged: &IntervalSet, seed: &str) -> AliasMap {
    let mut map = AliasMap::new();
    for &value in merged.values() {
        if value < 0 {
            continue;
        }
        let mut texts: Vec<String> = Vec::new();
        for alias in merged.aliases(value) {
            let text = strip_outer_parens(alias.text());
            if !texts.contains(&text) {
                texts.push(text);
            }
        }
        map.insert(value, texts);
    }
    map.entry(1)
        .or_insert_with(|| vec![format!("{seed}/{seed}")]);
    map
}

/// Strip a single enclosing paren pair, but only when the whole text is
/// one balanced group. Purely cosmetic; nested wraps are left alone.
fn strip_outer_parens(text: &str) -> String {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return text.to_string();
    }
    let mut depth = 0i32;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                // the opening paren closes before the end: not one group
                if depth == 0 && i + 1 != bytes.len() {
                    return text.to_string();
                }
            }
            _ => {}
        }
    }
    text[1..text.len() - 1].to_string()
}

#[cfg(test)]
mod strip_tests {
    use super::strip_outer_parens;

    #[test]
    fn test_strip_single_wrap() {
        assert_eq!(strip_outer_parens("(3+5)"), "3+5");
        assert_eq!(strip_outer_parens("(3+(5*2))"), "3+(5*2)");
    }

    #[test]
    fn test_strip_leaves_partial_wraps_alone() {
        assert_eq!(strip_outer_parens("3+5"), "3+5");
        assert_eq!(strip_outer_parens("(3+5)*2"), "(3+5)*2");
        assert_eq!(strip_outer_parens("(3+5)*(2+1)"), "(3+5)*(2+1)");
    }

    #[test]
    fn test_strip_removes_one_layer_only() {
        // nested-but-fully-wrapped forms lose exactly one pair
        assert_eq!(strip_outer_parens("((3+5))"), "(3+5)");
    }
}
