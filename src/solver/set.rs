use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

use crate::solver::alias::Alias;

/// All solutions discovered for one interval: value to ranked aliases,
/// plus the order in which values were first seen. Discovery order is
/// the tie-break when pruning.
#[derive(Debug, Default)]
pub struct IntervalSet {
    by_value: HashMap<i64, Vec<Alias>>,
    order: Vec<i64>,
}

impl IntervalSet {
    /// Register one candidate alias for `value`, keeping at most `cap`
    /// distinct texts per value, shortest first. Re-registering an
    /// identical text is a no-op.
    pub fn register(&mut self, value: i64, alias: Alias, cap: usize) {
        match self.by_value.entry(value) {
            Entry::Vacant(slot) => {
                self.order.push(value);
                slot.insert(vec![alias]);
            }
            Entry::Occupied(mut slot) => {
                let aliases = slot.get_mut();
                if aliases.iter().any(|a| a.text() == alias.text()) {
                    return;
                }
                aliases.push(alias);
                // stable sort: equal-length texts keep insertion order
                aliases.sort_by_key(|a| a.text().len());
                aliases.truncate(cap);
            }
        }
    }

    /// Drop the lowest-priority values once the interval holds more
    /// than `max_values` of them. Priority is the length of the best
    /// (first) alias; ties keep discovery order.
    pub fn prune(&mut self, max_values: usize) {
        if self.order.len() <= max_values {
            return;
        }
        let mut ranked = self.order.clone();
        ranked.sort_by_key(|v| self.best_len(*v));
        let dropped = ranked.split_off(max_values);
        debug!("Pruning {} of {} values", dropped.len(), self.order.len());
        for value in dropped {
            self.by_value.remove(&value);
        }
        self.order.retain(|v| self.by_value.contains_key(v));
    }

    fn best_len(&self, value: i64) -> usize {
        self.by_value
            .get(&value)
            .and_then(|aliases| aliases.first())
            .map_or(usize::MAX, |a| a.text().len())
    }

    /// Distinct values in discovery order.
    pub fn values(&self) -> &[i64] {
        &self.order
    }

    pub fn aliases(&self, value: i64) -> &[Alias] {
        self.by_value.get(&value).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
