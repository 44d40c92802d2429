//! Interval-based memoized search producing the alias map

mod alias;
mod config;
mod core;
mod errors;
mod set;

pub use config::SolverConfig;
pub use core::{AliasMap, AliasSolver};
pub use errors::SolverError;

#[cfg(test)]
mod tests;
