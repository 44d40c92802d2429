use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Seed error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
