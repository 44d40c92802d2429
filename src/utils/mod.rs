//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::leaf_value;
pub use errors::UtilsError;
pub use validation::validate_seed;
