use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the seed is empty, contains any non-ASCII-digit
/// characters, or is zero-valued (`"0"`, `"00"`, ...) — a zero seed
/// cannot back the `seed/seed` fallback for 1.
pub fn validate_seed(seed: &str) -> Result<(), UtilsError> {
    debug!("Validating seed: '{}'", seed);

    if seed.is_empty() {
        warn!("Seed is empty");
        return Err(UtilsError::EmptySeed);
    }

    if !seed.chars().all(|c| c.is_ascii_digit()) {
        warn!("Seed contains non-digit characters: '{}'", seed);
        return Err(UtilsError::InvalidSeed(seed.to_string()));
    }

    if seed.bytes().all(|b| b == b'0') {
        warn!("Seed '{}' has value zero", seed);
        return Err(UtilsError::ZeroSeed);
    }

    debug!("Seed validation successful");
    Ok(())
}
