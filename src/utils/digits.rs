use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse `digits[start..end]` as a non-negative integer leaf.
///
/// Leading zeros are permitted and read as ordinary decimal digits,
/// so `"05"` parses to 5 and `"00"` to 0.
///
/// # Errors
///
/// Returns an error if the provided indices are out of bounds or empty,
/// or if the digit run overflows `i64`.
pub fn leaf_value(digits: &str, start: usize, end: usize) -> Result<i64, UtilsError> {
    if start >= end || end > digits.len() {
        warn!(
            "Invalid range: start={}, end={}, length={}",
            start,
            end,
            digits.len()
        );
        return Err(UtilsError::InvalidRange {
            start,
            end,
            length: digits.len(),
        });
    }

    let run = &digits[start..end];
    let mut value: i64 = 0;
    for byte in run.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(byte - b'0')))
            .ok_or_else(|| UtilsError::LeafTooLarge(run.to_string()))?;
    }

    debug!("Parsed leaf '{}' as {}", run, value);
    Ok(value)
}
