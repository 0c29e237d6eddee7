//! Stateless parameter validation helpers.

use super::SpriteError;

/// Checks that a dimension component is a positive integer.
///
/// # Arguments
///
/// * `value` - Value to check
/// * `field` - Parameter name reported on failure
///
/// # Errors
///
/// Returns [`SpriteError::Validation`] naming `field` when `value` is zero.
pub fn ensure_positive(value: u32, field: &'static str) -> Result<u32, SpriteError> {
	if value == 0 {
		return Err(SpriteError::Validation {
			field,
			value,
		});
	}
	Ok(value)
}
