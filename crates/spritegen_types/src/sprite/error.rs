//! Error types for sprite construction and access.

use thiserror::Error;

/// Errors that can occur when constructing or accessing a sprite.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpriteError {
	/// A dimension component is not a positive integer
	#[error("Invalid {field}: expected a positive integer, got {value}")]
	Validation {
		/// Name of the offending parameter
		field: &'static str,
		/// Value that failed the check
		value: u32,
	},

	/// A supplied grid's length does not match the sprite dimensions
	#[error("Grid length mismatch: expected {expected} pixels, got {actual}")]
	DimensionMismatch {
		/// Expected grid length (width × height)
		expected: usize,
		/// Actual length of the supplied grid
		actual: usize,
	},

	/// A coordinate lies outside the sprite grid
	#[error("Pixel ({x}, {y}) out of bounds (sprite is {width}×{height})")]
	OutOfBounds {
		/// Requested X coordinate
		x: u32,
		/// Requested Y coordinate
		y: u32,
		/// Grid width
		width: u32,
		/// Grid height
		height: u32,
	},
}
