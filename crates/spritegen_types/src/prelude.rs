//! Prelude module for `spritegen_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use spritegen_types::prelude::*;
//!
//! let sprite = SpriteBuilder::new(4, 4).fill(Color::rgb(32, 64, 96)).build().unwrap();
//! assert_eq!(sprite.dim(), Dimension::new(4, 4));
//! ```

#[doc(inline)]
pub use crate::sprite::{
	// Color values and palettes
	Color,
	// Dimensions and the sprite entity
	Dimension,
	Palette,
	// Grid row iteration
	RowIterator,
	Sprite,
	// Construction and failure modes
	SpriteBuilder,
	SpriteError,
};

// Re-export the sprite module for advanced usage
#[doc(inline)]
pub use crate::sprite;
