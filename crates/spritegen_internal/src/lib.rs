//! This module is separated into its own crate to keep the public facade of `spritegen-rs` thin, and should not be used directly.

/// `use spritegen::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export spritegen_types for convenience
pub use spritegen_types;

// Re-export commonly used types at crate root
pub use spritegen_types::sprite::{
	Color, Dimension, Palette, RowIterator, Sprite, SpriteBuilder, SpriteError,
};
