//! Prelude module for `spritegen_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use spritegen_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let sprite = SpriteBuilder::new(8, 8).build().unwrap();
//! let markup = sprite.svg_scale(16, "px", None);
//! ```

// Re-export everything from spritegen_types::prelude
#[doc(inline)]
pub use spritegen_types::prelude::*;

// Re-export the entire spritegen_types module for advanced usage
#[doc(inline)]
pub use spritegen_types;
