//! This crate provides the core data model for the `spritegen-rs` project.
//!
//! # Overview
//!
//! - [`sprite::Sprite`]: a fixed-size 2D grid of colors plus generation
//!   metadata, with bounds-checked pixel access, bulk export formats, and
//!   deterministic SVG rendering
//! - [`sprite::SpriteBuilder`]: the sanctioned construction path
//! - [`sprite::Color`] / [`sprite::Palette`]: the color value type and the
//!   generation-palette bookkeeping
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use spritegen_types::prelude::*;
//!
//! # fn main() -> Result<(), SpriteError> {
//! let sprite = SpriteBuilder::new(8, 8)
//! 	.palette(vec![Color::rgb(255, 200, 0)])
//! 	.horizontal_symmetry(true)
//! 	.build()?;
//!
//! let markup = sprite.svg_scale(16, "px", None);
//! assert!(markup.contains("viewBox=\"0, 0, 8, 8\""));
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use spritegen_types::sprite::SpriteBuilder;
//!
//! let sprite = SpriteBuilder::new(4, 4).build().unwrap();
//! assert_eq!(sprite.pixel_count(), 16);
//! ```

pub mod sprite;

/// `use spritegen_types::prelude::*;` to import commonly used items.
pub mod prelude;
