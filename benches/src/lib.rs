//! Benchmark helper utilities for spritegen-rs
//!
//! This module provides utilities for generating synthetic sprites and common
//! benchmark helpers for the spritegen-rs project. All fixtures are built
//! in-memory; the benchmarks have no file dependencies.

use spritegen_types::sprite::{Color, Sprite, SpriteBuilder};

/// Builds a test sprite of the given dimensions with a deterministic
/// color pattern.
///
/// The pattern cycles through the full channel range so packed and byte
/// exports see varied values, and every cell differs from its neighbors,
/// which keeps the SVG renderer from hitting any degenerate uniform case.
pub fn generate_test_sprite(width: u32, height: u32) -> Sprite {
	let mut grid = Vec::with_capacity((width * height) as usize);

	for y in 0..height {
		for x in 0..width {
			let r = (x * 7 % 256) as u8;
			let g = (y * 11 % 256) as u8;
			let b = ((x + y) * 13 % 256) as u8;
			grid.push(Color::rgb(r, g, b));
		}
	}

	SpriteBuilder::new(width, height)
		.grid(grid)
		.palette(vec![
			Color::rgb(255, 0, 0),
			Color::rgb(0, 255, 0),
			Color::rgb(0, 0, 255),
		])
		.build()
		.expect("benchmark sprite dimensions are valid")
}

/// Common benchmark sizes for synthetic sprites
pub mod sizes {
	/// Tiny sprite: 8x8 (64 pixels) - classic icon size
	pub const TINY: (u32, u32) = (8, 8);
	/// Small sprite: 16x16 (256 pixels) - typical generated sprite
	pub const SMALL: (u32, u32) = (16, 16);
	/// Medium sprite: 32x32 (1,024 pixels)
	pub const MEDIUM: (u32, u32) = (32, 32);
	/// Large sprite: 128x128 (16,384 pixels) - stress size
	pub const LARGE: (u32, u32) = (128, 128);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_sprite() {
		let sprite = generate_test_sprite(16, 8);
		assert_eq!(sprite.width(), 16);
		assert_eq!(sprite.height(), 8);
		assert_eq!(sprite.pixel_count(), 128);

		// Deterministic: two fixtures of the same size are identical
		assert_eq!(generate_test_sprite(16, 8), sprite);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (8, 8));
		assert_eq!(sizes::SMALL, (16, 16));
		assert_eq!(sizes::MEDIUM, (32, 32));
		assert_eq!(sizes::LARGE, (128, 128));
	}
}
