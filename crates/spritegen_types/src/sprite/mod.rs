//! Pixel sprite data model.
//!
//! This module provides the [`Sprite`] entity used by procedural sprite
//! generation: a fixed-size 2D grid of [`Color`] values plus generation
//! metadata (a [`Palette`] and a horizontal-symmetry flag), with
//! bounds-checked pixel access, bulk export formats, and deterministic SVG
//! rendering.
//!
//! # Grid layout
//!
//! Pixels are stored in row-major order: the linear index of `(x, y)` is
//! `y * width + x`, with `x` addressing the column and `y` the row. Every
//! read, write, and export path resolves coordinates through that single
//! formula.
//!
//! # Construction
//!
//! Sprites are built through [`SpriteBuilder`], the sanctioned construction
//! path; the entity's own constructor is crate-internal.
//!
//! # Usage Examples
//!
//! ## Building and querying a sprite
//!
//! ```
//! use spritegen_types::sprite::{Color, SpriteBuilder};
//!
//! # fn main() -> Result<(), spritegen_types::sprite::SpriteError> {
//! let sprite = SpriteBuilder::new(4, 4)
//! 	.palette(vec![Color::rgb(255, 0, 0)])
//! 	.build()?;
//!
//! assert_eq!(sprite.pixel_at(0, 0)?, Color::BLACK);
//! assert_eq!(sprite.pixel_at_checked(4, 0), None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rendering to SVG
//!
//! ```
//! use spritegen_types::sprite::SpriteBuilder;
//!
//! # fn main() -> Result<(), spritegen_types::sprite::SpriteError> {
//! let sprite = SpriteBuilder::new(8, 8).build()?;
//!
//! // 8×8 grid at 16 output pixels per cell
//! let markup = sprite.svg_scale(16, "", None);
//! assert!(markup.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod color;
pub mod palette;
pub mod svg;

mod error;
mod validate;

pub use builder::SpriteBuilder;
pub use color::Color;
pub use error::SpriteError;
pub use palette::Palette;
pub use validate::ensure_positive;

/// Sprite dimensions in pixels.
///
/// Both components are positive for every live [`Sprite`]; the builder
/// validates them before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
	/// Grid width in pixels
	pub width: u32,

	/// Grid height in pixels
	pub height: u32,
}

impl Dimension {
	/// Creates a new dimension pair.
	pub const fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
		}
	}

	/// Returns the total number of pixels in a grid of this dimension.
	#[inline]
	pub const fn pixel_count(&self) -> usize {
		(self.width as usize) * (self.height as usize)
	}
}

impl fmt::Display for Dimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.width, self.height)
	}
}

/// Fixed-size 2D grid of colors plus generation metadata.
///
/// The grid length always equals `width × height` exactly; individual
/// pixels are mutable in place through the setters, while the dimension is
/// fixed for the life of the instance. Cloning yields a fully independent
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
	/// Grid dimensions, fixed at construction
	dim: Dimension,

	/// Pixel grid in row-major order, always `dim.pixel_count()` long
	pixels: Vec<Color>,

	/// Colors the sprite was generated from (bookkeeping only)
	palette: Palette,

	/// Whether the grid was generated with left-right mirroring
	/// (recorded, never enforced)
	horizontal_symmetry: bool,
}

impl Sprite {
	/// Creates a sprite from already-validated parts.
	///
	/// Callers go through [`SpriteBuilder`], which establishes the
	/// invariants this constructor assumes.
	pub(crate) fn new(
		dim: Dimension,
		pixels: Vec<Color>,
		palette: Palette,
		horizontal_symmetry: bool,
	) -> Self {
		debug_assert_eq!(pixels.len(), dim.pixel_count(), "Grid length mismatch");

		Self {
			dim,
			pixels,
			palette,
			horizontal_symmetry,
		}
	}

	/// Returns the sprite dimensions.
	#[inline]
	pub fn dim(&self) -> Dimension {
		self.dim
	}

	/// Returns the grid width in pixels.
	#[inline]
	pub fn width(&self) -> u32 {
		self.dim.width
	}

	/// Returns the grid height in pixels.
	#[inline]
	pub fn height(&self) -> u32 {
		self.dim.height
	}

	/// Returns the total number of pixels in the grid.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.dim.pixel_count()
	}

	/// Returns the pixel grid in row-major order.
	#[inline]
	pub fn pixels(&self) -> &[Color] {
		&self.pixels
	}

	/// Returns the palette recorded at generation time.
	#[inline]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns whether the grid was generated with left-right mirroring.
	#[inline]
	pub fn horizontal_symmetry(&self) -> bool {
		self.horizontal_symmetry
	}

	/// Resolves `(x, y)` to a linear grid index.
	///
	/// Row-major: `y * width + x`. The single indexing routine every
	/// access path calls; coordinates must already be in bounds.
	#[inline]
	fn index_of(&self, x: u32, y: u32) -> usize {
		(y * self.dim.width + x) as usize
	}

	/// Returns `true` if `(x, y)` lies inside the grid.
	#[inline]
	fn in_bounds(&self, x: u32, y: u32) -> bool {
		x < self.dim.width && y < self.dim.height
	}

	/// Gets the color at the specified coordinates.
	///
	/// # Arguments
	///
	/// * `x` - X coordinate (0-based column)
	/// * `y` - Y coordinate (0-based row)
	///
	/// # Errors
	///
	/// Returns [`SpriteError::OutOfBounds`] reporting the requested
	/// coordinate and the actual bounds when `x` or `y` lies outside the
	/// grid.
	pub fn pixel_at(&self, x: u32, y: u32) -> Result<Color, SpriteError> {
		if !self.in_bounds(x, y) {
			return Err(self.out_of_bounds(x, y));
		}
		Ok(self.pixels[self.index_of(x, y)])
	}

	/// Gets the color at the specified coordinates, or `None` when the
	/// coordinates lie outside the grid.
	///
	/// The non-failing counterpart of [`Sprite::pixel_at`] for call sites
	/// that probe coordinates defensively.
	pub fn pixel_at_checked(&self, x: u32, y: u32) -> Option<Color> {
		if !self.in_bounds(x, y) {
			return None;
		}
		self.pixels.get(self.index_of(x, y)).copied()
	}

	/// Sets the color at the specified coordinates.
	///
	/// # Arguments
	///
	/// * `x` - X coordinate (0-based column)
	/// * `y` - Y coordinate (0-based row)
	/// * `color` - New pixel value
	///
	/// # Errors
	///
	/// Returns [`SpriteError::OutOfBounds`] when `x` or `y` lies outside
	/// the grid.
	pub fn set_pixel_at(&mut self, x: u32, y: u32, color: Color) -> Result<(), SpriteError> {
		if !self.in_bounds(x, y) {
			return Err(self.out_of_bounds(x, y));
		}
		let index = self.index_of(x, y);
		self.pixels[index] = color;
		Ok(())
	}

	/// Sets the color at the specified coordinates.
	///
	/// # Returns
	///
	/// `true` if the pixel was set, `false` if the coordinates lie outside
	/// the grid.
	pub fn set_pixel_at_checked(&mut self, x: u32, y: u32, color: Color) -> bool {
		if !self.in_bounds(x, y) {
			return false;
		}
		let index = self.index_of(x, y);
		if let Some(pixel) = self.pixels.get_mut(index) {
			*pixel = color;
			true
		} else {
			false
		}
	}

	/// Returns one `(r, g, b, a)` tuple per grid cell, in storage
	/// (row-major) order.
	pub fn channels(&self) -> Vec<(u8, u8, u8, u8)> {
		self.pixels.iter().map(Color::channels).collect()
	}

	/// Returns the grid as a nested sequence indexed first by `x`, then by
	/// `y`.
	///
	/// Each cell is obtained by a fresh per-coordinate lookup, so the
	/// result is an explicitly-indexed traversal of the grid, not a
	/// reshape of the flat storage.
	pub fn matrix(&self) -> Vec<Vec<Color>> {
		let mut columns = Vec::with_capacity(self.dim.width as usize);
		for x in 0..self.dim.width {
			let mut column = Vec::with_capacity(self.dim.height as usize);
			for y in 0..self.dim.height {
				column.push(self.pixels[self.index_of(x, y)]);
			}
			columns.push(column);
		}
		columns
	}

	/// Returns one packed 32-bit ARGB value per grid cell, in storage
	/// order (see [`Color::to_argb32`]).
	pub fn packed(&self) -> Vec<u32> {
		self.pixels.iter().map(Color::to_argb32).collect()
	}

	/// Serializes the grid to bytes, four per cell in storage order.
	///
	/// Each pixel contributes `[alpha, red, green, green]`; the fourth
	/// slot duplicates the green channel instead of carrying blue.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut output = Vec::with_capacity(self.pixels.len() * 4);

		for color in &self.pixels {
			output.push(color.a);
			output.push(color.r);
			output.push(color.g);
			// TODO: emit the blue channel here once consumers of this
			// stream migrate off the duplicated-green layout.
			output.push(color.g);
		}

		output
	}

	/// Returns an iterator over the rows of the pixel grid.
	pub fn rows(&self) -> RowIterator<'_> {
		RowIterator::new(&self.pixels, self.dim.width as usize)
	}

	/// Converts the grid to an ASCII art representation.
	///
	/// # Arguments
	///
	/// * `char_map` - Function mapping pixel colors to characters
	pub fn to_ascii_art<F>(&self, char_map: F) -> String
	where
		F: Fn(Color) -> char,
	{
		let mut result = String::new();

		for row in self.rows() {
			for &pixel in row {
				result.push(char_map(pixel));
			}
			result.push('\n');
		}

		result
	}

	/// Builds the out-of-bounds error for `(x, y)`.
	fn out_of_bounds(&self, x: u32, y: u32) -> SpriteError {
		SpriteError::OutOfBounds {
			x,
			y,
			width: self.dim.width,
			height: self.dim.height,
		}
	}
}

impl fmt::Display for Sprite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} sprite, {} palette colors, horizontal symmetry: {}",
			self.dim,
			self.palette.len(),
			self.horizontal_symmetry
		)
	}
}

/// Iterator over rows of the pixel grid.
#[derive(Debug, Clone)]
pub struct RowIterator<'a> {
	pixels: &'a [Color],
	width: usize,
	current_row: usize,
	total_rows: usize,
}

impl<'a> RowIterator<'a> {
	fn new(pixels: &'a [Color], width: usize) -> Self {
		let total_rows = if width > 0 {
			pixels.len() / width
		} else {
			0
		};

		Self {
			pixels,
			width,
			current_row: 0,
			total_rows,
		}
	}
}

impl<'a> Iterator for RowIterator<'a> {
	type Item = &'a [Color];

	fn next(&mut self) -> Option<Self::Item> {
		if self.current_row >= self.total_rows {
			return None;
		}

		let start = self.current_row * self.width;
		let end = start + self.width;
		self.current_row += 1;

		Some(&self.pixels[start..end])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.total_rows - self.current_row;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RowIterator<'_> {
	fn len(&self) -> usize {
		self.total_rows - self.current_row
	}
}
