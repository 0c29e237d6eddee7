//! Sprite construction.
//!
//! [`SpriteBuilder`] is the sanctioned construction path for sprites: it
//! collects the dimension, an optional initial grid, the generation
//! palette, and the symmetry flag, validates everything, and produces the
//! [`Sprite`]. The entity's own constructor stays crate-internal so every
//! live sprite went through this validation.

use super::{Color, Dimension, Palette, Sprite, SpriteError, validate};

/// Builder assembling the parts of a [`Sprite`].
///
/// # Examples
///
/// ```
/// use spritegen_types::sprite::{Color, SpriteBuilder};
///
/// # fn main() -> Result<(), spritegen_types::sprite::SpriteError> {
/// let sprite = SpriteBuilder::new(2, 2)
/// 	.grid(vec![
/// 		Color::rgb(255, 0, 0),
/// 		Color::rgb(0, 255, 0),
/// 		Color::rgb(0, 0, 255),
/// 		Color::rgb(255, 255, 255),
/// 	])
/// 	.palette(vec![Color::rgb(255, 0, 0)])
/// 	.horizontal_symmetry(true)
/// 	.build()?;
///
/// assert!(sprite.horizontal_symmetry());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpriteBuilder {
	width: u32,
	height: u32,
	grid: Option<Vec<Color>>,
	palette: Vec<Color>,
	horizontal_symmetry: bool,
	fill: Option<Color>,
}

impl SpriteBuilder {
	/// Creates a builder for a sprite of the given dimensions.
	///
	/// Dimensions are validated at [`SpriteBuilder::build`] time, not here.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	/// Supplies the initial pixel grid, in row-major order.
	///
	/// The grid length must equal `width × height` exactly; `build` fails
	/// otherwise. When no grid is supplied, the sprite is filled with the
	/// fill color instead.
	#[must_use]
	pub fn grid(mut self, grid: Vec<Color>) -> Self {
		self.grid = Some(grid);
		self
	}

	/// Records the colors the sprite is generated from.
	///
	/// Opaque pure-black entries are filtered out at build time; the
	/// palette is bookkeeping only and is never checked against the grid.
	#[must_use]
	pub fn palette(mut self, colors: Vec<Color>) -> Self {
		self.palette = colors;
		self
	}

	/// Records whether the grid was generated with left-right mirroring.
	///
	/// Defaults to `false`.
	#[must_use]
	pub fn horizontal_symmetry(mut self, flag: bool) -> Self {
		self.horizontal_symmetry = flag;
		self
	}

	/// Sets the fill color used when no initial grid is supplied.
	///
	/// Defaults to opaque black.
	#[must_use]
	pub fn fill(mut self, color: Color) -> Self {
		self.fill = Some(color);
		self
	}

	/// Validates the collected parts and builds the sprite.
	///
	/// # Errors
	///
	/// - [`SpriteError::Validation`] when a dimension component is zero,
	///   naming the offending field.
	/// - [`SpriteError::DimensionMismatch`] when a supplied grid's length
	///   does not equal `width × height`.
	pub fn build(self) -> Result<Sprite, SpriteError> {
		let width = validate::ensure_positive(self.width, "width")?;
		let height = validate::ensure_positive(self.height, "height")?;
		let dim = Dimension::new(width, height);

		let pixels = match self.grid {
			Some(grid) => {
				if grid.len() != dim.pixel_count() {
					return Err(SpriteError::DimensionMismatch {
						expected: dim.pixel_count(),
						actual: grid.len(),
					});
				}
				grid
			}
			None => vec![self.fill.unwrap_or(Color::BLACK); dim.pixel_count()],
		};

		Ok(Sprite::new(dim, pixels, Palette::new(self.palette), self.horizontal_symmetry))
	}
}
