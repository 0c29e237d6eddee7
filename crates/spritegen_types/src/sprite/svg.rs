//! Deterministic SVG rendering for sprites.
//!
//! All entry points funnel into [`Sprite::svg_exact`], which emits one
//! `<rect>` per grid cell in a fixed traversal order, so identical inputs
//! always produce byte-identical markup. The sizing variants only differ in
//! how the output width and height are derived before delegating.

use super::Sprite;

impl Sprite {
	/// Renders the sprite as an SVG document with exact output dimensions.
	///
	/// The root `<svg>` element carries `width` and `height` with the given
	/// `unit` suffix, and a `viewBox` spanning the grid in cell units
	/// (`"0, 0, {width}, {height}"`). One 1×1 `<rect>` is emitted per grid
	/// cell at `(x, y)`, filled with the cell's CSS color string; the
	/// traversal runs all `y` for `x = 0`, then all `y` for `x = 1`, and so
	/// on.
	///
	/// # Arguments
	///
	/// * `width` - Output width, in `unit`s
	/// * `height` - Output height, in `unit`s
	/// * `unit` - Suffix appended to the width/height attributes, e.g.
	///   `"px"` or `""`
	/// * `attrs` - Extra attributes copied verbatim into the `<svg>` tag
	pub fn svg_exact(&self, width: u32, height: u32, unit: &str, attrs: Option<&str>) -> String {
		let dim = self.dim();

		// ~56 bytes per rect plus the envelope
		let mut output = String::with_capacity(128 + self.pixel_count() * 56);

		output.push_str(&format!(
			"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}{unit}\" height=\"{height}{unit}\" viewBox=\"0, 0, {}, {}\"",
			dim.width, dim.height
		));
		if let Some(attrs) = attrs {
			output.push(' ');
			output.push_str(attrs);
		}
		output.push('>');

		for x in 0..dim.width {
			for y in 0..dim.height {
				// In bounds by loop construction
				let fill = self.pixels[self.index_of(x, y)].to_css();
				output.push_str(&format!(
					"<rect x=\"{x}\" y=\"{y}\" width=\"1\" height=\"1\" fill=\"{fill}\"/>"
				));
			}
		}

		output.push_str("</svg>");
		output
	}

	/// Renders the sprite at the requested width, deriving the height from
	/// the grid's aspect ratio.
	///
	/// The width is rounded up to a multiple of the grid width with
	/// `width + grid_width - (width % grid_width)`; when `width` is already
	/// an exact multiple the result still moves up a full step. Callers
	/// that need an exact size use [`Sprite::svg_exact`] or
	/// [`Sprite::svg_scale`].
	pub fn svg_with_width(&self, width: u32, unit: &str, attrs: Option<&str>) -> String {
		let dim = self.dim();
		let rounded = Self::round_to_grid(width, dim.width);
		let height = rounded / dim.width * dim.height;
		self.svg_exact(rounded, height, unit, attrs)
	}

	/// Renders the sprite at the requested height, deriving the width from
	/// the grid's aspect ratio.
	///
	/// Rounds the height the same way [`Sprite::svg_with_width`] rounds the
	/// width.
	pub fn svg_with_height(&self, height: u32, unit: &str, attrs: Option<&str>) -> String {
		let dim = self.dim();
		let rounded = Self::round_to_grid(height, dim.height);
		let width = rounded / dim.height * dim.width;
		self.svg_exact(width, rounded, unit, attrs)
	}

	/// Renders the sprite at the requested output size, rounding width and
	/// height independently to multiples of the grid width and height.
	///
	/// Because the two axes round independently, the output does not
	/// preserve the grid's aspect ratio in general.
	pub fn svg(&self, width: u32, height: u32, unit: &str, attrs: Option<&str>) -> String {
		let dim = self.dim();
		let width = Self::round_to_grid(width, dim.width);
		let height = Self::round_to_grid(height, dim.height);
		self.svg_exact(width, height, unit, attrs)
	}

	/// Renders the sprite with every grid cell `pixel_size` output units
	/// across.
	///
	/// Output width and height are exact multiples of the grid dimensions
	/// by construction, so no rounding applies.
	pub fn svg_scale(&self, pixel_size: u32, unit: &str, attrs: Option<&str>) -> String {
		let dim = self.dim();
		self.svg_exact(dim.width * pixel_size, dim.height * pixel_size, unit, attrs)
	}

	/// Rounds `size` up to a multiple of `step`. When `size` is already an
	/// exact multiple the result is `size + step`, one full step higher.
	#[inline]
	fn round_to_grid(size: u32, step: u32) -> u32 {
		size + step - (size % step)
	}
}
