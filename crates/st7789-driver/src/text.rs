use std::convert::Infallible;

use embedded_graphics::{
	draw_target::DrawTarget,
	geometry::{OriginDimensions, Point, Size},
	mono_font::{
		ascii::{FONT_10X20, FONT_6X12, FONT_8X13},
		MonoFont, MonoTextStyle,
	},
	pixelcolor::BinaryColor,
	text::{Baseline, Text},
	Drawable, Pixel,
};
use tracing::{instrument, trace};

use crate::{error::Result, interface::Interface};

/// Text size, by nominal pixel height.
///
/// Each character takes a cell half as wide as it is tall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case")
)]
#[repr(u8)]
pub enum Font {
	Font12 = 12,
	#[default]
	Font16 = 16,
	Font24 = 24,
}

impl Font {
	/// Cell height in pixels.
	pub fn height(self) -> u16 {
		self as u16
	}

	/// Cell width in pixels.
	pub fn width(self) -> u16 {
		self.height() / 2
	}

	fn mono(self) -> &'static MonoFont<'static> {
		match self {
			Self::Font12 => &FONT_6X12,
			Self::Font16 => &FONT_8X13,
			Self::Font24 => &FONT_10X20,
		}
	}

	/// Where to put the glyph so it sits centred in its cell.
	fn inset(self) -> Point {
		let size = self.mono().character_size;
		Point::new(
			(i32::from(self.width()) - size.width as i32) / 2,
			(i32::from(self.height()) - size.height as i32) / 2,
		)
	}
}

/// Collects the lit pixels of one glyph.
struct GlyphCanvas {
	size: Size,
	lit: Vec<Point>,
}

impl OriginDimensions for GlyphCanvas {
	fn size(&self) -> Size {
		self.size
	}
}

impl DrawTarget for GlyphCanvas {
	type Color = BinaryColor;
	type Error = Infallible;

	fn draw_iter<P>(&mut self, pixels: P) -> std::result::Result<(), Self::Error>
	where
		P: IntoIterator<Item = Pixel<Self::Color>>,
	{
		self.lit.extend(
			pixels
				.into_iter()
				.filter(|Pixel(_, colour)| colour.is_on())
				.map(|Pixel(point, _)| point),
		);
		Ok(())
	}
}

impl<I: Interface> crate::Driver<I> {
	/// Write a string, in a raw colour in the current pixel format.
	///
	/// Printable ASCII is drawn, and rendering stops at the first other character. Text wraps
	/// to the next line at the right edge, and restarts at the top left corner at the bottom
	/// edge. Only the glyph pixels are drawn; the background is left as is.
	#[instrument(level = "debug", skip(self))]
	pub fn write_string(&mut self, x: u16, y: u16, text: &str, colour: u32, font: Font) -> Result<()> {
		self.ensure_init()?;
		crate::error::check_max("x", x, self.column - 1)?;
		crate::error::check_max("y", y, self.row - 1)?;

		let (mut x, mut y) = (x, y);
		let mut canvas = GlyphCanvas {
			size: Size::new(font.width().into(), font.height().into()),
			lit: Vec::new(),
		};
		let style = MonoTextStyle::new(font.mono(), BinaryColor::On);
		let mut buf = [0; 4];

		for c in text.chars() {
			if !(' '..='~').contains(&c) {
				trace!(?c, "stopping at unprintable character");
				break;
			}

			if x >= self.column.saturating_sub(font.width()) {
				x = 0;
				y = y.saturating_add(font.height());
			}
			if y >= self.row.saturating_sub(font.height()) {
				x = 0;
				y = 0;
			}

			canvas.lit.clear();
			// infallible
			let _ = Text::with_baseline(c.encode_utf8(&mut buf), font.inset(), style, Baseline::Top)
				.draw(&mut canvas);

			for point in std::mem::take(&mut canvas.lit) {
				let (Ok(px), Ok(py)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
					continue;
				};
				let (px, py) = (x + px, y + py);
				if px < self.column && py < self.row {
					self.draw_point(px, py, colour)?;
				}
			}

			x += font.width();
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cells() {
		assert_eq!(Font::Font12.width(), 6);
		assert_eq!(Font::Font16.width(), 8);
		assert_eq!(Font::Font24.width(), 12);
		assert_eq!(Font::Font24.height(), 24);
	}

	#[test]
	fn glyphs_fit_their_cells() {
		for font in [Font::Font12, Font::Font16, Font::Font24] {
			let size = font.mono().character_size;
			assert!(size.width <= font.width().into());
			assert!(size.height <= font.height().into());
			let inset = font.inset();
			assert!(inset.x >= 0 && inset.y >= 0);
		}
	}

	#[test]
	fn canvas_keeps_lit_pixels() {
		let mut canvas = GlyphCanvas {
			size: Size::new(8, 16),
			lit: Vec::new(),
		};
		let style = MonoTextStyle::new(Font::Font16.mono(), BinaryColor::On);
		Text::with_baseline("A", Point::zero(), style, Baseline::Top)
			.draw(&mut canvas)
			.unwrap();
		assert!(!canvas.lit.is_empty());

		canvas.lit.clear();
		Text::with_baseline(" ", Point::zero(), style, Baseline::Top)
			.draw(&mut canvas)
			.unwrap();
		assert!(canvas.lit.is_empty());
	}
}
