use embedded_graphics::{
	draw_target::DrawTarget,
	geometry::{Dimensions, Point, Size},
	pixelcolor::Rgb565,
	primitives::{PointsIter, Rectangle},
	Pixel,
};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::{
	commands::Command,
	error::{check_max, check_order, Error, Result},
	interface::Interface,
	pixel::{PixelEncoder, PixelFormat},
	system::address_pair,
};

/// Widest supported panel.
pub const MAX_COLUMN: u16 = 240;

/// Tallest supported panel.
pub const MAX_ROW: u16 = 320;

/// Pixels encoded at a time before going through the line buffer.
const ENCODE_CHUNK: usize = 256;

impl<I: Interface> crate::Driver<I> {
	/// Set the active panel width.
	#[instrument(level = "debug", skip(self))]
	pub fn set_column(&mut self, column: u16) -> Result<()> {
		self.ensure_init()?;
		if column == 0 || column > MAX_COLUMN {
			return Err(Error::PanelSize {
				what: "column",
				value: column,
				max: MAX_COLUMN,
			});
		}

		self.column = column;
		Ok(())
	}

	/// Set the active panel height.
	#[instrument(level = "debug", skip(self))]
	pub fn set_row(&mut self, row: u16) -> Result<()> {
		self.ensure_init()?;
		if row == 0 || row > MAX_ROW {
			return Err(Error::PanelSize {
				what: "row",
				value: row,
				max: MAX_ROW,
			});
		}

		self.row = row;
		Ok(())
	}

	/// Set the area of the screen to draw to, both corners inclusive.
	///
	/// Unlike [`set_column_address`](Self::set_column_address), a one pixel wide window is fine.
	#[instrument(level = "trace", skip(self))]
	pub(crate) fn set_window(&mut self, start: (u16, u16), end: (u16, u16)) -> Result<()> {
		self.command(Command::ColumnAddressSet)?;
		self.data(&address_pair(start.0, end.0))?;
		self.command(Command::RowAddressSet)?;
		self.data(&address_pair(start.1, end.1))?;
		Ok(())
	}

	/// Encode raw colours and stream them out through the line buffer.
	#[instrument(level = "trace", skip(self, colours))]
	pub(crate) fn stream_pixels(
		&mut self,
		format: PixelFormat,
		colours: impl IntoIterator<Item = u32>,
	) -> Result<()> {
		let mut encoder = PixelEncoder::new(format);
		let mut scratch = Vec::with_capacity(format.bytes_for(ENCODE_CHUNK));

		self.clear_buffer();
		for chunk in &colours.into_iter().chunks(ENCODE_CHUNK) {
			scratch.clear();
			for colour in chunk {
				encoder.push(colour, &mut scratch);
			}
			self.write_data_buffered(&scratch)?;
		}

		scratch.clear();
		encoder.finish(&mut scratch);
		self.write_data_buffered(&scratch)?;
		self.flush_buffer()
	}

	/// Write a run of colours to a window of the frame memory.
	fn fill_window(
		&mut self,
		format: PixelFormat,
		start: (u16, u16),
		end: (u16, u16),
		colours: impl IntoIterator<Item = u32>,
	) -> Result<()> {
		self.set_window(start, end)?;
		self.command(Command::MemoryWrite)?;
		self.stream_pixels(format, colours)
	}

	/// Check a rectangle fits on the panel and isn't degenerate.
	fn check_rect(&self, left: u16, top: u16, right: u16, bottom: u16) -> Result<usize> {
		check_max("left", left, self.column - 1)?;
		check_max("right", right, self.column - 1)?;
		check_order("left/right", left, right)?;
		check_max("top", top, self.row - 1)?;
		check_max("bottom", bottom, self.row - 1)?;
		check_order("top/bottom", top, bottom)?;
		Ok(usize::from(right - left + 1) * usize::from(bottom - top + 1))
	}

	/// Blank the whole active panel.
	#[instrument(level = "debug", skip(self))]
	pub fn clear(&mut self) -> Result<()> {
		self.ensure_init()?;
		let format = self.ensure_format()?;
		let pixels = usize::from(self.column) * usize::from(self.row);
		debug!(pixels, bytes = format.bytes_for(pixels), "clearing");
		self.fill_window(
			format,
			(0, 0),
			(self.column - 1, self.row - 1),
			std::iter::repeat(0).take(pixels),
		)
	}

	/// Fill a rectangle, corners inclusive, with a raw colour in the current pixel format.
	#[instrument(level = "trace", skip(self))]
	pub fn fill_rect(&mut self, left: u16, top: u16, right: u16, bottom: u16, colour: u32) -> Result<()> {
		self.ensure_init()?;
		let pixels = self.check_rect(left, top, right, bottom)?;
		let format = self.ensure_format()?;
		self.fill_window(
			format,
			(left, top),
			(right, bottom),
			std::iter::repeat(colour).take(pixels),
		)
	}

	/// Draw one pixel in a raw colour in the current pixel format.
	#[instrument(level = "trace", skip(self))]
	pub fn draw_point(&mut self, x: u16, y: u16, colour: u32) -> Result<()> {
		self.ensure_init()?;
		check_max("x", x, self.column - 1)?;
		check_max("y", y, self.row - 1)?;
		let format = self.ensure_format()?;
		self.fill_window(format, (x, y), (x, y), std::iter::once(colour))
	}

	fn draw_picture<T: Copy + Into<u32>>(
		&mut self,
		expected: PixelFormat,
		(left, top, right, bottom): (u16, u16, u16, u16),
		image: &[T],
	) -> Result<()> {
		self.ensure_init()?;
		let pixels = self.check_rect(left, top, right, bottom)?;
		let actual = self.ensure_format()?;
		if actual != expected {
			return Err(Error::WrongPixelFormat { expected, actual });
		}
		if image.len() != pixels {
			return Err(Error::Length {
				what: "image",
				expected: pixels,
				actual: image.len(),
			});
		}

		// pictures are stored column by column, the panel fills row by row
		let width = usize::from(right - left + 1);
		let height = usize::from(bottom - top + 1);
		self.fill_window(
			actual,
			(left, top),
			(right, bottom),
			(0..height)
				.cartesian_product(0..width)
				.map(|(y, x)| image[x * height + y].into()),
		)
	}

	/// Draw a column-major picture of `0x0RGB` pixels, corners inclusive.
	#[instrument(level = "trace", skip(self, image))]
	pub fn draw_picture_12bits(
		&mut self,
		left: u16,
		top: u16,
		right: u16,
		bottom: u16,
		image: &[u16],
	) -> Result<()> {
		self.draw_picture(PixelFormat::Bits12, (left, top, right, bottom), image)
	}

	/// Draw a column-major picture of RGB565 pixels, corners inclusive.
	#[instrument(level = "trace", skip(self, image))]
	pub fn draw_picture_16bits(
		&mut self,
		left: u16,
		top: u16,
		right: u16,
		bottom: u16,
		image: &[u16],
	) -> Result<()> {
		self.draw_picture(PixelFormat::Bits16, (left, top, right, bottom), image)
	}

	/// Draw a column-major picture of `R << 12 | G << 6 | B` pixels, corners inclusive.
	///
	/// Pixel `(x, y)` of the rectangle is `image[x * height + y]`.
	#[instrument(level = "trace", skip(self, image))]
	pub fn draw_picture_18bits(
		&mut self,
		left: u16,
		top: u16,
		right: u16,
		bottom: u16,
		image: &[u32],
	) -> Result<()> {
		self.draw_picture(PixelFormat::Bits18, (left, top, right, bottom), image)
	}

	/// The part of an area that's on the panel, as inclusive corners.
	fn clip(&self, area: &Rectangle) -> Option<((u16, u16), (u16, u16))> {
		let visible = area.intersection(&self.bounding_box());
		let bottom_right = visible.bottom_right()?;
		Some((
			(
				u16::try_from(visible.top_left.x).ok()?,
				u16::try_from(visible.top_left.y).ok()?,
			),
			(
				u16::try_from(bottom_right.x).ok()?,
				u16::try_from(bottom_right.y).ok()?,
			),
		))
	}
}

impl<I: Interface> Dimensions for crate::Driver<I> {
	fn bounding_box(&self) -> Rectangle {
		Rectangle::new(
			Point::new(0, 0),
			Size::new(self.column.into(), self.row.into()),
		)
	}
}

impl<I: Interface> DrawTarget for crate::Driver<I> {
	type Color = Rgb565;
	type Error = Error;

	fn draw_iter<P>(&mut self, pixels: P) -> std::result::Result<(), Self::Error>
	where
		P: IntoIterator<Item = Pixel<Self::Color>>,
	{
		self.ensure_init()?;
		let format = self.ensure_format()?;
		for Pixel(coord, color) in pixels.into_iter() {
			let Ok(x) = u16::try_from(coord.x) else {
				continue;
			};
			let Ok(y) = u16::try_from(coord.y) else {
				continue;
			};

			if x >= self.column || y >= self.row {
				continue;
			}

			self.draw_point(x, y, format.raw_colour(color))?;
		}

		Ok(())
	}

	#[instrument(level = "trace", skip(self, colors))]
	fn fill_contiguous<C>(&mut self, area: &Rectangle, colors: C) -> std::result::Result<(), Self::Error>
	where
		C: IntoIterator<Item = Self::Color>,
	{
		if area.intersection(&self.bounding_box()) != *area {
			return self.draw_iter(
				area.points()
					.zip(colors)
					.map(|(point, color)| Pixel(point, color)),
			);
		}

		let Some((start, end)) = self.clip(area) else {
			return Ok(());
		};

		self.ensure_init()?;
		let format = self.ensure_format()?;
		let pixels = area.size.width as usize * area.size.height as usize;
		self.fill_window(
			format,
			start,
			end,
			colors
				.into_iter()
				.take(pixels)
				.map(|c| format.raw_colour(c)),
		)
	}

	#[instrument(level = "trace", skip(self))]
	fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> std::result::Result<(), Self::Error> {
		let Some((start, end)) = self.clip(area) else {
			return Ok(());
		};

		self.ensure_init()?;
		let format = self.ensure_format()?;
		let pixels = usize::from(end.0 - start.0 + 1) * usize::from(end.1 - start.1 + 1);
		self.fill_window(
			format,
			start,
			end,
			std::iter::repeat(format.raw_colour(color)).take(pixels),
		)
	}
}
