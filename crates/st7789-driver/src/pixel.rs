use std::fmt;

use embedded_graphics::pixelcolor::{
	raw::{RawData, RawU16},
	Rgb565,
};

/// Colour format of the control (MCU) interface, set with COLMOD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case")
)]
#[repr(u8)]
pub enum PixelFormat {
	/// RGB444, two pixels in three bytes.
	Bits12 = 0x3,
	/// RGB565, two bytes per pixel.
	#[default]
	Bits16 = 0x5,
	/// RGB666, three bytes per pixel.
	Bits18 = 0x6,
}

/// Colour format of the RGB interface, set with COLMOD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case")
)]
#[repr(u8)]
pub enum RgbFormat {
	Rgb65k = 0x5,
	#[default]
	Rgb262k = 0x6,
}

impl fmt::Display for PixelFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Bits12 => "12-bit",
			Self::Bits16 => "16-bit",
			Self::Bits18 => "18-bit",
		})
	}
}

impl PixelFormat {
	/// How many bytes a run of pixels takes on the wire.
	pub fn bytes_for(self, pixels: usize) -> usize {
		match self {
			Self::Bits12 => (pixels * 3).div_ceil(2),
			Self::Bits16 => pixels * 2,
			Self::Bits18 => pixels * 3,
		}
	}

	/// Convert an [`Rgb565`] colour to the raw value this format expects.
	///
	/// 12-bit colours are `0x0RGB`, 16-bit are RGB565, 18-bit are `R << 12 | G << 6 | B`.
	pub fn raw_colour(self, colour: Rgb565) -> u32 {
		let raw = RawU16::from(colour).into_inner();
		let (r, g, b) = (
			u32::from(raw >> 11) & 0x1F,
			u32::from(raw >> 5) & 0x3F,
			u32::from(raw) & 0x1F,
		);
		match self {
			Self::Bits12 => (r >> 1) << 8 | (g >> 2) << 4 | (b >> 1),
			Self::Bits16 => u32::from(raw),
			Self::Bits18 => (r << 1 | r >> 4) << 12 | g << 6 | (b << 1 | b >> 4),
		}
	}
}

/// Turns raw colour values into wire bytes for one pixel format.
///
/// 12-bit pixels are packed in pairs, so a trailing odd pixel is only emitted by
/// [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub(crate) struct PixelEncoder {
	format: PixelFormat,
	pending: Option<u16>,
}

impl PixelEncoder {
	pub(crate) fn new(format: PixelFormat) -> Self {
		Self {
			format,
			pending: None,
		}
	}

	/// Encode a pixel, appending zero to three bytes to `out`.
	pub(crate) fn push(&mut self, colour: u32, out: &mut Vec<u8>) {
		match self.format {
			PixelFormat::Bits12 => {
				let c = (colour & 0x0FFF) as u16;
				match self.pending.take() {
					None => self.pending = Some(c),
					Some(first) => out.extend_from_slice(&[
						(first >> 4) as u8,
						((first & 0xF) << 4 | (c >> 8)) as u8,
						c as u8,
					]),
				}
			}
			PixelFormat::Bits16 => out.extend_from_slice(&(colour as u16).to_be_bytes()),
			PixelFormat::Bits18 => out.extend_from_slice(&[
				(((colour >> 12) & 0x3F) << 2) as u8,
				(((colour >> 6) & 0x3F) << 2) as u8,
				((colour & 0x3F) << 2) as u8,
			]),
		}
	}

	/// Emit any pixel still held back.
	pub(crate) fn finish(&mut self, out: &mut Vec<u8>) {
		if let Some(last) = self.pending.take() {
			out.extend_from_slice(&[(last >> 4) as u8, ((last & 0xF) << 4) as u8]);
		}
	}
}

#[cfg(test)]
mod tests {
	use embedded_graphics::prelude::RgbColor;

	use super::*;

	fn encode(format: PixelFormat, colours: &[u32]) -> Vec<u8> {
		let mut encoder = PixelEncoder::new(format);
		let mut out = Vec::new();
		for c in colours {
			encoder.push(*c, &mut out);
		}
		encoder.finish(&mut out);
		out
	}

	#[test]
	fn twelve_bit_packing() {
		assert_eq!(
			encode(PixelFormat::Bits12, &[0xABC, 0xDEF]),
			vec![0xAB, 0xCD, 0xEF]
		);
		assert_eq!(
			encode(PixelFormat::Bits12, &[0xABC, 0xDEF, 0x123]),
			vec![0xAB, 0xCD, 0xEF, 0x12, 0x30]
		);
	}

	#[test]
	fn sixteen_bit_is_big_endian() {
		assert_eq!(encode(PixelFormat::Bits16, &[0xF800]), vec![0xF8, 0x00]);
	}

	#[test]
	fn eighteen_bit_shifts_channels() {
		assert_eq!(
			encode(PixelFormat::Bits18, &[0x3F << 12 | 0x01 << 6 | 0x20]),
			vec![0xFC, 0x04, 0x80]
		);
	}

	#[test]
	fn byte_counts() {
		assert_eq!(PixelFormat::Bits12.bytes_for(3), 5);
		assert_eq!(PixelFormat::Bits12.bytes_for(4), 6);
		assert_eq!(PixelFormat::Bits16.bytes_for(3), 6);
		assert_eq!(PixelFormat::Bits18.bytes_for(3), 9);
	}

	#[test]
	fn colour_conversion() {
		assert_eq!(PixelFormat::Bits16.raw_colour(Rgb565::RED), 0xF800);
		assert_eq!(PixelFormat::Bits12.raw_colour(Rgb565::WHITE), 0xFFF);
		assert_eq!(PixelFormat::Bits18.raw_colour(Rgb565::WHITE), 0x3FFFF);
		assert_eq!(PixelFormat::Bits18.raw_colour(Rgb565::GREEN), 0x3F << 6);
		assert_eq!(PixelFormat::Bits12.raw_colour(Rgb565::BLUE), 0x00F);
	}
}
