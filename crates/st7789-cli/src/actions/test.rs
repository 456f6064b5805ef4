use miette::Result;
use rand::Rng;
use st7789_driver::{Driver, Font, Interface, PanelConfig, MAX_COLUMN, MAX_ROW};
use tracing::info;

use super::Backlight;

const STRINGS: [(&str, u32); 4] = [
	("Test", 0xF800),
	("st7789", 0x07E0),
	("ABCabc", 0x003F),
	("123?!#$%", 0xFFFF),
];

/// Laid out for a 240x320 panel, scaled to the active one.
const RECTS: [(u16, u16, u16, u16, u32); 3] = [
	(0, 0, 100, 100, 0xF800),
	(0, 150, 100, 200, 0x003F),
	(0, 280, 200, 310, 0x08E0),
];

const PAUSE_MS: u32 = 1000;

/// Exercise the whole panel, pausing after each stage.
pub fn display<I: Interface + Backlight>(lcd: &mut Driver<I>, config: &PanelConfig) -> Result<()> {
	super::info::info(false)?;

	println!("st7789: start display test.");
	lcd.basic_init(config)?;
	lcd.interface_mut().backlight(true);

	for font in [Font::Font12, Font::Font16, Font::Font24] {
		println!("st7789: font {} test.", font.height());
		for ((text, colour), y) in STRINGS.into_iter().zip([0, 50, 100, 150]) {
			lcd.write_string(0, scale(y, lcd.row(), MAX_ROW), text, colour, font)?;
		}
		pause(lcd)?;
	}

	println!("st7789: rectangle test.");
	for (left, top, right, bottom, colour) in RECTS {
		let (left, right) = (
			scale(left, lcd.column(), MAX_COLUMN),
			scale(right, lcd.column(), MAX_COLUMN),
		);
		let (top, bottom) = (scale(top, lcd.row(), MAX_ROW), scale(bottom, lcd.row(), MAX_ROW));
		if left < right && top < bottom {
			lcd.fill_rect(left, top, right, bottom, colour)?;
		}
	}
	pause(lcd)?;

	println!("st7789: rand point test.");
	let mut rng = rand::rng();
	for x in 0..lcd.column() {
		for y in 0..lcd.row() {
			if rng.random_bool(0.5) {
				lcd.draw_point(x, y, 0xFFFF)?;
			}
		}
	}
	pause(lcd)?;

	println!("st7789: picture test.");
	let (width, height) = (lcd.column(), lcd.row());
	let picture = test_picture(width, height);
	lcd.draw_picture_16bits(0, 0, width - 1, height - 1, &picture)?;
	pause(lcd)?;

	println!("st7789: finish display test.");
	lcd.deinit()?;
	lcd.interface_mut().backlight(false);
	Ok(())
}

/// Map a coordinate on a full-size panel to one `size` pixels wide.
fn scale(at: u16, size: u16, full: u16) -> u16 {
	(u32::from(at) * u32::from(size) / u32::from(full)) as u16
}

fn pause<I: Interface>(lcd: &mut Driver<I>) -> Result<()> {
	lcd.interface_mut().delay_ms(PAUSE_MS);
	lcd.clear()?;
	Ok(())
}

/// RGB565 bands: red across, green down, blue on the diagonal.
///
/// Column-major, like [`Driver::draw_picture_16bits`] expects.
fn test_picture(width: u16, height: u16) -> Vec<u16> {
	info!(width, height, "generating test picture");
	let (w, h) = (u32::from(width.max(2) - 1), u32::from(height.max(2) - 1));
	(0..u32::from(width))
		.flat_map(|x| (0..u32::from(height)).map(move |y| (x, y)))
		.map(|(x, y)| {
			let red = x * 0x1F / w;
			let green = y * 0x3F / h;
			let blue = (x + y) * 0x1F / (w + h);
			(red << 11 | green << 5 | blue) as u16
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::mock::Mock;

	#[test]
	fn picture_corners() {
		let picture = test_picture(240, 320);
		assert_eq!(picture.len(), 240 * 320);
		assert_eq!(picture[0], 0);
		// top right corner
		assert_eq!(picture[239 * 320], 0x1F << 11 | (0x1F * 239 / 558));
		// bottom left corner
		assert_eq!(picture[319], 0x3F << 5 | (0x1F * 319 / 558));
		assert_eq!(picture[picture.len() - 1], 0xFFFF);
	}

	#[test]
	fn full_run() {
		let mut lcd = Driver::new(Mock::default());
		display(&mut lcd, &PanelConfig::default()).unwrap();
		assert!(!lcd.is_initialised());

		let mock = lcd.release();
		assert_eq!(mock.resets, 1);
		assert!(!mock.backlight);
		assert_eq!(mock.commands.last(), Some(&0x10));
		assert!(mock.slept_ms >= 6 * u64::from(PAUSE_MS));
	}

	#[test]
	fn smaller_panel() {
		assert_eq!(scale(310, 160, MAX_ROW), 155);
		assert_eq!(scale(200, 120, MAX_COLUMN), 100);

		let mut lcd = Driver::new(Mock::default());
		let config = PanelConfig {
			column: 120,
			row: 160,
			..Default::default()
		};
		display(&mut lcd, &config).unwrap();
		assert_eq!(lcd.release().commands.last(), Some(&0x10));
	}
}
