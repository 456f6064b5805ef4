use embedded_graphics::{
	draw_target::DrawTarget,
	geometry::{Point, Size},
	pixelcolor::Rgb565,
	prelude::RgbColor,
	primitives::Rectangle,
	Pixel,
};
use st7789_driver::*;

mod common;
use common::{commands, data_after, data_lengths, fresh, ready, ready_in, window_starts, Event, Recorder};

#[test]
fn clear_streams_through_the_line_buffer() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.clear().unwrap();
	let events = log.take();

	assert_eq!(
		&events[..5],
		&[
			Event::Command(0x2A),
			Event::Data(vec![0, 0, 0, 0xEF]),
			Event::Command(0x2B),
			Event::Data(vec![0, 0, 0x01, 0x3F]),
			Event::Command(0x2C),
		]
	);

	let writes = data_lengths(&events[5..]);
	assert_eq!(writes.len(), 38);
	assert!(writes[..37].iter().all(|&n| n == DEFAULT_BUFFER_LENGTH));
	assert_eq!(writes[37], 2048);
}

#[test]
fn clear_byte_counts_per_format() {
	for (format, bytes) in [
		(PixelFormat::Bits12, 14),
		(PixelFormat::Bits16, 18),
		(PixelFormat::Bits18, 27),
	] {
		let (mut lcd, log) = ready_in(format);
		lcd.set_column(3).unwrap();
		lcd.set_row(3).unwrap();
		lcd.clear().unwrap();
		let events = log.take();
		assert_eq!(data_after(&events, 0x2A), vec![vec![0, 0, 0, 2]]);
		assert_eq!(data_after(&events, 0x2C)[0].len(), bytes, "{format}");
	}
}

#[test]
fn clear_needs_a_pixel_format() {
	let (mut lcd, log) = ready();
	assert!(matches!(lcd.clear(), Err(Error::NoPixelFormat)));
	assert!(log.take().is_empty());
}

#[test]
fn smaller_line_buffer() {
	let log = Recorder::default();
	let mut lcd = Driver::with_buffer_length(log.clone(), 100);
	lcd.init().unwrap();
	lcd.set_interface_pixel_format(RgbFormat::Rgb65k, PixelFormat::Bits16)
		.unwrap();
	lcd.set_column(10).unwrap();
	lcd.set_row(10).unwrap();
	log.take();

	lcd.clear().unwrap();
	let events = log.take();
	assert_eq!(data_lengths(&events[5..]), vec![100, 100]);
}

#[test]
fn fill_rect_in_each_format() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.fill_rect(10, 20, 11, 21, 0xF800).unwrap();
	let events = log.take();
	assert_eq!(data_after(&events, 0x2A), vec![vec![0, 10, 0, 11]]);
	assert_eq!(data_after(&events, 0x2B), vec![vec![0, 20, 0, 21]]);
	assert_eq!(data_after(&events, 0x2C), vec![[0xF8, 0x00].repeat(4)]);

	let (mut lcd, log) = ready_in(PixelFormat::Bits12);
	lcd.fill_rect(0, 0, 2, 1, 0xABC).unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![[0xAB, 0xCA, 0xBC].repeat(3)]
	);

	let (mut lcd, log) = ready_in(PixelFormat::Bits18);
	lcd.fill_rect(0, 0, 1, 1, 0x3F << 12 | 0x20).unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![[0xFC, 0x00, 0x80].repeat(4)]
	);
}

#[test]
fn rectangle_checks_in_order() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	assert!(matches!(
		lcd.fill_rect(240, 400, 0, 0, 0),
		Err(Error::OutOfRange { what: "left", .. })
	));
	assert!(matches!(
		lcd.fill_rect(0, 400, 240, 0, 0),
		Err(Error::OutOfRange { what: "right", .. })
	));
	assert!(matches!(
		lcd.fill_rect(5, 400, 5, 0, 0),
		Err(Error::InvalidRange { what: "left/right", .. })
	));
	assert!(matches!(
		lcd.fill_rect(0, 320, 1, 0, 0),
		Err(Error::OutOfRange { what: "top", .. })
	));
	assert!(matches!(
		lcd.fill_rect(0, 0, 1, 320, 0),
		Err(Error::OutOfRange { what: "bottom", .. })
	));
	assert!(matches!(
		lcd.fill_rect(0, 7, 1, 3, 0),
		Err(Error::InvalidRange { what: "top/bottom", .. })
	));
	assert!(log.take().is_empty());
}

#[test]
fn points() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits12);
	lcd.draw_point(3, 4, 0xABC).unwrap();
	assert_eq!(
		log.take(),
		vec![
			Event::Command(0x2A),
			Event::Data(vec![0, 3, 0, 3]),
			Event::Command(0x2B),
			Event::Data(vec![0, 4, 0, 4]),
			Event::Command(0x2C),
			Event::Data(vec![0xAB, 0xC0]),
		]
	);

	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.draw_point(239, 319, 0x07E0).unwrap();
	assert_eq!(data_after(&log.take(), 0x2C), vec![vec![0x07, 0xE0]]);
	assert!(lcd.draw_point(240, 0, 0).is_err());
	assert!(lcd.draw_point(0, 320, 0).is_err());
}

#[test]
fn pictures() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.draw_picture_16bits(0, 0, 1, 1, &[0x0001, 0x0203, 0x0405, 0x0607])
		.unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![vec![0, 1, 4, 5, 2, 3, 6, 7]]
	);

	// two wide and three tall, stored column by column
	lcd.draw_picture_16bits(0, 0, 1, 2, &[0, 1, 2, 3, 4, 5])
		.unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![vec![0, 0, 0, 3, 0, 1, 0, 4, 0, 2, 0, 5]]
	);

	assert!(matches!(
		lcd.draw_picture_16bits(0, 0, 1, 1, &[0; 3]),
		Err(Error::Length {
			expected: 4,
			actual: 3,
			..
		})
	));
	assert!(matches!(
		lcd.draw_picture_18bits(0, 0, 1, 1, &[0; 4]),
		Err(Error::WrongPixelFormat {
			expected: PixelFormat::Bits18,
			actual: PixelFormat::Bits16,
		})
	));
	assert!(log.take().is_empty());

	let (mut lcd, log) = ready_in(PixelFormat::Bits12);
	lcd.draw_picture_12bits(0, 0, 2, 1, &[0x123, 0x456, 0x789, 0xABC, 0xDEF, 0x012])
		.unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![vec![0x12, 0x37, 0x89, 0xDE, 0xF4, 0x56, 0xAB, 0xC0, 0x12]]
	);

	let (mut lcd, log) = ready_in(PixelFormat::Bits18);
	lcd.draw_picture_18bits(0, 0, 1, 1, &[0x3FFFF, 0, 0x3F << 6, 1])
		.unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![vec![
			0xFC, 0xFC, 0xFC, 0, 0xFC, 0, 0, 0, 0, 0, 0, 0x04
		]]
	);
}

#[test]
fn text_draws_glyph_pixels_in_its_cell() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.write_string(16, 32, "A", 0xFFFF, Font::Font16).unwrap();
	let events = log.take();

	let starts = window_starts(&events);
	assert!(!starts.is_empty());
	assert!(starts
		.iter()
		.all(|&(x, y)| (16..24).contains(&x) && (32..48).contains(&y)));
	assert!(data_after(&events, 0x2C)
		.iter()
		.all(|px| px == &vec![0xFF, 0xFF]));
}

#[test]
fn text_wraps_and_restarts() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);

	// 232 is the last cell start before the right edge with 8 pixel wide cells
	lcd.write_string(232, 0, "A", 0xFFFF, Font::Font16).unwrap();
	let starts = window_starts(&log.take());
	assert!(starts
		.iter()
		.all(|&(x, y)| x < 8 && (16..32).contains(&y)));

	lcd.write_string(0, 304, "A", 0xFFFF, Font::Font16).unwrap();
	let starts = window_starts(&log.take());
	assert!(starts.iter().all(|&(x, y)| x < 8 && y < 16));

	lcd.write_string(0, 0, "AB", 0xFFFF, Font::Font24).unwrap();
	let starts = window_starts(&log.take());
	assert!(starts.iter().any(|&(x, _)| x < 12));
	assert!(starts.iter().any(|&(x, _)| (12..24).contains(&x)));
}

#[test]
fn text_stops_at_unprintable() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.write_string(0, 0, "\nAB", 0xFFFF, Font::Font12).unwrap();
	assert!(log.take().is_empty());

	lcd.write_string(0, 0, "A\u{e9}B", 0xFFFF, Font::Font12).unwrap();
	let starts = window_starts(&log.take());
	assert!(!starts.is_empty());
	assert!(starts.iter().all(|&(x, _)| x < 6));

	assert!(lcd.write_string(240, 0, "A", 0, Font::Font12).is_err());
	assert!(lcd.write_string(0, 320, "A", 0, Font::Font12).is_err());
}

#[test]
fn draw_target_clips() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);

	lcd.fill_solid(
		&Rectangle::new(Point::new(-5, -5), Size::new(10, 10)),
		Rgb565::RED,
	)
	.unwrap();
	let events = log.take();
	assert_eq!(data_after(&events, 0x2A), vec![vec![0, 0, 0, 4]]);
	assert_eq!(data_after(&events, 0x2B), vec![vec![0, 0, 0, 4]]);
	assert_eq!(data_after(&events, 0x2C), vec![[0xF8, 0x00].repeat(25)]);

	lcd.draw_iter([
		Pixel(Point::new(-1, 0), Rgb565::GREEN),
		Pixel(Point::new(1, 2), Rgb565::GREEN),
		Pixel(Point::new(240, 0), Rgb565::GREEN),
	])
	.unwrap();
	let events = log.take();
	assert_eq!(window_starts(&events), vec![(1, 2)]);
	assert_eq!(data_after(&events, 0x2C), vec![vec![0x07, 0xE0]]);

	lcd.fill_contiguous(
		&Rectangle::new(Point::new(0, 0), Size::new(2, 1)),
		[Rgb565::BLUE, Rgb565::WHITE],
	)
	.unwrap();
	assert_eq!(
		data_after(&log.take(), 0x2C),
		vec![vec![0x00, 0x1F, 0xFF, 0xFF]]
	);
}

#[test]
fn contiguous_fill_off_the_edge_keeps_colours() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits16);
	lcd.fill_contiguous(
		&Rectangle::new(Point::new(-1, 0), Size::new(3, 1)),
		[Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE],
	)
	.unwrap();
	let events = log.take();
	assert_eq!(window_starts(&events), vec![(0, 0), (1, 0)]);
	assert_eq!(
		data_after(&events, 0x2C),
		vec![vec![0x07, 0xE0], vec![0x00, 0x1F]]
	);
}

#[test]
fn draw_target_converts_colours() {
	let (mut lcd, log) = ready_in(PixelFormat::Bits18);
	lcd.draw_iter([Pixel(Point::new(0, 0), Rgb565::WHITE)])
		.unwrap();
	assert_eq!(data_after(&log.take(), 0x2C), vec![vec![0xFC, 0xFC, 0xFC]]);
}

#[test]
fn attach_skips_the_reset() {
	let (mut lcd, log) = fresh();
	lcd.attach(Some(PixelFormat::Bits16));
	lcd.draw_point(0, 0, 0xFFFF).unwrap();
	let events = log.take();
	assert_eq!(commands(&events), vec![0x2A, 0x2B, 0x2C]);
	assert!(!events.contains(&Event::Reset(false)));
}
