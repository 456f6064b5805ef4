#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use st7789_driver::{Driver, Interface, PixelFormat, Result, RgbFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	Command(u8),
	Data(Vec<u8>),
	Reset(bool),
	Delay(u32),
}

/// An interface that records everything sent to it.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
	/// Take the events recorded so far.
	pub fn take(&self) -> Vec<Event> {
		std::mem::take(&mut *self.0.borrow_mut())
	}
}

impl Interface for Recorder {
	fn write_command(&mut self, command: u8) -> Result<()> {
		self.0.borrow_mut().push(Event::Command(command));
		Ok(())
	}

	fn write_data(&mut self, data: &[u8]) -> Result<()> {
		self.0.borrow_mut().push(Event::Data(data.to_vec()));
		Ok(())
	}

	fn set_reset(&mut self, high: bool) -> Result<()> {
		self.0.borrow_mut().push(Event::Reset(high));
		Ok(())
	}

	fn delay_ms(&mut self, ms: u32) {
		self.0.borrow_mut().push(Event::Delay(ms));
	}
}

/// A driver that's never been initialised.
pub fn fresh() -> (Driver<Recorder>, Recorder) {
	let log = Recorder::default();
	(Driver::new(log.clone()), log)
}

/// An initialised driver, with nothing logged yet.
pub fn ready() -> (Driver<Recorder>, Recorder) {
	let (mut lcd, log) = fresh();
	lcd.init().unwrap();
	log.take();
	(lcd, log)
}

/// An initialised driver in a pixel format, with nothing logged yet.
pub fn ready_in(format: PixelFormat) -> (Driver<Recorder>, Recorder) {
	let (mut lcd, log) = ready();
	lcd.set_interface_pixel_format(RgbFormat::Rgb262k, format)
		.unwrap();
	log.take();
	(lcd, log)
}

/// Just the command bytes.
pub fn commands(events: &[Event]) -> Vec<u8> {
	events
		.iter()
		.filter_map(|event| match event {
			Event::Command(c) => Some(*c),
			_ => None,
		})
		.collect()
}

/// The data sent right after each occurrence of a command, concatenated.
pub fn data_after(events: &[Event], command: u8) -> Vec<Vec<u8>> {
	let mut out = Vec::new();
	let mut current: Option<Vec<u8>> = None;
	for event in events {
		match event {
			Event::Command(c) => {
				if let Some(done) = current.take() {
					out.push(done);
				}
				if *c == command {
					current = Some(Vec::new());
				}
			}
			Event::Data(bytes) => {
				if let Some(buf) = current.as_mut() {
					buf.extend_from_slice(bytes);
				}
			}
			_ => {}
		}
	}
	if let Some(done) = current.take() {
		out.push(done);
	}
	out
}

/// The (x, y) start of every address window set.
pub fn window_starts(events: &[Event]) -> Vec<(u16, u16)> {
	let cols = data_after(events, 0x2A);
	let rows = data_after(events, 0x2B);
	cols.iter()
		.zip(rows.iter())
		.map(|(c, r)| {
			(
				u16::from_be_bytes([c[0], c[1]]),
				u16::from_be_bytes([r[0], r[1]]),
			)
		})
		.collect()
}

/// The sizes of the data writes.
pub fn data_lengths(events: &[Event]) -> Vec<usize> {
	events
		.iter()
		.filter_map(|event| match event {
			Event::Data(bytes) => Some(bytes.len()),
			_ => None,
		})
		.collect()
}
