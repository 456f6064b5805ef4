use tracing::{debug, instrument, trace};

use crate::{
	commands::Command,
	error::{Error, Result},
	interface::Interface,
	pixel::PixelFormat,
};

/// Default size of the line buffer used to stream pixel data, in bytes.
pub const DEFAULT_BUFFER_LENGTH: usize = 4096;

/// Driver for an ST7789 controller.
///
/// Owns its [`Interface`] until [`release`](Self::release)d.
#[derive(Debug)]
pub struct Driver<I> {
	pub(crate) interface: I,
	pub(crate) column: u16,
	pub(crate) row: u16,
	pub(crate) format: Option<PixelFormat>,
	pub(crate) buffer: Vec<u8>,
	pub(crate) buffer_length: usize,
	pub(crate) inited: bool,
}

impl<I: Interface> Driver<I> {
	/// Take over an interface.
	///
	/// This doesn't touch the display. Call [`init`](Self::init) next, or
	/// [`attach`](Self::attach) to a panel that's already been configured.
	pub fn new(interface: I) -> Self {
		Self::with_buffer_length(interface, DEFAULT_BUFFER_LENGTH)
	}

	/// Take over an interface, with a line buffer of a different size.
	///
	/// Pixel data is sent in writes of at most this many bytes, so this should not exceed what
	/// the bus can transfer at once (on Linux, the `spidev.bufsiz` module parameter).
	pub fn with_buffer_length(interface: I, length: usize) -> Self {
		let length = length.max(16);
		Self {
			interface,
			column: 240,
			row: 320,
			format: None,
			buffer: Vec::with_capacity(length),
			buffer_length: length,
			inited: false,
		}
	}

	/// Hardware reset the controller and mark the driver initialised.
	#[instrument(level = "debug", skip(self))]
	pub fn init(&mut self) -> Result<()> {
		self.interface.set_reset(false)?;
		self.interface.delay_ms(25);
		self.interface.set_reset(true)?;
		self.interface.delay_ms(125);

		self.format = None;
		self.buffer.clear();
		self.inited = true;
		debug!("controller reset");
		Ok(())
	}

	/// Use a panel that's already been initialised and configured, without resetting it.
	///
	/// The pixel format can't be read back over a write-only bus, so it must be given if drawing
	/// operations are to be used.
	#[instrument(level = "debug", skip(self))]
	pub fn attach(&mut self, format: Option<PixelFormat>) {
		self.format = format;
		self.buffer.clear();
		self.inited = true;
	}

	/// Put the controller to sleep and mark the driver uninitialised.
	#[instrument(level = "debug", skip(self))]
	pub fn deinit(&mut self) -> Result<()> {
		self.ensure_init()?;
		self.command(Command::SleepIn)?;
		self.inited = false;
		Ok(())
	}

	/// Give the interface back.
	pub fn release(self) -> I {
		self.interface
	}

	/// Borrow the interface, e.g. to drive pins the controller doesn't know about.
	pub fn interface_mut(&mut self) -> &mut I {
		&mut self.interface
	}

	/// Active panel width, in pixels.
	pub fn column(&self) -> u16 {
		self.column
	}

	/// Active panel height, in pixels.
	pub fn row(&self) -> u16 {
		self.row
	}

	/// The control interface pixel format last set, if any.
	pub fn pixel_format(&self) -> Option<PixelFormat> {
		self.format
	}

	/// Whether `init` (or `attach`) has run since the last `deinit`.
	pub fn is_initialised(&self) -> bool {
		self.inited
	}

	pub(crate) fn ensure_init(&self) -> Result<()> {
		if self.inited {
			Ok(())
		} else {
			Err(Error::NotInitialised)
		}
	}

	pub(crate) fn ensure_format(&self) -> Result<PixelFormat> {
		self.format.ok_or(Error::NoPixelFormat)
	}

	/// Send a command byte.
	#[instrument(level = "trace", skip(self, command))]
	pub(crate) fn command(&mut self, command: Command) -> Result<()> {
		trace!(byte=%format!("{:02X?}", command as u8), ?command, "writing command byte");
		self.interface.write_command(command.into())
	}

	/// Send parameter or pixel bytes.
	#[instrument(level = "trace", skip(self, bytes))]
	pub(crate) fn data(&mut self, bytes: &[u8]) -> Result<()> {
		trace!(length = bytes.len(), "writing some bytes");
		self.interface.write_data(bytes)
	}

	/// Send a command with its parameters, if initialised.
	pub(crate) fn send(&mut self, command: Command, params: &[u8]) -> Result<()> {
		self.ensure_init()?;
		self.command(command)?;
		if !params.is_empty() {
			trace!(params=%format!("{params:02X?}"), "command parameters");
			self.data(params)?;
		}
		Ok(())
	}

	/// Write a raw command byte.
	#[instrument(level = "trace", skip(self))]
	pub fn write_cmd(&mut self, command: u8) -> Result<()> {
		self.ensure_init()?;
		self.interface.write_command(command)
	}

	/// Write raw data bytes.
	#[instrument(level = "trace", skip(self, bytes))]
	pub fn write_data(&mut self, bytes: &[u8]) -> Result<()> {
		self.ensure_init()?;
		self.data(bytes)
	}
}
