use std::{thread::sleep, time::Duration};

use rppal::{
	gpio::{Gpio, Level, OutputPin},
	spi::{Bus, Mode, SlaveSelect, Spi},
};
use tracing::{instrument, trace};

use crate::{
	error::{Error, Result},
	interface::Interface,
};

/// [`Interface`] for a display wired to a Raspberry Pi.
#[derive(Debug)]
pub struct RpiInterface {
	spi: Spi,
	backlight: OutputPin,
	dc: OutputPin,
	reset: OutputPin,
}

/// Arguments to connect to the display.
///
/// This is a struct to hold the SPI port and frequency and the GPIO pins.
///
/// It implements [`Default`] with the common wiring for Pi display HATs: SPI0 CE0, data/command
/// on GPIO 25, reset on GPIO 27, backlight on GPIO 18.
#[derive(Debug, Clone)]
pub struct DriverArgs {
	/// SPI port to use.
	///
	/// Defaults to 0.
	pub spi: u8,

	/// GPIO pin number for the display's backlight control pin.
	///
	/// Defaults to 18.
	pub backlight: u8,

	/// GPIO pin number for the display's reset pin.
	///
	/// Defaults to 27.
	pub reset: u8,

	/// GPIO pin number for the display's data/command pin.
	///
	/// Defaults to 25.
	pub dc: u8,

	/// SPI CE number for the display's chip select pin.
	///
	/// Defaults to 0.
	pub ce: u8,

	/// SPI frequency in Hz.
	///
	/// Defaults to 20 MHz.
	pub frequency: u32,
}

impl Default for DriverArgs {
	fn default() -> Self {
		Self {
			spi: 0,
			backlight: 18,
			reset: 27,
			dc: 25,
			ce: 0,
			frequency: 20_000_000,
		}
	}
}

impl RpiInterface {
	/// Connect to the display I/O.
	///
	/// This sets up the GPIO and SPI pins, but doesn't touch the display otherwise. The reset
	/// line is left high (inactive), and the backlight off.
	#[instrument(level = "debug")]
	pub fn new(args: DriverArgs) -> Result<Self> {
		let gpio = Gpio::new()?;
		let backlight = gpio.get(args.backlight)?.into_output_low();
		let dc = gpio.get(args.dc)?.into_output();
		let reset = gpio.get(args.reset)?.into_output_high();

		let bus = match args.spi {
			0 => Bus::Spi0,
			1 => Bus::Spi1,
			2 => Bus::Spi2,
			3 => Bus::Spi3,
			4 => Bus::Spi4,
			5 => Bus::Spi5,
			6 => Bus::Spi6,
			spi => {
				return Err(Error::OutOfRange {
					what: "SPI bus",
					value: spi.into(),
					max: 6,
				})
			}
		};
		let ce = match args.ce {
			0 => SlaveSelect::Ss0,
			1 => SlaveSelect::Ss1,
			2 => SlaveSelect::Ss2,
			ce => {
				return Err(Error::OutOfRange {
					what: "SPI CE",
					value: ce.into(),
					max: 2,
				})
			}
		};
		let spi = Spi::new(bus, ce, args.frequency, Mode::Mode0)?;

		Ok(Self {
			spi,
			backlight,
			dc,
			reset,
		})
	}

	/// Turn the backlight on or off.
	#[instrument(level = "trace", skip(self))]
	pub fn backlight(&mut self, on: bool) {
		self.backlight
			.write(if on { Level::High } else { Level::Low });
	}
}

impl Interface for RpiInterface {
	fn write_command(&mut self, command: u8) -> Result<()> {
		self.dc.write(Level::Low);
		self.spi.write(&[command])?;
		Ok(())
	}

	fn write_data(&mut self, data: &[u8]) -> Result<()> {
		self.dc.write(Level::High);
		trace!(length = data.len(), "writing some bytes to SPI");
		self.spi.write(data)?;
		Ok(())
	}

	fn set_reset(&mut self, high: bool) -> Result<()> {
		self.reset
			.write(if high { Level::High } else { Level::Low });
		Ok(())
	}

	fn delay_ms(&mut self, ms: u32) {
		sleep(Duration::from_millis(ms.into()));
	}
}
