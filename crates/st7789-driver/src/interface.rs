use embedded_hal::{
	delay::DelayNs,
	digital::{Error as _, OutputPin},
	spi::{Error as _, SpiDevice},
};
use tracing::instrument;

use crate::error::{Error, Result};

/// What the driver needs from the host platform.
///
/// This is the bus transport (command and data writes, with the data/command line handled by
/// the implementation), control of the reset line, and a blocking delay.
///
/// [`SpiInterface`] implements this over [`embedded_hal`] traits, and with the `rpi` feature
/// `RpiInterface` implements it directly on a Raspberry Pi.
pub trait Interface {
	/// Write a command byte, with the data/command line low.
	fn write_command(&mut self, command: u8) -> Result<()>;

	/// Write parameter or pixel bytes, with the data/command line high.
	fn write_data(&mut self, data: &[u8]) -> Result<()>;

	/// Drive the reset line (active low).
	fn set_reset(&mut self, high: bool) -> Result<()>;

	/// Block for some milliseconds.
	fn delay_ms(&mut self, ms: u32);
}

impl<T: Interface + ?Sized> Interface for &mut T {
	fn write_command(&mut self, command: u8) -> Result<()> {
		(**self).write_command(command)
	}

	fn write_data(&mut self, data: &[u8]) -> Result<()> {
		(**self).write_data(data)
	}

	fn set_reset(&mut self, high: bool) -> Result<()> {
		(**self).set_reset(high)
	}

	fn delay_ms(&mut self, ms: u32) {
		(**self).delay_ms(ms)
	}
}

/// [`Interface`] over an SPI device and two GPIO pins.
#[derive(Debug)]
pub struct SpiInterface<SPI, DC, RST, DELAY> {
	spi: SPI,
	dc: DC,
	reset: RST,
	delay: DELAY,
}

impl<SPI, DC, RST, DELAY> SpiInterface<SPI, DC, RST, DELAY>
where
	SPI: SpiDevice,
	DC: OutputPin,
	RST: OutputPin,
	DELAY: DelayNs,
{
	/// Wrap the SPI device (with its chip select), data/command pin, reset pin, and delay.
	pub fn new(spi: SPI, dc: DC, reset: RST, delay: DELAY) -> Self {
		Self {
			spi,
			dc,
			reset,
			delay,
		}
	}

	/// Give the peripherals back.
	pub fn release(self) -> (SPI, DC, RST, DELAY) {
		(self.spi, self.dc, self.reset, self.delay)
	}
}

impl<SPI, DC, RST, DELAY> Interface for SpiInterface<SPI, DC, RST, DELAY>
where
	SPI: SpiDevice,
	DC: OutputPin,
	RST: OutputPin,
	DELAY: DelayNs,
{
	#[instrument(level = "trace", skip(self))]
	fn write_command(&mut self, command: u8) -> Result<()> {
		self.dc.set_low().map_err(|err| Error::Gpio(err.kind()))?;
		self.spi
			.write(&[command])
			.map_err(|err| Error::Spi(err.kind()))
	}

	#[instrument(level = "trace", skip(self, data))]
	fn write_data(&mut self, data: &[u8]) -> Result<()> {
		self.dc.set_high().map_err(|err| Error::Gpio(err.kind()))?;
		self.spi.write(data).map_err(|err| Error::Spi(err.kind()))
	}

	#[instrument(level = "trace", skip(self))]
	fn set_reset(&mut self, high: bool) -> Result<()> {
		let result = if high {
			self.reset.set_high()
		} else {
			self.reset.set_low()
		};
		result.map_err(|err| Error::Gpio(err.kind()))
	}

	fn delay_ms(&mut self, ms: u32) {
		self.delay.delay_ms(ms);
	}
}

#[cfg(test)]
mod tests {
	use std::convert::Infallible;

	use embedded_hal::spi::Operation;

	use super::*;

	#[derive(Debug, Default)]
	struct Wire {
		dc: Vec<bool>,
		bytes: Vec<Vec<u8>>,
	}

	struct Spi<'w>(&'w std::cell::RefCell<Wire>);
	impl embedded_hal::spi::ErrorType for Spi<'_> {
		type Error = Infallible;
	}
	impl SpiDevice for Spi<'_> {
		fn transaction(
			&mut self,
			operations: &mut [Operation<'_, u8>],
		) -> std::result::Result<(), Infallible> {
			for op in operations {
				if let Operation::Write(bytes) = op {
					self.0.borrow_mut().bytes.push(bytes.to_vec());
				}
			}
			Ok(())
		}
	}

	struct Pin<'w>(&'w std::cell::RefCell<Wire>);
	impl embedded_hal::digital::ErrorType for Pin<'_> {
		type Error = Infallible;
	}
	impl OutputPin for Pin<'_> {
		fn set_low(&mut self) -> std::result::Result<(), Infallible> {
			self.0.borrow_mut().dc.push(false);
			Ok(())
		}
		fn set_high(&mut self) -> std::result::Result<(), Infallible> {
			self.0.borrow_mut().dc.push(true);
			Ok(())
		}
	}

	struct NoDelay;
	impl DelayNs for NoDelay {
		fn delay_ns(&mut self, _ns: u32) {}
	}

	#[test]
	fn dc_follows_command_and_data() {
		let wire = std::cell::RefCell::new(Wire::default());
		let reset = std::cell::RefCell::new(Wire::default());
		let mut iface = SpiInterface::new(Spi(&wire), Pin(&wire), Pin(&reset), NoDelay);

		iface.write_command(0x2A).unwrap();
		iface.write_data(&[0, 0, 0, 0xEF]).unwrap();
		iface.set_reset(false).unwrap();

		let wire = wire.into_inner();
		assert_eq!(wire.dc, vec![false, true]);
		assert_eq!(wire.bytes, vec![vec![0x2A], vec![0, 0, 0, 0xEF]]);
		assert_eq!(reset.into_inner().dc, vec![false]);
	}
}
