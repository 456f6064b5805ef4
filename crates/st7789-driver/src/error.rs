use crate::PixelFormat;

/// Error type for driver operations.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum Error {
	#[error("SPI error: {0}")]
	#[cfg_attr(feature = "miette", diagnostic(help("SPI error, check the bus settings")))]
	Spi(embedded_hal::spi::ErrorKind),

	#[error("GPIO error: {0}")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("GPIO error, check the data/command and reset pins"))
	)]
	Gpio(embedded_hal::digital::ErrorKind),

	#[cfg(all(feature = "rpi", target_os = "linux"))]
	#[error("GPIO error")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("GPIO error, check the pin numbers"))
	)]
	RpiGpio(#[from] rppal::gpio::Error),

	#[cfg(all(feature = "rpi", target_os = "linux"))]
	#[error("SPI error")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("SPI error, check settings or increase spidev.bufsiz"))
	)]
	RpiSpi(#[from] rppal::spi::Error),

	#[error("driver is not initialised")]
	#[cfg_attr(feature = "miette", diagnostic(help("call init() first")))]
	NotInitialised,

	#[error("{what} is {value:#X}, over the maximum of {max:#X}")]
	OutOfRange {
		what: &'static str,
		value: u32,
		max: u32,
	},

	#[error("{what} of {value}V is outside the {min}V to {max}V range")]
	VoltageOutOfRange {
		what: &'static str,
		value: f32,
		min: f32,
		max: f32,
	},

	#[error("{what} start ({start}) must be before its end ({end})")]
	InvalidRange {
		what: &'static str,
		start: u16,
		end: u16,
	},

	#[error("{what} must be between 1 and {max}, got {value}")]
	PanelSize {
		what: &'static str,
		value: u16,
		max: u16,
	},

	#[error("no pixel format has been set")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("set one with set_interface_pixel_format()"))
	)]
	NoPixelFormat,

	#[error("this operation needs the {expected} pixel format, but the display is in {actual}")]
	WrongPixelFormat {
		expected: PixelFormat,
		actual: PixelFormat,
	},

	#[error("{what} has {actual} entries, expected {expected}")]
	Length {
		what: &'static str,
		expected: usize,
		actual: usize,
	},
}

/// Convenience type for Results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that a register field fits.
pub(crate) fn check_max(what: &'static str, value: impl Into<u32>, max: impl Into<u32>) -> Result<()> {
	let (value, max) = (value.into(), max.into());
	if value > max {
		return Err(Error::OutOfRange { what, value, max });
	}

	Ok(())
}

/// Check that a start/end pair is strictly ordered.
pub(crate) fn check_order(what: &'static str, start: u16, end: u16) -> Result<()> {
	if start >= end {
		return Err(Error::InvalidRange { what, start, end });
	}

	Ok(())
}
