use std::{fs, path::Path};

use miette::{IntoDiagnostic, Result, WrapErr};
use st7789_driver::{Driver, Interface, PanelConfig};
use tracing::debug;

use crate::args::{Action, Args, TestAction, WiringArgs};

mod basic;
mod info;
mod test;

/// Panel pins that sit outside the controller's command protocol.
pub trait Backlight {
	fn backlight(&mut self, on: bool);
}

#[cfg(target_os = "linux")]
impl Backlight for st7789_driver::RpiInterface {
	fn backlight(&mut self, on: bool) {
		st7789_driver::RpiInterface::backlight(self, on)
	}
}

pub fn run(args: Args) -> Result<()> {
	match args.action {
		Action::Info { json } => info::info(json),
		Action::Pins => {
			info::pins(&args.wiring);
			Ok(())
		}
		Action::Test {
			test: TestAction::Display,
		} => {
			let config = load_config(args.config.as_deref())?;
			let mut lcd = connect(&args.wiring)?;
			test::display(&mut lcd, &config)
		}
		Action::Basic { action } => {
			let config = load_config(args.config.as_deref())?;
			let mut lcd = connect(&args.wiring)?;
			basic::run(&mut lcd, &config, action)
		}
	}
}

/// Read the panel configuration, or use the reference board's.
fn load_config(path: Option<&Path>) -> Result<PanelConfig> {
	let Some(path) = path else {
		return Ok(PanelConfig::default());
	};

	debug!(?path, "reading panel configuration");
	let json = fs::read_to_string(path)
		.into_diagnostic()
		.wrap_err(format!("reading {}", path.display()))?;
	serde_json::from_str(&json)
		.into_diagnostic()
		.wrap_err(format!("parsing {}", path.display()))
}

/// Open the panel's pins and bus.
#[cfg(target_os = "linux")]
fn connect(wiring: &WiringArgs) -> Result<Driver<st7789_driver::RpiInterface>> {
	use st7789_driver::{DriverArgs, RpiInterface};

	let interface = RpiInterface::new(DriverArgs {
		spi: wiring.spi,
		backlight: wiring.backlight,
		reset: wiring.reset,
		dc: wiring.dc,
		ce: wiring.ce,
		frequency: wiring.frequency,
	})
	.wrap_err("connecting to the display")?;
	Ok(Driver::new(interface))
}

#[cfg(not(target_os = "linux"))]
fn connect(_wiring: &WiringArgs) -> Result<Driver<NoPanel>> {
	Err(miette::miette!(
		help = "use the st7789-driver library with an embedded-hal bus instead",
		"the panel can only be driven from a Raspberry Pi running Linux"
	))
}

/// Stands in for the Pi interface where there isn't one.
#[cfg(not(target_os = "linux"))]
pub enum NoPanel {}

#[cfg(not(target_os = "linux"))]
impl Interface for NoPanel {
	fn write_command(&mut self, _: u8) -> st7789_driver::Result<()> {
		match *self {}
	}

	fn write_data(&mut self, _: &[u8]) -> st7789_driver::Result<()> {
		match *self {}
	}

	fn set_reset(&mut self, _: bool) -> st7789_driver::Result<()> {
		match *self {}
	}

	fn delay_ms(&mut self, _: u32) {
		match *self {}
	}
}

#[cfg(not(target_os = "linux"))]
impl Backlight for NoPanel {
	fn backlight(&mut self, _: bool) {
		match *self {}
	}
}

/// Attach to a panel that `basic init` already set up.
fn attach<I: Interface>(lcd: &mut Driver<I>, config: &PanelConfig) -> Result<()> {
	lcd.attach(Some(config.pixel_format));
	lcd.set_column(config.column)?;
	lcd.set_row(config.row)?;
	Ok(())
}

#[cfg(test)]
pub(crate) mod mock {
	use st7789_driver::{Interface, Result};

	use super::Backlight;

	/// Counts what the panel would have been sent.
	#[derive(Debug, Default)]
	pub struct Mock {
		pub commands: Vec<u8>,
		pub data_bytes: usize,
		pub resets: usize,
		pub slept_ms: u64,
		pub backlight: bool,
	}

	impl Interface for Mock {
		fn write_command(&mut self, command: u8) -> Result<()> {
			self.commands.push(command);
			Ok(())
		}

		fn write_data(&mut self, data: &[u8]) -> Result<()> {
			self.data_bytes += data.len();
			Ok(())
		}

		fn set_reset(&mut self, high: bool) -> Result<()> {
			if !high {
				self.resets += 1;
			}
			Ok(())
		}

		fn delay_ms(&mut self, ms: u32) {
			self.slept_ms += u64::from(ms);
		}
	}

	impl Backlight for Mock {
		fn backlight(&mut self, on: bool) {
			self.backlight = on;
		}
	}
}
