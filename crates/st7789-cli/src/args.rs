use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lloggs::{LoggingArgs, PreArgs, WorkerGuard};
use miette::{miette, Result};
use tracing::debug;

/// Drive an ST7789 LCD panel wired to a Raspberry Pi.
///
/// The wiring options default to the common layout for Pi display HATs: SPI0 CE0,
/// data/command on GPIO 25, reset on GPIO 27, backlight on GPIO 18.
///
/// You may need to raise SPI's buffer size by adding `spidev.bufsiz=131072` to
/// `/boot/firmware/cmdline.txt`, otherwise you'll get "Message too long" errors.
#[derive(Debug, Clone, Parser)]
#[command(
	author,
	version,
	after_help = "Want more detail? Try the long '--help' flag!",
	after_long_help = "Didn't expect this much output? Use the short '-h' flag to get short help."
)]
pub struct Args {
	#[command(flatten)]
	pub logging: LoggingArgs,

	#[command(flatten)]
	pub wiring: WiringArgs,

	/// Panel configuration file.
	///
	/// JSON, with any of the panel settings. Settings left out take the reference board's
	/// values. Without this, the reference board's configuration is used as-is.
	#[arg(long, global = true, env = "ST7789_CONFIG", value_name = "PATH")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub action: Action,
}

/// How the panel is connected.
#[derive(Debug, Clone, Parser)]
pub struct WiringArgs {
	/// SPI port to use.
	#[arg(long, global = true, env = "ST7789_SPI", default_value = "0")]
	pub spi: u8,

	/// SPI CE number for the display's chip select pin.
	#[arg(long, global = true, env = "ST7789_CE", default_value = "0")]
	pub ce: u8,

	/// GPIO pin number for the display's data/command pin.
	#[arg(long, global = true, env = "ST7789_DC", default_value = "25")]
	pub dc: u8,

	/// GPIO pin number for the display's reset pin.
	#[arg(long, global = true, env = "ST7789_RESET", default_value = "27")]
	pub reset: u8,

	/// GPIO pin number for the display's backlight control pin.
	#[arg(long, global = true, env = "ST7789_BACKLIGHT", default_value = "18")]
	pub backlight: u8,

	/// SPI frequency in Hz.
	#[arg(long, global = true, env = "ST7789_FREQUENCY", default_value = "20000000")]
	pub frequency: u32,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
	/// Print the chip and driver information.
	Info {
		/// Print as JSON.
		#[arg(long)]
		json: bool,
	},

	/// Print the wiring that would be used.
	Pins,

	/// Run a hardware test.
	Test {
		#[command(subcommand)]
		test: TestAction,
	},

	/// Basic panel operations.
	///
	/// Except for `init`, these expect a panel that's already been initialised (with the same
	/// configuration), and don't reset it.
	Basic {
		#[command(subcommand)]
		action: BasicAction,
	},
}

#[derive(Debug, Clone, Subcommand)]
pub enum TestAction {
	/// Cycle through fonts, rectangles, random points and a picture.
	///
	/// Takes a few seconds. The layout is drawn for a 240x320 panel and scaled to the
	/// configured size. The panel is put back to sleep at the end.
	Display,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BasicAction {
	/// Reset and configure the panel, then turn it on and clear it.
	Init,

	/// Put the panel to sleep and turn the backlight off.
	Deinit,

	/// Write a string at the top left.
	Str {
		/// Text to write.
		#[arg(long, default_value = "libdriver")]
		text: String,

		/// Colour, in the current pixel format.
		#[arg(long, default_value = "65535", value_parser = parse_colour)]
		colour: u32,
	},

	/// Turn the display on.
	DisplayOn,

	/// Turn the display off.
	DisplayOff,

	/// Clear the whole panel to black.
	Clear,

	/// Draw a single point.
	Point {
		#[arg(long)]
		x: u16,

		#[arg(long)]
		y: u16,

		/// Colour, in the current pixel format.
		#[arg(long, default_value = "65535", value_parser = parse_colour)]
		colour: u32,
	},

	/// Fill a rectangle.
	///
	/// Coordinates are inclusive.
	Rect {
		#[arg(long)]
		left: u16,

		#[arg(long)]
		top: u16,

		#[arg(long)]
		right: u16,

		#[arg(long)]
		bottom: u16,

		/// Colour, in the current pixel format.
		#[arg(long, default_value = "65535", value_parser = parse_colour)]
		colour: u32,
	},
}

/// Decimal, or hex with a `0x` prefix.
fn parse_colour(s: &str) -> std::result::Result<u32, String> {
	let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(hex) => u32::from_str_radix(hex, 16),
		None => s.parse(),
	};
	parsed.map_err(|err| format!("not a colour: {err}"))
}

pub fn get_args() -> Result<(Args, WorkerGuard)> {
	let log_guard = PreArgs::parse().setup().map_err(|err| miette!("{err}"))?;

	debug!("parsing arguments");
	let args = Args::parse();

	let log_guard = match log_guard {
		Some(g) => g,
		None => args
			.logging
			.setup(|v| match v {
				0 => "info",
				1 => "info,st7789=debug,st7789_driver=debug",
				2 => "debug",
				3 => "debug,st7789=trace,st7789_driver=trace",
				_ => "trace",
			})
			.map_err(|err| miette!("{err}"))?,
	};

	debug!(?args, "got arguments");
	Ok((args, log_guard))
}

#[test]
fn verify_cli() {
	use clap::CommandFactory;
	Args::command().debug_assert()
}

#[test]
fn colours() {
	assert_eq!(parse_colour("65535"), Ok(0xFFFF));
	assert_eq!(parse_colour("0xF800"), Ok(0xF800));
	assert_eq!(parse_colour("0X3f"), Ok(0x3F));
	assert!(parse_colour("red").is_err());
}
