//! System function commands (the level 1 command table).

use tracing::{debug, instrument};

use crate::{
	commands::Command,
	error::{check_max, check_order, Result},
	helpers::MemoryAccessControl,
	interface::Interface,
	pixel::{PixelFormat, RgbFormat},
	settings::{EnhancementLevel, EnhancementMode, GammaCurve, TearingEffect},
};

/// Highest addressable row or column in frame memory.
pub const MAX_ADDRESS: u16 = 319;

/// Display control (WRCTRLD) flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct DisplayControl {
	/// Brightness control block (BCTRL).
	pub brightness_control: bool,
	/// Display dimming (DD).
	pub dimming: bool,
	/// Backlight control (BL).
	pub backlight: bool,
}

impl From<DisplayControl> for u8 {
	fn from(control: DisplayControl) -> u8 {
		u8::from(control.brightness_control) << 5
			| u8::from(control.dimming) << 3
			| u8::from(control.backlight) << 2
	}
}

/// Colour enhancement (WRCACE) settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct ColourEnhancement {
	pub enabled: bool,
	pub mode: EnhancementMode,
	pub level: EnhancementLevel,
}

impl Default for ColourEnhancement {
	fn default() -> Self {
		Self {
			enabled: true,
			mode: EnhancementMode::UserInterface,
			level: EnhancementLevel::High,
		}
	}
}

impl From<ColourEnhancement> for u8 {
	fn from(ce: ColourEnhancement) -> u8 {
		u8::from(ce.enabled) << 7 | (ce.level as u8) << 4 | ce.mode as u8
	}
}

impl<I: Interface> crate::Driver<I> {
	/// Do nothing.
	#[instrument(level = "trace", skip(self))]
	pub fn nop(&mut self) -> Result<()> {
		self.send(Command::Nop, &[])
	}

	/// Software reset, then wait for the controller to come back.
	#[instrument(level = "debug", skip(self))]
	pub fn software_reset(&mut self) -> Result<()> {
		self.send(Command::SoftwareReset, &[])?;
		self.interface.delay_ms(200);
		Ok(())
	}

	/// Go to sleep.
	#[instrument(level = "debug", skip(self))]
	pub fn sleep_in(&mut self) -> Result<()> {
		self.send(Command::SleepIn, &[])
	}

	/// Leave sleep mode, then wait for the supply to settle.
	#[instrument(level = "debug", skip(self))]
	pub fn sleep_out(&mut self) -> Result<()> {
		self.send(Command::SleepOut, &[])?;
		self.interface.delay_ms(200);
		Ok(())
	}

	/// Show only the partial area.
	#[instrument(level = "debug", skip(self))]
	pub fn partial_display_mode_on(&mut self) -> Result<()> {
		self.send(Command::PartialModeOn, &[])
	}

	/// Leave partial mode and show the whole panel.
	#[instrument(level = "debug", skip(self))]
	pub fn normal_display_mode_on(&mut self) -> Result<()> {
		self.send(Command::NormalModeOn, &[])
	}

	/// Stop inverting colours.
	#[instrument(level = "debug", skip(self))]
	pub fn display_inversion_off(&mut self) -> Result<()> {
		self.send(Command::InversionOff, &[])
	}

	/// Invert colours.
	#[instrument(level = "debug", skip(self))]
	pub fn display_inversion_on(&mut self) -> Result<()> {
		self.send(Command::InversionOn, &[])
	}

	/// Select the gamma curve.
	#[instrument(level = "debug", skip(self))]
	pub fn set_gamma(&mut self, curve: GammaCurve) -> Result<()> {
		self.send(Command::GammaSet, &[curve as u8 & 0x0F])
	}

	/// Turn the display off, keeping the memory contents.
	#[instrument(level = "debug", skip(self))]
	pub fn display_off(&mut self) -> Result<()> {
		self.send(Command::DisplayOff, &[])
	}

	/// Turn the display on.
	#[instrument(level = "debug", skip(self))]
	pub fn display_on(&mut self) -> Result<()> {
		self.send(Command::DisplayOn, &[])
	}

	/// Set the column address window, both ends inclusive.
	#[instrument(level = "trace", skip(self))]
	pub fn set_column_address(&mut self, start: u16, end: u16) -> Result<()> {
		check_max("start column", start, MAX_ADDRESS)?;
		check_max("end column", end, MAX_ADDRESS)?;
		check_order("column address", start, end)?;
		self.send(Command::ColumnAddressSet, &address_pair(start, end))
	}

	/// Set the row address window, both ends inclusive.
	#[instrument(level = "trace", skip(self))]
	pub fn set_row_address(&mut self, start: u16, end: u16) -> Result<()> {
		check_max("start row", start, MAX_ADDRESS)?;
		check_max("end row", end, MAX_ADDRESS)?;
		check_order("row address", start, end)?;
		self.send(Command::RowAddressSet, &address_pair(start, end))
	}

	/// Start a frame memory write with some raw pixel bytes.
	#[instrument(level = "trace", skip(self, data))]
	pub fn memory_write(&mut self, data: &[u8]) -> Result<()> {
		self.send(Command::MemoryWrite, data)
	}

	/// Continue a frame memory write from where the last one stopped.
	#[instrument(level = "trace", skip(self, data))]
	pub fn memory_continue_write(&mut self, data: &[u8]) -> Result<()> {
		self.send(Command::MemoryWriteContinue, data)
	}

	/// Set the rows shown in partial mode.
	#[instrument(level = "debug", skip(self))]
	pub fn set_partial_areas(&mut self, start_row: u16, end_row: u16) -> Result<()> {
		self.send(Command::PartialArea, &address_pair(start_row, end_row))
	}

	/// Define the top fixed, scrolling, and bottom fixed areas, in lines.
	#[instrument(level = "debug", skip(self))]
	pub fn set_vertical_scrolling(
		&mut self,
		top_fixed: u16,
		scrolling: u16,
		bottom_fixed: u16,
	) -> Result<()> {
		let [t0, t1] = top_fixed.to_be_bytes();
		let [s0, s1] = scrolling.to_be_bytes();
		let [b0, b1] = bottom_fixed.to_be_bytes();
		self.send(Command::VerticalScrollingDefinition, &[t0, t1, s0, s1, b0, b1])
	}

	/// Turn the tearing effect output off.
	#[instrument(level = "debug", skip(self))]
	pub fn tearing_effect_line_off(&mut self) -> Result<()> {
		self.send(Command::TearingEffectOff, &[])
	}

	/// Turn the tearing effect output on.
	#[instrument(level = "debug", skip(self))]
	pub fn tearing_effect_line_on(&mut self, effect: TearingEffect) -> Result<()> {
		self.send(Command::TearingEffectOn, &[effect as u8])
	}

	/// Set the memory read and refresh order.
	#[instrument(level = "debug", skip(self))]
	pub fn set_memory_data_access_control(&mut self, order: MemoryAccessControl) -> Result<()> {
		self.send(Command::MemoryAccessControl, &[order.into()])
	}

	/// Set the first line of the scrolling area.
	#[instrument(level = "trace", skip(self))]
	pub fn set_vertical_scroll_start_address(&mut self, start: u16) -> Result<()> {
		check_max("vertical scroll start address", start, MAX_ADDRESS)?;
		self.send(Command::VerticalScrollStartAddress, &start.to_be_bytes())
	}

	/// Leave idle mode.
	#[instrument(level = "debug", skip(self))]
	pub fn idle_mode_off(&mut self) -> Result<()> {
		self.send(Command::IdleModeOff, &[])
	}

	/// Enter idle mode (8 colours).
	#[instrument(level = "debug", skip(self))]
	pub fn idle_mode_on(&mut self) -> Result<()> {
		self.send(Command::IdleModeOn, &[])
	}

	/// Set the colour formats of the RGB and control interfaces.
	///
	/// The control interface format is remembered: it decides how drawing operations encode
	/// pixels.
	#[instrument(level = "debug", skip(self))]
	pub fn set_interface_pixel_format(&mut self, rgb: RgbFormat, control: PixelFormat) -> Result<()> {
		self.send(
			Command::InterfacePixelFormat,
			&[(rgb as u8) << 4 | control as u8],
		)?;
		self.format = Some(control);
		debug!(%control, "pixel format");
		Ok(())
	}

	/// Set the scanline the tearing effect fires at.
	#[instrument(level = "trace", skip(self))]
	pub fn set_tear_scanline(&mut self, line: u16) -> Result<()> {
		self.send(Command::TearScanline, &line.to_be_bytes())
	}

	/// Set the display brightness.
	#[instrument(level = "debug", skip(self))]
	pub fn set_display_brightness(&mut self, brightness: u8) -> Result<()> {
		self.send(Command::DisplayBrightness, &[brightness])
	}

	/// Set the brightness control, dimming and backlight bits.
	#[instrument(level = "debug", skip(self))]
	pub fn set_display_control(&mut self, control: DisplayControl) -> Result<()> {
		self.send(Command::DisplayControl, &[control.into()])
	}

	/// Set the content adaptive brightness control and colour enhancement.
	#[instrument(level = "debug", skip(self))]
	pub fn set_colour_enhancement(&mut self, enhancement: ColourEnhancement) -> Result<()> {
		self.send(Command::ColourEnhancement, &[enhancement.into()])
	}

	/// Set the lowest brightness CABC may go to.
	#[instrument(level = "debug", skip(self))]
	pub fn set_cabc_minimum_brightness(&mut self, brightness: u8) -> Result<()> {
		self.send(Command::CabcMinimumBrightness, &[brightness])
	}
}

pub(crate) fn address_pair(start: u16, end: u16) -> [u8; 4] {
	let [s0, s1] = start.to_be_bytes();
	let [e0, e1] = end.to_be_bytes();
	[s0, s1, e0, e1]
}
