//! Panel function commands (the level 2 command table).
//!
//! These configure the timing generator, the voltage generators, gamma, and the one-time
//! programmable memory. The defaults of the parameter structs match a common 240x320 module.

use tracing::instrument;

use crate::{
	commands::Command,
	error::{check_max, Result},
	interface::Interface,
	settings::*,
};

/// RAM control (RAMCTRL) settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct RamControl {
	pub ram_access: RamAccess,
	pub display_mode: DisplayMode,
	pub frame_type: FrameType,
	pub data_mode: DataMode,
	pub bus_width: RgbBusWidth,
	pub pixel_type: PixelType,
}

/// RGB interface control (RGBCTRL) settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct RgbInterfaceControl {
	pub direct_mode: DirectRgbMode,
	pub enable_mode: RgbEnableMode,
	/// VSYNC active level.
	pub vspl: PinLevel,
	/// HSYNC active level.
	pub hspl: PinLevel,
	/// DOTCLK active edge.
	pub dpl: PinLevel,
	/// ENABLE active level.
	pub epl: PinLevel,
	/// Vertical back porch, up to 0x7F.
	pub vbp: u8,
	/// Horizontal back porch, up to 0x1F.
	pub hbp: u8,
}

impl Default for RgbInterfaceControl {
	fn default() -> Self {
		Self {
			direct_mode: DirectRgbMode::Memory,
			enable_mode: RgbEnableMode::Mcu,
			vspl: PinLevel::Low,
			hspl: PinLevel::Low,
			dpl: PinLevel::Low,
			epl: PinLevel::Low,
			vbp: 0x02,
			hbp: 0x14,
		}
	}
}

/// Porch (PORCTRL) settings.
///
/// Normal mode porches go up to 0x7F, idle and partial mode porches up to 0xF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct Porch {
	pub back: u8,
	pub front: u8,
	/// Use the idle and partial porches in those modes.
	pub separate: bool,
	pub back_idle: u8,
	pub front_idle: u8,
	pub back_partial: u8,
	pub front_partial: u8,
}

impl Default for Porch {
	fn default() -> Self {
		Self {
			back: 0x0C,
			front: 0x0C,
			separate: false,
			back_idle: 0x3,
			front_idle: 0x3,
			back_partial: 0x3,
			front_partial: 0x3,
		}
	}
}

/// Frame rate control in idle and partial modes (FRCTRL1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct FrameRateControl {
	/// Use separate frame rates in idle and partial modes.
	pub separate: bool,
	pub divider: FrameRateDivider,
	pub idle_inversion: InversionMode,
	/// Up to 0x1F, see [`FrameRate`].
	pub idle_rate: u8,
	pub partial_inversion: InversionMode,
	/// Up to 0x1F, see [`FrameRate`].
	pub partial_rate: u8,
}

impl Default for FrameRateControl {
	fn default() -> Self {
		Self {
			separate: false,
			divider: FrameRateDivider::Div1,
			idle_inversion: InversionMode::Dot,
			idle_rate: FrameRate::Hz60 as u8,
			partial_inversion: InversionMode::Dot,
			partial_rate: FrameRate::Hz60 as u8,
		}
	}
}

/// Partial mode control (PARCTRL), for the non-display area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct PartialModeControl {
	pub level: NonDisplayLevel,
	pub scan: NonDisplayScan,
	pub frequency: NonDisplayFrequency,
}

/// Gate on timing adjustment (GTADJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct GateTiming {
	/// Up to 0x3F.
	pub on: u8,
	/// Gate off timing for the RGB interface, up to 0xF.
	pub off_rgb: u8,
	/// Up to 0xF.
	pub off: u8,
}

impl Default for GateTiming {
	fn default() -> Self {
		Self {
			on: 0x22,
			off_rgb: 0x07,
			off: 0x05,
		}
	}
}

/// LCM control (LCMCTRL): these XOR with the corresponding MADCTL and INVON bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct LcmControl {
	pub xmy: bool,
	pub xbgr: bool,
	pub xinv: bool,
	pub xmx: bool,
	pub xmh: bool,
	pub xmv: bool,
	pub xgs: bool,
}

impl Default for LcmControl {
	fn default() -> Self {
		Self {
			xmy: false,
			xbgr: true,
			xinv: false,
			xmx: true,
			xmh: true,
			xmv: false,
			xgs: false,
		}
	}
}

impl From<LcmControl> for u8 {
	fn from(lcm: LcmControl) -> u8 {
		u8::from(lcm.xmy) << 6
			| u8::from(lcm.xbgr) << 5
			| u8::from(lcm.xinv) << 4
			| u8::from(lcm.xmx) << 3
			| u8::from(lcm.xmh) << 2
			| u8::from(lcm.xmv) << 1
			| u8::from(lcm.xgs)
	}
}

/// Content adaptive brightness control (CABCCTRL).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct CabcControl {
	/// Keep the LED on when brightness is zero.
	pub led_on: bool,
	/// Initialise the PWM output with the display brightness.
	pub pwm_init: bool,
	/// Fix the PWM output.
	pub pwm_fix: bool,
	/// Invert the PWM output.
	pub pwm_polarity: bool,
}

impl From<CabcControl> for u8 {
	fn from(cabc: CabcControl) -> u8 {
		u8::from(cabc.led_on) << 3
			| u8::from(cabc.pwm_init) << 2
			| u8::from(cabc.pwm_fix) << 1
			| u8::from(cabc.pwm_polarity)
	}
}

/// Equalize time control (EQCTRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct EqualizeTime {
	/// Up to 0x1F.
	pub source_equalize: u8,
	/// Up to 0x1F.
	pub source_precharge: u8,
	/// Up to 0xF.
	pub gate_equalize: u8,
}

impl Default for EqualizeTime {
	fn default() -> Self {
		Self {
			source_equalize: 0x11,
			source_precharge: 0x11,
			gate_equalize: 0x08,
		}
	}
}

impl RgbInterfaceControl {
	/// Check the back porches fit their fields.
	pub fn check(&self) -> Result<()> {
		check_max("vertical back porch", self.vbp, 0x7F_u8)?;
		check_max("horizontal back porch", self.hbp, 0x1F_u8)
	}
}

impl Porch {
	/// Check every porch fits its field.
	pub fn check(&self) -> Result<()> {
		check_max("back porch", self.back, 0x7F_u8)?;
		check_max("front porch", self.front, 0x7F_u8)?;
		check_max("idle back porch", self.back_idle, 0xF_u8)?;
		check_max("idle front porch", self.front_idle, 0xF_u8)?;
		check_max("partial back porch", self.back_partial, 0xF_u8)?;
		check_max("partial front porch", self.front_partial, 0xF_u8)
	}
}

impl FrameRateControl {
	/// Check the idle and partial rates fit their fields.
	pub fn check(&self) -> Result<()> {
		check_max("idle frame rate", self.idle_rate, 0x1F_u8)?;
		check_max("partial frame rate", self.partial_rate, 0x1F_u8)
	}
}

impl GateTiming {
	/// Check the timings fit their fields.
	pub fn check(&self) -> Result<()> {
		check_max("gate on timing", self.on, 0x3F_u8)?;
		check_max("gate off timing (RGB)", self.off_rgb, 0xF_u8)?;
		check_max("gate off timing", self.off, 0xF_u8)
	}
}

impl EqualizeTime {
	/// Check the times fit their fields.
	pub fn check(&self) -> Result<()> {
		check_max("source equalize time", self.source_equalize, 0x1F_u8)?;
		check_max("source pre-drive time", self.source_precharge, 0x1F_u8)?;
		check_max("gate equalize time", self.gate_equalize, 0xF_u8)
	}
}

impl<I: Interface> crate::Driver<I> {
	/// Set how RAM is accessed and laid out.
	#[instrument(level = "debug", skip(self))]
	pub fn set_ram_control(&mut self, ram: RamControl) -> Result<()> {
		self.send(
			Command::RamControl,
			&[
				(ram.ram_access as u8) << 4 | ram.display_mode as u8,
				(ram.frame_type as u8) << 4
					| (ram.data_mode as u8) << 3
					| (ram.bus_width as u8) << 2
					| ram.pixel_type as u8,
			],
		)
	}

	/// Set the RGB interface signals and back porches.
	#[instrument(level = "debug", skip(self))]
	pub fn set_rgb_interface_control(&mut self, rgb: RgbInterfaceControl) -> Result<()> {
		rgb.check()?;
		self.send(
			Command::RgbInterfaceControl,
			&[
				(rgb.direct_mode as u8) << 7
					| (rgb.enable_mode as u8) << 5
					| (rgb.vspl as u8) << 3
					| (rgb.hspl as u8) << 2
					| (rgb.dpl as u8) << 1
					| rgb.epl as u8,
				rgb.vbp,
				rgb.hbp,
			],
		)
	}

	/// Set the front and back porches for each mode.
	#[instrument(level = "debug", skip(self))]
	pub fn set_porch(&mut self, porch: Porch) -> Result<()> {
		porch.check()?;
		self.send(
			Command::PorchSettings,
			&[
				porch.back,
				porch.front,
				u8::from(porch.separate),
				porch.back_idle << 4 | porch.front_idle,
				porch.back_partial << 4 | porch.front_partial,
			],
		)
	}

	/// Set the frame rate divider and the idle/partial frame rates.
	#[instrument(level = "debug", skip(self))]
	pub fn set_frame_rate_control(&mut self, control: FrameRateControl) -> Result<()> {
		control.check()?;
		self.send(
			Command::FrameRateControl1,
			&[
				u8::from(control.separate) << 4 | control.divider as u8,
				(control.idle_inversion as u8) << 5 | control.idle_rate,
				(control.partial_inversion as u8) << 5 | control.partial_rate,
			],
		)
	}

	/// Set what non-display areas show in partial mode.
	#[instrument(level = "debug", skip(self))]
	pub fn set_partial_mode_control(&mut self, control: PartialModeControl) -> Result<()> {
		self.send(
			Command::PartialModeControl,
			&[(control.level as u8) << 7 | (control.scan as u8) << 4 | control.frequency as u8],
		)
	}

	/// Set the gate high and low voltages.
	#[instrument(level = "debug", skip(self))]
	pub fn set_gate_control(&mut self, vghs: Vghs, vgls: Vgls) -> Result<()> {
		self.send(Command::GateVoltages, &[(vghs as u8) << 4 | vgls as u8])
	}

	/// Adjust gate on and off timing.
	#[instrument(level = "debug", skip(self))]
	pub fn set_gate_on_timing_adjustment(&mut self, timing: GateTiming) -> Result<()> {
		timing.check()?;
		self.send(
			Command::GateTiming,
			&[0x2A, 0x2B, timing.on, timing.off_rgb << 4 | timing.off],
		)
	}

	/// Enable or disable the digital gamma tables.
	#[instrument(level = "debug", skip(self))]
	pub fn set_digital_gamma(&mut self, enable: bool) -> Result<()> {
		self.send(Command::DigitalGammaEnable, &[u8::from(enable) << 2])
	}

	/// Set VCOM, see [`vcom_to_register`](crate::vcom_to_register).
	#[instrument(level = "debug", skip(self))]
	pub fn set_vcoms(&mut self, vcoms: u8) -> Result<()> {
		check_max("VCOM", vcoms, 0x3F_u8)?;
		self.send(Command::VcomSetting, &[vcoms])
	}

	/// Set the LCM control bits.
	#[instrument(level = "debug", skip(self))]
	pub fn set_lcm_control(&mut self, lcm: LcmControl) -> Result<()> {
		self.send(Command::LcmControl, &[lcm.into()])
	}

	/// Set the three ID bytes.
	#[instrument(level = "debug", skip(self))]
	pub fn set_id_code_setting(&mut self, id: [u8; 3]) -> Result<()> {
		self.send(Command::IdCodeSetting, &id)
	}

	/// Choose whether VDV and VRH come from NVM or from commands.
	#[instrument(level = "debug", skip(self))]
	pub fn set_vdv_vrh_from(&mut self, from: VdvVrhSource) -> Result<()> {
		self.send(Command::VdvVrhEnable, &[from as u8, 0xFF])
	}

	/// Set VRH, see [`vrh_to_register`](crate::vrh_to_register).
	#[instrument(level = "debug", skip(self))]
	pub fn set_vrhs(&mut self, vrhs: u8) -> Result<()> {
		check_max("VRH", vrhs, 0x27_u8)?;
		self.send(Command::VrhSetting, &[vrhs])
	}

	/// Set VDV, see [`vdv_to_register`](crate::vdv_to_register).
	#[instrument(level = "debug", skip(self))]
	pub fn set_vdv(&mut self, vdv: u8) -> Result<()> {
		check_max("VDV", vdv, 0x3F_u8)?;
		self.send(Command::VdvSetting, &[vdv])
	}

	/// Set the VCOM offset, see [`vcom_offset_to_register`](crate::vcom_offset_to_register).
	#[instrument(level = "debug", skip(self))]
	pub fn set_vcoms_offset(&mut self, offset: u8) -> Result<()> {
		check_max("VCOM offset", offset, 0x3F_u8)?;
		self.send(Command::VcomOffset, &[offset])
	}

	/// Set the frame rate in normal mode.
	#[instrument(level = "debug", skip(self))]
	pub fn set_frame_rate(&mut self, inversion: InversionMode, rate: FrameRate) -> Result<()> {
		self.send(
			Command::FrameRateControl2,
			&[(inversion as u8) << 5 | rate as u8],
		)
	}

	/// Set the CABC LED and PWM behaviour.
	#[instrument(level = "debug", skip(self))]
	pub fn set_cabc_control(&mut self, cabc: CabcControl) -> Result<()> {
		self.send(Command::CabcControl, &[cabc.into()])
	}

	/// Set the CABC PWM frequency.
	#[instrument(level = "debug", skip(self))]
	pub fn set_pwm_frequency(&mut self, frequency: PwmFrequency) -> Result<()> {
		self.send(Command::PwmFrequency, &[frequency as u8])
	}

	/// Set AVDD, AVCL and VDS.
	#[instrument(level = "debug", skip(self))]
	pub fn set_power_control_1(&mut self, avdd: Avdd, avcl: Avcl, vds: Vds) -> Result<()> {
		self.send(
			Command::PowerControl1,
			&[0xA4, (avdd as u8) << 6 | (avcl as u8) << 4 | vds as u8],
		)
	}

	/// Enable the VAP/VAN signal output.
	#[instrument(level = "debug", skip(self))]
	pub fn enable_vap_van_signal_output(&mut self) -> Result<()> {
		self.send(Command::VapVanEnable, &[0x4C])
	}

	/// Enable or disable the level 2 command table.
	#[instrument(level = "debug", skip(self))]
	pub fn set_command_2_enable(&mut self, enable: bool) -> Result<()> {
		self.send(Command::Command2Enable, &[0x5A, 0x69, 0x02, u8::from(enable)])
	}

	/// Set the positive voltage gamma table.
	#[instrument(level = "debug", skip(self))]
	pub fn set_positive_voltage_gamma_control(&mut self, table: &[u8; 14]) -> Result<()> {
		self.send(Command::PositiveGammaControl, table)
	}

	/// Set the negative voltage gamma table.
	#[instrument(level = "debug", skip(self))]
	pub fn set_negative_voltage_gamma_control(&mut self, table: &[u8; 14]) -> Result<()> {
		self.send(Command::NegativeGammaControl, table)
	}

	/// Set the red digital gamma table.
	#[instrument(level = "debug", skip(self, table))]
	pub fn set_digital_gamma_look_up_table_red(&mut self, table: &[u8; 64]) -> Result<()> {
		self.send(Command::DigitalGammaRed, table)
	}

	/// Set the blue digital gamma table.
	#[instrument(level = "debug", skip(self, table))]
	pub fn set_digital_gamma_look_up_table_blue(&mut self, table: &[u8; 64]) -> Result<()> {
		self.send(Command::DigitalGammaBlue, table)
	}

	/// Set the gate line count and first scan line, as register values.
	///
	/// See [`gate_lines_to_register`](crate::gate_lines_to_register).
	#[instrument(level = "debug", skip(self))]
	pub fn set_gate(
		&mut self,
		lines: u8,
		first_scan_line: u8,
		mode: GateInterlace,
		direction: GateScanDirection,
	) -> Result<()> {
		check_max("gate lines", lines, 0x3F_u8)?;
		check_max("first scan line", first_scan_line, 0x3F_u8)?;
		self.send(
			Command::GateControl,
			&[
				lines,
				first_scan_line,
				0x10 | (mode as u8) << 2 | direction as u8,
			],
		)
	}

	/// Enable the 2-data-lane SPI mode and command table 2.
	#[instrument(level = "debug", skip(self))]
	pub fn set_spi2_enable(&mut self, data_lane: bool, command_table_2: bool) -> Result<()> {
		self.send(
			Command::Spi2Enable,
			&[u8::from(data_lane) << 4 | u8::from(command_table_2)],
		)
	}

	/// Set the booster clock dividers.
	#[instrument(level = "debug", skip(self))]
	pub fn set_power_control_2(&mut self, sbclk: SbclkDivider, stp14ck: Stp14ckDivider) -> Result<()> {
		self.send(
			Command::PowerControl2,
			&[(sbclk as u8) << 4 | stp14ck as u8],
		)
	}

	/// Set the source and gate equalize times.
	#[instrument(level = "debug", skip(self))]
	pub fn set_equalize_time_control(&mut self, eq: EqualizeTime) -> Result<()> {
		eq.check()?;
		self.send(
			Command::EqualizeTimeControl,
			&[eq.source_equalize, eq.source_precharge, eq.gate_equalize],
		)
	}

	/// Prepare the one-time programmable memory for writing.
	#[instrument(level = "debug", skip(self))]
	pub fn set_program_mode_control(&mut self) -> Result<()> {
		self.send(Command::ProgramModeControl, &[0x01])
	}

	/// Enter or leave program mode.
	#[instrument(level = "debug", skip(self))]
	pub fn set_program_mode_enable(&mut self, enable: bool) -> Result<()> {
		self.send(
			Command::ProgramModeEnable,
			&[0x5A, 0x69, 0xEE, u8::from(enable) << 2],
		)
	}

	/// Write one byte of the one-time programmable memory, once program mode is enabled.
	#[instrument(level = "debug", skip(self))]
	pub fn set_nvm_setting(&mut self, address: u8, data: u8) -> Result<()> {
		self.send(Command::NvmSetting, &[address, data])
	}

	/// Burn the programmed values into NVM.
	#[instrument(level = "debug", skip(self))]
	pub fn set_program_action(&mut self) -> Result<()> {
		self.send(Command::ProgramAction, &[0x29, 0xA5])
	}
}
