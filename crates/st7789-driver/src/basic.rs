use tracing::{debug, info, instrument, warn};

use crate::{
	error::{check_max, Error, Result},
	helpers::*,
	interface::Interface,
	panel::*,
	pixel::{PixelFormat, RgbFormat},
	settings::*,
	system::{ColourEnhancement, DisplayControl},
};

/// Every register value of the bring-up sequence.
///
/// The [`Default`] is a common 240x320 module. With the `serde` feature this can be loaded from
/// a file, and missing fields take the default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case", default)
)]
pub struct PanelConfig {
	pub column: u16,
	pub row: u16,
	pub inversion: bool,
	pub gamma: GammaCurve,
	pub memory_access: MemoryAccessControl,
	pub rgb_format: RgbFormat,
	pub pixel_format: PixelFormat,
	pub brightness: u8,
	pub display_control: DisplayControl,
	pub colour_enhancement: ColourEnhancement,
	pub cabc_minimum_brightness: u8,
	pub ram: RamControl,
	pub rgb_interface: RgbInterfaceControl,
	pub porch: Porch,
	pub frame_rate_control: FrameRateControl,
	pub partial_mode: PartialModeControl,
	pub vghs: Vghs,
	pub vgls: Vgls,
	pub gate_timing: GateTiming,
	pub digital_gamma: bool,
	/// Volts.
	pub vcom: f32,
	pub lcm: LcmControl,
	pub vdv_vrh_source: VdvVrhSource,
	/// Volts.
	pub vrh: f32,
	/// Volts.
	pub vdv: f32,
	/// Volts.
	pub vcom_offset: f32,
	pub frame_inversion: InversionMode,
	pub frame_rate: FrameRate,
	pub cabc: CabcControl,
	pub pwm_frequency: PwmFrequency,
	pub avdd: Avdd,
	pub avcl: Avcl,
	pub vds: Vds,
	pub command_2: bool,
	pub positive_gamma: [u8; 14],
	pub negative_gamma: [u8; 14],
	/// 64 entries.
	pub digital_gamma_red: Vec<u8>,
	/// 64 entries.
	pub digital_gamma_blue: Vec<u8>,
	pub gate_lines: u16,
	/// Register value, up to 0x3F.
	pub first_scan_line: u8,
	pub gate_interlace: GateInterlace,
	pub gate_direction: GateScanDirection,
	pub spi2_data_lane: bool,
	pub spi2_command_table_2: bool,
	pub sbclk: SbclkDivider,
	pub stp14ck: Stp14ckDivider,
	pub equalize: EqualizeTime,
	pub program_mode: bool,
}

impl Default for PanelConfig {
	fn default() -> Self {
		let ramp: Vec<u8> = (0..64).map(|i| i * 4).collect();
		Self {
			column: 240,
			row: 320,
			inversion: true,
			gamma: GammaCurve::G2p2,
			memory_access: MemoryAccessControl::default(),
			rgb_format: RgbFormat::Rgb262k,
			pixel_format: PixelFormat::Bits16,
			brightness: 0xFF,
			display_control: DisplayControl::default(),
			colour_enhancement: ColourEnhancement::default(),
			cabc_minimum_brightness: 0,
			ram: RamControl::default(),
			rgb_interface: RgbInterfaceControl::default(),
			porch: Porch::default(),
			frame_rate_control: FrameRateControl::default(),
			partial_mode: PartialModeControl::default(),
			vghs: Vghs::V14p97,
			vgls: Vgls::Minus8p23,
			gate_timing: GateTiming::default(),
			digital_gamma: true,
			vcom: 1.625,
			lcm: LcmControl::default(),
			vdv_vrh_source: VdvVrhSource::Command,
			vrh: 4.8,
			vdv: 0.0,
			vcom_offset: 0.0,
			frame_inversion: InversionMode::Dot,
			frame_rate: FrameRate::Hz60,
			cabc: CabcControl::default(),
			pwm_frequency: PwmFrequency::Khz9p8,
			avdd: Avdd::V6p8,
			avcl: Avcl::Minus4p8,
			vds: Vds::V2p3,
			command_2: false,
			positive_gamma: [
				0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
			],
			negative_gamma: [
				0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
			],
			digital_gamma_red: ramp.clone(),
			digital_gamma_blue: ramp,
			gate_lines: 320,
			first_scan_line: 0,
			gate_interlace: GateInterlace::Interlaced,
			gate_direction: GateScanDirection::Ascending,
			spi2_data_lane: false,
			spi2_command_table_2: false,
			sbclk: SbclkDivider::Div3,
			stp14ck: Stp14ckDivider::Div6,
			equalize: EqualizeTime::default(),
			program_mode: false,
		}
	}
}

fn lut<'t>(what: &'static str, table: &'t [u8]) -> Result<&'t [u8; 64]> {
	table.try_into().map_err(|_| Error::Length {
		what,
		expected: 64,
		actual: table.len(),
	})
}

impl<I: Interface> crate::Driver<I> {
	/// Send the whole configuration sequence.
	///
	/// Every value is checked before anything is sent.
	#[instrument(level = "debug", skip(self, config))]
	pub fn configure(&mut self, config: &PanelConfig) -> Result<()> {
		self.ensure_init()?;
		config.rgb_interface.check()?;
		config.porch.check()?;
		config.frame_rate_control.check()?;
		config.gate_timing.check()?;
		config.equalize.check()?;
		check_max("first scan line", config.first_scan_line, 0x3F_u8)?;
		let vcom = vcom_to_register(config.vcom)?;
		let vrh = vrh_to_register(config.vrh)?;
		let vdv = vdv_to_register(config.vdv)?;
		let vcom_offset = vcom_offset_to_register(config.vcom_offset)?;
		let gate_lines = gate_lines_to_register(config.gate_lines)?;
		let red = lut("red digital gamma table", &config.digital_gamma_red)?;
		let blue = lut("blue digital gamma table", &config.digital_gamma_blue)?;

		self.set_column(config.column)?;
		self.set_row(config.row)?;

		self.sleep_out()?;
		self.idle_mode_off()?;
		self.normal_display_mode_on()?;
		if config.inversion {
			self.display_inversion_on()?;
		} else {
			self.display_inversion_off()?;
		}

		self.set_gamma(config.gamma)?;
		self.set_memory_data_access_control(config.memory_access)?;
		self.set_interface_pixel_format(config.rgb_format, config.pixel_format)?;
		self.set_display_brightness(config.brightness)?;
		self.set_display_control(config.display_control)?;
		self.set_colour_enhancement(config.colour_enhancement)?;
		self.set_cabc_minimum_brightness(config.cabc_minimum_brightness)?;
		self.set_ram_control(config.ram)?;
		self.set_rgb_interface_control(config.rgb_interface)?;
		self.set_porch(config.porch)?;
		self.set_frame_rate_control(config.frame_rate_control)?;
		self.set_partial_mode_control(config.partial_mode)?;
		self.set_gate_control(config.vghs, config.vgls)?;
		self.set_gate_on_timing_adjustment(config.gate_timing)?;
		self.set_digital_gamma(config.digital_gamma)?;
		self.set_vcoms(vcom)?;
		self.set_lcm_control(config.lcm)?;
		self.set_vdv_vrh_from(config.vdv_vrh_source)?;
		self.set_vrhs(vrh)?;
		self.set_vdv(vdv)?;
		self.set_vcoms_offset(vcom_offset)?;
		self.set_frame_rate(config.frame_inversion, config.frame_rate)?;
		self.set_cabc_control(config.cabc)?;
		self.set_pwm_frequency(config.pwm_frequency)?;
		self.set_power_control_1(config.avdd, config.avcl, config.vds)?;
		self.set_command_2_enable(config.command_2)?;
		self.set_positive_voltage_gamma_control(&config.positive_gamma)?;
		self.set_negative_voltage_gamma_control(&config.negative_gamma)?;
		self.set_digital_gamma_look_up_table_red(red)?;
		self.set_digital_gamma_look_up_table_blue(blue)?;
		self.set_gate(
			gate_lines,
			config.first_scan_line,
			config.gate_interlace,
			config.gate_direction,
		)?;
		self.set_spi2_enable(config.spi2_data_lane, config.spi2_command_table_2)?;
		self.set_power_control_2(config.sbclk, config.stp14ck)?;
		self.set_equalize_time_control(config.equalize)?;
		self.set_program_mode_enable(config.program_mode)?;

		debug!("configuration sent");
		Ok(())
	}

	/// Reset, configure, turn on and clear the display.
	///
	/// If any step fails the controller is put back to sleep and the driver is left
	/// uninitialised.
	#[instrument(level = "debug", skip(self, config))]
	pub fn basic_init(&mut self, config: &PanelConfig) -> Result<()> {
		self.init()?;
		if let Err(err) = self.bring_up(config) {
			warn!(%err, "bring-up failed, going back to sleep");
			if let Err(sleep) = self.deinit() {
				debug!(%sleep, "could not put the controller to sleep");
			}
			self.inited = false;
			return Err(err);
		}

		info!(column = self.column, row = self.row, format = %config.pixel_format, "display ready");
		Ok(())
	}

	fn bring_up(&mut self, config: &PanelConfig) -> Result<()> {
		self.configure(config)?;
		self.display_on()?;
		self.clear()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_tables() {
		let config = PanelConfig::default();
		assert_eq!(config.digital_gamma_red.len(), 64);
		assert_eq!(config.digital_gamma_red[63], 252);
		assert!(lut("red", &config.digital_gamma_red).is_ok());
		assert!(matches!(
			lut("red", &[0; 10]),
			Err(Error::Length {
				expected: 64,
				actual: 10,
				..
			})
		));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn partial_json() {
		let config: PanelConfig =
			serde_json::from_str(r#"{ "row": 240, "frame-rate": "hz50", "pixel-format": "bits18" }"#)
				.unwrap();
		assert_eq!(config.row, 240);
		assert_eq!(config.column, 240);
		assert_eq!(config.frame_rate, FrameRate::Hz50);
		assert_eq!(config.pixel_format, PixelFormat::Bits18);
		assert_eq!(config.vcom, 1.625);
	}
}
