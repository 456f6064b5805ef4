/// LCD controller commands.
///
/// This is the full ST7789 command set: the system function commands (table 1) and the panel
/// function commands (table 2). Descriptions are derived from the ST7789 datasheet.
///
/// Most of these have a typed method on [`Driver`](crate::Driver) that validates and encodes
/// the parameters; use [`Driver::write_cmd()`](crate::Driver::write_cmd) to send one raw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
	/// No-op (NOP).
	///
	/// This command does nothing, and can be used to terminate a data stream early.
	Nop = 0x00,

	/// Software reset (SWRESET).
	///
	/// Resets the controller registers to their defaults. The controller needs 5 ms before
	/// accepting new commands, and 120 ms if it was sleeping.
	SoftwareReset = 0x01,

	/// Sleep in (SLPIN).
	///
	/// Enters the minimum power consumption mode: the DC/DC converter, internal oscillator and
	/// panel scanning are stopped.
	SleepIn = 0x10,

	/// Sleep out (SLPOUT).
	SleepOut = 0x11,

	/// Partial display mode on (PTLON).
	///
	/// The area is set with [`Command::PartialArea`].
	PartialModeOn = 0x12,

	/// Normal display mode on (NORON).
	NormalModeOn = 0x13,

	/// Display inversion off (INVOFF).
	InversionOff = 0x20,

	/// Display inversion on (INVON).
	InversionOn = 0x21,

	/// Gamma curve select (GAMSET).
	///
	/// 1 byte, one bit per curve:
	/// - 0x01: gamma 2.2
	/// - 0x02: gamma 1.8
	/// - 0x04: gamma 2.5
	/// - 0x08: gamma 1.0
	GammaSet = 0x26,

	/// Display off (DISPOFF).
	///
	/// The frame memory is not shown, but is retained and can still be written to.
	DisplayOff = 0x28,

	/// Display on (DISPON).
	DisplayOn = 0x29,

	/// Column address set (CASET).
	///
	/// 4 bytes: start column (u16 BE), end column (u16 BE).
	ColumnAddressSet = 0x2A,

	/// Row address set (RASET).
	///
	/// 4 bytes: start row (u16 BE), end row (u16 BE).
	RowAddressSet = 0x2B,

	/// Memory write (RAMWR).
	///
	/// Followed by pixel data, filling the window set with CASET/RASET from the start.
	MemoryWrite = 0x2C,

	/// Partial area (PTLAR).
	///
	/// 4 bytes: start row (u16 BE), end row (u16 BE).
	PartialArea = 0x30,

	/// Vertical scrolling definition (VSCRDEF).
	///
	/// 6 bytes: top fixed area, vertical scrolling area, bottom fixed area (all u16 BE, in
	/// lines). The three should add up to 320.
	VerticalScrollingDefinition = 0x33,

	/// Tearing effect line off (TEOFF).
	TearingEffectOff = 0x34,

	/// Tearing effect line on (TEON).
	///
	/// 1 byte: 0 for V-blanking only, 1 for V-blanking and H-blanking.
	TearingEffectOn = 0x35,

	/// Memory data access control (MADCTL).
	///
	/// 6 bits: MY, MX, MV, ML, BGR, MH.
	/// - MY: row address order (0=ttb, 1=btt)
	/// - MX: column address order (0=ltr, 1=rtl)
	/// - MV: row/column order (0=normal, 1=reverse)
	/// - ML: vertical refresh order (0=ttb, 1=btt)
	/// - BGR: RGB/BGR order (0=RGB, 1=BGR)
	/// - MH: horizontal refresh order (0=ltr, 1=rtl)
	///
	/// Use [`MemoryAccessControl`](crate::MemoryAccessControl) to build this.
	MemoryAccessControl = 0x36,

	/// Vertical scroll start address (VSCRSADD).
	///
	/// 2 bytes: the line in frame memory written as the first line of the scrolling area.
	VerticalScrollStartAddress = 0x37,

	/// Idle mode off (IDMOFF).
	IdleModeOff = 0x38,

	/// Idle mode on (IDMON).
	///
	/// Reduced colour depth: only the MSB of each channel is used, for 8 colours.
	IdleModeOn = 0x39,

	/// Interface pixel format (COLMOD).
	///
	/// 2 nibbles:
	/// - RGB interface colour format:
	///   - 0b0101: 65K
	///   - 0b0110: 262K
	/// - control interface colour format:
	///   - 0b0011: 12 bit/pixel
	///   - 0b0101: 16 bit/pixel
	///   - 0b0110: 18 bit/pixel
	InterfacePixelFormat = 0x3A,

	/// Memory write continue (RAMWRC).
	///
	/// Like [`Command::MemoryWrite`], but resumes from where the last write stopped.
	MemoryWriteContinue = 0x3C,

	/// Set tear scanline (TESCAN).
	///
	/// 2 bytes: the line (u16 BE) at which the tearing effect signal fires.
	TearScanline = 0x44,

	/// Write display brightness (WRDISBV).
	DisplayBrightness = 0x51,

	/// Write CTRL display (WRCTRLD).
	///
	/// 3 bits: brightness control block (bit 5), display dimming (bit 3), backlight (bit 2).
	DisplayControl = 0x53,

	/// Write content adaptive brightness control and colour enhancement (WRCACE).
	///
	/// 1 byte: enhancement on (bit 7), level (bits 5-4), CABC mode (bits 1-0).
	ColourEnhancement = 0x55,

	/// Write CABC minimum brightness (WRCABCMB).
	CabcMinimumBrightness = 0x5E,

	/// RAM control (RAMCTRL).
	///
	/// 2 bytes:
	/// - RAM access (bit 4), display operation mode (bits 1-0)
	/// - frame type (bits 5-4), endian (bit 3), RGB bus width (bit 2), pixel type (bits 1-0)
	RamControl = 0xB0,

	/// RGB interface control (RGBCTRL).
	///
	/// 3 bytes:
	/// - direct RGB mode (bit 7), RGB enable mode (bits 6-5), VSPL, HSPL, DPL, EPL (bits 3-0)
	/// - vertical back porch (7 bits)
	/// - horizontal back porch (5 bits)
	RgbInterfaceControl = 0xB1,

	/// Porch settings (PORCTRL).
	///
	/// Porch is the time around the sync pulse. The front porch is padding before the sync pulse,
	/// and the back porch is padding after the sync pulse, before the start of the active pixels.
	///
	/// 5 bytes:
	/// - back porch (7 bits)
	/// - front porch (7 bits)
	/// - enable separate porch control (1 bit)
	/// - idle mode porch (2 nibbles):
	///   - back porch (4 bits)
	///   - front porch (4 bits)
	/// - partial mode porch (2 nibbles):
	///   - back porch (4 bits)
	///   - front porch (4 bits)
	///
	/// Each setting has a minimum value of 1.
	PorchSettings = 0xB2,

	/// Frame rate control 1, for partial and idle modes (FRCTRL1).
	///
	/// 3 bytes:
	/// - separate frame rate control (bit 4), divider (bits 1-0)
	/// - idle mode inversion (bits 7-5), idle mode frame rate (bits 4-0)
	/// - partial mode inversion (bits 7-5), partial mode frame rate (bits 4-0)
	FrameRateControl1 = 0xB3,

	/// Partial mode control (PARCTRL).
	///
	/// 1 byte: non-display source output level (bit 7), non-display area scan mode (bit 4),
	/// non-display frame frequency (bits 3-0).
	PartialModeControl = 0xB5,

	/// Gate voltage control (GCTRL).
	///
	/// Voltage levels for the gate driver.
	///
	/// 2 nibbles:
	/// - VGH: gate high voltage level (4 bits)
	/// - VGL: gate low voltage level (4 bits)
	///
	/// Use [`Vghs::from_millivolts()`](crate::Vghs::from_millivolts) and
	/// [`Vgls::from_millivolts()`](crate::Vgls::from_millivolts) to pick these.
	GateVoltages = 0xB7,

	/// Gate on timing adjustment (GTADJ).
	///
	/// 4 bytes: 0x2A, 0x2B, gate on timing (6 bits), gate off timing for RGB interface and gate
	/// off timing (2 nibbles).
	GateTiming = 0xB8,

	/// Digital gamma enable (DGMEN).
	///
	/// 1 bit, at bit 2.
	DigitalGammaEnable = 0xBA,

	/// VCOM setting (VCOMS).
	///
	/// 1 byte:
	/// - VCOMS: VCOM selection (6 bits)
	///
	/// VCOM is the common voltage level for the display. It's used to set the zero reference for
	/// the pixel voltages. Use [`vcom_to_register()`](crate::vcom_to_register).
	VcomSetting = 0xBB,

	/// LCM control (LCMCTRL).
	///
	/// 7 bits: XMY, XBGR, XINV, XMX, XMH, XMV, XGS.
	///
	/// These are XOR-ed with the corresponding MADCTL bits (and the inversion and gate scan
	/// settings), so they can correct for how a particular panel is wired.
	LcmControl = 0xC0,

	/// ID code setting (IDSET).
	IdCodeSetting = 0xC1,

	/// VDV and VRH command enable (VDVVRHEN).
	///
	/// 2 bytes: source (0 = NVM, 1 = command), then 0xFF.
	VdvVrhEnable = 0xC2,

	/// VRH set (VRHS).
	///
	/// Up to 0x27. Use [`vrh_to_register()`](crate::vrh_to_register).
	VrhSetting = 0xC3,

	/// VDV set (VDVS).
	///
	/// Up to 0x3F. Use [`vdv_to_register()`](crate::vdv_to_register).
	VdvSetting = 0xC4,

	/// VCOM offset set (VCMOFSET).
	///
	/// Up to 0x3F. Use [`vcom_offset_to_register()`](crate::vcom_offset_to_register).
	VcomOffset = 0xC5,

	/// Frame rate control in normal mode (FRCTRL2).
	///
	/// 1 byte:
	/// - inversion selection (3 bits)
	/// - frame rate (5 bits)
	///
	/// Use [`FrameRate::from_hz()`](crate::FrameRate::from_hz) for the rate.
	FrameRateControl2 = 0xC6,

	/// CABC control (CABCCTRL).
	///
	/// 4 bits: LED on (bit 3), PWM initial level (bit 2), PWM fix (bit 1), PWM polarity (bit 0).
	CabcControl = 0xC7,

	/// PWM frequency selection (PWMFRSEL).
	PwmFrequency = 0xCC,

	/// Power control 1 (PWCTRL1).
	///
	/// 2 bytes: 0xA4, then AVDD (bits 7-6), AVCL (bits 5-4), VDS (bits 1-0).
	PowerControl1 = 0xD0,

	/// Enable VAP/VAN signal output (VAPVANEN).
	VapVanEnable = 0xD2,

	/// Command 2 enable (CMD2EN).
	///
	/// 4 bytes: 0x5A, 0x69, 0x02, enable.
	Command2Enable = 0xDF,

	/// Positive voltage gamma control (PVGAMCTRL).
	///
	/// 14 bytes.
	PositiveGammaControl = 0xE0,

	/// Negative voltage gamma control (NVGAMCTRL).
	///
	/// 14 bytes.
	NegativeGammaControl = 0xE1,

	/// Digital gamma look-up table for red (DGMLUTR).
	///
	/// 64 bytes.
	DigitalGammaRed = 0xE2,

	/// Digital gamma look-up table for blue (DGMLUTB).
	///
	/// 64 bytes.
	DigitalGammaBlue = 0xE3,

	/// Gate control (GATECTRL).
	///
	/// 3 bytes:
	/// - gate line number, as `lines / 8 - 1` (6 bits)
	/// - first scan line number (6 bits)
	/// - 0x10, gate scan mode (bit 2), gate scan direction (bit 0)
	GateControl = 0xE4,

	/// SPI2 enable (SPI2EN).
	Spi2Enable = 0xE7,

	/// Power control 2 (PWCTRL2).
	///
	/// 2 nibbles: SBCLK divider, STP14CK divider.
	PowerControl2 = 0xE8,

	/// Equalize time control (EQCTRL).
	///
	/// 3 bytes: source equalize time (5 bits), source pre-drive time (5 bits), gate equalize
	/// time (4 bits).
	EqualizeTimeControl = 0xE9,

	/// Program mode control (PROMCTRL).
	ProgramModeControl = 0xEC,

	/// Program mode enable (PROMEN).
	///
	/// 4 bytes: 0x5A, 0x69, 0xEE, enable (bit 2).
	ProgramModeEnable = 0xFA,

	/// NVM setting (NVMSET).
	///
	/// 2 bytes: address, data.
	NvmSetting = 0xFC,

	/// Program action (PROMACT).
	///
	/// 2 bytes: 0x29, 0xA5.
	ProgramAction = 0xFE,
}

impl From<Command> for u8 {
	fn from(command: Command) -> u8 {
		command as u8
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opcodes() {
		assert_eq!(u8::from(Command::Nop), 0x00);
		assert_eq!(u8::from(Command::SleepOut), 0x11);
		assert_eq!(u8::from(Command::MemoryWrite), 0x2C);
		assert_eq!(u8::from(Command::InterfacePixelFormat), 0x3A);
		assert_eq!(u8::from(Command::FrameRateControl2), 0xC6);
		assert_eq!(u8::from(Command::ProgramAction), 0xFE);
	}
}
