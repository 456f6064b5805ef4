use bitvec::{array::BitArray, order::Msb0, BitArr};
use tracing::{debug, instrument};

use crate::error::{check_max, Error, Result};

/// Memory data access control (MADCTL) byte builder.
///
/// Bit indices are counted from the most significant bit: MY, MX, MV, ML, BGR, MH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryAccessControl(BitArr!(for 8, in u8, Msb0));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case")
)]
pub enum Vertical {
	TopToBottom,
	BottomToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(rename_all = "kebab-case")
)]
pub enum Horizontal {
	LeftToRight,
	RightToLeft,
}

impl MemoryAccessControl {
	/// Page address order (MY).
	pub fn row_order(mut self, direction: Vertical) -> Self {
		self.0.set(0, direction == Vertical::BottomToTop);
		self
	}

	/// Column address order (MX).
	pub fn col_order(mut self, direction: Horizontal) -> Self {
		self.0.set(1, direction == Horizontal::RightToLeft);
		self
	}

	/// Page/column order (MV) off.
	pub fn normal(mut self) -> Self {
		self.0.set(2, false);
		self
	}

	/// Page/column order (MV) on: rows and columns are exchanged.
	pub fn exchanged(mut self) -> Self {
		self.0.set(2, true);
		self
	}

	/// Vertical refresh order (aka Line Address Order).
	pub fn v_refresh(mut self, direction: Vertical) -> Self {
		self.0.set(3, direction == Vertical::BottomToTop);
		self
	}

	/// Horizontal refresh order (aka Data Latch Order).
	pub fn h_refresh(mut self, direction: Horizontal) -> Self {
		self.0.set(5, direction == Horizontal::RightToLeft);
		self
	}

	pub fn rgb(mut self) -> Self {
		self.0.set(4, false);
		self
	}

	pub fn bgr(mut self) -> Self {
		self.0.set(4, true);
		self
	}
}

impl From<MemoryAccessControl> for u8 {
	fn from(control: MemoryAccessControl) -> u8 {
		let arr: [u8; 1] = control.0.into_inner();
		arr[0]
	}
}

impl From<u8> for MemoryAccessControl {
	fn from(byte: u8) -> Self {
		Self(BitArray::new([byte]))
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for MemoryAccessControl {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_u8((*self).into())
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MemoryAccessControl {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		u8::deserialize(deserializer).map(Self::from)
	}
}

fn voltage_to_register(
	what: &'static str,
	volts: f32,
	base: f32,
	step: f32,
	max: u8,
) -> Result<u8> {
	let top = base + step * f32::from(max);
	if !(volts >= base - step / 2.0 && volts <= top + step / 2.0) {
		return Err(Error::VoltageOutOfRange {
			what,
			value: volts,
			min: base,
			max: top,
		});
	}

	let reg = ((volts - base) / step).round().clamp(0.0, f32::from(max)) as u8;
	debug!(what, volts, reg, "voltage to register");
	Ok(reg)
}

fn register_to_voltage(what: &'static str, reg: u8, base: f32, step: f32, max: u8) -> Result<f32> {
	check_max(what, reg, max)?;
	Ok(f32::from(reg) * step + base)
}

/// VCOM voltage to a [`Command::VcomSetting`](crate::Command::VcomSetting) value.
///
/// 0.1 V to 1.675 V in 25 mV steps.
#[instrument(level = "debug")]
pub fn vcom_to_register(volts: f32) -> Result<u8> {
	voltage_to_register("VCOM", volts, 0.1, 0.025, 0x3F)
}

/// Decode a VCOM register value to volts.
pub fn vcom_from_register(reg: u8) -> Result<f32> {
	register_to_voltage("VCOM", reg, 0.1, 0.025, 0x3F)
}

/// VRH voltage to a [`Command::VrhSetting`](crate::Command::VrhSetting) value.
///
/// 3.55 V to 5.5 V in 50 mV steps.
#[instrument(level = "debug")]
pub fn vrh_to_register(volts: f32) -> Result<u8> {
	voltage_to_register("VRH", volts, 3.55, 0.05, 0x27)
}

/// Decode a VRH register value to volts.
pub fn vrh_from_register(reg: u8) -> Result<f32> {
	register_to_voltage("VRH", reg, 3.55, 0.05, 0x27)
}

/// VDV voltage to a [`Command::VdvSetting`](crate::Command::VdvSetting) value.
///
/// -0.8 V to 0.775 V in 25 mV steps.
#[instrument(level = "debug")]
pub fn vdv_to_register(volts: f32) -> Result<u8> {
	voltage_to_register("VDV", volts, -0.8, 0.025, 0x3F)
}

/// Decode a VDV register value to volts.
pub fn vdv_from_register(reg: u8) -> Result<f32> {
	register_to_voltage("VDV", reg, -0.8, 0.025, 0x3F)
}

/// VCOM offset voltage to a [`Command::VcomOffset`](crate::Command::VcomOffset) value.
///
/// -0.8 V to 0.775 V in 25 mV steps.
#[instrument(level = "debug")]
pub fn vcom_offset_to_register(volts: f32) -> Result<u8> {
	voltage_to_register("VCOM offset", volts, -0.8, 0.025, 0x3F)
}

/// Decode a VCOM offset register value to volts.
pub fn vcom_offset_from_register(reg: u8) -> Result<f32> {
	register_to_voltage("VCOM offset", reg, -0.8, 0.025, 0x3F)
}

/// Number of gate lines to a [`Command::GateControl`](crate::Command::GateControl) value.
///
/// 8 to 320 lines, in steps of 8. Partial steps round down.
#[instrument(level = "debug")]
pub fn gate_lines_to_register(lines: u16) -> Result<u8> {
	if lines < 8 {
		return Err(Error::PanelSize {
			what: "gate lines",
			value: lines,
			max: 320,
		});
	}
	check_max("gate lines", lines, 320_u16)?;

	let reg = (lines / 8 - 1) as u8;
	debug!(lines, reg, "gate lines to register");
	Ok(reg)
}

/// Decode a gate line register value to a line count.
pub fn gate_lines_from_register(reg: u8) -> Result<u16> {
	check_max("gate lines", reg, 0x27_u8)?;
	Ok((u16::from(reg) + 1) * 8)
}
