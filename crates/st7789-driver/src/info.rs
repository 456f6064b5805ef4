/// Static facts about the controller and this driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Info {
	pub chip_name: &'static str,
	pub manufacturer_name: &'static str,
	pub interface: &'static str,
	pub supply_voltage_min_v: f32,
	pub supply_voltage_max_v: f32,
	pub max_current_ma: f32,
	pub temperature_min: f32,
	pub temperature_max: f32,
	/// Driver version, as major * 1000 + minor * 100.
	pub driver_version: u32,
}

/// Get the chip and driver information.
pub const fn info() -> Info {
	Info {
		chip_name: "Sitronix ST7789",
		manufacturer_name: "Sitronix",
		interface: "SPI",
		supply_voltage_min_v: 2.4,
		supply_voltage_max_v: 3.3,
		max_current_ma: 7.5,
		temperature_min: -30.0,
		temperature_max: 85.0,
		driver_version: 1000,
	}
}

impl Info {
	/// The driver version as `major.minor`.
	pub fn version(&self) -> String {
		format!(
			"{}.{}",
			self.driver_version / 1000,
			(self.driver_version % 1000) / 100
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_string() {
		assert_eq!(info().version(), "1.0");
		let mut other = info();
		other.driver_version = 2300;
		assert_eq!(other.version(), "2.3");
	}
}
