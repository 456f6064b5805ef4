use miette::{IntoDiagnostic, Result};
use st7789_driver::Info;

use crate::args::WiringArgs;

pub fn info(json: bool) -> Result<()> {
	let info = st7789_driver::info();
	if json {
		println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
	} else {
		for line in info_lines(&info) {
			println!("{line}");
		}
	}
	Ok(())
}

fn info_lines(info: &Info) -> Vec<String> {
	vec![
		format!("st7789: chip is {}.", info.chip_name),
		format!("st7789: manufacturer is {}.", info.manufacturer_name),
		format!("st7789: interface is {}.", info.interface),
		format!("st7789: driver version is {}.", info.version()),
		format!("st7789: min supply voltage is {:.1}V.", info.supply_voltage_min_v),
		format!("st7789: max supply voltage is {:.1}V.", info.supply_voltage_max_v),
		format!("st7789: max current is {:.2}mA.", info.max_current_ma),
		format!("st7789: max temperature is {:.1}C.", info.temperature_max),
		format!("st7789: min temperature is {:.1}C.", info.temperature_min),
	]
}

pub fn pins(wiring: &WiringArgs) {
	println!("st7789: SCLK, MOSI and CE{} on SPI{}.", wiring.ce, wiring.spi);
	println!("st7789: SPI clock is {} Hz.", wiring.frequency);
	println!("st7789: data/command on GPIO {}.", wiring.dc);
	println!("st7789: reset on GPIO {}.", wiring.reset);
	println!("st7789: backlight on GPIO {}.", wiring.backlight);
}
