use miette::Result;
use st7789_driver::{Driver, Font, Interface, PanelConfig};

use super::{attach, Backlight};
use crate::args::BasicAction;

pub fn run<I: Interface + Backlight>(
	lcd: &mut Driver<I>,
	config: &PanelConfig,
	action: BasicAction,
) -> Result<()> {
	if !matches!(action, BasicAction::Init) {
		attach(lcd, config)?;
	}

	match action {
		BasicAction::Init => {
			lcd.basic_init(config)?;
			lcd.interface_mut().backlight(true);
			println!("st7789: init success.");
		}
		BasicAction::Deinit => {
			lcd.deinit()?;
			lcd.interface_mut().backlight(false);
			println!("st7789: deinit st7789.");
		}
		BasicAction::Str { text, colour } => {
			lcd.clear()?;
			lcd.write_string(0, 0, &text, colour, Font::Font16)?;
			println!("st7789: {text}.");
		}
		BasicAction::DisplayOn => {
			lcd.display_on()?;
			lcd.interface_mut().backlight(true);
			println!("st7789: display on.");
		}
		BasicAction::DisplayOff => {
			lcd.display_off()?;
			lcd.interface_mut().backlight(false);
			println!("st7789: display off.");
		}
		BasicAction::Clear => {
			lcd.clear()?;
			println!("st7789: clear screen.");
		}
		BasicAction::Point { x, y, colour } => {
			lcd.draw_point(x, y, colour)?;
			println!("st7789: write point {x} {y} {colour}.");
		}
		BasicAction::Rect {
			left,
			top,
			right,
			bottom,
			colour,
		} => {
			lcd.fill_rect(left, top, right, bottom, colour)?;
			println!("st7789: draw rect {left} {top} {right} {bottom}.");
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::mock::Mock;

	fn sent(action: BasicAction) -> Mock {
		let mut lcd = Driver::new(Mock::default());
		run(&mut lcd, &PanelConfig::default(), action).unwrap();
		lcd.release()
	}

	#[test]
	fn init_resets_and_lights_up() {
		let mock = sent(BasicAction::Init);
		assert_eq!(mock.resets, 1);
		assert!(mock.backlight);
		assert_eq!(mock.commands[0], 0x11);
		assert_eq!(&mock.commands[mock.commands.len() - 4..], &[0x29, 0x2A, 0x2B, 0x2C]);
	}

	#[test]
	fn others_attach_without_reset() {
		let mock = sent(BasicAction::DisplayOff);
		assert_eq!(mock.resets, 0);
		assert_eq!(mock.commands, vec![0x28]);

		let mock = sent(BasicAction::Point {
			x: 1,
			y: 2,
			colour: 0xFFFF,
		});
		assert_eq!(mock.commands, vec![0x2A, 0x2B, 0x2C]);
		assert_eq!(mock.data_bytes, 4 + 4 + 2);

		let mock = sent(BasicAction::Deinit);
		assert_eq!(mock.commands, vec![0x10]);
	}

	#[test]
	fn bad_rect_is_refused() {
		let mut lcd = Driver::new(Mock::default());
		let res = run(
			&mut lcd,
			&PanelConfig::default(),
			BasicAction::Rect {
				left: 10,
				top: 0,
				right: 5,
				bottom: 10,
				colour: 0,
			},
		);
		assert!(res.is_err());
		assert!(lcd.release().commands.is_empty());
	}
}
