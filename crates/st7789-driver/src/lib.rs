//! A driver for the Sitronix ST7789 TFT LCD controller over SPI.
//!
//! The [`Driver`] wraps anything implementing [`Interface`]: [`SpiInterface`] for any
//! [`embedded_hal`] SPI device and pins, or (with the `rpi` feature, on Linux) `RpiInterface`
//! for a display wired straight to a Raspberry Pi.
//!
//! Every controller command has a method that checks and encodes its parameters. On top of that
//! there's a framebuffer layer (clear, rectangles, points, pictures, text) in whichever pixel
//! format was last set, and an implementation of [`embedded_graphics`]' traits.
//!
//! # Example
//!
//! ```no_run
//! # use st7789_driver::{Driver, Font, Interface, PanelConfig, Result};
//! # fn example(interface: impl Interface) -> Result<()> {
//! let mut lcd = Driver::new(interface);
//! lcd.basic_init(&PanelConfig::default())?;
//! lcd.fill_rect(0, 0, 100, 100, 0xF800)?;
//! lcd.write_string(0, 150, "hello", 0xFFFF, Font::Font16)?;
//! lcd.deinit()?;
//! # Ok(()) }
//! ```

#[doc(inline)]
pub use basic::PanelConfig;

#[doc(inline)]
pub use commands::Command;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use graphics::{MAX_COLUMN, MAX_ROW};

#[doc(inline)]
pub use helpers::*;

#[doc(inline)]
pub use info::{info, Info};

#[doc(inline)]
pub use interface::{Interface, SpiInterface};

#[doc(inline)]
pub use io::*;

#[doc(inline)]
pub use panel::*;

#[doc(inline)]
pub use pixel::{PixelFormat, RgbFormat};

#[cfg(all(feature = "rpi", target_os = "linux"))]
#[doc(inline)]
pub use rpi::{DriverArgs, RpiInterface};

#[doc(inline)]
pub use settings::*;

#[doc(inline)]
pub use system::{ColourEnhancement, DisplayControl, MAX_ADDRESS};

#[doc(inline)]
pub use text::Font;

mod basic;
mod buffer;
mod commands;
mod error;
mod graphics;
mod helpers;
mod info;
mod interface;
mod io;
mod panel;
mod pixel;
#[cfg(all(feature = "rpi", target_os = "linux"))]
mod rpi;
mod settings;
mod system;
mod text;
