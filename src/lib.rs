//! Desk Indicator Display and LED Drivers
//!
//! Drivers for the output side of a desk occupancy indicator: a 128x32 or
//! 128x64 SSD1306 OLED on I2C and a chain of WS2812 RGB LEDs.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - In-memory framebuffer with built-in 8x8 font and QR rasterizer
//! - Paged (flipped) and single-transfer render paths
//! - WS2812 strip driver over any serial engine, `smart-leds` compatible
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use deskpico_core::{
//!     Builder, DEFAULT_ADDRESS, Dimensions, Display, I2cInterface, Indicator, LedStrip,
//!     PixelTransmitter,
//! };
//! use smart_leds::RGB8;
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct Pio;
//! # impl PixelTransmitter for Pio {
//! #     type Error = Infallible;
//! #     fn put_word(&mut self, _word: u32) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let dims = match Dimensions::new(128, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//! let mut display = match Display::new(interface, config, [0u8; 512]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! display.init();
//!
//! let strip = match LedStrip::new(Pio, [RGB8::default(); 8], &mut delay) {
//!     Ok(strip) => strip,
//!     Err(_) => return,
//! };
//!
//! let mut indicator = Indicator::new(display, strip);
//! let _ = indicator.update(true, &["TABLE HEIGHT", "150MM"], None);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// WS2812 colour encoding
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the drivers
pub mod error;
/// Built-in 8x8 font
pub mod font;
/// Paged monochrome framebuffer
pub mod framebuffer;
/// Display and LED strip composed into one indicator
pub mod indicator;
/// Hardware interface abstraction
pub mod interface;
/// QR matrix rasterization
pub mod qr;
/// WS2812 LED strip driver
pub mod strip;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::FrameBuffer;
pub use indicator::{Indicator, View};
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface, InterfaceError};
pub use qr::QrMatrix;
pub use strip::{LedStrip, PixelTransmitter, SpiTransmitter};
