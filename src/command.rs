//! SSD1306 command definitions
//!
//! Opcodes and control bytes used to drive an SSD1306-class OLED controller
//! over I2C. Every transfer starts with a control byte telling the controller
//! how to interpret the rest of the transfer:
//!
//! - [`CONTROL_COMMAND`] (`0x80`) precedes a single command byte.
//! - [`CONTROL_DATA`] (`0x40`) precedes a run of GDDRAM data bytes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deskpico_core::{command, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let mut interface = Bus;
//! // Turn the panel off, then on again
//! let _ = interface.send_command(command::DISPLAY_OFF);
//! let _ = interface.send_command(command::DISPLAY_ON);
//! ```

// Control bytes

/// Control byte for a single command transfer (Co = 1, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte for a data transfer (Co = 0, D/C# = 1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control (0x81)
///
/// Followed by one byte, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Output follows GDDRAM (as opposed to 0xA5, entire display on).
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;

/// Normal display (0xA6), a set bit lights a pixel
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display (0xA7), a cleared bit lights a pixel
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling

/// Deactivate scroll (0x2E)
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

// Addressing

/// Set memory addressing mode (0x20)
///
/// Followed by one byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode value for [`SET_MEMORY_MODE`]
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address range (0x21)
///
/// Followed by two bytes: start column, end column.
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address range (0x22)
///
/// Followed by two bytes: start page, end page.
pub const SET_PAGE_ADDRESS: u8 = 0x22;

/// Page start address for page addressing mode (0xB0 | page)
pub const SET_PAGE_START: u8 = 0xB0;

/// Lower nibble of the column start address for page addressing mode (0x00 | nibble)
pub const SET_LOWER_COLUMN: u8 = 0x00;

/// Upper nibble of the column start address for page addressing mode (0x10 | nibble)
pub const SET_HIGHER_COLUMN: u8 = 0x10;

// Hardware configuration

/// Set display start line (0x40 | line)
pub const SET_START_LINE: u8 = 0x40;

/// Segment re-map (0xA0 | remap)
///
/// OR with 0x01 to map column 127 to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Followed by one byte: number of rows - 1.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction (0xC0 | direction)
///
/// 0xC0 scans COM0 to COM[N-1], 0xC8 scans in reverse.
pub const SET_COM_SCAN_DIRECTION: u8 = 0xC0;

/// Set display offset (0xD3)
///
/// Followed by one byte: vertical shift by COM.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by one byte, 0x02 for 128x32 panels and 0x12 for 128x64 panels.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme

/// Set display clock divide ratio / oscillator frequency (0xD5)
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Followed by one byte: 0x14 enables the internal charge pump.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Value for [`SET_CHARGE_PUMP`] that enables the pump
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
