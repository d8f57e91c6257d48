//! Colour encoding for WS2812-class LEDs
//!
//! The LEDs expect each colour as 24 bits in **G, R, B** order, most
//! significant bit first. The serial engines this crate targets shift out
//! the top 24 bits of a 32-bit word, so the packed colour is left-aligned and
//! the low byte is padding.
//!
//! | Bits  | 31..24 | 23..16 | 15..8 | 7..0    |
//! |-------|--------|--------|-------|---------|
//! | Word  | green  | red    | blue  | padding |
//!
//! ## Example
//!
//! ```
//! use deskpico_core::color::{grb, wire_word};
//! use smart_leds::RGB8;
//!
//! let orange = RGB8::new(0xFF, 0x80, 0x00);
//! assert_eq!(grb(orange), 0x80_FF_00);
//! assert_eq!(wire_word(orange), 0x80_FF_00_00);
//! ```

use smart_leds::RGB8;

/// All channels off
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Pack a colour as a right-aligned 24-bit GRB value
pub fn grb(color: RGB8) -> u32 {
    (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b)
}

/// Pack a colour as the 32-bit word pushed to the serial engine
///
/// The GRB value occupies bits 31..8, bits 7..0 are zero.
pub fn wire_word(color: RGB8) -> u32 {
    grb(color) << 8
}
