//! Built-in 8x8 glyph table
//!
//! Glyphs are stored column-major: each of the 8 bytes is one column, bit 0
//! at the top. That is the same layout as a framebuffer page, so a glyph is
//! blitted by copying its bytes straight into a page.
//!
//! Only upper-case letters and digits have glyphs. Everything else maps to
//! glyph 0, which is blank.
//!
//! ```
//! use deskpico_core::font::{glyph, glyph_index};
//!
//! assert_eq!(glyph_index('A'), 1);
//! assert_eq!(glyph_index('a'), 1);
//! assert_eq!(glyph_index('0'), 27);
//! assert_eq!(glyph_index('?'), 0);
//! assert_eq!(glyph(' '), &[0u8; 8]);
//! ```

/// Glyph width and height in pixels
pub const GLYPH_SIZE: u8 = 8;

/// Number of glyphs: blank, A-Z, 0-9
pub const GLYPH_COUNT: usize = 37;

/// Glyph bitmaps, indexed by [`glyph_index`]
pub static GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // blank
    [0x78, 0x14, 0x12, 0x11, 0x12, 0x14, 0x78, 0x00], // A
    [0x7f, 0x49, 0x49, 0x49, 0x49, 0x49, 0x7f, 0x00], // B
    [0x7e, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x00], // C
    [0x7f, 0x41, 0x41, 0x41, 0x41, 0x41, 0x7e, 0x00], // D
    [0x7f, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x00], // E
    [0x7f, 0x09, 0x09, 0x09, 0x09, 0x01, 0x01, 0x00], // F
    [0x7f, 0x41, 0x41, 0x41, 0x51, 0x51, 0x73, 0x00], // G
    [0x7f, 0x08, 0x08, 0x08, 0x08, 0x08, 0x7f, 0x00], // H
    [0x00, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x00, 0x00], // I
    [0x21, 0x41, 0x41, 0x3f, 0x01, 0x01, 0x01, 0x00], // J
    [0x00, 0x7f, 0x08, 0x08, 0x14, 0x22, 0x41, 0x00], // K
    [0x7f, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // L
    [0x7f, 0x02, 0x04, 0x08, 0x04, 0x02, 0x7f, 0x00], // M
    [0x7f, 0x02, 0x04, 0x08, 0x10, 0x20, 0x7f, 0x00], // N
    [0x3e, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3e, 0x00], // O
    [0x7f, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e, 0x00], // P
    [0x3e, 0x41, 0x41, 0x49, 0x51, 0x61, 0x7e, 0x00], // Q
    [0x7f, 0x11, 0x11, 0x11, 0x31, 0x51, 0x0e, 0x00], // R
    [0x46, 0x49, 0x49, 0x49, 0x49, 0x30, 0x00, 0x00], // S
    [0x01, 0x01, 0x01, 0x7f, 0x01, 0x01, 0x01, 0x00], // T
    [0x3f, 0x40, 0x40, 0x40, 0x40, 0x40, 0x3f, 0x00], // U
    [0x0f, 0x10, 0x20, 0x40, 0x20, 0x10, 0x0f, 0x00], // V
    [0x7f, 0x20, 0x10, 0x08, 0x10, 0x20, 0x7f, 0x00], // W
    [0x00, 0x41, 0x22, 0x14, 0x14, 0x22, 0x41, 0x00], // X
    [0x01, 0x02, 0x04, 0x78, 0x04, 0x02, 0x01, 0x00], // Y
    [0x41, 0x61, 0x59, 0x45, 0x43, 0x41, 0x00, 0x00], // Z
    [0x3e, 0x41, 0x41, 0x49, 0x41, 0x41, 0x3e, 0x00], // 0
    [0x00, 0x00, 0x42, 0x7f, 0x40, 0x00, 0x00, 0x00], // 1
    [0x30, 0x49, 0x49, 0x49, 0x49, 0x46, 0x00, 0x00], // 2
    [0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00], // 3
    [0x3f, 0x20, 0x20, 0x78, 0x20, 0x20, 0x00, 0x00], // 4
    [0x4f, 0x49, 0x49, 0x49, 0x49, 0x30, 0x00, 0x00], // 5
    [0x3f, 0x48, 0x48, 0x48, 0x48, 0x48, 0x30, 0x00], // 6
    [0x01, 0x01, 0x01, 0x61, 0x11, 0x09, 0x07, 0x00], // 7
    [0x36, 0x49, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00], // 8
    [0x06, 0x09, 0x09, 0x09, 0x09, 0x09, 0x7f, 0x00], // 9
];

/// Map a character to its slot in [`GLYPHS`]
///
/// Letters are case-folded. Unsupported characters map to 0 (blank).
pub fn glyph_index(c: char) -> usize {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => (c as usize - 'A' as usize) + 1,
        c @ '0'..='9' => (c as usize - '0' as usize) + 27,
        _ => 0,
    }
}

/// Bitmap for a character
pub fn glyph(c: char) -> &'static [u8; 8] {
    &GLYPHS[glyph_index(c)]
}
