//! Core display operations
//!
//! [`Display`] owns the framebuffer and the link to the controller. Drawing
//! calls only touch the framebuffer; nothing reaches the panel until
//! [`render`](Display::render) or [`render_raw`](Display::render_raw).
//!
//! ## Render paths
//!
//! The two render paths are deliberately different and are not
//! interchangeable:
//!
//! - [`render`](Display::render) sends one page at a time with page
//!   addressing, and sends the pages **vertically flipped** (page `p` of the
//!   panel receives framebuffer page `pages - 1 - p`) to match the mounting
//!   of the panel.
//! - [`render_raw`](Display::render_raw) sets the column/page window once
//!   and streams the whole framebuffer in natural order in a single data
//!   transfer. It is faster but applies **no** flip.
//!
//! ## Errors
//!
//! Drawing and rendering never fail from the caller's point of view. Every
//! transfer of a sequence is attempted even after an earlier one failed. Each
//! failure is logged as a warning and the most recent one is kept until
//! [`take_fault`](Display::take_fault).
//!
//! ## Example
//!
//! ```rust,no_run
//! use deskpico_core::{Builder, Dimensions, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
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
//! let dims = match Dimensions::new(128, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(MockI2c, 0x3C);
//! let mut display = match Display::new(interface, config, [0u8; 512]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.init();
//! display.clear();
//! display.write_text(5, 0, "TABLE HEIGHT");
//! display.write_text(5, 8, "150MM");
//! display.render();
//!
//! if let Some(fault) = display.take_fault() {
//!     // The I2C bus reported an error during init or render
//!     let _ = fault;
//! }
//! ```

use log::{debug, trace, warn};

use crate::command::{
    CHARGE_PUMP_ENABLE, DEACTIVATE_SCROLL, DISPLAY_OFF, DISPLAY_ON, ENTIRE_DISPLAY_RESUME,
    INVERT_DISPLAY, MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, SET_CHARGE_PUMP, SET_CLOCK_DIVIDE,
    SET_COLUMN_ADDRESS, SET_COM_PINS, SET_COM_SCAN_DIRECTION, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_HIGHER_COLUMN, SET_LOWER_COLUMN, SET_MEMORY_MODE, SET_MUX_RATIO, SET_PAGE_ADDRESS,
    SET_PAGE_START, SET_PRECHARGE, SET_SEGMENT_REMAP, SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::font::{GLYPH_SIZE, glyph};
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;
use crate::qr::{QrMatrix, draw_qr_code};

/// SSD1306 display driver with an owned framebuffer
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage, exactly `width * height / 8` bytes
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixel storage
    framebuffer: FrameBuffer<B>,
    /// Most recent transfer failure not yet collected
    fault: Option<I::Error>,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// The buffer is cleared, so the first render shows a blank screen. No
    /// bus traffic is generated; call [`init`](Self::init) before rendering.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferSize` if `buffer` is not exactly
    /// `config.dimensions.buffer_size()` bytes.
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, Error<I::Error>> {
        let mut framebuffer =
            FrameBuffer::new(config.dimensions, buffer).map_err(Error::widen)?;
        framebuffer.clear();
        Ok(Self {
            interface,
            config,
            framebuffer,
            fault: None,
        })
    }

    /// Send the controller initialisation sequence and switch the panel on
    pub fn init(&mut self) {
        let dims = self.config.dimensions;
        debug!("initialising {}x{} display", dims.width, dims.height);
        let config = &self.config;
        let sequence = [
            DISPLAY_OFF,
            SET_MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            SET_START_LINE,
            // Column 127 mapped to SEG0
            SET_SEGMENT_REMAP | 0x01,
            SET_MUX_RATIO,
            config.dimensions.height - 1,
            SET_COM_SCAN_DIRECTION,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_COM_PINS,
            config.com_pins,
            SET_CLOCK_DIVIDE,
            config.clock_divide,
            SET_PRECHARGE,
            config.precharge,
            SET_VCOM_DESELECT,
            config.vcom_deselect,
            SET_CONTRAST,
            config.contrast,
            ENTIRE_DISPLAY_RESUME,
            NORMAL_DISPLAY,
            SET_CHARGE_PUMP,
            CHARGE_PUMP_ENABLE,
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
        ];
        self.write_commands(&sequence);
    }

    /// Turn every pixel of the framebuffer off
    ///
    /// Does not transmit; the panel changes on the next render.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set or clear one pixel, ignoring off-screen coordinates
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.framebuffer.set_pixel(x, y, on);
    }

    /// Blit one 8x8 glyph with its top-left corner at `(x, y)`
    ///
    /// The glyph is dropped entirely unless it fits on screen
    /// (`0 <= x <= width - 8`, `0 <= y <= height - 8`). Letters are
    /// case-folded; characters without a glyph render blank.
    ///
    /// `y` must be a multiple of 8: glyph columns are copied as whole page
    /// bytes. This is checked with a debug assertion.
    pub fn write_char(&mut self, x: i32, y: i32, c: char) {
        let width = i32::from(self.framebuffer.width());
        let height = i32::from(self.framebuffer.height());
        let size = i32::from(GLYPH_SIZE);
        if x < 0 || y < 0 || x > width - size || y > height - size {
            return;
        }
        debug_assert!(y % 8 == 0, "write_char: y = {y} is not page aligned");

        let start = (y / 8) as usize * width as usize + x as usize;
        let end = start + GLYPH_SIZE as usize;
        if let Some(columns) = self.framebuffer.as_bytes_mut().get_mut(start..end) {
            columns.copy_from_slice(glyph(c));
        }
    }

    /// Write `text` left to right starting at `(x, y)`, 8 pixels per glyph
    ///
    /// There is no wrapping: glyphs that would cross the right edge are
    /// dropped one by one.
    pub fn write_text(&mut self, x: i32, y: i32, text: &str) {
        let mut cursor = x;
        for c in text.chars() {
            self.write_char(cursor, y, c);
            cursor = cursor.saturating_add(i32::from(GLYPH_SIZE));
        }
    }

    /// Rasterize a QR matrix with its top-left module at `(x0, y0)`
    ///
    /// See [`qr`](crate::qr) for the module layout.
    pub fn draw_qr_code<M>(&mut self, x0: i32, y0: i32, matrix: &M, scale: u8)
    where
        M: QrMatrix + ?Sized,
    {
        draw_qr_code(&mut self.framebuffer, x0, y0, matrix, scale);
    }

    /// Send the framebuffer page by page, vertically flipped
    ///
    /// For each panel page `p` this sends the page address commands followed
    /// by framebuffer page `pages - 1 - p` as one data transfer.
    pub fn render(&mut self) {
        let pages = self.framebuffer.pages();
        trace!("render: {} pages", pages);
        for page in 0..pages {
            let flipped = pages - 1 - page;
            self.write_commands(&[SET_PAGE_START + page, SET_LOWER_COLUMN, SET_HIGHER_COLUMN]);
            if let Some(bytes) = self.framebuffer.page(flipped) {
                let result = self.interface.send_data(bytes);
                self.record(result);
            }
        }
    }

    /// Send the whole framebuffer in one data transfer, unflipped
    ///
    /// Sets the column window to `0..width` and the page window to
    /// `0..pages`, then streams the buffer in natural page order.
    pub fn render_raw(&mut self) {
        let last_column = self.framebuffer.width() - 1;
        let last_page = self.framebuffer.pages() - 1;
        trace!("render_raw: {} bytes", self.framebuffer.as_bytes().len());
        self.write_commands(&[
            SET_COLUMN_ADDRESS,
            0,
            last_column,
            SET_PAGE_ADDRESS,
            0,
            last_page,
        ]);
        let result = self.interface.send_data(self.framebuffer.as_bytes());
        self.record(result);
    }

    /// Switch between inverse and normal display
    ///
    /// This is a controller setting; the framebuffer is unchanged.
    pub fn invert(&mut self, on: bool) {
        let command = if on { INVERT_DISPLAY } else { NORMAL_DISPLAY };
        self.send_command(command);
    }

    /// Send a single command byte
    pub fn send_command(&mut self, command: u8) {
        let result = self.interface.send_command(command);
        self.record(result);
    }

    /// Send command bytes in order, one transfer each
    ///
    /// A failed transfer does not stop the remaining ones.
    pub fn send_commands(&mut self, commands: &[u8]) {
        self.write_commands(commands);
    }

    /// Take the most recent transfer error, if any
    pub fn take_fault(&mut self) -> Option<I::Error> {
        self.fault.take()
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the interface for bus-level operations
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Read-only view of the framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.framebuffer
    }

    /// Release the interface and the framebuffer storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.framebuffer.release())
    }

    #[cfg(any(test, feature = "graphics"))]
    pub(crate) fn framebuffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.framebuffer
    }

    fn write_commands(&mut self, commands: &[u8]) {
        for &command in commands {
            let result = self.interface.send_command(command);
            self.record(result);
        }
    }

    fn record(&mut self, result: Result<(), I::Error>) {
        if let Err(e) = result {
            warn!("display transfer failed: {:?}", e);
            self.fault = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::GLYPHS;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    enum Transfer {
        Command(u8),
        Data(Vec<u8>),
    }

    /// Carries the index of the failed attempt
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError(usize);

    /// Records successful transfers; attempts listed in `fail_on` fail once
    #[derive(Debug, Default)]
    struct MockInterface {
        transfers: Vec<Transfer>,
        attempts: usize,
        fail_on: Vec<usize>,
    }

    impl MockInterface {
        fn check(&mut self) -> Result<(), MockError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on.contains(&attempt) {
                return Err(MockError(attempt));
            }
            Ok(())
        }

        fn commands(&self) -> Vec<u8> {
            self.transfers
                .iter()
                .filter_map(|t| match t {
                    Transfer::Command(c) => Some(*c),
                    Transfer::Data(_) => None,
                })
                .collect()
        }

        fn data(&self) -> Vec<Vec<u8>> {
            self.transfers
                .iter()
                .filter_map(|t| match t {
                    Transfer::Data(d) => Some(d.clone()),
                    Transfer::Command(_) => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.check()?;
            self.transfers.push(Transfer::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.check()?;
            self.transfers.push(Transfer::Data(data.to_vec()));
            Ok(())
        }
    }

    fn test_display(width: u8, height: u8) -> Display<MockInterface, Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        let config = Builder::new().dimensions(dims).build().unwrap();
        Display::new(
            MockInterface::default(),
            config,
            alloc::vec![0u8; dims.buffer_size()],
        )
        .unwrap()
    }

    /// Give every page a distinct, position-dependent pattern
    fn fill_pattern(display: &mut Display<MockInterface, Vec<u8>>) {
        for (i, byte) in display.framebuffer_mut().as_bytes_mut().iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(7) ^ (i / 128) as u8;
        }
    }

    #[test]
    fn test_new_rejects_wrong_buffer_size() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        let result = Display::new(MockInterface::default(), config, [0u8; 1024]);
        assert!(matches!(
            result,
            Err(Error::BufferSize {
                required: 512,
                provided: 1024
            })
        ));
    }

    #[test]
    fn test_init_sequence_128x32() {
        let mut display = test_display(128, 32);
        display.init();
        assert_eq!(
            display.interface.commands(),
            [
                0xAE, 0x20, 0x00, 0x40, 0xA1, 0xA8, 0x1F, 0xC0, 0xD3, 0x00, 0xDA, 0x02, 0xD5,
                0x80, 0xD9, 0xF1, 0xDB, 0x30, 0x81, 0xFF, 0xA4, 0xA6, 0x8D, 0x14, 0x2E, 0xAF,
            ]
        );
        assert!(display.interface.data().is_empty());
        assert!(display.take_fault().is_none());
    }

    #[test]
    fn test_init_sequence_128x64_geometry() {
        let mut display = test_display(128, 64);
        display.init();
        let commands = display.interface.commands();
        assert_eq!(&commands[5..7], &[0xA8, 0x3F]);
        assert_eq!(&commands[10..12], &[0xDA, 0x12]);
    }

    #[test]
    fn test_clear_then_render_sends_zero_pages() {
        let mut display = test_display(128, 32);
        fill_pattern(&mut display);
        display.clear();
        display.render();

        let mut expected = Vec::new();
        for page in 0..4u8 {
            expected.push(Transfer::Command(0xB0 + page));
            expected.push(Transfer::Command(0x00));
            expected.push(Transfer::Command(0x10));
            expected.push(Transfer::Data(alloc::vec![0u8; 128]));
        }
        assert_eq!(display.interface.transfers, expected);
    }

    #[test]
    fn test_clear_then_render_raw_sends_one_zero_block() {
        let mut display = test_display(128, 32);
        fill_pattern(&mut display);
        display.clear();
        display.render_raw();

        assert_eq!(
            display.interface.commands(),
            [0x21, 0x00, 0x7F, 0x22, 0x00, 0x03]
        );
        assert_eq!(display.interface.data(), [alloc::vec![0u8; 512]]);
    }

    #[test]
    fn test_render_flips_pages_relative_to_raw() {
        let mut display = test_display(128, 32);
        fill_pattern(&mut display);

        display.render();
        let paged = display.interface.data();
        display.interface.transfers.clear();

        display.render_raw();
        let raw = display.interface.data().remove(0);

        assert_eq!(paged.len(), 4);
        for (p, page) in paged.iter().enumerate() {
            let source = 3 - p;
            assert_eq!(page[..], raw[source * 128..(source + 1) * 128], "page {p}");
        }
        assert_eq!(raw, display.framebuffer().as_bytes());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut display = test_display(128, 64);
        fill_pattern(&mut display);
        display.render();
        let first = core::mem::take(&mut display.interface.transfers);
        display.render();
        assert_eq!(first, display.interface.transfers);
    }

    #[test]
    fn test_write_text_places_glyphs() {
        let mut display = test_display(128, 32);
        display.write_text(0, 0, "A1");
        let bytes = display.framebuffer().as_bytes();
        assert_eq!(bytes[0..8], GLYPHS[1]);
        assert_eq!(bytes[8..16], GLYPHS[28]);
        assert!(bytes[16..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_write_char_case_folds_and_uses_page_offset() {
        let mut display = test_display(128, 32);
        display.write_char(5, 16, 'h');
        let bytes = display.framebuffer().as_bytes();
        assert_eq!(bytes[2 * 128 + 5..2 * 128 + 13], GLYPHS[8]);
    }

    #[test]
    fn test_write_char_rejects_out_of_bounds() {
        let mut display = test_display(128, 32);
        display.write_char(121, 0, 'A');
        display.write_char(0, 32, 'A');
        display.write_char(-1, 0, 'A');
        display.write_char(0, -8, 'A');
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));

        display.write_char(120, 24, 'A');
        assert_eq!(display.framebuffer().as_bytes()[3 * 128 + 120..], GLYPHS[1]);
    }

    #[test]
    fn test_write_text_drops_overflowing_glyphs() {
        let mut display = test_display(128, 32);
        display.write_text(112, 8, "ABC");
        let bytes = display.framebuffer().as_bytes();
        assert_eq!(bytes[128 + 112..128 + 120], GLYPHS[1]);
        assert_eq!(bytes[128 + 120..256], GLYPHS[2]);
        // Nothing spilled into the next page
        assert!(bytes[256..].iter().all(|b| *b == 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not page aligned")]
    fn test_write_char_misaligned_y_asserts() {
        let mut display = test_display(128, 32);
        display.write_char(0, 3, 'A');
    }

    #[test]
    fn test_draw_qr_code_through_display() {
        let mut display = test_display(128, 32);
        display.set_pixel(2, 0, true);
        display.draw_qr_code(0, 0, &[[true]], 2);
        let fb = display.framebuffer();
        assert_eq!(fb.as_bytes()[0], 0b11);
        assert_eq!(fb.as_bytes()[1], 0b11);
        assert_eq!(fb.as_bytes()[2], 0);
    }

    #[test]
    fn test_invert_only_sends_command() {
        let mut display = test_display(128, 32);
        display.write_text(0, 0, "X");
        let before = display.framebuffer().as_bytes().to_vec();

        display.invert(true);
        display.invert(false);

        assert_eq!(
            display.interface.transfers,
            [Transfer::Command(0xA7), Transfer::Command(0xA6)]
        );
        assert_eq!(display.framebuffer().as_bytes(), &before[..]);
    }

    #[test]
    fn test_send_commands_one_transfer_each() {
        let mut display = test_display(128, 32);
        display.send_commands(&[0xAE, 0xAF]);
        assert_eq!(
            display.interface.transfers,
            [Transfer::Command(0xAE), Transfer::Command(0xAF)]
        );
    }

    #[test]
    fn test_new_clears_supplied_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config, [0xA5u8; 512]).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
        assert_eq!(display.framebuffer().pixel(0, 0), Some(false));

        display.render();
        assert!(display.interface.data().iter().flatten().all(|b| *b == 0));
    }

    #[test]
    fn test_init_continues_after_failed_command() {
        let mut display = test_display(128, 32);
        display.interface.fail_on = alloc::vec![0];

        display.init();

        assert_eq!(display.interface.attempts, 26);
        let commands = display.interface.commands();
        assert_eq!(commands.len(), 25);
        assert_eq!(commands[0], 0x20);
        assert_eq!(commands.last(), Some(&0xAF));
        assert_eq!(display.take_fault(), Some(MockError(0)));
        assert_eq!(display.take_fault(), None);
    }

    #[test]
    fn test_render_continues_after_failed_command() {
        let mut display = test_display(128, 32);
        display.interface.fail_on = alloc::vec![1];

        display.render();

        assert_eq!(display.interface.attempts, 16);
        assert_eq!(display.interface.commands().len(), 11);
        assert_eq!(display.interface.data().len(), 4);
        assert_eq!(display.take_fault(), Some(MockError(1)));
    }

    #[test]
    fn test_most_recent_fault_is_kept() {
        let mut display = test_display(128, 32);
        // Page 0 data and page 2 address command
        display.interface.fail_on = alloc::vec![3, 8];

        display.render();

        assert_eq!(display.interface.data().len(), 3);
        assert_eq!(display.take_fault(), Some(MockError(8)));
    }

    #[test]
    fn test_render_raw_sends_data_after_failed_window() {
        let mut display = test_display(128, 32);
        display.interface.fail_on = alloc::vec![0];
        display.render_raw();
        assert_eq!(display.interface.commands(), [0x00, 0x7F, 0x22, 0x00, 0x03]);
        assert_eq!(display.interface.data(), [alloc::vec![0u8; 512]]);
        assert_eq!(display.take_fault(), Some(MockError(0)));
    }

    #[test]
    fn test_send_commands_continues_after_failure() {
        let mut display = test_display(128, 32);
        display.interface.fail_on = alloc::vec![1];
        display.send_commands(&[0xAE, 0xA7, 0xAF]);
        assert_eq!(display.interface.commands(), [0xAE, 0xAF]);
        assert_eq!(display.take_fault(), Some(MockError(1)));
    }

    #[test]
    fn test_release_returns_buffer() {
        let mut display = test_display(128, 32);
        display.set_pixel(0, 0, true);
        let (_, buffer) = display.release();
        assert_eq!(buffer.len(), 512);
        assert_eq!(buffer[0], 1);
    }
}
