//! Paged monochrome framebuffer
//!
//! The SSD1306 stores pixels in *pages*: horizontal strips 8 rows tall. Each
//! byte in a page is one column of 8 vertically stacked pixels, with bit `n`
//! holding row `page * 8 + n`.
//!
//! ```text
//!            column 0   column 1   ...  column W-1
//! page 0     byte 0     byte 1     ...  byte W-1        rows 0..8
//! page 1     byte W     byte W+1   ...  byte 2W-1       rows 8..16
//! ...
//! ```
//!
//! ## Example
//!
//! ```
//! use deskpico_core::{Dimensions, FrameBuffer};
//!
//! let dims = Dimensions::new(128, 32).unwrap();
//! let mut fb = FrameBuffer::new(dims, [0u8; 512]).unwrap();
//!
//! fb.set_pixel(3, 9, true);
//! assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0010);
//!
//! // Off-screen writes are dropped
//! fb.set_pixel(-1, 0, true);
//! fb.set_pixel(128, 0, true);
//! assert_eq!(fb.pixel(3, 9), Some(true));
//! ```

use core::convert::Infallible;

use crate::config::Dimensions;
use crate::error::Error;

/// Framebuffer backed by caller-provided storage
///
/// The storage length is fixed at `width * height / 8` bytes for the
/// lifetime of the buffer.
pub struct FrameBuffer<B> {
    dimensions: Dimensions,
    buffer: B,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a framebuffer for `dimensions`
    ///
    /// The buffer contents are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferSize` unless the buffer is exactly
    /// `dimensions.buffer_size()` bytes long.
    pub fn new(dimensions: Dimensions, buffer: B) -> Result<Self, Error<Infallible>> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != required {
            return Err(Error::BufferSize { required, provided });
        }
        Ok(Self { dimensions, buffer })
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.dimensions.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.dimensions.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.dimensions.pages()
    }

    /// Geometry of this buffer
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.as_mut().fill(0);
    }

    /// Set or clear a single pixel
    ///
    /// Coordinates outside the display are silently ignored. All drawing
    /// in this crate goes through here.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some(index) = self.index_of(x, y) else {
            return;
        };
        let mask = 1u8 << (y % 8);
        let byte = &mut self.buffer.as_mut()[index];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read back a single pixel, `None` when off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let index = self.index_of(x, y)?;
        Some(self.buffer.as_ref()[index] & (1u8 << (y % 8)) != 0)
    }

    /// Bytes of one page, `width` long
    pub fn page(&self, page: u8) -> Option<&[u8]> {
        if page >= self.pages() {
            return None;
        }
        let width = self.width() as usize;
        let start = page as usize * width;
        self.buffer.as_ref().get(start..start + width)
    }

    /// Whole buffer in natural page order
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Mutable access to the raw page bytes
    ///
    /// Used by the glyph blitter, which copies whole columns.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Give back the storage
    pub fn release(self) -> B {
        self.buffer
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width()) || y >= i32::from(self.height()) {
            return None;
        }
        let page = (y / 8) as usize;
        Some(page * self.width() as usize + x as usize)
    }
}
