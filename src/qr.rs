//! QR matrix rasterization
//!
//! Encoding is left to an external QR encoder; this module only maps a
//! finished module matrix onto framebuffer pixels.
//!
//! Each module becomes a `scale x scale` block, followed by one blank
//! *gutter* column. The gutter keeps neighbouring dark modules from merging
//! on a panel with square pixels. There is no vertical gutter, so a module
//! occupies `scale + 1` columns and `scale` rows:
//!
//! ```text
//! scale = 2, modules [1 0]      columns: 0 1 2 3 4 5
//!                                row 0:  # # . . . .
//!                                row 1:  # # . . . .
//! ```

use crate::framebuffer::FrameBuffer;

/// A square grid of QR modules produced by an encoder
///
/// `module(x, y)` is only called with `x, y < size()`. `true` is a dark
/// module and lights the corresponding pixels.
pub trait QrMatrix {
    /// Side length in modules
    fn size(&self) -> usize;

    /// Whether the module at column `x`, row `y` is dark
    fn module(&self, x: usize, y: usize) -> bool;
}

impl<const N: usize> QrMatrix for [[bool; N]; N] {
    fn size(&self) -> usize {
        N
    }

    fn module(&self, x: usize, y: usize) -> bool {
        self[y][x]
    }
}

impl<T: QrMatrix + ?Sized> QrMatrix for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn module(&self, x: usize, y: usize) -> bool {
        (**self).module(x, y)
    }
}

/// Horizontal distance between module origins for a given scale
pub fn module_pitch(scale: u8) -> i32 {
    i32::from(scale) + 1
}

/// Rasterize `matrix` with its top-left module at `(x0, y0)`
///
/// Pixels falling outside the framebuffer are clipped. A `scale` of 0
/// draws nothing.
pub fn draw_qr_code<B, M>(fb: &mut FrameBuffer<B>, x0: i32, y0: i32, matrix: &M, scale: u8)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    M: QrMatrix + ?Sized,
{
    let size = matrix.size();
    let scale_px = i32::from(scale);
    let pitch = module_pitch(scale);

    for by in 0..size {
        for bx in 0..size {
            let dark = matrix.module(bx, by);
            let base_x = x0.saturating_add((bx as i32).saturating_mul(pitch));
            let base_y = y0.saturating_add((by as i32).saturating_mul(scale_px));

            for dy in 0..scale_px {
                let y = base_y.saturating_add(dy);
                for dx in 0..scale_px {
                    fb.set_pixel(base_x.saturating_add(dx), y, dark);
                }
                fb.set_pixel(base_x.saturating_add(scale_px), y, false);
            }
        }
    }
}
