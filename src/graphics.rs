//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`BinaryColor`], so any
//! embedded-graphics primitive, font or image can be drawn into the
//! framebuffer. `BinaryColor::On` lights a pixel. Drawing does not transmit;
//! call [`Display::render`] afterwards.
//!
//! The inherent [`Display::clear`] takes no colour and shadows
//! [`DrawTarget::clear`] in method-call syntax. To fill with a colour, call
//! the trait method explicitly:
//! `DrawTarget::clear(&mut display, BinaryColor::On)`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use deskpico_core::{Builder, Dimensions, Display, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let dims = match Dimensions::new(128, 32) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = match Display::new(MockInterface, config, [0u8; 512]) {
//! #     Ok(display) => display,
//! #     Err(_) => return,
//! # };
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 32))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Desk free",
//!     Point::new(4, 12),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Invert everything through the trait; `display.clear()` is the inherent one
//! let _ = DrawTarget::clear(&mut display, BinaryColor::On);
//!
//! display.render();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Off-screen pixels are dropped by the framebuffer
            self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.framebuffer_mut().as_bytes_mut().fill(fill);
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface, [u8; 512]> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface, config, [0u8; 512]).unwrap()
    }

    #[test]
    fn test_size_matches_dimensions() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 32));
    }

    #[test]
    fn test_draw_lights_framebuffer_pixels() {
        let mut display = test_display();
        Line::new(Point::new(0, 9), Point::new(3, 9))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        let fb = display.framebuffer();
        for x in 0..4 {
            assert_eq!(fb.pixel(x, 9), Some(true));
        }
        // Page 1, bit 1
        assert_eq!(fb.as_bytes()[128], 0b10);
        assert_eq!(fb.pixel(4, 9), Some(false));
    }

    #[test]
    fn test_off_color_clears_pixels() {
        let mut display = test_display();
        Rectangle::new(Point::zero(), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(1, 1), BinaryColor::Off)
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.framebuffer().pixel(0, 0), Some(true));
        assert_eq!(display.framebuffer().pixel(1, 1), Some(false));
    }

    #[test]
    fn test_off_screen_pixels_are_ignored() {
        let mut display = test_display();
        Rectangle::new(Point::new(-10, -10), Size::new(300, 300))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_clear_fills_every_byte() {
        let mut display = test_display();
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0xFF));
        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));

        // The inherent form still resolves with no colour argument
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        display.clear();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }
}
