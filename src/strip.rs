//! Addressable LED strip driver
//!
//! [`LedStrip`] keeps one RGB triple per LED and pushes the whole strip out
//! through a [`PixelTransmitter`] on every change. WS2812-class LEDs have no
//! per-pixel addressing: each frame shifts through the entire chain, so a
//! partial update would leave later LEDs showing stale colours.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deskpico_core::{LedStrip, PixelTransmitter};
//! use smart_leds::RGB8;
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct Pio;
//! # impl PixelTransmitter for Pio {
//! #     type Error = Infallible;
//! #     fn put_word(&mut self, _word: u32) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let mut strip = match LedStrip::new(Pio, [RGB8::default(); 8], &mut delay) {
//!     Ok(strip) => strip,
//!     Err(_) => return,
//! };
//!
//! let _ = strip.set_pixel_color(0, 0, 255, 0);
//! let _ = strip.fill(0, 0, 32);
//! ```

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;
use log::{debug, trace};
use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::{OFF, wire_word};
use crate::error::Error;

type StripResult<E> = core::result::Result<(), Error<E>>;

/// Settle time after the first frame, covers the LED latch/reset period
pub const LATCH_DELAY_US: u32 = 1_000;

/// Timed serial engine that clocks colour words onto the strip data line
///
/// `put_word` receives one word per LED as built by
/// [`wire_word`](crate::color::wire_word): 24 colour bits in bits 31..8,
/// shifted out most significant bit first at the strip's bit rate.
/// Implementations block until the word has been accepted.
pub trait PixelTransmitter {
    /// Error type for transmit operations
    type Error: Debug;

    /// Queue one colour word for transmission
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the word.
    fn put_word(&mut self, word: u32) -> Result<(), Self::Error>;

    /// Called after the last word of a frame
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the engine fails.
    fn end_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// LED strip with a fixed number of pixels
///
/// ## Type Parameters
///
/// * `T` - Serial engine implementing [`PixelTransmitter`]
/// * `B` - Pixel storage, its length is the strip length
pub struct LedStrip<T, B> {
    transmitter: T,
    pixels: B,
}

impl<T, B> LedStrip<T, B>
where
    T: PixelTransmitter,
    B: AsRef<[RGB8]> + AsMut<[RGB8]>,
{
    /// Take over `pixels` as the strip buffer and blank the strip
    ///
    /// Every pixel is set to off and transmitted once, then the strip is
    /// given [`LATCH_DELAY_US`] to latch before returning.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the initial transmit fails.
    pub fn new<D: DelayNs>(
        transmitter: T,
        pixels: B,
        delay: &mut D,
    ) -> Result<Self, Error<T::Error>> {
        let mut strip = Self {
            transmitter,
            pixels,
        };
        strip.pixels.as_mut().fill(OFF);
        strip.show()?;
        delay.delay_us(LATCH_DELAY_US);
        debug!("led strip initialised with {} pixels", strip.len());
        Ok(strip)
    }

    /// Number of LEDs
    pub fn len(&self) -> usize {
        self.pixels.as_ref().len()
    }

    /// Whether the strip has no LEDs
    pub fn is_empty(&self) -> bool {
        self.pixels.as_ref().is_empty()
    }

    /// Current colour of every LED
    pub fn pixels(&self) -> &[RGB8] {
        self.pixels.as_ref()
    }

    /// Set one LED and retransmit the whole strip
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` (without transmitting) when `index`
    /// is past the end of the strip, or `Error::Interface` if transmit fails.
    pub fn set_pixel_color(&mut self, index: usize, r: u8, g: u8, b: u8) -> StripResult<T::Error> {
        let len = self.len();
        let pixel = self
            .pixels
            .as_mut()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *pixel = RGB8::new(r, g, b);
        self.show()
    }

    /// Set every LED to the same colour and transmit once
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if transmit fails.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) -> StripResult<T::Error> {
        self.pixels.as_mut().fill(RGB8::new(r, g, b));
        self.show()
    }

    /// Transmit the whole strip
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if transmit fails.
    pub fn show(&mut self) -> StripResult<T::Error> {
        trace!("transmitting {} pixels", self.pixels.as_ref().len());
        for pixel in self.pixels.as_ref() {
            self.transmitter
                .put_word(wire_word(*pixel))
                .map_err(Error::Interface)?;
        }
        self.transmitter.end_frame().map_err(Error::Interface)
    }

    /// Access the serial engine
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Access the serial engine mutably
    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    /// Release the serial engine and pixel storage
    pub fn release(self) -> (T, B) {
        (self.transmitter, self.pixels)
    }
}

#[cfg(feature = "alloc")]
impl<T> LedStrip<T, alloc::vec::Vec<RGB8>>
where
    T: PixelTransmitter,
{
    /// Allocate storage for exactly `len` LEDs and blank the strip
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the initial transmit fails.
    pub fn with_len<D: DelayNs>(
        transmitter: T,
        len: usize,
        delay: &mut D,
    ) -> Result<Self, Error<T::Error>> {
        Self::new(transmitter, alloc::vec![OFF; len], delay)
    }
}

impl<T, B> SmartLedsWrite for LedStrip<T, B>
where
    T: PixelTransmitter,
    B: AsRef<[RGB8]> + AsMut<[RGB8]>,
{
    type Error = Error<T::Error>;
    type Color = RGB8;

    /// Copy colours into the strip from the first LED onward, then transmit
    ///
    /// Colours past the end of the strip are ignored; LEDs past the end of
    /// the iterator keep their colour.
    fn write<I, C>(&mut self, iterator: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<Self::Color>,
    {
        for (slot, color) in self.pixels.as_mut().iter_mut().zip(iterator) {
            *slot = color.into();
        }
        self.show()
    }
}

/// 4-bit wire symbols packed into each SPI byte
const SYMBOLS_PER_BYTE: usize = 2;

/// SPI symbol for a wire `1`: long high, short low
const SYMBOL_ONE: u8 = 0b1110;

/// SPI symbol for a wire `0`: short high, long low
const SYMBOL_ZERO: u8 = 0b1000;

/// [`PixelTransmitter`] that generates strip timing from an SPI bus
///
/// Each wire bit becomes a 4-bit SPI symbol, so the bus must run at four
/// times the strip bit rate (about 3.2 MHz for 800 kHz LEDs). Only MOSI is
/// used; the line must idle low so gaps between frames act as the latch.
pub struct SpiTransmitter<SPI> {
    spi: SPI,
}

impl<SPI> SpiTransmitter<SPI>
where
    SPI: SpiBus,
{
    /// Wrap an SPI bus clocked at 4x the strip bit rate
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the underlying bus
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Expand the 24 colour bits of `word` into 12 SPI bytes
    fn encode(word: u32) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (i, byte) in out.iter_mut().enumerate() {
            let mut value = 0u8;
            for half in 0..SYMBOLS_PER_BYTE {
                let bit = 31 - (i * SYMBOLS_PER_BYTE + half);
                let symbol = if word & (1 << bit) != 0 {
                    SYMBOL_ONE
                } else {
                    SYMBOL_ZERO
                };
                value = (value << 4) | symbol;
            }
            *byte = value;
        }
        out
    }
}

impl<SPI> PixelTransmitter for SpiTransmitter<SPI>
where
    SPI: SpiBus,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn put_word(&mut self, word: u32) -> Result<(), Self::Error> {
        self.spi.write(&Self::encode(word))
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        self.spi.flush()
    }
}
