//! Desk indicator frame composer
//!
//! [`Indicator`] ties a [`Display`] and a [`LedStrip`] together and turns the
//! desk state into one frame per call to [`update`](Indicator::update):
//!
//! - While disconnected and a QR matrix is supplied, the screen shows the
//!   code (drawn with [`render_raw`](Display::render_raw)) so the desk can be
//!   claimed by scanning it.
//! - Otherwise the status lines are written one per page and sent with
//!   [`render`](Display::render).
//! - The strip is filled with the connected or disconnected colour.
//!
//! [`toggle_view`](Indicator::toggle_view) is meant to be driven by a
//! debounced button and forces the code view even while connected.

use log::trace;
use smart_leds::RGB8;

use crate::display::Display;
use crate::error::Error;
use crate::font::GLYPH_SIZE;
use crate::interface::DisplayInterface;
use crate::qr::QrMatrix;
use crate::strip::{LedStrip, PixelTransmitter};

/// Left margin of status text in pixels
pub const DEFAULT_TEXT_X: i32 = 5;

/// Strip colour while the desk is connected
pub const DEFAULT_CONNECTED_COLOR: RGB8 = RGB8 { r: 0, g: 0xFF, b: 0 };

/// Strip colour while the desk is disconnected
pub const DEFAULT_DISCONNECTED_COLOR: RGB8 = RGB8 { r: 0xFF, g: 0, b: 0 };

/// What the screen shows while connected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Status text; the QR code only appears while disconnected
    Status,
    /// QR code whenever one is supplied
    Code,
}

impl View {
    /// The other view
    pub fn toggled(self) -> Self {
        match self {
            View::Status => View::Code,
            View::Code => View::Status,
        }
    }
}

/// Display and LED strip driven as one indicator
pub struct Indicator<I, B, T, P>
where
    I: DisplayInterface,
{
    display: Display<I, B>,
    strip: LedStrip<T, P>,
    view: View,
    connected_color: RGB8,
    disconnected_color: RGB8,
    qr_origin: (i32, i32),
    qr_scale: u8,
    text_x: i32,
}

impl<I, B, T, P> Indicator<I, B, T, P>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    T: PixelTransmitter,
    P: AsRef<[RGB8]> + AsMut<[RGB8]>,
{
    /// Combine an initialised display and strip, starting in [`View::Status`]
    pub fn new(display: Display<I, B>, strip: LedStrip<T, P>) -> Self {
        Self {
            display,
            strip,
            view: View::Status,
            connected_color: DEFAULT_CONNECTED_COLOR,
            disconnected_color: DEFAULT_DISCONNECTED_COLOR,
            qr_origin: (0, 0),
            qr_scale: 1,
            text_x: DEFAULT_TEXT_X,
        }
    }

    /// Set the strip colours for the connected and disconnected states
    pub fn with_colors(mut self, connected: RGB8, disconnected: RGB8) -> Self {
        self.connected_color = connected;
        self.disconnected_color = disconnected;
        self
    }

    /// Set where and how large the QR code is drawn
    pub fn with_qr_placement(mut self, x: i32, y: i32, scale: u8) -> Self {
        self.qr_origin = (x, y);
        self.qr_scale = scale;
        self
    }

    /// Set the left margin of status text
    pub fn with_text_x(mut self, x: i32) -> Self {
        self.text_x = x;
        self
    }

    /// Current view
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch between [`View::Status`] and [`View::Code`]
    pub fn toggle_view(&mut self) -> View {
        self.view = self.view.toggled();
        trace!("indicator view: {:?}", self.view);
        self.view
    }

    /// Compose and send one frame
    ///
    /// `lines` are written one per 8-pixel page from the top; lines past the
    /// last page are ignored and long lines are cut at the right edge.
    /// Display transfer failures are recorded on the display (see
    /// [`Display::take_fault`]).
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the LED strip transmit fails.
    pub fn update(
        &mut self,
        connected: bool,
        lines: &[&str],
        qr: Option<&dyn QrMatrix>,
    ) -> Result<(), Error<T::Error>> {
        let show_code = !connected || self.view == View::Code;

        self.display.clear();
        match qr.filter(|_| show_code) {
            Some(matrix) => {
                let (x, y) = self.qr_origin;
                self.display.draw_qr_code(x, y, matrix, self.qr_scale);
                self.display.render_raw();
            }
            None => {
                let pages = usize::from(self.display.dimensions().pages());
                let mut y = 0;
                for line in lines.iter().take(pages) {
                    self.display.write_text(self.text_x, y, line);
                    y += i32::from(GLYPH_SIZE);
                }
                self.display.render();
            }
        }

        let color = if connected {
            self.connected_color
        } else {
            self.disconnected_color
        };
        self.strip.fill(color.r, color.g, color.b)
    }

    /// Access the display
    pub fn display(&self) -> &Display<I, B> {
        &self.display
    }

    /// Access the display mutably, e.g. to collect faults
    pub fn display_mut(&mut self) -> &mut Display<I, B> {
        &mut self.display
    }

    /// Access the LED strip
    pub fn strip(&self) -> &LedStrip<T, P> {
        &self.strip
    }

    /// Access the LED strip mutably
    pub fn strip_mut(&mut self) -> &mut LedStrip<T, P> {
        &mut self.strip
    }

    /// Split back into the display and the strip
    pub fn release(self) -> (Display<I, B>, LedStrip<T, P>) {
        (self.display, self.strip)
    }
}
