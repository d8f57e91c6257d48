//! Error types for the drivers
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and driver construction / LED strip operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors, generic over the transport error type
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Drawing and rendering calls on [`Display`](crate::Display) never return an
//! error. Transport failures there are recorded and can be collected with
//! [`Display::take_fault`](crate::Display::take_fault).
//!
//! ## Example
//!
//! ```
//! use deskpico_core::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Rows must be a whole number of pages
//! let result = Dimensions::new(128, 30);
//! assert!(result.is_err());
//! ```

/// Maximum number of columns (segment outputs) on an SSD1306
pub const MAX_COLUMNS: u8 = 128;

/// Maximum number of rows (COM outputs) on an SSD1306
pub const MAX_ROWS: u8 = 64;

/// Errors returned by driver construction and LED strip operations
///
/// Generic over the transport error so callers can match on the
/// underlying bus failure.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// Transport error from the bus or serial engine
    Interface(E),
    /// Buffer length does not match the configured geometry
    ///
    /// The framebuffer must be exactly `width * height / 8` bytes.
    BufferSize {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// LED index past the end of the strip
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of LEDs on the strip
        len: usize,
    },
}

impl Error<core::convert::Infallible> {
    /// Re-type a transport-free error for a driver with a real transport
    pub(crate) fn widen<E>(self) -> Error<E> {
        match self {
            Self::Interface(never) => match never {},
            Self::BufferSize { required, provided } => Error::BufferSize { required, provided },
            Self::IndexOutOfRange { index, len } => Error::IndexOutOfRange { index, len },
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferSize { required, provided } => {
                write!(
                    f,
                    "Buffer size mismatch: required {required} bytes, provided {provided}"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "LED index {index} out of range for strip of {len}")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "Interface error"),
            Self::BufferSize { required, provided } => defmt::write!(
                f,
                "Buffer size mismatch: required {=usize}, provided {=usize}",
                required,
                provided
            ),
            Self::IndexOutOfRange { index, len } => {
                defmt::write!(f, "LED index {=usize} out of range ({=usize})", index, len)
            }
        }
    }
}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called
    /// before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns (width) requested
        width: u8,
        /// Number of rows (height) requested
        height: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, rows must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(feature = "defmt")]
impl defmt::Format for BuilderError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::MissingDimensions => defmt::write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                defmt::write!(f, "Invalid dimensions {=u8}x{=u8}", width, height)
            }
        }
    }
}
