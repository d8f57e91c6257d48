//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for talking to an SSD1306 controller over I2C.
//!
//! ## Framing
//!
//! The controller distinguishes commands from pixel data by a control byte at
//! the start of every transfer:
//!
//! - command transfer: `[0x80, opcode]`
//! - data transfer: `[0x40, data...]`
//!
//! Transfers are blocking. The trait reports bus failures to its caller; the
//! [`Display`](crate::Display) above it records them rather than failing
//! drawing calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deskpico_core::{DisplayInterface, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c, 0x3C);
//!
//! // Display off
//! let _ = interface.send_command(0xAE);
//!
//! // Two columns of pixel data
//! let _ = interface.send_data(&[0xFF, 0x81]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SSD1306 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the byte-transfer link to the SSD1306 controller
///
/// This is the only layer that reports transport failures. Implement it on
/// your own type to drive the controller over a different bus or to capture
/// traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The implementation must emit one transfer of `[0x80, command]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// The implementation must emit one transfer of `[0x40, data...]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug, PartialEq)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

#[cfg(feature = "defmt")]
impl<I2cErr> defmt::Format for InterfaceError<I2cErr> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::I2c(_) => defmt::write!(f, "I2C error"),
        }
    }
}

/// I2C implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`] with 7-bit addressing
pub struct I2cInterface<I2C> {
    /// I2C bus, owned exclusively
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the device at `address`
    ///
    /// Most modules answer on [`DEFAULT_ADDRESS`] (0x3C) or 0x3D.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes in one transaction go out as a single I2C frame,
        // so the control byte and payload need no intermediate copy.
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
            )
            .map_err(InterfaceError::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records every transaction as (address, concatenated bytes)
    #[derive(Default)]
    struct MockI2c {
        frames: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let mut frame = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    frame.extend_from_slice(bytes);
                }
            }
            self.frames.push((address, frame));
            Ok(())
        }
    }

    #[test]
    fn test_command_frame() {
        let mut interface = I2cInterface::new(MockI2c::default(), DEFAULT_ADDRESS);
        interface.send_command(0xAF).unwrap();
        let bus = interface.release();
        assert_eq!(bus.frames, [(0x3C, alloc::vec![0x80, 0xAF])]);
    }

    #[test]
    fn test_data_frame_has_single_marker() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3D);
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(interface.address(), 0x3D);
        let bus = interface.release();
        assert_eq!(bus.frames, [(0x3D, alloc::vec![0x40, 0x01, 0x02, 0x03])]);
    }

    #[test]
    fn test_bus_error_is_reported() {
        let bus = MockI2c {
            fail: true,
            ..MockI2c::default()
        };
        let mut interface = I2cInterface::new(bus, DEFAULT_ADDRESS);
        assert_eq!(
            interface.send_command(0xAE),
            Err(InterfaceError::I2c(MockError))
        );
        assert_eq!(
            interface.send_data(&[0x00]),
            Err(InterfaceError::I2c(MockError))
        );
    }
}
