//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait, the boundary the
//! controller drives the panel through, and the [`I2cInterface`] struct
//! that implements it for SH1106 modules on an I2C bus.
//!
//! ## Hardware Requirements
//!
//! - I2C bus (SDA + SCL), already configured by the HAL
//! - SH1106 module at a 7-bit address (usually `0x3C`)
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use robo_eyes::{BusPins, Dimensions, DisplayInterface, I2cInterface};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Pins and panel size first, then probe without a second bus init
//! let _ = interface.assign_pins(BusPins::new(41, 42));
//! if let Ok(dims) = Dimensions::new(128, 64) {
//!     let _ = interface.configure(dims);
//! }
//! let _ = interface.probe(0x3C, false);
//! let _ = interface.set_inverted(true);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::config::{BusPins, Dimensions};
use crate::error::MAX_COLUMNS;
use crate::opcode::{
    COM_SCAN_DEC, CONTROL_COMMAND, CONTROL_DATA, DC_DC_ON, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF,
    DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY, SEGMENT_REMAP, SET_CLOCK_DIV, SET_COM_PINS,
    SET_CONTRAST, SET_DC_DC, SET_DISPLAY_OFFSET, SET_HIGH_COLUMN, SET_LOW_COLUMN, SET_MULTIPLEX,
    SET_PAGE_ADDRESS, SET_PRECHARGE, SET_PUMP_VOLTAGE, SET_START_LINE, SET_VCOM_DETECT,
};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the display side of the controller
///
/// The controller owns one implementation and is the only caller. The
/// call order is fixed: [`assign_pins`](Self::assign_pins), then
/// [`configure`](Self::configure), then [`probe`](Self::probe), then any
/// number of frame pushes and inversion changes.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Assign the data and clock pins of the communication bus
    ///
    /// Called once, before [`probe`](Self::probe).
    fn assign_pins(&mut self, pins: BusPins) -> InterfaceResult<(), Self::Error>;

    /// Set the panel size frames will be pushed for
    ///
    /// Called once, before [`probe`](Self::probe), with the configured
    /// dimensions. Every frame passed to [`push_frame`](Self::push_frame)
    /// is `dimensions.buffer_size()` bytes long.
    fn configure(&mut self, dimensions: Dimensions) -> InterfaceResult<(), Self::Error>;

    /// Probe and initialize the display at `address`
    ///
    /// `init_bus` asks the driver to bring the bus up itself. The
    /// controller always passes `false` because the pins were already
    /// assigned and a second bus init faults the peripheral.
    ///
    /// # Errors
    ///
    /// Returns an error if the display does not acknowledge.
    fn probe(&mut self, address: u8, init_bus: bool) -> InterfaceResult<(), Self::Error>;

    /// Push a full frame in page order
    fn push_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Enable or disable the panel's native pixel inversion
    fn set_inverted(&mut self, inverted: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug, PartialEq, Eq)]
pub enum InterfaceError<E> {
    /// I2C communication error (NACK, arbitration loss, ...)
    I2c(E),
    /// The driver was asked to initialize a bus the HAL already owns
    BusAlreadyInitialized,
    /// A frame or mode change was sent before a successful probe
    NotProbed,
    /// Frame length does not match the configured panel size
    InvalidFrameLength {
        /// Provided length in bytes
        len: usize,
    },
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::BusAlreadyInitialized => write!(f, "Bus already initialized"),
            Self::NotProbed => write!(f, "Display not probed"),
            Self::InvalidFrameLength { len } => write!(f, "Invalid frame length: {len} bytes"),
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// Offset of the first visible column inside the 132-column SH1106 RAM
///
/// Panels wider than 130 columns get a smaller offset so the frame stays
/// inside RAM.
pub const DEFAULT_COLUMN_OFFSET: u8 = 2;

/// SH1106 interface over an embedded-hal v1.0 I2C bus
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// Address acknowledged by [`DisplayInterface::probe`]
    address: Option<u8>,
    /// Pins the bus was assigned, for diagnostics
    pins: Option<BusPins>,
    /// Visible panel size, 128x64 until configured
    dimensions: Dimensions,
    /// First visible RAM column
    column_offset: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for a 128x64 module
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: None,
            pins: None,
            dimensions: Dimensions {
                width: 128,
                height: 64,
            },
            column_offset: DEFAULT_COLUMN_OFFSET,
        }
    }

    /// Set the first visible RAM column
    ///
    /// Default is 2. SSD1306-style modules wired without offset use 0.
    pub fn set_column_offset(&mut self, offset: u8) -> &mut Self {
        self.column_offset = offset;
        self
    }

    /// Get the current column offset
    pub fn column_offset(&self) -> u8 {
        self.column_offset
    }

    /// Panel size frames are pushed for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// First RAM column actually written, clamped so the frame fits
    fn first_column(&self) -> u8 {
        let room = MAX_COLUMNS.saturating_sub(self.dimensions.width);
        self.column_offset.min(room as u8)
    }

    /// Address of the probed display, if any
    pub fn address(&self) -> Option<u8> {
        self.address
    }

    /// Pins recorded by [`DisplayInterface::assign_pins`]
    pub fn pins(&self) -> Option<BusPins> {
        self.pins
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn send_commands(
        &mut self,
        address: u8,
        commands: &[u8],
    ) -> InterfaceResult<(), InterfaceError<I2C::Error>> {
        self.i2c
            .transaction(
                address,
                &mut [
                    Operation::Write(&[CONTROL_COMMAND]),
                    Operation::Write(commands),
                ],
            )
            .map_err(InterfaceError::I2c)
    }

    fn send_data(
        &mut self,
        address: u8,
        data: &[u8],
    ) -> InterfaceResult<(), InterfaceError<I2C::Error>> {
        self.i2c
            .transaction(
                address,
                &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
            )
            .map_err(InterfaceError::I2c)
    }

    fn probed_address(&self) -> InterfaceResult<u8, InterfaceError<I2C::Error>> {
        self.address.ok_or(InterfaceError::NotProbed)
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn assign_pins(&mut self, pins: BusPins) -> InterfaceResult<(), Self::Error> {
        // embedded-hal buses are pinned when the HAL builds them; keep the
        // assignment so it shows up in diagnostics.
        log::debug!("bus pins: data={} clock={}", pins.data, pins.clock);
        self.pins = Some(pins);
        Ok(())
    }

    fn configure(&mut self, dimensions: Dimensions) -> InterfaceResult<(), Self::Error> {
        log::debug!("panel size: {}x{}", dimensions.width, dimensions.height);
        self.dimensions = dimensions;
        Ok(())
    }

    fn probe(&mut self, address: u8, init_bus: bool) -> InterfaceResult<(), Self::Error> {
        if init_bus {
            return Err(InterfaceError::BusAlreadyInitialized);
        }

        // Multiplex ratio is the number of driven rows minus one
        let multiplex = self.dimensions.height.saturating_sub(1) as u8;
        let init = [
            DISPLAY_OFF,
            SET_CLOCK_DIV,
            0x80,
            SET_MULTIPLEX,
            multiplex,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            SET_DC_DC,
            DC_DC_ON,
            SEGMENT_REMAP,
            COM_SCAN_DEC,
            SET_COM_PINS,
            0x12,
            SET_CONTRAST,
            0xFF,
            SET_PRECHARGE,
            0x1F,
            SET_VCOM_DETECT,
            0x40,
            SET_PUMP_VOLTAGE | 0x03,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DISPLAY_ON,
        ];
        self.send_commands(address, &init)?;
        self.address = Some(address);
        Ok(())
    }

    fn push_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error> {
        let address = self.probed_address()?;
        if frame.len() != self.dimensions.buffer_size() {
            return Err(InterfaceError::InvalidFrameLength { len: frame.len() });
        }

        let width = self.dimensions.width as usize;
        let column = self.first_column();
        for (page, bytes) in frame.chunks(width).enumerate() {
            self.send_commands(
                address,
                &[
                    SET_PAGE_ADDRESS | (page as u8 & 0x07),
                    SET_LOW_COLUMN | (column & 0x0F),
                    SET_HIGH_COLUMN | (column >> 4),
                ],
            )?;
            self.send_data(address, bytes)?;
        }
        Ok(())
    }

    fn set_inverted(&mut self, inverted: bool) -> InterfaceResult<(), Self::Error> {
        let address = self.probed_address()?;
        let command = if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_commands(address, &[command])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusError, RecordingBus};

    fn probed(width: u16, height: u16) -> I2cInterface<RecordingBus> {
        let mut interface = I2cInterface::new(RecordingBus::default());
        interface
            .configure(Dimensions::new(width, height).unwrap())
            .unwrap();
        interface.probe(0x3C, false).unwrap();
        interface
    }

    #[test]
    fn test_assign_pins_is_recorded() {
        let mut interface = I2cInterface::new(RecordingBus::default());
        interface.assign_pins(BusPins::new(41, 42)).unwrap();
        assert_eq!(interface.pins(), Some(BusPins::new(41, 42)));
        assert!(interface.release().writes.is_empty());
    }

    #[test]
    fn test_probe_sends_init_sequence() {
        let interface = probed(128, 64);
        assert_eq!(interface.address(), Some(0x3C));

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        let (address, bytes) = &i2c.writes[0];
        assert_eq!(*address, 0x3C);
        assert_eq!(bytes[0], CONTROL_COMMAND);
        assert_eq!(bytes[1], DISPLAY_OFF);
        assert_eq!(bytes[4..6], [SET_MULTIPLEX, 0x3F]);
        assert_eq!(bytes.last(), Some(&DISPLAY_ON));
    }

    #[test]
    fn test_multiplex_follows_height() {
        let i2c = probed(128, 32).release();
        assert_eq!(i2c.writes[0].1[4..6], [SET_MULTIPLEX, 0x1F]);
    }

    #[test]
    fn test_probe_rejects_bus_init() {
        let mut interface = I2cInterface::new(RecordingBus::default());
        let result = interface.probe(0x3C, true);
        assert_eq!(result, Err(InterfaceError::BusAlreadyInitialized));
        assert_eq!(interface.address(), None);
    }

    #[test]
    fn test_probe_nack_fails() {
        let mut interface = I2cInterface::new(RecordingBus::nacking());
        assert_eq!(
            interface.probe(0x3C, false),
            Err(InterfaceError::I2c(BusError))
        );
        assert_eq!(interface.address(), None);
    }

    #[test]
    fn test_push_before_probe_fails() {
        let mut interface = I2cInterface::new(RecordingBus::default());
        assert_eq!(
            interface.push_frame(&[0u8; 1024]),
            Err(InterfaceError::NotProbed)
        );
        assert_eq!(interface.set_inverted(true), Err(InterfaceError::NotProbed));
    }

    #[test]
    fn test_push_frame_writes_each_page_with_column_offset() {
        let mut interface = probed(128, 64);

        let mut frame = [0u8; 1024];
        frame[128] = 0xAA;
        interface.push_frame(&frame).unwrap();

        let i2c = interface.release();
        // init + 8 pages * (select + data)
        assert_eq!(i2c.writes.len(), 1 + 16);
        assert_eq!(i2c.writes[1].1, [CONTROL_COMMAND, 0xB0, 0x02, 0x10]);
        assert_eq!(i2c.writes[3].1, [CONTROL_COMMAND, 0xB1, 0x02, 0x10]);
        let page1 = &i2c.writes[4].1;
        assert_eq!(page1[0], CONTROL_DATA);
        assert_eq!(page1.len(), 129);
        assert_eq!(page1[1], 0xAA);
    }

    #[test]
    fn test_push_frame_uses_configured_width() {
        let mut interface = probed(64, 64);
        interface.push_frame(&[0u8; 512]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1 + 16);
        for page in 0..8u8 {
            let select = &i2c.writes[1 + 2 * page as usize].1;
            assert_eq!(select[1], 0xB0 | page);
            assert_eq!(i2c.writes[2 + 2 * page as usize].1.len(), 1 + 64);
        }
    }

    #[test]
    fn test_full_ram_width_drops_column_offset() {
        let mut interface = probed(132, 64);
        assert_eq!(interface.column_offset(), DEFAULT_COLUMN_OFFSET);
        interface.push_frame(&[0u8; 1056]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1 + 16);
        assert_eq!(i2c.writes[1].1, [CONTROL_COMMAND, 0xB0, 0x00, 0x10]);
        assert_eq!(i2c.writes[2].1.len(), 1 + 132);
    }

    #[test]
    fn test_push_frame_rejects_wrong_length() {
        let mut interface = probed(128, 64);
        assert_eq!(
            interface.push_frame(&[0u8; 100]),
            Err(InterfaceError::InvalidFrameLength { len: 100 })
        );
        assert_eq!(
            interface.push_frame(&[0u8; 512]),
            Err(InterfaceError::InvalidFrameLength { len: 512 })
        );
    }

    #[test]
    fn test_set_inverted_sends_mode_command() {
        let mut interface = probed(128, 64);
        interface.set_inverted(true).unwrap();
        interface.set_inverted(false).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes[1].1, [CONTROL_COMMAND, INVERT_DISPLAY]);
        assert_eq!(i2c.writes[2].1, [CONTROL_COMMAND, NORMAL_DISPLAY]);
    }

    #[test]
    fn test_column_offset_override() {
        let mut interface = probed(8, 8);
        interface.set_column_offset(0);
        assert_eq!(interface.column_offset(), 0);
        interface.push_frame(&[0u8; 8]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes[1].1, [CONTROL_COMMAND, 0xB0, 0x00, 0x10]);
    }
}
