//! SH1106 command definitions
//!
//! This module defines the command bytes used to control the SH1106 OLED
//! controller over I2C. Every I2C write starts with a control byte that
//! tells the controller whether the following bytes are commands or
//! display RAM data.
//!
//! ## Transfer Structure
//!
//! 1. Address the controller (7-bit address, usually `0x3C`)
//! 2. Send [`CONTROL_COMMAND`] followed by command bytes, or
//!    [`CONTROL_DATA`] followed by RAM bytes
//!
//! ## Example
//!
//! ```
//! use robo_eyes::opcode;
//!
//! // Select page 3, column 2
//! let select = [
//!     opcode::CONTROL_COMMAND,
//!     opcode::SET_PAGE_ADDRESS | 3,
//!     opcode::SET_LOW_COLUMN | (2 & 0x0F),
//!     opcode::SET_HIGH_COLUMN | (2 >> 4),
//! ];
//! assert_eq!(select, [0x00, 0xB3, 0x02, 0x10]);
//! ```

// Control bytes

/// Control byte announcing a command stream (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a display RAM data stream (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Power and display state

/// Display off, panel in sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Show RAM contents (0xA4), as opposed to forcing every pixel on
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Non-inverted pixel output (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted pixel output (0xA7)
///
/// A cleared RAM bit lights the pixel while this mode is active.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Contrast control (0x81)
///
/// Requires 1 byte.
pub const SET_CONTRAST: u8 = 0x81;

/// DC-DC converter control (0xAD)
///
/// Requires 1 byte: 0x8B = converter on.
pub const SET_DC_DC: u8 = 0xAD;

/// DC-DC converter on (data byte for [`SET_DC_DC`])
pub const DC_DC_ON: u8 = 0x8B;

/// Charge pump voltage (0x30 | level), level 0..=3
pub const SET_PUMP_VOLTAGE: u8 = 0x30;

// Timing and driving

/// Display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 byte.
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Multiplex ratio (0xA8)
///
/// Requires 1 byte: number of rows - 1.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Display offset (0xD3)
///
/// Requires 1 byte.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Display start line (0x40 | line), line 0..=63
pub const SET_START_LINE: u8 = 0x40;

/// Pre-charge period (0xD9)
///
/// Requires 1 byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOM deselect level (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// COM pins hardware configuration (0xDA)
///
/// Requires 1 byte.
pub const SET_COM_PINS: u8 = 0xDA;

// Orientation

/// Segment remap, column 131 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

// Addressing

/// Page address (0xB0 | page), page 0..=7
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Lower column address nibble (0x00 | nibble)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Higher column address nibble (0x10 | nibble)
pub const SET_HIGH_COLUMN: u8 = 0x10;
