//! Robot-Eye Display Controller
//!
//! Drives an animated pair of robot eyes on a 1-bit SH1106 OLED panel from
//! host automation commands.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 I2C driver for SH1106 panels
//! - `embedded-graphics` drawing into the frame buffer (with `graphics` feature)
//! - Readiness gate: commands are dropped until the display is up
//! - Pluggable animation engine through [`EyeEngine`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use robo_eyes::{
//!     Builder, Dimensions, EyeController, EyeEngine, FrameBuffer, I2cInterface, Mood, Position,
//!     Color,
//! };
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct Eyes;
//! # impl EyeEngine for Eyes {
//! #     fn begin(&mut self, _: u16, _: u16, _: i32) {}
//! #     fn set_mood(&mut self, _: Mood) {}
//! #     fn set_position(&mut self, _: Position) {}
//! #     fn set_width(&mut self, _: u8, _: u8) {}
//! #     fn set_height(&mut self, _: u8, _: u8) {}
//! #     fn set_border_radius(&mut self, _: u8, _: u8) {}
//! #     fn set_space_between(&mut self, _: i32) {}
//! #     fn set_cyclops(&mut self, _: bool) {}
//! #     fn set_autoblinker(&mut self, _: bool, _: u16, _: u16) {}
//! #     fn set_idle_mode(&mut self, _: bool, _: u16, _: u16) {}
//! #     fn set_h_flicker(&mut self, _: bool, _: u8) {}
//! #     fn set_v_flicker(&mut self, _: bool, _: u8) {}
//! #     fn set_curiosity(&mut self, _: bool) {}
//! #     fn set_sweat(&mut self, _: bool) {}
//! #     fn set_display_colors(&mut self, _: Color, _: Color) {}
//! #     fn open(&mut self) {}
//! #     fn close(&mut self) {}
//! #     fn anim_laugh(&mut self) {}
//! #     fn anim_confused(&mut self) {}
//! #     fn update<B>(&mut self, _: u32, _: &mut FrameBuffer<B>) -> bool
//! #     where B: AsRef<[u8]> + AsMut<[u8]> { false }
//! #     fn draw_eyes<B>(&mut self, _: &mut FrameBuffer<B>)
//! #     where B: AsRef<[u8]> + AsMut<[u8]> {}
//! # }
//! # let i2c = MockI2c;
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut eyes = match EyeController::new(I2cInterface::new(i2c), Eyes, [0u8; 1024], config) {
//!     Ok(eyes) => eyes,
//!     Err(_) => return,
//! };
//! if eyes.setup().is_ok() {
//!     eyes.set_mood("HAPPY");
//!     eyes.tick(0);
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Templated host actions
pub mod action;
/// 1-bit palette values
pub mod color;
/// Resolved commands
pub mod command;
/// Controller configuration types and builder
pub mod config;
/// Readiness gate and command dispatch
pub mod controller;
/// Animation engine boundary
pub mod engine;
/// Error types for the controller
pub mod error;
/// Page-packed frame buffer
pub mod framebuffer;
/// Display interface abstraction and SH1106 I2C driver
pub mod interface;
/// SH1106 command bytes
pub mod opcode;
/// Parameter resolution and "not provided" handling
pub mod param;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use action::Action;
pub use color::{Color, Palette};
pub use command::Command;
pub use config::{BusPins, Builder, Config, DEFAULT_ADDRESS, Dimensions, Timing};
pub use controller::{EyeController, Lifecycle};
pub use engine::{EyeEngine, Mood, Position};
pub use error::{BuilderError, Error, MAX_COLUMNS, MAX_ROWS};
pub use framebuffer::FrameBuffer;
pub use interface::{DisplayInterface, I2cInterface, InterfaceError};
pub use param::{Param, SPACING_UNSET, ShapeUpdate};
