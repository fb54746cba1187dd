//! Monochrome palette values
//!
//! This module defines the [`Color`] enum for the two states a pixel of a
//! monochrome OLED can take, and the [`Palette`] pairing used by the
//! display-colors command.
//!
//! ## Color Representation
//!
//! The SH1106 frame buffer packs 8 vertical pixels per byte. A set bit
//! lights the pixel.
//!
//! | Color | Raw bit | Fill byte |
//! |-------|---------|-----------|
//! | Dark  | 0       | 0x00      |
//! | Light | 1       | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use robo_eyes::Color;
//!
//! assert_eq!(Color::from_bit(0), Color::Dark);
//! assert_eq!(Color::from_bit(1), Color::Light);
//! assert_eq!(Color::Light.fill_byte(), 0xFF);
//! ```

/// Monochrome pixel state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Pixel off
    #[default]
    Dark,
    /// Pixel lit
    Light,
}

impl Color {
    /// Map a raw 1-bit value to a color
    ///
    /// Zero is [`Color::Dark`]; any other value is [`Color::Light`].
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Self::Dark } else { Self::Light }
    }

    /// The raw 1-bit value of this color
    pub fn bit(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }

    /// Byte value that fills 8 vertical pixels with this color
    ///
    /// ```
    /// use robo_eyes::Color;
    ///
    /// assert_eq!(Color::Dark.fill_byte(), 0x00);
    /// assert_eq!(Color::Light.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Dark => 0x00,
            Self::Light => 0xFF,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Dark,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Light,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Self::Off,
            Color::Light => Self::On,
        }
    }
}

/// Background/foreground pairing requested by the display-colors command
///
/// The engine cannot render a light background with dark eyes without
/// leaving a stray border, so that pairing is rendered normally and the
/// panel's native inversion flips it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Background color
    pub background: Color,
    /// Foreground (eye) color
    pub main: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Dark,
            main: Color::Light,
        }
    }
}

impl Palette {
    /// Create a palette from a background and a main color
    pub fn new(background: Color, main: Color) -> Self {
        Self { background, main }
    }

    /// Whether this pairing needs the panel's hardware inversion
    pub fn needs_hardware_inversion(self) -> bool {
        self.background == Color::Light && self.main == Color::Dark
    }

    /// Palette handed to the engine after hardware inversion is accounted for
    ///
    /// ```
    /// use robo_eyes::{Color, Palette};
    ///
    /// let inverted = Palette::new(Color::Light, Color::Dark);
    /// assert_eq!(inverted.engine_palette(), Palette::default());
    ///
    /// let solid = Palette::new(Color::Light, Color::Light);
    /// assert_eq!(solid.engine_palette(), solid);
    /// ```
    pub fn engine_palette(self) -> Self {
        if self.needs_hardware_inversion() {
            Self::default()
        } else {
            self
        }
    }
}
