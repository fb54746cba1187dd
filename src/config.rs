//! Controller configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default 7-bit I2C address of SH1106 modules
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows, a whole number of 8-row pages)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (RAM is addressed in 8-row pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required frame buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

/// Bus pin assignment (data and clock GPIO numbers)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusPins {
    /// Data line (SDA)
    pub data: u8,
    /// Clock line (SCL)
    pub clock: u8,
}

impl BusPins {
    /// Create a pin assignment
    pub fn new(data: u8, clock: u8) -> Self {
        Self { data, clock }
    }
}

impl Default for BusPins {
    fn default() -> Self {
        Self {
            data: 41,
            clock: 42,
        }
    }
}

/// Interval and random variation of an autonomous behavior, in seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Base interval
    pub interval: u16,
    /// Random variation added on top of the interval
    pub variation: u16,
}

impl Timing {
    /// Create a timing pair
    pub fn new(interval: u16, variation: u16) -> Self {
        Self {
            interval,
            variation,
        }
    }
}

/// Controller configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// I2C address of the display
    pub address: u8,
    /// Bus pin assignment applied before probing the display
    pub bus_pins: BusPins,
    /// Inter-eye spacing handed to the engine at setup
    pub default_spacing: i32,
    /// Autoblink timing used when a command omits it
    pub autoblink: Timing,
    /// Idle wandering timing
    pub idle: Timing,
}

/// Builder for constructing controller configuration
///
/// # Example
///
/// ```
/// use robo_eyes::{Builder, BusPins, Dimensions};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).bus_pins(BusPins::new(21, 22)).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x3C);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// I2C address
    address: u8,
    /// Bus pin assignment
    bus_pins: BusPins,
    /// Inter-eye spacing at setup
    default_spacing: i32,
    /// Autoblink timing
    autoblink: Timing,
    /// Idle wandering timing
    idle: Timing,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            address: DEFAULT_ADDRESS,
            bus_pins: BusPins::default(),
            default_spacing: 30,
            autoblink: Timing::new(1, 4),
            idle: Timing::new(1, 3),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the display's I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the bus pin assignment
    pub fn bus_pins(mut self, pins: BusPins) -> Self {
        self.bus_pins = pins;
        self
    }

    /// Set the inter-eye spacing applied at setup
    pub fn default_spacing(mut self, spacing: i32) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Set the autoblink timing used when a command omits it
    pub fn autoblink(mut self, timing: Timing) -> Self {
        self.autoblink = timing;
        self
    }

    /// Set the idle wandering timing
    pub fn idle(mut self, timing: Timing) -> Self {
        self.idle = timing;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            address: self.address,
            bus_pins: self.bus_pins,
            default_spacing: self.default_spacing,
            autoblink: self.autoblink,
            idle: self.idle,
        })
    }
}
