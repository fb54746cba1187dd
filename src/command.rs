//! Resolved eye commands
//!
//! A [`Command`] is one operation of the host-facing command surface with
//! every parameter already resolved to a concrete value. Commands carry no
//! identity and are consumed by
//! [`EyeController::dispatch`](crate::EyeController::dispatch).
//!
//! ## Command Surface
//!
//! | Name | Parameters |
//! |------|------------|
//! | `set-mood` | mood symbol |
//! | `set-position` | position symbol |
//! | `set-shape` | [`ShapeUpdate`] |
//! | `set-curiosity` | enabled |
//! | `set-sweat` | enabled |
//! | `set-idle-mode` | enabled |
//! | `set-horizontal-flicker` | enabled, amplitude |
//! | `set-vertical-flicker` | enabled, amplitude |
//! | `set-autoblinker` | enabled, interval, variation |
//! | `set-display-colors` | background, foreground |
//! | `open`, `close` | - |
//! | `laugh`, `confused` | - |
//!
//! ## Example
//!
//! ```
//! use robo_eyes::Command;
//!
//! let command = Command::SetHorizontalFlicker {
//!     enabled: true,
//!     amplitude: 2,
//! };
//! assert_eq!(command.name(), "set-horizontal-flicker");
//! ```

use crate::color::Color;
use crate::param::ShapeUpdate;

/// A fully resolved command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Change the eye expression
    SetMood(&'a str),
    /// Change where the eyes look
    SetPosition(&'a str),
    /// Change eye geometry
    SetShape(ShapeUpdate),
    /// Toggle curiosity (outer eye grows when looking sideways)
    SetCuriosity(bool),
    /// Toggle sweat drops
    SetSweat(bool),
    /// Toggle idle wandering
    SetIdleMode(bool),
    /// Toggle horizontal flicker
    SetHorizontalFlicker {
        /// Flicker on or off
        enabled: bool,
        /// Jitter in pixels
        amplitude: u8,
    },
    /// Toggle vertical flicker
    SetVerticalFlicker {
        /// Flicker on or off
        enabled: bool,
        /// Jitter in pixels
        amplitude: u8,
    },
    /// Configure automatic blinking
    SetAutoblinker {
        /// Autoblink on or off
        enabled: bool,
        /// Seconds between blinks, configured default when `None`
        interval: Option<u16>,
        /// Random extra seconds, configured default when `None`
        variation: Option<u16>,
    },
    /// Change the palette
    SetDisplayColors {
        /// Background color
        background: Color,
        /// Eye color
        foreground: Color,
    },
    /// Open the eyes
    Open,
    /// Close the eyes
    Close,
    /// Play the laugh animation
    Laugh,
    /// Play the confused animation
    Confused,
}

impl Command<'_> {
    /// Name of the command on the host surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetMood(_) => "set-mood",
            Self::SetPosition(_) => "set-position",
            Self::SetShape(_) => "set-shape",
            Self::SetCuriosity(_) => "set-curiosity",
            Self::SetSweat(_) => "set-sweat",
            Self::SetIdleMode(_) => "set-idle-mode",
            Self::SetHorizontalFlicker { .. } => "set-horizontal-flicker",
            Self::SetVerticalFlicker { .. } => "set-vertical-flicker",
            Self::SetAutoblinker { .. } => "set-autoblinker",
            Self::SetDisplayColors { .. } => "set-display-colors",
            Self::Open => "open",
            Self::Close => "close",
            Self::Laugh => "laugh",
            Self::Confused => "confused",
        }
    }
}
