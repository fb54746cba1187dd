//! Templated host actions
//!
//! An [`Action`] is the unresolved form of a [`Command`]: each parameter
//! may be left out, fixed, or computed from automation state when the
//! action fires. [`Action::play`] checks the readiness gate, resolves
//! every parameter exactly once and hands the result to the controller.
//!
//! Parameters left [`Param::Unset`] fall back as follows:
//!
//! - mood and position: the default member (`DEFAULT`, center)
//! - width, height, radius, spacing, cyclops: keep the current value
//! - enabled flags: `false`
//! - flicker amplitude: 0
//! - blink interval and variation: the configured default
//! - colors: background `Dark`, foreground `Light`
//!
//! ## Example
//!
//! ```
//! use robo_eyes::{Action, Command, Param};
//!
//! let amplitude = || 3u8;
//! let action = Action::SetHorizontalFlicker {
//!     enabled: Param::Literal(true),
//!     amplitude: Param::Computed(&amplitude),
//! };
//! assert_eq!(
//!     action.resolve(),
//!     Command::SetHorizontalFlicker {
//!         enabled: true,
//!         amplitude: 3,
//!     }
//! );
//! ```

use crate::color::Color;
use crate::command::Command;
use crate::controller::EyeController;
use crate::engine::EyeEngine;
use crate::interface::DisplayInterface;
use crate::param::{Param, SPACING_UNSET, ShapeUpdate};

/// A command whose parameters are resolved when it fires
#[derive(Debug)]
pub enum Action<'a> {
    /// Change the eye expression
    SetMood {
        /// Mood symbol
        mood: Param<'a, &'a str>,
    },
    /// Change where the eyes look
    SetPosition {
        /// Compass symbol
        position: Param<'a, &'a str>,
    },
    /// Change eye geometry; negative sizes and [`SPACING_UNSET`] mean "keep"
    SetShape {
        /// Eye width
        width: Param<'a, i32>,
        /// Eye height
        height: Param<'a, i32>,
        /// Corner radius
        radius: Param<'a, i32>,
        /// Gap between the eyes
        spacing: Param<'a, i32>,
        /// Single-eye mode
        cyclops: Param<'a, bool>,
    },
    /// Toggle curiosity
    SetCuriosity {
        /// Curiosity on or off
        enabled: Param<'a, bool>,
    },
    /// Toggle sweat drops
    SetSweat {
        /// Sweat on or off
        enabled: Param<'a, bool>,
    },
    /// Toggle idle wandering
    SetIdleMode {
        /// Idle mode on or off
        enabled: Param<'a, bool>,
    },
    /// Toggle horizontal flicker
    SetHorizontalFlicker {
        /// Flicker on or off
        enabled: Param<'a, bool>,
        /// Jitter in pixels
        amplitude: Param<'a, u8>,
    },
    /// Toggle vertical flicker
    SetVerticalFlicker {
        /// Flicker on or off
        enabled: Param<'a, bool>,
        /// Jitter in pixels
        amplitude: Param<'a, u8>,
    },
    /// Configure automatic blinking
    SetAutoblinker {
        /// Autoblink on or off
        enabled: Param<'a, bool>,
        /// Seconds between blinks
        interval: Param<'a, u16>,
        /// Random extra seconds
        variation: Param<'a, u16>,
    },
    /// Change the palette
    SetDisplayColors {
        /// Background color
        background: Param<'a, Color>,
        /// Eye color
        foreground: Param<'a, Color>,
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

impl<'a> Action<'a> {
    /// Resolve every parameter once
    pub fn resolve(&self) -> Command<'a> {
        match self {
            Self::SetMood { mood } => Command::SetMood(mood.resolve_or("")),
            Self::SetPosition { position } => Command::SetPosition(position.resolve_or("")),
            Self::SetShape {
                width,
                height,
                radius,
                spacing,
                cyclops,
            } => Command::SetShape(ShapeUpdate::from_sentinels(
                width.resolve_or(-1),
                height.resolve_or(-1),
                radius.resolve_or(-1),
                spacing.resolve_or(SPACING_UNSET),
                cyclops.resolve(),
            )),
            Self::SetCuriosity { enabled } => Command::SetCuriosity(enabled.resolve_or(false)),
            Self::SetSweat { enabled } => Command::SetSweat(enabled.resolve_or(false)),
            Self::SetIdleMode { enabled } => Command::SetIdleMode(enabled.resolve_or(false)),
            Self::SetHorizontalFlicker { enabled, amplitude } => Command::SetHorizontalFlicker {
                enabled: enabled.resolve_or(false),
                amplitude: amplitude.resolve_or(0),
            },
            Self::SetVerticalFlicker { enabled, amplitude } => Command::SetVerticalFlicker {
                enabled: enabled.resolve_or(false),
                amplitude: amplitude.resolve_or(0),
            },
            Self::SetAutoblinker {
                enabled,
                interval,
                variation,
            } => Command::SetAutoblinker {
                enabled: enabled.resolve_or(false),
                interval: interval.resolve(),
                variation: variation.resolve(),
            },
            Self::SetDisplayColors {
                background,
                foreground,
            } => Command::SetDisplayColors {
                background: background.resolve_or(Color::Dark),
                foreground: foreground.resolve_or(Color::Light),
            },
            Self::Open => Command::Open,
            Self::Close => Command::Close,
            Self::Laugh => Command::Laugh,
            Self::Confused => Command::Confused,
        }
    }

    /// Fire the action against `controller`
    ///
    /// Nothing is resolved while the controller is not ready, so computed
    /// parameters are not evaluated for dropped actions.
    pub fn play<I, E, B>(&self, controller: &mut EyeController<I, E, B>)
    where
        I: DisplayInterface,
        E: EyeEngine,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        if !controller.is_ready() {
            log::trace!("action dropped: display not ready");
            return;
        }
        controller.dispatch(self.resolve());
    }
}
