//! Eye-animation engine boundary
//!
//! The engine owns eye rendering and all autonomous timing (blink
//! intervals, flicker jitter, idle drift). The controller only changes the
//! parameters the engine renders with and tells it when to draw.
//!
//! Symbolic moods and positions arrive as strings from the host. The
//! lookups here are total: anything outside the known set maps to the
//! default member.
//!
//! ## Example
//!
//! ```
//! use robo_eyes::{Mood, Position};
//!
//! assert_eq!(Mood::from_symbol("HAPPY"), Mood::Happy);
//! assert_eq!(Mood::from_symbol("sleepy"), Mood::Default);
//! assert_eq!(Position::from_symbol("SE"), Position::SouthEast);
//! assert_eq!(Position::from_symbol("up"), Position::Center);
//! ```

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Eye expression
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mood {
    /// Neutral eyes
    #[default]
    Default,
    /// Lower eyelids raised
    Happy,
    /// Inner eyelids slanted down
    Angry,
    /// Outer eyelids drooping
    Tired,
}

impl Mood {
    /// Map a host symbol to a mood, falling back to [`Mood::Default`]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "HAPPY" => Self::Happy,
            "ANGRY" => Self::Angry,
            "TIRED" => Self::Tired,
            _ => Self::Default,
        }
    }

    /// Host symbol of this mood
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Happy => "HAPPY",
            Self::Angry => "ANGRY",
            Self::Tired => "TIRED",
        }
    }
}

/// Where the eyes look, as a compass direction on the display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// Middle of the display
    #[default]
    Center,
    /// Top center
    North,
    /// Top right
    NorthEast,
    /// Middle right
    East,
    /// Bottom right
    SouthEast,
    /// Bottom center
    South,
    /// Bottom left
    SouthWest,
    /// Middle left
    West,
    /// Top left
    NorthWest,
}

impl Position {
    /// Map a host symbol to a position, falling back to [`Position::Center`]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "N" => Self::North,
            "NE" => Self::NorthEast,
            "E" => Self::East,
            "SE" => Self::SouthEast,
            "S" => Self::South,
            "SW" => Self::SouthWest,
            "W" => Self::West,
            "NW" => Self::NorthWest,
            _ => Self::Center,
        }
    }

    /// Host symbol of this position
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Center => "DEFAULT",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

/// Trait for the eye-animation engine
///
/// One instance is owned by the controller and bound to its
/// [`FrameBuffer`]. Implementations render with whatever they like.
#[cfg_attr(
    feature = "graphics",
    doc = "With the `graphics` feature the frame buffer is an embedded-graphics [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)."
)]
///
/// Geometry setters take separate left and right values; the controller
/// always passes the same value for both eyes.
pub trait EyeEngine {
    /// Initialize for a display of `width` x `height` pixels
    fn begin(&mut self, width: u16, height: u16, spacing: i32);

    /// Set the eye expression
    fn set_mood(&mut self, mood: Mood);

    /// Set where the eyes look
    fn set_position(&mut self, position: Position);

    /// Set eye widths
    fn set_width(&mut self, left: u8, right: u8);

    /// Set eye heights
    fn set_height(&mut self, left: u8, right: u8);

    /// Set eye corner radii
    fn set_border_radius(&mut self, left: u8, right: u8);

    /// Set the horizontal gap between the eyes (may be negative)
    fn set_space_between(&mut self, space: i32);

    /// Render a single eye instead of two
    fn set_cyclops(&mut self, enabled: bool);

    /// Blink automatically every `interval` + random(`variation`) seconds
    fn set_autoblinker(&mut self, enabled: bool, interval: u16, variation: u16);

    /// Wander to random positions every `interval` + random(`variation`) seconds
    fn set_idle_mode(&mut self, enabled: bool, interval: u16, variation: u16);

    /// Jitter the eyes horizontally by up to `amplitude` pixels
    fn set_h_flicker(&mut self, enabled: bool, amplitude: u8);

    /// Jitter the eyes vertically by up to `amplitude` pixels
    fn set_v_flicker(&mut self, enabled: bool, amplitude: u8);

    /// Enlarge the outer eye when looking sideways
    fn set_curiosity(&mut self, enabled: bool);

    /// Draw animated sweat drops
    fn set_sweat(&mut self, enabled: bool);

    /// Set the software palette
    fn set_display_colors(&mut self, background: Color, main: Color);

    /// Start opening the eyes
    fn open(&mut self);

    /// Start closing the eyes
    fn close(&mut self);

    /// Play the laugh animation
    fn anim_laugh(&mut self);

    /// Play the confused animation
    fn anim_confused(&mut self);

    /// Advance the animation to `now_ms`
    ///
    /// Returns `true` when a new frame was rendered into `frame`. The
    /// engine decides its own frame cadence and may return `false`.
    fn update<B>(&mut self, now_ms: u32, frame: &mut FrameBuffer<B>) -> bool
    where
        B: AsRef<[u8]> + AsMut<[u8]>;

    /// Render the current state into `frame` immediately
    fn draw_eyes<B>(&mut self, frame: &mut FrameBuffer<B>)
    where
        B: AsRef<[u8]> + AsMut<[u8]>;
}
