//! Command gate and dispatcher
//!
//! [`EyeController`] owns the display interface, the animation engine and
//! the frame buffer. It brings the hardware up once, drops every command
//! that arrives before that succeeded, and turns resolved commands into
//! engine calls.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --setup() ok--> Ready
//!       |
//!       +--setup() failed--> Uninitialized (for the rest of the run)
//! ```
//!
//! ## Redraws
//!
//! Normally frames reach the panel only through [`EyeController::tick`].
//! Turning flicker, curiosity or sweat off, and changing the palette,
//! render and push one frame immediately so the eyes never stay offset
//! until the next tick.

use crate::color::{Color, Palette};
use crate::command::Command;
use crate::config::Config;
use crate::engine::{EyeEngine, Mood, Position};
use crate::error::{BuilderError, Error};
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;
use crate::param::ShapeUpdate;

type SetupResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Hardware not brought up; every command is dropped
    Uninitialized {
        /// Whether setup already ran (and failed)
        setup_attempted: bool,
    },
    /// Hardware up; commands are applied
    Ready,
}

/// Robot-eye controller
///
/// ## Type Parameters
///
/// * `I` - Display interface implementing [`DisplayInterface`]
/// * `E` - Animation engine implementing [`EyeEngine`]
/// * `B` - Frame buffer storage
pub struct EyeController<I, E, B>
where
    I: DisplayInterface,
    E: EyeEngine,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Display the frames are pushed to
    interface: I,
    /// Animation engine
    engine: E,
    /// Frame the engine renders into
    frame: FrameBuffer<B>,
    /// Controller configuration
    config: Config,
    /// Readiness gate
    lifecycle: Lifecycle,
    /// Whether hardware inversion is engaged
    inverted: bool,
}

impl<I, E, B> EyeController<I, E, B>
where
    I: DisplayInterface,
    E: EyeEngine,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create an uninitialized controller
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if `buffer` cannot hold a
    /// frame of `config.dimensions`.
    pub fn new(interface: I, engine: E, buffer: B, config: Config) -> Result<Self, BuilderError> {
        let frame = FrameBuffer::new(buffer, config.dimensions)?;
        Ok(Self {
            interface,
            engine,
            frame,
            config,
            lifecycle: Lifecycle::Uninitialized {
                setup_attempted: false,
            },
            inverted: false,
        })
    }

    /// Bring up the bus, the display and the engine
    ///
    /// Runs at most once. If the display does not answer the failure is
    /// logged, the controller stays uninitialized and every later command
    /// is dropped until the device restarts.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if pin assignment, panel configuration or
    /// the probe failed and `Error::SetupAlreadyAttempted` on any call
    /// after the first.
    pub fn setup(&mut self) -> SetupResult<I> {
        if self.lifecycle
            != (Lifecycle::Uninitialized {
                setup_attempted: false,
            })
        {
            return Err(Error::SetupAlreadyAttempted);
        }
        self.lifecycle = Lifecycle::Uninitialized {
            setup_attempted: true,
        };

        if let Err(e) = self.bring_up_display() {
            log::error!("SH1106 display init failed: {:?}", e);
            return Err(Error::Interface(e));
        }

        let dims = self.config.dimensions;
        self.engine
            .begin(dims.width, dims.height, self.config.default_spacing);
        let blink = self.config.autoblink;
        self.engine
            .set_autoblinker(true, blink.interval, blink.variation);
        let idle = self.config.idle;
        self.engine.set_idle_mode(false, idle.interval, idle.variation);
        self.engine.set_mood(Mood::Default);

        self.lifecycle = Lifecycle::Ready;
        log::info!("robo eyes ready ({}x{})", dims.width, dims.height);
        Ok(())
    }

    fn bring_up_display(&mut self) -> Result<(), I::Error> {
        self.interface.assign_pins(self.config.bus_pins)?;
        self.interface.configure(self.config.dimensions)?;
        // Pins are assigned; the driver must not init the bus again.
        self.interface.probe(self.config.address, false)
    }

    /// Advance the animation; call from the host's main loop
    ///
    /// Does nothing before the controller is ready. The engine decides
    /// whether a frame is due.
    pub fn tick(&mut self, now_ms: u32) {
        if !self.is_ready() {
            return;
        }
        if self.engine.update(now_ms, &mut self.frame) {
            self.push_frame();
        }
    }

    /// Apply a resolved command, or drop it if not ready
    pub fn dispatch(&mut self, command: Command<'_>) {
        if !self.is_ready() {
            log::trace!("dropping {}: display not ready", command.name());
            return;
        }

        match command {
            Command::SetMood(symbol) => self.apply_mood(symbol),
            Command::SetPosition(symbol) => self.apply_position(symbol),
            Command::SetShape(shape) => self.apply_shape(shape),
            Command::SetCuriosity(enabled) => {
                self.engine.set_curiosity(enabled);
                if !enabled {
                    self.redraw();
                }
            }
            Command::SetSweat(enabled) => {
                self.engine.set_sweat(enabled);
                if !enabled {
                    self.redraw();
                }
            }
            Command::SetIdleMode(enabled) => {
                let idle = self.config.idle;
                self.engine
                    .set_idle_mode(enabled, idle.interval, idle.variation);
            }
            Command::SetHorizontalFlicker { enabled, amplitude } => {
                let amplitude = if enabled { amplitude } else { 0 };
                self.engine.set_h_flicker(enabled, amplitude);
                if !enabled {
                    self.redraw();
                }
            }
            Command::SetVerticalFlicker { enabled, amplitude } => {
                let amplitude = if enabled { amplitude } else { 0 };
                self.engine.set_v_flicker(enabled, amplitude);
                if !enabled {
                    self.redraw();
                }
            }
            Command::SetAutoblinker {
                enabled,
                interval,
                variation,
            } => {
                let blink = self.config.autoblink;
                self.engine.set_autoblinker(
                    enabled,
                    interval.unwrap_or(blink.interval),
                    variation.unwrap_or(blink.variation),
                );
            }
            Command::SetDisplayColors {
                background,
                foreground,
            } => self.apply_palette(Palette::new(background, foreground)),
            Command::Open => self.engine.open(),
            Command::Close => self.engine.close(),
            Command::Laugh => self.engine.anim_laugh(),
            Command::Confused => self.engine.anim_confused(),
        }
    }

    fn apply_mood(&mut self, symbol: &str) {
        let mood = Mood::from_symbol(symbol);
        if mood == Mood::Default && symbol != Mood::Default.symbol() {
            log::debug!("unknown mood {:?}, using DEFAULT", symbol);
        }
        self.engine.set_mood(mood);
        log::debug!("mood set to: {}", mood.symbol());
    }

    fn apply_position(&mut self, symbol: &str) {
        let position = Position::from_symbol(symbol);
        if position == Position::Center && symbol != Position::Center.symbol() {
            log::debug!("unknown position {:?}, centering", symbol);
        }
        self.engine.set_position(position);
    }

    fn apply_shape(&mut self, shape: ShapeUpdate) {
        if let Some(width) = shape.width {
            self.engine.set_width(width, width);
        }
        if let Some(height) = shape.height {
            self.engine.set_height(height, height);
        }
        if let Some(radius) = shape.radius {
            self.engine.set_border_radius(radius, radius);
        }
        if let Some(spacing) = shape.spacing {
            self.engine.set_space_between(spacing);
        }
        if let Some(cyclops) = shape.cyclops {
            self.engine.set_cyclops(cyclops);
        }
        log::debug!("shape updated: {:?}", shape);
    }

    fn apply_palette(&mut self, palette: Palette) {
        let invert = palette.needs_hardware_inversion();
        let rendered = match self.interface.set_inverted(invert) {
            Ok(()) => {
                self.inverted = invert;
                palette.engine_palette()
            }
            Err(e) => {
                // Panel mode unknown; render the requested colors in software.
                log::warn!("display inversion failed: {:?}", e);
                self.inverted = false;
                palette
            }
        };
        self.engine
            .set_display_colors(rendered.background, rendered.main);
        self.redraw();
    }

    /// Render and push a frame now, outside the tick cadence
    fn redraw(&mut self) {
        self.engine.draw_eyes(&mut self.frame);
        self.push_frame();
    }

    fn push_frame(&mut self) {
        if let Err(e) = self.interface.push_frame(self.frame.as_bytes()) {
            log::warn!("frame push failed: {:?}", e);
        }
    }

    /// Change the eye expression (`HAPPY`, `ANGRY`, `TIRED`, anything else is default)
    pub fn set_mood(&mut self, mood: &str) {
        self.dispatch(Command::SetMood(mood));
    }

    /// Change where the eyes look (`N`, `NE`, ... `NW`, anything else is center)
    pub fn set_position(&mut self, position: &str) {
        self.dispatch(Command::SetPosition(position));
    }

    /// Change eye geometry; `None` fields keep their current value
    pub fn set_shape(&mut self, shape: ShapeUpdate) {
        self.dispatch(Command::SetShape(shape));
    }

    /// Toggle curiosity
    pub fn set_curiosity(&mut self, enabled: bool) {
        self.dispatch(Command::SetCuriosity(enabled));
    }

    /// Toggle sweat drops
    pub fn set_sweat(&mut self, enabled: bool) {
        self.dispatch(Command::SetSweat(enabled));
    }

    /// Toggle idle wandering
    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.dispatch(Command::SetIdleMode(enabled));
    }

    /// Toggle horizontal flicker; amplitude is forced to 0 when disabled
    pub fn set_horizontal_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.dispatch(Command::SetHorizontalFlicker { enabled, amplitude });
    }

    /// Toggle vertical flicker; amplitude is forced to 0 when disabled
    pub fn set_vertical_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.dispatch(Command::SetVerticalFlicker { enabled, amplitude });
    }

    /// Configure automatic blinking
    pub fn set_autoblinker(&mut self, enabled: bool, interval: Option<u16>, variation: Option<u16>) {
        self.dispatch(Command::SetAutoblinker {
            enabled,
            interval,
            variation,
        });
    }

    /// Change the palette
    pub fn set_display_colors(&mut self, background: Color, foreground: Color) {
        self.dispatch(Command::SetDisplayColors {
            background,
            foreground,
        });
    }

    /// Open the eyes
    pub fn open(&mut self) {
        self.dispatch(Command::Open);
    }

    /// Close the eyes
    pub fn close(&mut self) {
        self.dispatch(Command::Close);
    }

    /// Play the laugh animation
    pub fn laugh(&mut self) {
        self.dispatch(Command::Laugh);
    }

    /// Play the confused animation
    pub fn confused(&mut self) {
        self.dispatch(Command::Confused);
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether commands are being applied
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Whether the panel's hardware inversion is engaged
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The animation engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The display interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// The last rendered frame
    pub fn frame(&self) -> &FrameBuffer<B> {
        &self.frame
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface, the engine and the frame storage
    pub fn release(self) -> (I, E, B) {
        (self.interface, self.engine, self.frame.into_inner())
    }
}
