//! Recording doubles for the engine and display boundaries

use alloc::vec::Vec;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::color::Color;
use crate::config::{BusPins, Builder, Config, Dimensions};
use crate::engine::{EyeEngine, Mood, Position};
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

/// Milliseconds between frames rendered by [`RecordingEngine::update`]
pub const FRAME_INTERVAL_MS: u32 = 20;

/// Engine that stores every parameter it is given
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingEngine {
    pub begun: Option<(u16, u16, i32)>,
    pub mood: Mood,
    pub position: Position,
    pub width: (u8, u8),
    pub height: (u8, u8),
    pub radius: (u8, u8),
    pub spacing: i32,
    pub cyclops: bool,
    pub autoblinker: (bool, u16, u16),
    pub idle: (bool, u16, u16),
    pub h_flicker: (bool, u8),
    pub v_flicker: (bool, u8),
    pub curiosity: bool,
    pub sweat: bool,
    pub colors: (Color, Color),
    pub opens: u32,
    pub closes: u32,
    pub laughs: u32,
    pub confusions: u32,
    pub draws: u32,
    pub next_frame_ms: u32,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            begun: None,
            mood: Mood::Default,
            position: Position::Center,
            width: (36, 36),
            height: (36, 36),
            radius: (8, 8),
            spacing: 10,
            cyclops: false,
            autoblinker: (false, 0, 0),
            idle: (false, 0, 0),
            h_flicker: (false, 0),
            v_flicker: (false, 0),
            curiosity: false,
            sweat: false,
            colors: (Color::Dark, Color::Light),
            opens: 0,
            closes: 0,
            laughs: 0,
            confusions: 0,
            draws: 0,
            next_frame_ms: 0,
        }
    }
}

impl EyeEngine for RecordingEngine {
    fn begin(&mut self, width: u16, height: u16, spacing: i32) {
        self.begun = Some((width, height, spacing));
        self.spacing = spacing;
    }

    fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_width(&mut self, left: u8, right: u8) {
        self.width = (left, right);
    }

    fn set_height(&mut self, left: u8, right: u8) {
        self.height = (left, right);
    }

    fn set_border_radius(&mut self, left: u8, right: u8) {
        self.radius = (left, right);
    }

    fn set_space_between(&mut self, space: i32) {
        self.spacing = space;
    }

    fn set_cyclops(&mut self, enabled: bool) {
        self.cyclops = enabled;
    }

    fn set_autoblinker(&mut self, enabled: bool, interval: u16, variation: u16) {
        self.autoblinker = (enabled, interval, variation);
    }

    fn set_idle_mode(&mut self, enabled: bool, interval: u16, variation: u16) {
        self.idle = (enabled, interval, variation);
    }

    fn set_h_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.h_flicker = (enabled, amplitude);
    }

    fn set_v_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.v_flicker = (enabled, amplitude);
    }

    fn set_curiosity(&mut self, enabled: bool) {
        self.curiosity = enabled;
    }

    fn set_sweat(&mut self, enabled: bool) {
        self.sweat = enabled;
    }

    fn set_display_colors(&mut self, background: Color, main: Color) {
        self.colors = (background, main);
    }

    fn open(&mut self) {
        self.opens += 1;
    }

    fn close(&mut self) {
        self.closes += 1;
    }

    fn anim_laugh(&mut self) {
        self.laughs += 1;
    }

    fn anim_confused(&mut self) {
        self.confusions += 1;
    }

    fn update<B>(&mut self, now_ms: u32, frame: &mut FrameBuffer<B>) -> bool
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        if now_ms < self.next_frame_ms {
            return false;
        }
        self.next_frame_ms = now_ms + FRAME_INTERVAL_MS;
        self.draw_eyes(frame);
        true
    }

    fn draw_eyes<B>(&mut self, frame: &mut FrameBuffer<B>)
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.draws += 1;
        frame.clear(self.colors.0);
        frame.set_pixel(0, 0, self.colors.1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
    Bus,
}

/// Display interface that records every call
#[derive(Debug, Default)]
pub struct RecordingInterface {
    pub pins: Option<BusPins>,
    pub probes: Vec<(u8, bool)>,
    pub probe_fails: bool,
    pub push_fails: bool,
    pub invert_fails: bool,
    pub dimensions: Option<Dimensions>,
    pub pushes: usize,
    pub last_frame: Vec<u8>,
    pub inverted: Option<bool>,
    /// Call order, as operation names
    pub calls: Vec<&'static str>,
}

impl RecordingInterface {
    pub fn failing_probe() -> Self {
        Self {
            probe_fails: true,
            ..Self::default()
        }
    }
}

impl DisplayInterface for RecordingInterface {
    type Error = MockError;

    fn assign_pins(&mut self, pins: BusPins) -> Result<(), Self::Error> {
        self.calls.push("assign_pins");
        self.pins = Some(pins);
        Ok(())
    }

    fn configure(&mut self, dimensions: Dimensions) -> Result<(), Self::Error> {
        self.calls.push("configure");
        self.dimensions = Some(dimensions);
        Ok(())
    }

    fn probe(&mut self, address: u8, init_bus: bool) -> Result<(), Self::Error> {
        self.calls.push("probe");
        self.probes.push((address, init_bus));
        if self.probe_fails {
            Err(MockError::Nack)
        } else {
            Ok(())
        }
    }

    fn push_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.calls.push("push_frame");
        if self.push_fails {
            return Err(MockError::Bus);
        }
        self.pushes += 1;
        self.last_frame = frame.to_vec();
        Ok(())
    }

    fn set_inverted(&mut self, inverted: bool) -> Result<(), Self::Error> {
        self.calls.push("set_inverted");
        if self.invert_fails {
            return Err(MockError::Bus);
        }
        self.inverted = Some(inverted);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// I2C bus that records each transaction as (address, concatenated bytes)
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub nack: bool,
}

impl RecordingBus {
    pub fn nacking() -> Self {
        Self {
            nack: true,
            ..Self::default()
        }
    }
}

impl ErrorType for RecordingBus {
    type Error = BusError;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.nack {
            return Err(BusError);
        }
        let mut bytes = Vec::new();
        for op in operations.iter() {
            if let Operation::Write(data) = op {
                bytes.extend_from_slice(data);
            }
        }
        self.writes.push((address, bytes));
        Ok(())
    }
}

/// 128x64 configuration with defaults
pub fn test_config() -> Config {
    Builder::new()
        .dimensions(Dimensions::new(128, 64).unwrap())
        .build()
        .unwrap()
}
